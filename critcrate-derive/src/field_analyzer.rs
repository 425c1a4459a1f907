use heck::ToUpperCamelCase;

/// Returns the `T` of an `Option<T>` field type (including `std::option::Option<T>`).
pub(crate) fn option_inner_type(ty: &syn::Type) -> Option<&syn::Type> {
    if let syn::Type::Path(type_path) = ty
        && let Some(last_seg) = type_path.path.segments.last()
        && last_seg.ident == "Option"
        && let syn::PathArguments::AngleBracketed(args) = &last_seg.arguments
        && let Some(syn::GenericArgument::Type(inner)) = args.args.first()
    {
        return Some(inner);
    }
    None
}

/// The type criteria values of this field are compared as.
///
/// Nullable columns (`Option<T>`) compare as `T`.
pub(crate) fn criteria_value_type(field: &syn::Field) -> &syn::Type {
    option_inner_type(&field.ty).unwrap_or(&field.ty)
}

/// True for numeric, `bool` and `char` types, which can never be read as a string.
pub(crate) fn is_primitive(ty: &syn::Type) -> bool {
    const PRIMITIVES: &[&str] = &[
        "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize",
        "f32", "f64", "bool", "char",
    ];
    if let syn::Type::Path(type_path) = ty
        && type_path.qself.is_none()
        && let Some(ident) = type_path.path.get_ident()
    {
        return PRIMITIVES.iter().any(|name| ident == name);
    }
    false
}

/// Name of the Sea-ORM `Column` variant generated for a field.
pub(crate) fn column_variant(field_ident: &syn::Ident, enum_name: Option<String>) -> syn::Ident {
    let name = enum_name.unwrap_or_else(|| {
        let raw = field_ident.to_string();
        raw.trim_start_matches("r#").to_upper_camel_case()
    });
    syn::Ident::new(&name, field_ident.span())
}
