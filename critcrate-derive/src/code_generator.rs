use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields};

use crate::attribute_parser::{parse_criteria_meta, parse_field_attrs, sea_orm_enum_name};
use crate::field_analyzer::{column_variant, criteria_value_type, is_primitive};
use crate::structs::CriteriaFieldAttr;

pub(crate) fn expand_derive_criteria(input: &DeriveInput) -> Result<TokenStream, syn::Error> {
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input.ident,
                    "DeriveCriteria only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "DeriveCriteria can only be derived for structs",
            ));
        }
    };

    let meta = parse_criteria_meta(&input.attrs)?;
    let active_model = meta
        .active_model
        .map_or_else(|| quote! { ActiveModel }, |ty| quote! { #ty });
    let column = meta
        .column
        .map_or_else(|| quote! { Column }, |path| quote! { #path });

    let mut registrations = Vec::new();
    for field in fields {
        let Some(ident) = &field.ident else { continue };
        let attrs = parse_field_attrs(field)?;
        if attrs.is_empty() {
            continue;
        }

        let variant = column_variant(ident, sea_orm_enum_name(field));
        let column_name = quote! { ::critcrate::sea_orm::IdenStatic::as_str(&#column::#variant) };
        let value_type = criteria_value_type(field);

        for attr in &attrs {
            if attr.like.is_some() && is_primitive(value_type) {
                return Err(syn::Error::new_spanned(
                    value_type,
                    format!("`like` needs a string field, found `{}`", quote!(#value_type)),
                ));
            }
            registrations.extend(field_registrations(attr, &column_name, value_type));
        }
    }

    Ok(quote! {
        impl ::critcrate::CriteriaSchema for #active_model {
            #[allow(unused_variables)]
            fn declare(
                table: &mut ::critcrate::CriteriaTable<Self>,
            ) -> ::core::result::Result<(), ::critcrate::CriteriaError> {
                #(#registrations)*
                ::core::result::Result::Ok(())
            }
        }
    })
}

fn field_registrations(
    attr: &CriteriaFieldAttr,
    column_name: &TokenStream,
    value_type: &syn::Type,
) -> Vec<TokenStream> {
    let mut out = Vec::new();

    for comparison in &attr.comparisons {
        let operator = comparison.to_tokens();
        out.push(match &attr.default {
            Some(default) => quote! {
                table.compare_or::<#value_type>(
                    #column_name,
                    #operator,
                    ::core::convert::Into::<#value_type>::into(#default),
                )?;
            },
            None => quote! {
                table.compare::<#value_type>(#column_name, #operator)?;
            },
        });
    }

    if let Some(like) = attr.like {
        let pattern = like.to_tokens();
        out.push(quote! {
            table.like_as::<#value_type>(#column_name, #pattern)?;
        });
    }

    out
}
