use syn::parse::Parser;
use syn::{Lit, Meta, punctuated::Punctuated, token::Comma};

use super::structs::{CriteriaFieldAttr, CriteriaMeta, Comparison, LikeKind};

/// Parse a `#[criteria(...)]` or `#[sea_orm(...)]` attribute into its items.
fn attr_items(attr: &syn::Attribute) -> Result<Punctuated<Meta, Comma>, syn::Error> {
    match &attr.meta {
        Meta::List(meta_list) => {
            Punctuated::<Meta, Comma>::parse_terminated.parse2(meta_list.tokens.clone())
        }
        other => Err(syn::Error::new_spanned(
            other,
            "expected a list, e.g. #[criteria(eq)]",
        )),
    }
}

fn string_value(nv: &syn::MetaNameValue) -> Result<syn::LitStr, syn::Error> {
    if let syn::Expr::Lit(expr_lit) = &nv.value
        && let Lit::Str(s) = &expr_lit.lit
    {
        return Ok(s.clone());
    }
    Err(syn::Error::new_spanned(&nv.value, "expected a string literal"))
}

/// Parses struct-level `#[criteria(active_model = "...", column = "...")]`.
pub(crate) fn parse_criteria_meta(attrs: &[syn::Attribute]) -> Result<CriteriaMeta, syn::Error> {
    let mut meta = CriteriaMeta::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("criteria")) {
        for item in attr_items(attr)? {
            match item {
                Meta::NameValue(nv) if nv.path.is_ident("active_model") => {
                    meta.active_model = Some(string_value(&nv)?.parse()?);
                }
                Meta::NameValue(nv) if nv.path.is_ident("column") => {
                    meta.column = Some(string_value(&nv)?.parse()?);
                }
                other => {
                    return Err(syn::Error::new_spanned(
                        other,
                        "unknown struct attribute, expected `active_model` or `column`",
                    ));
                }
            }
        }
    }
    Ok(meta)
}

/// Parses every `#[criteria(...)]` on a field. Each attribute becomes one entry.
pub(crate) fn parse_field_attrs(field: &syn::Field) -> Result<Vec<CriteriaFieldAttr>, syn::Error> {
    field
        .attrs
        .iter()
        .filter(|attr| attr.path().is_ident("criteria"))
        .map(parse_field_attr)
        .collect()
}

fn parse_field_attr(attr: &syn::Attribute) -> Result<CriteriaFieldAttr, syn::Error> {
    let mut parsed = CriteriaFieldAttr::default();

    for item in attr_items(attr)? {
        match item {
            Meta::Path(path) => {
                let Some(comparison) = path
                    .get_ident()
                    .and_then(|ident| Comparison::from_name(&ident.to_string()))
                else {
                    return Err(syn::Error::new_spanned(
                        path,
                        "unknown criteria operator, expected one of eq, neq, gt, gte, lt, lte",
                    ));
                };
                parsed.comparisons.push(comparison);
            }
            Meta::NameValue(nv) if nv.path.is_ident("like") => {
                let pattern = string_value(&nv)?;
                let Some(kind) = LikeKind::from_name(&pattern.value()) else {
                    return Err(syn::Error::new_spanned(
                        pattern,
                        "unknown like pattern, expected prefix, suffix, contains or exact",
                    ));
                };
                parsed.like = Some(kind);
            }
            Meta::NameValue(nv) if nv.path.is_ident("default") => {
                parsed.default = Some(nv.value);
            }
            other => {
                return Err(syn::Error::new_spanned(other, "unknown criteria attribute"));
            }
        }
    }

    if parsed.comparisons.is_empty() && parsed.like.is_none() {
        return Err(syn::Error::new_spanned(
            attr,
            "criteria attribute registers nothing, add an operator or `like`",
        ));
    }
    if parsed.default.is_some() && parsed.like.is_some() {
        return Err(syn::Error::new_spanned(
            attr,
            "`default` cannot be combined with `like`, put the comparison in its own attribute",
        ));
    }
    if parsed.default.is_some() && parsed.comparisons.is_empty() {
        return Err(syn::Error::new_spanned(
            attr,
            "`default` needs a comparison operator in the same attribute",
        ));
    }
    Ok(parsed)
}

/// Reads `enum_name = "..."` from the field's `#[sea_orm(...)]`, if present.
/// Attributes that do not parse as metas are left to Sea-ORM to report.
pub(crate) fn sea_orm_enum_name(field: &syn::Field) -> Option<String> {
    field
        .attrs
        .iter()
        .filter(|attr| attr.path().is_ident("sea_orm"))
        .filter_map(|attr| attr_items(attr).ok())
        .flatten()
        .find_map(|item| match item {
            Meta::NameValue(nv) if nv.path.is_ident("enum_name") => {
                string_value(&nv).ok().map(|s| s.value())
            }
            _ => None,
        })
}
