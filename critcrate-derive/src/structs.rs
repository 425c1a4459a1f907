use proc_macro2::TokenStream;
use quote::quote;

/// Struct-level `#[criteria(...)]` options.
#[derive(Default)]
pub(crate) struct CriteriaMeta {
    pub active_model: Option<syn::Type>,
    pub column: Option<syn::Path>,
}

/// One field-level `#[criteria(...)]` attribute.
#[derive(Default)]
pub(crate) struct CriteriaFieldAttr {
    pub comparisons: Vec<Comparison>,
    pub like: Option<LikeKind>,
    pub default: Option<syn::Expr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Comparison {
    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl Comparison {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "eq" => Some(Self::Eq),
            "neq" => Some(Self::Neq),
            "gt" => Some(Self::Gt),
            "gte" => Some(Self::Gte),
            "lt" => Some(Self::Lt),
            "lte" => Some(Self::Lte),
            _ => None,
        }
    }

    pub fn to_tokens(self) -> TokenStream {
        match self {
            Self::Eq => quote! { ::critcrate::FilterOperator::Eq },
            Self::Neq => quote! { ::critcrate::FilterOperator::Neq },
            Self::Gt => quote! { ::critcrate::FilterOperator::Gt },
            Self::Gte => quote! { ::critcrate::FilterOperator::Gte },
            Self::Lt => quote! { ::critcrate::FilterOperator::Lt },
            Self::Lte => quote! { ::critcrate::FilterOperator::Lte },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LikeKind {
    Exact,
    Prefix,
    Suffix,
    Contains,
}

impl LikeKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "exact" => Some(Self::Exact),
            "prefix" => Some(Self::Prefix),
            "suffix" => Some(Self::Suffix),
            "contains" => Some(Self::Contains),
            _ => None,
        }
    }

    pub fn to_tokens(self) -> TokenStream {
        match self {
            Self::Exact => quote! { ::critcrate::LikePattern::Exact },
            Self::Prefix => quote! { ::critcrate::LikePattern::Prefix },
            Self::Suffix => quote! { ::critcrate::LikePattern::Suffix },
            Self::Contains => quote! { ::critcrate::LikePattern::Contains },
        }
    }
}
