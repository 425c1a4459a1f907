mod attribute_parser;
mod code_generator;
mod field_analyzer;
mod structs;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Declares a criteria table for a Sea-ORM entity.
///
/// Derive it on the entity's `Model` next to `DeriveEntityModel`. Annotated
/// fields register predicate factories; the macro implements
/// `critcrate::CriteriaSchema` for the generated `ActiveModel`, so the table is
/// built with `CriteriaTable::<ActiveModel>::declare()`.
///
/// ## Field attributes
///
/// - `#[criteria(eq)]`, `neq`, `gt`, `gte`, `lt`, `lte`: compare the column
///   against the criteria value when it is set
/// - `#[criteria(like = "prefix")]` (or `"suffix"`, `"contains"`, `"exact"`):
///   string `LIKE` match
/// - `#[criteria(eq, default = false)]`: compare against `default` when the
///   criteria value is unset
///
/// Several operators in one attribute, or several attributes on one field,
/// all apply and are combined with AND.
///
/// ## Struct attributes
///
/// - `#[criteria(active_model = "path::ActiveModel")]`
/// - `#[criteria(column = "path::Column")]`
///
/// ```rust,ignore
/// #[derive(Clone, Debug, PartialEq, DeriveEntityModel, DeriveCriteria)]
/// #[sea_orm(table_name = "todos")]
/// pub struct Model {
///     #[sea_orm(primary_key)]
///     pub id: i32,
///     #[criteria(like = "contains")]
///     pub title: String,
///     #[criteria(gte, lte)]
///     pub priority: i32,
///     #[criteria(eq, default = false)]
///     pub completed: bool,
/// }
/// ```
#[proc_macro_derive(DeriveCriteria, attributes(criteria))]
pub fn derive_criteria(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    code_generator::expand_derive_criteria(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
