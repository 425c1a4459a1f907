//! # critcrate
//!
//! Criteria-driven query filtering for Sea-ORM.
//!
//! A [`CriteriaTable`] maps columns of a criteria type to predicate factories.
//! Given one criteria value, the table folds every column's contribution into a
//! single optional [`Condition`](sea_orm::Condition), which the combinators in
//! [`filtering`] attach to Sea-ORM queries or raw `sea_query` statements.
//!
//! Any Sea-ORM `ActiveModel` is a criteria type out of the box. Plain structs
//! implement [`CriteriaEntity`] by hand, and `#[derive(DeriveCriteria)]`
//! declares a table from field attributes.
//!
//! ```rust,ignore
//! use critcrate::{CriteriaFilterExt, CriteriaTable, DeriveCriteria};
//!
//! #[derive(Clone, Debug, PartialEq, DeriveEntityModel, DeriveCriteria)]
//! #[sea_orm(table_name = "todos")]
//! pub struct Model {
//!     #[sea_orm(primary_key)]
//!     pub id: i32,
//!     #[criteria(like = "contains")]
//!     pub title: String,
//!     #[criteria(gte, lte)]
//!     pub priority: i32,
//! }
//!
//! let table = CriteriaTable::<ActiveModel>::declare()?;
//! let todos = Entity::find().filter_by(&table, &criteria)?.all(&db).await?;
//! ```

pub mod core;
pub mod errors;
pub mod filtering;

pub use crate::core::{
    Binding, ConditionBuilder, CriteriaEntity, CriteriaSchema, CriteriaTable, PredicateFactory,
    bind, combine_optional_and,
};
pub use errors::CriteriaError;
pub use filtering::{
    CriteriaFilterExt, CriteriaWhereExt, FilterOperator, LikePattern, filter_by, filter_by_or,
    filter_by_or_with, filter_by_with, where_by, where_by_or, where_by_or_with, where_by_with,
};

#[cfg(feature = "derive")]
pub use critcrate_derive::DeriveCriteria;

// Used by code generated from DeriveCriteria
#[doc(hidden)]
pub use sea_orm;
