//! # Applying Criteria
//!
//! This module turns a populated [`CriteriaTable`](crate::CriteriaTable) and a
//! criteria entity into a filtered query.
//!
//! ## Main Components
//!
//! - **Combinators**: [`filter_by`], [`filter_by_or`], [`where_by`], [`where_by_or`]
//!   and their `*_with` variants taking an `and_then` callback
//! - **Extension traits**: [`CriteriaFilterExt`] for Sea-ORM queries,
//!   [`CriteriaWhereExt`] for `sea_query` statements
//! - **Operators**: [`FilterOperator`] and [`LikePattern`] back the
//!   `compare`, `compare_or` and `like` registration helpers
//!
//! ## Example
//!
//! ```rust,ignore
//! use critcrate::{CriteriaFilterExt, CriteriaTable, FilterOperator, LikePattern};
//! use sea_orm::{ActiveValue::Set, EntityTrait};
//!
//! let mut table = CriteriaTable::<todo::ActiveModel>::new();
//! table
//!     .like("title", LikePattern::Contains)?
//!     .compare::<i32>("priority", FilterOperator::Gte)?;
//!
//! let criteria = todo::ActiveModel {
//!     priority: Set(3),
//!     ..Default::default()
//! };
//!
//! // SELECT ... WHERE "todos"."priority" >= 3
//! let urgent = todo::Entity::find()
//!     .filter_by(&table, &criteria)?
//!     .all(&db)
//!     .await?;
//! ```
//!
//! Unset criteria fields contribute nothing. Criteria with no set fields leave
//! the query unfiltered.

pub mod combinators;
pub mod operators;

// Re-export commonly used items
pub use combinators::{
    CriteriaFilterExt, CriteriaWhereExt, filter_by, filter_by_or, filter_by_or_with,
    filter_by_with, where_by, where_by_or, where_by_or_with, where_by_with,
};
pub use operators::{FilterOperator, LikePattern};
