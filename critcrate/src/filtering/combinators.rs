//! Applying criteria to queries.
//!
//! Two target shapes are supported:
//!
//! - **Sequence-shaped**: anything implementing Sea-ORM's [`QueryFilter`]
//!   (`Select<E>`, `UpdateMany<E>`, `DeleteMany<E>`, ...). The condition is
//!   attached with [`QueryFilter::filter`].
//! - **Query-shaped**: raw `sea_query` statements implementing
//!   [`ConditionalStatement`] (`SelectStatement`, `UpdateStatement`,
//!   `DeleteStatement`). The condition is attached with
//!   [`ConditionalStatement::cond_where`].
//!
//! Each shape has two contracts. The `*_by` forms only act when the table
//! derives a condition, and their `and_then` callback must return a condition.
//! The `*_by_or` forms always call `and_then` with the optional condition and
//! attach whatever it returns, so the callback can add a condition to empty
//! criteria or suppress a derived one.
//!
//! When nothing is attached the target is returned untouched: no additional
//! restriction, not an empty result.

use sea_orm::{
    Condition, QueryFilter,
    sea_query::ConditionalStatement,
};
use tracing::trace;

use crate::core::{CriteriaEntity, CriteriaTable};
use crate::errors::CriteriaError;

/// Filter `target` by the condition `table` derives from `entity`.
///
/// # Errors
///
/// Propagates the first error raised by a predicate factory.
pub fn filter_by<Q, T>(target: Q, table: &CriteriaTable<T>, entity: &T) -> Result<Q, CriteriaError>
where
    Q: QueryFilter,
    T: CriteriaEntity,
{
    filter_by_with(target, table, entity, |_, condition| condition)
}

/// Like [`filter_by`], passing the derived condition through `and_then` first.
///
/// `and_then` is only invoked when the table derives a condition.
///
/// # Errors
///
/// Propagates the first error raised by a predicate factory.
pub fn filter_by_with<Q, T, F>(
    target: Q,
    table: &CriteriaTable<T>,
    entity: &T,
    and_then: F,
) -> Result<Q, CriteriaError>
where
    Q: QueryFilter,
    T: CriteriaEntity,
    F: FnOnce(&CriteriaTable<T>, Condition) -> Condition,
{
    Ok(match table.as_condition(entity)? {
        Some(condition) => target.filter(and_then(table, condition)),
        None => {
            trace!("No criteria condition derived; query left unfiltered");
            target
        }
    })
}

/// Filter `target` by the derived condition, if any.
///
/// # Errors
///
/// Propagates the first error raised by a predicate factory.
pub fn filter_by_or<Q, T>(
    target: Q,
    table: &CriteriaTable<T>,
    entity: &T,
) -> Result<Q, CriteriaError>
where
    Q: QueryFilter,
    T: CriteriaEntity,
{
    filter_by_or_with(target, table, entity, |_, condition| condition)
}

/// Always hand the optional derived condition to `and_then` and filter by its result.
///
/// # Errors
///
/// Propagates the first error raised by a predicate factory.
pub fn filter_by_or_with<Q, T, F>(
    target: Q,
    table: &CriteriaTable<T>,
    entity: &T,
    and_then: F,
) -> Result<Q, CriteriaError>
where
    Q: QueryFilter,
    T: CriteriaEntity,
    F: FnOnce(&CriteriaTable<T>, Option<Condition>) -> Option<Condition>,
{
    let derived = table.as_condition(entity)?;
    Ok(match and_then(table, derived) {
        Some(condition) => target.filter(condition),
        None => {
            trace!("Criteria callback returned no condition; query left unfiltered");
            target
        }
    })
}

/// Attach the condition `table` derives from `entity` to a statement's WHERE clause.
///
/// # Errors
///
/// Propagates the first error raised by a predicate factory.
pub fn where_by<Q, T>(target: Q, table: &CriteriaTable<T>, entity: &T) -> Result<Q, CriteriaError>
where
    Q: ConditionalStatement,
    T: CriteriaEntity,
{
    where_by_with(target, table, entity, |_, condition| condition)
}

/// Like [`where_by`], passing the derived condition through `and_then` first.
///
/// # Errors
///
/// Propagates the first error raised by a predicate factory.
pub fn where_by_with<Q, T, F>(
    mut target: Q,
    table: &CriteriaTable<T>,
    entity: &T,
    and_then: F,
) -> Result<Q, CriteriaError>
where
    Q: ConditionalStatement,
    T: CriteriaEntity,
    F: FnOnce(&CriteriaTable<T>, Condition) -> Condition,
{
    if let Some(condition) = table.as_condition(entity)? {
        target.cond_where(and_then(table, condition));
    } else {
        trace!("No criteria condition derived; statement left unfiltered");
    }
    Ok(target)
}

/// Attach the derived condition, if any, to a statement's WHERE clause.
///
/// # Errors
///
/// Propagates the first error raised by a predicate factory.
pub fn where_by_or<Q, T>(
    target: Q,
    table: &CriteriaTable<T>,
    entity: &T,
) -> Result<Q, CriteriaError>
where
    Q: ConditionalStatement,
    T: CriteriaEntity,
{
    where_by_or_with(target, table, entity, |_, condition| condition)
}

/// Always hand the optional derived condition to `and_then` and attach its result.
///
/// # Errors
///
/// Propagates the first error raised by a predicate factory.
pub fn where_by_or_with<Q, T, F>(
    mut target: Q,
    table: &CriteriaTable<T>,
    entity: &T,
    and_then: F,
) -> Result<Q, CriteriaError>
where
    Q: ConditionalStatement,
    T: CriteriaEntity,
    F: FnOnce(&CriteriaTable<T>, Option<Condition>) -> Option<Condition>,
{
    let derived = table.as_condition(entity)?;
    if let Some(condition) = and_then(table, derived) {
        target.cond_where(condition);
    } else {
        trace!("Criteria callback returned no condition; statement left unfiltered");
    }
    Ok(target)
}

/// Method-call form of the `filter_by*` combinators for Sea-ORM queries.
///
/// ```rust,ignore
/// let todos = todo::Entity::find()
///     .filter_by(&table, &criteria)?
///     .all(&db)
///     .await?;
/// ```
pub trait CriteriaFilterExt: QueryFilter + Sized {
    /// See [`filter_by`].
    ///
    /// # Errors
    ///
    /// Propagates the first error raised by a predicate factory.
    fn filter_by<T: CriteriaEntity>(
        self,
        table: &CriteriaTable<T>,
        entity: &T,
    ) -> Result<Self, CriteriaError> {
        filter_by(self, table, entity)
    }

    /// See [`filter_by_with`].
    ///
    /// # Errors
    ///
    /// Propagates the first error raised by a predicate factory.
    fn filter_by_with<T, F>(
        self,
        table: &CriteriaTable<T>,
        entity: &T,
        and_then: F,
    ) -> Result<Self, CriteriaError>
    where
        T: CriteriaEntity,
        F: FnOnce(&CriteriaTable<T>, Condition) -> Condition,
    {
        filter_by_with(self, table, entity, and_then)
    }

    /// See [`filter_by_or`].
    ///
    /// # Errors
    ///
    /// Propagates the first error raised by a predicate factory.
    fn filter_by_or<T: CriteriaEntity>(
        self,
        table: &CriteriaTable<T>,
        entity: &T,
    ) -> Result<Self, CriteriaError> {
        filter_by_or(self, table, entity)
    }

    /// See [`filter_by_or_with`].
    ///
    /// # Errors
    ///
    /// Propagates the first error raised by a predicate factory.
    fn filter_by_or_with<T, F>(
        self,
        table: &CriteriaTable<T>,
        entity: &T,
        and_then: F,
    ) -> Result<Self, CriteriaError>
    where
        T: CriteriaEntity,
        F: FnOnce(&CriteriaTable<T>, Option<Condition>) -> Option<Condition>,
    {
        filter_by_or_with(self, table, entity, and_then)
    }
}

impl<Q: QueryFilter> CriteriaFilterExt for Q {}

/// Method-call form of the `where_by*` combinators for `sea_query` statements.
pub trait CriteriaWhereExt: ConditionalStatement + Sized {
    /// See [`where_by`].
    ///
    /// # Errors
    ///
    /// Propagates the first error raised by a predicate factory.
    fn where_by<T: CriteriaEntity>(
        self,
        table: &CriteriaTable<T>,
        entity: &T,
    ) -> Result<Self, CriteriaError> {
        where_by(self, table, entity)
    }

    /// See [`where_by_with`].
    ///
    /// # Errors
    ///
    /// Propagates the first error raised by a predicate factory.
    fn where_by_with<T, F>(
        self,
        table: &CriteriaTable<T>,
        entity: &T,
        and_then: F,
    ) -> Result<Self, CriteriaError>
    where
        T: CriteriaEntity,
        F: FnOnce(&CriteriaTable<T>, Condition) -> Condition,
    {
        where_by_with(self, table, entity, and_then)
    }

    /// See [`where_by_or`].
    ///
    /// # Errors
    ///
    /// Propagates the first error raised by a predicate factory.
    fn where_by_or<T: CriteriaEntity>(
        self,
        table: &CriteriaTable<T>,
        entity: &T,
    ) -> Result<Self, CriteriaError> {
        where_by_or(self, table, entity)
    }

    /// See [`where_by_or_with`].
    ///
    /// # Errors
    ///
    /// Propagates the first error raised by a predicate factory.
    fn where_by_or_with<T, F>(
        self,
        table: &CriteriaTable<T>,
        entity: &T,
        and_then: F,
    ) -> Result<Self, CriteriaError>
    where
        T: CriteriaEntity,
        F: FnOnce(&CriteriaTable<T>, Option<Condition>) -> Option<Condition>,
    {
        where_by_or_with(self, table, entity, and_then)
    }
}

impl<Q: ConditionalStatement> CriteriaWhereExt for Q {}
