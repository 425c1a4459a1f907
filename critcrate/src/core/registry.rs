//! Per-column predicate factory registry.
//!
//! A [`CriteriaTable`] holds at most one composed factory per column. Registering
//! a second factory for the same column never replaces the first: the two are
//! composed so that both conditions must hold. [`CriteriaTable::as_condition`]
//! folds every column's contribution for one criteria entity into a single
//! optional [`Condition`].

use sea_orm::{
    Condition,
    sea_query::{IntoCondition, ValueType},
};
use std::fmt;
use tracing::{debug, trace};

use super::traits::{CriteriaEntity, CriteriaSchema};
use crate::errors::CriteriaError;

/// Derives an optional condition for one column from a criteria entity.
pub type PredicateFactory<T> =
    Box<dyn Fn(&T) -> Result<Option<Condition>, CriteriaError> + Send + Sync>;

/// How a column's bound value is turned into a condition.
pub enum ConditionBuilder<T, V> {
    /// Always invoked, with `None` when the field is unset or NULL. The returned
    /// condition is always the column's contribution.
    On(Box<dyn Fn(&T, Option<V>) -> Condition + Send + Sync>),
    /// Invoked only for a non-null value; a null field contributes nothing.
    NotNullOn(Box<dyn Fn(&T, V) -> Condition + Send + Sync>),
}

impl<T: 'static, V: 'static> ConditionBuilder<T, V> {
    /// Box `build` as an [`On`](Self::On) builder.
    pub fn on<F, C>(build: F) -> Self
    where
        F: Fn(&T, Option<V>) -> C + Send + Sync + 'static,
        C: IntoCondition + 'static,
    {
        Self::On(Box::new(move |entity: &T, value: Option<V>| {
            build(entity, value).into_condition()
        }))
    }

    /// Box `build` as a [`NotNullOn`](Self::NotNullOn) builder.
    pub fn not_null_on<F, C>(build: F) -> Self
    where
        F: Fn(&T, V) -> C + Send + Sync + 'static,
        C: IntoCondition + 'static,
    {
        Self::NotNullOn(Box::new(move |entity: &T, value: V| {
            build(entity, value).into_condition()
        }))
    }
}

/// AND two optional conditions, keeping whichever side is present.
///
/// Absent only when both sides are absent.
#[must_use]
pub fn combine_optional_and(a: Option<Condition>, b: Option<Condition>) -> Option<Condition> {
    match (a, b) {
        (Some(a), Some(b)) => Some(Condition::all().add(a).add(b)),
        (a, None) => a,
        (None, b) => b,
    }
}

/// Condition registry for one criteria type.
///
/// Entries are kept in the criteria type's column declaration order, so the
/// folded condition is deterministic. Columns the type does not declare keep
/// their registration order after the declared ones.
pub struct CriteriaTable<T> {
    factories: Vec<(String, PredicateFactory<T>)>,
}

impl<T: CriteriaEntity> CriteriaTable<T> {
    /// Create a table with no registered factories.
    #[must_use]
    pub fn new() -> Self {
        Self {
            factories: Vec::new(),
        }
    }

    /// Create a table and let `T` register its own factories.
    ///
    /// # Errors
    ///
    /// Propagates the binding error of the first misdeclared column.
    pub fn declare() -> Result<Self, CriteriaError>
    where
        T: CriteriaSchema,
    {
        let mut table = Self::new();
        T::declare(&mut table)?;
        debug!(columns = table.len(), "Declared criteria table");
        Ok(table)
    }

    /// Attach `factory` to `column`, AND-composing with any factory already there.
    pub fn register_factory<F>(&mut self, column: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn(&T) -> Result<Option<Condition>, CriteriaError> + Send + Sync + 'static,
    {
        let column = column.into();

        if let Some(index) = self.factories.iter().position(|(name, _)| *name == column) {
            let (name, existing) = self.factories.remove(index);
            let merged: PredicateFactory<T> = Box::new(move |entity: &T| {
                Ok(combine_optional_and(existing(entity)?, factory(entity)?))
            });
            debug!(column = %name, "Merged predicate factory into existing column");
            self.factories.insert(index, (name, merged));
        } else {
            let index = self.declared_position(&column);
            debug!(column = %column, "Registered predicate factory");
            self.factories.insert(index, (column, Box::new(factory)));
        }

        self
    }

    /// Build a predicate factory reading `column` through `T`'s binding.
    ///
    /// The bound value is converted to `V` on every call; a value of another
    /// type makes the factory fail with [`CriteriaError::Conversion`].
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError::Binding`] if `column` is not mapped on `T`.
    pub fn derive_entity_condition_factory<V>(
        column: &str,
        builder: ConditionBuilder<T, V>,
    ) -> Result<PredicateFactory<T>, CriteriaError>
    where
        Option<V>: ValueType,
        V: 'static,
    {
        let binding = T::binding(column)?;
        let column = column.to_owned();

        let read = move |entity: &T| -> Result<Option<V>, CriteriaError> {
            match binding(entity) {
                Some(value) => <Option<V> as ValueType>::try_from(value).map_err(|_| {
                    CriteriaError::conversion(column.clone(), std::any::type_name::<V>())
                }),
                None => Ok(None),
            }
        };

        let factory: PredicateFactory<T> = match builder {
            ConditionBuilder::On(build) => {
                Box::new(move |entity: &T| Ok(Some(build(entity, read(entity)?))))
            }
            ConditionBuilder::NotNullOn(build) => Box::new(move |entity: &T| {
                Ok(read(entity)?.map(|value| build(entity, value)))
            }),
        };
        Ok(factory)
    }

    /// Register a builder that is always invoked, null values included.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError::Binding`] if `column` is not mapped on `T`.
    pub fn on<V, C, F>(&mut self, column: &str, build: F) -> Result<&mut Self, CriteriaError>
    where
        Option<V>: ValueType,
        V: 'static,
        F: Fn(&T, Option<V>) -> C + Send + Sync + 'static,
        C: IntoCondition + 'static,
    {
        let factory = Self::derive_entity_condition_factory(column, ConditionBuilder::on(build))?;
        Ok(self.register_factory(column, factory))
    }

    /// Register a builder that only runs when the column's value is non-null.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError::Binding`] if `column` is not mapped on `T`.
    pub fn not_null_on<V, C, F>(
        &mut self,
        column: &str,
        build: F,
    ) -> Result<&mut Self, CriteriaError>
    where
        Option<V>: ValueType,
        V: 'static,
        F: Fn(&T, V) -> C + Send + Sync + 'static,
        C: IntoCondition + 'static,
    {
        let factory =
            Self::derive_entity_condition_factory(column, ConditionBuilder::not_null_on(build))?;
        Ok(self.register_factory(column, factory))
    }

    /// Fold every column's contribution for `entity` into one condition.
    ///
    /// `None` means no column contributed anything; it is never replaced by an
    /// always-true condition.
    ///
    /// # Errors
    ///
    /// Propagates the first error raised by a factory.
    pub fn as_condition(&self, entity: &T) -> Result<Option<Condition>, CriteriaError> {
        let mut condition = None;
        for (column, factory) in &self.factories {
            let contribution = factory(entity)?;
            trace!(column = %column, contributes = contribution.is_some(), "Evaluated criteria column");
            condition = combine_optional_and(condition, contribution);
        }
        Ok(condition)
    }

    /// Columns with a registered factory, in evaluation order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.factories.iter().map(|(name, _)| name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    fn declared_position(&self, column: &str) -> usize {
        let declared = T::column_names();
        let rank = |name: &str| {
            declared
                .iter()
                .position(|candidate| candidate == name)
                .unwrap_or(usize::MAX)
        };
        let new_rank = rank(column);
        self.factories
            .iter()
            .position(|(name, _)| rank(name) > new_rank)
            .unwrap_or(self.factories.len())
    }
}

impl<T: CriteriaEntity> Default for CriteriaTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for CriteriaTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CriteriaTable")
            .field(
                "columns",
                &self.factories.iter().map(|(name, _)| name).collect::<Vec<_>>(),
            )
            .finish()
    }
}
