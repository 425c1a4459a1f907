//! Standard predicate factories.
//!
//! Most criteria columns want one of a handful of comparisons against the
//! field's own value. These helpers register them without a hand-written
//! builder:
//!
//! ```rust,ignore
//! let mut table = CriteriaTable::<todo::ActiveModel>::new();
//! table
//!     .compare::<i32>("priority", FilterOperator::Gte)?
//!     .like("title", LikePattern::Prefix)?
//!     .compare_or::<bool>("completed", FilterOperator::Eq, false)?;
//! ```

use sea_orm::{
    Value,
    sea_query::{Expr, SimpleExpr, ValueType},
};

use crate::core::{CriteriaEntity, CriteriaTable};
use crate::errors::CriteriaError;

/// Comparison operators for criteria columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    /// Equality (=)
    Eq,
    /// Not equal (!=)
    Neq,
    /// Greater than (>)
    Gt,
    /// Greater than or equal (>=)
    Gte,
    /// Less than (<)
    Lt,
    /// Less than or equal (<=)
    Lte,
}

impl FilterOperator {
    /// Compare `column` against `value`.
    pub fn apply(self, column: Expr, value: impl Into<Value>) -> SimpleExpr {
        let value: Value = value.into();
        match self {
            Self::Eq => column.eq(value),
            Self::Neq => column.ne(value),
            Self::Gt => column.gt(value),
            Self::Gte => column.gte(value),
            Self::Lt => column.lt(value),
            Self::Lte => column.lte(value),
        }
    }
}

/// Where the criteria string sits inside a `LIKE` pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LikePattern {
    /// The value is the whole pattern
    Exact,
    /// `value%`
    #[default]
    Prefix,
    /// `%value`
    Suffix,
    /// `%value%`
    Contains,
}

impl LikePattern {
    /// Build the `LIKE` pattern for `value`. Wildcards in `value` are kept.
    #[must_use]
    pub fn pattern(self, value: &str) -> String {
        match self {
            Self::Exact => value.to_owned(),
            Self::Prefix => format!("{value}%"),
            Self::Suffix => format!("%{value}"),
            Self::Contains => format!("%{value}%"),
        }
    }
}

impl<T: CriteriaEntity> CriteriaTable<T> {
    /// `column <operator> value` whenever the criteria field is set.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError::Binding`] if `column` is not mapped on `T`.
    pub fn compare<V>(
        &mut self,
        column: &str,
        operator: FilterOperator,
    ) -> Result<&mut Self, CriteriaError>
    where
        Option<V>: ValueType,
        V: Into<Value> + 'static,
    {
        let name = column.to_owned();
        self.not_null_on(column, move |_: &T, value: V| {
            operator.apply(T::column_expr(&name), value)
        })
    }

    /// `column <operator> value`, comparing against `default` when the field is unset.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError::Binding`] if `column` is not mapped on `T`.
    pub fn compare_or<V>(
        &mut self,
        column: &str,
        operator: FilterOperator,
        default: V,
    ) -> Result<&mut Self, CriteriaError>
    where
        Option<V>: ValueType,
        V: Into<Value> + Clone + Send + Sync + 'static,
    {
        let name = column.to_owned();
        self.on(column, move |_: &T, value: Option<V>| {
            let value = value.unwrap_or_else(|| default.clone());
            operator.apply(T::column_expr(&name), value)
        })
    }

    /// `column LIKE pattern` whenever the criteria field is set.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError::Binding`] if `column` is not mapped on `T`.
    pub fn like(&mut self, column: &str, pattern: LikePattern) -> Result<&mut Self, CriteriaError> {
        self.like_as::<String>(column, pattern)
    }

    /// [`like`](Self::like) for columns read as a string-like type `V`.
    ///
    /// Code generated by `DeriveCriteria` calls this with the field's type, so
    /// a `like` on a non-string field fails to compile.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError::Binding`] if `column` is not mapped on `T`.
    pub fn like_as<V>(
        &mut self,
        column: &str,
        pattern: LikePattern,
    ) -> Result<&mut Self, CriteriaError>
    where
        Option<V>: ValueType,
        V: Into<String> + 'static,
    {
        let name = column.to_owned();
        self.not_null_on(column, move |_: &T, value: V| {
            T::column_expr(&name).like(pattern.pattern(&value.into()))
        })
    }
}
