//! # Criteria Errors
//!
//! Two things can go wrong while deriving a condition from a criteria entity:
//!
//! - **Binding**: a factory was declared for a column the criteria type does not
//!   map to any field. This is a configuration defect and is raised while the
//!   table is being declared, never at query time.
//! - **Conversion**: the value bound to a column could not be read as the type
//!   the condition builder expects (e.g. a `String` builder on an integer
//!   column). Raised at query time, the first time the mismatch is observed.
//!
//! Neither is recovered by this crate. Both are logged through `tracing` when
//! they are created and returned to the caller unchanged.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use critcrate::{CriteriaError, CriteriaFilterExt};
//!
//! async fn search(db: &DatabaseConnection, table: &CriteriaTable<ActiveModel>, criteria: ActiveModel)
//!     -> Result<Vec<Model>, DbErr>
//! {
//!     // CriteriaError converts into DbErr::Custom, so `?` works inside Sea-ORM code
//!     Entity::find().filter_by(table, &criteria)?.all(db).await
//! }
//! ```

use sea_orm::DbErr;
use std::fmt;

/// Error raised while declaring or evaluating criteria factories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CriteriaError {
    /// The column is not mapped to any field of the criteria entity
    Binding {
        /// Column identifier that failed to resolve
        column: String,
    },

    /// The bound value could not be read as the builder's value type
    Conversion {
        /// Column whose value was being read
        column: String,
        /// Rust type the builder expected
        expected: &'static str,
    },
}

impl CriteriaError {
    /// Create a binding error for a column with no entity field behind it
    ///
    /// # Example
    /// ```rust,ignore
    /// return Err(CriteriaError::binding("nickname"));
    /// ```
    pub fn binding(column: impl Into<String>) -> Self {
        let column = column.into();
        tracing::error!(column = %column, "Column is not bound to any criteria field");
        Self::Binding { column }
    }

    /// Create a conversion error for a bound value of the wrong type
    pub fn conversion(column: impl Into<String>, expected: &'static str) -> Self {
        let column = column.into();
        tracing::warn!(
            column = %column,
            expected = expected,
            "Criteria value has an unexpected type"
        );
        Self::Conversion { column, expected }
    }

    /// Column the error refers to
    #[must_use]
    pub fn column(&self) -> &str {
        match self {
            Self::Binding { column } | Self::Conversion { column, .. } => column,
        }
    }
}

impl fmt::Display for CriteriaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binding { column } => {
                write!(f, "Column '{column}' is not mapped to any criteria field")
            }
            Self::Conversion { column, expected } => {
                write!(f, "Criteria value for column '{column}' cannot be read as {expected}")
            }
        }
    }
}

impl std::error::Error for CriteriaError {}

/// Convert `CriteriaError` to Sea-ORM's `DbErr`
///
/// Every criteria error becomes `DbErr::Custom` carrying the display message,
/// so criteria lookups compose with `?` in functions returning `DbErr`.
impl From<CriteriaError> for DbErr {
    fn from(err: CriteriaError) -> Self {
        Self::Custom(err.to_string())
    }
}
