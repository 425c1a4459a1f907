use sea_orm::{
    ActiveModelTrait, EntityTrait, IdenStatic, Iterable, Value,
    sea_query::{Alias, Expr},
};
use std::str::FromStr;

use super::registry::CriteriaTable;
use crate::errors::CriteriaError;

/// Typed accessor reading one column's value out of a criteria entity.
///
/// `None` means the field is unset or NULL; both contribute no value.
pub type Binding<T> = Box<dyn Fn(&T) -> Option<Value> + Send + Sync>;

/// Wrap a field accessor returning `Option<V>` into a [`Binding`].
///
/// ```rust,ignore
/// "title" => Ok(bind(|criteria: &TodoCriteria| criteria.title.clone())),
/// ```
pub fn bind<T, V, F>(read: F) -> Binding<T>
where
    F: Fn(&T) -> Option<V> + Send + Sync + 'static,
    V: Into<Value>,
{
    Box::new(move |entity: &T| read(entity).map(Into::into))
}

/// A type whose instances can be used as query criteria.
///
/// Every Sea-ORM active model implements this already: unset fields
/// (`ActiveValue::NotSet`) and NULL values read as absent. Plain criteria
/// structs implement it by listing their columns and returning a [`Binding`]
/// per column, usually with [`bind`].
pub trait CriteriaEntity: Sized + 'static {
    /// Column identifiers in declaration order.
    fn column_names() -> Vec<String>;

    /// Resolve the accessor bound to `column`.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError::Binding`] if `column` is not mapped to a field.
    fn binding(column: &str) -> Result<Binding<Self>, CriteriaError>;

    /// Column reference used by the standard operator factories.
    #[must_use]
    fn column_expr(column: &str) -> Expr {
        Expr::col(Alias::new(column))
    }
}

/// A criteria type that knows how to declare its own table.
///
/// Implemented by `#[derive(DeriveCriteria)]` for Sea-ORM active models; see
/// [`CriteriaTable::declare`].
pub trait CriteriaSchema: CriteriaEntity {
    /// Register this type's predicate factories on `table`.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError::Binding`] if a factory targets an unmapped column.
    fn declare(table: &mut CriteriaTable<Self>) -> Result<(), CriteriaError>;
}

impl<A> CriteriaEntity for A
where
    A: ActiveModelTrait + 'static,
{
    fn column_names() -> Vec<String> {
        <A::Entity as EntityTrait>::Column::iter()
            .map(|column| column.as_str().to_owned())
            .collect()
    }

    fn binding(column: &str) -> Result<Binding<Self>, CriteriaError> {
        let column = <A::Entity as EntityTrait>::Column::from_str(column)
            .map_err(|_| CriteriaError::binding(column))?;
        Ok(Box::new(move |model: &A| model.get(column).into_value()))
    }

    // Qualified with the table so joined selects stay unambiguous
    fn column_expr(column: &str) -> Expr {
        match <A::Entity as EntityTrait>::Column::from_str(column) {
            Ok(column) => Expr::col((A::Entity::default(), column)),
            Err(_) => Expr::col(Alias::new(column)),
        }
    }
}
