// Criteria tables: per-column predicate factories and the bindings they read

pub mod registry;
pub mod traits;

// Re-export commonly used items
pub use registry::{ConditionBuilder, CriteriaTable, PredicateFactory, combine_optional_and};
pub use traits::{Binding, CriteriaEntity, CriteriaSchema, bind};
