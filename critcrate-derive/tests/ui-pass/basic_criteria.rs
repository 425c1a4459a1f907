//! Test that comparison and like attributes declare a table

use critcrate::{CriteriaTable, DeriveCriteria};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, DeriveCriteria)]
#[sea_orm(table_name = "todos")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[criteria(eq)]
    pub id: i32,

    #[criteria(like = "contains")]
    pub title: String,

    #[criteria(gte, lte)]
    pub priority: i32,

    #[criteria(eq, default = false)]
    pub completed: bool,

    #[criteria(like = "prefix")]
    #[criteria(neq)]
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}
impl ActiveModelBehavior for ActiveModel {}

fn main() {
    let table = CriteriaTable::<ActiveModel>::declare().unwrap();
    let columns: Vec<&str> = table.columns().collect();
    assert_eq!(columns, ["id", "title", "priority", "completed", "notes"]);
}
