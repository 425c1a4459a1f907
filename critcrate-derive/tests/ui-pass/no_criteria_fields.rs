//! Test that an entity without annotated fields declares an empty table

use critcrate::{CriteriaTable, DeriveCriteria};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, DeriveCriteria)]
#[sea_orm(table_name = "tags")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub label: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}
impl ActiveModelBehavior for ActiveModel {}

fn main() {
    let table = CriteriaTable::<ActiveModel>::declare().unwrap();
    assert!(table.is_empty());
}
