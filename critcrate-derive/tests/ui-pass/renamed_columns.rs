//! Test that renamed and raw-identifier columns resolve to the right column

use critcrate::{CriteriaTable, DeriveCriteria};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, DeriveCriteria)]
#[sea_orm(table_name = "articles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_name = "headline")]
    #[criteria(like = "exact")]
    pub title: String,

    #[criteria(eq)]
    pub r#type: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}
impl ActiveModelBehavior for ActiveModel {}

fn main() {
    let table = CriteriaTable::<ActiveModel>::declare().unwrap();
    let columns: Vec<&str> = table.columns().collect();
    assert_eq!(columns, ["headline", "type"]);
}
