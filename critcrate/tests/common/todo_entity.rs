use critcrate::DeriveCriteria;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, DeriveCriteria)]
#[sea_orm(table_name = "todos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[criteria(like = "contains")]
    pub title: String,

    #[criteria(gte)]
    pub priority: i32,

    #[criteria(eq)]
    pub completed: bool,

    #[criteria(like = "prefix")]
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
