#![allow(dead_code)]

use sea_orm::{ActiveModelTrait, ActiveValue::Set, Database, DatabaseConnection, DbErr, DeriveIden};
use sea_orm_migration::prelude::*;

pub mod todo_entity;

pub async fn setup_test_db() -> Result<DatabaseConnection, DbErr> {
    init_tracing();
    let db = Database::connect("sqlite::memory:").await?;

    // Run migrations
    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Database with a fixed set of todos: see `SEED`.
pub async fn setup_seeded_db() -> Result<DatabaseConnection, DbErr> {
    let db = setup_test_db().await?;
    for (title, priority, completed, notes) in SEED {
        todo_entity::ActiveModel {
            title: Set((*title).to_owned()),
            priority: Set(*priority),
            completed: Set(*completed),
            notes: Set(notes.map(str::to_owned)),
            ..Default::default()
        }
        .insert(&db)
        .await?;
    }
    Ok(db)
}

pub const SEED: &[(&str, i32, bool, Option<&str>)] = &[
    ("Write report", 5, false, Some("quarterly numbers")),
    ("Review report", 3, true, None),
    ("Buy milk", 1, false, Some("semi-skimmed")),
    ("Fix login bug", 8, false, Some("urgent")),
    ("Plan offsite", 2, true, None),
];

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(CreateTodoTable)]
    }
}

pub struct CreateTodoTable;

impl MigrationName for CreateTodoTable {
    fn name(&self) -> &'static str {
        "m20240101_000001_create_todo_table"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for CreateTodoTable {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let table = Table::create()
            .table(Todos::Table)
            .if_not_exists()
            .col(
                ColumnDef::new(Todos::Id)
                    .integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(ColumnDef::new(Todos::Title).string().not_null())
            .col(ColumnDef::new(Todos::Priority).integer().not_null())
            .col(
                ColumnDef::new(Todos::Completed)
                    .boolean()
                    .not_null()
                    .default(false),
            )
            .col(ColumnDef::new(Todos::Notes).string().null())
            .to_owned();

        manager.create_table(table).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Todos::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Todos {
    Table,
    Id,
    Title,
    Priority,
    Completed,
    Notes,
}
