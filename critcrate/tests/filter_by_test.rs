use critcrate::{
    CriteriaError, CriteriaFilterExt, CriteriaTable, FilterOperator, LikePattern, filter_by,
    filter_by_or,
};
use sea_orm::{
    ActiveValue::Set, ColumnTrait, Condition, DbBackend, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder, QueryTrait,
};

mod common;
use common::{setup_seeded_db, todo_entity};

type Criteria = todo_entity::ActiveModel;

fn todo_table() -> CriteriaTable<Criteria> {
    let mut table = CriteriaTable::new();
    table
        .like("title", LikePattern::Contains)
        .unwrap()
        .compare::<i32>("priority", FilterOperator::Gte)
        .unwrap()
        .compare::<bool>("completed", FilterOperator::Eq)
        .unwrap();
    table
}

fn titles(todos: &[todo_entity::Model]) -> Vec<&str> {
    todos.iter().map(|todo| todo.title.as_str()).collect()
}

#[test]
fn test_filter_by_renders_set_fields_only() {
    let criteria = Criteria {
        priority: Set(5),
        ..Default::default()
    };
    let sql = todo_entity::Entity::find()
        .filter_by(&todo_table(), &criteria)
        .unwrap()
        .build(DbBackend::Sqlite)
        .to_string();

    assert!(sql.contains(r#"WHERE "todos"."priority" >= 5"#), "{sql}");
    assert!(!sql.contains("LIKE"), "{sql}");
}

#[test]
fn test_filter_by_with_empty_criteria_leaves_query_unfiltered() {
    let unfiltered = todo_entity::Entity::find().build(DbBackend::Sqlite).to_string();
    let sql = todo_entity::Entity::find()
        .filter_by(&todo_table(), &Criteria::default())
        .unwrap()
        .build(DbBackend::Sqlite)
        .to_string();

    assert_eq!(sql, unfiltered);
}

#[tokio::test]
async fn test_filter_by_selects_matching_rows() -> Result<(), DbErr> {
    let db = setup_seeded_db().await?;
    let table = todo_table();

    let criteria = Criteria {
        title: Set("report".to_owned()),
        priority: Set(5),
        ..Default::default()
    };
    let todos = filter_by(todo_entity::Entity::find(), &table, &criteria)?
        .all(&db)
        .await?;
    assert_eq!(titles(&todos), ["Write report"]);

    let criteria = Criteria {
        completed: Set(true),
        ..Default::default()
    };
    let todos = todo_entity::Entity::find()
        .filter_by(&table, &criteria)?
        .order_by_asc(todo_entity::Column::Id)
        .all(&db)
        .await?;
    assert_eq!(titles(&todos), ["Review report", "Plan offsite"]);

    Ok(())
}

#[tokio::test]
async fn test_empty_criteria_returns_every_row() -> Result<(), DbErr> {
    let db = setup_seeded_db().await?;

    let count = todo_entity::Entity::find()
        .filter_by(&todo_table(), &Criteria::default())?
        .count(&db)
        .await?;
    assert_eq!(count, 5);
    Ok(())
}

#[tokio::test]
async fn test_explicit_null_contributes_nothing() -> Result<(), DbErr> {
    let db = setup_seeded_db().await?;
    let mut table = CriteriaTable::<Criteria>::new();
    table.like("notes", LikePattern::Prefix)?;

    let criteria = Criteria {
        notes: Set(None),
        ..Default::default()
    };
    assert!(table.as_condition(&criteria)?.is_none());

    let count = filter_by(todo_entity::Entity::find(), &table, &criteria)?
        .count(&db)
        .await?;
    assert_eq!(count, 5);
    Ok(())
}

#[tokio::test]
async fn test_filter_by_with_adds_to_derived_condition() -> Result<(), DbErr> {
    let db = setup_seeded_db().await?;

    let criteria = Criteria {
        title: Set("report".to_owned()),
        ..Default::default()
    };
    let todos = todo_entity::Entity::find()
        .filter_by_with(&todo_table(), &criteria, |_, condition| {
            condition.add(todo_entity::Column::Completed.eq(false))
        })?
        .all(&db)
        .await?;

    assert_eq!(titles(&todos), ["Write report"]);
    Ok(())
}

#[tokio::test]
async fn test_filter_by_with_is_skipped_for_empty_criteria() -> Result<(), DbErr> {
    let db = setup_seeded_db().await?;

    let count = todo_entity::Entity::find()
        .filter_by_with(&todo_table(), &Criteria::default(), |_, condition| {
            condition.add(todo_entity::Column::Id.eq(-1))
        })?
        .count(&db)
        .await?;

    assert_eq!(count, 5);
    Ok(())
}

#[tokio::test]
async fn test_filter_by_or_with_restricts_empty_criteria() -> Result<(), DbErr> {
    let db = setup_seeded_db().await?;

    let todos = todo_entity::Entity::find()
        .filter_by_or_with(&todo_table(), &Criteria::default(), |_, condition| {
            condition.or_else(|| Some(Condition::all().add(todo_entity::Column::Priority.lt(2))))
        })?
        .all(&db)
        .await?;

    assert_eq!(titles(&todos), ["Buy milk"]);
    Ok(())
}

#[tokio::test]
async fn test_filter_by_or_with_can_drop_condition() -> Result<(), DbErr> {
    let db = setup_seeded_db().await?;

    let criteria = Criteria {
        priority: Set(100),
        ..Default::default()
    };
    let count = todo_entity::Entity::find()
        .filter_by_or_with(&todo_table(), &criteria, |_, _| None)?
        .count(&db)
        .await?;

    assert_eq!(count, 5);
    Ok(())
}

#[tokio::test]
async fn test_filter_by_or_matches_filter_by() -> Result<(), DbErr> {
    let db = setup_seeded_db().await?;
    let table = todo_table();
    let criteria = Criteria {
        priority: Set(3),
        completed: Set(false),
        ..Default::default()
    };

    let plain = filter_by(todo_entity::Entity::find(), &table, &criteria)?
        .order_by_asc(todo_entity::Column::Id)
        .all(&db)
        .await?;
    let optional = filter_by_or(todo_entity::Entity::find(), &table, &criteria)?
        .order_by_asc(todo_entity::Column::Id)
        .all(&db)
        .await?;

    assert_eq!(plain, optional);
    assert_eq!(titles(&plain), ["Write report", "Fix login bug"]);
    Ok(())
}

fn merged_priority_table(range_first: bool) -> Result<CriteriaTable<Criteria>, DbErr> {
    let mut table = CriteriaTable::<Criteria>::new();
    let at_least = |_: &Criteria, priority: i32| todo_entity::Column::Priority.gte(priority);
    let open = |_: &Criteria, _: i32| todo_entity::Column::Completed.eq(false);
    if range_first {
        table.not_null_on("priority", at_least)?.not_null_on("priority", open)?;
    } else {
        table.not_null_on("priority", open)?.not_null_on("priority", at_least)?;
    }
    Ok(table)
}

#[tokio::test]
async fn test_merged_factories_select_same_rows_in_either_order() -> Result<(), DbErr> {
    let db = setup_seeded_db().await?;
    let criteria = Criteria {
        priority: Set(2),
        ..Default::default()
    };

    let mut results = Vec::new();
    for range_first in [true, false] {
        let table = merged_priority_table(range_first)?;
        assert_eq!(table.len(), 1);
        let todos = todo_entity::Entity::find()
            .filter_by(&table, &criteria)?
            .order_by_asc(todo_entity::Column::Id)
            .all(&db)
            .await?;
        results.push(todos);
    }

    assert_eq!(results[0], results[1]);
    assert_eq!(titles(&results[0]), ["Write report", "Fix login bug"]);
    Ok(())
}

#[tokio::test]
async fn test_filter_by_on_delete_many() -> Result<(), DbErr> {
    let db = setup_seeded_db().await?;

    let criteria = Criteria {
        completed: Set(true),
        ..Default::default()
    };
    let result = todo_entity::Entity::delete_many()
        .filter_by(&todo_table(), &criteria)?
        .exec(&db)
        .await?;
    assert_eq!(result.rows_affected, 2);

    let remaining = todo_entity::Entity::find().count(&db).await?;
    assert_eq!(remaining, 3);
    Ok(())
}

#[tokio::test]
async fn test_conversion_error_becomes_db_error() -> Result<(), DbErr> {
    let mut table = CriteriaTable::<Criteria>::new();
    table.not_null_on("priority", |_: &Criteria, label: String| {
        todo_entity::Column::Title.eq(label)
    })?;

    let criteria = Criteria {
        priority: Set(1),
        ..Default::default()
    };
    let err = todo_entity::Entity::find()
        .filter_by(&table, &criteria)
        .unwrap_err();
    assert_eq!(err.column(), "priority");
    assert!(matches!(err, CriteriaError::Conversion { .. }));

    let db_err: DbErr = err.into();
    assert!(matches!(db_err, DbErr::Custom(message) if message.contains("priority")));
    Ok(())
}
