//! Integration tests for todo repository operations against a real
//! database.

use embr_db::models::todo::UpdateTodo;
use embr_db::repositories::TodoRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Create + list
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_returns_row_with_defaults(pool: PgPool) {
    let todo = TodoRepo::create(&pool, "Write spec", false).await.unwrap();

    assert!(todo.id > 0);
    assert_eq!(todo.title, "Write spec");
    assert!(!todo.completed);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_returns_newest_first(pool: PgPool) {
    TodoRepo::create(&pool, "first", false).await.unwrap();
    TodoRepo::create(&pool, "second", false).await.unwrap();
    TodoRepo::create(&pool, "third", false).await.unwrap();

    let todos = TodoRepo::list(&pool).await.unwrap();

    assert_eq!(todos.len(), 3);
    assert_eq!(todos[0].title, "third");
    assert_eq!(todos[1].title, "second");
    assert_eq!(todos[2].title, "first");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_on_empty_table_returns_empty_vec(pool: PgPool) {
    let todos = TodoRepo::list(&pool).await.unwrap();
    assert!(todos.is_empty());
}

// ---------------------------------------------------------------------------
// Partial update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_applies_only_provided_fields(pool: PgPool) {
    let todo = TodoRepo::create(&pool, "original", false).await.unwrap();

    // Only flip completed; the title must survive.
    let updated = TodoRepo::update(
        &pool,
        todo.id,
        &UpdateTodo {
            title: None,
            completed: Some(true),
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.title, "original");
    assert!(updated.completed);

    // Only change the title; completed must survive.
    let updated = TodoRepo::update(
        &pool,
        todo.id,
        &UpdateTodo {
            title: Some("renamed".to_string()),
            completed: None,
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.title, "renamed");
    assert!(updated.completed);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_unknown_id_returns_none(pool: PgPool) {
    let result = TodoRepo::update(
        &pool,
        999_999,
        &UpdateTodo {
            title: None,
            completed: Some(true),
        },
    )
    .await
    .unwrap();

    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_reports_rows_affected(pool: PgPool) {
    let todo = TodoRepo::create(&pool, "doomed", false).await.unwrap();

    assert_eq!(TodoRepo::delete(&pool, todo.id).await.unwrap(), 1);
    // Second delete finds nothing.
    assert_eq!(TodoRepo::delete(&pool, todo.id).await.unwrap(), 0);
}
