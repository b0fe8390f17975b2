use rusqlite::Connection;
use tidytask_core::db::migrations::{apply_migrations, latest_version};
use tidytask_core::db::{open_db, open_db_in_memory, DbError};

#[test]
fn fresh_database_lands_on_latest_version() {
    let conn = open_db_in_memory().unwrap();
    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());
    assert!(latest_version() > 0);
}

#[test]
fn migrations_create_the_tasks_table() {
    let conn = open_db_in_memory().unwrap();
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'tasks';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn reapplying_migrations_is_a_no_op() {
    let mut conn = open_db_in_memory().unwrap();
    apply_migrations(&mut conn).unwrap();

    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());
}

#[test]
fn newer_schema_than_supported_is_rejected() {
    let mut conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version() + 1))
        .unwrap();

    let err = apply_migrations(&mut conn).unwrap_err();
    assert!(matches!(err, DbError::UnsupportedSchemaVersion { .. }));
}

#[test]
fn reopening_a_migrated_file_database_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("tasks.db");

    drop(open_db(&db_path).unwrap());
    let conn = open_db(&db_path).unwrap();

    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());
}
