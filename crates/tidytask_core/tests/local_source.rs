use tidytask_core::db::{open_db, open_db_in_memory};
use tidytask_core::{DataError, SqliteTasksSource, Task, TasksDataSource};
use uuid::Uuid;

#[test]
fn save_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let mut source = SqliteTasksSource::new(&conn);

    let mut task = Task::new("buy milk", "two liters");
    task.image_url = Some("milk.png".to_string());
    source.save_task(&task).unwrap();

    let loaded = source.get_task(task.uuid).unwrap().unwrap();
    assert_eq!(loaded, task);
}

#[test]
fn get_missing_task_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let mut source = SqliteTasksSource::new(&conn);

    assert!(source.get_task(Uuid::new_v4()).unwrap().is_none());
}

#[test]
fn save_is_an_upsert_keyed_by_id() {
    let conn = open_db_in_memory().unwrap();
    let mut source = SqliteTasksSource::new(&conn);

    let mut task = Task::new("draft", "");
    source.save_task(&task).unwrap();

    task.title = "final".to_string();
    task.mark_completed();
    source.save_task(&task).unwrap();

    let tasks = source.get_tasks().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title, "final");
    assert!(tasks[0].completed);
}

#[test]
fn list_keeps_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let mut source = SqliteTasksSource::new(&conn);

    let first = Task::new("first", "");
    let second = Task::new("second", "");
    let third = Task::new("third", "");
    source.save_task(&first).unwrap();
    source.save_task(&second).unwrap();
    source.save_task(&third).unwrap();

    // Collapse created_at so the uuid tie-break is the only order left,
    // then check it stays deterministic.
    conn.execute("UPDATE tasks SET created_at = 1234567890000;", [])
        .unwrap();

    let mut expected = vec![first.uuid, second.uuid, third.uuid];
    expected.sort_by_key(|id| id.to_string());

    let listed: Vec<_> = source
        .get_tasks()
        .unwrap()
        .into_iter()
        .map(|task| task.uuid)
        .collect();
    assert_eq!(listed, expected);
}

#[test]
fn complete_and_activate_update_the_flag() {
    let conn = open_db_in_memory().unwrap();
    let mut source = SqliteTasksSource::new(&conn);

    let task = Task::new("toggle me", "");
    source.save_task(&task).unwrap();

    source.complete_task(task.uuid).unwrap();
    assert!(source.get_task(task.uuid).unwrap().unwrap().completed);

    source.activate_task(task.uuid).unwrap();
    assert!(!source.get_task(task.uuid).unwrap().unwrap().completed);
}

#[test]
fn clear_completed_removes_only_completed_rows() {
    let conn = open_db_in_memory().unwrap();
    let mut source = SqliteTasksSource::new(&conn);

    let open = Task::new("open", "");
    let mut done = Task::new("done", "");
    done.mark_completed();
    source.save_task(&open).unwrap();
    source.save_task(&done).unwrap();

    source.clear_completed_tasks().unwrap();

    let tasks = source.get_tasks().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].uuid, open.uuid);
}

#[test]
fn delete_task_is_idempotent_and_delete_all_empties_the_store() {
    let conn = open_db_in_memory().unwrap();
    let mut source = SqliteTasksSource::new(&conn);

    let task = Task::new("gone soon", "");
    source.save_task(&task).unwrap();

    source.delete_task(task.uuid).unwrap();
    source.delete_task(task.uuid).unwrap();
    assert!(source.get_task(task.uuid).unwrap().is_none());

    source.save_task(&Task::new("a", "")).unwrap();
    source.save_task(&Task::new("b", "")).unwrap();
    source.delete_all_tasks().unwrap();
    assert!(source.get_tasks().unwrap().is_empty());
}

#[test]
fn invalid_persisted_uuid_is_rejected_not_masked() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO tasks (uuid, title, description, completed) VALUES ('not-a-uuid', 't', 'd', 0);",
        [],
    )
    .unwrap();

    let mut source = SqliteTasksSource::new(&conn);
    let err = source.get_tasks().unwrap_err();
    assert!(matches!(err, DataError::InvalidData(_)));
}

#[test]
fn invalid_completed_value_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO tasks (uuid, title, description, completed)
         VALUES ('00000000-0000-4000-8000-000000000001', 't', 'd', 7);",
        [],
    )
    .unwrap();

    let mut source = SqliteTasksSource::new(&conn);
    let err = source.get_tasks().unwrap_err();
    assert!(matches!(err, DataError::InvalidData(_)));
}

#[test]
fn file_backed_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("tasks.db");

    let task = Task::new("persisted", "survives reopen");
    {
        let conn = open_db(&db_path).unwrap();
        let mut source = SqliteTasksSource::new(&conn);
        source.save_task(&task).unwrap();
    }

    let conn = open_db(&db_path).unwrap();
    let mut source = SqliteTasksSource::new(&conn);
    let loaded = source.get_task(task.uuid).unwrap().unwrap();
    assert_eq!(loaded, task);
}
