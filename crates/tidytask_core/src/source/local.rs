//! SQLite-backed local task source.
//!
//! # Responsibility
//! - Provide the persistent local backend behind `TasksDataSource`.
//! - Keep SQL details inside this file.
//!
//! # Invariants
//! - Reads reject invalid persisted state instead of masking it.
//! - `save_task` is an upsert keyed by `uuid`; replaying a save is a no-op
//!   apart from `updated_at`.
//! - List order is `created_at ASC, uuid ASC` (stable insertion order).

use crate::model::task::{Task, TaskId};
use crate::source::{DataError, DataResult, TasksDataSource};
use rusqlite::{params, Connection, Row};
use uuid::Uuid;

const TASK_SELECT_SQL: &str = "SELECT
    uuid,
    title,
    description,
    completed,
    image_url
FROM tasks";

/// Local persistent task store over one SQLite connection.
pub struct SqliteTasksSource<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTasksSource<'conn> {
    /// Wraps a connection opened through `db::open_db*` (migrations applied).
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn set_completed(&self, id: TaskId, completed: bool) -> DataResult<()> {
        self.conn.execute(
            "UPDATE tasks
             SET
                completed = ?1,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE uuid = ?2;",
            params![bool_to_int(completed), id.to_string()],
        )?;
        Ok(())
    }
}

impl TasksDataSource for SqliteTasksSource<'_> {
    fn get_tasks(&mut self) -> DataResult<Vec<Task>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TASK_SELECT_SQL} ORDER BY created_at ASC, uuid ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut tasks = Vec::new();
        while let Some(row) = rows.next()? {
            tasks.push(parse_task_row(row)?);
        }

        Ok(tasks)
    }

    fn get_task(&mut self, id: TaskId) -> DataResult<Option<Task>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TASK_SELECT_SQL} WHERE uuid = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_task_row(row)?));
        }

        Ok(None)
    }

    fn save_task(&mut self, task: &Task) -> DataResult<()> {
        self.conn.execute(
            "INSERT INTO tasks (uuid, title, description, completed, image_url)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(uuid) DO UPDATE SET
                title = excluded.title,
                description = excluded.description,
                completed = excluded.completed,
                image_url = excluded.image_url,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![
                task.uuid.to_string(),
                task.title.as_str(),
                task.description.as_str(),
                bool_to_int(task.completed),
                task.image_url.as_deref(),
            ],
        )?;

        Ok(())
    }

    fn complete_task(&mut self, id: TaskId) -> DataResult<()> {
        self.set_completed(id, true)
    }

    fn activate_task(&mut self, id: TaskId) -> DataResult<()> {
        self.set_completed(id, false)
    }

    fn clear_completed_tasks(&mut self) -> DataResult<()> {
        self.conn
            .execute("DELETE FROM tasks WHERE completed = 1;", [])?;
        Ok(())
    }

    fn delete_all_tasks(&mut self) -> DataResult<()> {
        self.conn.execute("DELETE FROM tasks;", [])?;
        Ok(())
    }

    fn delete_task(&mut self, id: TaskId) -> DataResult<()> {
        self.conn
            .execute("DELETE FROM tasks WHERE uuid = ?1;", [id.to_string()])?;
        Ok(())
    }
}

fn parse_task_row(row: &Row<'_>) -> DataResult<Task> {
    let uuid_text: String = row.get("uuid")?;
    let uuid = Uuid::parse_str(&uuid_text).map_err(|_| {
        DataError::InvalidData(format!("invalid uuid value `{uuid_text}` in tasks.uuid"))
    })?;

    let completed = match row.get::<_, i64>("completed")? {
        0 => false,
        1 => true,
        other => {
            return Err(DataError::InvalidData(format!(
                "invalid completed value `{other}` in tasks.completed"
            )));
        }
    };

    Ok(Task {
        uuid,
        title: row.get("title")?,
        description: row.get("description")?,
        completed,
        image_url: row.get("image_url")?,
    })
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
