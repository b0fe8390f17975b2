//! Data source contracts and implementations.
//!
//! # Responsibility
//! - Define the capability every task backend (local store, remote service)
//!   must provide.
//! - Keep storage details behind one trait so the repository never knows how
//!   many backends exist or what they are made of.
//!
//! # Invariants
//! - Every operation returns exactly one terminal `Result`; a call, once
//!   issued, always completes on the caller's context.
//! - "Not found" is `Ok(None)` on lookups, never an error. Unavailability
//!   of a backend is `DataError::Unavailable`.

use crate::db::DbError;
use crate::model::task::{Task, TaskId};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod local;
pub mod memory;

pub type DataResult<T> = Result<T, DataError>;

/// Terminal failure for data source and repository operations.
#[derive(Debug)]
pub enum DataError {
    /// The backend cannot produce data right now (offline, out of service).
    Unavailable,
    /// SQLite transport or schema failure.
    Db(DbError),
    /// Persisted state violates the model contract.
    InvalidData(String),
}

impl Display for DataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable => write!(f, "task data is not available"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted task data: {message}"),
        }
    }
}

impl Error for DataError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Unavailable | Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for DataError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for DataError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Capability contract over one task backend.
///
/// The caching repository also implements this trait, so presenters stay
/// generic over "something that stores tasks" and tests can substitute
/// recording fakes.
pub trait TasksDataSource {
    /// Returns every stored task in stable order.
    fn get_tasks(&mut self) -> DataResult<Vec<Task>>;

    /// Returns one task by ID, `Ok(None)` when this backend has no match.
    fn get_task(&mut self, id: TaskId) -> DataResult<Option<Task>>;

    /// Inserts or replaces one task keyed by its ID.
    fn save_task(&mut self, task: &Task) -> DataResult<()>;

    /// Marks one task completed. No-op when the ID is unknown here.
    fn complete_task(&mut self, id: TaskId) -> DataResult<()>;

    /// Marks one task active again. No-op when the ID is unknown here.
    fn activate_task(&mut self, id: TaskId) -> DataResult<()>;

    /// Removes every completed task.
    fn clear_completed_tasks(&mut self) -> DataResult<()>;

    /// Removes every stored task.
    fn delete_all_tasks(&mut self) -> DataResult<()>;

    /// Removes one task by ID. Idempotent; unknown IDs succeed.
    fn delete_task(&mut self, id: TaskId) -> DataResult<()>;

    /// Hints that cached state should be refetched on the next read.
    ///
    /// Plain backends have nothing to invalidate, so the default is a no-op;
    /// the caching repository overrides it.
    fn refresh_tasks(&mut self) {}
}
