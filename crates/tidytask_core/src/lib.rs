//! Core domain logic for tidytask.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod presenter;
pub mod repo;
pub mod source;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Task, TaskId, UNTITLED_PLACEHOLDER};
pub use presenter::add_edit_presenter::{AddEditTaskPresenter, AddEditTaskView};
pub use presenter::detail_presenter::{TaskDetailPresenter, TaskDetailView};
pub use presenter::filter::TaskFilter;
pub use presenter::stats_presenter::{StatisticsPresenter, StatisticsView};
pub use presenter::tasks_presenter::{LoadState, TasksPresenter, TasksView};
pub use repo::tasks_repo::TasksRepository;
pub use source::local::SqliteTasksSource;
pub use source::memory::InMemoryTasksSource;
pub use source::{DataError, DataResult, TasksDataSource};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
