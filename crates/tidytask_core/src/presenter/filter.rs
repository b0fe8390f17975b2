//! List filter predicate.

use crate::model::task::Task;

/// Which subset of the task collection a list view shows.
///
/// Transient view-level state; never persisted by the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    /// Every task.
    #[default]
    All,
    /// Tasks with `completed == false`.
    Active,
    /// Tasks with `completed == true`.
    Completed,
}

impl TaskFilter {
    /// Parses user-facing filter input. Unknown values fall back to `All`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Self::Active,
            "completed" => Self::Completed,
            _ => Self::All,
        }
    }

    /// Returns the tasks selected by this filter, preserving input order.
    ///
    /// Idempotent: filtering an already-filtered list changes nothing.
    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        tasks
            .iter()
            .filter(|task| match self {
                Self::All => true,
                Self::Active => task.is_active(),
                Self::Completed => task.completed,
            })
            .cloned()
            .collect()
    }
}
