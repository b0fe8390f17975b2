//! In-memory task source.
//!
//! # Responsibility
//! - Provide a backend with no persistence for the in-memory repository
//!   variant, demos and tests.
//! - Stand in for a remote service whose availability is not guaranteed:
//!   `set_available(false)` makes every operation fail with `Unavailable`.
//!
//! # Invariants
//! - Insertion order is preserved; `save_task` replaces in place.
//! - While unavailable, stored data is kept but unreachable.

use crate::model::task::{Task, TaskId};
use crate::source::{DataError, DataResult, TasksDataSource};

/// Ordered in-memory task store with an availability toggle.
#[derive(Default)]
pub struct InMemoryTasksSource {
    tasks: Vec<Task>,
    unavailable: bool,
}

impl InMemoryTasksSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source pre-seeded with tasks, in the given order.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            unavailable: false,
        }
    }

    /// Toggles simulated reachability of this backend.
    pub fn set_available(&mut self, available: bool) {
        self.unavailable = !available;
    }

    fn guard(&self) -> DataResult<()> {
        if self.unavailable {
            return Err(DataError::Unavailable);
        }
        Ok(())
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.uuid == id)
    }
}

impl TasksDataSource for InMemoryTasksSource {
    fn get_tasks(&mut self) -> DataResult<Vec<Task>> {
        self.guard()?;
        Ok(self.tasks.clone())
    }

    fn get_task(&mut self, id: TaskId) -> DataResult<Option<Task>> {
        self.guard()?;
        Ok(self.position(id).map(|index| self.tasks[index].clone()))
    }

    fn save_task(&mut self, task: &Task) -> DataResult<()> {
        self.guard()?;
        match self.position(task.uuid) {
            Some(index) => self.tasks[index] = task.clone(),
            None => self.tasks.push(task.clone()),
        }
        Ok(())
    }

    fn complete_task(&mut self, id: TaskId) -> DataResult<()> {
        self.guard()?;
        if let Some(index) = self.position(id) {
            self.tasks[index].mark_completed();
        }
        Ok(())
    }

    fn activate_task(&mut self, id: TaskId) -> DataResult<()> {
        self.guard()?;
        if let Some(index) = self.position(id) {
            self.tasks[index].mark_active();
        }
        Ok(())
    }

    fn clear_completed_tasks(&mut self) -> DataResult<()> {
        self.guard()?;
        self.tasks.retain(Task::is_active);
        Ok(())
    }

    fn delete_all_tasks(&mut self) -> DataResult<()> {
        self.guard()?;
        self.tasks.clear();
        Ok(())
    }

    fn delete_task(&mut self, id: TaskId) -> DataResult<()> {
        self.guard()?;
        self.tasks.retain(|task| task.uuid != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::InMemoryTasksSource;
    use crate::model::task::Task;
    use crate::source::{DataError, TasksDataSource};

    #[test]
    fn preserves_insertion_order_across_saves() {
        let mut source = InMemoryTasksSource::new();
        let first = Task::new("first", "");
        let second = Task::new("second", "");
        source.save_task(&first).unwrap();
        source.save_task(&second).unwrap();

        let mut edited = first.clone();
        edited.description = "edited".to_string();
        source.save_task(&edited).unwrap();

        let tasks = source.get_tasks().unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].uuid, first.uuid);
        assert_eq!(tasks[0].description, "edited");
        assert_eq!(tasks[1].uuid, second.uuid);
    }

    #[test]
    fn unavailable_source_fails_every_operation_and_recovers() {
        let task = Task::new("kept", "");
        let mut source = InMemoryTasksSource::with_tasks(vec![task.clone()]);

        source.set_available(false);
        assert!(matches!(
            source.get_tasks(),
            Err(DataError::Unavailable)
        ));
        assert!(matches!(
            source.save_task(&Task::new("x", "")),
            Err(DataError::Unavailable)
        ));

        source.set_available(true);
        let tasks = source.get_tasks().unwrap();
        assert_eq!(tasks, vec![task]);
    }
}
