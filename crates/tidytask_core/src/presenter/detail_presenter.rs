//! Task detail presenter.
//!
//! # Responsibility
//! - Load one task for the detail screen and route completion/deletion
//!   intents for it.
//!
//! # Invariants
//! - A task missing from every source surfaces as `show_missing_task`,
//!   never as a panic or a placeholder entity.

use crate::model::task::{Task, TaskId};
use crate::source::TasksDataSource;

/// View-state sink for the task detail screen.
pub trait TaskDetailView {
    fn set_loading_indicator(&mut self, active: bool);
    fn show_task(&mut self, task: &Task);
    fn show_missing_task(&mut self);
    fn show_task_marked_complete(&mut self);
    fn show_task_marked_active(&mut self);
    fn show_task_deleted(&mut self);
}

/// Interaction controller for one task's detail screen.
pub struct TaskDetailPresenter {
    task_id: TaskId,
}

impl TaskDetailPresenter {
    pub fn new(task_id: TaskId) -> Self {
        Self { task_id }
    }

    pub fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Loads the task and renders it, or the missing-task state.
    pub fn open_task(
        &self,
        source: &mut impl TasksDataSource,
        view: &mut impl TaskDetailView,
    ) {
        view.set_loading_indicator(true);
        let result = source.get_task(self.task_id);
        view.set_loading_indicator(false);

        match result {
            Ok(Some(task)) => view.show_task(&task),
            Ok(None) | Err(_) => view.show_missing_task(),
        }
    }

    pub fn complete_task(
        &self,
        source: &mut impl TasksDataSource,
        view: &mut impl TaskDetailView,
    ) {
        match source.complete_task(self.task_id) {
            Ok(()) => view.show_task_marked_complete(),
            Err(_) => view.show_missing_task(),
        }
    }

    pub fn activate_task(
        &self,
        source: &mut impl TasksDataSource,
        view: &mut impl TaskDetailView,
    ) {
        match source.activate_task(self.task_id) {
            Ok(()) => view.show_task_marked_active(),
            Err(_) => view.show_missing_task(),
        }
    }

    pub fn delete_task(
        &self,
        source: &mut impl TasksDataSource,
        view: &mut impl TaskDetailView,
    ) {
        match source.delete_task(self.task_id) {
            Ok(()) => view.show_task_deleted(),
            Err(_) => view.show_missing_task(),
        }
    }
}
