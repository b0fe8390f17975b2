//! Add/edit task presenter.
//!
//! # Responsibility
//! - Validate create/update input and persist it through the repository.
//! - Populate the edit form for an existing task.
//!
//! # Invariants
//! - An empty entity (blank title and description) is rejected with
//!   `show_empty_task_error` before any repository call is made.
//! - An edit keeps the task's stable ID and its completion flag.

use crate::model::task::{Task, TaskId};
use crate::source::TasksDataSource;

/// View-state sink for the add/edit form.
pub trait AddEditTaskView {
    fn show_empty_task_error(&mut self);
    fn show_save_error(&mut self);
    fn show_tasks_list(&mut self);
    fn set_title(&mut self, title: &str);
    fn set_description(&mut self, description: &str);
}

/// Interaction controller for the add/edit form.
#[derive(Default)]
pub struct AddEditTaskPresenter;

impl AddEditTaskPresenter {
    pub fn new() -> Self {
        Self
    }

    /// Loads an existing task into the form fields.
    pub fn populate_task(
        &self,
        source: &mut impl TasksDataSource,
        view: &mut impl AddEditTaskView,
        id: TaskId,
    ) {
        match source.get_task(id) {
            Ok(Some(task)) => {
                view.set_title(&task.title);
                view.set_description(&task.description);
            }
            Ok(None) | Err(_) => view.show_empty_task_error(),
        }
    }

    /// Creates a new task or updates an existing one.
    ///
    /// `existing_id = None` creates; `Some(id)` updates in place, keeping
    /// the completion flag that is already stored.
    pub fn save_task(
        &self,
        source: &mut impl TasksDataSource,
        view: &mut impl AddEditTaskView,
        existing_id: Option<TaskId>,
        title: &str,
        description: &str,
    ) {
        let mut task = match existing_id {
            Some(id) => Task::with_id(id, title, description),
            None => Task::new(title, description),
        };

        if task.is_empty() {
            view.show_empty_task_error();
            return;
        }

        if let Some(id) = existing_id {
            // Editing must not silently reactivate a completed task.
            match source.get_task(id) {
                Ok(Some(stored)) => {
                    task.completed = stored.completed;
                    task.image_url = stored.image_url;
                }
                Ok(None) => {}
                Err(_) => {
                    view.show_save_error();
                    return;
                }
            }
        }

        match source.save_task(&task) {
            Ok(()) => view.show_tasks_list(),
            Err(_) => view.show_save_error(),
        }
    }
}
