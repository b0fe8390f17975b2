//! Task list presenter.
//!
//! # Responsibility
//! - Drive the list screen's load cycle: busy indicator, filtered list,
//!   empty state, load error.
//! - Route mutation intents (complete, activate, delete, clear completed)
//!   to the repository and refresh the list afterwards.
//!
//! # Invariants
//! - Every `load` cycle ends in `Loaded` or `Error`, with the busy
//!   indicator cleared either way.
//! - On `Error` the last-known list is kept; the view gets only the error
//!   signal, never a replacement empty list.
//! - Mutation intents reload with `force_update = false`: the repository
//!   has already applied the change to its cache.

use crate::model::task::{Task, TaskId};
use crate::presenter::filter::TaskFilter;
use crate::source::TasksDataSource;
use log::debug;

/// Lifecycle of one logical load cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error,
}

/// View-state sink for the task list screen.
pub trait TasksView {
    fn set_loading_indicator(&mut self, active: bool);
    fn show_tasks(&mut self, tasks: &[Task]);
    fn show_no_tasks(&mut self);
    fn show_loading_error(&mut self);
    fn show_task_marked_complete(&mut self);
    fn show_task_marked_active(&mut self);
    fn show_completed_tasks_cleared(&mut self);
    fn show_task_deleted(&mut self);
}

/// Interaction controller for the task list.
///
/// Holds only presentation state (filter, load state, last-known list).
/// The data source and the view are borrowed per intent call, so one
/// repository instance can serve several presenters in the same session.
#[derive(Default)]
pub struct TasksPresenter {
    filter: TaskFilter,
    state: LoadState,
    current_tasks: Vec<Task>,
}

impl TasksPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a presenter starting from an explicit filter, e.g. restored
    /// screen state.
    pub fn with_filter(filter: TaskFilter) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn filter(&self) -> TaskFilter {
        self.filter
    }

    /// Loads the task list and emits the resulting view state.
    ///
    /// `force_update` invalidates the repository cache first (pull-to-refresh
    /// semantics); otherwise the cached snapshot is fair game.
    pub fn load(
        &mut self,
        source: &mut impl TasksDataSource,
        view: &mut impl TasksView,
        force_update: bool,
    ) {
        self.state = LoadState::Loading;
        view.set_loading_indicator(true);

        if force_update {
            source.refresh_tasks();
        }

        match source.get_tasks() {
            Ok(tasks) => {
                debug!(
                    "event=load module=presenter status=ok count={} forced={force_update}",
                    tasks.len()
                );
                self.current_tasks = tasks;
                view.set_loading_indicator(false);
                self.state = LoadState::Loaded;
                self.render(view);
            }
            Err(err) => {
                debug!("event=load module=presenter status=error forced={force_update} error={err}");
                view.set_loading_indicator(false);
                self.state = LoadState::Error;
                view.show_loading_error();
            }
        }
    }

    /// Switches the list filter.
    ///
    /// With `force_reload` the presenter re-enters a full load cycle;
    /// without it the last-known list is re-filtered in place.
    pub fn set_filter(
        &mut self,
        source: &mut impl TasksDataSource,
        view: &mut impl TasksView,
        filter: TaskFilter,
        force_reload: bool,
    ) {
        self.filter = filter;
        if force_reload {
            self.load(source, view, true);
        } else {
            self.state = LoadState::Loaded;
            self.render(view);
        }
    }

    pub fn complete_task(
        &mut self,
        source: &mut impl TasksDataSource,
        view: &mut impl TasksView,
        id: TaskId,
    ) {
        match source.complete_task(id) {
            Ok(()) => {
                view.show_task_marked_complete();
                self.load(source, view, false);
            }
            Err(_) => view.show_loading_error(),
        }
    }

    pub fn activate_task(
        &mut self,
        source: &mut impl TasksDataSource,
        view: &mut impl TasksView,
        id: TaskId,
    ) {
        match source.activate_task(id) {
            Ok(()) => {
                view.show_task_marked_active();
                self.load(source, view, false);
            }
            Err(_) => view.show_loading_error(),
        }
    }

    pub fn delete_task(
        &mut self,
        source: &mut impl TasksDataSource,
        view: &mut impl TasksView,
        id: TaskId,
    ) {
        match source.delete_task(id) {
            Ok(()) => {
                view.show_task_deleted();
                self.load(source, view, false);
            }
            Err(_) => view.show_loading_error(),
        }
    }

    pub fn clear_completed_tasks(
        &mut self,
        source: &mut impl TasksDataSource,
        view: &mut impl TasksView,
    ) {
        match source.clear_completed_tasks() {
            Ok(()) => {
                view.show_completed_tasks_cleared();
                self.load(source, view, false);
            }
            Err(_) => view.show_loading_error(),
        }
    }

    fn render(&self, view: &mut impl TasksView) {
        let filtered = self.filter.apply(&self.current_tasks);
        if filtered.is_empty() {
            view.show_no_tasks();
        } else {
            view.show_tasks(&filtered);
        }
    }
}
