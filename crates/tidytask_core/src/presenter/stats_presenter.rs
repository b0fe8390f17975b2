//! Statistics presenter.
//!
//! # Responsibility
//! - Count active vs completed tasks and emit them as view state.
//!
//! # Invariants
//! - On data unavailability the last-good counts are retained and only the
//!   error signal fires; counts are never zeroed by a failed refresh.

use crate::source::TasksDataSource;

/// View-state sink for the statistics screen.
pub trait StatisticsView {
    fn set_progress_indicator(&mut self, active: bool);
    fn show_statistics(&mut self, active_count: usize, completed_count: usize);
    fn show_empty_statistics(&mut self);
    fn show_loading_statistics_error(&mut self);
}

/// Interaction controller for the statistics screen.
#[derive(Default)]
pub struct StatisticsPresenter {
    active_count: usize,
    completed_count: usize,
}

impl StatisticsPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the last computed `(active, completed)` counts.
    pub fn counts(&self) -> (usize, usize) {
        (self.active_count, self.completed_count)
    }

    /// Recomputes statistics from the current task collection.
    pub fn load_statistics(
        &mut self,
        source: &mut impl TasksDataSource,
        view: &mut impl StatisticsView,
    ) {
        view.set_progress_indicator(true);

        match source.get_tasks() {
            Ok(tasks) => {
                self.active_count = tasks.iter().filter(|task| task.is_active()).count();
                self.completed_count = tasks.len() - self.active_count;
                view.set_progress_indicator(false);
                if tasks.is_empty() {
                    view.show_empty_statistics();
                } else {
                    view.show_statistics(self.active_count, self.completed_count);
                }
            }
            Err(_) => {
                view.set_progress_indicator(false);
                view.show_loading_statistics_error();
            }
        }
    }
}
