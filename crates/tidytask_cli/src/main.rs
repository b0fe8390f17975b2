//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable that wires the full stack together:
//!   SQLite local source, in-memory remote stand-in, caching repository,
//!   list presenter.
//! - Keep output deterministic for quick local sanity checks.

use std::error::Error;

use tidytask_core::{
    InMemoryTasksSource, SqliteTasksSource, Task, TaskFilter, TasksDataSource, TasksPresenter,
    TasksRepository, TasksView,
};

struct PrintlnView;

impl TasksView for PrintlnView {
    fn set_loading_indicator(&mut self, active: bool) {
        println!("loading={active}");
    }

    fn show_tasks(&mut self, tasks: &[Task]) {
        for task in tasks {
            let marker = if task.completed { "x" } else { " " };
            println!("[{marker}] {}", task.list_title());
        }
    }

    fn show_no_tasks(&mut self) {
        println!("no tasks");
    }

    fn show_loading_error(&mut self) {
        println!("loading error");
    }

    fn show_task_marked_complete(&mut self) {
        println!("task marked complete");
    }

    fn show_task_marked_active(&mut self) {
        println!("task marked active");
    }

    fn show_completed_tasks_cleared(&mut self) {
        println!("completed tasks cleared");
    }

    fn show_task_deleted(&mut self) {
        println!("task deleted");
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("tidytask_core version={}", tidytask_core::core_version());

    let conn = tidytask_core::db::open_db_in_memory()?;
    let local = SqliteTasksSource::new(&conn);
    let remote = InMemoryTasksSource::with_tasks(vec![
        Task::new("water the plants", ""),
        Task::new("file expense report", "before friday"),
    ]);
    let mut repository = TasksRepository::new(local, remote);

    let errand = Task::new("pick up parcel", "locker 14");
    let errand_id = errand.uuid;
    repository.save_task(&errand)?;
    repository.complete_task(errand_id)?;

    let mut view = PrintlnView;
    let mut presenter = TasksPresenter::new();
    presenter.load(&mut repository, &mut view, false);

    println!("-- active only --");
    presenter.set_filter(&mut repository, &mut view, TaskFilter::Active, false);

    Ok(())
}
