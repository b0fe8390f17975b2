//! Caching task repository over a local store and a remote service.
//!
//! # Responsibility
//! - Serve reads from the in-memory cache when possible; fall back through
//!   the source chain otherwise.
//! - Fan every mutation out to all sources and keep the cache in step.
//!
//! # Invariants
//! - The cache is never partially populated. Collection reads either serve
//!   the whole snapshot or rebuild it from the remote source wholesale;
//!   single-entity merges apply only while a snapshot is present.
//! - Local write failures propagate. Remote write failures on mutations are
//!   logged and swallowed (fire-and-forget); remote read failures propagate.
//! - Exclusive access (`&mut self`) serializes all operations, so no two
//!   cache refreshes can ever race.

use crate::model::task::{Task, TaskId};
use crate::source::{DataResult, TasksDataSource};
use log::{debug, info, warn};

/// Single point of truth for task collections and individual tasks.
///
/// Implements `TasksDataSource` itself, so presenters depend on one trait
/// whether they talk to a bare source or the full cached composition.
pub struct TasksRepository<L, R> {
    local: L,
    remote: R,
    cache: Option<Vec<Task>>,
}

impl<L: TasksDataSource, R: TasksDataSource> TasksRepository<L, R> {
    /// Creates a repository with an absent cache; the first collection read
    /// triggers a remote round trip.
    pub fn new(local: L, remote: R) -> Self {
        Self {
            local,
            remote,
            cache: None,
        }
    }

    /// Forces the cache to absent. The next `get_tasks` or cache-missing
    /// lookup performs a fresh remote round trip.
    pub fn invalidate_cache(&mut self) {
        info!("event=cache_invalidate module=repo status=ok");
        self.cache = None;
    }

    /// Returns whether a complete snapshot is currently held.
    pub fn is_cache_primed(&self) -> bool {
        self.cache.is_some()
    }

    fn refill_from_remote(&mut self) -> DataResult<Vec<Task>> {
        let tasks = self.remote.get_tasks()?;

        // The local store mirrors the authoritative snapshot after every
        // successful remote read.
        self.local.delete_all_tasks()?;
        for task in &tasks {
            self.local.save_task(task)?;
        }

        info!(
            "event=cache_refill module=repo status=ok count={}",
            tasks.len()
        );
        self.cache = Some(tasks.clone());
        Ok(tasks)
    }

    fn cache_upsert(&mut self, task: &Task) {
        if let Some(cache) = &mut self.cache {
            match cache.iter().position(|cached| cached.uuid == task.uuid) {
                Some(index) => cache[index] = task.clone(),
                None => cache.push(task.clone()),
            }
        }
    }

    fn cache_set_completed(&mut self, id: TaskId, completed: bool) {
        if let Some(cache) = &mut self.cache {
            if let Some(task) = cache.iter_mut().find(|task| task.uuid == id) {
                task.completed = completed;
            }
        }
    }

    fn note_remote_outcome(op: &'static str, result: DataResult<()>) {
        if let Err(err) = result {
            warn!("event={op} module=repo target=remote status=error error={err}");
        }
    }
}

impl<L: TasksDataSource, R: TasksDataSource> TasksDataSource for TasksRepository<L, R> {
    /// Returns the cached snapshot when present, otherwise rebuilds it from
    /// the remote source. Never returns a partial collection.
    fn get_tasks(&mut self) -> DataResult<Vec<Task>> {
        if let Some(cache) = &self.cache {
            debug!(
                "event=get_tasks module=repo status=ok source=cache count={}",
                cache.len()
            );
            return Ok(cache.clone());
        }

        self.refill_from_remote()
    }

    /// Looks up one task: cache entry, then local store, then remote. A
    /// remote hit is persisted locally and merged into the present cache.
    fn get_task(&mut self, id: TaskId) -> DataResult<Option<Task>> {
        if let Some(cache) = &self.cache {
            if let Some(task) = cache.iter().find(|task| task.uuid == id) {
                debug!("event=get_task module=repo status=ok source=cache id={id}");
                return Ok(Some(task.clone()));
            }
        }

        match self.local.get_task(id) {
            Ok(Some(task)) => {
                debug!("event=get_task module=repo status=ok source=local id={id}");
                return Ok(Some(task));
            }
            Ok(None) => {}
            Err(err) => {
                warn!("event=get_task module=repo target=local status=error id={id} error={err}");
            }
        }

        match self.remote.get_task(id)? {
            Some(task) => {
                debug!("event=get_task module=repo status=ok source=remote id={id}");
                self.local.save_task(&task)?;
                self.cache_upsert(&task);
                Ok(Some(task))
            }
            None => Ok(None),
        }
    }

    fn save_task(&mut self, task: &Task) -> DataResult<()> {
        self.local.save_task(task)?;
        Self::note_remote_outcome("save_task", self.remote.save_task(task));
        self.cache_upsert(task);
        Ok(())
    }

    fn complete_task(&mut self, id: TaskId) -> DataResult<()> {
        self.local.complete_task(id)?;
        Self::note_remote_outcome("complete_task", self.remote.complete_task(id));
        self.cache_set_completed(id, true);
        Ok(())
    }

    fn activate_task(&mut self, id: TaskId) -> DataResult<()> {
        self.local.activate_task(id)?;
        Self::note_remote_outcome("activate_task", self.remote.activate_task(id));
        self.cache_set_completed(id, false);
        Ok(())
    }

    fn clear_completed_tasks(&mut self) -> DataResult<()> {
        self.local.clear_completed_tasks()?;
        Self::note_remote_outcome("clear_completed_tasks", self.remote.clear_completed_tasks());
        if let Some(cache) = &mut self.cache {
            cache.retain(Task::is_active);
        }
        Ok(())
    }

    /// Clears both sources. The cache becomes present-and-empty: the empty
    /// collection is the last known authoritative state, not an unknown one.
    fn delete_all_tasks(&mut self) -> DataResult<()> {
        self.local.delete_all_tasks()?;
        Self::note_remote_outcome("delete_all_tasks", self.remote.delete_all_tasks());
        self.cache = Some(Vec::new());
        Ok(())
    }

    fn delete_task(&mut self, id: TaskId) -> DataResult<()> {
        self.local.delete_task(id)?;
        Self::note_remote_outcome("delete_task", self.remote.delete_task(id));
        if let Some(cache) = &mut self.cache {
            cache.retain(|task| task.uuid != id);
        }
        Ok(())
    }

    fn refresh_tasks(&mut self) {
        self.invalidate_cache();
    }
}
