//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record stored by local and remote sources.
//! - Provide completion lifecycle helpers and display-text derivation.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another task.
//! - `completed` is the source of truth for active/completed state.
//! - A task is "empty" iff both `title` and `description` are blank; empty
//!   tasks are rejected at the input boundary, never persisted.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Placeholder shown when a task has neither title nor description.
pub const UNTITLED_PLACEHOLDER: &str = "(untitled)";

/// Maximum characters of derived list text before truncation.
const LIST_TITLE_MAX_CHARS: usize = 64;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Canonical record for one to-do item.
///
/// Title and description may each be blank, but not both at once for a task
/// that is allowed through create/update. `image_url` carries an optional
/// attachment reference and has no behavioral meaning in core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable global ID used for caching, fan-out writes and linking.
    pub uuid: TaskId,
    /// Short user-facing title. May be blank.
    pub title: String,
    /// Longer free-form body. May be blank.
    pub description: String,
    /// Completion flag. New tasks start active.
    pub completed: bool,
    /// Optional attached-image reference.
    pub image_url: Option<String>,
}

impl Task {
    /// Creates a new active task with a generated stable ID.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title, description)
    }

    /// Creates a task with a caller-provided stable ID.
    ///
    /// Used by edit paths and import flows where identity already exists.
    ///
    /// # Invariants
    /// - The provided `uuid` must remain stable for this task's lifetime.
    pub fn with_id(
        uuid: TaskId,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            uuid,
            title: title.into(),
            description: description.into(),
            completed: false,
            image_url: None,
        }
    }

    /// Returns whether both text fields are blank.
    ///
    /// Whitespace-only content counts as blank. This is the rejection
    /// criterion for create/update input validation.
    pub fn is_empty(&self) -> bool {
        self.title.trim().is_empty() && self.description.trim().is_empty()
    }

    /// Returns whether this task is still actionable.
    pub fn is_active(&self) -> bool {
        !self.completed
    }

    /// Marks this task completed.
    pub fn mark_completed(&mut self) {
        self.completed = true;
    }

    /// Marks this task active again.
    pub fn mark_active(&mut self) {
        self.completed = false;
    }

    /// Returns the raw display text: title, else description, else a fixed
    /// placeholder.
    pub fn display_title(&self) -> &str {
        if !self.title.trim().is_empty() {
            &self.title
        } else if !self.description.trim().is_empty() {
            &self.description
        } else {
            UNTITLED_PLACEHOLDER
        }
    }

    /// Derives one-line list text from the display title.
    ///
    /// Rules:
    /// - internal whitespace runs collapse to single spaces,
    /// - result is trimmed and capped at 64 characters with an ellipsis.
    pub fn list_title(&self) -> String {
        let normalized = WHITESPACE_RE.replace_all(self.display_title(), " ");
        let trimmed = normalized.trim();
        if trimmed.chars().count() <= LIST_TITLE_MAX_CHARS {
            return trimmed.to_string();
        }
        let mut truncated = trimmed
            .chars()
            .take(LIST_TITLE_MAX_CHARS)
            .collect::<String>();
        truncated.push_str("...");
        truncated
    }
}
