//! Domain model for to-do entities.
//!
//! # Responsibility
//! - Define the canonical task record shared by every data source.
//! - Keep content invariants (empty-entity rule, display derivation) in one
//!   place, away from storage and presentation code.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId` that is never reused.
//! - A task with neither title nor description is "empty" and must be
//!   rejected before it reaches any repository write path.

pub mod task;
