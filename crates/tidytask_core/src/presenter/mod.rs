//! Presentation-logic layer: intents in, view-state out.
//!
//! # Responsibility
//! - Translate user intents into repository calls and repository results
//!   into view-state signals.
//! - Stay free of any rendering concern; views are traits the caller
//!   implements.
//!
//! # Invariants
//! - Presenters never store a view. Each intent call borrows the view for
//!   its duration only, so a presenter cannot outlive or leak one.
//! - Repository-reported unavailability is the only recognized failure; it
//!   is surfaced once per intent and never retried automatically.

pub mod add_edit_presenter;
pub mod detail_presenter;
pub mod filter;
pub mod stats_presenter;
pub mod tasks_presenter;
