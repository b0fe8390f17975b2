//! Repository layer composing data sources behind a cache.
//!
//! # Responsibility
//! - Give callers one interface over however many backends exist.
//! - Own the in-memory collection cache and keep it consistent with writes.
//!
//! # Invariants
//! - The cache is all-or-nothing: either absent or a complete snapshot of
//!   the last authoritative read plus local mutations applied through the
//!   repository itself.
//! - Nothing outside the repository may mutate the cache.

pub mod tasks_repo;
