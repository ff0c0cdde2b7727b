//! nametally core: the name-count tally and the shared error surface.
//!
//! This crate holds the only piece of the system with a real concurrency
//! contract — [`counter::NameCounter`] — plus the error type shared with the
//! gateway. It intentionally carries no transport or runtime dependencies so
//! it can be exercised from plain threaded tests.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `NametallyError`/`Result` so the serving
//! process does not crash on bad traffic.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod counter;
pub mod error;

pub use counter::{NameCount, NameCounter};
/// Shared result type.
pub use error::{NametallyError, Result};
