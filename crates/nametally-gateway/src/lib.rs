//! nametally gateway library entry.
//!
//! This crate wires config, shared state, the axum router, the three route
//! handlers, and the system-stats provider into a cohesive service. It is
//! intended to be consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod handlers;
pub mod router;
pub mod stats;
