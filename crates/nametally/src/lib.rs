//! Top-level facade crate for nametally.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use nametally_core::*;
}

pub mod gateway {
    pub use nametally_gateway::*;
}
