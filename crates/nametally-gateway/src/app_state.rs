//! Shared application state for the nametally gateway.
//!
//! The counter and the stats provider are explicitly constructed here and
//! injected into handlers through axum state, so tests can run independent
//! instances in parallel with no shared-state bleed.

use std::sync::Arc;

use nametally_core::NameCounter;

use crate::config::GatewayConfig;
use crate::stats::{ProcfsStatsProvider, SystemStatsProvider};

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    counter: NameCounter,
    stats: Arc<dyn SystemStatsProvider>,
}

impl AppState {
    /// Build application state with the procfs-backed stats provider.
    pub fn new(cfg: GatewayConfig) -> Self {
        let stats = Arc::new(ProcfsStatsProvider::new(cfg.server.proc_root.clone()));
        Self::with_stats(cfg, stats)
    }

    /// Build application state around an explicit stats provider (test seam).
    pub fn with_stats(cfg: GatewayConfig, stats: Arc<dyn SystemStatsProvider>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                counter: NameCounter::new(),
                stats,
            }),
        }
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn counter(&self) -> &NameCounter {
        &self.inner.counter
    }

    pub fn stats(&self) -> Arc<dyn SystemStatsProvider> {
        Arc::clone(&self.inner.stats)
    }
}
