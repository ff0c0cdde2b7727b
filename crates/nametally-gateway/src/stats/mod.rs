//! Host resource statistics for the `/health` route.
//!
//! The route only depends on the [`SystemStatsProvider`] trait; the procfs
//! implementation lives in [`procfs`] and a canned one for tests in [`mock`].
//! Each of the four readings is queried independently so one unavailable
//! source never takes down the others.

pub mod mock;
pub mod procfs;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

pub use mock::MockStatsProvider;
pub use procfs::ProcfsStatsProvider;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("read {path} failed: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("parse {path} failed: {reason}")]
    Parse { path: String, reason: String },
}

/// RAM usage, byte-valued except the percentage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VirtualMemory {
    pub total: u64,
    pub available: u64,
    pub free: u64,
    pub used: u64,
    pub used_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwapMemory {
    pub total: u64,
    pub free: u64,
    pub used: u64,
    pub used_percent: f64,
}

/// Cumulative time one core spent in each state, in seconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CpuTimes {
    /// Core label, e.g. `cpu0`.
    pub cpu: String,
    pub user: f64,
    pub nice: f64,
    pub system: f64,
    pub idle: f64,
    pub iowait: f64,
    pub irq: f64,
    pub softirq: f64,
    pub steal: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadAvg {
    pub load1: f64,
    pub load5: f64,
    pub load15: f64,
}

/// Source of host CPU/memory/load readings.
///
/// Every call re-queries the host; implementations do not cache.
#[async_trait]
pub trait SystemStatsProvider: Send + Sync {
    async fn virtual_memory(&self) -> Result<VirtualMemory, StatsError>;
    async fn swap_memory(&self) -> Result<SwapMemory, StatsError>;
    /// Per-core cumulative CPU times.
    async fn cpu_times(&self) -> Result<Vec<CpuTimes>, StatsError>;
    async fn load_avg(&self) -> Result<LoadAvg, StatsError>;
}
