//! Canned stats provider for tests.

use async_trait::async_trait;

use super::{CpuTimes, LoadAvg, StatsError, SwapMemory, SystemStatsProvider, VirtualMemory};

/// Fixed readings with per-source failure toggles, so route tests can
/// exercise both the healthy path and partial host-stat outages.
#[derive(Debug, Default, Clone)]
pub struct MockStatsProvider {
    pub fail_virtual_memory: bool,
    pub fail_swap_memory: bool,
    pub fail_cpu_times: bool,
    pub fail_load_avg: bool,
}

impl MockStatsProvider {
    pub fn healthy() -> Self {
        Self::default()
    }

    pub fn all_failing() -> Self {
        Self {
            fail_virtual_memory: true,
            fail_swap_memory: true,
            fail_cpu_times: true,
            fail_load_avg: true,
        }
    }

    fn unavailable(source: &str) -> StatsError {
        StatsError::Io {
            path: format!("mock://{source}"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "source disabled"),
        }
    }
}

#[async_trait]
impl SystemStatsProvider for MockStatsProvider {
    async fn virtual_memory(&self) -> Result<VirtualMemory, StatsError> {
        if self.fail_virtual_memory {
            return Err(Self::unavailable("meminfo"));
        }
        Ok(VirtualMemory {
            total: 16 * 1024 * 1024 * 1024,
            available: 12 * 1024 * 1024 * 1024,
            free: 8 * 1024 * 1024 * 1024,
            used: 4 * 1024 * 1024 * 1024,
            used_percent: 25.0,
        })
    }

    async fn swap_memory(&self) -> Result<SwapMemory, StatsError> {
        if self.fail_swap_memory {
            return Err(Self::unavailable("meminfo"));
        }
        Ok(SwapMemory {
            total: 4 * 1024 * 1024 * 1024,
            free: 4 * 1024 * 1024 * 1024,
            used: 0,
            used_percent: 0.0,
        })
    }

    async fn cpu_times(&self) -> Result<Vec<CpuTimes>, StatsError> {
        if self.fail_cpu_times {
            return Err(Self::unavailable("stat"));
        }
        Ok(vec![
            CpuTimes {
                cpu: "cpu0".into(),
                user: 43.0,
                nice: 0.1,
                system: 16.0,
                idle: 4910.0,
                iowait: 2.3,
                irq: 0.0,
                softirq: 0.6,
                steal: 0.0,
            },
            CpuTimes {
                cpu: "cpu1".into(),
                user: 42.2,
                nice: 0.1,
                system: 14.5,
                idle: 4913.4,
                iowait: 1.9,
                irq: 0.0,
                softirq: 0.5,
                steal: 0.0,
            },
        ])
    }

    async fn load_avg(&self) -> Result<LoadAvg, StatsError> {
        if self.fail_load_avg {
            return Err(Self::unavailable("loadavg"));
        }
        Ok(LoadAvg {
            load1: 0.52,
            load5: 0.58,
            load15: 0.59,
        })
    }
}
