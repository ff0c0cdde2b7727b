//! Procfs-backed stats provider (Linux).
//!
//! Reads `meminfo`, `stat`, and `loadavg` under a configurable root so tests
//! can point it at fixture trees. Parsing is split into pure functions that
//! are unit-tested on captured file contents.

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;

use super::{CpuTimes, LoadAvg, StatsError, SwapMemory, SystemStatsProvider, VirtualMemory};

/// Kernel jiffies per second; /proc/stat times are reported in jiffies.
const USER_HZ: f64 = 100.0;

pub struct ProcfsStatsProvider {
    root: PathBuf,
}

impl ProcfsStatsProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    async fn read(&self, name: &str) -> Result<(String, String), StatsError> {
        let path = self.root.join(name);
        let label = path.display().to_string();
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| StatsError::Io {
                path: label.clone(),
                source,
            })?;
        Ok((content, label))
    }
}

#[async_trait]
impl SystemStatsProvider for ProcfsStatsProvider {
    async fn virtual_memory(&self) -> Result<VirtualMemory, StatsError> {
        let (content, path) = self.read("meminfo").await?;
        parse_virtual_memory(&content).map_err(|reason| StatsError::Parse { path, reason })
    }

    async fn swap_memory(&self) -> Result<SwapMemory, StatsError> {
        let (content, path) = self.read("meminfo").await?;
        parse_swap_memory(&content).map_err(|reason| StatsError::Parse { path, reason })
    }

    async fn cpu_times(&self) -> Result<Vec<CpuTimes>, StatsError> {
        let (content, path) = self.read("stat").await?;
        parse_cpu_times(&content).map_err(|reason| StatsError::Parse { path, reason })
    }

    async fn load_avg(&self) -> Result<LoadAvg, StatsError> {
        let (content, path) = self.read("loadavg").await?;
        parse_load_avg(&content).map_err(|reason| StatsError::Parse { path, reason })
    }
}

/// `MemTotal:  16384256 kB` lines into a field -> bytes map.
fn meminfo_fields(content: &str) -> HashMap<&str, u64> {
    let mut fields = HashMap::new();
    for line in content.lines() {
        let Some((key, rest)) = line.split_once(':') else {
            continue;
        };
        let mut parts = rest.split_whitespace();
        let Some(value) = parts.next().and_then(|v| v.parse::<u64>().ok()) else {
            continue;
        };
        // Values are in kB unless no unit is given.
        let bytes = match parts.next() {
            Some("kB") => value * 1024,
            _ => value,
        };
        fields.insert(key.trim(), bytes);
    }
    fields
}

fn require(fields: &HashMap<&str, u64>, key: &str) -> Result<u64, String> {
    fields.get(key).copied().ok_or_else(|| format!("missing field {key}"))
}

fn percent(used: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        used as f64 / total as f64 * 100.0
    }
}

fn parse_virtual_memory(content: &str) -> Result<VirtualMemory, String> {
    let fields = meminfo_fields(content);
    let total = require(&fields, "MemTotal")?;
    let free = require(&fields, "MemFree")?;
    // MemAvailable is absent on pre-3.14 kernels; free is the usable fallback.
    let available = fields.get("MemAvailable").copied().unwrap_or(free);
    let buffers = fields.get("Buffers").copied().unwrap_or(0);
    let cached = fields.get("Cached").copied().unwrap_or(0);
    let used = total.saturating_sub(free + buffers + cached);
    Ok(VirtualMemory {
        total,
        available,
        free,
        used,
        used_percent: percent(used, total),
    })
}

fn parse_swap_memory(content: &str) -> Result<SwapMemory, String> {
    let fields = meminfo_fields(content);
    let total = require(&fields, "SwapTotal")?;
    let free = require(&fields, "SwapFree")?;
    let used = total.saturating_sub(free);
    Ok(SwapMemory {
        total,
        free,
        used,
        used_percent: percent(used, total),
    })
}

fn parse_cpu_times(content: &str) -> Result<Vec<CpuTimes>, String> {
    let mut cores = Vec::new();
    for line in content.lines() {
        let mut parts = line.split_whitespace();
        let Some(label) = parts.next() else { continue };
        // Per-core lines only; the aggregate "cpu" line has no digit suffix.
        if !label.starts_with("cpu") || label == "cpu" {
            continue;
        }
        let mut next = || -> Result<f64, String> {
            let raw = parts
                .next()
                .ok_or_else(|| format!("truncated {label} line"))?;
            let jiffies: f64 = raw
                .parse()
                .map_err(|_| format!("bad jiffy value on {label}: {raw}"))?;
            Ok(jiffies / USER_HZ)
        };
        cores.push(CpuTimes {
            cpu: label.to_string(),
            user: next()?,
            nice: next()?,
            system: next()?,
            idle: next()?,
            iowait: next()?,
            irq: next()?,
            softirq: next()?,
            steal: next()?,
        });
    }
    if cores.is_empty() {
        return Err("no per-core cpu lines".into());
    }
    Ok(cores)
}

fn parse_load_avg(content: &str) -> Result<LoadAvg, String> {
    let mut parts = content.split_whitespace();
    let mut next = || -> Result<f64, String> {
        let raw = parts.next().ok_or("truncated loadavg")?;
        raw.parse().map_err(|_| format!("bad load value: {raw}"))
    };
    Ok(LoadAvg {
        load1: next()?,
        load5: next()?,
        load15: next()?,
    })
}
