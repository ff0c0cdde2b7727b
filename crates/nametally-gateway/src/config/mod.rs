//! Gateway config loader (strict parsing).

pub mod schema;

use std::fs;
use std::path::Path;

use nametally_core::error::{NametallyError, Result};

pub use schema::{GatewayConfig, ServerSection};

pub fn load_from_file(path: &str) -> Result<GatewayConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| NametallyError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg: GatewayConfig = serde_yaml::from_str(s)
        .map_err(|e| NametallyError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Load `path` if it exists, otherwise fall back to built-in defaults.
/// The service has no required configuration surface beyond the listen port.
pub fn load_or_default(path: &str) -> Result<GatewayConfig> {
    if Path::new(path).exists() {
        load_from_file(path)
    } else {
        Ok(GatewayConfig::default())
    }
}
