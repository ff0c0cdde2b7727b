use std::net::SocketAddr;

use serde::Deserialize;

use nametally_core::error::{NametallyError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            server: ServerSection::default(),
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(NametallyError::BadRequest(format!(
                "unsupported config version: {}",
                self.version
            )));
        }
        self.server.validate()?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Root of the procfs tree the stats provider reads from.
    #[serde(default = "default_proc_root")]
    pub proc_root: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            proc_root: default_proc_root(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen.parse::<SocketAddr>().map_err(|e| {
            NametallyError::BadRequest(format!("server.listen must be a socket address: {e}"))
        })?;
        if self.proc_root.is_empty() {
            return Err(NametallyError::BadRequest(
                "server.proc_root must not be empty".into(),
            ));
        }
        Ok(())
    }
}

fn default_version() -> u32 {
    1
}
fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_proc_root() -> String {
    "/proc".into()
}
