//! Service config loader (strict parsing).

pub mod schema;

use std::fs;
use std::io::ErrorKind;

use monit_core::error::{MonitError, Result};

pub use schema::{MonitorSection, ServerConfig, ServerSection};

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "MONIT_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "monit.yaml";

pub fn load_from_file(path: &str) -> Result<ServerConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| MonitError::Config(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

/// Like [`load_from_file`], but a missing file yields the defaults.
pub fn load_or_default(path: &str) -> Result<ServerConfig> {
    match fs::read_to_string(path) {
        Ok(s) => load_from_str(&s),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(%path, "no config file; using defaults");
            Ok(ServerConfig::default())
        }
        Err(e) => Err(MonitError::Config(format!("read config failed ({path}): {e}"))),
    }
}

pub fn load_from_str(s: &str) -> Result<ServerConfig> {
    let cfg: ServerConfig = serde_yaml::from_str(s)
        .map_err(|e| MonitError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
