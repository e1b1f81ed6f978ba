//! Gateway config loader (strict parsing).

pub mod schema;

use std::fs;

use visitcount_core::error::{Result, VisitCountError};

pub use schema::{CounterConfig, GatewaySection, StoreBackend, StoreSection};

/// Environment variable consulted when no config path is passed on the command line.
pub const CONFIG_ENV: &str = "VISITCOUNT_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "visitcount.yaml";

/// Pick the config path: explicit argument, then `VISITCOUNT_CONFIG`, then the default.
pub fn resolve_path(arg: Option<String>) -> String {
    arg.or_else(|| std::env::var(CONFIG_ENV).ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string())
}

pub fn load_from_file(path: &str) -> Result<CounterConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| VisitCountError::Unexpected(format!("read config {path} failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<CounterConfig> {
    let cfg: CounterConfig = serde_yaml::from_str(s)
        .map_err(|e| VisitCountError::InvalidInput(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
