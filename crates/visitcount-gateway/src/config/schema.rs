use std::net::SocketAddr;
use std::path::PathBuf;

use serde::Deserialize;
use visitcount_core::error::{Result, VisitCountError};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CounterConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub store: StoreSection,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            version: 1,
            gateway: GatewaySection::default(),
            store: StoreSection::default(),
        }
    }
}

impl CounterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(VisitCountError::UnsupportedVersion);
        }
        self.gateway.validate()?;
        self.store.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self { listen: default_listen() }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|_| {
            VisitCountError::InvalidInput(format!(
                "gateway.listen must be a valid socket address, got {:?}",
                self.listen
            ))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackend {
    #[default]
    Memory,
    Sqlite,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreSection {
    #[serde(default)]
    pub backend: StoreBackend,

    #[serde(default = "default_table")]
    pub table: String,

    #[serde(default)]
    pub sqlite_path: Option<PathBuf>,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            table: default_table(),
            sqlite_path: None,
        }
    }
}

impl StoreSection {
    pub fn validate(&self) -> Result<()> {
        // same naming rules a managed key-value table has; also keeps the
        // name safe to quote as a SQL identifier
        let valid_chars = self
            .table
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
        if !(3..=255).contains(&self.table.len()) || !valid_chars {
            return Err(VisitCountError::InvalidInput(
                "store.table must be 3-255 characters of [A-Za-z0-9_.-]".into(),
            ));
        }

        match (self.backend, &self.sqlite_path) {
            (StoreBackend::Sqlite, None) => Err(VisitCountError::InvalidInput(
                "store.sqlite_path is required when store.backend is sqlite".into(),
            )),
            (StoreBackend::Memory, Some(_)) => Err(VisitCountError::InvalidInput(
                "store.sqlite_path is only valid with store.backend sqlite".into(),
            )),
            _ => Ok(()),
        }
    }
}

fn default_table() -> String {
    "visitor-counts".into()
}
