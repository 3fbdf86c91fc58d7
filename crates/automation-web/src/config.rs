//! Server configuration from environment variables.
//!
//!   AUTOMATION_DATA_PATH      : rules workbook or CSV (default: data/automation_conditions.xlsx)
//!   AUTOMATION_SHEET          : sheet name (default: Condiciones Nivel de Automatiza)
//!   AUTOMATION_COLUMNS_CONFIG : optional YAML column mapping override
//!   AUTOMATION_ASSETS_DIR     : directory served under /assets (default: assets)
//!   AUTOMATION_BIND_ADDR      : listen address (default: 0.0.0.0:8050)

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use automation_core::{ColumnMapping, SourceConfig, DEFAULT_SHEET};

pub const DEFAULT_DATA_PATH: &str = "data/automation_conditions.xlsx";
pub const DEFAULT_ASSETS_DIR: &str = "assets";
pub const DEFAULT_BIND_ADDR: SocketAddr =
    SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 8050);

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub source: SourceConfig,
    pub assets_dir: PathBuf,
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let data_path = var("AUTOMATION_DATA_PATH").unwrap_or_else(|| DEFAULT_DATA_PATH.into());
        let sheet = var("AUTOMATION_SHEET").unwrap_or_else(|| DEFAULT_SHEET.into());

        let columns = match var("AUTOMATION_COLUMNS_CONFIG") {
            Some(path) => ColumnMapping::from_file(Path::new(&path))
                .with_context(|| format!("failed to load column mapping from {path}"))?,
            None => ColumnMapping::default(),
        };

        let bind_addr: SocketAddr = var("AUTOMATION_BIND_ADDR")
            .and_then(|raw| match raw.parse() {
                Ok(addr) => Some(addr),
                Err(e) => {
                    tracing::warn!(
                        "Invalid AUTOMATION_BIND_ADDR {raw:?}, using default {DEFAULT_BIND_ADDR}: {e}"
                    );
                    None
                }
            })
            .unwrap_or(DEFAULT_BIND_ADDR);

        Ok(Self {
            source: SourceConfig::new(data_path)
                .with_sheet(sheet)
                .with_columns(columns),
            assets_dir: var("AUTOMATION_ASSETS_DIR")
                .unwrap_or_else(|| DEFAULT_ASSETS_DIR.into())
                .into(),
            bind_addr,
        })
    }
}
