//! Configuration loading
//!
//! Resolution priority for the configuration file:
//! 1. Command-line argument (highest priority)
//! 2. `PLACAR_CONFIG` environment variable
//! 3. Platform default path (`~/.config/placar/placar.toml`)
//! 4. Compiled defaults (fallback)
//!
//! A missing file degrades to compiled defaults with a warning; a file
//! that exists but cannot be read or parsed is a configuration error.
//! The only hard requirement is `ranking_url` — the service cannot ingest
//! anything without its primary dataset.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{Error, Result};

/// Default HTTP listen port
pub const DEFAULT_PORT: u16 = 5780;
/// Default seconds between ingestion cycles
pub const DEFAULT_REFRESH_SECONDS: u64 = 300;

/// Challenge window section of placar.toml
///
/// Timestamps are RFC3339 strings (e.g. `"2026-02-01T00:00:00Z"`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChallengeConfig {
    /// First instant of the challenge
    pub start: DateTime<Utc>,
    /// Last instant of the challenge
    pub end: DateTime<Utc>,
}

/// placar.toml schema
///
/// Every field is optional so that partial files (and no file at all)
/// degrade gracefully.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    /// Published CSV export of the ranking sheet (required to start)
    pub ranking_url: Option<String>,
    /// Published CSV export of the media feed sheet
    pub feed_url: Option<String>,
    /// Published CSV export of the activity sheet
    pub activity_url: Option<String>,
    /// HTTP listen port
    pub listen_port: Option<u16>,
    /// Seconds between ingestion cycles
    pub refresh_seconds: Option<u64>,
    /// Challenge window for progress reporting
    pub challenge: Option<ChallengeConfig>,
}

impl TomlConfig {
    /// Load a configuration file.
    ///
    /// A missing file is not an error: it logs a warning and yields
    /// defaults, so the service can still start and report what is
    /// missing.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            warn!(
                "Configuration file {} not found, using compiled defaults",
                path.display()
            );
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }
}

/// Fully resolved service configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub ranking_url: String,
    pub feed_url: Option<String>,
    pub activity_url: Option<String>,
    pub listen_port: u16,
    pub refresh_seconds: u64,
    pub challenge: Option<ChallengeConfig>,
}

impl Config {
    /// Resolve configuration from the highest-priority available source.
    pub fn resolve(cli_path: Option<&Path>) -> Result<Self> {
        let toml = match config_file_path(cli_path) {
            Some(path) => TomlConfig::load(&path)?,
            None => {
                warn!("No configuration file found, using compiled defaults");
                TomlConfig::default()
            }
        };
        Self::from_toml(toml)
    }

    /// Apply defaults and validate the one hard requirement.
    pub fn from_toml(toml: TomlConfig) -> Result<Self> {
        let ranking_url = toml
            .ranking_url
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| {
                Error::Config(
                    "ranking_url is not configured. Set it using one of:\n\
                     1. TOML config: ~/.config/placar/placar.toml (ranking_url = \"https://...\")\n\
                     2. A file named by the PLACAR_CONFIG environment variable\n\
                     3. A file passed with --config"
                        .to_string(),
                )
            })?;

        Ok(Self {
            ranking_url,
            feed_url: toml.feed_url.filter(|url| !url.trim().is_empty()),
            activity_url: toml.activity_url.filter(|url| !url.trim().is_empty()),
            listen_port: toml.listen_port.unwrap_or(DEFAULT_PORT),
            refresh_seconds: toml.refresh_seconds.unwrap_or(DEFAULT_REFRESH_SECONDS),
            challenge: toml.challenge,
        })
    }
}

/// Locate the configuration file following the priority order.
///
/// A CLI argument or `PLACAR_CONFIG` is returned even when the file does
/// not exist (the load step reports the degradation); the platform
/// default path is only returned when present.
pub fn config_file_path(cli_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = cli_path {
        return Some(path.to_path_buf());
    }
    if let Ok(path) = std::env::var("PLACAR_CONFIG") {
        return Some(PathBuf::from(path));
    }
    default_config_path().filter(|path| path.exists())
}

/// Platform default: `<config dir>/placar/placar.toml`
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("placar").join("placar.toml"))
}
