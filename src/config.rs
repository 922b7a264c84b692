//! Configuration resolution for riskdesk
//!
//! Settings resolve with priority: command line > environment variable > TOML
//! config file > compiled default. The CLI and environment tiers are handled
//! by clap (`env = "RISKDESK_*"` on each flag); anything still unset falls
//! through to the TOML file, then to the defaults below.

use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

use crate::models::ScoringRules;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DATABASE: &str = "riskdesk.db";
pub const DEFAULT_SCORING_TIMEOUT_SECS: u64 = 10;

/// Command-line arguments for riskdesk
#[derive(Parser, Debug, Default)]
#[command(name = "riskdesk")]
#[command(about = "Transaction fraud scoring and reporting service")]
#[command(version)]
pub struct Args {
    /// Port to listen on
    #[arg(short, long, env = "RISKDESK_PORT")]
    pub port: Option<u16>,

    /// Path to the SQLite database file
    #[arg(short, long, env = "RISKDESK_DATABASE")]
    pub database: Option<PathBuf>,

    /// Remote scoring service URL (omit to always score locally)
    #[arg(long, env = "RISKDESK_SCORING_URL")]
    pub scoring_url: Option<String>,

    /// Remote scoring timeout in seconds
    #[arg(long, env = "RISKDESK_SCORING_TIMEOUT")]
    pub scoring_timeout_secs: Option<u64>,

    /// Path to the TOML config file
    #[arg(short, long, env = "RISKDESK_CONFIG", default_value = "riskdesk.toml")]
    pub config: PathBuf,
}

/// TOML config file contents. Every field is optional; absent keys fall
/// through to compiled defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub port: Option<u16>,
    pub database: Option<PathBuf>,
    pub scoring: ScoringSection,
}

/// `[scoring]` table: delegation endpoint plus the `[scoring.rules]`
/// threshold overrides.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScoringSection {
    pub url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub rules: ScoringRules,
}

/// Fully resolved runtime configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub database: PathBuf,
    pub scoring_url: Option<String>,
    pub scoring_timeout: Duration,
    pub rules: ScoringRules,
}

impl AppConfig {
    /// Resolve the runtime configuration from parsed CLI arguments and the
    /// TOML file they point at.
    pub fn resolve(args: &Args) -> Self {
        let file = load_toml_config(&args.config);

        let port = args.port.or(file.port).unwrap_or(DEFAULT_PORT);

        let database = args
            .database
            .clone()
            .or(file.database)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE));

        let scoring_url = args.scoring_url.clone().or(file.scoring.url);

        let timeout_secs = args
            .scoring_timeout_secs
            .or(file.scoring.timeout_secs)
            .unwrap_or(DEFAULT_SCORING_TIMEOUT_SECS);

        AppConfig {
            port,
            database,
            scoring_url,
            scoring_timeout: Duration::from_secs(timeout_secs),
            rules: file.scoring.rules,
        }
    }
}

/// Read and parse the TOML config file. A missing file is normal (compiled
/// defaults apply); an unreadable or malformed file is logged and ignored
/// rather than aborting startup.
fn load_toml_config(path: &Path) -> TomlConfig {
    if !path.exists() {
        return TomlConfig::default();
    }

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!("Failed to read config file {}: {}", path.display(), e);
            return TomlConfig::default();
        }
    };

    match toml::from_str(&content) {
        Ok(config) => {
            info!("Loaded configuration from {}", path.display());
            config
        }
        Err(e) => {
            warn!("Ignoring malformed config file {}: {}", path.display(), e);
            TomlConfig::default()
        }
    }
}
