//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sukaj_observability::{LogFormat, LogLevel};
use sukaj_preview::lifecycle::{PreviewConfig, DEFAULT_READY_TIMEOUT_MS};

/// File names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["sukaj.toml", ".sukaj.toml", "sukaj.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Catalog data source.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Preview lifecycle tuning.
    #[serde(default)]
    pub preview: PreviewSection,

    /// Structured log output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file; `.json` files are parsed as JSON, anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Lifecycle settings for the preview engine.
    pub fn preview_config(&self) -> PreviewConfig {
        PreviewConfig {
            ready_timeout_ms: self.preview.ready_timeout_ms,
        }
    }
}

/// Catalog data source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Fixture JSON path; the bundled fixture is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixture: Option<String>,
}

/// Preview lifecycle tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewSection {
    /// Time a renderer has to signal ready.
    #[serde(default = "default_ready_timeout")]
    pub ready_timeout_ms: u64,
}

fn default_ready_timeout() -> u64 {
    DEFAULT_READY_TIMEOUT_MS
}

impl Default for PreviewSection {
    fn default() -> Self {
        Self {
            ready_timeout_ms: default_ready_timeout(),
        }
    }
}

/// Structured log output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_format")]
    pub format: LogFormat,

    #[serde(default = "default_log_level")]
    pub level: LogLevel,
}

fn default_log_format() -> LogFormat {
    LogFormat::Human
}

fn default_log_level() -> LogLevel {
    LogLevel::Info
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: default_log_format(),
            level: default_log_level(),
        }
    }
}

/// Generate a default sukaj.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Sukaj catalog tools configuration

[catalog]
# fixture = "data/catalog.json"

[preview]
ready_timeout_ms = {timeout}

[logging]
format = "human"
level = "info"
"#,
        timeout = DEFAULT_READY_TIMEOUT_MS
    )
}
