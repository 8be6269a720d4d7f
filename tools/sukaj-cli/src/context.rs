//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use sukaj_catalog::catalog::CatalogFixture;
use sukaj_catalog::Catalog;
use sukaj_observability::{SessionId, StructuredLogger};

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Fixture override from the command line.
    pub fixture_override: Option<PathBuf>,
    /// Session shared by every log line of this run.
    pub session_id: SessionId,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, fixture: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            let path = resolve(&cwd, path);
            (CliConfig::load(&path)?, Some(path))
        } else {
            // Try to find config in current directory or parent directories
            match find_config(&cwd) {
                Some(path) => (CliConfig::load(&path)?, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        if let Some(path) = &config_path {
            output.debug(&format!("Using config {}", path.display()));
        }

        Ok(Self {
            config,
            config_path,
            output,
            fixture_override: fixture.map(|f| resolve(&cwd, f)),
            cwd,
            session_id: SessionId::generate(),
        })
    }

    /// Fixture path in effect: command line, then config, then none (bundled).
    pub fn fixture_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.fixture_override {
            return Some(path.clone());
        }
        let configured = self.config.catalog.fixture.as_deref()?;
        // Config paths are relative to the config file.
        let base = self
            .config_path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(self.cwd.as_path());
        Some(resolve(base, configured))
    }

    /// Read the fixture without validating it.
    pub fn fixture(&self) -> Result<CatalogFixture> {
        match self.fixture_path() {
            Some(path) => {
                self.output.debug(&format!("Loading fixture {}", path.display()));
                CatalogFixture::from_path(&path)
                    .with_context(|| format!("Failed to load fixture {}", path.display()))
            }
            None => CatalogFixture::bundled().context("Failed to load bundled fixture"),
        }
    }

    /// Load and validate the catalog.
    pub fn catalog(&self) -> Result<Catalog> {
        let fixture = self.fixture()?;
        Catalog::from_fixture(fixture)
            .context("Catalog fixture failed validation (run `sukaj validate` for details)")
    }

    /// Structured logger for a command, configured from `[logging]`.
    pub fn logger(&self, command: &str) -> StructuredLogger {
        StructuredLogger::new(self.session_id.clone())
            .with_command(command)
            .with_format(self.config.logging.format)
            .with_min_level(self.config.logging.level)
    }
}

/// Find the nearest config file walking up from `start`.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_FILE_NAMES {
            let config_path = current.join(name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Resolve a path relative to `base`.
fn resolve(base: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}
