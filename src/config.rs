//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Settings file: `--config <FILE>`, else `$XDG_CONFIG_HOME/rwalk/rwalk.toml`
//! 3. Environment variables: `RWALK_*` prefix
//! 4. Command-line flags (applied by the CLI layer)

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::Deserialize;
use tracing::debug;

use crate::application::{parse_iterations, ApplicationError, DEFAULT_ITERATIONS};
use crate::domain::{Point, PointFormat};

/// Simulation defaults as configured outside the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Iterations when none is given on the command line (default: 10)
    pub iterations: u64,
    /// Output rendering (default: bare)
    pub format: PointFormat,
    /// Fixed RNG seed (default: entropy)
    pub seed: Option<u64>,
    /// Starting point (default: origin)
    pub start: Point,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            format: PointFormat::default(),
            seed: None,
            start: Point::origin(),
        }
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct RawSettings {
    pub iterations: Option<u64>,
    pub format: Option<PointFormat>,
    pub seed: Option<u64>,
    pub start: Option<Point>,
}

/// Get the XDG config directory for rwalk.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "rwalk").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("rwalk.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            iterations: overlay.iterations.unwrap_or(self.iterations),
            format: overlay.format.unwrap_or(self.format),
            seed: overlay.seed.or(self.seed),
            start: overlay.start.unwrap_or(self.start),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// An explicit `config_file` replaces the global file and must exist; the
    /// global file is optional.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_with_env(config_file, None)
    }

    /// Like [`Settings::load`], reading `RWALK_*` variables from `env` instead
    /// of the process environment when given.
    pub fn load_with_env(
        config_file: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Settings file
        match config_file {
            Some(path) => {
                debug!("loading settings from {}", path.display());
                current = current.merge_with(&load_raw_settings(path)?);
            }
            None => {
                if let Some(global_path) = global_config_path() {
                    if global_path.exists() {
                        debug!("loading settings from {}", global_path.display());
                        current = current.merge_with(&load_raw_settings(&global_path)?);
                    }
                }
            }
        }

        // 3. Environment variables (explicit override)
        current = Self::apply_env_overrides(current, env)?;

        Ok(current)
    }

    /// Apply RWALK_* environment variables as explicit overrides.
    fn apply_env_overrides(
        mut settings: Self,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("RWALK").source(env))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("iterations") {
            settings.iterations = parse_iterations(&val).map_err(|e| ApplicationError::Config {
                message: format!("RWALK_ITERATIONS: {e}"),
            })?;
        }
        if let Ok(val) = config.get_string("format") {
            settings.format = val.parse()?;
        }
        if let Ok(val) = config.get_string("seed") {
            settings.seed = Some(val.trim().parse().map_err(|_| ApplicationError::Config {
                message: format!("RWALK_SEED: not an unsigned integer: {val}"),
            })?);
        }
        if let Ok(val) = config.get_string("start") {
            settings.start = val.parse()?;
        }

        Ok(settings)
    }
}
