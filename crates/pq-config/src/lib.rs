//! pq-config: machine configuration file format, environment overrides and
//! fallback handling.

pub mod env;
pub mod schema;
pub mod validate;

pub use env::{EnvSource, ProcessEnv};
pub use schema::*;
pub use validate::{ConfigWarning, apply_overrides};

use pq_core::Machine;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Config file looked up when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

/// Read a config file. `.json` is parsed as JSON, anything else as YAML.
pub fn load_file(path: &Path) -> ConfigResult<MachineConfig> {
    let content = std::fs::read_to_string(path)?;
    let config = if is_json(path) {
        serde_json::from_str(&content)?
    } else {
        serde_yaml::from_str(&content)?
    };
    Ok(config)
}

/// Write a config file in the format implied by its extension.
pub fn save_file(path: &Path, config: &MachineConfig) -> ConfigResult<()> {
    let content = if is_json(path) {
        serde_json::to_string_pretty(config)?
    } else {
        serde_yaml::to_string(config)?
    };
    std::fs::write(path, content)?;
    Ok(())
}

/// Effective configuration plus everything that had to be patched up.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub config: MachineConfig,
    pub warnings: Vec<ConfigWarning>,
    /// File the values came from, if one was read.
    pub source: Option<PathBuf>,
}

impl LoadedConfig {
    /// True when any value had to be replaced by a default.
    pub fn used_defaults(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Machine built from the effective values.
    ///
    /// The values were already repaired by [`apply_overrides`], so this only
    /// falls back to the default machine if that invariant was broken.
    pub fn machine(&self) -> Machine {
        Machine::new(
            self.config.s_rated_mva,
            self.config.p_max_mw,
            self.config.q_max_mvar,
        )
        .unwrap_or_else(|err| {
            warn!("{err}; using default machine");
            Machine::default()
        })
    }
}

/// Load the startup configuration. Never fails.
///
/// - `path = None`: read [`DEFAULT_CONFIG_PATH`] if it exists, else defaults
/// - `path = Some(p)`: read `p`; a missing or broken file is a warning
///
/// Environment overrides from `env` are applied on top of the file values.
pub fn load_config(path: Option<&Path>, env: &dyn EnvSource) -> LoadedConfig {
    load_config_from(path, Path::new(DEFAULT_CONFIG_PATH), env)
}

/// [`load_config`] with the fallback location given explicitly.
///
/// `default_path` is only read when it exists; its absence is not a warning.
pub fn load_config_from(
    path: Option<&Path>,
    default_path: &Path,
    env: &dyn EnvSource,
) -> LoadedConfig {
    let mut warnings = Vec::new();

    let candidate = match path {
        Some(p) => Some(p.to_path_buf()),
        None => default_path.exists().then(|| default_path.to_path_buf()),
    };

    let (file_config, source) = match candidate {
        None => (MachineConfig::default(), None),
        Some(p) => match load_file(&p) {
            Ok(cfg) => {
                debug!(path = %p.display(), "loaded machine config");
                (cfg, Some(p))
            }
            Err(err) => {
                let warning = ConfigWarning::FileUnreadable {
                    path: p,
                    reason: err.to_string(),
                };
                warn!("{warning}");
                warnings.push(warning);
                (MachineConfig::default(), None)
            }
        },
    };

    let config = apply_overrides(file_config, env, &mut warnings);

    LoadedConfig {
        config,
        warnings,
        source,
    }
}
