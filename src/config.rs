use crate::error::{MongoDistError, Result};
use crate::platform::distro::DEFAULT_OS_RELEASE_PATH;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "mongodist.toml";
const DEFAULT_VERSION: &str = "production";

pub const HOME_ENV_VAR: &str = "MONGODIST_HOME";
pub const OS_RELEASE_ENV_VAR: &str = "MONGODIST_OS_RELEASE";
pub const DEFAULT_VERSION_ENV_VAR: &str = "MONGODIST_DEFAULT_VERSION";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MongoDistConfig {
    /// File read to refine Linux into a distribution tag
    #[serde(default = "default_os_release_path")]
    pub os_release_path: PathBuf,

    /// Version used when a command is not given one, release or alias
    #[serde(default = "default_version")]
    pub default_version: String,
}

impl Default for MongoDistConfig {
    fn default() -> Self {
        Self {
            os_release_path: default_os_release_path(),
            default_version: default_version(),
        }
    }
}

fn default_os_release_path() -> PathBuf {
    PathBuf::from(DEFAULT_OS_RELEASE_PATH)
}

fn default_version() -> String {
    DEFAULT_VERSION.to_string()
}

/// `$MONGODIST_HOME`, falling back to `~/.mongodist`.
pub fn config_home() -> Result<PathBuf> {
    if let Ok(home) = env::var(HOME_ENV_VAR) {
        return Ok(PathBuf::from(home));
    }

    dirs::home_dir()
        .map(|home| home.join(".mongodist"))
        .ok_or_else(|| MongoDistError::ConfigError("Unable to find home directory".to_string()))
}

impl MongoDistConfig {
    /// Loads `mongodist.toml` from `config_dir` and applies environment
    /// overrides on top.
    pub fn load(config_dir: &Path) -> Result<Self> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            let contents = fs::read_to_string(&config_path)?;
            let config: MongoDistConfig = toml::from_str(&contents).map_err(|e| {
                MongoDistError::ConfigError(format!("Failed to parse {CONFIG_FILE_NAME}: {e}"))
            })?;
            log::debug!("Loaded config from {config_path:?}");
            config
        } else {
            log::debug!("Config file not found at {config_path:?}, using defaults");
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    pub fn save(&self, config_dir: &Path) -> Result<()> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self).map_err(|e| {
            MongoDistError::ConfigError(format!("Failed to serialize config: {e}"))
        })?;

        fs::write(&config_path, contents)?;
        log::debug!("Saved config to {config_path:?}");
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(path) = env::var(OS_RELEASE_ENV_VAR) {
            log::debug!("Using os-release path from environment: {path}");
            self.os_release_path = PathBuf::from(path);
        }
        if let Ok(version) = env::var(DEFAULT_VERSION_ENV_VAR) {
            log::debug!("Using default version from environment: {version}");
            self.default_version = version;
        }
    }
}
