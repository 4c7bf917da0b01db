use crate::error::SvnResult;
use crate::svn::repository::SvnRepository;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}

/// Monitor configuration: the svn client to use and the repositories to
/// poll
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub svn: SvnSettings,
    #[serde(default)]
    pub repositories: Vec<RepositorySettings>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SvnSettings {
    #[serde(default = "default_binary")]
    pub binary: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RepositorySettings {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

fn default_binary() -> String {
    "svn".to_string()
}

impl Default for SvnSettings {
    fn default() -> Self {
        Self {
            binary: default_binary(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;

        // Validate config
        config.validate()?;

        Ok(config)
    }

    /// Save configuration to a file
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        // Validate before saving
        self.validate()?;

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.svn.binary.is_empty() {
            return Err(ConfigError::InvalidValue(
                "svn.binary must not be empty".to_string(),
            ));
        }

        for repository in &self.repositories {
            if repository.url.is_empty() {
                return Err(ConfigError::InvalidValue(
                    "repository url must not be empty".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Build one client per configured repository, all using the
    /// configured binary
    pub fn open_repositories(&self) -> SvnResult<Vec<SvnRepository>> {
        self.repositories
            .iter()
            .map(|settings| {
                SvnRepository::from_settings(settings)
                    .map(|repository| repository.with_binary(self.svn.binary.as_str()))
            })
            .collect()
    }
}
