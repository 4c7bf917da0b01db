use std::io;
use thiserror::Error;

use crate::config::settings::ConfigError;

/// Errors that can occur while driving the svn client
#[derive(Debug, Error)]
pub enum SvnError {
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("svn command failed: {0}")]
    CommandFailed(String),

    #[error("Failed to parse svn output: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl From<ConfigError> for SvnError {
    fn from(err: ConfigError) -> Self {
        SvnError::Configuration(err.to_string())
    }
}

/// Result type for svn operations
pub type SvnResult<T> = std::result::Result<T, SvnError>;
