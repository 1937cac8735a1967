use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Command '{0}' failed with exit code {1}")]
    CommandFailed(String, i32),

    #[error("Command '{0}' not found — is it installed?")]
    CommandNotFound(String),

    #[error("Could not back up {}: {source}", .path.display())]
    Backup { path: PathBuf, source: io::Error },

    #[error("Could not read {}: {source}", .path.display())]
    ReadConfig { path: PathBuf, source: io::Error },

    #[error("Could not write {}: {source}", .path.display())]
    WriteConfig { path: PathBuf, source: io::Error },

    #[error("This tool must be run as root (sudo)")]
    NotRoot,

    #[error("invalid action '{0}' (use enable|disable)")]
    InvalidAction(String),

    #[error("Terminal error: {0}")]
    Terminal(io::Error),

    #[error("Failed to update kernel parameters: {0}")]
    Apply(Box<ConfigError>),

    #[error("Failed to clear kernel parameters: {0}")]
    Clear(Box<ConfigError>),
}
