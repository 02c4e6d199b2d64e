//! Persistent storage
//!
//! This module handles persistence of chat and system configurations and
//! resolves the host directories they live in.

pub mod chat_config;
pub mod system_config;

use crate::validation::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or writing configuration files
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no path specified")]
    NoPathSpecified,
    #[error("could not determine the user's home directory")]
    NoHomeDirectory,
    #[error("invalid configuration: {0}")]
    Invalid(#[from] ValidationError),
    #[error("invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

fn project_dirs() -> Result<directories::ProjectDirs, StorageError> {
    directories::ProjectDirs::from("com", "technopraxia", "enchat")
        .ok_or(StorageError::NoHomeDirectory)
}

/// Directory holding the system configuration file
///
/// Linux: ~/.config/enchat, macOS: ~/Library/Application Support/com.technopraxia.enchat
pub fn get_config_dir() -> Result<PathBuf, StorageError> {
    Ok(project_dirs()?.config_dir().to_path_buf())
}

/// Directory holding saved chat configurations
pub fn get_data_dir() -> Result<PathBuf, StorageError> {
    Ok(project_dirs()?.data_dir().to_path_buf())
}
