//! System configuration storage
//!
//! Process-wide settings, currently just the inference server address, kept
//! in a single JSON file in the application config directory.

use crate::storage::StorageError;
use crate::validation::ValidationError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

pub const SYSTEM_CONFIGURATION_FILENAME: &str = "enchat_config.json";
pub const DEFAULT_SERVER_ADDRESS: &str = "http://localhost:1234";

/// Check that `address` is an http or https URL with a host.
///
/// An address without a scheme is read as http, so `example.com` passes
/// while `localhost:1234` is taken to have the scheme `localhost` and fails.
pub fn is_valid_server_address(address: &str) -> bool {
    let address = address.trim();
    let parsed = match Url::parse(address) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            match Url::parse(&format!("http://{}", address)) {
                Ok(url) => url,
                Err(_) => return false,
            }
        }
        Err(_) => return false,
    };

    matches!(parsed.scheme(), "http" | "https") && parsed.host().is_some()
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct SystemConfigurationFile {
    server_address: Option<String>,
}

/// Settings shared by every chat
#[derive(Debug, Clone, PartialEq)]
pub struct SystemConfiguration {
    server_address: String,
    config_dir: PathBuf,
}

impl SystemConfiguration {
    /// Default settings stored under `config_dir`
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            server_address: DEFAULT_SERVER_ADDRESS.to_string(),
            config_dir: config_dir.into(),
        }
    }

    /// Load settings from `config_dir`
    ///
    /// Returns default settings if the file doesn't exist or is corrupted
    pub fn load(config_dir: impl Into<PathBuf>) -> Self {
        let config_dir = config_dir.into();
        match Self::try_load(&config_dir) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load system configuration, using defaults: {}", e);
                Self::new(config_dir)
            }
        }
    }

    /// Load settings from `config_dir`, propagating any failure
    pub fn try_load(config_dir: &Path) -> Result<Self, StorageError> {
        let path = config_dir.join(SYSTEM_CONFIGURATION_FILENAME);

        let json = fs::read_to_string(&path)?;
        let file: SystemConfigurationFile = serde_json::from_str(&json)?;

        let mut config = Self::new(config_dir);
        if let Some(address) = file.server_address {
            config.set_server_address(address)?;
        }

        tracing::debug!("Loaded system configuration from {}", path.display());
        Ok(config)
    }

    /// Write the settings, replacing the whole file
    pub fn store(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.config_dir)?;

        let file = SystemConfigurationFile {
            server_address: Some(self.server_address.clone()),
        };
        let json = serde_json::to_string_pretty(&file)?;
        let path = self.path();
        fs::write(&path, json)?;

        tracing::debug!("Saved system configuration to {}", path.display());
        Ok(())
    }

    pub fn path(&self) -> PathBuf {
        self.config_dir.join(SYSTEM_CONFIGURATION_FILENAME)
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Address of the server, including optional port number
    pub fn server_address(&self) -> &str {
        &self.server_address
    }

    pub fn set_server_address(&mut self, address: impl Into<String>) -> Result<(), ValidationError> {
        let address = address.into();
        if !is_valid_server_address(&address) {
            return Err(ValidationError::ServerAddress(address));
        }
        self.server_address = address;
        Ok(())
    }
}
