//! Configuration loading and types

mod model_params;
mod provider;

pub use model_params::ModelParameters;
pub use provider::{ApiKeyInfo, ApiKeySource, ProviderConfig, format_api_key_status};

use crate::error::{HuesmithError, HuesmithResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file name looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "huesmith.json";

/// Name of the cookie carrying the credential to the relay
pub const CREDENTIAL_COOKIE: &str = "palette_token";

/// Relay endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Address the relay binds to when serving
    pub bind_addr: String,
    /// Base URL the CLI uses to reach the relay
    pub url: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8787".to_string(),
            url: "http://127.0.0.1:8787".to_string(),
        }
    }
}

/// Top-level huesmith configuration
///
/// Resolved once at startup and threaded explicitly through the session and
/// the relay; nothing reads ambient global state after this point.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Upstream completion provider settings
    #[serde(default)]
    pub provider: ProviderConfig,
    /// Model selection and sampling parameters
    #[serde(default)]
    pub model: ModelParameters,
    /// Relay endpoint settings
    #[serde(default)]
    pub relay: RelayConfig,
}

impl Config {
    /// Load configuration, `.env` included, from an explicit file or the
    /// default locations
    ///
    /// Lookup order: the explicit path if given, then `huesmith.json` in the
    /// working directory, then the user config directory. A missing file
    /// yields defaults; an unreadable or malformed file is an error.
    pub fn load(path: Option<&Path>) -> HuesmithResult<Self> {
        dotenvy::dotenv().ok();

        let candidate = match path {
            Some(explicit) => {
                if !explicit.exists() {
                    return Err(HuesmithError::config(format!(
                        "config file not found: {}",
                        explicit.display()
                    )));
                }
                Some(explicit.to_path_buf())
            }
            None => Self::default_locations().into_iter().find(|p| p.exists()),
        };

        match candidate {
            Some(file) => Self::load_from_file(&file),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific JSON file
    pub fn load_from_file(path: &Path) -> HuesmithResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| HuesmithError::config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Write this configuration as pretty JSON
    pub fn save_to_file(&self, path: &Path) -> HuesmithResult<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Whether a credential is available for submission gating
    pub fn credential_saved(&self) -> bool {
        self.provider.api_key_info().is_valid()
    }

    /// Validate the composed configuration
    pub fn validate(&self) -> HuesmithResult<()> {
        self.model.validate()
    }

    fn default_locations() -> Vec<PathBuf> {
        let mut locations = vec![PathBuf::from(DEFAULT_CONFIG_FILE)];
        if let Some(config_dir) = dirs::config_dir() {
            locations.push(config_dir.join("huesmith").join(DEFAULT_CONFIG_FILE));
        }
        locations
    }
}
