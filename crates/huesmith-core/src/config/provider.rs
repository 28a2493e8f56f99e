//! Upstream provider configuration and credential resolution

use serde::{Deserialize, Serialize};

/// Source of the API credential
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiKeySource {
    /// From the configuration file
    ConfigFile,
    /// From the HUESMITH_API_KEY environment variable
    HuesmithEnvVar,
    /// From the provider's standard environment variable
    StandardEnvVar,
    /// No credential found
    NotFound,
}

impl std::fmt::Display for ApiKeySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiKeySource::ConfigFile => write!(f, "config file"),
            ApiKeySource::HuesmithEnvVar => write!(f, "HUESMITH_API_KEY env"),
            ApiKeySource::StandardEnvVar => write!(f, "env variable"),
            ApiKeySource::NotFound => write!(f, "not found"),
        }
    }
}

/// Result of credential resolution with source information
#[derive(Debug, Clone)]
pub struct ApiKeyInfo {
    /// The credential value (if found)
    pub key: Option<String>,
    /// Where the credential was found
    pub source: ApiKeySource,
}

impl ApiKeyInfo {
    /// Check if a usable credential was found
    pub fn is_valid(&self) -> bool {
        self.key.is_some()
    }

    /// Get a display-safe (masked) version of the credential
    pub fn masked_key(&self) -> Option<String> {
        self.key.as_ref().map(|k| mask_api_key(k))
    }
}

/// Configuration for the upstream completion provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// API endpoint base URL
    pub base_url: String,
    /// Credential stored in the config file (environment wins over this)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            api_key: None,
        }
    }
}

impl ProviderConfig {
    /// Create a provider config pointed at a specific base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
        }
    }

    /// Set the file-stored credential
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Resolve the effective credential
    ///
    /// Priority order:
    /// 1. HUESMITH_API_KEY environment variable
    /// 2. OPENAI_API_KEY environment variable
    /// 3. Configuration file
    pub fn api_key_info(&self) -> ApiKeyInfo {
        if let Ok(key) = std::env::var("HUESMITH_API_KEY") {
            if !key.is_empty() {
                return ApiKeyInfo {
                    key: Some(key),
                    source: ApiKeySource::HuesmithEnvVar,
                };
            }
        }

        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            if !key.is_empty() {
                return ApiKeyInfo {
                    key: Some(key),
                    source: ApiKeySource::StandardEnvVar,
                };
            }
        }

        if let Some(api_key) = &self.api_key {
            if !api_key.is_empty() {
                return ApiKeyInfo {
                    key: Some(api_key.clone()),
                    source: ApiKeySource::ConfigFile,
                };
            }
        }

        ApiKeyInfo {
            key: None,
            source: ApiKeySource::NotFound,
        }
    }
}

/// Mask a credential for safe display
///
/// Shows the first 8 and last 4 characters, masks the rest.
fn mask_api_key(key: &str) -> String {
    let len = key.len();
    if len <= 12 {
        return "*".repeat(len);
    }

    let prefix = &key[..8];
    let suffix = &key[len - 4..];
    let mask_len = (len - 12).min(8);

    format!("{}{}...{}", prefix, "*".repeat(mask_len), suffix)
}

/// Display credential status for the CLI
pub fn format_api_key_status(info: &ApiKeyInfo) -> String {
    match &info.source {
        ApiKeySource::NotFound => {
            "✗ credential missing. Set HUESMITH_API_KEY or add api_key to the config".to_string()
        }
        source => {
            format!(
                "✓ credential (from {}): {}",
                source,
                info.masked_key().unwrap_or_default()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_api_key() {
        assert_eq!(mask_api_key("sk-proj-abc123xyz789qq"), "sk-proj-********...89qq");
        assert_eq!(mask_api_key("short"), "*****");
        assert_eq!(mask_api_key("exactly12chr"), "************");
    }

    #[test]
    fn test_api_key_from_config_file() {
        let config = ProviderConfig::default().with_api_key("sk-test-key-12345");
        let info = config.api_key_info();
        // Environment may shadow the file in a dev shell; accept either source
        assert!(info.is_valid());
    }

    #[test]
    fn test_empty_file_key_is_not_valid() {
        let config = ProviderConfig {
            base_url: "https://api.openai.com/v1".to_string(),
            api_key: Some(String::new()),
        };
        if std::env::var("HUESMITH_API_KEY").is_err() && std::env::var("OPENAI_API_KEY").is_err() {
            assert!(!config.api_key_info().is_valid());
        }
    }
}
