//! Model selection and sampling parameters

use crate::error::{HuesmithError, HuesmithResult};
use serde::{Deserialize, Serialize};

/// Parameters sent with every chat-completion request
///
/// The defaults mirror what the palette generator has always requested:
/// `gpt-3.5-turbo` at temperature 0.6 with nucleus sampling at 0.5.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelParameters {
    /// Model name/ID
    pub model: String,
    /// Temperature (0.0 to 2.0)
    pub temperature: Option<f32>,
    /// Top-p sampling
    pub top_p: Option<f32>,
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo".to_string(),
            temperature: Some(0.6),
            top_p: Some(0.5),
            max_tokens: None,
        }
    }
}

impl ModelParameters {
    /// Validate the parameters
    pub fn validate(&self) -> HuesmithResult<()> {
        if self.model.is_empty() {
            return Err(HuesmithError::config("Model name cannot be empty"));
        }

        if let Some(temp) = self.temperature {
            if !(0.0..=2.0).contains(&temp) {
                return Err(HuesmithError::config(
                    "Temperature must be between 0.0 and 2.0",
                ));
            }
        }

        if let Some(top_p) = self.top_p {
            if !(0.0..=1.0).contains(&top_p) {
                return Err(HuesmithError::config("Top-p must be between 0.0 and 1.0"));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_palette_request_shape() {
        let params = ModelParameters::default();
        assert_eq!(params.model, "gpt-3.5-turbo");
        assert_eq!(params.temperature, Some(0.6));
        assert_eq!(params.top_p, Some(0.5));
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut params = ModelParameters::default();
        params.temperature = Some(3.0);
        assert!(params.validate().is_err());

        let mut params = ModelParameters::default();
        params.top_p = Some(1.5);
        assert!(params.validate().is_err());

        let mut params = ModelParameters::default();
        params.model = String::new();
        assert!(params.validate().is_err());
    }
}
