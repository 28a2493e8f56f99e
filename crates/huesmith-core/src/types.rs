//! Shared domain types

use crate::error::{HuesmithError, HuesmithResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minimum prompt length accepted by the form controller
pub const MIN_PROMPT_LEN: usize = 10;

/// Upper bound on colors extracted from a single image
pub const MAX_EXTRACTED_COLORS: usize = 8;

/// A 6-digit RGB hex color, always `#` prefixed
///
/// Parsing accepts upper- or lowercase digits; display is lowercase.
/// This is the only color representation that crosses module boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Build a hex color from RGB components
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(format!("#{:02x}{:02x}{:02x}", r, g, b))
    }

    /// The `#rrggbb` string form
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode back into RGB components
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        // Infallible: the constructor validated the digits
        let r = u8::from_str_radix(&self.0[1..3], 16).unwrap_or(0);
        let g = u8::from_str_radix(&self.0[3..5], 16).unwrap_or(0);
        let b = u8::from_str_radix(&self.0[5..7], 16).unwrap_or(0);
        (r, g, b)
    }
}

impl FromStr for HexColor {
    type Err = HuesmithError;

    fn from_str(s: &str) -> HuesmithResult<Self> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| HuesmithError::validation(format!("hex color missing '#': {s}")))?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(HuesmithError::validation(format!(
                "hex color must be '#' followed by 6 hex digits: {s}"
            )));
        }
        Ok(Self(format!("#{}", digits.to_ascii_lowercase())))
    }
}

impl TryFrom<String> for HexColor {
    type Error = HuesmithError;

    fn try_from(value: String) -> HuesmithResult<Self> {
        value.parse()
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single palette submission: the user's prompt plus any reference colors
///
/// Created on submit, serialized to the relay body, discarded after the
/// call completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaletteRequest {
    /// Natural-language description of the desired palette
    pub prompt: String,
    /// Reference colors extracted from uploaded images, in the order they
    /// arrived; duplicates are kept
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<HexColor>,
}

impl PaletteRequest {
    /// Create a request, enforcing the minimum prompt length
    pub fn new(prompt: impl Into<String>, colors: Vec<HexColor>) -> HuesmithResult<Self> {
        let prompt = prompt.into();
        if prompt.trim().chars().count() < MIN_PROMPT_LEN {
            return Err(HuesmithError::validation(format!(
                "prompt must be at least {MIN_PROMPT_LEN} characters"
            )));
        }
        Ok(Self { prompt, colors })
    }
}
