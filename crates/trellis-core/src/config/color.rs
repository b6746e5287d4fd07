use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A color value as the host understands it.
///
/// Accepts `rgb`, `rrggbb` and `rrggbbaa` hex digits, with or without a
/// leading `#`. The original spelling is preserved so the exported
/// configuration round-trips exactly what the user wrote.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    /// Parses and validates a color string.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let digits = value.strip_prefix('#').unwrap_or(value);
        let valid_len = matches!(digits.len(), 3 | 6 | 8);
        if !valid_len || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ConfigError::InvalidColor(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    /// Wraps a compiled-in literal known to be valid.
    pub(crate) fn trusted(value: &str) -> Self {
        debug_assert!(Self::parse(value).is_ok(), "bad built-in color {value}");
        Self(value.to_string())
    }

    /// Returns the color exactly as written.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the color as `#rrggbb` / `#rrggbbaa` in lowercase.
    pub fn normalized(&self) -> String {
        let digits = self.0.strip_prefix('#').unwrap_or(&self.0);
        let expanded: String = if digits.len() == 3 {
            digits.chars().flat_map(|c| [c, c]).collect()
        } else {
            digits.to_string()
        };
        format!("#{}", expanded.to_ascii_lowercase())
    }
}

impl TryFrom<String> for Color {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
