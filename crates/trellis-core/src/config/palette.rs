//! Background and foreground color role tables.
//!
//! Widgets never carry raw hex values picked at random; they name a
//! role (`"purple-100"`, `"primary"`) and the builder resolves it here.
//! A role that is not in the table is a fatal build-time error.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::color::Color;
use crate::error::ConfigError;

const BACKGROUND: &[(&str, &str)] = &[
    ("primary", "#66a6ff"),
    ("dark", "#000000"),
    ("blue-100", "#66a6ff"),
    ("purple-100", "#9932cc"),
];

const FOREGROUND: &[(&str, &str)] = &[
    ("primary", "#ffffff"),
    ("separator", "#ff1493"),
    ("dark", "#000000"),
];

/// The two role → color tables consumed by the widget builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub background: BTreeMap<String, Color>,
    pub foreground: BTreeMap<String, Color>,
}

/// User additions and overrides from `[palette.*]` in settings.
///
/// Roles listed here replace or extend the built-in tables; roles not
/// listed keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteOverrides {
    pub background: BTreeMap<String, Color>,
    pub foreground: BTreeMap<String, Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: table(BACKGROUND),
            foreground: table(FOREGROUND),
        }
    }
}

impl Palette {
    /// Returns the default palette with `overrides` applied on top.
    pub fn with_overrides(overrides: &PaletteOverrides) -> Self {
        let mut palette = Self::default();
        palette.background.extend(
            overrides
                .background
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        palette.foreground.extend(
            overrides
                .foreground
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        palette
    }

    /// Resolves a background role.
    pub fn background(&self, role: &str) -> Result<Color, ConfigError> {
        lookup(&self.background, "background", role)
    }

    /// Resolves a foreground role.
    pub fn foreground(&self, role: &str) -> Result<Color, ConfigError> {
        lookup(&self.foreground, "foreground", role)
    }
}

fn lookup(
    table: &BTreeMap<String, Color>,
    name: &'static str,
    role: &str,
) -> Result<Color, ConfigError> {
    table
        .get(role)
        .cloned()
        .ok_or_else(|| ConfigError::UnknownColorRole {
            table: name,
            role: role.to_string(),
        })
}

fn table(entries: &[(&str, &str)]) -> BTreeMap<String, Color> {
    entries
        .iter()
        .map(|(role, hex)| ((*role).to_string(), Color::trusted(hex)))
        .collect()
}
