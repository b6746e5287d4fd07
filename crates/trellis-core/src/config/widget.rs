use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::mouse::MouseButton;
use crate::action::Action;
use crate::error::ConfigError;

/// Font and padding defaults applied to widgets that don't set their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetDefaults {
    pub font: String,
    pub fontsize: u32,
    pub padding: i32,
}

impl Default for WidgetDefaults {
    fn default() -> Self {
        Self {
            font: "sans".into(),
            fontsize: 12,
            padding: 3,
        }
    }
}

/// Visual parameters shared by every widget kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fontsize: Option<u32>,
    /// Negative padding lets separator glyphs overlap their neighbours.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<Color>,
}

/// Memory size unit for the memory widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemoryUnit {
    K,
    M,
    G,
}

/// A status-bar widget: style, click actions and kind-specific data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetSpec {
    #[serde(flatten)]
    pub kind: WidgetKind,
    #[serde(default)]
    pub style: WidgetStyle,
    /// Zero-argument actions run when the widget is clicked.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub mouse_callbacks: BTreeMap<MouseButton, Action>,
}

/// Widget kinds and their data-source parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WidgetKind {
    /// A static image. The file is read by the host when the bar is
    /// drawn, so a missing file degrades this widget only.
    Image {
        filename: PathBuf,
        margin_x: u32,
        margin_y: u32,
        scale: bool,
    },
    Battery {
        format: String,
        charge_char: String,
        discharge_char: String,
        empty_char: String,
        full_char: String,
    },
    /// Fixed text; used here for the arrow separators.
    TextBox { text: String },
    CheckUpdates {
        /// Seconds between polls.
        update_interval: u32,
        distro: String,
        display_format: String,
        no_update_string: String,
        colour_have_updates: Color,
        colour_no_updates: Color,
    },
    /// `format` is a strftime pattern, not a field template.
    Clock { format: String },
    Memory {
        format: String,
        measure_mem: MemoryUnit,
    },
    Cpu { format: String },
    Wlan {
        format: String,
        interface: String,
        disconnected_message: String,
    },
}

impl WidgetKind {
    /// The kind tag, as used in the exported configuration.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Image { .. } => "image",
            Self::Battery { .. } => "battery",
            Self::TextBox { .. } => "textbox",
            Self::CheckUpdates { .. } => "checkupdates",
            Self::Clock { .. } => "clock",
            Self::Memory { .. } => "memory",
            Self::Cpu { .. } => "cpu",
            Self::Wlan { .. } => "wlan",
        }
    }

    /// The field template and the names it may reference, if this kind
    /// renders one.
    fn template(&self) -> Option<(&str, &'static [&'static str])> {
        match self {
            Self::Battery { format, .. } => {
                Some((format, &["char", "percent", "hour", "min", "watt"]))
            }
            Self::CheckUpdates { display_format, .. } => Some((display_format, &["updates"])),
            Self::Memory { format, .. } => Some((
                format,
                &[
                    "MemUsed", "MemTotal", "MemFree", "MemPercent", "Buffers", "Active",
                    "Inactive", "Shmem", "SwapTotal", "SwapFree", "SwapUsed", "SwapPercent",
                    "mm", "ms",
                ],
            )),
            Self::Cpu { format, .. } => Some((
                format,
                &["freq_current", "freq_max", "freq_min", "load_percent"],
            )),
            Self::Wlan { format, .. } => {
                Some((format, &["essid", "quality", "percent", "ipaddr"]))
            }
            Self::Image { .. } | Self::TextBox { .. } | Self::Clock { .. } => None,
        }
    }
}

impl WidgetSpec {
    pub fn new(kind: WidgetKind) -> Self {
        Self {
            kind,
            style: WidgetStyle::default(),
            mouse_callbacks: BTreeMap::new(),
        }
    }

    pub fn style(mut self, style: WidgetStyle) -> Self {
        self.style = style;
        self
    }

    pub fn on_click(mut self, button: MouseButton, action: Action) -> Self {
        self.mouse_callbacks.insert(button, action);
        self
    }

    pub fn kind_name(&self) -> &'static str {
        self.kind.name()
    }

    /// Checks that the display template only references fields the
    /// widget kind provides.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Some((format, known)) = self.kind.template() else {
            return Ok(());
        };
        let widget = self.kind_name();
        let fields = placeholders(format).ok_or_else(|| ConfigError::MalformedFormat {
            widget,
            format: format.to_string(),
        })?;
        match fields.into_iter().find(|f| !known.contains(f)) {
            Some(field) => Err(ConfigError::UnknownPlaceholder {
                widget,
                format: format.to_string(),
                field: field.to_string(),
            }),
            None => Ok(()),
        }
    }
}

/// Extracts the field names of a `{name:spec}` template.
///
/// `{{` and `}}` are literal braces. Returns `None` when braces are
/// unbalanced or a placeholder has no name.
pub fn placeholders(format: &str) -> Option<Vec<&str>> {
    let mut fields = Vec::new();
    let mut rest = format;
    while let Some(pos) = rest.find(['{', '}']) {
        let (brace, tail) = (&rest[pos..pos + 1], &rest[pos + 1..]);
        if tail.starts_with(brace) {
            rest = &tail[1..];
            continue;
        }
        if brace == "}" {
            return None;
        }
        let end = tail.find('}')?;
        let inner = &tail[..end];
        if inner.contains('{') {
            return None;
        }
        let name = inner.split([':', '!']).next().unwrap_or_default().trim();
        if name.is_empty() {
            return None;
        }
        fields.push(name);
        rest = &tail[end + 1..];
    }
    Some(fields)
}
