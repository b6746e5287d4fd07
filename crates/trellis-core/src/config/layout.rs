//! Layout registry.
//!
//! The host owns the tiling algorithms; this module only selects and
//! parameterises them. Registry order is the "next layout" cycle order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::rules::Match;
use crate::error::ConfigError;

/// Layout algorithms provided by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    Columns,
    Max,
    MonadTall,
    MonadWide,
    Stack,
    RatioTile,
    TreeTab,
    Bsp,
    Matrix,
    Tile,
    Floating,
}

/// Parameters every layout accepts.
const COMMON_PARAMS: &[&str] = &["border_width", "margin", "border_focus", "border_normal"];

const TREE_TAB_PARAMS: &[&str] = &[
    "font",
    "fontsize",
    "sections",
    "section_fontsize",
    "bg_color",
    "active_bg",
    "active_fg",
    "inactive_bg",
    "inactive_fg",
    "padding_left",
    "padding_x",
    "padding_y",
    "section_top",
    "section_bottom",
    "level_shift",
    "vspace",
    "panel_width",
];

impl LayoutKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Columns => "columns",
            Self::Max => "max",
            Self::MonadTall => "monadtall",
            Self::MonadWide => "monadwide",
            Self::Stack => "stack",
            Self::RatioTile => "ratiotile",
            Self::TreeTab => "treetab",
            Self::Bsp => "bsp",
            Self::Matrix => "matrix",
            Self::Tile => "tile",
            Self::Floating => "floating",
        }
    }

    /// Whether this layout kind accepts the named parameter.
    pub fn accepts(self, param: &str) -> bool {
        if COMMON_PARAMS.contains(&param) {
            return true;
        }
        match self {
            Self::Columns => matches!(param, "border_focus_stack" | "num_columns"),
            Self::Stack => param == "num_stacks",
            Self::Matrix => param == "columns",
            Self::TreeTab => TREE_TAB_PARAMS.contains(&param),
            Self::Floating => param == "float_rules",
            Self::Max | Self::MonadTall | Self::MonadWide | Self::RatioTile | Self::Bsp | Self::Tile => {
                false
            }
        }
    }
}

/// Shared border and margin settings merged into themed layouts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutTheme {
    pub border_width: u32,
    pub margin: u32,
    pub border_focus: Color,
    pub border_normal: Color,
}

impl Default for LayoutTheme {
    fn default() -> Self {
        Self {
            border_width: 2,
            margin: 8,
            border_focus: Color::trusted("#ea1cff"),
            border_normal: Color::trusted("1d2330"),
        }
    }
}

/// The parameter mapping of a layout entry.
///
/// Unset parameters fall back to the host's defaults for the kind.
/// Unrecognised keys are collected in `extra` so that validation can
/// name them instead of silently dropping them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_focus: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_normal: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_focus_stack: Option<Vec<Color>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_columns: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_stacks: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fontsize: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_fontsize: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_bg: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_fg: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inactive_bg: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inactive_fg: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_x: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_y: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_top: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_bottom: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level_shift: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vspace: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panel_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub float_rules: Option<Vec<Match>>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, toml::Value>,
}

macro_rules! set_params {
    ($params:expr; $($field:ident),* $(,)?) => {{
        let mut names: Vec<&'static str> = Vec::new();
        $(
            if $params.$field.is_some() {
                names.push(stringify!($field));
            }
        )*
        names
    }};
}

impl LayoutParams {
    /// Names of every typed parameter that is set.
    pub fn set_names(&self) -> Vec<&'static str> {
        set_params!(self;
            border_width, margin, border_focus, border_normal,
            border_focus_stack, num_columns, num_stacks, columns,
            font, fontsize, sections, section_fontsize,
            bg_color, active_bg, active_fg, inactive_bg, inactive_fg,
            padding_left, padding_x, padding_y, section_top, section_bottom,
            level_shift, vspace, panel_width, float_rules,
        )
    }

    /// Fills the shared theme parameters the entry left unset.
    pub fn apply_theme(&mut self, theme: &LayoutTheme) {
        self.border_width.get_or_insert(theme.border_width);
        self.margin.get_or_insert(theme.margin);
        self.border_focus.get_or_insert_with(|| theme.border_focus.clone());
        self.border_normal.get_or_insert_with(|| theme.border_normal.clone());
    }
}

/// One entry of the layout registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSpec {
    pub kind: LayoutKind,
    #[serde(flatten)]
    pub params: LayoutParams,
}

impl LayoutSpec {
    /// A layout with host defaults for every parameter.
    pub fn new(kind: LayoutKind) -> Self {
        Self {
            kind,
            params: LayoutParams::default(),
        }
    }

    /// A layout with the shared theme applied.
    pub fn themed(kind: LayoutKind, theme: &LayoutTheme) -> Self {
        let mut spec = Self::new(kind);
        spec.params.apply_theme(theme);
        spec
    }

    /// Checks that every parameter set on this entry is accepted by its kind.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let unknown = self
            .params
            .set_names()
            .into_iter()
            .map(str::to_string)
            .chain(self.params.extra.keys().cloned())
            .find(|name| !self.kind.accepts(name));
        match unknown {
            Some(param) => Err(ConfigError::UnknownLayoutParameter {
                kind: self.kind.name(),
                param,
            }),
            None => Ok(()),
        }
    }
}

/// Returns the layout registry in cycle order.
pub fn defaults(theme: &LayoutTheme) -> Vec<LayoutSpec> {
    let columns = LayoutSpec {
        kind: LayoutKind::Columns,
        params: LayoutParams {
            border_focus_stack: Some(vec![Color::trusted("#d75f5f"), Color::trusted("#8f3d3d")]),
            border_width: Some(4),
            ..Default::default()
        },
    };
    let stack = LayoutSpec {
        kind: LayoutKind::Stack,
        params: LayoutParams {
            num_stacks: Some(2),
            ..Default::default()
        },
    };

    vec![
        columns,
        LayoutSpec::new(LayoutKind::Max),
        LayoutSpec::themed(LayoutKind::MonadTall, theme),
        LayoutSpec::themed(LayoutKind::Max, theme),
        stack,
        LayoutSpec::themed(LayoutKind::RatioTile, theme),
        tree_tab(),
        LayoutSpec::themed(LayoutKind::Floating, theme),
    ]
}

fn tree_tab() -> LayoutSpec {
    LayoutSpec {
        kind: LayoutKind::TreeTab,
        params: LayoutParams {
            font: Some("Ubuntu".into()),
            fontsize: Some(16),
            sections: Some(
                ["FIRST", "SECOND", "THIRD", "FOURTH"]
                    .into_iter()
                    .map(String::from)
                    .collect(),
            ),
            section_fontsize: Some(14),
            border_width: Some(3),
            bg_color: Some(Color::trusted("1c1f24")),
            active_bg: Some(Color::trusted("c678dd")),
            active_fg: Some(Color::trusted("000000")),
            inactive_bg: Some(Color::trusted("a9a1e1")),
            inactive_fg: Some(Color::trusted("1c1f24")),
            padding_left: Some(0),
            padding_x: Some(0),
            padding_y: Some(5),
            section_top: Some(15),
            section_bottom: Some(15),
            level_shift: Some(8),
            vspace: Some(3),
            panel_width: Some(200),
            ..Default::default()
        },
    }
}

/// The floating layout windows fall into when a float rule matches.
pub fn floating(rules: Vec<Match>) -> LayoutSpec {
    LayoutSpec {
        kind: LayoutKind::Floating,
        params: LayoutParams {
            float_rules: Some(rules),
            ..Default::default()
        },
    }
}

/// Index arithmetic for the host's next/previous layout commands.
#[derive(Debug, Clone)]
pub struct LayoutCycle<'a> {
    layouts: &'a [LayoutSpec],
    index: usize,
}

impl<'a> LayoutCycle<'a> {
    /// Starts at the first registry entry.
    pub fn new(layouts: &'a [LayoutSpec]) -> Self {
        Self { layouts, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&'a LayoutSpec> {
        self.layouts.get(self.index)
    }

    /// Advances to the next layout, wrapping at the end.
    pub fn next_layout(&mut self) -> Option<&'a LayoutSpec> {
        if self.layouts.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.layouts.len();
        self.current()
    }

    /// Steps back to the previous layout, wrapping at the start.
    pub fn prev_layout(&mut self) -> Option<&'a LayoutSpec> {
        if self.layouts.is_empty() {
            return None;
        }
        self.index = (self.index + self.layouts.len() - 1) % self.layouts.len();
        self.current()
    }
}
