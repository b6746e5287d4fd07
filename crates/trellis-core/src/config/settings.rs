//! User settings loaded from `settings.toml`.
//!
//! Every section is optional; missing sections and fields fall back to
//! the built-in defaults thanks to `#[serde(default)]`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::bar::BarSettings;
use super::keybinding::Keybinding;
use super::layout::{LayoutSpec, LayoutTheme};
use super::palette::PaletteOverrides;
use super::rules::AppRule;
use super::widget::WidgetDefaults;
use crate::env::Environment;
use crate::log::LogConfig;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub apps: AppSettings,
    pub palette: PaletteOverrides,
    pub layout_theme: LayoutTheme,
    /// Replaces the built-in layout list when non-empty. Entries are
    /// used as written; `layout_theme` is not merged into them.
    pub layouts: Vec<LayoutSpec>,
    pub bar: BarSettings,
    pub widget_defaults: WidgetDefaults,
    pub session: SessionSettings,
    /// Wayland input device rules keyed by device name or `type:<kind>`.
    pub input: BTreeMap<String, InputRule>,
    pub logging: LogConfig,
    /// Exported as `dgroups_app_rules`.
    pub app_rules: Vec<AppRule>,
    /// Extra bindings appended after the generated group bindings.
    pub keys: Vec<Keybinding>,
}

/// Programs launched by bindings and widgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Terminal command. Detected from the environment when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminal: Option<String>,
    pub browser: String,
    /// Directory holding the bar's icon images. `~/` is expanded.
    pub icon_dir: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            terminal: None,
            browser: "firefox".into(),
            icon_dir: "~/.config/qtile/icons".into(),
        }
    }
}

/// Resolved application settings used by the builders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Apps {
    pub terminal: String,
    pub browser: String,
    pub icon_dir: PathBuf,
}

impl AppSettings {
    /// Fills in the detected terminal and expands the icon directory.
    pub fn resolve(&self, env: &Environment) -> Apps {
        Apps {
            terminal: self
                .terminal
                .clone()
                .unwrap_or_else(|| env.terminal.clone()),
            browser: self.browser.clone(),
            icon_dir: expand_home(&self.icon_dir, &env.home),
        }
    }
}

/// Expands a leading `~` to the home directory.
pub fn expand_home(path: &str, home: &Path) -> PathBuf {
    if path == "~" {
        return home.to_path_buf();
    }
    match path.strip_prefix("~/") {
        Some(rest) => home.join(rest),
        None => PathBuf::from(path),
    }
}

/// How the host reacts when a window asks to be activated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusOnActivation {
    /// Focus if the window is on the current group, otherwise mark urgent.
    #[default]
    Smart,
    Focus,
    Urgent,
    Never,
}

/// Session-wide flags exported as top-level names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    pub follow_mouse_focus: bool,
    pub bring_front_click: bool,
    pub cursor_warp: bool,
    pub auto_fullscreen: bool,
    pub focus_on_window_activation: FocusOnActivation,
    pub reconfigure_screens: bool,
    /// Let applications minimize themselves when they lose focus.
    pub auto_minimize: bool,
    /// Window manager name reported to clients. Some Java toolkits only
    /// behave with names on their allow list.
    pub wmname: String,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            follow_mouse_focus: true,
            bring_front_click: false,
            cursor_warp: false,
            auto_fullscreen: true,
            focus_on_window_activation: FocusOnActivation::Smart,
            reconfigure_screens: true,
            auto_minimize: true,
            wmname: "LG3D".into(),
        }
    }
}

/// Wayland input device configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_handed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub natural_scroll: Option<bool>,
    /// e.g. "clickfinger" or "button_areas".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub click_method: Option<String>,
    /// XKB options, e.g. "ctrl:nocaps,compose:ralt".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kb_options: Option<String>,
}
