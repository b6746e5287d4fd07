use serde::{Deserialize, Serialize};

use super::color::Color;
use super::mouse::MouseButton;
use super::palette::Palette;
use super::settings::Apps;
use super::widget::{MemoryUnit, WidgetKind, WidgetSpec, WidgetStyle};
use crate::action::Action;
use crate::error::ConfigError;

const FONT: &str = "Fira Code";
const ARROW: &str = "\u{25B6}";

/// A bar of fixed pixel height holding widgets left to right.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub widgets: Vec<WidgetSpec>,
    /// Height in pixels.
    pub size: u32,
    /// 0.0 (transparent) to 1.0 (opaque).
    pub opacity: f64,
}

/// A physical screen and the bars attached to its edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Screen {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<Bar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<Bar>,
}

/// Bar geometry from `[bar]` in settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarSettings {
    pub size: u32,
    pub opacity: f64,
}

impl Default for BarSettings {
    fn default() -> Self {
        Self {
            size: 20,
            opacity: 1.0,
        }
    }
}

impl BarSettings {
    /// Rejects a zero height or an opacity outside `0.0..=1.0`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::InvalidBar {
                field: "size",
                expected: "greater than zero",
                value: self.size.to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.opacity) {
            return Err(ConfigError::InvalidBar {
                field: "opacity",
                expected: "between 0.0 and 1.0",
                value: self.opacity.to_string(),
            });
        }
        Ok(())
    }
}

/// Builds the bar's widget list, left to right.
///
/// Pure given its inputs: every call constructs fresh specs, so it can
/// be invoked once per screen. Fails if a referenced palette role is
/// missing or a display template names an unknown field.
pub fn init_widgets_list(palette: &Palette, apps: &Apps) -> Result<Vec<WidgetSpec>, ConfigError> {
    let bg = |role: &str| palette.background(role);
    let fg = |role: &str| palette.foreground(role);
    let term = |cmd: &str| Action::spawn_in_terminal(&apps.terminal, cmd);

    let mut widgets = vec![
        image(apps, "arch.jpg", 0).on_click(MouseButton::Button1, Action::spawn(&apps.terminal)),
        WidgetSpec::new(WidgetKind::Battery {
            format: "{char} {percent:2.0%} {hour:d}:{min:02d} {watt:.2f} W".into(),
            charge_char: "^".into(),
            discharge_char: "V".into(),
            empty_char: "x".into(),
            full_char: "=".into(),
        })
        .style(styled(14, 15, bg("primary")?, Some(fg("primary")?))),
        arrow(bg("purple-100")?, bg("blue-100")?),
        WidgetSpec::new(WidgetKind::CheckUpdates {
            update_interval: 1800,
            distro: "Arch_checkupdates".into(),
            display_format: "Updates: {updates} ".into(),
            no_update_string: "no updates".into(),
            colour_have_updates: fg("primary")?,
            colour_no_updates: fg("primary")?,
        })
        .style(styled(14, 5, bg("purple-100")?, Some(fg("primary")?)))
        .on_click(MouseButton::Button1, term("sudo pacman -Syu")),
        arrow(bg("blue-100")?, bg("purple-100")?),
        WidgetSpec::new(WidgetKind::Clock {
            format: "%Y-%m-%d".into(),
        })
        .style(styled(14, 25, bg("blue-100")?, None)),
        arrow(bg("purple-100")?, bg("blue-100")?),
        WidgetSpec::new(WidgetKind::Clock {
            format: "%H:%M:%S".into(),
        })
        .style(styled(14, 25, bg("purple-100")?, None)),
        arrow(bg("blue-100")?, bg("purple-100")?),
        WidgetSpec::new(WidgetKind::Memory {
            format: "  {MemUsed: .0f}{mm}/{MemTotal: .0f}{mm}   ".into(),
            measure_mem: MemoryUnit::G,
        })
        .style(WidgetStyle {
            font: Some(FONT.into()),
            background: Some(bg("primary")?),
            foreground: Some(fg("primary")?),
            ..Default::default()
        })
        .on_click(MouseButton::Button1, term("htop")),
        arrow(bg("purple-100")?, bg("blue-100")?),
        WidgetSpec::new(WidgetKind::Cpu {
            format: "CPU {freq_current}GHz {load_percent}%".into(),
        })
        .style(styled(13, 15, bg("purple-100")?, Some(fg("primary")?)))
        .on_click(MouseButton::Button1, term("htop")),
        arrow(bg("blue-100")?, bg("purple-100")?),
        WidgetSpec::new(WidgetKind::Wlan {
            format: "{essid} {percent:2.0%}".into(),
            interface: "wlan0".into(),
            disconnected_message: "Disconnected :(".into(),
        })
        .style(styled(14, 15, bg("blue-100")?, None)),
        arrow(bg("dark")?, bg("blue-100")?),
    ];

    // Application launchers
    let launchers = [
        ("obs.png", 0, "flatpak run com.obsproject.Studio"),
        ("vscode.png", 0, "code"),
        ("telegram.png", 0, "telegram-desktop"),
        ("firefox.png", 0, "firefox"),
        ("telegram.svg", 15, "telegram-desktop"),
    ];
    widgets.extend(
        launchers
            .into_iter()
            .map(|(icon, margin_x, cmd)| image(apps, icon, margin_x).on_click(MouseButton::Button1, term(cmd))),
    );

    for widget in &widgets {
        widget.validate()?;
    }
    Ok(widgets)
}

/// Builds the screen list: one screen with a top bar.
pub fn init_screens(
    palette: &Palette,
    apps: &Apps,
    settings: &BarSettings,
) -> Result<Vec<Screen>, ConfigError> {
    settings.validate()?;
    let bar = Bar {
        widgets: init_widgets_list(palette, apps)?,
        size: settings.size,
        opacity: settings.opacity,
    };
    Ok(vec![Screen {
        top: Some(bar),
        bottom: None,
    }])
}

fn styled(fontsize: u32, padding: i32, background: Color, foreground: Option<Color>) -> WidgetStyle {
    WidgetStyle {
        font: Some(FONT.into()),
        fontsize: Some(fontsize),
        padding: Some(padding),
        background: Some(background),
        foreground,
    }
}

/// A powerline-style arrow separator between two colored segments.
fn arrow(background: Color, foreground: Color) -> WidgetSpec {
    WidgetSpec::new(WidgetKind::TextBox { text: ARROW.into() }).style(WidgetStyle {
        fontsize: Some(37),
        padding: Some(-5),
        background: Some(background),
        foreground: Some(foreground),
        ..Default::default()
    })
}

fn image(apps: &Apps, icon: &str, margin_x: u32) -> WidgetSpec {
    WidgetSpec::new(WidgetKind::Image {
        filename: apps.icon_dir.join(icon),
        margin_x,
        margin_y: 0,
        scale: true,
    })
}
