pub mod bar;
pub mod color;
pub mod group;
pub mod keybinding;
mod loader;
pub mod layout;
pub mod mouse;
pub mod palette;
pub mod rules;
pub mod settings;
pub mod template;
pub mod widget;

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

pub use bar::{Bar, BarSettings, Screen};
pub use color::Color;
pub use group::Group;
pub use keybinding::{DuplicateBinding, Keybinding, Modifier};
pub use layout::{LayoutCycle, LayoutKind, LayoutSpec, LayoutTheme};
pub use loader::{config_dir, load, settings_path, try_load};
pub use mouse::{MouseBinding, MouseButton};
pub use palette::Palette;
pub use rules::{AppRule, Match};
pub use settings::{Apps, InputRule, SessionSettings, Settings};
pub use widget::{WidgetDefaults, WidgetKind, WidgetSpec};

use crate::action::Action;
use crate::env::Environment;
use crate::error::ConfigError;

/// The assembled session configuration handed to the host.
///
/// Field names are the ones the host looks up at load time. The value
/// is built once by [`assemble`] and never mutated afterwards; a reload
/// builds a new one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    pub keys: Vec<Keybinding>,
    pub mouse: Vec<MouseBinding>,
    pub groups: Vec<Group>,
    pub layouts: Vec<LayoutSpec>,
    pub floating_layout: LayoutSpec,
    pub screens: Vec<Screen>,
    pub widget_defaults: WidgetDefaults,
    pub extension_defaults: WidgetDefaults,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dgroups_key_binder: Option<String>,
    pub dgroups_app_rules: Vec<AppRule>,
    #[serde(flatten)]
    pub session: SessionSettings,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wl_input_rules: Option<BTreeMap<String, InputRule>>,
    pub prompt: String,
}

/// Builds the whole configuration from user settings and the probed
/// environment.
///
/// Pure: the same inputs always produce an equal value. Fails on any
/// referential error (unknown color role, unknown layout parameter,
/// bad format template, bad bar geometry). Problems that leave a
/// usable configuration behind are left to [`Config::validate`].
pub fn assemble(settings: &Settings, env: &Environment) -> Result<Config, ConfigError> {
    let apps = settings.apps.resolve(env);
    let palette = Palette::with_overrides(&settings.palette);
    let groups = group::defaults();

    let mut keys = keybinding::defaults(&apps);
    keys.extend(keybinding::group_bindings(&groups));
    keys.extend(settings.keys.iter().cloned());

    let layouts = if settings.layouts.is_empty() {
        layout::defaults(&settings.layout_theme)
    } else {
        settings.layouts.clone()
    };
    for spec in &layouts {
        spec.validate()?;
    }
    let mut float_rules = rules::default_float_rules();
    float_rules.extend(rules::user_float_rules());
    let floating_layout = layout::floating(float_rules);

    let screens = bar::init_screens(&palette, &apps, &settings.bar)?;

    tracing::debug!(
        keys = keys.len(),
        groups = groups.len(),
        layouts = layouts.len(),
        screens = screens.len(),
        terminal = %apps.terminal,
        "assembled configuration"
    );

    Ok(Config {
        keys,
        mouse: mouse::defaults(),
        groups,
        layouts,
        floating_layout,
        screens,
        widget_defaults: settings.widget_defaults.clone(),
        extension_defaults: settings.widget_defaults.clone(),
        dgroups_key_binder: None,
        dgroups_app_rules: settings.app_rules.clone(),
        session: settings.session.clone(),
        wl_input_rules: (!settings.input.is_empty()).then(|| settings.input.clone()),
        prompt: env.prompt(),
    })
}

/// A problem found in an assembled configuration.
///
/// None of these stop the host from loading the value, but each means
/// some binding or widget will not behave the way the table reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// A chord bound more than once; the later binding wins.
    DuplicateBinding(DuplicateBinding),
    /// A group without exactly one binding of the given kind.
    GroupCoverage {
        group: String,
        binding: &'static str,
        count: usize,
    },
    DuplicateGroup(String),
    /// A key binding that runs nothing.
    EmptyActions { key: usize, chord: String },
    /// A spawn action with no program to run.
    EmptySpawn { location: String },
    /// An app rule whose match has no criteria, so it never fires.
    EmptyAppRule { index: usize },
    NoLayouts,
    InvalidLayout { index: usize, reason: String },
    InvalidWidget {
        screen: usize,
        index: usize,
        reason: String,
    },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateBinding(dup) => write!(
                f,
                "{} is bound twice: key #{} is shadowed by key #{}",
                dup.chord, dup.first, dup.shadowed_by
            ),
            Self::GroupCoverage {
                group,
                binding,
                count,
            } => write!(
                f,
                "group {group:?} has {count} {binding} bindings (expected exactly 1)"
            ),
            Self::DuplicateGroup(name) => write!(f, "group {name:?} is defined more than once"),
            Self::EmptyActions { key, chord } => write!(f, "key #{key} ({chord}) has no actions"),
            Self::EmptySpawn { location } => write!(f, "{location} spawns an empty command"),
            Self::EmptyAppRule { index } => {
                write!(f, "app rule #{index} has no match criteria")
            }
            Self::NoLayouts => write!(f, "the layout list is empty"),
            Self::InvalidLayout { index, reason } => write!(f, "layout #{index}: {reason}"),
            Self::InvalidWidget {
                screen,
                index,
                reason,
            } => write!(f, "screen {screen} widget #{index}: {reason}"),
        }
    }
}

impl Config {
    /// Runs every non-fatal check and returns all issues found.
    pub fn validate(&self) -> Result<(), Vec<ValidationIssue>> {
        let mut issues: Vec<ValidationIssue> = keybinding::find_duplicates(&self.keys)
            .into_iter()
            .map(ValidationIssue::DuplicateBinding)
            .collect();

        for (key, kb) in self.keys.iter().enumerate() {
            if kb.actions.is_empty() {
                issues.push(ValidationIssue::EmptyActions {
                    key,
                    chord: kb.chord_label(),
                });
            }
            if kb.actions.iter().any(is_empty_spawn) {
                issues.push(ValidationIssue::EmptySpawn {
                    location: format!("key #{key} ({})", kb.chord_label()),
                });
            }
        }
        for (index, rule) in self.dgroups_app_rules.iter().enumerate() {
            if rule.rule.is_empty() {
                issues.push(ValidationIssue::EmptyAppRule { index });
            }
        }

        issues.extend(
            group::duplicate_names(&self.groups)
                .into_iter()
                .map(ValidationIssue::DuplicateGroup),
        );
        for group in &self.groups {
            for (binding, count) in [
                ("switch", self.count_bindings(group, is_switch_binding)),
                ("move", self.count_bindings(group, is_move_binding)),
            ] {
                if count != 1 {
                    issues.push(ValidationIssue::GroupCoverage {
                        group: group.name.clone(),
                        binding,
                        count,
                    });
                }
            }
        }

        if self.layouts.is_empty() {
            issues.push(ValidationIssue::NoLayouts);
        }
        for (index, spec) in self
            .layouts
            .iter()
            .chain(std::iter::once(&self.floating_layout))
            .enumerate()
        {
            if let Err(e) = spec.validate() {
                issues.push(ValidationIssue::InvalidLayout {
                    index,
                    reason: e.to_string(),
                });
            }
        }

        for (screen, bar) in self
            .screens
            .iter()
            .enumerate()
            .flat_map(|(i, s)| s.top.iter().chain(s.bottom.iter()).map(move |b| (i, b)))
        {
            for (index, widget) in bar.widgets.iter().enumerate() {
                if let Err(e) = widget.validate() {
                    issues.push(ValidationIssue::InvalidWidget {
                        screen,
                        index,
                        reason: e.to_string(),
                    });
                }
                for (button, action) in &widget.mouse_callbacks {
                    if is_empty_spawn(action) {
                        issues.push(ValidationIssue::EmptySpawn {
                            location: format!("screen {screen} widget #{index} {button:?} click"),
                        });
                    }
                }
            }
        }

        for issue in &issues {
            tracing::warn!("{issue}");
        }
        if issues.is_empty() { Ok(()) } else { Err(issues) }
    }

    fn count_bindings(&self, group: &Group, pred: fn(&Keybinding, &str) -> bool) -> usize {
        self.keys.iter().filter(|kb| pred(kb, &group.name)).count()
    }

    /// A cursor over the layout registry starting at the first entry.
    pub fn layout_cycle(&self) -> LayoutCycle<'_> {
        LayoutCycle::new(&self.layouts)
    }

    /// Every image file referenced by a bar widget.
    pub fn image_paths(&self) -> impl Iterator<Item = &std::path::Path> {
        self.screens
            .iter()
            .flat_map(|s| s.top.iter().chain(s.bottom.iter()))
            .flat_map(|bar| bar.widgets.iter())
            .filter_map(|w| match &w.kind {
                WidgetKind::Image { filename, .. } => Some(filename.as_path()),
                _ => None,
            })
    }
}

fn is_empty_spawn(action: &Action) -> bool {
    action.argv().is_some_and(<[String]>::is_empty)
}

fn is_switch_binding(kb: &Keybinding, group: &str) -> bool {
    let (mods, key) = kb.chord();
    key == group
        && mods.len() == 1
        && mods.contains(&Modifier::Mod4)
        && kb
            .actions
            .iter()
            .any(|a| matches!(a, Action::GroupToScreen { group: g } if g == group))
}

fn is_move_binding(kb: &Keybinding, group: &str) -> bool {
    let (mods, key) = kb.chord();
    key == group
        && mods.len() == 2
        && mods.contains(&Modifier::Mod4)
        && mods.contains(&Modifier::Shift)
        && kb.actions.iter().any(|a| {
            matches!(
                a,
                Action::WindowToGroup { group: g, switch_group: true } if g == group
            )
        })
}

#[cfg(test)]
mod tests;
