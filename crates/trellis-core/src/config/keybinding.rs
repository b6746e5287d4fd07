use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use super::group::Group;
use super::settings::Apps;
use crate::action::{Action, Direction};

/// A key chord mapped to one or more deferred actions.
///
/// Multiple actions run in the order they are listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keybinding {
    /// Modifier keys (e.g. `["mod4", "shift"]`). Order is irrelevant.
    #[serde(default)]
    pub modifiers: Vec<Modifier>,
    /// Key symbol (e.g. "h", "Return", "XF86AudioMute").
    pub key: String,
    /// Actions to trigger, in order.
    pub actions: Vec<Action>,
    /// Human-readable description shown in key listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
}

/// Keyboard modifiers as the host names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    /// Usually Alt.
    Mod1,
    /// Usually the Super/Windows key.
    Mod4,
    Shift,
    Control,
}

impl Modifier {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mod1 => "mod1",
            Self::Mod4 => "mod4",
            Self::Shift => "shift",
            Self::Control => "control",
        }
    }
}

impl Keybinding {
    /// The (modifier-set, key) pair that identifies this binding.
    pub fn chord(&self) -> (BTreeSet<Modifier>, &str) {
        (self.modifiers.iter().copied().collect(), &self.key)
    }

    /// Formats the chord as `mod4+shift+h`.
    pub fn chord_label(&self) -> String {
        let (mods, key) = self.chord();
        let mut parts: Vec<&str> = mods.into_iter().map(Modifier::as_str).collect();
        parts.push(key);
        parts.join("+")
    }
}

/// Two bindings claiming the same chord. The host keeps the later one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateBinding {
    /// Chord label, e.g. `mod4+h`.
    pub chord: String,
    /// Index of the binding that gets shadowed.
    pub first: usize,
    /// Index of the binding that wins.
    pub shadowed_by: usize,
}

/// Returns the literal binding table.
///
/// Focus: Mod4 + H/J/K/L family (only L/J/K move focus; plain H shrinks)
/// Shuffle: Mod4 + Shift + H/J/K/L
/// Grow: Mod4 + Control + H/J/K/L
/// Media keys and screenshot tools spawn external programs.
pub fn defaults(apps: &Apps) -> Vec<Keybinding> {
    use Modifier::{Control, Mod4, Shift};

    vec![
        // Switch between windows
        bind(&[Mod4], "l", [focus(Direction::Right)], "Move focus to right"),
        bind(&[Mod4], "j", [focus(Direction::Down)], "Move focus down"),
        bind(&[Mod4], "k", [focus(Direction::Up)], "Move focus up"),
        bind(
            &[Mod4],
            "space",
            [Action::FocusNext],
            "Move window focus to other window",
        ),
        // Move windows between columns or up/down in the current stack
        bind(
            &[Mod4, Shift],
            "l",
            [shuffle(Direction::Left)],
            "Move window to the left",
        ),
        bind(
            &[Mod4, Shift],
            "h",
            [shuffle(Direction::Right)],
            "Move window to the right",
        ),
        bind(&[Mod4, Shift], "j", [shuffle(Direction::Down)], "Move window down"),
        bind(&[Mod4, Shift], "k", [shuffle(Direction::Up)], "Move window up"),
        // Grow windows; at a screen edge this shrinks instead
        bind(
            &[Mod4, Control],
            "l",
            [grow(Direction::Left)],
            "Grow window to the left",
        ),
        bind(
            &[Mod4, Control],
            "h",
            [grow(Direction::Right)],
            "Grow window to the right",
        ),
        bind(&[Mod4, Control], "j", [grow(Direction::Down)], "Grow window down"),
        bind(&[Mod4, Control], "k", [grow(Direction::Up)], "Grow window up"),
        bind(&[Mod4], "n", [Action::Normalize], "Reset all window sizes"),
        bind(
            &[Mod4],
            "h",
            [Action::Shrink, Action::DecreaseNmaster],
            "shrink the window",
        ),
        bind(&[Mod4], "f", [Action::ToggleFullscreen], "toggle fullscreen"),
        Keybinding {
            modifiers: vec![Mod4],
            key: "m".into(),
            actions: vec![Action::ToggleFloating],
            desc: None,
        },
        bind(
            &[Mod4, Shift],
            "Return",
            [Action::ToggleSplit],
            "Toggle between split and unsplit sides of stack",
        ),
        bind(
            &[Mod4],
            "Return",
            [Action::spawn(&apps.terminal)],
            "Launch terminal",
        ),
        bind(&[Mod4], "Tab", [Action::NextLayout], "Toggle between layouts"),
        bind(&[Mod4], "w", [Action::KillWindow], "Kill focused window"),
        bind(&[Mod4, Shift], "r", [Action::ReloadConfig], "Reload the config"),
        bind(
            &[Mod4, Shift],
            "q",
            [Action::Shutdown],
            "Shutdown the window manager",
        ),
        bind(
            &[Mod4],
            "r",
            [Action::SpawnCmd],
            "Spawn a command using a prompt widget",
        ),
        bind(
            &[Mod4, Control],
            "b",
            [Action::spawn(&apps.browser)],
            "opens up a default browser",
        ),
        bind(
            &[],
            "XF86AudioMute",
            [Action::spawn("amixer -q set Master toggle")],
            "Toggle mute",
        ),
        bind(
            &[],
            "XF86AudioLowerVolume",
            [Action::spawn("amixer -c 0 sset Master 1- unmute")],
            "Lower volume",
        ),
        bind(
            &[],
            "XF86AudioRaiseVolume",
            [Action::spawn("amixer -c 0 sset Master 1+ unmute")],
            "Raise volume",
        ),
        bind(
            &[Mod4, Shift],
            "P",
            [Action::spawn_in_terminal(&apps.terminal, "xfce4-screenshooter")],
            "Screenshot tool",
        ),
        bind(
            &[Mod4, Shift],
            "Print",
            [Action::spawn("gnome-screenshot --interactive")],
            "Interactive screenshot",
        ),
    ]
}

/// Generates the per-group bindings.
///
/// Mod4 + name switches to the group; Mod4 + Shift + name moves the
/// focused window there and follows it.
pub fn group_bindings(groups: &[Group]) -> Vec<Keybinding> {
    use Modifier::{Mod4, Shift};

    let mut bindings = Vec::with_capacity(groups.len() * 2);
    for group in groups {
        let name = &group.name;
        bindings.push(bind(
            &[Mod4],
            name,
            [Action::GroupToScreen {
                group: name.clone(),
            }],
            &format!("Switch to group {name}"),
        ));
        bindings.push(bind(
            &[Mod4, Shift],
            name,
            [Action::WindowToGroup {
                group: name.clone(),
                switch_group: true,
            }],
            &format!("Switch to & move focused window to group {name}"),
        ));
    }
    bindings
}

/// Finds every chord bound more than once.
///
/// Each later occurrence is reported against the first binding of that
/// chord. Nothing is removed; deciding which binding was meant is left
/// to the user.
pub fn find_duplicates(bindings: &[Keybinding]) -> Vec<DuplicateBinding> {
    let mut seen: HashMap<(BTreeSet<Modifier>, &str), usize> = HashMap::new();
    let mut duplicates = Vec::new();
    for (index, kb) in bindings.iter().enumerate() {
        match seen.get(&kb.chord()) {
            Some(&first) => duplicates.push(DuplicateBinding {
                chord: kb.chord_label(),
                first,
                shadowed_by: index,
            }),
            None => {
                seen.insert(kb.chord(), index);
            }
        }
    }
    duplicates
}

fn bind<const N: usize>(
    modifiers: &[Modifier],
    key: &str,
    actions: [Action; N],
    desc: &str,
) -> Keybinding {
    Keybinding {
        modifiers: modifiers.to_vec(),
        key: key.into(),
        actions: actions.into(),
        desc: Some(desc.into()),
    }
}

fn focus(direction: Direction) -> Action {
    Action::Focus { direction }
}

fn shuffle(direction: Direction) -> Action {
    Action::Shuffle { direction }
}

fn grow(direction: Direction) -> Action {
    Action::Grow { direction }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::group;

    fn apps() -> Apps {
        Apps {
            terminal: "alacritty".into(),
            browser: "firefox".into(),
            icon_dir: "/home/u/.config/qtile/icons".into(),
        }
    }

    #[test]
    fn literal_table_has_twenty_nine_entries() {
        assert_eq!(defaults(&apps()).len(), 29);
    }

    #[test]
    fn plain_h_shrinks_then_decreases_nmaster() {
        let bindings = defaults(&apps());

        let h: Vec<_> = bindings
            .iter()
            .filter(|kb| kb.chord_label() == "mod4+h")
            .collect();

        assert_eq!(h.len(), 1);
        assert_eq!(h[0].actions, [Action::Shrink, Action::DecreaseNmaster]);
    }

    #[test]
    fn terminal_binding_spawns_detected_terminal() {
        let bindings = defaults(&apps());

        let launch = bindings
            .iter()
            .find(|kb| kb.chord_label() == "mod4+Return")
            .unwrap();

        assert_eq!(launch.actions[0].argv().unwrap(), ["alacritty"]);
    }

    #[test]
    fn group_bindings_cover_every_group_twice() {
        let groups = group::defaults();

        let bindings = group_bindings(&groups);

        assert_eq!(bindings.len(), 18);
        assert_eq!(bindings[0].chord_label(), "mod4+1");
        assert_eq!(bindings[1].chord_label(), "mod4+shift+1");
        assert_eq!(
            bindings[17].actions,
            [Action::WindowToGroup {
                group: "9".into(),
                switch_group: true
            }]
        );
    }

    #[test]
    fn literal_table_plus_groups_has_no_duplicates() {
        let mut bindings = defaults(&apps());
        bindings.extend(group_bindings(&group::defaults()));

        assert!(find_duplicates(&bindings).is_empty());
    }

    #[test]
    fn duplicate_chord_is_reported_with_both_indices() {
        let mut bindings = defaults(&apps());
        bindings.push(bind(
            &[Modifier::Mod4],
            "h",
            [focus(Direction::Left)],
            "Move focus to left",
        ));

        let dups = find_duplicates(&bindings);

        assert_eq!(dups.len(), 1);
        assert_eq!(dups[0].chord, "mod4+h");
        assert_eq!(dups[0].first, 13);
        assert_eq!(dups[0].shadowed_by, 29);
    }

    #[test]
    fn modifier_order_does_not_matter() {
        let a = bind(&[Modifier::Shift, Modifier::Mod4], "x", [Action::Shutdown], "a");
        let b = bind(&[Modifier::Mod4, Modifier::Shift], "x", [Action::KillWindow], "b");

        assert_eq!(find_duplicates(&[a, b]).len(), 1);
    }

    #[test]
    fn key_symbols_are_case_sensitive() {
        let upper = bind(&[Modifier::Mod4], "P", [Action::Shutdown], "a");
        let lower = bind(&[Modifier::Mod4], "p", [Action::Shutdown], "b");

        assert!(find_duplicates(&[upper, lower]).is_empty());
    }

    #[test]
    fn keybinding_deserializes_from_toml() {
        let toml_str = r#"
            modifiers = ["mod4", "control"]
            key = "e"
            actions = [{ kind = "spawn", argv = ["thunar"] }]
        "#;

        let kb: Keybinding = toml::from_str(toml_str).unwrap();

        assert_eq!(kb.chord_label(), "mod4+control+e");
        assert!(kb.desc.is_none());
    }
}
