use std::fmt;

use serde::{Deserialize, Serialize};

/// Cardinal direction for focus, shuffle and grow actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

/// A deferred command descriptor handed to the host.
///
/// Nothing here is executed at load time. The host evaluates the
/// action when the bound key, button or widget click fires. Keeping
/// actions as plain data means the binding table can be inspected and
/// tested without side effects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Action {
    /// Move focus within the current layout.
    Focus { direction: Direction },
    /// Move focus to the next window regardless of geometry.
    FocusNext,
    /// Move the focused window within the layout.
    Shuffle { direction: Direction },
    /// Grow the focused window towards a direction.
    Grow { direction: Direction },
    /// Reset all window sizes in the layout.
    Normalize,
    /// Shrink the focused window (master/stack layouts).
    Shrink,
    /// Decrease the number of windows in the master area.
    DecreaseNmaster,
    /// Toggle between split and unsplit sides of a stack.
    ToggleSplit,
    ToggleFullscreen,
    ToggleFloating,
    KillWindow,
    BringToFront,
    SetPositionFloating,
    SetSizeFloating,
    GetPosition,
    GetSize,
    /// Cycle to the next entry of the layout registry.
    NextLayout,
    /// Cycle to the previous entry of the layout registry.
    PrevLayout,
    /// Start an external process. Fire-and-forget: the host awaits no
    /// result and captures no output.
    Spawn { argv: Vec<String> },
    /// Ask for a command through the bar's prompt widget.
    SpawnCmd,
    ReloadConfig,
    Shutdown,
    /// Show the named group on the current screen.
    GroupToScreen { group: String },
    /// Send the focused window to a group, optionally following it.
    WindowToGroup { group: String, switch_group: bool },
}

impl Action {
    /// Builds a spawn action from a command line.
    ///
    /// The command is split on whitespace; quoting is not interpreted.
    pub fn spawn(command: &str) -> Self {
        Self::Spawn {
            argv: command.split_whitespace().map(String::from).collect(),
        }
    }

    /// Builds a spawn action that runs `command` inside `terminal`
    /// (`<terminal> -e <command...>`).
    pub fn spawn_in_terminal(terminal: &str, command: &str) -> Self {
        let mut argv = vec![terminal.to_string(), "-e".to_string()];
        argv.extend(command.split_whitespace().map(String::from));
        Self::Spawn { argv }
    }

    /// Returns the argument vector if this is a spawn action.
    pub fn argv(&self) -> Option<&[String]> {
        match self {
            Self::Spawn { argv } => Some(argv),
            _ => None,
        }
    }
}

/// Renders the action in the host's lazy-call notation, e.g.
/// `layout.shuffle_left()` or `group["3"].toscreen()`.
impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Focus { direction } => write!(f, "layout.{}()", direction.as_str()),
            Self::FocusNext => f.write_str("layout.next()"),
            Self::Shuffle { direction } => write!(f, "layout.shuffle_{}()", direction.as_str()),
            Self::Grow { direction } => write!(f, "layout.grow_{}()", direction.as_str()),
            Self::Normalize => f.write_str("layout.normalize()"),
            Self::Shrink => f.write_str("layout.shrink()"),
            Self::DecreaseNmaster => f.write_str("layout.decrease_nmaster()"),
            Self::ToggleSplit => f.write_str("layout.toggle_split()"),
            Self::ToggleFullscreen => f.write_str("window.toggle_fullscreen()"),
            Self::ToggleFloating => f.write_str("window.toggle_floating()"),
            Self::KillWindow => f.write_str("window.kill()"),
            Self::BringToFront => f.write_str("window.bring_to_front()"),
            Self::SetPositionFloating => f.write_str("window.set_position_floating()"),
            Self::SetSizeFloating => f.write_str("window.set_size_floating()"),
            Self::GetPosition => f.write_str("window.get_position()"),
            Self::GetSize => f.write_str("window.get_size()"),
            Self::NextLayout => f.write_str("next_layout()"),
            Self::PrevLayout => f.write_str("prev_layout()"),
            Self::Spawn { argv } => write!(f, "spawn({:?})", argv.join(" ")),
            Self::SpawnCmd => f.write_str("spawncmd()"),
            Self::ReloadConfig => f.write_str("reload_config()"),
            Self::Shutdown => f.write_str("shutdown()"),
            Self::GroupToScreen { group } => write!(f, "group[{group:?}].toscreen()"),
            Self::WindowToGroup {
                group,
                switch_group,
            } => {
                if *switch_group {
                    write!(f, "window.togroup({group:?}, switch_group=True)")
                } else {
                    write!(f, "window.togroup({group:?})")
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_splits_command_on_whitespace() {
        let action = Action::spawn("amixer -c 0 sset Master 1+ unmute");

        assert_eq!(
            action.argv().unwrap(),
            ["amixer", "-c", "0", "sset", "Master", "1+", "unmute"]
        );
    }

    #[test]
    fn spawn_in_terminal_inserts_exec_flag() {
        let action = Action::spawn_in_terminal("alacritty", "sudo pacman -Syu");

        assert_eq!(
            action.argv().unwrap(),
            ["alacritty", "-e", "sudo", "pacman", "-Syu"]
        );
    }

    #[test]
    fn non_spawn_actions_have_no_argv() {
        assert!(Action::NextLayout.argv().is_none());
    }

    #[test]
    fn display_uses_lazy_call_notation() {
        assert_eq!(
            Action::Shuffle {
                direction: Direction::Left
            }
            .to_string(),
            "layout.shuffle_left()"
        );
        assert_eq!(
            Action::GroupToScreen { group: "3".into() }.to_string(),
            "group[\"3\"].toscreen()"
        );
        assert_eq!(
            Action::WindowToGroup {
                group: "3".into(),
                switch_group: true
            }
            .to_string(),
            "window.togroup(\"3\", switch_group=True)"
        );
    }

    #[test]
    fn action_deserializes_from_tagged_table() {
        let toml_str = "kind = \"spawn\"\nargv = [\"thunar\"]\n";

        let action: Action = toml::from_str(toml_str).unwrap();

        assert_eq!(
            action,
            Action::Spawn {
                argv: vec!["thunar".into()]
            }
        );
    }
}
