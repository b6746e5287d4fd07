use serde::{Deserialize, Serialize};

use super::keybinding::Modifier;
use crate::action::Action;

/// Pointer buttons the host recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left button.
    Button1,
    /// Middle button.
    Button2,
    /// Right button.
    Button3,
    /// Scroll up.
    Button4,
    /// Scroll down.
    Button5,
}

/// A pointer binding on windows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MouseBinding {
    /// Press, move, release. `start` is evaluated on press and its
    /// result seeds `action` while dragging.
    Drag {
        modifiers: Vec<Modifier>,
        button: MouseButton,
        action: Action,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        start: Option<Action>,
    },
    Click {
        modifiers: Vec<Modifier>,
        button: MouseButton,
        action: Action,
    },
}

/// Drag floating windows with Mod4 + left/right button, raise with
/// Mod4 + middle click.
pub fn defaults() -> Vec<MouseBinding> {
    use Modifier::Mod4;

    vec![
        MouseBinding::Drag {
            modifiers: vec![Mod4],
            button: MouseButton::Button1,
            action: Action::SetPositionFloating,
            start: Some(Action::GetPosition),
        },
        MouseBinding::Drag {
            modifiers: vec![Mod4],
            button: MouseButton::Button3,
            action: Action::SetSizeFloating,
            start: Some(Action::GetSize),
        },
        MouseBinding::Click {
            modifiers: vec![Mod4],
            button: MouseButton::Button2,
            action: Action::BringToFront,
        },
    ]
}
