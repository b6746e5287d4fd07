/// Generates the default `settings.toml` contents with explanatory comments.
///
/// Used by `trellis init` to create a starter file that users can
/// immediately edit. Every uncommented value equals the built-in
/// default, so the file changes nothing until edited.
pub fn generate_settings() -> String {
    r##"# Trellis settings
# Location: ~/.config/trellis/settings.toml

[apps]
# Terminal used by bindings and bar launchers. Detected from $TERMINAL
# or the programs on PATH when unset.
# terminal = "alacritty"
browser = "firefox"
# Directory holding the bar's icons. A leading ~/ is expanded.
icon_dir = "~/.config/qtile/icons"

# Color roles used by the bar. Add or override roles here:
# [palette.background]
# purple-100 = "#9932cc"
# [palette.foreground]
# primary = "#ffffff"

[layout_theme]
# Applied to layouts that don't set their own borders and margin.
border_width = 2
margin = 8
border_focus = "#ea1cff"
border_normal = "1d2330"

[bar]
# Height in pixels.
size = 20
# 0.0 (transparent) to 1.0 (opaque).
opacity = 1.0

[widget_defaults]
font = "sans"
fontsize = 12
padding = 3

[session]
follow_mouse_focus = true
bring_front_click = false
cursor_warp = false
auto_fullscreen = true
# "smart", "focus", "urgent" or "never".
focus_on_window_activation = "smart"
reconfigure_screens = true
auto_minimize = true
# Some Java toolkits only work with window manager names they know.
wmname = "LG3D"

[logging]
# Enable file logging to ~/.config/trellis/logs/trellis.log.
enabled = false
# Minimum log level: "debug", "info", "warn", or "error".
level = "info"
# Maximum log file size in MB before rotation.
max_file_mb = 10

# Wayland input devices, keyed by name or "type:<kind>":
# [input."type:keyboard"]
# kb_options = "ctrl:nocaps,compose:ralt"

# Replace the built-in layout list. Entries are used exactly as written;
# each layout only accepts its own parameters.
# [[layouts]]
# kind = "monadtall"
# margin = 4
# [[layouts]]
# kind = "max"

# Send windows to a group as they open:
# [[app_rules]]
# match = { wm_class = "telegram-desktop" }
# group = "9"

# Extra key bindings, appended after the built-in ones. A chord that is
# already bound is reported by `trellis check`.
# [[keys]]
# modifiers = ["mod4"]
# key = "e"
# actions = [{ kind = "spawn", argv = ["thunar"] }]
# desc = "File manager"
"##
    .to_string()
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
