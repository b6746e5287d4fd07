//! Window match rules for the floating layout.
//!
//! A window matching any rule floats instead of being tiled. Within a
//! single rule every set criterion must match; a rule with no criteria
//! matches nothing.

use serde::{Deserialize, Serialize};

/// Match criteria, compared exactly against the window's properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Match {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wm_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wm_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// The window properties a [`Match`] is evaluated against.
///
/// The host does its own matching at runtime. This type, [`Match::matches`]
/// and [`should_float`] let callers inspect which windows a rule set
/// would float without a running session.
#[derive(Debug, Clone, Default)]
pub struct WindowProps<'a> {
    /// All WM_CLASS strings of the window (instance and class).
    pub wm_class: &'a [&'a str],
    pub title: &'a str,
    pub wm_type: &'a str,
    pub role: &'a str,
}

impl Match {
    pub fn wm_class(class: &str) -> Self {
        Self {
            wm_class: Some(class.into()),
            ..Default::default()
        }
    }

    pub fn title(title: &str) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn wm_type(wm_type: &str) -> Self {
        Self {
            wm_type: Some(wm_type.into()),
            ..Default::default()
        }
    }

    /// Returns true if no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.wm_class.is_none() && self.title.is_none() && self.wm_type.is_none() && self.role.is_none()
    }

    /// Evaluates the rule the way the host does: exact comparison, all
    /// set criteria must hold.
    pub fn matches(&self, window: &WindowProps<'_>) -> bool {
        if self.is_empty() {
            return false;
        }
        if let Some(ref class) = self.wm_class
            && !window.wm_class.contains(&class.as_str())
        {
            return false;
        }
        if let Some(ref title) = self.title
            && title != window.title
        {
            return false;
        }
        if let Some(ref wm_type) = self.wm_type
            && wm_type != window.wm_type
        {
            return false;
        }
        if let Some(ref role) = self.role
            && role != window.role
        {
            return false;
        }
        true
    }
}

/// Routes windows matching a rule to a group as they appear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppRule {
    #[serde(rename = "match")]
    pub rule: Match,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default)]
    pub float: bool,
}

/// Returns true if any rule matches the window.
pub fn should_float(window: &WindowProps<'_>, rules: &[Match]) -> bool {
    rules.iter().any(|rule| rule.matches(window))
}

/// The host's built-in float rules: dialogs, splash screens, toolbars
/// and similar transient windows.
pub fn default_float_rules() -> Vec<Match> {
    let mut rules: Vec<Match> = ["utility", "notification", "toolbar", "splash", "dialog"]
        .into_iter()
        .map(Match::wm_type)
        .collect();
    rules.extend(
        [
            "file_progress",
            "confirm",
            "dialog",
            "download",
            "error",
            "notification",
            "splash",
            "toolbar",
        ]
        .into_iter()
        .map(Match::wm_class),
    );
    rules
}

/// Additional float rules for gitk dialogs, ssh-askpass and GPG
/// passphrase prompts.
pub fn user_float_rules() -> Vec<Match> {
    vec![
        Match::wm_class("confirmreset"),
        Match::wm_class("makebranch"),
        Match::wm_class("maketag"),
        Match::wm_class("ssh-askpass"),
        Match::title("branchdialog"),
        Match::title("pinentry"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window<'a>(classes: &'a [&'a str], title: &'a str) -> WindowProps<'a> {
        WindowProps {
            wm_class: classes,
            title,
            wm_type: "normal",
            role: "",
        }
    }

    #[test]
    fn class_rule_matches_any_class_string() {
        let rules = vec![Match::wm_class("ssh-askpass")];

        assert!(should_float(&window(&["ssh-askpass", "SshAskpass"], "x"), &rules));
        assert!(!should_float(&window(&["firefox", "Firefox"], "x"), &rules));
    }

    #[test]
    fn title_rule_is_exact() {
        let rules = vec![Match::title("pinentry")];

        assert!(should_float(&window(&["gcr"], "pinentry"), &rules));
        assert!(!should_float(&window(&["gcr"], "pinentry-gtk"), &rules));
    }

    #[test]
    fn all_criteria_of_a_rule_must_match() {
        let rule = Match {
            wm_class: Some("gitk".into()),
            title: Some("branchdialog".into()),
            ..Default::default()
        };

        assert!(rule.matches(&window(&["gitk"], "branchdialog")));
        assert!(!rule.matches(&window(&["gitk"], "main")));
    }

    #[test]
    fn empty_rule_matches_nothing() {
        assert!(!Match::default().matches(&window(&["a"], "b")));
    }

    #[test]
    fn default_rules_float_dialogs() {
        let dialog = WindowProps {
            wm_class: &["app"],
            title: "Open",
            wm_type: "dialog",
            role: "",
        };

        assert!(should_float(&dialog, &default_float_rules()));
        assert!(!should_float(&window(&["app"], "Open"), &default_float_rules()));
    }

    #[test]
    fn user_rules_cover_six_windows() {
        assert_eq!(user_float_rules().len(), 6);
    }
}
