use super::*;
use crate::config::Settings;

#[test]
fn settings_template_parses() {
    // Arrange
    let toml_str = generate_settings();

    // Act
    let result: Result<Settings, _> = toml::from_str(&toml_str);

    // Assert
    assert!(
        result.is_ok(),
        "settings template is not valid TOML: {result:?}"
    );
}

#[test]
fn settings_template_matches_default_values() {
    // Arrange
    let toml_str = generate_settings();

    // Act
    let settings: Settings = toml::from_str(&toml_str).unwrap();

    // Assert
    assert_eq!(settings, Settings::default());
}

#[test]
fn commented_keys_example_parses_once_uncommented() {
    // Arrange
    let toml_str: String = generate_settings()
        .lines()
        .skip_while(|l| !l.starts_with("# [[keys]]"))
        .map(|l| l.trim_start_matches("# "))
        .collect::<Vec<_>>()
        .join("\n");

    // Act
    let settings: Settings = toml::from_str(&toml_str).unwrap();

    // Assert
    assert_eq!(settings.keys.len(), 1);
    assert_eq!(settings.keys[0].chord_label(), "mod4+e");
    assert_eq!(settings.keys[0].actions[0].argv().unwrap(), ["thunar"]);
}

#[test]
fn commented_app_rule_example_parses_once_uncommented() {
    // Arrange
    let toml_str: String = generate_settings()
        .lines()
        .skip_while(|l| !l.starts_with("# [[app_rules]]"))
        .take(3)
        .map(|l| l.trim_start_matches("# "))
        .collect::<Vec<_>>()
        .join("\n");

    // Act
    let settings: Settings = toml::from_str(&toml_str).unwrap();

    // Assert
    assert_eq!(settings.app_rules.len(), 1);
    assert_eq!(settings.app_rules[0].group.as_deref(), Some("9"));
}

#[test]
fn commented_layouts_example_parses_once_uncommented() {
    // Arrange
    let toml_str: String = generate_settings()
        .lines()
        .skip_while(|l| !l.starts_with("# [[layouts]]"))
        .take(5)
        .map(|l| l.trim_start_matches("# "))
        .collect::<Vec<_>>()
        .join("\n");

    // Act
    let settings: Settings = toml::from_str(&toml_str).unwrap();

    // Assert
    assert_eq!(settings.layouts.len(), 2);
    assert_eq!(settings.layouts[0].params.margin, Some(4));
}
