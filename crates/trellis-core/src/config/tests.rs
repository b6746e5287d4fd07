use std::path::PathBuf;

use super::*;

fn env() -> Environment {
    Environment {
        user: "ada".into(),
        hostname: "engine".into(),
        home: PathBuf::from("/home/ada"),
        terminal: "alacritty".into(),
    }
}

fn default_config() -> Config {
    assemble(&Settings::default(), &env()).unwrap()
}

fn extra_binding(modifiers: &[Modifier], key: &str) -> Keybinding {
    Keybinding {
        modifiers: modifiers.to_vec(),
        key: key.into(),
        actions: vec![Action::spawn("thunar")],
        desc: None,
    }
}

#[test]
fn default_config_validates_cleanly() {
    // Arrange
    let config = default_config();

    // Act
    let result = config.validate();

    // Assert
    assert_eq!(result, Ok(()));
}

#[test]
fn assembly_is_deterministic() {
    // Act
    let first = default_config();
    let second = default_config();

    // Assert
    assert_eq!(first, second);
}

#[test]
fn key_table_is_literal_then_groups_then_user() {
    // Arrange
    let settings = Settings {
        keys: vec![extra_binding(&[Modifier::Mod4], "e")],
        ..Default::default()
    };

    // Act
    let config = assemble(&settings, &env()).unwrap();

    // Assert
    assert_eq!(config.keys.len(), 29 + 18 + 1);
    assert_eq!(config.keys[29].chord_label(), "mod4+1");
    assert_eq!(config.keys[30].chord_label(), "mod4+shift+1");
    assert_eq!(config.keys[47].chord_label(), "mod4+e");
}

#[test]
fn every_group_has_one_switch_and_one_move_binding() {
    // Arrange
    let config = default_config();

    // Act
    let switches: Vec<usize> = config
        .groups
        .iter()
        .map(|g| config.count_bindings(g, is_switch_binding))
        .collect();
    let moves: Vec<usize> = config
        .groups
        .iter()
        .map(|g| config.count_bindings(g, is_move_binding))
        .collect();

    // Assert
    assert_eq!(config.groups.len(), 9);
    assert!(switches.iter().all(|&n| n == 1), "{switches:?}");
    assert!(moves.iter().all(|&n| n == 1), "{moves:?}");
}

#[test]
fn removed_group_binding_is_reported() {
    // Arrange
    let mut config = default_config();
    config.keys.retain(|kb| kb.chord_label() != "mod4+shift+5");

    // Act
    let issues = config.validate().unwrap_err();

    // Assert
    assert_eq!(
        issues,
        [ValidationIssue::GroupCoverage {
            group: "5".into(),
            binding: "move",
            count: 0,
        }]
    );
}

#[test]
fn user_rebinding_of_mod4_h_is_reported_against_shrink() {
    // Arrange
    let settings = Settings {
        keys: vec![extra_binding(&[Modifier::Mod4], "h")],
        ..Default::default()
    };
    let config = assemble(&settings, &env()).unwrap();

    // Act
    let issues = config.validate().unwrap_err();

    // Assert
    assert_eq!(
        issues,
        [ValidationIssue::DuplicateBinding(DuplicateBinding {
            chord: "mod4+h".into(),
            first: 13,
            shadowed_by: 47,
        })]
    );
    assert_eq!(config.keys[13].actions, [Action::Shrink, Action::DecreaseNmaster]);
    assert!(issues[0].to_string().contains("mod4+h"));
}

#[test]
fn modifier_order_does_not_hide_a_duplicate() {
    // Arrange
    let settings = Settings {
        keys: vec![extra_binding(&[Modifier::Shift, Modifier::Mod4], "3")],
        ..Default::default()
    };
    let config = assemble(&settings, &env()).unwrap();

    // Act
    let issues = config.validate().unwrap_err();

    // Assert
    assert!(matches!(
        &issues[0],
        ValidationIssue::DuplicateBinding(dup) if dup.chord == "mod4+shift+3"
    ));
}

#[test]
fn missing_palette_role_fails_assembly() {
    // Arrange
    let settings: Settings = toml::from_str("[palette.background]\n").unwrap();
    let mut palette = Palette::with_overrides(&settings.palette);
    palette.background.remove("blue-100");
    let apps = settings.apps.resolve(&env());

    // Act
    let result = bar::init_screens(&palette, &apps, &settings.bar);

    // Assert
    assert!(matches!(
        result,
        Err(ConfigError::UnknownColorRole { table: "background", .. })
    ));
}

#[test]
fn palette_override_reaches_the_bar() {
    // Arrange
    let settings: Settings =
        toml::from_str("[palette.background]\n\"purple-100\" = \"#112233\"\n").unwrap();

    // Act
    let config = assemble(&settings, &env()).unwrap();

    // Assert
    let bar = config.screens[0].top.as_ref().unwrap();
    assert_eq!(bar.widgets[2].style.background.as_ref().unwrap().as_str(), "#112233");
}

#[test]
fn invalid_bar_geometry_fails_assembly() {
    // Arrange
    let settings: Settings = toml::from_str("[bar]\nopacity = 2.0\n").unwrap();

    // Act
    let result = assemble(&settings, &env());

    // Assert
    assert!(matches!(
        result,
        Err(ConfigError::InvalidBar { field: "opacity", .. })
    ));
}

#[test]
fn layout_cycle_returns_to_first_after_n_steps() {
    // Arrange
    let config = default_config();
    let mut cycle = config.layout_cycle();

    // Act
    for _ in 0..config.layouts.len() {
        cycle.next_layout();
    }

    // Assert
    assert_eq!(cycle.index(), 0);
    assert_eq!(cycle.current(), config.layouts.first());
}

#[test]
fn layout_theme_setting_reaches_themed_layouts_only() {
    // Arrange
    let settings: Settings = toml::from_str("[layout_theme]\nmargin = 4\n").unwrap();

    // Act
    let config = assemble(&settings, &env()).unwrap();

    // Assert
    assert_eq!(config.layouts[2].params.margin, Some(4));
    assert_eq!(config.layouts[0].params.margin, None);
}

#[test]
fn floating_layout_carries_default_and_user_rules() {
    // Act
    let config = default_config();

    // Assert
    let rules = config.floating_layout.params.float_rules.as_ref().unwrap();
    assert_eq!(rules.len(), 13 + 6);
    assert_eq!(rules.last(), Some(&Match::title("pinentry")));
}

#[test]
fn prompt_and_session_come_from_inputs() {
    // Act
    let config = default_config();

    // Assert
    assert_eq!(config.prompt, "ada@engine: ");
    assert_eq!(config.session.wmname, "LG3D");
    assert!(config.wl_input_rules.is_none());
    assert!(config.dgroups_key_binder.is_none());
}

#[test]
fn launchers_use_the_detected_terminal() {
    // Act
    let config = default_config();

    // Assert
    let spawns: Vec<&[String]> = config.keys.iter().flat_map(|kb| &kb.actions).filter_map(Action::argv).collect();
    assert!(spawns.iter().any(|argv| argv.first().map(String::as_str) == Some("alacritty")));
}

#[test]
fn image_paths_are_under_the_icon_dir() {
    // Act
    let config = default_config();

    // Assert
    let paths: Vec<_> = config.image_paths().collect();
    assert_eq!(paths.len(), 6);
    assert!(paths.iter().all(|p| p.starts_with("/home/ada/.config/qtile/icons")));
}

#[test]
fn config_serializes_with_host_names() {
    // Arrange
    let config = default_config();

    // Act
    let json = serde_json::to_value(&config).unwrap();

    // Assert
    for name in [
        "keys",
        "mouse",
        "groups",
        "layouts",
        "floating_layout",
        "screens",
        "widget_defaults",
        "extension_defaults",
        "dgroups_app_rules",
        "follow_mouse_focus",
        "bring_front_click",
        "cursor_warp",
        "auto_fullscreen",
        "focus_on_window_activation",
        "reconfigure_screens",
        "auto_minimize",
        "wmname",
        "prompt",
    ] {
        assert!(json.get(name).is_some(), "missing {name}");
    }
    assert_eq!(json["focus_on_window_activation"], "smart");
    assert_eq!(json["layouts"][6]["kind"], "treetab");
}

#[test]
fn config_serializes_to_toml() {
    // Arrange
    let config = default_config();

    // Act
    let text = toml::to_string(&config).unwrap();

    // Assert
    assert!(text.contains("wmname = \"LG3D\""));
}

#[test]
fn key_without_actions_is_reported() {
    // Arrange
    let settings: Settings =
        toml::from_str("[[keys]]\nmodifiers = [\"mod4\"]\nkey = \"e\"\nactions = []\n").unwrap();
    let config = assemble(&settings, &env()).unwrap();

    // Act
    let issues = config.validate().unwrap_err();

    // Assert
    assert_eq!(
        issues,
        [ValidationIssue::EmptyActions {
            key: 47,
            chord: "mod4+e".into(),
        }]
    );
}

#[test]
fn spawn_with_empty_argv_is_reported() {
    // Arrange
    let settings: Settings = toml::from_str(
        "[[keys]]\nmodifiers = [\"mod4\"]\nkey = \"e\"\nactions = [{ kind = \"spawn\", argv = [] }]\n",
    )
    .unwrap();
    let config = assemble(&settings, &env()).unwrap();

    // Act
    let issues = config.validate().unwrap_err();

    // Assert
    assert_eq!(issues.len(), 1);
    assert!(matches!(
        &issues[0],
        ValidationIssue::EmptySpawn { location } if location.contains("mod4+e")
    ));
}

#[test]
fn widget_click_with_empty_argv_is_reported() {
    // Arrange
    let mut config = default_config();
    let bar = config.screens[0].top.as_mut().unwrap();
    bar.widgets[0]
        .mouse_callbacks
        .insert(MouseButton::Button1, Action::Spawn { argv: vec![] });

    // Act
    let issues = config.validate().unwrap_err();

    // Assert
    assert_eq!(issues.len(), 1);
    assert!(matches!(
        &issues[0],
        ValidationIssue::EmptySpawn { location } if location.contains("widget #0")
    ));
}

#[test]
fn app_rule_without_criteria_is_reported() {
    // Arrange
    let settings: Settings =
        toml::from_str("[[app_rules]]\nmatch = {}\ngroup = \"9\"\n").unwrap();
    let config = assemble(&settings, &env()).unwrap();

    // Act
    let issues = config.validate().unwrap_err();

    // Assert
    assert_eq!(issues, [ValidationIssue::EmptyAppRule { index: 0 }]);
}

#[test]
fn app_rule_with_criteria_validates() {
    // Arrange
    let settings: Settings = toml::from_str(
        "[[app_rules]]\nmatch = { wm_class = \"telegram-desktop\" }\ngroup = \"9\"\n",
    )
    .unwrap();
    let config = assemble(&settings, &env()).unwrap();

    // Act
    let result = config.validate();

    // Assert
    assert_eq!(result, Ok(()));
    assert_eq!(config.dgroups_app_rules.len(), 1);
}

#[test]
fn user_layouts_replace_the_defaults() {
    // Arrange
    let settings: Settings = toml::from_str(
        "[[layouts]]\nkind = \"monadtall\"\nmargin = 4\n\n[[layouts]]\nkind = \"max\"\n",
    )
    .unwrap();

    // Act
    let config = assemble(&settings, &env()).unwrap();

    // Assert
    let kinds: Vec<LayoutKind> = config.layouts.iter().map(|l| l.kind).collect();
    assert_eq!(kinds, [LayoutKind::MonadTall, LayoutKind::Max]);
    assert_eq!(config.layouts[0].params.margin, Some(4));
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn user_layout_with_misspelled_parameter_fails_assembly() {
    // Arrange
    let settings: Settings =
        toml::from_str("[[layouts]]\nkind = \"treetab\"\ninawctive_fg = \"1c1f24\"\n").unwrap();

    // Act
    let result = assemble(&settings, &env());

    // Assert
    assert!(matches!(
        result,
        Err(ConfigError::UnknownLayoutParameter { kind: "treetab", ref param }) if param == "inawctive_fg"
    ));
}

#[test]
fn user_layout_with_invalid_color_fails_to_parse() {
    // Act
    let result: Result<Settings, _> =
        toml::from_str("[[layouts]]\nkind = \"treetab\"\ninactive_fg = \"1c1f240\"\n");

    // Assert
    assert!(result.is_err());
}
