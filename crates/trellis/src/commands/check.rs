use trellis_core::config::{self, Settings};
use trellis_core::{Config, Environment};

/// ANSI escape helpers for check output.
const OK: &str = "\x1b[32m[ok]\x1b[0m";
const WARN: &str = "\x1b[33m[warn]\x1b[0m";
const FAIL: &str = "\x1b[31m[fail]\x1b[0m";

/// Loads, assembles and validates the configuration, printing one line
/// per check. Exits with status 1 if any check failed.
pub fn execute() {
    let mut failures = 0;

    let settings = check_settings_file(&mut failures);
    let config = check_environment(&mut failures)
        .and_then(|env| check_assembly(&settings, &env, &mut failures));
    if let Some(config) = &config {
        check_validation(config, &mut failures);
        check_icons(config);
    }

    println!();
    if failures > 0 {
        println!("{failures} check(s) failed.");
        std::process::exit(1);
    }
    println!("Configuration is valid.");
}

fn check_settings_file(failures: &mut usize) -> Settings {
    let Some(path) = config::settings_path() else {
        println!("  {FAIL} Could not determine settings path");
        *failures += 1;
        return Settings::default();
    };
    match config::try_load() {
        Ok(settings) => {
            println!("  {OK} {} is valid", path.display());
            settings
        }
        Err(e) if e.is_not_found() => {
            println!("  {WARN} settings.toml not found (using defaults)");
            Settings::default()
        }
        Err(e) => {
            println!("  {FAIL} {e}");
            *failures += 1;
            Settings::default()
        }
    }
}

fn check_environment(failures: &mut usize) -> Option<Environment> {
    match Environment::probe() {
        Ok(env) => {
            println!(
                "  {OK} Session {}@{} using terminal {}",
                env.user, env.hostname, env.terminal
            );
            Some(env)
        }
        Err(e) => {
            println!("  {FAIL} {e}");
            *failures += 1;
            None
        }
    }
}

fn check_assembly(settings: &Settings, env: &Environment, failures: &mut usize) -> Option<Config> {
    match trellis_core::assemble(settings, env) {
        Ok(config) => {
            let widgets: usize = config
                .screens
                .iter()
                .flat_map(|s| s.top.iter().chain(s.bottom.iter()))
                .map(|bar| bar.widgets.len())
                .sum();
            println!(
                "  {OK} Assembled {} key(s), {} group(s), {} layout(s), {} widget(s)",
                config.keys.len(),
                config.groups.len(),
                config.layouts.len(),
                widgets
            );
            Some(config)
        }
        Err(e) => {
            println!("  {FAIL} {e}");
            *failures += 1;
            None
        }
    }
}

fn check_validation(config: &Config, failures: &mut usize) {
    match config.validate() {
        Ok(()) => println!("  {OK} No duplicate bindings; every group is reachable"),
        Err(issues) => {
            for issue in &issues {
                println!("  {FAIL} {issue}");
            }
            *failures += issues.len();
        }
    }
}

fn check_icons(config: &Config) {
    let missing: Vec<_> = config.image_paths().filter(|p| !p.is_file()).collect();
    if missing.is_empty() {
        println!("  {OK} All bar icons exist");
        return;
    }
    for path in missing {
        println!("  {WARN} Icon not found: {}", path.display());
    }
}
