use trellis_core::Settings;

/// Prints the key table in binding order: chord, actions, description.
pub fn execute(settings: &Settings) {
    let config = super::assemble_or_exit(settings);

    let width = config
        .keys
        .iter()
        .map(|kb| kb.chord_label().len())
        .max()
        .unwrap_or(0);
    for kb in &config.keys {
        let actions: Vec<String> = kb.actions.iter().map(ToString::to_string).collect();
        let line = format!("{:<width$}  {}", kb.chord_label(), actions.join(", "));
        match &kb.desc {
            Some(desc) => println!("{line}  # {desc}"),
            None => println!("{line}"),
        }
    }
}
