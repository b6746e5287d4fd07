use trellis_core::Settings;

use crate::Format;

/// Prints the assembled configuration as JSON or TOML.
pub fn execute(settings: &Settings, format: Format) {
    let config = super::assemble_or_exit(settings);

    let rendered = match format {
        Format::Json => serde_json::to_string_pretty(&config).map_err(|e| e.to_string()),
        Format::Toml => toml::to_string(&config).map_err(|e| e.to_string()),
    };
    match rendered {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("Error: could not serialize configuration: {e}");
            std::process::exit(1);
        }
    }
}
