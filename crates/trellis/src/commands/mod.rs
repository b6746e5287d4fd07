pub mod check;
pub mod dump;
pub mod init;
pub mod keys;

use trellis_core::{Config, Environment, Settings};

/// Probes the environment and assembles, exiting on failure.
fn assemble_or_exit(settings: &Settings) -> Config {
    let env = Environment::probe().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
    trellis_core::assemble(settings, &env).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}
