mod commands;

use clap::{Parser, Subcommand, ValueEnum};

use trellis_core::config;

#[derive(Parser)]
#[command(
    name = "trellis",
    version,
    about = "Assemble and check a tiling window manager configuration"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default settings file
    Init,
    /// Assemble the configuration and report problems
    Check,
    /// Print the assembled configuration for the host
    Dump {
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// List every key binding
    Keys,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Toml,
}

fn main() {
    let cli = Cli::parse();
    let settings = config::load();
    trellis_core::log::init(&settings.logging);

    match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Check => commands::check::execute(),
        Commands::Dump { format } => commands::dump::execute(&settings, format),
        Commands::Keys => commands::keys::execute(&settings),
    }
}
