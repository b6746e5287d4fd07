use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort configuration assembly.
///
/// Every variant is a load-time failure: the host keeps whatever
/// configuration it was already running (or its own fallback) and
/// the new one is rejected as a whole.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine the home directory")]
    NoHomeDir,

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),

    #[error("invalid color {0:?} (expected #rgb, #rrggbb or #rrggbbaa)")]
    InvalidColor(String),

    #[error("unknown {table} color role {role:?}")]
    UnknownColorRole { table: &'static str, role: String },

    #[error("layout {kind} does not accept parameter {param:?}")]
    UnknownLayoutParameter { kind: &'static str, param: String },

    #[error("{widget} format {format:?} uses unknown field {field:?}")]
    UnknownPlaceholder {
        widget: &'static str,
        format: String,
        field: String,
    },

    #[error("malformed {widget} format {format:?}: unbalanced braces")]
    MalformedFormat { widget: &'static str, format: String },

    #[error("bar {field} must be {expected}, got {value}")]
    InvalidBar {
        field: &'static str,
        expected: &'static str,
        value: String,
    },
}

impl ConfigError {
    /// Returns true if this is an IO error for a file that does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

pub type Result<T, E = ConfigError> = std::result::Result<T, E>;
