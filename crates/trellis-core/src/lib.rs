pub mod action;
pub mod config;
pub mod env;
pub mod error;
pub mod log;

pub use action::Action;
pub use config::{Config, Settings, ValidationIssue, assemble};
pub use env::Environment;
pub use error::ConfigError;
