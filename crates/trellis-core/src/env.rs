//! Facts about the running session read once at assembly time.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Terminals probed in order when `$TERMINAL` is unset.
const TERMINALS: &[&str] = &[
    "roxterm",
    "sakura",
    "hyper",
    "alacritty",
    "terminator",
    "termite",
    "gnome-terminal",
    "konsole",
    "xfce4-terminal",
    "lxterminal",
    "mate-terminal",
    "kitty",
    "yakuake",
    "tilix",
    "guake",
    "eterm",
    "st",
    "urxvt",
    "wezterm",
    "xterm",
    "x-terminal-emulator",
];

const FALLBACK_TERMINAL: &str = "xterm";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    pub user: String,
    pub hostname: String,
    pub home: PathBuf,
    pub terminal: String,
}

impl Environment {
    /// Reads the username, hostname, home directory and terminal.
    ///
    /// A missing username is fatal; every other fact has a fallback.
    pub fn probe() -> Result<Self, ConfigError> {
        let user = env::var("USER")
            .or_else(|_| env::var("LOGNAME"))
            .map_err(|_| ConfigError::MissingEnv("USER"))?;
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        let hostname = hostname();
        let terminal = guess_terminal(env::var("TERMINAL").ok(), env::var_os("PATH").as_deref());
        tracing::debug!(%user, %hostname, %terminal, "probed environment");
        Ok(Self {
            user,
            hostname,
            home,
            terminal,
        })
    }

    /// The shell prompt string, `user@host: `.
    pub fn prompt(&self) -> String {
        format!("{}@{}: ", self.user, self.hostname)
    }
}

fn hostname() -> String {
    ["/proc/sys/kernel/hostname", "/etc/hostname"]
        .iter()
        .find_map(|p| {
            std::fs::read_to_string(p)
                .ok()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        })
        .or_else(|| env::var("HOSTNAME").ok())
        .unwrap_or_else(|| "localhost".into())
}

/// Picks a terminal: the preferred one if given, else the first known
/// terminal found on `path`, else xterm.
pub fn guess_terminal(preferred: Option<String>, path: Option<&std::ffi::OsStr>) -> String {
    if let Some(term) = preferred.filter(|t| !t.trim().is_empty()) {
        return term;
    }
    let search: Vec<PathBuf> = path.map(|p| env::split_paths(p).collect()).unwrap_or_default();
    TERMINALS
        .iter()
        .find(|name| search.iter().any(|d| is_executable(&d.join(name))))
        .map(|name| (*name).to_string())
        .unwrap_or_else(|| {
            tracing::warn!("no known terminal found on PATH, falling back to {FALLBACK_TERMINAL}");
            FALLBACK_TERMINAL.to_string()
        })
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
