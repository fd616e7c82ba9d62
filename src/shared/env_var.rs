//! Centralized reader for the environment variables tmux-selector consults.
//!
//! Environment variable names are defined as private constants here;
//! external code accesses values through the `EnvVars` struct.

/// Set by tmux in every process it spawns; its presence marks a tmux session.
const TMUX: &str = "TMUX";
const LOG: &str = "TMUX_SELECTOR_LOG";

/// Snapshot of the relevant environment variables at load time.
pub struct EnvVars {
    /// Whether the process runs inside a tmux session.
    pub in_tmux: bool,

    /// Tracing filter directive (e.g. "debug"); unset disables logging.
    pub log: Option<String>,
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

impl EnvVars {
    /// Read the environment variables from the current process.
    pub fn load() -> Self {
        Self {
            in_tmux: std::env::var_os(TMUX).is_some(),
            log: non_empty_var(LOG),
        }
    }
}
