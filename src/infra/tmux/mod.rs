//! Tmux queries: pane inventory and the invoking pane's location.

mod pane;

use std::process::Command;

use thiserror::Error;

pub use pane::{PaneRecord, parse_pane_list};

/// Format passed to `list-panes -F`; fields are joined by `|`.
const LIST_PANES_FORMAT: &str =
    "#{session_name}|#{window_index}|#{pane_index}|#{pane_title}|#{t:last-used}|#{pane_active}";

/// Format passed to `display-message -p` to identify the current pane.
const CURRENT_PANE_FORMAT: &str = "#{session_name}:#{window_index}.#{pane_index}";

#[derive(Error, Debug)]
pub enum TmuxError {
    #[error("tmux command '{command}' failed: {message}")]
    CommandFailed {
        command: String,
        args: Vec<String>,
        message: String,
        stderr: Option<String>,
    },
}

impl TmuxError {
    fn command_failed(args: &[&str], message: impl Into<String>, stderr: Option<String>) -> Self {
        Self::CommandFailed {
            command: "tmux".to_string(),
            args: args.iter().map(|s| s.to_string()).collect(),
            message: message.into(),
            stderr,
        }
    }
}

pub type Result<T> = std::result::Result<T, TmuxError>;

/// Run a tmux command and return its raw stdout on success.
fn run_tmux_output(args: &[&str]) -> Result<String> {
    tracing::debug!(?args, "running tmux");

    let output = Command::new("tmux")
        .args(args)
        .output()
        .map_err(|e| TmuxError::command_failed(args, e.to_string(), None))?;

    if output.status.success() {
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        Err(TmuxError::command_failed(
            args,
            format!("command exited with {}", output.status),
            Some(stderr),
        ))
    }
}

/// List every pane of every session, in the order tmux reports them.
///
/// Malformed lines are dropped; an empty list is not an error here.
pub fn list_panes() -> Result<Vec<PaneRecord>> {
    let stdout = run_tmux_output(&["list-panes", "-a", "-F", LIST_PANES_FORMAT])?;
    let panes = parse_pane_list(&stdout);
    tracing::debug!(count = panes.len(), "acquired pane snapshot");
    Ok(panes)
}

/// Get the `session:window.pane` identifier of the pane this process runs in.
pub fn current_pane_id() -> Result<String> {
    let stdout = run_tmux_output(&["display-message", "-p", CURRENT_PANE_FORMAT])?;
    Ok(stdout.trim().to_string())
}
