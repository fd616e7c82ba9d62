use thiserror::Error;

use crate::infra::tmux::TmuxError;

#[derive(Error, Debug)]
pub enum SelectError {
    #[error("Not running in tmux")]
    NotInTmux,

    #[error("Failed to get current pane ID: {0}")]
    CurrentPane(#[source] TmuxError),

    #[error("Failed to get tmux panes: {0}")]
    Acquisition(#[source] TmuxError),

    #[error("No tmux panes found")]
    EmptyInventory,

    #[error("No suitable pane found for auto-selection")]
    NoCandidate,

    #[error("Pane selection cancelled")]
    Cancelled,

    #[error("Terminal error: {0}")]
    Terminal(#[source] std::io::Error),

    #[error("Failed to encode pane as JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to write selection: {0}")]
    Output(#[source] std::io::Error),
}
