//! Pane selection: snapshot tmux, pick a pane, print it.

mod error;
mod output;
mod recency;
mod tui;

use std::io;

use crate::infra::tmux::{self, PaneRecord};
use crate::shared::config::{Config, OutputFormat};
use crate::shared::env_var::EnvVars;

pub use error::SelectError;

/// Resolved run options: CLI flags layered over the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOptions {
    pub format: OutputFormat,
    pub auto: bool,
}

impl SelectOptions {
    /// `format` overrides the config value. `auto` turns auto mode on and
    /// `interactive` turns it off, whatever the config says.
    pub fn resolve(
        format: Option<OutputFormat>,
        auto: bool,
        interactive: bool,
        config: &Config,
    ) -> Self {
        Self {
            format: format.unwrap_or(config.format),
            auto: !interactive && (auto || config.auto),
        }
    }
}

/// Runs the selector and prints the chosen pane to stdout.
pub fn run(options: &SelectOptions) -> Result<(), SelectError> {
    if !EnvVars::load().in_tmux {
        return Err(SelectError::NotInTmux);
    }

    let current_id = tmux::current_pane_id().map_err(SelectError::CurrentPane)?;
    let panes = tmux::list_panes().map_err(SelectError::Acquisition)?;

    let pane = select_pane(&panes, &current_id, options.auto, tui::run)?;
    tracing::info!(pane = %pane.full_id, auto = options.auto, "pane selected");

    output::write_selection(&mut io::stdout().lock(), &pane, options.format)
}

/// Chooses a pane from the snapshot, either by recency or through `pick`.
///
/// `pick` receives the snapshot and the initial cursor and returns `None` on cancel.
fn select_pane<F>(
    panes: &[PaneRecord],
    current_id: &str,
    auto: bool,
    pick: F,
) -> Result<PaneRecord, SelectError>
where
    F: FnOnce(&[PaneRecord], usize) -> io::Result<Option<PaneRecord>>,
{
    if panes.is_empty() {
        return Err(SelectError::EmptyInventory);
    }

    let best = recency::select_best(panes, current_id);

    if auto {
        return best
            .and_then(|index| panes.get(index).cloned())
            .ok_or(SelectError::NoCandidate);
    }

    pick(panes, best.unwrap_or(0))
        .map_err(SelectError::Terminal)?
        .ok_or(SelectError::Cancelled)
}
