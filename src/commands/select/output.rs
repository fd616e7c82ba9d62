use std::io::Write;

use super::error::SelectError;
use crate::infra::tmux::PaneRecord;
use crate::shared::config::OutputFormat;

/// Formats the selected pane as the single line printed to stdout.
pub fn format_selection(pane: &PaneRecord, format: OutputFormat) -> Result<String, SelectError> {
    match format {
        OutputFormat::Plain => Ok(pane.full_id.clone()),
        OutputFormat::Json => Ok(serde_json::to_string(pane)?),
    }
}

/// Writes the selection followed by a newline.
///
/// The line is fully formatted before anything is written.
pub fn write_selection<W: Write>(
    writer: &mut W,
    pane: &PaneRecord,
    format: OutputFormat,
) -> Result<(), SelectError> {
    let line = format_selection(pane, format)?;
    writeln!(writer, "{line}").map_err(SelectError::Output)?;
    writer.flush().map_err(SelectError::Output)
}
