use serde::Serialize;

/// Delimiter between fields of a `list-panes` line.
const FIELD_DELIMITER: &str = "|";

/// Minimum number of fields for a usable `list-panes` line.
const FIELD_COUNT: usize = 6;

/// One pane as reported by `tmux list-panes -a`.
///
/// Field names double as the JSON output schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaneRecord {
    pub session_name: String,
    pub window_index: String,
    pub pane_index: String,
    pub pane_title: String,
    /// Seconds since epoch of the last focus; 0 means unknown or never.
    pub last_used: u64,
    pub is_active: bool,
    pub full_id: String,
}

impl PaneRecord {
    pub fn new(
        session_name: impl Into<String>,
        window_index: impl Into<String>,
        pane_index: impl Into<String>,
        pane_title: impl Into<String>,
        last_used: u64,
        is_active: bool,
    ) -> Self {
        let session_name = session_name.into();
        let window_index = window_index.into();
        let pane_index = pane_index.into();
        let full_id = format!("{session_name}:{window_index}.{pane_index}");

        Self {
            session_name,
            window_index,
            pane_index,
            pane_title: pane_title.into(),
            last_used,
            is_active,
            full_id,
        }
    }

    /// Label shown in the interactive list: `session:window.pane - title`.
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.full_id, self.pane_title)
    }
}

/// Parses the full output of `list-panes`, skipping lines that cannot be parsed.
pub fn parse_pane_list(output: &str) -> Vec<PaneRecord> {
    output
        .lines()
        .filter_map(|line| {
            let pane = parse_pane_line(line);
            if pane.is_none() && !line.is_empty() {
                tracing::debug!(line, "dropping malformed list-panes line");
            }
            pane
        })
        .collect()
}

/// Parses a single line from tmux list-panes output.
/// Format: "session|window|pane|title|last_used|active"
///
/// Fields are read by position; anything past the sixth field is ignored.
fn parse_pane_line(line: &str) -> Option<PaneRecord> {
    let parts: Vec<&str> = line.split(FIELD_DELIMITER).collect();

    if parts.len() < FIELD_COUNT {
        return None;
    }

    let last_used = parts[4].parse::<u64>().unwrap_or(0);
    let is_active = parts[5] == "1";

    Some(PaneRecord::new(
        parts[0], parts[1], parts[2], parts[3], last_used, is_active,
    ))
}
