use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{List, ListItem, ListState, Paragraph},
};

use crate::infra::tmux::PaneRecord;

const TITLE: &str = "Select target tmux pane:";
const HELP: &str = "Use ↑↓←→/WASD/HJKL to navigate, Enter to select, q/Esc to cancel";

/// Row prefix for the pane under the cursor.
const CURSOR_MARKER: &str = "  > ";
/// Row prefix for every other pane, same width as [`CURSOR_MARKER`].
const ROW_MARKER: &str = "    ";

/// Renders the entire UI.
pub fn render(frame: &mut Frame, panes: &[PaneRecord], cursor: usize) {
    let areas = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .split(frame.area());

    render_header(frame, areas[0]);
    render_help(frame, areas[1]);
    render_pane_list(frame, areas[3], panes, cursor);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(TITLE).style(Style::default().fg(Color::Yellow));
    frame.render_widget(header, area);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}

/// Rows are never wrapped or truncated; the list scrolls to keep the cursor visible.
fn render_pane_list(frame: &mut Frame, area: Rect, panes: &[PaneRecord], cursor: usize) {
    let items: Vec<ListItem> = panes
        .iter()
        .enumerate()
        .map(|(index, pane)| {
            let marker = if index == cursor {
                CURSOR_MARKER
            } else {
                ROW_MARKER
            };
            ListItem::new(format!("{marker}{}", pane.display_name()))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD));
    let mut list_state = ListState::default().with_selected(Some(cursor));

    frame.render_stateful_widget(list, area, &mut list_state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn draw(panes: &[PaneRecord], cursor: usize, width: u16, height: u16) -> Buffer {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|frame| render(frame, panes, cursor))
            .unwrap();

        terminal.backend().buffer().clone()
    }

    /// Converts a buffer to text, trimming trailing spaces of each row.
    fn buffer_to_string(buffer: &Buffer) -> String {
        let mut rows = Vec::new();

        for y in 0..buffer.area.height {
            let mut row = String::new();
            for x in 0..buffer.area.width {
                row.push_str(buffer[(x, y)].symbol());
            }
            rows.push(row.trim_end_matches(' ').to_string());
        }

        rows.join("\n")
    }

    fn sample_panes() -> Vec<PaneRecord> {
        vec![
            PaneRecord::new("main", "0", "0", "bash", 1000, false),
            PaneRecord::new("main", "0", "1", "vim", 2000, true),
            PaneRecord::new("main", "1", "0", "bash", 500, false),
        ]
    }

    #[test]
    fn test_render_full_screen() {
        let buffer = draw(&sample_panes(), 1, 80, 6);

        let expected = indoc! {"
            Select target tmux pane:
            Use ↑↓←→/WASD/HJKL to navigate, Enter to select, q/Esc to cancel

                main:0.0 - bash
              > main:0.1 - vim
                main:1.0 - bash
        "};

        assert_eq!(buffer_to_string(&buffer), expected.trim_end());
    }

    #[test]
    fn test_render_highlights_only_cursor_row() {
        let buffer = draw(&sample_panes(), 2, 80, 6);

        assert!(buffer[(4, 5)].modifier.contains(Modifier::REVERSED));
        assert!(!buffer[(4, 3)].modifier.contains(Modifier::REVERSED));
        assert!(!buffer[(4, 4)].modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_render_header_colors() {
        let buffer = draw(&sample_panes(), 0, 80, 6);

        assert_eq!(buffer[(0, 0)].fg, Color::Yellow);
        assert_eq!(buffer[(0, 1)].fg, Color::DarkGray);
    }

    #[test]
    fn test_render_scrolls_to_cursor() {
        let panes: Vec<PaneRecord> = (0..10)
            .map(|i| PaneRecord::new("main", "0", i.to_string(), "bash", 0, false))
            .collect();

        let output = buffer_to_string(&draw(&panes, 8, 40, 6));

        assert!(output.contains("  > main:0.8 - bash"));
        assert!(!output.contains("main:0.0"));
    }

    #[test]
    fn test_render_long_title_is_clipped_by_surface() {
        let panes = vec![PaneRecord::new("main", "0", "0", "x".repeat(100), 0, false)];

        let output = buffer_to_string(&draw(&panes, 0, 30, 4));
        let last_row = output.lines().last().unwrap();

        assert_eq!(last_row, format!("  > main:0.0 - {}", "x".repeat(15)));
    }
}
