mod event;
mod state;
mod ui;

use std::io::{self, Stderr};

use crossterm::{cursor, execute, terminal};
use ratatui::{Terminal, backend::CrosstermBackend};

use self::event::InputEvent;
use self::state::SelectorState;
use crate::infra::tmux::PaneRecord;

/// Where the selector draws and where its input comes from.
pub trait Surface {
    fn draw(&mut self, panes: &[PaneRecord], cursor: usize) -> io::Result<()>;

    /// Blocks until the next input or resize event.
    fn next_input(&mut self) -> io::Result<InputEvent>;
}

/// Runs the interactive selector on the real terminal.
///
/// Returns `None` when the user cancels. The terminal is restored on every
/// exit path, including errors.
pub fn run(panes: &[PaneRecord], initial_cursor: usize) -> io::Result<Option<PaneRecord>> {
    let mut session = TerminalSession::enter()?;
    run_loop(&mut session, panes, initial_cursor)
}

/// Main loop: redraw, wait for input, transition, until a terminal state.
fn run_loop<S: Surface>(
    surface: &mut S,
    panes: &[PaneRecord],
    initial_cursor: usize,
) -> io::Result<Option<PaneRecord>> {
    let mut state = SelectorState::Browsing {
        cursor: initial_cursor,
    };

    loop {
        let cursor = match state {
            SelectorState::Browsing { cursor } => cursor,
            SelectorState::Selected(pane) => return Ok(Some(pane)),
            SelectorState::Cancelled => return Ok(None),
        };

        surface.draw(panes, cursor)?;
        let input = surface.next_input()?;
        state = SelectorState::Browsing { cursor }.transition(input, panes);
    }
}

/// Raw mode plus alternate screen on stderr; undone on drop.
///
/// stderr keeps stdout free for the selection result.
struct TerminalGuard;

impl TerminalGuard {
    fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        // Constructed before the next fallible step so a failure still restores raw mode.
        let guard = Self;
        execute!(io::stderr(), terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stderr(), cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// The real terminal surface. Field order makes the terminal drop before the guard.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stderr>>,
    _guard: TerminalGuard,
}

impl TerminalSession {
    fn enter() -> io::Result<Self> {
        let guard = TerminalGuard::acquire()?;
        let terminal = Terminal::new(CrosstermBackend::new(io::stderr()))?;
        Ok(Self {
            terminal,
            _guard: guard,
        })
    }
}

impl Surface for TerminalSession {
    fn draw(&mut self, panes: &[PaneRecord], cursor: usize) -> io::Result<()> {
        self.terminal
            .draw(|frame| ui::render(frame, panes, cursor))?;
        Ok(())
    }

    fn next_input(&mut self) -> io::Result<InputEvent> {
        let input = event::classify(&crossterm::event::read()?);
        tracing::trace!(?input, "input event");
        Ok(input)
    }
}
