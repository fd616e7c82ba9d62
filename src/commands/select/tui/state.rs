use super::event::InputEvent;
use crate::infra::tmux::PaneRecord;

/// Selector state machine. Only `Browsing` reacts to input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorState {
    Browsing { cursor: usize },
    Selected(PaneRecord),
    Cancelled,
}

impl SelectorState {
    /// Applies one input event. `panes` is the snapshot the cursor indexes into.
    pub fn transition(self, input: InputEvent, panes: &[PaneRecord]) -> Self {
        let Self::Browsing { cursor } = self else {
            return self;
        };
        let len = panes.len().max(1);

        match input {
            InputEvent::MoveBackward => Self::Browsing {
                cursor: (cursor + len - 1) % len,
            },
            InputEvent::MoveForward => Self::Browsing {
                cursor: (cursor + 1) % len,
            },
            InputEvent::Accept => match panes.get(cursor) {
                Some(pane) => Self::Selected(pane.clone()),
                None => self,
            },
            InputEvent::Cancel => Self::Cancelled,
            InputEvent::Resize | InputEvent::Ignored => self,
        }
    }
}
