use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Input classes the selector reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    MoveBackward,
    MoveForward,
    Accept,
    Cancel,
    Resize,
    Ignored,
}

/// Maps a raw terminal event to its input class.
pub fn classify(event: &Event) -> InputEvent {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => classify_key(key),
        Event::Resize(_, _) => InputEvent::Resize,
        _ => InputEvent::Ignored,
    }
}

fn classify_key(key: &KeyEvent) -> InputEvent {
    // Raw mode delivers Ctrl+C as a key press instead of SIGINT.
    if key.modifiers == KeyModifiers::CONTROL {
        return match key.code {
            KeyCode::Char('c') => InputEvent::Cancel,
            KeyCode::Char('k' | 'h') => InputEvent::MoveBackward,
            KeyCode::Char('j' | 'l') => InputEvent::MoveForward,
            _ => InputEvent::Ignored,
        };
    }

    // Letters may arrive with or without the SHIFT flag; other chords are not ours.
    if !KeyModifiers::SHIFT.contains(key.modifiers) {
        return InputEvent::Ignored;
    }

    match key.code {
        KeyCode::Up | KeyCode::Left => InputEvent::MoveBackward,
        KeyCode::Down | KeyCode::Right => InputEvent::MoveForward,
        KeyCode::Enter => InputEvent::Accept,
        KeyCode::Esc => InputEvent::Cancel,
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'w' | 'k' | 'a' | 'h' => InputEvent::MoveBackward,
            's' | 'j' | 'd' | 'l' => InputEvent::MoveForward,
            'q' => InputEvent::Cancel,
            _ => InputEvent::Ignored,
        },
        _ => InputEvent::Ignored,
    }
}
