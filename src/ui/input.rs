use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::event::events::Event;

/// Fallback bindings that apply when the active view did not consume the
/// key.
pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent) -> Option<Event> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(Event::Quit),
            (KeyCode::Char('q'), _) => Some(Event::Quit),
            (KeyCode::PageDown, _) => Some(Event::NextPoem),
            (KeyCode::PageUp, _) => Some(Event::PreviousPoem),
            (KeyCode::Char(c @ '1'..='9'), _) => {
                Some(Event::OpenPoem(c as usize - '1' as usize))
            }
            _ => None,
        }
    }
}
