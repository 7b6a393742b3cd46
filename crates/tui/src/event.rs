//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use dashboard_protocol::Message;

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts a terminal event to an application message.
///
/// Returns `None` for events that are not bound, such as mouse input or
/// key releases.
#[must_use]
pub fn event_to_message(event: &Event) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => key_to_message(*key),
        Event::Resize(width, height) => Some(Message::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

/// Converts a terminal key event to an application message.
///
/// Returns `None` for unbound keys, which are ignored.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `q` | Quit, or close the menu |
/// | `Ctrl+C` | Quit from anywhere |
/// | `F1` | Open the menu |
/// | `Up` or `k` | Previous headline / scroll up |
/// | `Down` or `j` | Next headline / scroll down |
/// | `Ctrl+N` | Next article |
/// | `Ctrl+P` | Previous article |
/// | `Left` or `h` | Focus the headline list |
/// | `Right`, `l` or `Enter` | Open the selected headline |
/// | `r` | Refresh |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Message::Interrupt),
            KeyCode::Char('n') => Some(Message::NextArticle),
            KeyCode::Char('p') => Some(Message::PreviousArticle),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Some(Message::Quit),
        KeyCode::F(1) => Some(Message::OpenMenu),

        KeyCode::Up | KeyCode::Char('k') => Some(Message::NavigateUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Message::NavigateDown),
        KeyCode::Left | KeyCode::Char('h') => Some(Message::FocusList),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Enter => Some(Message::OpenSelected),

        KeyCode::Char('r') => Some(Message::Refresh),

        _ => None,
    }
}
