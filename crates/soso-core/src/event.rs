use crossterm::event::{Event, KeyEvent, MouseEvent};

/// Terminal events delivered by the [`terminal_events`](crate::terminal_events)
/// subscription.
///
/// [`Program`](crate::Program) runs the terminal with mouse capture, focus
/// reporting and bracketed paste off, so in practice only `Key` and `Resize`
/// arrive. The other variants mirror crossterm's event set for hosts that
/// enable those modes themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// A keyboard event.
    Key(KeyEvent),
    /// A mouse event. Requires mouse capture.
    Mouse(MouseEvent),
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
    /// Terminal window gained focus. Requires focus reporting.
    FocusGained,
    /// Terminal window lost focus.
    FocusLost,
    /// Bracketed paste content. Requires bracketed paste.
    Paste(String),
}

impl From<Event> for TerminalEvent {
    fn from(event: Event) -> Self {
        match event {
            Event::Key(k) => TerminalEvent::Key(k),
            Event::Mouse(m) => TerminalEvent::Mouse(m),
            Event::Resize(w, h) => TerminalEvent::Resize(w, h),
            Event::FocusGained => TerminalEvent::FocusGained,
            Event::FocusLost => TerminalEvent::FocusLost,
            Event::Paste(s) => TerminalEvent::Paste(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn converts_key_and_resize() {
        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(TerminalEvent::from(Event::Key(key)), TerminalEvent::Key(key));
        assert_eq!(
            TerminalEvent::from(Event::Resize(80, 24)),
            TerminalEvent::Resize(80, 24)
        );
    }

    #[test]
    fn mode_gated_events_still_convert() {
        assert_eq!(
            TerminalEvent::from(Event::Paste("prefs".into())),
            TerminalEvent::Paste("prefs".into())
        );
        assert_eq!(TerminalEvent::from(Event::FocusLost), TerminalEvent::FocusLost);
    }
}
