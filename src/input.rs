use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A single decoded key press delivered to the mode machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Backspace,
    Delete,
    Enter,
    Tab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    /// Control chord, always carrying the lowercase letter (`Ctrl('c')`).
    Ctrl(char),
}

impl Key {
    /// Ctrl-C, treated like Escape by every mode except Normal.
    pub const INTERRUPT: Key = Key::Ctrl('c');

    pub fn is_interrupt(self) -> bool {
        self == Self::INTERRUPT
    }

    /// Translate a crossterm key event. Key releases and keys the core has
    /// no meaning for yield `None`.
    pub fn from_crossterm(event: KeyEvent) -> Option<Key> {
        if event.kind == KeyEventKind::Release {
            return None;
        }

        let key = match event.code {
            KeyCode::Char(c) if event.modifiers.contains(KeyModifiers::CONTROL) => {
                Key::Ctrl(c.to_ascii_lowercase())
            }
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Enter => Key::Enter,
            KeyCode::Tab => Key::Tab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            _ => return None,
        };

        Some(key)
    }
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        Key::Char(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_plain_keys() {
        assert_eq!(Key::from_crossterm(key_event(KeyCode::Char('x'))), Some(Key::Char('x')));
        assert_eq!(Key::from_crossterm(key_event(KeyCode::Esc)), Some(Key::Escape));
        assert_eq!(Key::from_crossterm(key_event(KeyCode::Enter)), Some(Key::Enter));
        assert_eq!(Key::from_crossterm(key_event(KeyCode::F(5))), None);
    }

    #[test]
    fn test_unused_navigation_keys_dropped() {
        assert_eq!(Key::from_crossterm(key_event(KeyCode::PageUp)), None);
        assert_eq!(Key::from_crossterm(key_event(KeyCode::PageDown)), None);
        assert_eq!(Key::from_crossterm(key_event(KeyCode::Home)), Some(Key::Home));
    }

    #[test]
    fn test_shifted_char_is_plain() {
        let event = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(Key::from_crossterm(event), Some(Key::Char('A')));
    }

    #[test]
    fn test_control_chords() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let key = Key::from_crossterm(event).unwrap();
        assert!(key.is_interrupt());

        let event = KeyEvent::new(KeyCode::Char('S'), KeyModifiers::CONTROL | KeyModifiers::SHIFT);
        assert_eq!(Key::from_crossterm(event), Some(Key::Ctrl('s')));
    }
}
