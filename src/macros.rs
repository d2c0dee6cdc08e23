//! Key press patterns for `match` arms; they also build events in tests.
//! Only `Press` events match, so repeats and releases fall through.

macro_rules! key_press {
    ($modifiers:ident, $($code:tt)+) => {
        ::crossterm::event::KeyEvent {
            code: $($code)+,
            modifiers: ::crossterm::event::KeyModifiers::$modifiers,
            kind: ::crossterm::event::KeyEventKind::Press,
            state: ::crossterm::event::KeyEventState::NONE,
        }
    };
}

/// Unmodified key: `key!('d')` or `key!(Enter)`
macro_rules! key {
    ($key:literal) => {
        key_press!(NONE, ::crossterm::event::KeyCode::Char($key))
    };
    ($key:tt) => {
        key_press!(NONE, ::crossterm::event::KeyCode::$key)
    };
}

/// Control chord on a character, e.g. `ctrl!('c')`
macro_rules! ctrl {
    ($key:literal) => {
        key_press!(CONTROL, ::crossterm::event::KeyCode::Char($key))
    };
}

/// Shifted named key, e.g. `shift!(BackTab)`
macro_rules! shift {
    ($key:tt) => {
        key_press!(SHIFT, ::crossterm::event::KeyCode::$key)
    };
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

    fn quits(event: KeyEvent) -> bool {
        matches!(event, ctrl!('c'))
    }

    #[test]
    fn chords_need_their_modifier() {
        assert!(quits(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!quits(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)));
        assert!(!quits(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL | KeyModifiers::SHIFT)));
        assert!(matches!(
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            shift!(BackTab)
        ));
    }

    #[test]
    fn releases_do_not_match() {
        let mut release = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert!(!matches!(release, key!('d')));
        assert!(matches!(key!(Enter), key!(Enter)));
    }
}
