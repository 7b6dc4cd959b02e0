//! Key mapping for the menu loop.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::SessionAction;

/// What a keypress asks the menu loop to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Action(SessionAction),
    Quit,
}

/// Map a key to a menu choice: digits match the on-screen menu, letters are
/// mnemonics. Unmapped keys return `None` and the loop just redraws.
pub fn map_key(code: KeyCode) -> Option<MenuChoice> {
    match code {
        KeyCode::Char('1') | KeyCode::Char('p') => Some(MenuChoice::Action(SessionAction::Play)),
        KeyCode::Char('2') | KeyCode::Char('r') => Some(MenuChoice::Action(SessionAction::Reserve)),
        KeyCode::Char('3') | KeyCode::Char('u') => {
            Some(MenuChoice::Action(SessionAction::UseReserved))
        }
        KeyCode::Char('4') | KeyCode::Char('s') => Some(MenuChoice::Action(SessionAction::SwapTop)),
        KeyCode::Char('5') | KeyCode::Char('t') => {
            Some(MenuChoice::Action(SessionAction::SwapTriple))
        }
        KeyCode::Char('0') | KeyCode::Char('q') | KeyCode::Esc => Some(MenuChoice::Quit),
        _ => None,
    }
}

/// Ctrl+C always quits, regardless of the menu mapping.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c')) && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_map_to_menu_order() {
        assert_eq!(
            map_key(KeyCode::Char('1')),
            Some(MenuChoice::Action(SessionAction::Play))
        );
        assert_eq!(
            map_key(KeyCode::Char('5')),
            Some(MenuChoice::Action(SessionAction::SwapTriple))
        );
        assert_eq!(map_key(KeyCode::Char('0')), Some(MenuChoice::Quit));
        assert_eq!(map_key(KeyCode::Char('x')), None);
    }

    #[test]
    fn ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(should_quit(key));
        let plain = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert!(!should_quit(plain));
    }
}
