//! Key mapping from terminal events to supply commands.

use crate::types::{Command, MenuTier};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a command for the given tier.
pub fn command_for_key(tier: MenuTier, key: KeyEvent) -> Option<Command> {
    match key.code {
        // Menu digits
        KeyCode::Char(c) if c.is_ascii_digit() => {
            Command::from_menu_digit(tier, c as u8 - b'0')
        }

        // Shortcuts
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Enter => Some(Command::Play),
        KeyCode::Char('i') | KeyCode::Char('I') => Some(Command::Insert),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Reserve),
        KeyCode::Char('u') | KeyCode::Char('U') => Some(Command::UseReserved),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(Command::SwapFront),
        KeyCode::Char('b') | KeyCode::Char('B') => Some(Command::SwapBlock),

        _ => None,
    }
}

/// Check if key should end the session.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Char('0') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(c: char) -> KeyEvent {
        KeyEvent::from(KeyCode::Char(c))
    }

    #[test]
    fn test_master_digits() {
        let tier = MenuTier::Master;
        assert_eq!(command_for_key(tier, key('1')), Some(Command::Play));
        assert_eq!(command_for_key(tier, key('2')), Some(Command::Reserve));
        assert_eq!(command_for_key(tier, key('3')), Some(Command::UseReserved));
        assert_eq!(command_for_key(tier, key('4')), Some(Command::SwapFront));
        assert_eq!(command_for_key(tier, key('5')), Some(Command::SwapBlock));
        assert_eq!(command_for_key(tier, key('0')), Some(Command::Quit));
        assert_eq!(command_for_key(tier, key('6')), None);
    }

    #[test]
    fn test_digits_follow_tier_numbering() {
        assert_eq!(command_for_key(MenuTier::Novice, key('2')), Some(Command::Insert));
        assert_eq!(command_for_key(MenuTier::Adventurer, key('2')), Some(Command::Reserve));
        assert_eq!(command_for_key(MenuTier::Adventurer, key('5')), None);
    }

    #[test]
    fn test_shortcut_keys() {
        let tier = MenuTier::Master;
        assert_eq!(command_for_key(tier, key('P')), Some(Command::Play));
        assert_eq!(
            command_for_key(tier, KeyEvent::from(KeyCode::Enter)),
            Some(Command::Play)
        );
        assert_eq!(command_for_key(tier, key('r')), Some(Command::Reserve));
        assert_eq!(command_for_key(tier, key('u')), Some(Command::UseReserved));
        assert_eq!(command_for_key(tier, key('s')), Some(Command::SwapFront));
        assert_eq!(command_for_key(tier, key('B')), Some(Command::SwapBlock));
        assert_eq!(command_for_key(tier, key('i')), Some(Command::Insert));
        assert_eq!(command_for_key(tier, key('x')), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(key('q')));
        assert!(should_quit(key('0')));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(key('c')));
        assert!(!should_quit(key('1')));
    }
}
