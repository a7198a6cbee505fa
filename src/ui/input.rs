//! Keyboard input handling with vim-style navigation support.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    Home,
    End,

    // Selection
    Confirm,
    Quit,
}

/// Input handler for processing keyboard events
pub struct InputHandler {
    vim_navigation: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(true)
    }
}

impl InputHandler {
    /// Create a new input handler
    pub fn new(vim_navigation: bool) -> Self {
        Self { vim_navigation }
    }

    /// Handle a key event and return the corresponding action
    pub fn handle_key(&self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        match key.code {
            // Navigation - arrow keys always work
            KeyCode::Up => Some(Action::MoveUp),
            KeyCode::Down => Some(Action::MoveDown),
            KeyCode::Home => Some(Action::Home),
            KeyCode::End => Some(Action::End),

            // Vim-style navigation
            KeyCode::Char('j') if self.vim_navigation => Some(Action::MoveDown),
            KeyCode::Char('k') if self.vim_navigation => Some(Action::MoveUp),
            KeyCode::Char('g') if self.vim_navigation => Some(Action::Home),
            KeyCode::Char('G') if self.vim_navigation => Some(Action::End),

            KeyCode::Enter => Some(Action::Confirm),

            KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_vim_navigation() {
        let handler = InputHandler::new(true);
        assert_eq!(handler.handle_key(key(KeyCode::Char('j'))), Some(Action::MoveDown));
        assert_eq!(handler.handle_key(key(KeyCode::Char('k'))), Some(Action::MoveUp));
    }

    #[test]
    fn test_arrow_keys() {
        let handler = InputHandler::new(false); // vim disabled
        assert_eq!(handler.handle_key(key(KeyCode::Up)), Some(Action::MoveUp));
        assert_eq!(handler.handle_key(key(KeyCode::Down)), Some(Action::MoveDown));
        assert_eq!(handler.handle_key(key(KeyCode::Char('j'))), None);
    }

    #[test]
    fn test_confirm_and_quit_keys() {
        let handler = InputHandler::default();
        assert_eq!(handler.handle_key(key(KeyCode::Enter)), Some(Action::Confirm));
        assert_eq!(handler.handle_key(key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(handler.handle_key(key(KeyCode::Esc)), Some(Action::Quit));

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key(ctrl_c), Some(Action::Quit));
    }
}
