// Modal state and input handling
//
// A modal absorbs all key input while open. There are four:
// - NavMenu: the hamburger menu, one entry per section
// - CallMenu: the floating call button's phone lines
// - Logs: captured tracing output
// - Help: the key map
//
// State lives here; rendering lives in views/modal.rs.

use crate::catalog;
use crossterm::event::KeyCode;

/// Which modal is open, plus its cursor where it has one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    NavMenu { selected: usize },
    CallMenu { selected: usize },
    Logs,
    Help,
}

/// What the app should do after a modal consumed a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    None,
    Close,
    /// Jump to the section at this index (nav menu pick)
    JumpTo(usize),
    /// Place a call on the selected line (call menu pick)
    Call(usize),
}

impl Modal {
    pub fn nav_menu() -> Self {
        Modal::NavMenu { selected: 0 }
    }

    pub fn call_menu() -> Self {
        Modal::CallMenu { selected: 0 }
    }

    /// Handle a key press while this modal is open.
    /// `section_count` bounds the nav menu cursor.
    pub fn handle_input(&mut self, key: KeyCode, section_count: usize) -> ModalAction {
        match self {
            Modal::NavMenu { selected } => {
                Self::menu_input(key, selected, section_count).map_pick(ModalAction::JumpTo)
            }
            Modal::CallMenu { selected } => {
                Self::menu_input(key, selected, catalog::call_lines().len())
                    .map_pick(ModalAction::Call)
            }
            Modal::Logs | Modal::Help => match key {
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => ModalAction::Close,
                _ => ModalAction::None,
            },
        }
    }

    fn menu_input(key: KeyCode, selected: &mut usize, len: usize) -> MenuOutcome {
        match key {
            KeyCode::Esc | KeyCode::Char('q') => MenuOutcome::Close,
            KeyCode::Up | KeyCode::Char('k') => {
                *selected = selected.saturating_sub(1);
                MenuOutcome::Stay
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if len > 0 && *selected + 1 < len {
                    *selected += 1;
                }
                MenuOutcome::Stay
            }
            KeyCode::Enter => {
                if len == 0 {
                    MenuOutcome::Close
                } else {
                    MenuOutcome::Pick(*selected)
                }
            }
            _ => MenuOutcome::Stay,
        }
    }
}

enum MenuOutcome {
    Stay,
    Close,
    Pick(usize),
}

impl MenuOutcome {
    fn map_pick(self, f: impl FnOnce(usize) -> ModalAction) -> ModalAction {
        match self {
            MenuOutcome::Stay => ModalAction::None,
            MenuOutcome::Close => ModalAction::Close,
            MenuOutcome::Pick(i) => f(i),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_menu_cursor_stays_in_bounds() {
        let mut modal = Modal::nav_menu();
        modal.handle_input(KeyCode::Up, 5);
        assert_eq!(modal, Modal::NavMenu { selected: 0 });

        for _ in 0..10 {
            modal.handle_input(KeyCode::Down, 5);
        }
        assert_eq!(modal, Modal::NavMenu { selected: 4 });
    }

    #[test]
    fn enter_picks_the_selected_section() {
        let mut modal = Modal::nav_menu();
        modal.handle_input(KeyCode::Down, 5);
        modal.handle_input(KeyCode::Down, 5);
        assert_eq!(modal.handle_input(KeyCode::Enter, 5), ModalAction::JumpTo(2));
    }

    #[test]
    fn enter_on_empty_menu_just_closes() {
        let mut modal = Modal::nav_menu();
        assert_eq!(modal.handle_input(KeyCode::Enter, 0), ModalAction::Close);
    }

    #[test]
    fn escape_closes_every_modal() {
        for mut modal in [Modal::nav_menu(), Modal::call_menu(), Modal::Logs, Modal::Help] {
            assert_eq!(modal.handle_input(KeyCode::Esc, 5), ModalAction::Close);
        }
    }

    #[test]
    fn call_menu_picks_a_line() {
        let mut modal = Modal::call_menu();
        modal.handle_input(KeyCode::Down, 5);
        assert_eq!(modal.handle_input(KeyCode::Enter, 5), ModalAction::Call(1));
    }
}
