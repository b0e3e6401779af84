//! Input mapping from raw events to semantic actions
//!
//! Maps keyboard input to UI commands and window actions. Pointer movement
//! and presses go through `PointerEventMapper` instead.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::ui::{Screen, UiCommand};

/// Actions triggered by key presses
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    /// A menu command
    Ui(UiCommand),
    /// Grow or shrink the cursor glow by this many pixels
    NudgeCursorSize(f32),
    /// Exit application (Escape on the main menu)
    Exit,
    /// Toggle fullscreen mode (F key)
    ToggleFullscreen,
}

/// Maps raw key events to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Escape depends on the screen: it returns to the menu from an
    /// environment and exits from the main menu.
    pub fn map_keyboard(
        key: KeyCode,
        state: ElementState,
        screen: Screen,
        size_step: f32,
    ) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => match screen {
                Screen::MainMenu => Some(InputAction::Exit),
                Screen::InEnvironment => Some(InputAction::Ui(UiCommand::ReturnToMenu)),
            },
            KeyCode::Digit1 | KeyCode::Numpad1 => Some(InputAction::Ui(UiCommand::SelectEnvironment(0))),
            KeyCode::Digit2 | KeyCode::Numpad2 => Some(InputAction::Ui(UiCommand::SelectEnvironment(1))),
            KeyCode::Digit3 | KeyCode::Numpad3 => Some(InputAction::Ui(UiCommand::SelectEnvironment(2))),
            KeyCode::KeyL => Some(InputAction::Ui(UiCommand::ToggleCursorEffect)),
            KeyCode::Tab => Some(InputAction::Ui(UiCommand::ToggleMenu)),
            KeyCode::Minus | KeyCode::NumpadSubtract => Some(InputAction::NudgeCursorSize(-size_step)),
            KeyCode::Equal | KeyCode::NumpadAdd => Some(InputAction::NudgeCursorSize(size_step)),
            KeyCode::KeyF => Some(InputAction::ToggleFullscreen),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(key: KeyCode, screen: Screen) -> Option<InputAction> {
        InputMapper::map_keyboard(key, ElementState::Pressed, screen, 10.0)
    }

    #[test]
    fn test_escape_in_environment_returns_to_menu() {
        assert_eq!(
            press(KeyCode::Escape, Screen::InEnvironment),
            Some(InputAction::Ui(UiCommand::ReturnToMenu))
        );
    }

    #[test]
    fn test_escape_on_main_menu_exits() {
        assert_eq!(press(KeyCode::Escape, Screen::MainMenu), Some(InputAction::Exit));
    }

    #[test]
    fn test_digits_select_environments() {
        for (key, index) in [(KeyCode::Digit1, 0), (KeyCode::Digit2, 1), (KeyCode::Digit3, 2)] {
            assert_eq!(
                press(key, Screen::MainMenu),
                Some(InputAction::Ui(UiCommand::SelectEnvironment(index)))
            );
        }
        assert_eq!(press(KeyCode::Digit4, Screen::MainMenu), None);
    }

    #[test]
    fn test_key_release_ignored() {
        let action = InputMapper::map_keyboard(
            KeyCode::Escape,
            ElementState::Released,
            Screen::InEnvironment,
            10.0,
        );
        assert_eq!(action, None);
    }

    #[test]
    fn test_cursor_size_keys() {
        assert_eq!(press(KeyCode::Minus, Screen::InEnvironment), Some(InputAction::NudgeCursorSize(-10.0)));
        assert_eq!(press(KeyCode::Equal, Screen::InEnvironment), Some(InputAction::NudgeCursorSize(10.0)));
    }

    #[test]
    fn test_special_keys() {
        assert_eq!(
            press(KeyCode::KeyL, Screen::InEnvironment),
            Some(InputAction::Ui(UiCommand::ToggleCursorEffect))
        );
        assert_eq!(press(KeyCode::Tab, Screen::MainMenu), Some(InputAction::Ui(UiCommand::ToggleMenu)));
        assert_eq!(press(KeyCode::KeyF, Screen::MainMenu), Some(InputAction::ToggleFullscreen));
        assert_eq!(press(KeyCode::KeyW, Screen::InEnvironment), None);
    }
}
