//! Menu state machine
//!
//! Holds the screen, panel, and cursor-effect state. Environment activation
//! and side effects on input/audio are the app controller's job; this type
//! only tracks what the menu shows.

use super::command::Screen;
use super::deferred::DeferredAction;
use crate::config::CursorConfig;

/// Menu panel and cursor-effect state
#[derive(Debug, Clone)]
pub struct MenuController {
    screen: Screen,
    expanded: bool,
    cursor_enabled: bool,
    cursor_size: f32,
    min_size: f32,
    max_size: f32,
}

impl MenuController {
    /// Start on the main menu with the panel collapsed
    pub fn new(cursor: &CursorConfig) -> Self {
        let min_size = cursor.min_size.min(cursor.max_size);
        let max_size = cursor.max_size.max(cursor.min_size);
        Self {
            screen: Screen::MainMenu,
            expanded: false,
            cursor_enabled: cursor.enabled,
            cursor_size: cursor.size.clamp(min_size, max_size),
            min_size,
            max_size,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn cursor_enabled(&self) -> bool {
        self.cursor_enabled
    }

    /// Cursor glow diameter in pixels
    pub fn cursor_size(&self) -> f32 {
        self.cursor_size
    }

    pub fn enter_environment(&mut self) {
        self.screen = Screen::InEnvironment;
    }

    /// Show the main menu with the panel collapsed
    pub fn show_main_menu(&mut self) {
        self.screen = Screen::MainMenu;
        self.expanded = false;
    }

    /// Flip the panel; returns the new expanded state
    pub fn toggle_expanded(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }

    /// Flip the cursor effect; returns the new enabled state
    pub fn toggle_cursor(&mut self) -> bool {
        self.cursor_enabled = !self.cursor_enabled;
        self.cursor_enabled
    }

    /// Store a clamped cursor size; returns the stored value
    pub fn set_cursor_size(&mut self, size: f32) -> f32 {
        if size.is_finite() {
            self.cursor_size = size.clamp(self.min_size, self.max_size);
        }
        self.cursor_size
    }

    pub fn apply_deferred(&mut self, action: DeferredAction) {
        match action {
            DeferredAction::ExpandMenu => self.expanded = true,
            DeferredAction::CollapseMenuIfExpanded => {
                if self.expanded {
                    self.expanded = false;
                }
            }
        }
    }
}
