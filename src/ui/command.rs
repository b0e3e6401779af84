//! UI commands and screens

/// Which top-level screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Environment selection menu
    #[default]
    MainMenu,
    /// Exploring the active environment
    InEnvironment,
}

/// Commands the menu surface can issue
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiCommand {
    /// Enter or switch to the environment at this index
    SelectEnvironment(usize),
    /// Go back to the main menu
    ReturnToMenu,
    /// Flip the cursor glow and trail on or off
    ToggleCursorEffect,
    /// Set the cursor glow diameter in pixels
    SetCursorEffectSize(f32),
    /// Expand or collapse the menu panel
    ToggleMenu,
}
