//! Main menu state machine
//!
//! Up/down move the cursor only on the frame a key goes down, so a held
//! key never auto-repeats.

use super::state::MenuOption;

/// What the menu asks the simulation to do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Nothing to act on
    Stay,
    /// Confirm on Start Game
    StartGame,
    /// Confirm on Quit Game
    Quit,
}

/// Cursor plus the previous frame's up/down keys
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Menu {
    selected: MenuOption,
    last_up: bool,
    last_down: bool,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> MenuOption {
        self.selected
    }

    /// Process one frame of input
    pub fn update(&mut self, up: bool, down: bool, confirm: bool) -> MenuAction {
        // Confirm ends the frame before the key history is touched
        if confirm {
            return match self.selected {
                MenuOption::StartGame => MenuAction::StartGame,
                MenuOption::QuitGame => MenuAction::Quit,
            };
        }

        if up && !self.last_up {
            self.selected = self.selected.previous();
        } else if down && !self.last_down {
            self.selected = self.selected.next();
        }

        self.last_up = up;
        self.last_down = down;
        MenuAction::Stay
    }
}
