//! Keyboard input mapping

use game_core::{PanelCommand, PanelStep, Side};

const W_KEY_CODE: &str = "KeyW";
const S_KEY_CODE: &str = "KeyS";
const UP_KEY_CODE: &str = "ArrowUp";
const DOWN_KEY_CODE: &str = "ArrowDown";

/// Map a physical key code to a panel step; other keys are ignored
pub fn panel_command(code: &str) -> Option<PanelCommand> {
    match code {
        W_KEY_CODE => Some(PanelCommand::new(Side::Left, PanelStep::Up)),
        S_KEY_CODE => Some(PanelCommand::new(Side::Left, PanelStep::Down)),
        UP_KEY_CODE => Some(PanelCommand::new(Side::Right, PanelStep::Up)),
        DOWN_KEY_CODE => Some(PanelCommand::new(Side::Right, PanelStep::Down)),
        _ => None,
    }
}
