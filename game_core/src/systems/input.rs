use crate::{Config, Panel, Side};
use hecs::World;

/// Direction of a single panel step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelStep {
    Up,
    Down,
}

/// One discrete panel move, produced per keydown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelCommand {
    pub side: Side,
    pub step: PanelStep,
}

impl PanelCommand {
    pub fn new(side: Side, step: PanelStep) -> Self {
        Self { side, step }
    }
}

/// Move one panel by `panel_step`, keeping it inside the board
pub fn move_panel(world: &mut World, config: &Config, command: PanelCommand) {
    let delta = match command.step {
        PanelStep::Up => -config.panel_step,
        PanelStep::Down => config.panel_step,
    };

    for (_entity, panel) in world.query_mut::<&mut Panel>() {
        if panel.side == command.side {
            panel.top = config.clamp_panel_top(panel.top + delta);
        }
    }
}
