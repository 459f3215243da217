pub mod board;
pub mod components;
pub mod config;
pub mod geometry;
pub mod params;
pub mod resources;
pub mod scene;
pub mod systems;

pub use board::*;
pub use components::*;
pub use config::*;
pub use geometry::*;
pub use params::*;
pub use resources::*;
pub use scene::*;

use hecs::World;
use systems::*;

pub use systems::{PanelCommand, PanelStep};

/// Run one simulation tick.
///
/// The position update always happens before the collision checks for that
/// same position. Panel and wall checks are independent and may both adjust
/// the drift in the same pass.
pub fn step(world: &mut World, config: &Config, events: &mut Events) {
    // Clear events at start of tick
    events.clear();

    // 1. Move ball
    move_ball(world, config);

    // 2. Resolve panel proximity (hit or miss, heading flips)
    check_panels(world, config, events);

    // 3. Top/bottom wall bounce
    bounce_walls(world, config, events);
}

/// Helper to create a panel entity
pub fn create_panel(world: &mut World, side: Side, top: f32) -> hecs::Entity {
    world.spawn((Panel::new(side, top),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, motion: Motion) -> hecs::Entity {
    world.spawn((Ball::new(pos), motion))
}
