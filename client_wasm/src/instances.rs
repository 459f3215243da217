//! Per-object instance data for the board's three shapes

use game_core::{Aabb, Scene};

pub const LEFT_PANEL_TINT: [f32; 4] = [0.9, 0.2, 0.2, 1.0];
pub const RIGHT_PANEL_TINT: [f32; 4] = [0.2, 0.4, 0.9, 1.0];
pub const BALL_TINT: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Instance data for rendering (matches shader InstanceInput).
/// Must use `repr(C)` and `bytemuck` to safely cast to raw bytes for the GPU buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // center x, center y, width, height
    pub tint: [f32; 4],      // rgba
}

impl InstanceData {
    pub fn from_bounds(bounds: &Aabb, tint: [f32; 4]) -> Self {
        let center = bounds.center();
        let size = bounds.size();
        Self {
            transform: [center.x, center.y, size.x, size.y],
            tint,
        }
    }
}

/// Left panel, right panel, ball
pub type SceneInstances = (InstanceData, InstanceData, InstanceData);

pub fn scene_instances(scene: &Scene) -> SceneInstances {
    (
        InstanceData::from_bounds(&scene.left.bounds, LEFT_PANEL_TINT),
        InstanceData::from_bounds(&scene.right.bounds, RIGHT_PANEL_TINT),
        InstanceData::from_bounds(&scene.ball.bounds(), BALL_TINT),
    )
}
