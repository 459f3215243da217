//! Render-facing view of the board: panel rectangles and the ball circle in
//! board coordinates (origin top-left, y down).

use crate::{Aabb, Config, Params, Side};
use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelView {
    pub side: Side,
    pub top: f32,
    pub height: f32,
    pub bounds: Aabb,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallView {
    pub center: Vec2,
    pub radius: f32,
}

impl BallView {
    /// Box the circle is drawn in: `[cx - r, cy - r]` with side `2r`
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_size(self.center, Vec2::splat(self.radius * 2.0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub left: PanelView,
    pub right: PanelView,
    pub ball: BallView,
}

impl Scene {
    /// `ball_pos` is in ball-field coordinates; the left gutter is added here
    pub fn new(config: &Config, left_top: f32, right_top: f32, ball_pos: Vec2) -> Self {
        Self {
            width: config.width,
            height: config.height,
            left: panel_view(config, Side::Left, left_top),
            right: panel_view(config, Side::Right, right_top),
            ball: BallView {
                center: Vec2::new(ball_pos.x + Params::PANEL_GUTTER, ball_pos.y),
                radius: config.ball_radius,
            },
        }
    }
}

fn panel_view(config: &Config, side: Side, top: f32) -> PanelView {
    let center_x = match side {
        Side::Left => Params::PANEL_GUTTER / 2.0,
        Side::Right => config.width - Params::PANEL_GUTTER / 2.0,
    };
    let center = Vec2::new(center_x, top + config.panel_height / 2.0);

    PanelView {
        side,
        top,
        height: config.panel_height,
        bounds: Aabb::from_center_size(center, Vec2::new(config.panel_width, config.panel_height)),
    }
}
