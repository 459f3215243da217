/// Tuning defaults for the board
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Board
    pub const BOARD_WIDTH: f32 = 800.0;
    pub const BOARD_HEIGHT: f32 = 400.0;
    pub const PANEL_GUTTER: f32 = 20.0; // Panel column on each side of the ball field

    // Panel
    pub const PANEL_HEIGHT: f32 = 100.0;
    pub const PANEL_WIDTH: f32 = 10.0;
    pub const PANEL_STEP: f32 = 10.0; // Distance per keydown

    // Ball
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_STEP: f32 = 5.0; // Base distance per tick, scaled by speed
    pub const MAX_Y_SHIFT: f32 = 5.0;

    // Timing
    pub const TICK_MS: u32 = 50;
}
