use crate::components::Side;

/// Points per player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,  // Left player score
    pub right: u32, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left += 1;
    }

    pub fn increment_right(&mut self) {
        self.right += 1;
    }

    /// Credit the player opposite the panel that let the ball through
    pub fn award(&mut self, conceded: Side) {
        match conceded {
            Side::Right => self.increment_left(),
            Side::Left => self.increment_right(),
        }
    }

    pub fn as_pair(&self) -> [u32; 2] {
        [self.left, self.right]
    }
}

/// Events that occurred during the last tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub miss: Option<Side>,      // Panel that let the ball through
    pub panel_hit: Option<Side>, // Panel that deflected the ball
    pub wall_bounce: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.miss = None;
        self.panel_hit = None;
        self.wall_bounce = false;
    }
}
