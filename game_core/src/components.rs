use glam::Vec2;

/// Which panel a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Panel component - a vertical bar, only its top offset moves
#[derive(Debug, Clone, Copy)]
pub struct Panel {
    pub side: Side,
    pub top: f32, // Clamped to [0, height - panel_height]
}

impl Panel {
    pub fn new(side: Side, top: f32) -> Self {
        Self { side, top }
    }

    pub fn bottom(&self, panel_height: f32) -> f32 {
        self.top + panel_height
    }
}

/// Ball component - center position inside the ball field
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2) -> Self {
        Self { pos }
    }
}

/// Horizontal direction of travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Heading {
    #[default]
    Right,
    Left,
}

impl Heading {
    pub fn flipped(self) -> Heading {
        match self {
            Heading::Right => Heading::Left,
            Heading::Left => Heading::Right,
        }
    }

    /// The panel the ball is travelling towards
    pub fn target(self) -> Side {
        match self {
            Heading::Right => Side::Right,
            Heading::Left => Side::Left,
        }
    }
}

/// Motion component carried by the ball entity
#[derive(Debug, Clone, Copy, Default)]
pub struct Motion {
    pub heading: Heading,
    pub y_shift: f32, // Vertical drift per tick, within [-MAX_Y_SHIFT, MAX_Y_SHIFT]
}

impl Motion {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_flip_and_target() {
        assert_eq!(Heading::default(), Heading::Right);
        assert_eq!(Heading::Right.flipped(), Heading::Left);
        assert_eq!(Heading::Left.flipped(), Heading::Right);
        assert_eq!(Heading::Right.target(), Side::Right);
        assert_eq!(Heading::Left.target(), Side::Left);
    }

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Right.opposite(), Side::Left);
    }
}
