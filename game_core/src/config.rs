use crate::params::Params;
use glam::Vec2;

/// Discrete ball speed multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Speed {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl Speed {
    pub fn all() -> &'static [Speed] {
        &[Speed::Slow, Speed::Normal, Speed::Fast]
    }

    pub fn multiplier(&self) -> f32 {
        match self {
            Speed::Slow => 1.0,
            Speed::Normal => 1.5,
            Speed::Fast => 2.0,
        }
    }

    /// Map a host-supplied multiplier back onto the closed set
    pub fn from_multiplier(value: f64) -> Option<Speed> {
        Speed::all()
            .iter()
            .copied()
            .find(|s| (s.multiplier() as f64 - value).abs() < 1e-6)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Speed::Slow => "Slow",
            Speed::Normal => "Normal",
            Speed::Fast => "Fast",
        }
    }
}

/// Board configuration, fixed for a session except for `speed`
#[derive(Debug, Clone)]
pub struct Config {
    pub width: f32,
    pub height: f32,
    pub panel_height: f32,
    pub panel_width: f32,
    pub ball_radius: f32,
    pub ball_step: f32,
    pub panel_step: f32,
    pub speed: Speed,
    pub tick_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: Params::BOARD_WIDTH,
            height: Params::BOARD_HEIGHT,
            panel_height: Params::PANEL_HEIGHT,
            panel_width: Params::PANEL_WIDTH,
            ball_radius: Params::BALL_RADIUS,
            ball_step: Params::BALL_STEP,
            panel_step: Params::PANEL_STEP,
            speed: Speed::default(),
            tick_ms: Params::TICK_MS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Width of the area the ball travels in (board minus both panel gutters)
    pub fn field_width(&self) -> f32 {
        self.width - Params::PANEL_GUTTER * 2.0
    }

    /// Horizontal distance the ball covers in one tick
    pub fn ball_step_distance(&self) -> f32 {
        self.ball_step * self.speed.multiplier()
    }

    /// Lowest allowed panel top (panels keep fully inside the board)
    pub fn max_panel_top(&self) -> f32 {
        self.height - self.panel_height
    }

    pub fn clamp_panel_top(&self, top: f32) -> f32 {
        top.max(0.0).min(self.max_panel_top())
    }

    pub fn clamp_ball_x(&self, x: f32) -> f32 {
        x.min(self.field_width() - self.ball_radius).max(self.ball_radius)
    }

    pub fn clamp_ball_y(&self, y: f32) -> f32 {
        y.min(self.height - self.ball_radius).max(self.ball_radius)
    }

    pub fn panel_start_top(&self) -> f32 {
        (self.height - self.panel_height) / 2.0
    }

    pub fn ball_start(&self) -> Vec2 {
        Vec2::new(self.field_width() / 2.0, self.height / 2.0)
    }

    /// Reject geometry the simulation cannot hold its bounds in
    pub fn validate(&self) -> Result<(), String> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(format!(
                "Board size must be positive, got {}x{}",
                self.width, self.height
            ));
        }
        if self.ball_radius <= 0.0 {
            return Err(format!("Ball radius must be positive, got {}", self.ball_radius));
        }
        if self.panel_height <= 0.0 || self.panel_height > self.height {
            return Err(format!(
                "Panel height {} does not fit board height {}",
                self.panel_height, self.height
            ));
        }
        if self.field_width() < self.ball_radius * 2.0 || self.height < self.ball_radius * 2.0 {
            return Err(format!(
                "Ball radius {} does not fit a {}x{} field",
                self.ball_radius,
                self.field_width(),
                self.height
            ));
        }
        if self.ball_step <= 0.0 || self.panel_step <= 0.0 {
            return Err("Ball and panel steps must be positive".to_string());
        }
        if self.tick_ms == 0 {
            return Err("Tick period must be at least 1ms".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_field_width() {
        let config = Config::new();
        assert_eq!(config.field_width(), 760.0, "Both gutters are removed");
    }

    #[test]
    fn test_ball_step_scales_with_speed() {
        let mut config = Config::new();
        config.speed = Speed::Slow;
        assert_eq!(config.ball_step_distance(), 5.0);
        config.speed = Speed::Normal;
        assert_eq!(config.ball_step_distance(), 7.5);
        config.speed = Speed::Fast;
        assert_eq!(config.ball_step_distance(), 10.0);
    }

    #[test]
    fn test_config_clamp_panel_top() {
        let config = Config::new();
        assert_eq!(config.clamp_panel_top(-15.0), 0.0);
        assert_eq!(config.clamp_panel_top(1000.0), 300.0);
        assert_eq!(config.clamp_panel_top(120.0), 120.0);
    }

    #[test]
    fn test_config_clamp_ball() {
        let config = Config::new();
        assert_eq!(config.clamp_ball_x(0.0), 8.0);
        assert_eq!(config.clamp_ball_x(900.0), 752.0);
        assert_eq!(config.clamp_ball_y(-3.0), 8.0);
        assert_eq!(config.clamp_ball_y(399.0), 392.0);
    }

    #[test]
    fn test_start_positions_are_centered() {
        let config = Config::new();
        assert_eq!(config.panel_start_top(), 150.0);
        assert_eq!(config.ball_start(), Vec2::new(380.0, 200.0));
    }

    #[test]
    fn test_speed_from_multiplier() {
        assert_eq!(Speed::from_multiplier(1.0), Some(Speed::Slow));
        assert_eq!(Speed::from_multiplier(1.5), Some(Speed::Normal));
        assert_eq!(Speed::from_multiplier(2.0), Some(Speed::Fast));
        assert_eq!(Speed::from_multiplier(3.0), None, "Only the three presets exist");
        assert_eq!(Speed::default(), Speed::Normal);
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(Config::new().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_tall_panel() {
        let config = Config {
            panel_height: 500.0,
            ..Config::new()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_radius() {
        let config = Config {
            ball_radius: -1.0,
            ..Config::new()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("radius"), "Error should name the field: {err}");
    }
}
