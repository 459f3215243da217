use crate::{Ball, Config, Heading, Motion};
use glam::Vec2;
use hecs::World;

/// Advance the ball one tick: drift vertically, step horizontally, stay in the field
pub fn move_ball(world: &mut World, config: &Config) {
    let step = config.ball_step_distance();
    let right_limit = config.field_width() - config.ball_radius;

    for (_entity, (ball, motion)) in world.query_mut::<(&mut Ball, &Motion)>() {
        let y = config.clamp_ball_y(ball.pos.y + motion.y_shift);
        let x = match motion.heading {
            Heading::Right => (ball.pos.x + step).min(right_limit),
            Heading::Left => (ball.pos.x - step).max(config.ball_radius),
        };
        ball.pos = Vec2::new(x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, Speed};

    fn ball_after_move(world: &mut World, config: &Config) -> Ball {
        move_ball(world, config);
        world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, b)| *b)
            .unwrap()
    }

    #[test]
    fn test_ball_steps_right_by_speed_scaled_distance() {
        let mut world = World::new();
        let config = Config {
            speed: Speed::Fast,
            ..Config::new()
        };
        create_ball(&mut world, Vec2::new(100.0, 200.0), Motion::new());

        let ball = ball_after_move(&mut world, &config);

        assert_eq!(ball.pos, Vec2::new(110.0, 200.0));
    }

    #[test]
    fn test_ball_steps_left_and_drifts() {
        let mut world = World::new();
        let config = Config {
            speed: Speed::Slow,
            ..Config::new()
        };
        let motion = Motion {
            heading: Heading::Left,
            y_shift: -3.0,
        };
        create_ball(&mut world, Vec2::new(100.0, 200.0), motion);

        let ball = ball_after_move(&mut world, &config);

        assert_eq!(ball.pos, Vec2::new(95.0, 197.0));
    }

    #[test]
    fn test_ball_stops_at_right_limit() {
        let mut world = World::new();
        let config = Config::new();
        create_ball(&mut world, Vec2::new(750.0, 200.0), Motion::new());

        let ball = ball_after_move(&mut world, &config);

        assert_eq!(ball.pos.x, 752.0, "Clamped to field_width - radius");
    }

    #[test]
    fn test_ball_stops_at_left_limit() {
        let mut world = World::new();
        let config = Config::new();
        let motion = Motion {
            heading: Heading::Left,
            y_shift: 0.0,
        };
        create_ball(&mut world, Vec2::new(10.0, 200.0), motion);

        let ball = ball_after_move(&mut world, &config);

        assert_eq!(ball.pos.x, 8.0, "Clamped to radius");
    }

    #[test]
    fn test_ball_drift_clamped_to_walls() {
        let mut world = World::new();
        let config = Config::new();
        let motion = Motion {
            heading: Heading::Right,
            y_shift: 5.0,
        };
        create_ball(&mut world, Vec2::new(100.0, 390.0), motion);

        let ball = ball_after_move(&mut world, &config);

        assert_eq!(ball.pos.y, 392.0, "Clamped to height - radius");
    }
}
