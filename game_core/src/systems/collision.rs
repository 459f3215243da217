use crate::{Aabb, Ball, Config, Events, Heading, Motion, Panel, Params};
use glam::Vec2;
use hecs::World;

/// New vertical drift after the ball strikes a panel.
///
/// The offset from the panel center, as a fraction of half the panel height,
/// is scaled to `MAX_Y_SHIFT` and added to the current drift, so repeated
/// hits near one edge steepen the angle up to the clamp.
pub fn deflect(ball_y: f32, panel_top: f32, panel_height: f32, y_shift: f32) -> f32 {
    let half_height = panel_height / 2.0;
    let relative = ball_y - panel_top - half_height;
    let fraction = relative / half_height;
    let delta = round_half_up(fraction * Params::MAX_Y_SHIFT);

    (y_shift + delta).clamp(-Params::MAX_Y_SHIFT, Params::MAX_Y_SHIFT)
}

// Halves round towards +inf: 2.5 -> 3, -2.5 -> -2
fn round_half_up(value: f32) -> f32 {
    (value + 0.5).floor()
}

/// Resolve the ball reaching the end of the field it is heading towards.
///
/// A vertical overlap with the target panel deflects the ball, anything else
/// is a miss. The heading flips either way.
pub fn check_panels(world: &mut World, config: &Config, events: &mut Events) {
    // Collect panel data without holding borrows
    let panels: Vec<Panel> = world
        .query::<&Panel>()
        .iter()
        .map(|(_e, panel)| *panel)
        .collect();

    let right_limit = config.field_width() - config.ball_radius;

    for (_entity, (ball, motion)) in world.query_mut::<(&Ball, &mut Motion)>() {
        let reached = match motion.heading {
            Heading::Right => ball.pos.x >= right_limit,
            Heading::Left => ball.pos.x <= config.ball_radius,
        };
        if !reached {
            continue;
        }

        let target = motion.heading.target();
        let ball_bounds =
            Aabb::from_center_size(ball.pos, Vec2::splat(config.ball_radius * 2.0));
        let panel = panels.iter().find(|p| p.side == target);

        match panel {
            Some(panel) if ball_bounds.overlaps_vertically(&panel_span(panel, config)) => {
                motion.y_shift =
                    deflect(ball.pos.y, panel.top, config.panel_height, motion.y_shift);
                events.panel_hit = Some(target);
            }
            _ => {
                events.miss = Some(target);
            }
        }

        motion.heading = motion.heading.flipped();
    }
}

/// Invert the drift when the ball sits exactly on the top or bottom limit
pub fn bounce_walls(world: &mut World, config: &Config, events: &mut Events) {
    let top = config.ball_radius;
    let bottom = config.height - config.ball_radius;

    for (_entity, (ball, motion)) in world.query_mut::<(&Ball, &mut Motion)>() {
        if ball.pos.y == top || ball.pos.y == bottom {
            motion.y_shift = -motion.y_shift;
            events.wall_bounce = true;
        }
    }
}

fn panel_span(panel: &Panel, config: &Config) -> Aabb {
    Aabb::new(
        Vec2::new(0.0, panel.top),
        Vec2::new(config.panel_width, panel.bottom(config.panel_height)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_panel, Side};

    fn setup_world(left_top: f32, right_top: f32) -> (World, Config, Events) {
        let mut world = World::new();
        let config = Config::new();
        create_panel(&mut world, Side::Left, left_top);
        create_panel(&mut world, Side::Right, right_top);
        (world, config, Events::new())
    }

    fn motion_of(world: &World) -> Motion {
        world
            .query::<&Motion>()
            .iter()
            .next()
            .map(|(_e, m)| *m)
            .unwrap()
    }

    #[test]
    fn test_deflect_center_hit_keeps_drift() {
        assert_eq!(deflect(200.0, 150.0, 100.0, 2.0), 2.0);
    }

    #[test]
    fn test_deflect_edges() {
        assert_eq!(deflect(250.0, 150.0, 100.0, 0.0), 5.0, "Bottom edge");
        assert_eq!(deflect(150.0, 150.0, 100.0, 0.0), -5.0, "Top edge");
    }

    #[test]
    fn test_deflect_accumulates_and_clamps() {
        assert_eq!(deflect(240.0, 150.0, 100.0, 1.0), 5.0, "1 + 4");
        assert_eq!(deflect(240.0, 150.0, 100.0, 4.0), 5.0, "4 + 4 clamped");
        assert_eq!(deflect(160.0, 150.0, 100.0, -3.0), -5.0, "-3 - 4 clamped");
    }

    #[test]
    fn test_deflect_rounds_halves_up() {
        // fraction * 5 = 2.5 and -2.5
        assert_eq!(deflect(225.0, 150.0, 100.0, 0.0), 3.0);
        assert_eq!(deflect(175.0, 150.0, 100.0, 0.0), -2.0);
    }

    #[test]
    fn test_right_panel_hit_flips_heading() {
        let (mut world, config, mut events) = setup_world(150.0, 150.0);
        let motion = Motion {
            heading: Heading::Right,
            y_shift: 1.0,
        };
        create_ball(&mut world, Vec2::new(752.0, 200.0), motion);

        check_panels(&mut world, &config, &mut events);

        let motion = motion_of(&world);
        assert_eq!(motion.heading, Heading::Left);
        assert_eq!(motion.y_shift, 1.0, "Center hit adds nothing");
        assert_eq!(events.panel_hit, Some(Side::Right));
        assert!(events.miss.is_none());
    }

    #[test]
    fn test_right_panel_miss_flips_heading() {
        let (mut world, config, mut events) = setup_world(150.0, 150.0);
        create_ball(&mut world, Vec2::new(752.0, 50.0), Motion::new());

        check_panels(&mut world, &config, &mut events);

        assert_eq!(motion_of(&world).heading, Heading::Left);
        assert_eq!(events.miss, Some(Side::Right));
        assert!(events.panel_hit.is_none());
    }

    #[test]
    fn test_left_panel_graze_counts_as_hit() {
        let (mut world, config, mut events) = setup_world(150.0, 150.0);
        let motion = Motion {
            heading: Heading::Left,
            y_shift: 0.0,
        };
        // Ball bottom edge touches the panel top exactly
        create_ball(&mut world, Vec2::new(8.0, 142.0), motion);

        check_panels(&mut world, &config, &mut events);

        assert_eq!(events.panel_hit, Some(Side::Left));
        let motion = motion_of(&world);
        assert_eq!(motion.heading, Heading::Right);
        assert_eq!(motion.y_shift, -5.0, "Above the top edge: fraction < -1");
    }

    #[test]
    fn test_left_panel_miss_just_past_edge() {
        let (mut world, config, mut events) = setup_world(150.0, 150.0);
        let motion = Motion {
            heading: Heading::Left,
            y_shift: 0.0,
        };
        create_ball(&mut world, Vec2::new(8.0, 141.0), motion);

        check_panels(&mut world, &config, &mut events);

        assert_eq!(events.miss, Some(Side::Left));
        assert_eq!(motion_of(&world).heading, Heading::Right);
    }

    #[test]
    fn test_no_check_before_reaching_panel() {
        let (mut world, config, mut events) = setup_world(150.0, 150.0);
        create_ball(&mut world, Vec2::new(751.0, 50.0), Motion::new());

        check_panels(&mut world, &config, &mut events);

        assert_eq!(motion_of(&world).heading, Heading::Right);
        assert!(events.miss.is_none());
        assert!(events.panel_hit.is_none());
    }

    #[test]
    fn test_ball_at_left_edge_moving_right_is_ignored() {
        let (mut world, config, mut events) = setup_world(0.0, 0.0);
        create_ball(&mut world, Vec2::new(8.0, 300.0), Motion::new());

        check_panels(&mut world, &config, &mut events);

        assert_eq!(motion_of(&world).heading, Heading::Right);
        assert!(events.miss.is_none());
    }

    #[test]
    fn test_wall_bounce_inverts_drift() {
        let (mut world, config, mut events) = setup_world(150.0, 150.0);
        let motion = Motion {
            heading: Heading::Right,
            y_shift: 3.0,
        };
        create_ball(&mut world, Vec2::new(300.0, 8.0), motion);

        bounce_walls(&mut world, &config, &mut events);

        assert_eq!(motion_of(&world).y_shift, -3.0);
        assert!(events.wall_bounce);
    }

    #[test]
    fn test_no_wall_bounce_off_the_limit() {
        let (mut world, config, mut events) = setup_world(150.0, 150.0);
        let motion = Motion {
            heading: Heading::Right,
            y_shift: 3.0,
        };
        create_ball(&mut world, Vec2::new(300.0, 9.0), motion);

        bounce_walls(&mut world, &config, &mut events);

        assert_eq!(motion_of(&world).y_shift, 3.0);
        assert!(!events.wall_bounce);
    }
}
