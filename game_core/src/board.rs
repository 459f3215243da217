//! The simulation loop: one ball, two panels, advanced one fixed tick at a time.

use crate::systems::{move_panel, PanelCommand};
use crate::{
    create_ball, create_panel, step, Ball, Config, Events, Motion, Panel, Params, Scene, Side,
    Speed,
};
use hecs::{Entity, World};

/// Board state for one game session
pub struct Board {
    world: World,
    config: Config,
    events: Events,
    ticks: u64,
    left: Entity,
    right: Entity,
    ball: Entity,
}

impl Board {
    /// Panels centered vertically, ball centered in the field heading right
    pub fn new(config: Config) -> Self {
        let mut world = World::new();
        let panel_top = config.panel_start_top();
        let left = create_panel(&mut world, Side::Left, panel_top);
        let right = create_panel(&mut world, Side::Right, panel_top);
        let ball = create_ball(&mut world, config.ball_start(), Motion::new());

        Self {
            world,
            config,
            events: Events::new(),
            ticks: 0,
            left,
            right,
            ball,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Takes effect from the next tick
    pub fn set_speed(&mut self, speed: Speed) {
        self.config.speed = speed;
    }

    /// Advance one tick. `on_hit` runs at most once, with the panel that
    /// let the ball through.
    pub fn tick<F: FnMut(Side)>(&mut self, mut on_hit: F) -> &Events {
        step(&mut self.world, &self.config, &mut self.events);
        self.ticks += 1;

        if let Some(conceded) = self.events.miss {
            on_hit(conceded);
        }
        &self.events
    }

    /// Apply a key-driven panel step. Read by the next tick.
    pub fn move_panel(&mut self, command: PanelCommand) {
        move_panel(&mut self.world, &self.config, command);
    }

    pub fn panel(&self, side: Side) -> Panel {
        let entity = match side {
            Side::Left => self.left,
            Side::Right => self.right,
        };
        self.world
            .get::<&Panel>(entity)
            .map(|panel| *panel)
            .unwrap_or_else(|_| Panel::new(side, self.config.panel_start_top()))
    }

    pub fn panel_top(&self, side: Side) -> f32 {
        self.panel(side).top
    }

    pub fn ball(&self) -> Ball {
        self.world
            .get::<&Ball>(self.ball)
            .map(|ball| *ball)
            .unwrap_or_else(|_| Ball::new(self.config.ball_start()))
    }

    pub fn motion(&self) -> Motion {
        self.world
            .get::<&Motion>(self.ball)
            .map(|motion| *motion)
            .unwrap_or_default()
    }

    /// Events from the most recent tick
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn scene(&self) -> Scene {
        Scene::new(
            &self.config,
            self.panel_top(Side::Left),
            self.panel_top(Side::Right),
            self.ball().pos,
        )
    }

    /// Place the ball directly; used to set up specific positions
    pub fn place_ball(&mut self, ball: Ball, motion: Motion) {
        let ball = self.clamped(ball);
        if let Ok(mut current) = self.world.get::<&mut Ball>(self.ball) {
            *current = ball;
        }
        if let Ok(mut current) = self.world.get::<&mut Motion>(self.ball) {
            current.heading = motion.heading;
            current.y_shift = motion.y_shift.clamp(-Params::MAX_Y_SHIFT, Params::MAX_Y_SHIFT);
        }
    }

    /// Place a panel directly, clamped to the board
    pub fn place_panel(&mut self, side: Side, top: f32) {
        let entity = match side {
            Side::Left => self.left,
            Side::Right => self.right,
        };
        let top = self.config.clamp_panel_top(top);
        if let Ok(mut panel) = self.world.get::<&mut Panel>(entity) {
            panel.top = top;
        }
    }

    fn clamped(&self, ball: Ball) -> Ball {
        let mut pos = ball.pos;
        pos.x = self.config.clamp_ball_x(pos.x);
        pos.y = self.config.clamp_ball_y(pos.y);
        Ball::new(pos)
    }
}
