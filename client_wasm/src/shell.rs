//! Application shell state: run flag, score and player names.

use crate::fsm::{GameAction, GameFsm, TransitionResult};
use game_core::{Score, Side};

pub struct Shell {
    fsm: GameFsm,
    score: Score,
    left_name: String,
    right_name: String,
}

impl Shell {
    pub fn new() -> Self {
        Self {
            fsm: GameFsm::new(),
            score: Score::new(),
            left_name: "Left".to_string(),
            right_name: "Right".to_string(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.fsm.is_running()
    }

    pub fn toggle_running(&mut self) -> TransitionResult {
        self.fsm.transition(GameAction::Toggle)
    }

    pub fn pause(&mut self) -> TransitionResult {
        self.fsm.transition(GameAction::Pause)
    }

    pub fn set_running(&mut self, running: bool) -> TransitionResult {
        let action = if running {
            GameAction::Run
        } else {
            GameAction::Pause
        };
        self.fsm.transition(action)
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn set_player_names(&mut self, left: &str, right: &str) {
        self.left_name = left.to_string();
        self.right_name = right.to_string();
    }

    pub fn player_name(&self, side: Side) -> &str {
        match side {
            Side::Left => &self.left_name,
            Side::Right => &self.right_name,
        }
    }

    /// Acknowledgment text naming the player who scored
    pub fn miss_message(&self, conceded: Side) -> String {
        format!(
            "HIT!!!\nPlayer \"{}\" gets one point!",
            self.player_name(conceded.opposite())
        )
    }

    pub fn award(&mut self, conceded: Side) {
        self.score.award(conceded);
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}
