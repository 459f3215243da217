//! Board plus shell: what the browser timer and key listener drive.

use crate::fsm::TransitionResult;
use crate::input::panel_command;
use crate::shell::Shell;
use game_core::{Board, Config, Speed};

pub struct Session {
    board: Board,
    shell: Shell,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            board: Board::new(config),
            shell: Shell::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    pub fn is_running(&self) -> bool {
        self.shell.is_running()
    }

    pub fn toggle_running(&mut self) -> TransitionResult {
        self.shell.toggle_running()
    }

    pub fn pause(&mut self) -> TransitionResult {
        self.shell.pause()
    }

    pub fn set_running(&mut self, running: bool) -> TransitionResult {
        self.shell.set_running(running)
    }

    pub fn set_speed(&mut self, speed: Speed) {
        self.board.set_speed(speed);
    }

    pub fn set_player_names(&mut self, left: &str, right: &str) {
        self.shell.set_player_names(left, right);
    }

    /// One timer tick. For each miss, `notify` runs (and may block) before
    /// the point is credited.
    pub fn tick<F: FnMut(&str)>(&mut self, mut notify: F) {
        if !self.shell.is_running() {
            return;
        }

        let Self { board, shell } = self;
        board.tick(|conceded| {
            notify(&shell.miss_message(conceded));
            shell.award(conceded);
        });
    }

    /// Returns whether the key moved a panel
    pub fn key_down(&mut self, code: &str) -> bool {
        if !self.shell.is_running() {
            return false;
        }
        match panel_command(code) {
            Some(command) => {
                self.board.move_panel(command);
                true
            }
            None => false,
        }
    }
}
