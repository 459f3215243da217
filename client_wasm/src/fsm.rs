//! Run/Pause State Machine
//!
//! Tracks whether the board is ticking. The browser timer and keyboard
//! listener exist exactly while the state is `Running`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsmState {
    Idle,
    Running,
    Paused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Run,
    Pause,
    Toggle,
}

/// Outcome of one action. A rejected action leaves `from == to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub from: FsmState,
    pub to: FsmState,
}

impl TransitionResult {
    /// The board started ticking
    pub fn started(&self) -> bool {
        self.from != FsmState::Running && self.to == FsmState::Running
    }

    /// The board stopped ticking
    pub fn stopped(&self) -> bool {
        self.from == FsmState::Running && self.to != FsmState::Running
    }
}

#[derive(Debug, Clone)]
pub struct GameFsm {
    state: FsmState,
}

impl GameFsm {
    pub fn new() -> Self {
        Self {
            state: FsmState::Idle,
        }
    }

    /// Apply `action` if the current state allows it
    pub fn transition(&mut self, action: GameAction) -> TransitionResult {
        let from = self.state;
        if let Some(next) = next_state(from, action) {
            self.state = next;
        }
        TransitionResult {
            from,
            to: self.state,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == FsmState::Running
    }
}

impl Default for GameFsm {
    fn default() -> Self {
        Self::new()
    }
}

fn next_state(state: FsmState, action: GameAction) -> Option<FsmState> {
    match (state, action) {
        (FsmState::Idle | FsmState::Paused, GameAction::Run | GameAction::Toggle) => {
            Some(FsmState::Running)
        }
        (FsmState::Running, GameAction::Pause | GameAction::Toggle) => Some(FsmState::Paused),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let fsm = GameFsm::new();
        assert!(!fsm.is_running());
    }

    #[test]
    fn test_run_from_idle() {
        let mut fsm = GameFsm::new();
        let result = fsm.transition(GameAction::Run);
        assert!(result.started());
        assert_eq!(result.to, FsmState::Running);
        assert!(fsm.is_running());
    }

    #[test]
    fn test_pause_while_idle_is_rejected() {
        let mut fsm = GameFsm::new();
        let result = fsm.transition(GameAction::Pause);
        assert_eq!(result.from, result.to);
        assert!(!result.stopped());
        assert!(!fsm.is_running());
    }

    #[test]
    fn test_run_twice_is_rejected() {
        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::Run);
        let result = fsm.transition(GameAction::Run);
        assert_eq!(result.from, result.to);
        assert!(!result.started(), "No second timer");
    }

    #[test]
    fn test_toggle_flow() {
        let mut fsm = GameFsm::new();
        assert!(fsm.transition(GameAction::Toggle).started());

        let result = fsm.transition(GameAction::Toggle);
        assert!(result.stopped());
        assert_eq!(result.to, FsmState::Paused);

        assert!(fsm.transition(GameAction::Run).started());
        assert!(fsm.is_running());
    }
}
