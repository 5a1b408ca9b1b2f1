//! Game State Machine
//!
//! Drives the menu -> match -> game over cycle. Quitting is not a transition;
//! the window closes from any state.

use game_core::Side;

/// Game states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsmState {
    Menu,
    Playing,
    GameOver { winner: Side },
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Enter pressed on the menu
    Commit,
    /// A side's score reached the win limit
    ScoreLimitReached(Side),
    /// Enter pressed on the game over screen
    Dismiss,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: FsmState,
    pub to_state: FsmState,
    pub action: GameAction,
}

/// Next state for a given action, if the action is valid from `state`
pub fn next_state(state: FsmState, action: GameAction) -> Option<FsmState> {
    match (state, action) {
        (FsmState::Menu, GameAction::Commit) => Some(FsmState::Playing),
        (FsmState::Playing, GameAction::ScoreLimitReached(winner)) => {
            Some(FsmState::GameOver { winner })
        }
        (FsmState::GameOver { .. }, GameAction::Dismiss) => Some(FsmState::Menu),

        // Invalid transition
        _ => None,
    }
}

/// Game Finite State Machine
#[derive(Debug)]
pub struct GameFsm {
    state: FsmState,
}

impl GameFsm {
    pub fn new() -> Self {
        Self {
            state: FsmState::Menu,
        }
    }

    /// Get current state
    pub fn state(&self) -> FsmState {
        self.state
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: GameAction) -> TransitionResult {
        let from_state = self.state;
        let to_state = next_state(from_state, action).unwrap_or(from_state);
        self.state = to_state;
        TransitionResult {
            success: to_state != from_state,
            from_state,
            to_state,
            action,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.state == FsmState::Playing
    }
}

impl Default for GameFsm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let fsm = GameFsm::new();
        assert_eq!(fsm.state(), FsmState::Menu);
    }

    #[test]
    fn test_valid_transition() {
        let mut fsm = GameFsm::new();
        let result = fsm.transition(GameAction::Commit);
        assert!(result.success);
        assert_eq!(result.from_state, FsmState::Menu);
        assert_eq!(result.to_state, FsmState::Playing);
        assert!(fsm.is_playing());
    }

    #[test]
    fn test_invalid_transition() {
        let mut fsm = GameFsm::new();
        let result = fsm.transition(GameAction::Dismiss);
        assert!(!result.success);
        assert_eq!(fsm.state(), FsmState::Menu);
        assert!(!fsm.transition(GameAction::ScoreLimitReached(Side::Left)).success);
    }

    #[test]
    fn test_full_cycle() {
        let mut fsm = GameFsm::new();
        fsm.transition(GameAction::Commit);
        fsm.transition(GameAction::ScoreLimitReached(Side::Right));
        assert_eq!(fsm.state(), FsmState::GameOver { winner: Side::Right });

        // Enter again while playing is meaningless
        assert!(!fsm.transition(GameAction::Commit).success);

        fsm.transition(GameAction::Dismiss);
        assert_eq!(fsm.state(), FsmState::Menu);
    }

    #[test]
    fn test_pure_transition_table() {
        assert_eq!(next_state(FsmState::Playing, GameAction::Commit), None);
        assert_eq!(next_state(FsmState::Playing, GameAction::Dismiss), None);
        assert_eq!(
            next_state(FsmState::Menu, GameAction::ScoreLimitReached(Side::Left)),
            None
        );
        assert_eq!(
            next_state(FsmState::GameOver { winner: Side::Left }, GameAction::Dismiss),
            Some(FsmState::Menu)
        );
    }
}
