use std::fmt;

use rust_fsm::state_machine;

/*
 * InProgress
 *    Guess or skip the current word
 *    If it was the last word go to Exhausted, otherwise load the next word
 * Exhausted
 *    Final score shown, only a reset starts a new game
 */
state_machine! {
    derive(Debug, Clone, PartialEq)
    pub GameRoundFsm(InProgress)

    InProgress => {
        NextWord => InProgress,
        NoMoreWords => Exhausted,
        Reset => InProgress,
    },
    Exhausted => {
        Reset => InProgress,
    }
}

impl fmt::Display for GameRoundFsmState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
