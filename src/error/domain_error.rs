use thiserror::Error;

use crate::game_round::game_round_fsm::GameRoundFsmState;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DomainError {
    #[error("The session does not exist. SessionId: '{0}'.")]
    SessionDoesNotExist(String),
    #[error("The session has already exited. SessionId: '{0}'.")]
    SessionExited(String),
    #[error("Invalid state for submitting a Word. ActualState: '{0:?}', ExpectedState: '{1:?}'.")]
    InvalidStateForWordSubmission(GameRoundFsmState, GameRoundFsmState),
    #[error("Invalid state for skipping a Word. ActualState: '{0:?}', ExpectedState: '{1:?}'.")]
    InvalidStateForSkip(GameRoundFsmState, GameRoundFsmState),
    #[error(
        "Invalid state for choosing a summary option. ActualState: '{0:?}', ExpectedState: '{1:?}'."
    )]
    InvalidStateForSummaryChoice(GameRoundFsmState, GameRoundFsmState),
    #[error("Cannot advance to the next Word. ActualState: '{0:?}', ExpectedState: '{1:?}'.")]
    InvalidStateForAdvance(GameRoundFsmState, GameRoundFsmState),
    #[error("Cannot record a correct Word. ActualState: '{0:?}', ExpectedState: '{1:?}'.")]
    InvalidStateForRecordCorrect(GameRoundFsmState, GameRoundFsmState),
    #[error("The word pool is empty.")]
    EmptyWordPool,
    #[error("Not enough words to play a game. ActualWords: '{0}', MinimumWords: '{1}'.")]
    NotEnoughWords(usize, usize),
    #[error("The word cannot be scrambled into a different word. Word: '{0}'.")]
    UnscramblableWord(String),
    #[error("A game needs to play at least one word. MaxWords: '{0}'.")]
    InvalidMaxWords(usize),
    #[error("The highest possible score does not fit in a score. MaxWords: '{0}', ScoreIncrease: '{1}'.")]
    ScoreOverflow(usize, u32),
}

impl DomainError {
    /// Errors caused by the word pool or the game settings, a session cannot be built while they hold.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            DomainError::EmptyWordPool
                | DomainError::NotEnoughWords(_, _)
                | DomainError::UnscramblableWord(_)
                | DomainError::InvalidMaxWords(_)
                | DomainError::ScoreOverflow(_, _)
        )
    }
}
