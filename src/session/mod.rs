pub mod actor;
pub mod actor_client;

use crate::config::GameSettings;
use crate::error::domain_error::DomainError;
use crate::error::Error;
use crate::game_round::game_round_fsm::GameRoundFsmState;
use crate::game_round::GameRound;
use crate::word_pool::WordPool;

pub const TRY_AGAIN_MESSAGE: &str = "Try again!";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SummaryChoice {
    PlayAgain,
    Exit,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SessionStatus {
    Playing,
    ShowingSummary,
    Exited,
}

/// Everything the player needs to see after an action.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionView {
    pub status: SessionStatus,
    pub scrambled_word: String,
    pub score: u32,
    pub words_played: usize,
    pub max_words: usize,
    pub input_error: Option<String>,
    pub clear_input: bool,
    pub final_score: Option<u32>,
}

/// Drives one `GameRound` from the player's actions: submitting a guess, skipping a word and answering the
/// final score summary.
pub struct Session {
    id: String,
    round: GameRound,
    input_error: Option<String>,
    clear_input: bool,
    exited: bool,
}

impl Session {
    pub fn new(id: &str, words: WordPool, settings: &GameSettings) -> Result<Self, Error> {
        Ok(Session {
            id: id.to_string(),
            round: GameRound::new(words, settings)?,
            input_error: None,
            clear_input: false,
            exited: false,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn has_exited(&self) -> bool {
        self.exited
    }

    pub fn view(&self) -> SessionView {
        let status = if self.exited {
            SessionStatus::Exited
        } else if self.round.is_exhausted() {
            SessionStatus::ShowingSummary
        } else {
            SessionStatus::Playing
        };
        let final_score = match status {
            SessionStatus::Playing => None,
            _ => Some(self.round.score()),
        };

        SessionView {
            status,
            scrambled_word: self.round.scrambled_word().to_string(),
            score: self.round.score(),
            words_played: self.round.words_played(),
            max_words: self.round.max_words(),
            input_error: self.input_error.clone(),
            clear_input: self.clear_input,
            final_score,
        }
    }

    pub fn submit_word(&mut self, guess: &str) -> Result<SessionView, Error> {
        self.ensure_not_exited()?;
        if self.round.is_exhausted() {
            return Err(Error::Domain(DomainError::InvalidStateForWordSubmission(
                self.round.state().to_owned(),
                GameRoundFsmState::InProgress,
            )));
        }

        if self.round.is_guess_correct(guess) {
            self.round.record_correct()?;
            let has_more_words = self.round.advance()?;
            self.set_input_error(false);
            log::debug!(
                "Correct word. SessionId: '{}', Score: '{}', WordsPlayed: '{}', HasMoreWords: '{}'.",
                self.id,
                self.round.score(),
                self.round.words_played(),
                has_more_words
            );
        } else {
            self.set_input_error(true);
        }

        Ok(self.view())
    }

    pub fn skip_word(&mut self) -> Result<SessionView, Error> {
        self.ensure_not_exited()?;
        if self.round.is_exhausted() {
            return Err(Error::Domain(DomainError::InvalidStateForSkip(
                self.round.state().to_owned(),
                GameRoundFsmState::InProgress,
            )));
        }

        let has_more_words = self.round.advance()?;
        self.set_input_error(false);
        log::debug!(
            "Word skipped. SessionId: '{}', WordsPlayed: '{}', HasMoreWords: '{}'.",
            self.id,
            self.round.words_played(),
            has_more_words
        );

        Ok(self.view())
    }

    /// The summary is modal, it only accepts a choice once the last word has been played.
    pub fn choose(&mut self, choice: SummaryChoice) -> Result<SessionView, Error> {
        self.ensure_not_exited()?;
        if !self.round.is_exhausted() {
            return Err(Error::Domain(DomainError::InvalidStateForSummaryChoice(
                self.round.state().to_owned(),
                GameRoundFsmState::Exhausted,
            )));
        }

        match choice {
            SummaryChoice::PlayAgain => {
                self.round.reset()?;
                self.set_input_error(false);
                log::info!("Game restarted. SessionId: '{}'.", self.id);
            }
            SummaryChoice::Exit => {
                self.exited = true;
                log::info!(
                    "Player exited. SessionId: '{}', FinalScore: '{}'.",
                    self.id,
                    self.round.score()
                );
            }
        }

        Ok(self.view())
    }

    fn ensure_not_exited(&self) -> Result<(), Error> {
        if self.exited {
            Err(Error::Domain(DomainError::SessionExited(self.id.to_string())))
        } else {
            Ok(())
        }
    }

    // A cleared error also clears the player's input.
    fn set_input_error(&mut self, error: bool) {
        if error {
            self.input_error = Some(TRY_AGAIN_MESSAGE.to_string());
            self.clear_input = false;
        } else {
            self.input_error = None;
            self.clear_input = true;
        }
    }

    #[cfg(test)]
    fn current_word(&self) -> &str {
        self.round.current_word()
    }
}
