pub mod game_round_fsm;

use std::collections::HashSet;

use rand::seq::{IteratorRandom, SliceRandom};
use rand::thread_rng;
use rust_fsm::StateMachine;

use crate::config::GameSettings;
use crate::error::domain_error::DomainError;
use crate::error::Error;
use crate::word_pool::WordPool;

use self::game_round_fsm::{GameRoundFsm, GameRoundFsmInput, GameRoundFsmState};

/// The state of one play session: the word being guessed, its scrambled form, the score and the words
/// already played. Knows nothing about how any of it is displayed.
pub struct GameRound {
    words: WordPool,
    fsm: StateMachine<GameRoundFsm>,
    current_word: String,
    scrambled_word: String,
    score: u32,
    words_played: usize,
    used_words: HashSet<String>,
    max_words: usize,
    score_increase: u32,
    ignore_case: bool,
}

impl GameRound {
    pub fn new(words: WordPool, settings: &GameSettings) -> Result<Self, Error> {
        if settings.max_words == 0 {
            return Err(Error::Domain(DomainError::InvalidMaxWords(
                settings.max_words,
            )));
        }
        let max_score = u32::try_from(settings.max_words)
            .ok()
            .and_then(|max_words| max_words.checked_mul(settings.score_increase));
        if max_score.is_none() {
            return Err(Error::Domain(DomainError::ScoreOverflow(
                settings.max_words,
                settings.score_increase,
            )));
        }
        if words.len() < settings.max_words {
            return Err(Error::Domain(DomainError::NotEnoughWords(
                words.len(),
                settings.max_words,
            )));
        }

        let mut round = GameRound {
            words,
            fsm: StateMachine::new(),
            current_word: String::default(),
            scrambled_word: String::default(),
            score: 0,
            words_played: 0,
            used_words: HashSet::default(),
            max_words: settings.max_words,
            score_increase: settings.score_increase,
            ignore_case: settings.ignore_case,
        };
        round.load_next_word()?;
        Ok(round)
    }

    pub fn state(&self) -> &GameRoundFsmState {
        self.fsm.state()
    }

    pub fn is_exhausted(&self) -> bool {
        self.state() == &GameRoundFsmState::Exhausted
    }

    pub fn current_word(&self) -> &str {
        &self.current_word
    }

    pub fn scrambled_word(&self) -> &str {
        &self.scrambled_word
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn words_played(&self) -> usize {
        self.words_played
    }

    pub fn max_words(&self) -> usize {
        self.max_words
    }

    pub fn used_words(&self) -> &HashSet<String> {
        &self.used_words
    }

    pub fn is_guess_correct(&self, guess: &str) -> bool {
        let guess = guess.trim();
        if self.ignore_case {
            guess.to_lowercase() == self.current_word.to_lowercase()
        } else {
            guess == self.current_word
        }
    }

    pub fn record_correct(&mut self) -> Result<(), Error> {
        if self.is_exhausted() {
            return Err(Error::Domain(DomainError::InvalidStateForRecordCorrect(
                self.state().to_owned(),
                GameRoundFsmState::InProgress,
            )));
        }
        self.score += self.score_increase;
        Ok(())
    }

    /// Counts the current word as played. Returns `false` once the last word has been played, the current
    /// word then stays as it was.
    pub fn advance(&mut self) -> Result<bool, Error> {
        if self.is_exhausted() {
            return Err(Error::Domain(DomainError::InvalidStateForAdvance(
                self.state().to_owned(),
                GameRoundFsmState::InProgress,
            )));
        }

        if self.words_played + 1 >= self.max_words {
            self.process_event(&GameRoundFsmInput::NoMoreWords)?;
            self.words_played += 1;
            Ok(false)
        } else {
            self.load_next_word()?;
            self.process_event(&GameRoundFsmInput::NextWord)?;
            self.words_played += 1;
            Ok(true)
        }
    }

    pub fn reset(&mut self) -> Result<(), Error> {
        self.process_event(&GameRoundFsmInput::Reset)?;
        self.score = 0;
        self.words_played = 0;
        self.used_words.clear();
        self.load_next_word()
    }

    fn process_event(&mut self, event: &GameRoundFsmInput) -> Result<(), Error> {
        match self.fsm.consume(event) {
            Ok(_) => Ok(()),
            Err(error) => Err(Error::log_and_create_internal(&format!(
                "The fsm in state {:?} can't transition with an event {:?}. Error: '{error}'.",
                self.fsm.state(),
                event
            ))),
        }
    }

    fn load_next_word(&mut self) -> Result<(), Error> {
        let word = self
            .words
            .words()
            .iter()
            .filter(|word| !self.used_words.contains(*word))
            .choose(&mut thread_rng())
            .cloned()
            .ok_or_else(|| {
                Error::log_and_create_internal(&format!(
                    "Ran out of unused words. UsedWords: '{}', AmountOfWords: '{}'.",
                    self.used_words.len(),
                    self.words.len()
                ))
            })?;
        let scrambled_word = scramble(&word)
            .ok_or_else(|| Error::Domain(DomainError::UnscramblableWord(word.clone())))?;

        self.used_words.insert(word.clone());
        self.current_word = word;
        self.scrambled_word = scrambled_word;
        Ok(())
    }
}

/// A word can be scrambled when at least one of its permutations differs from it.
pub fn can_be_scrambled(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => chars.any(|char| char != first),
        None => false,
    }
}

/// Shuffles the characters of `word` until the result differs from it.
pub fn scramble(word: &str) -> Option<String> {
    if !can_be_scrambled(word) {
        return None;
    }

    let mut chars: Vec<char> = word.chars().collect();
    let mut rng = thread_rng();
    loop {
        chars.shuffle(&mut rng);
        let scrambled: String = chars.iter().collect();
        if scrambled != word {
            return Some(scrambled);
        }
    }
}
