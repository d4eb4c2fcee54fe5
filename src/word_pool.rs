use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};

use crate::error::domain_error::DomainError;
use crate::error::Error;
use crate::game_round::can_be_scrambled;

/// The candidate words a game picks from. Once built, every word is lower case, unique and scramblable,
/// and there are enough of them to play a full game without repeating a word.
#[derive(Clone, Debug, PartialEq)]
pub struct WordPool {
    words: Vec<String>,
}

impl WordPool {
    pub fn new(words: Vec<String>, max_words: usize) -> Result<Self, Error> {
        let mut seen = HashSet::new();
        let words: Vec<String> = words
            .into_iter()
            .map(|word| word.trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .filter(|word| seen.insert(word.clone()))
            .collect();

        if words.is_empty() {
            return Err(Error::Domain(DomainError::EmptyWordPool));
        }
        if let Some(word) = words.iter().find(|word| !can_be_scrambled(word)) {
            return Err(Error::Domain(DomainError::UnscramblableWord(word.clone())));
        }
        if words.len() < max_words {
            return Err(Error::Domain(DomainError::NotEnoughWords(
                words.len(),
                max_words,
            )));
        }

        Ok(WordPool { words })
    }

    pub fn from_file(file_path: &str, max_words: usize) -> Result<Self, Error> {
        let file = File::open(file_path).map_err(|error| {
            Error::WordsFile(format!("File: '{file_path}', Error: '{error}'."))
        })?;
        let words = BufReader::new(file)
            .lines()
            .collect::<Result<Vec<String>, _>>()
            .map_err(|error| {
                Error::WordsFile(format!(
                    "Could not parse one of the word lines. File: '{file_path}', Error: '{error}'."
                ))
            })?;

        let pool = WordPool::new(words, max_words)?;
        log::info!(
            "Words loaded. File: '{}', Words: '{}'.",
            file_path,
            pool.len()
        );
        Ok(pool)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    // Never empty once built.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.words.len()
    }
}
