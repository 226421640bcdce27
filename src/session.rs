//! Round state and answer validation.
//!
//! A [`GameSession`] owns the starting word of the current round and the
//! answers accepted so far, newest first. [`GameSession::submit`] runs the
//! checks in a fixed order and stops at the first failure, so the order of
//! [`Rejection`] variants is also the order a player sees them in:
//!
//! 1. [`Rejection::Empty`]
//! 2. [`Rejection::NotPossible`]
//! 3. [`Rejection::NotOriginal`]
//! 4. [`Rejection::NotReal`]
//! 5. [`Rejection::TooShortOrSame`]

use crate::debug_log;
use crate::dictionary::{DEFAULT_LOCALE, Dictionary};
use crate::wordbank::{DEFAULT_START_WORD, WordPool};
use rand::Rng;
use rand::seq::SliceRandom;

/// Answers shorter than this many characters are rejected.
pub const MIN_ANSWER_LENGTH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("Empty answer")]
    Empty,

    #[error("Word not possible")]
    NotPossible,

    #[error("Word already used")]
    NotOriginal,

    #[error("Word not recognized")]
    NotReal,

    #[error("Word too short or same")]
    TooShortOrSame,
}

impl Rejection {
    /// Short heading suitable for an alert title.
    #[must_use]
    pub fn title(self) -> String {
        self.to_string()
    }

    /// Longer explanation shown under the title.
    #[must_use]
    pub fn message(self, start_word: &str) -> String {
        match self {
            Self::Empty => "Type a word before submitting.".to_string(),
            Self::NotPossible => format!("You can't spell that word from {start_word}!"),
            Self::NotOriginal => "Be more original!".to_string(),
            Self::NotReal => "You can't just make them up, you know!".to_string(),
            Self::TooShortOrSame => format!(
                "Answers need at least {MIN_ANSWER_LENGTH} letters and can't be {start_word} itself."
            ),
        }
    }
}

/// `Ok(())` when the answer was accepted.
pub type SubmitResult = Result<(), Rejection>;

pub struct GameSession<D> {
    dictionary: D,
    locale: String,
    start_word: String,
    used_words: Vec<String>,
}

impl<D: Dictionary> GameSession<D> {
    /// Creates a session and starts its first round.
    pub fn new<R: Rng + ?Sized>(dictionary: D, pool: &WordPool, rng: &mut R) -> Self {
        let mut session = Self {
            dictionary,
            locale: DEFAULT_LOCALE.to_string(),
            start_word: String::new(),
            used_words: Vec::new(),
        };
        session.start_round(pool, rng);
        session
    }

    #[must_use]
    pub fn with_locale(mut self, locale: &str) -> Self {
        self.locale = locale.to_string();
        self
    }

    /// Picks a new starting word from `pool` and forgets all answers.
    pub fn start_round<R: Rng + ?Sized>(&mut self, pool: &WordPool, rng: &mut R) {
        let word = pool
            .words()
            .choose(rng)
            .map_or(DEFAULT_START_WORD, String::as_str);
        self.start_word.clear();
        self.start_word.push_str(word);
        self.used_words.clear();
        debug_log!("New round started with '{}'", self.start_word);
    }

    /// Validates `candidate` against the current round and records it on
    /// success. The stored answer keeps the case it was typed in.
    pub fn submit(&mut self, candidate: &str) -> SubmitResult {
        let result = self.check(candidate);
        match result {
            Ok(()) => {
                log::debug!("Accepted '{candidate}'");
                self.used_words.insert(0, candidate.to_string());
            }
            Err(reason) => {
                log::debug!("Rejected '{candidate}': {reason:?}");
            }
        }
        result
    }

    fn check(&self, candidate: &str) -> SubmitResult {
        if candidate.is_empty() {
            return Err(Rejection::Empty);
        }

        let word = candidate.to_lowercase();
        let start = self.start_word.to_lowercase();

        if !is_possible(&word, &start) {
            return Err(Rejection::NotPossible);
        }
        if !self.is_original(&word) {
            return Err(Rejection::NotOriginal);
        }
        if !self.dictionary.is_real_word(&word, &self.locale) {
            return Err(Rejection::NotReal);
        }
        if candidate.chars().count() < MIN_ANSWER_LENGTH || word == start {
            return Err(Rejection::TooShortOrSame);
        }
        Ok(())
    }

    fn is_original(&self, word: &str) -> bool {
        !self
            .used_words
            .iter()
            .any(|used| used.to_lowercase() == word)
    }

    pub fn start_word(&self) -> &str {
        &self.start_word
    }

    /// Accepted answers, most recent first.
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }
}

/// Multiset check: every letter of `word` must consume a distinct letter of
/// `letters`. Both arguments are expected to be case-folded already.
pub fn is_possible(word: &str, letters: &str) -> bool {
    let mut remaining: Vec<char> = letters.chars().collect();
    for c in word.chars() {
        match remaining.iter().position(|&r| r == c) {
            Some(pos) => {
                remaining.remove(pos);
            }
            None => return false,
        }
    }
    true
}
