//! Spell-check oracle used to decide whether an answer is a real word.
//!
//! [`Dictionary`] is the seam: the game only asks it a yes/no question.
//! [`WordListDictionary`] answers from a plain word list, either the one
//! bundled with the crate or a file such as `/usr/share/dict/words`.

use crate::debug_log;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

pub const EMBEDDED_DICTIONARY: &str = include_str!("resources/dictionary.txt");

pub const DEFAULT_LOCALE: &str = "en";

pub trait Dictionary {
    /// Returns true if `word` is a recognised word in `locale`.
    fn is_real_word(&self, word: &str, locale: &str) -> bool;
}

impl<F> Dictionary for F
where
    F: Fn(&str, &str) -> bool,
{
    fn is_real_word(&self, word: &str, locale: &str) -> bool {
        self(word, locale)
    }
}

/// Case-insensitive word list for a single locale.
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    words: HashSet<String>,
    locale: String,
}

impl WordListDictionary {
    pub fn from_words(data: &str, locale: &str) -> Self {
        let words = data
            .lines()
            .map(str::trim)
            .filter(|word| !word.is_empty())
            .map(str::to_lowercase)
            .collect();
        Self {
            words,
            locale: locale.to_string(),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P, locale: &str) -> io::Result<Self> {
        let data = fs::read_to_string(path)?;
        Ok(Self::from_words(&data, locale))
    }

    /// The English list bundled with the crate.
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(EMBEDDED_DICTIONARY, DEFAULT_LOCALE)
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordListDictionary {
    fn is_real_word(&self, word: &str, locale: &str) -> bool {
        if !same_language(&self.locale, locale) {
            debug_log!(
                "Lookup of '{}' in locale '{}' against '{}' dictionary",
                word,
                locale,
                self.locale
            );
            return false;
        }
        self.words.contains(&word.to_lowercase())
    }
}

/// Compares the primary language subtags, so `en` matches `en-US` and `en_GB`.
fn same_language(a: &str, b: &str) -> bool {
    fn primary(tag: &str) -> &str {
        tag.split(['-', '_']).next().unwrap_or(tag)
    }
    primary(a).eq_ignore_ascii_case(primary(b))
}
