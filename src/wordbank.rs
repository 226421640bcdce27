use crate::info_log;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::ops::Deref;
use std::path::{Path, PathBuf};

pub const EMBEDDED_START_WORDS: &str = include_str!("resources/start.txt");

/// Starting word used when no list could be loaded.
pub const DEFAULT_START_WORD: &str = "silkworm";

const START_WORDS_FILE: &str = "start.txt";
const APP_DIR: &str = "word-scramble";

pub fn load_start_words_from_str(data: &str) -> Vec<String> {
    data.lines()
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn load_start_words_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    Ok(words)
}

/// Per-user override for the bundled start words, e.g.
/// `~/.local/share/word-scramble/start.txt` on Linux.
#[must_use]
pub fn user_start_words_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR).join(START_WORDS_FILE))
}

/// Candidate starting words for a game. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPool {
    words: Vec<String>,
}

impl WordPool {
    /// Builds a pool from `words`, substituting `[DEFAULT_START_WORD]` when
    /// the list is empty.
    #[must_use]
    pub fn new(words: Vec<String>) -> Self {
        if words.is_empty() {
            log::warn!("No start words available, falling back to '{DEFAULT_START_WORD}'");
            return Self::fallback();
        }
        Self { words }
    }

    #[must_use]
    pub fn fallback() -> Self {
        Self {
            words: vec![DEFAULT_START_WORD.to_string()],
        }
    }

    /// Loads the pool from `path` if given, otherwise from the user override
    /// file if one exists, otherwise from the embedded list.
    ///
    /// An unreadable or empty explicit file yields the fallback pool rather
    /// than an error.
    #[must_use]
    pub fn load(path: Option<&Path>) -> Self {
        if let Some(path) = path {
            return Self::new(read_or_warn(path));
        }

        if let Some(user_path) = user_start_words_path()
            && user_path.is_file()
        {
            info_log!("Loading start words from {}", user_path.display());
            return Self::new(read_or_warn(&user_path));
        }

        Self::new(load_start_words_from_str(EMBEDDED_START_WORDS))
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl Default for WordPool {
    fn default() -> Self {
        Self::load(None)
    }
}

impl Deref for WordPool {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.words
    }
}

fn read_or_warn(path: &Path) -> Vec<String> {
    match load_start_words_from_file(path) {
        Ok(words) => {
            info_log!("Loaded {} start words from {}", words.len(), path.display());
            words
        }
        Err(e) => {
            log::warn!("Failed to load start words from '{}': {e}", path.display());
            Vec::new()
        }
    }
}
