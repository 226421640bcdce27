use crate::dictionary::DEFAULT_LOCALE;
use crate::game_state::{GameInterface, UserAction};
use crate::session::Rejection;
use clap::Parser;
use std::io::{BufRead, ErrorKind, Write};
use std::path::PathBuf;

pub const NEW_ROUND_COMMAND: &str = ":next";
pub const SHOW_WORDS_COMMAND: &str = ":words";
pub const EXIT_COMMAND: &str = ":exit";

/// Word Scramble: find words hidden in a random starting word
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited list of starting words
    #[arg(short = 'i', long = "input")]
    pub start_words_path: Option<PathBuf>,

    /// Path to a newline-delimited dictionary used to check answers
    #[arg(short = 'd', long = "dictionary")]
    pub dictionary_path: Option<PathBuf>,

    /// Locale passed to the dictionary lookup
    #[arg(short = 'l', long = "locale", default_value = DEFAULT_LOCALE)]
    pub locale: String,

    /// Seed for picking starting words, for reproducible rounds
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Strips only the line terminator, so a blank line is an empty answer.
fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .unwrap_or(line)
}

pub fn parse_action(line: &str) -> UserAction {
    let input = strip_line_ending(line);
    match input.trim().to_lowercase().as_str() {
        NEW_ROUND_COMMAND => UserAction::NewRound,
        SHOW_WORDS_COMMAND => UserAction::ShowWords,
        EXIT_COMMAND => UserAction::Exit,
        _ => UserAction::Submit(input.to_string()),
    }
}

/// Line-oriented front-end over any reader/writer pair.
///
/// Write errors are ignored: a closed stdout should not end the round.
pub struct CliInterface<R: BufRead, W: Write> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> CliInterface<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn prompt(&mut self) {
        let _ = write!(self.writer, "> ");
        let _ = self.writer.flush();
    }
}

impl<R: BufRead, W: Write> GameInterface for CliInterface<R, W> {
    fn display_round_start(&mut self, start_word: &str) {
        let _ = writeln!(self.writer, "\nNew round! Your word is: {start_word}");
        let _ = writeln!(
            self.writer,
            "Type an answer, '{NEW_ROUND_COMMAND}' for a new word, '{SHOW_WORDS_COMMAND}' to list your answers, or '{EXIT_COMMAND}' to quit."
        );
    }

    fn read_action(&mut self) -> Option<UserAction> {
        self.prompt();
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => Some(UserAction::Exit),
            Ok(_) => Some(parse_action(&line)),
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                log::warn!("Failed to read input: {e}");
                let _ = writeln!(self.writer, "Could not read that, please try again.");
                None
            }
            Err(e) => {
                log::error!("Input stream failed, ending game: {e}");
                Some(UserAction::Exit)
            }
        }
    }

    fn display_accepted(&mut self, word: &str, used_words: &[String]) {
        let _ = writeln!(
            self.writer,
            "Accepted: {word} ({} found this round)",
            used_words.len()
        );
    }

    fn display_rejection(&mut self, rejection: Rejection, start_word: &str) {
        let _ = writeln!(
            self.writer,
            "{}: {}",
            rejection.title(),
            rejection.message(start_word)
        );
    }

    fn display_used_words(&mut self, used_words: &[String]) {
        if used_words.is_empty() {
            let _ = writeln!(self.writer, "No answers yet.");
            return;
        }
        let _ = writeln!(self.writer, "Your answers ({}):", used_words.len());
        for word in used_words {
            let _ = writeln!(self.writer, "  {word}");
        }
    }

    fn display_exit_message(&mut self) {
        let _ = writeln!(self.writer, "Exiting.");
    }
}
