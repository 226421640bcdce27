// Library interface for word-scramble
// The binary and the integration tests both go through these modules.

pub mod cli;
pub mod dictionary;
pub mod game_state;
pub mod logging;
pub mod session;
pub mod wordbank;

pub use dictionary::{Dictionary, WordListDictionary};
pub use game_state::{GameInterface, UserAction, game_loop};
pub use session::{GameSession, Rejection, SubmitResult, is_possible};
pub use wordbank::{WordPool, load_start_words_from_file, load_start_words_from_str};
