use crate::dictionary::Dictionary;
use crate::info_log;
use crate::session::{GameSession, Rejection};
use crate::wordbank::WordPool;
use rand::Rng;

/// What the player asked for on their turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Submit(String),
    NewRound,
    ShowWords,
    Exit,
}

/// Front-end hooks used by [`game_loop`].
pub trait GameInterface {
    fn display_round_start(&mut self, start_word: &str);
    /// `None` means the input was unusable and the loop should ask again.
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_accepted(&mut self, word: &str, used_words: &[String]);
    fn display_rejection(&mut self, rejection: Rejection, start_word: &str);
    fn display_used_words(&mut self, used_words: &[String]);
    fn display_exit_message(&mut self);
}

enum LoopControl {
    Continue,
    Exit,
}

pub fn game_loop<D, R, I>(
    session: &mut GameSession<D>,
    pool: &WordPool,
    rng: &mut R,
    interface: &mut I,
) where
    D: Dictionary,
    R: Rng + ?Sized,
    I: GameInterface + ?Sized,
{
    info_log!("Game loop started with {} start words", pool.len());
    interface.display_round_start(session.start_word());

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };
        if let LoopControl::Exit = handle_action(action, session, pool, rng, interface) {
            break;
        }
    }
}

fn handle_action<D, R, I>(
    action: UserAction,
    session: &mut GameSession<D>,
    pool: &WordPool,
    rng: &mut R,
    interface: &mut I,
) -> LoopControl
where
    D: Dictionary,
    R: Rng + ?Sized,
    I: GameInterface + ?Sized,
{
    match action {
        UserAction::Submit(candidate) => {
            match session.submit(&candidate) {
                Ok(()) => interface.display_accepted(&candidate, session.used_words()),
                Err(rejection) => interface.display_rejection(rejection, session.start_word()),
            }
            LoopControl::Continue
        }
        UserAction::NewRound => {
            session.start_round(pool, rng);
            interface.display_round_start(session.start_word());
            LoopControl::Continue
        }
        UserAction::ShowWords => {
            interface.display_used_words(session.used_words());
            LoopControl::Continue
        }
        UserAction::Exit => {
            interface.display_exit_message();
            LoopControl::Exit
        }
    }
}
