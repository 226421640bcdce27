use anyhow::Context;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use word_scramble::cli::{CliInterface, parse_cli};
use word_scramble::dictionary::WordListDictionary;
use word_scramble::logging::init_logging;
use word_scramble::{GameSession, WordPool, game_loop};

fn main() -> anyhow::Result<()> {
    let cli = parse_cli();
    init_logging(cli.verbose);

    let pool = WordPool::load(cli.start_words_path.as_deref());
    log::info!("Loaded {} start words", pool.len());

    let dictionary = match &cli.dictionary_path {
        Some(path) => WordListDictionary::from_file(path, &cli.locale)
            .with_context(|| format!("Failed to load dictionary from '{}'", path.display()))?,
        None => WordListDictionary::embedded(),
    };
    log::info!(
        "Dictionary has {} words ({})",
        dictionary.len(),
        dictionary.locale()
    );

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut session = GameSession::new(dictionary, &pool, &mut rng).with_locale(&cli.locale);
    let stdin = io::stdin();
    let mut interface = CliInterface::new(stdin.lock(), io::stdout());
    game_loop(&mut session, &pool, &mut rng, &mut interface);
    Ok(())
}
