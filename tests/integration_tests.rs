// Integration tests for word-scramble
// These drive the library the way the binary does: pool -> session -> game loop

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::io::{Cursor, Write};
use word_scramble::cli::CliInterface;
use word_scramble::*;

fn silkworm_pool() -> WordPool {
    WordPool::new(vec!["silkworm".to_string()])
}

fn play(input: &str, pool: &WordPool) -> String {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut session = GameSession::new(WordListDictionary::embedded(), pool, &mut rng);
    let mut interface = CliInterface::new(Cursor::new(input), Vec::new());
    game_loop(&mut session, pool, &mut rng, &mut interface);
    String::from_utf8(interface.into_writer()).unwrap()
}

#[test]
fn test_end_to_end_round() {
    let output = play("silk\nworm\nsilk\nslkw\nsi\nSilkworm\n\n:words\n:exit\n", &silkworm_pool());

    assert!(output.contains("Your word is: silkworm"));
    assert!(output.contains("Accepted: silk (1 found this round)"));
    assert!(output.contains("Accepted: worm (2 found this round)"));
    assert!(output.contains("Word already used: Be more original!"));
    assert!(output.contains("Word not recognized"));
    assert!(output.contains("Word too short"));
    assert!(output.contains("Empty answer"));
    assert!(output.contains("Your answers (2):\n  worm\n  silk\n"));
    assert!(output.ends_with("Exiting.\n"));
}

#[test]
fn test_not_possible_message_names_start_word() {
    let output = play("silkwormx\n", &silkworm_pool());
    assert!(output.contains("Word not possible: You can't spell that word from silkworm!"));
}

#[test]
fn test_new_round_resets_answers() {
    let output = play("silk\n:next\nsilk\n:words\n", &silkworm_pool());
    assert_eq!(output.matches("Your word is: silkworm").count(), 2);
    assert_eq!(output.matches("Accepted: silk (1 found this round)").count(), 2);
    assert!(!output.contains("Word already used"));
}

#[test]
fn test_eof_ends_game() {
    let output = play("", &silkworm_pool());
    assert!(output.ends_with("Exiting.\n"));
}

#[test]
fn test_session_against_embedded_dictionary() {
    let pool = silkworm_pool();
    let mut rng = StdRng::seed_from_u64(1);
    let mut session = GameSession::new(WordListDictionary::embedded(), &pool, &mut rng);

    assert_eq!(session.submit("silk"), Ok(()));
    assert_eq!(session.submit("milk"), Ok(()));
    assert_eq!(session.submit("Worm"), Ok(()));
    assert_eq!(session.submit("wrmk"), Err(Rejection::NotReal));
    assert_eq!(session.submit("rooms"), Err(Rejection::NotPossible));
    assert_eq!(session.used_words(), &["Worm", "milk", "silk"]);
}

#[test]
fn test_locale_mismatch_rejects_everything() {
    let pool = silkworm_pool();
    let mut rng = StdRng::seed_from_u64(1);
    let mut session =
        GameSession::new(WordListDictionary::embedded(), &pool, &mut rng).with_locale("fr");
    assert_eq!(session.submit("silk"), Err(Rejection::NotReal));
}

#[test]
fn test_custom_start_words_file_to_game() {
    let path = std::env::temp_dir().join("word_scramble_integration_start.txt");
    {
        let mut file = File::create(&path).unwrap();
        writeln!(file, "football").unwrap();
        writeln!(file, "football").unwrap();
    }

    let pool = WordPool::load(Some(&path));
    assert_eq!(pool.len(), 2);

    let output = play("ball\nfoot\nballs\n", &pool);
    assert!(output.contains("Your word is: football"));
    assert!(output.contains("Accepted: ball"));
    assert!(output.contains("Accepted: foot"));
    assert!(output.contains("Word not possible"));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_missing_start_words_file_plays_default() {
    let path = std::env::temp_dir().join("word_scramble_integration_missing.txt");
    let _ = std::fs::remove_file(&path);
    let pool = WordPool::load(Some(&path));
    assert_eq!(pool.words(), &["silkworm".to_string()]);

    let output = play(":exit\n", &pool);
    assert!(output.contains("Your word is: silkworm"));
}

#[test]
fn test_custom_dictionary_file() {
    let path = std::env::temp_dir().join("word_scramble_integration_dict.txt");
    {
        let mut file = File::create(&path).unwrap();
        writeln!(file, "silk").unwrap();
    }
    let dictionary = WordListDictionary::from_file(&path, "en").unwrap();
    let pool = silkworm_pool();
    let mut rng = StdRng::seed_from_u64(9);
    let mut session = GameSession::new(dictionary, &pool, &mut rng);

    assert_eq!(session.submit("silk"), Ok(()));
    assert_eq!(session.submit("worm"), Err(Rejection::NotReal));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_every_embedded_start_word_is_playable() {
    let pool = WordPool::new(load_start_words_from_str(
        word_scramble::wordbank::EMBEDDED_START_WORDS,
    ));
    let dictionary = WordListDictionary::embedded();
    for word in pool.words() {
        assert!(word.chars().count() >= 3, "{word} is too short");
        assert!(dictionary.is_real_word(word, "en"), "{word} missing from dictionary");
    }
}

#[test]
fn test_repeated_start_round_single_word_pool() {
    let pool = silkworm_pool();
    let mut rng = StdRng::seed_from_u64(77);
    let mut session = GameSession::new(|_: &str, _: &str| true, &pool, &mut rng);
    for word in ["silk", "worm", "milk"] {
        session.submit(word).unwrap();
        session.start_round(&pool, &mut rng);
        assert_eq!(session.start_word(), "silkworm");
        assert!(session.used_words().is_empty());
    }
}
