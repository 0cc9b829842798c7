// Integration tests for the wordle-filter engine
// These tests exercise the classifier, the composed rule, and the filter
// together through the public API.

use std::io::Cursor;
use wordle_filter::Feedback::{Absent, Correct, Present};
use wordle_filter::*;

fn dictionary(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[test]
fn test_rule_is_idempotent_over_the_same_history() {
    let history = [
        Guess::scored("crane", "slate").unwrap(),
        Guess::scored("crane", "corgi").unwrap(),
    ];

    let first = Rule::from_history(&history);
    let second = Rule::from_history(&history);

    // Structural form reproduces exactly, and so does classification.
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
    for word in ["crane", "slate", "corgi", "queue", "brine", "crank"] {
        assert_eq!(first.matches(word), second.matches(word), "word {word}");
    }
}

#[test]
fn test_filter_never_resuggests_a_guessed_word() {
    let dict = dictionary(&["crane", "brain", "train", "grain", "stain"]);
    let mut history = Vec::new();

    for guess in ["crane", "train", "grain"] {
        history.push(Guess::scored("brain", guess).unwrap());
        let candidates = filter_candidates(&dict, &history);
        for tried in &history {
            assert!(
                !candidates.iter().any(|c| c.eq_ignore_ascii_case(&tried.word)),
                "'{}' was suggested again",
                tried.word
            );
        }
    }
}

#[test]
fn test_promotion_after_earlier_gray_turn() {
    // 't' is gray on turn one and yellow on turn two. The later
    // classification must win: candidates containing 't' stay in play.
    let history = [
        Guess::new("tubas", [Absent; 5]),
        Guess::new("moist", [Absent, Absent, Absent, Absent, Present]),
    ];

    let rule = Rule::from_history(&history);
    // 'tenth' has a 't' away from the last position and none of u/b/a/s/m/o/i.
    assert!(rule.matches("tenth"));
    assert!(!rule.matches("burnt")); // banned 'u', and 't' still last

    let dict = dictionary(&["tenth", "tubas", "burnt", "crwth"]);
    let candidates = filter_candidates(&dict, &history);
    assert!(candidates.contains(&"tenth".to_string()));
    assert!(!candidates.contains(&"tubas".to_string()));
}

#[test]
fn test_duplicate_letter_classification_apple_paper() {
    let outcomes = classify("apple", "paper").unwrap();
    assert_eq!(outcomes, [Present, Present, Correct, Present, Absent]);
}

#[test]
fn test_all_absent_guess_excludes_its_letters() {
    let outcomes = classify("shlep", "train").unwrap();
    assert_eq!(outcomes, [Absent; 5]);

    let dict = dictionary(&["queue", "train", "trace", "saint", "chess"]);
    let history = [Guess::scored("shlep", "train").unwrap()];
    let candidates = filter_candidates(&dict, &history);

    assert!(candidates.contains(&"queue".to_string()));
    assert!(candidates.contains(&"chess".to_string()));
    // 'train' was guessed; the others carry t/r/a/i/n.
    assert!(!candidates.contains(&"train".to_string()));
    assert!(!candidates.contains(&"trace".to_string()));
    assert!(!candidates.contains(&"saint".to_string()));
}

#[test]
fn test_all_correct_guess_reduces_to_positional_rule() {
    let history = [Guess::scored("apple", "apple").unwrap()];
    let rule = Rule::from_history(&history);

    assert_eq!(
        rule.constraints(),
        &[
            Constraint::At { position: 0, letter: 'a' },
            Constraint::At { position: 1, letter: 'p' },
            Constraint::At { position: 2, letter: 'p' },
            Constraint::At { position: 3, letter: 'l' },
            Constraint::At { position: 4, letter: 'e' },
            Constraint::ExactLength(5),
        ]
    );
    assert_eq!(rule.to_string(), "(?i)^(?=.{0}a)(?=.{1}p)(?=.{2}p)(?=.{3}l)(?=.{4}e).{5}$");
}

#[test]
fn test_turn_order_changes_form_but_not_classification() {
    let first = Guess::scored("brain", "crane").unwrap();
    let second = Guess::scored("brain", "slate").unwrap();

    let forwards = Rule::from_history(&[first.clone(), second.clone()]);
    let backwards = Rule::from_history(&[second, first]);

    for word in ["brain", "crane", "slate", "bland", "gravy", "drama", "queue"] {
        assert_eq!(
            forwards.matches(word),
            backwards.matches(word),
            "classification diverged on '{word}'"
        );
    }
}

#[test]
fn test_same_guess_mixed_duplicate_promotes_in_index_order() {
    // secret "super", guess "paper": the first 'p' is gray, the third is
    // green. Replayed in index order the green wins, so 'p' must not be
    // excluded and the secret itself still matches.
    let outcomes = classify("super", "paper").unwrap();
    assert_eq!(outcomes, [Absent, Absent, Correct, Correct, Correct]);

    let history = [Guess::new("paper", outcomes)];
    let rule = Rule::from_history(&history);
    assert!(rule.matches("super"));
    assert_eq!(rule.to_string(), "(?i)^(?=.{2}p)(?=.{3}e)(?=.{4}r)(?!.*[a]).{5}$");
}

#[test]
fn test_same_guess_three_repeats_last_classification_demotes() {
    // secret "super", guess "puppy": 'p' is gray at 0, green at 2, gray
    // again at 3. The chronologically last event re-demotes the letter, so
    // it lands in the exclusion set.
    let outcomes = classify("super", "puppy").unwrap();
    assert_eq!(outcomes, [Absent, Correct, Correct, Absent, Absent]);

    let history = [Guess::new("puppy", outcomes)];
    let rule = Rule::from_history(&history);
    let Some(Constraint::ExcludesAll(letters)) = rule
        .constraints()
        .iter()
        .find(|c| matches!(c, Constraint::ExcludesAll(_)))
    else {
        panic!("expected a global exclusion fragment");
    };
    assert!(letters.contains(&'p'));
}

#[test]
fn test_wordbank_to_filter_pipeline() {
    let wordbank_data = "CRANE\nslate\n raise \nstare\ncranes\ncr4ne\n";
    let wordbank = load_wordbank_from_str(wordbank_data);
    assert_eq!(wordbank, dictionary(&["crane", "slate", "raise", "stare"]));

    let history = [Guess::scored("stare", "crane").unwrap()];
    let candidates = filter_candidates(&wordbank, &history);
    assert_eq!(candidates, dictionary(&["stare"]));
}

#[test]
fn test_answer_history_feeds_secret_pool() {
    let csv = "2021-06-19,cigar\n2021-06-20,rebut\ngarbage line\n2021-06-21,sissy\n";
    let answers = load_answers_from_str(csv);
    assert_eq!(answers, dictionary(&["cigar", "rebut", "sissy"]));
}

#[test]
fn test_end_to_end_game_workflow() {
    // Simulate a full game: a wrong guess narrows the pool, then the
    // player finds the secret.
    let wordbank = dictionary(&["crane", "slate", "trace", "place", "grace"]);
    let input = "crane\nslate\n";
    let outcome = play_game("slate", &wordbank, Cursor::new(input)).unwrap();
    assert_eq!(outcome, GameOutcome::Solved(2));
}

#[test]
fn test_game_rejects_words_outside_dictionary() {
    let wordbank = dictionary(&["crane", "slate"]);
    // 'queue' is 5 letters but not in the bank; it must not consume a turn.
    let input = "queue\nslate\n";
    let outcome = play_game("slate", &wordbank, Cursor::new(input)).unwrap();
    assert_eq!(outcome, GameOutcome::Solved(1));
}
