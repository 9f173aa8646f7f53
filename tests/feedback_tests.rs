use rstest::rstest;
use shannon_wordle::{evaluate, try_evaluate, Error, Feedback, FeedbackPattern, Word};

fn word(s: &str) -> Word {
    Word::new(s).unwrap()
}

fn pattern(s: &str) -> FeedbackPattern {
    FeedbackPattern::parse(s).unwrap()
}

#[test]
fn test_all_correct() {
    let p = evaluate(&word("crane"), &word("crane"));
    assert!(p.is_win());
    assert_eq!(p, FeedbackPattern::all_correct(5));
}

#[test]
fn test_all_absent() {
    let p = evaluate(&word("quick"), &word("dream"));
    assert_eq!(p.feedbacks(), vec![Feedback::Absent; 5]);
}

#[test]
fn test_mixed_feedback() {
    let feedbacks = evaluate(&word("crane"), &word("charm")).feedbacks();
    assert_eq!(
        feedbacks,
        [
            Feedback::Correct,
            Feedback::Present,
            Feedback::Correct,
            Feedback::Absent,
            Feedback::Absent,
        ]
    );
}

#[rstest]
#[case::speed_against_erase("speed", "erase", "ybyyb")]
#[case::guess_repeats_letter("speed", "creep", "byggb")]
#[case::secret_repeats_letter("arose", "creep", "bgbby")]
#[case::excess_guess_letters("geese", "creep", "bygbb")]
#[case::second_copy_absent("speed", "abide", "bbyby")]
#[case::correct_copy_takes_priority("level", "hotel", "bbbgg")]
#[case::no_greens("sores", "those", "yybyb")]
#[case::trailing_excess("abcdd", "abcde", "ggggb")]
#[case::both_sides_repeat("aabab", "aaabb", "ggyyg")]
#[case::leftmost_wins("aabab", "bxaxx", "ybybb")]
#[case::green_consumes("cacbb", "abcba", "byggy")]
fn test_duplicate_letter_rules(#[case] guess: &str, #[case] secret: &str, #[case] expected: &str) {
    let expected = pattern(expected);
    assert_eq!(evaluate(&word(guess), &word(secret)), expected);
}

#[test]
fn test_case_insensitive_words() {
    assert_eq!(
        evaluate(&word("Speed"), &word("ABIDE")),
        evaluate(&word("SPEED"), &word("abide"))
    );
}

#[test]
fn test_other_word_lengths() {
    assert_eq!(evaluate(&word("eve"), &word("bee")), pattern("ybg"));
    assert!(evaluate(&word("wordles"), &word("wordles")).is_win());
}

#[test]
fn test_marks_never_exceed_secret_letters() {
    let words = [
        "speed", "erase", "geese", "creep", "eerie", "level", "hotel", "abide", "those", "sores",
    ];
    for g in words {
        for s in words {
            let (guess, secret) = (word(g), word(s));
            let feedbacks = evaluate(&guess, &secret).feedbacks();
            for letter in guess.as_bytes() {
                let marked = guess
                    .as_bytes()
                    .iter()
                    .zip(&feedbacks)
                    .filter(|&(b, fb)| b == letter && *fb != Feedback::Absent)
                    .count();
                let available = secret.as_bytes().iter().filter(|&b| b == letter).count();
                assert!(marked <= available, "{g} vs {s}: too many marks");
            }
        }
    }
}

#[test]
fn test_try_evaluate_length_mismatch() {
    let err = try_evaluate(&word("crane"), &word("cranes")).unwrap_err();
    assert!(matches!(err, Error::LengthMismatch { expected: 5, .. }));
    assert!(try_evaluate(&word("crane"), &word("trace")).is_ok());
}

#[test]
#[should_panic]
fn test_evaluate_length_mismatch_panics() {
    evaluate(&word("crane"), &word("cranes"));
}

#[test]
fn test_pattern_encoding() {
    assert_eq!(pattern("gybbb").code(), 2 + 3);
    assert_eq!(FeedbackPattern::all_correct(5).code(), 242);
    assert_eq!(pattern("gybbb").to_digits(), "21000");
}

#[test]
fn test_pattern_parse() {
    let p = pattern("gybbb");
    assert_eq!(
        p.feedbacks(),
        [
            Feedback::Correct,
            Feedback::Present,
            Feedback::Absent,
            Feedback::Absent,
            Feedback::Absent,
        ]
    );
    assert_eq!(p, pattern("21000"));
    assert_eq!(p, pattern(" GYXBB\n"));
    assert_eq!(pattern("gybbb1").len(), 6);
}

#[test]
fn test_pattern_parse_invalid() {
    assert!(FeedbackPattern::parse("").is_err());
    assert!(FeedbackPattern::parse("gybzb").is_err());
    assert!(FeedbackPattern::parse(&"g".repeat(21)).is_err());
}

#[test]
fn test_patterns_of_different_lengths_differ() {
    assert_ne!(pattern("bbbb"), pattern("bbbbb"));
    assert!(!pattern("ggggb").is_win());
}

#[test]
fn test_emoji_display() {
    let p = FeedbackPattern::new(&[
        Feedback::Correct,
        Feedback::Present,
        Feedback::Absent,
        Feedback::Absent,
        Feedback::Correct,
    ]);
    assert_eq!(p.to_emoji_string(), "🟩🟨⬛⬛🟩");
    assert_eq!(p.to_string(), "🟩🟨⬛⬛🟩");
}
