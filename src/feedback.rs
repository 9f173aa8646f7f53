//! Feedback calculation for Wordle guesses.
//!
//! This module computes the feedback pattern (green/yellow/gray) a guess
//! receives against a secret word, following Wordle's duplicate-letter rules.

use std::fmt;

use crate::error::{Error, Result};
use crate::word::Word;
use crate::MAX_WORD_LENGTH;

/// Represents the feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Letter not in word, or all its occurrences already accounted for (gray)
    Absent,
    /// Letter in word but in another position (yellow)
    Present,
    /// Letter in the right position (green)
    Correct,
}

impl Feedback {
    /// Base-3 digit used in [`FeedbackPattern`] codes
    pub fn digit(self) -> u32 {
        match self {
            Feedback::Absent => 0,
            Feedback::Present => 1,
            Feedback::Correct => 2,
        }
    }

    fn from_digit(digit: u32) -> Self {
        match digit {
            0 => Feedback::Absent,
            1 => Feedback::Present,
            _ => Feedback::Correct,
        }
    }

    /// Convert to a tile for display
    pub fn to_char(self) -> char {
        match self {
            Feedback::Correct => '🟩',
            Feedback::Present => '🟨',
            Feedback::Absent => '⬛',
        }
    }

    /// Parse from a character (g=green, y=yellow, b=black/gray)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'g' | '2' => Some(Feedback::Correct),
            'y' | '1' => Some(Feedback::Present),
            'b' | 'x' | '0' => Some(Feedback::Absent),
            _ => None,
        }
    }
}

/// A complete feedback pattern, one [`Feedback`] per letter of the guess.
///
/// Encoded as a base-3 integer so it hashes and compares as a single word:
/// `code = d0 + 3*d1 + 9*d2 + ...` where `di` is the digit of position `i`.
/// The length is kept alongside so patterns of different word lengths never
/// compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackPattern {
    code: u32,
    len: u8,
}

impl FeedbackPattern {
    /// Create a new pattern from individual feedback values.
    ///
    /// # Panics
    ///
    /// Panics if more than [`MAX_WORD_LENGTH`] values are given.
    pub fn new(feedbacks: &[Feedback]) -> Self {
        assert!(
            feedbacks.len() <= MAX_WORD_LENGTH,
            "pattern longer than {MAX_WORD_LENGTH} positions"
        );

        let mut code = 0;
        let mut multiplier = 1;
        for fb in feedbacks {
            code += fb.digit() * multiplier;
            multiplier *= 3;
        }
        Self {
            code,
            len: feedbacks.len() as u8,
        }
    }

    /// The winning pattern for words of `len` letters
    pub fn all_correct(len: usize) -> Self {
        Self::new(&vec![Feedback::Correct; len])
    }

    pub fn code(self) -> u32 {
        self.code
    }

    pub fn len(self) -> usize {
        self.len as usize
    }

    pub fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Check if this pattern represents a win (all correct)
    pub fn is_win(self) -> bool {
        // every digit is 2, so the code is 3^len - 1
        self.code == 3u32.pow(self.len as u32) - 1
    }

    /// Convert pattern to per-position feedbacks
    pub fn feedbacks(self) -> Vec<Feedback> {
        let mut code = self.code;
        (0..self.len)
            .map(|_| {
                let fb = Feedback::from_digit(code % 3);
                code /= 3;
                fb
            })
            .collect()
    }

    /// Parse a pattern from a string like "gybbb" or "21000"
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let invalid = || Error::InvalidPattern {
            pattern: s.to_string(),
        };

        if s.is_empty() || s.chars().count() > MAX_WORD_LENGTH {
            return Err(invalid());
        }
        let feedbacks = s
            .chars()
            .map(Feedback::from_char)
            .collect::<Option<Vec<_>>>()
            .ok_or_else(invalid)?;

        Ok(Self::new(&feedbacks))
    }

    /// Digits form, e.g. "21000"
    pub fn to_digits(self) -> String {
        self.feedbacks()
            .into_iter()
            .map(|fb| char::from(b'0' + fb.digit() as u8))
            .collect()
    }

    /// Display as emoji string
    pub fn to_emoji_string(self) -> String {
        self.feedbacks().into_iter().map(Feedback::to_char).collect()
    }

    /// Calculate the feedback pattern for a guess against a secret.
    ///
    /// Greens are assigned first and consume their secret letter; yellows are
    /// then handed out left to right from the secret letters still unmatched.
    /// Both slices must be uppercase ASCII of the same length.
    fn calculate(guess: &[u8], secret: &[u8]) -> Self {
        let mut feedback = [Feedback::Absent; MAX_WORD_LENGTH];
        let mut unmatched = [0u8; 26];

        for (i, (&g, &s)) in guess.iter().zip(secret).enumerate() {
            if g == s {
                feedback[i] = Feedback::Correct;
            } else {
                unmatched[(s - b'A') as usize] += 1;
            }
        }

        for (i, &g) in guess.iter().enumerate() {
            if feedback[i] != Feedback::Correct {
                let remaining = &mut unmatched[(g - b'A') as usize];
                if *remaining > 0 {
                    feedback[i] = Feedback::Present;
                    *remaining -= 1;
                }
            }
        }

        Self::new(&feedback[..guess.len()])
    }
}

impl fmt::Display for FeedbackPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji_string())
    }
}

/// Feedback `guess` receives when the secret is `secret`.
///
/// # Panics
///
/// Panics if the two words differ in length. Use [`try_evaluate`] when the
/// lengths are not already known to match.
pub fn evaluate(guess: &Word, secret: &Word) -> FeedbackPattern {
    assert_eq!(
        guess.len(),
        secret.len(),
        "guess {guess} and secret {secret} differ in length"
    );
    FeedbackPattern::calculate(guess.as_bytes(), secret.as_bytes())
}

/// Like [`evaluate`], but reports a length mismatch instead of panicking.
pub fn try_evaluate(guess: &Word, secret: &Word) -> Result<FeedbackPattern> {
    if guess.len() != secret.len() {
        return Err(Error::LengthMismatch {
            expected: guess.len(),
            found: secret.to_string(),
        });
    }
    Ok(FeedbackPattern::calculate(guess.as_bytes(), secret.as_bytes()))
}
