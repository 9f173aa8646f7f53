//! Game driver: plays the solver against a known secret and keeps score.

use rand::seq::SliceRandom;
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{info, trace};

use crate::error::{Error, Result};
use crate::feedback::{evaluate, FeedbackPattern};
use crate::solver::{Solver, Turn};
use crate::vocabulary::Vocabulary;
use crate::word::Word;
use crate::DEFAULT_MAX_ATTEMPTS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_attempts: usize,
    /// How many trailing attempts may only guess words that can still be the
    /// secret.
    pub candidate_only_attempts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            candidate_only_attempts: 1,
        }
    }
}

impl GameConfig {
    /// Whether the 1-based `attempt` falls in the candidate-only window.
    pub fn is_final_attempt(&self, attempt: usize) -> bool {
        attempt > self.max_attempts.saturating_sub(self.candidate_only_attempts)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub secret: Word,
    pub turns: Vec<Turn>,
}

impl GameOutcome {
    pub fn solved(&self) -> bool {
        self.turns.last().map_or(false, |(_, pattern)| pattern.is_win())
    }

    /// Number of guesses used, if the secret was found.
    pub fn attempts(&self) -> Option<usize> {
        self.solved().then_some(self.turns.len())
    }
}

/// Play one game against `secret`.
pub fn play(solver: &Solver<'_>, secret: &Word, config: &GameConfig) -> Result<GameOutcome> {
    if !solver.vocabulary().contains(secret) {
        return Err(Error::NotInVocabulary {
            word: secret.to_string(),
        });
    }

    let mut turns: Vec<Turn> = Vec::with_capacity(config.max_attempts);
    for attempt in 1..=config.max_attempts {
        let guess = solver.choose_guess(&turns, config.is_final_attempt(attempt))?;
        let pattern = evaluate(guess, secret);
        trace!(%secret, attempt, %guess, pattern = %pattern.to_digits(), "played");

        turns.push((guess.clone(), pattern));
        if pattern.is_win() {
            break;
        }
    }

    Ok(GameOutcome {
        secret: secret.clone(),
        turns,
    })
}

/// Draw `n` secrets uniformly from `words`, with replacement.
///
/// A seeded `rng` always yields the same secrets.
pub fn draw_secrets<R: Rng + ?Sized>(words: &[Word], n: usize, rng: &mut R) -> Vec<Word> {
    (0..n).filter_map(|_| words.choose(rng).cloned()).collect()
}

/// Score a guess typed by a human player against `secret`.
///
/// The guess has to be a well-formed word of the vocabulary's length that the
/// vocabulary knows about.
pub fn judge_guess(
    vocabulary: &Vocabulary,
    secret: &Word,
    guess: &str,
) -> Result<(Word, FeedbackPattern)> {
    let guess = Word::new(guess)?;
    if guess.len() != vocabulary.word_len() {
        return Err(Error::LengthMismatch {
            expected: vocabulary.word_len(),
            found: guess.to_string(),
        });
    }
    if !vocabulary.contains(&guess) {
        return Err(Error::NotInVocabulary {
            word: guess.to_string(),
        });
    }

    let pattern = evaluate(&guess, secret);
    Ok((guess, pattern))
}

/// Win/loss record over a series of games.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    pub played: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// `distribution[i]` counts games won in `i + 1` guesses.
    pub distribution: Vec<usize>,
}

impl Stats {
    pub fn new(max_attempts: usize) -> Self {
        Self {
            distribution: vec![0; max_attempts],
            ..Self::default()
        }
    }

    pub fn record(&mut self, outcome: &GameOutcome) {
        self.played += 1;
        match outcome.attempts() {
            Some(attempts) => {
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);
                if attempts > self.distribution.len() {
                    self.distribution.resize(attempts, 0);
                }
                self.distribution[attempts - 1] += 1;
            }
            None => self.current_streak = 0,
        }
    }

    pub fn wins(&self) -> usize {
        self.distribution.iter().sum()
    }

    pub fn losses(&self) -> usize {
        self.played - self.wins()
    }

    pub fn win_percentage(&self) -> f64 {
        if self.played == 0 {
            return 0.0;
        }
        self.wins() as f64 / self.played as f64 * 100.0
    }

    pub fn mean_guesses(&self) -> Option<f64> {
        let wins = self.wins();
        if wins == 0 {
            return None;
        }
        let total: usize = self
            .distribution
            .iter()
            .enumerate()
            .map(|(i, count)| (i + 1) * count)
            .sum();
        Some(total as f64 / wins as f64)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Benchmark {
    pub stats: Stats,
    /// Secrets not found within the attempt budget, in play order.
    pub failures: Vec<Word>,
}

/// Play one game per secret. Games run in parallel but are recorded in the
/// order of `secrets`.
pub fn play_all(solver: &Solver<'_>, secrets: &[Word], config: &GameConfig) -> Result<Benchmark> {
    #[cfg(feature = "parallel")]
    let games = secrets.par_iter();

    #[cfg(not(feature = "parallel"))]
    let games = secrets.iter();

    let outcomes = games
        .map(|secret| play(solver, secret, config))
        .collect::<Result<Vec<_>>>()?;

    let mut stats = Stats::new(config.max_attempts);
    let mut failures = Vec::new();
    for outcome in &outcomes {
        stats.record(outcome);
        if !outcome.solved() {
            failures.push(outcome.secret.clone());
        }
    }

    info!(
        played = stats.played,
        wins = stats.wins(),
        mean = stats.mean_guesses().unwrap_or_default(),
        "batch finished"
    );

    Ok(Benchmark { stats, failures })
}
