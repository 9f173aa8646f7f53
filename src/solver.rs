//! Entropy-maximizing guess selection.
//!
//! Each turn the solver replays the whole guess history against every
//! vocabulary word to find the candidates still consistent with it, then picks
//! the guess whose feedback splits those candidates most evenly, i.e. the one
//! with the highest Shannon entropy over its feedback patterns.

use fxhash::{FxHashMap, FxHashSet};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use crate::error::{Error, Result};
use crate::feedback::{evaluate, FeedbackPattern};
use crate::vocabulary::Vocabulary;
use crate::word::Word;
use crate::DEFAULT_OPENING;

/// One past attempt: the word guessed and the feedback it received.
pub type Turn = (Word, FeedbackPattern);

/// Result of analyzing a potential guess
#[derive(Debug, Clone, PartialEq)]
pub struct GuessAnalysis {
    pub word: Word,
    pub entropy: f64,
    pub expected_remaining: f64,
    pub is_candidate: bool,
}

impl GuessAnalysis {
    fn new(word: &Word, entropy: f64, candidates: usize, is_candidate: bool) -> Self {
        Self {
            word: word.clone(),
            entropy,
            expected_remaining: candidates as f64 / entropy.exp2(),
            is_candidate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// First guess of every game. `None` computes it once from the vocabulary.
    pub opening: Option<Word>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            opening: Word::new(DEFAULT_OPENING).ok(),
        }
    }
}

impl SolverConfig {
    pub fn with_opening(opening: Word) -> Self {
        Self {
            opening: Some(opening),
        }
    }

    pub fn computed_opening() -> Self {
        Self { opening: None }
    }
}

/// Count how many `targets` produce each feedback pattern for `guess`.
pub fn frequency_table(guess: &Word, targets: &[&Word]) -> FxHashMap<FeedbackPattern, u32> {
    let mut table = FxHashMap::default();
    for target in targets {
        *table.entry(evaluate(guess, target)).or_insert(0) += 1;
    }
    table
}

/// Shannon entropy, in bits, of the feedback `guess` produces over `targets`,
/// with every target taken as equally likely.
pub fn entropy(guess: &Word, targets: &[&Word]) -> f64 {
    if targets.len() <= 1 {
        return 0.0;
    }

    // summed in count order so equal distributions give bit-identical entropies
    let mut counts = frequency_table(guess, targets)
        .into_values()
        .collect::<Vec<_>>();
    counts.sort_unstable();

    let n = targets.len() as f64;
    counts
        .into_iter()
        .map(|count| {
            let p = count as f64 / n;
            -p * p.log2()
        })
        .sum()
}

/// Keep the higher entropy; on a tie keep the earlier pool index.
///
/// Commutative and associative, so any reduction order yields the same winner
/// as a left-to-right scan that only replaces on strictly greater entropy.
fn keep_first_max(a: (usize, f64), b: (usize, f64)) -> (usize, f64) {
    if b.1 > a.1 {
        b
    } else if a.1 > b.1 {
        a
    } else if b.0 < a.0 {
        b
    } else {
        a
    }
}

/// Pool index and entropy of the most informative guess.
fn most_informative(pool: &[&Word], candidates: &[&Word]) -> Option<(usize, f64)> {
    #[cfg(feature = "parallel")]
    let best = pool
        .par_iter()
        .enumerate()
        .map(|(i, guess)| (i, entropy(guess, candidates)))
        .reduce_with(keep_first_max);

    #[cfg(not(feature = "parallel"))]
    let best = pool
        .iter()
        .enumerate()
        .map(|(i, guess)| (i, entropy(guess, candidates)))
        .reduce(keep_first_max);

    best
}

/// Entropy of every pool word, in pool order.
fn score_all(pool: &[&Word], candidates: &[&Word]) -> Vec<f64> {
    #[cfg(feature = "parallel")]
    let guesses = pool.par_iter();

    #[cfg(not(feature = "parallel"))]
    let guesses = pool.iter();

    guesses.map(|guess| entropy(guess, candidates)).collect()
}

/// The entropy solver.
///
/// Holds no per-game state: the history is passed in on every call, so one
/// solver can serve any number of concurrent games over the same vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct Solver<'v> {
    vocabulary: &'v Vocabulary,
    opening: &'v Word,
}

impl<'v> Solver<'v> {
    /// Create a solver, checking that a configured opening word belongs to
    /// the vocabulary, or computing one when none is configured.
    pub fn new(vocabulary: &'v Vocabulary, config: SolverConfig) -> Result<Self> {
        let opening = match config.opening {
            Some(word) => {
                if word.len() != vocabulary.word_len() {
                    return Err(Error::LengthMismatch {
                        expected: vocabulary.word_len(),
                        found: word.to_string(),
                    });
                }
                let index = vocabulary
                    .position(&word)
                    .ok_or_else(|| Error::NotInVocabulary {
                        word: word.to_string(),
                    })?;
                &vocabulary.words()[index]
            }
            None => {
                let (index, entropy) = Self::score_opening(vocabulary)?;
                let word = &vocabulary.words()[index];
                debug!(opening = %word, entropy, "computed opening word");
                word
            }
        };

        Ok(Self {
            vocabulary,
            opening,
        })
    }

    pub fn vocabulary(&self) -> &'v Vocabulary {
        self.vocabulary
    }

    pub fn opening(&self) -> &'v Word {
        self.opening
    }

    fn score_opening(vocabulary: &Vocabulary) -> Result<(usize, f64)> {
        let all = vocabulary.words().iter().collect::<Vec<_>>();
        most_informative(&all, &all).ok_or(Error::EmptyVocabulary)
    }

    /// The opening word that maximizes entropy over the whole vocabulary,
    /// regardless of the configured one.
    pub fn best_opening(&self) -> Result<GuessAnalysis> {
        let (index, entropy) = Self::score_opening(self.vocabulary)?;
        Ok(GuessAnalysis::new(
            &self.vocabulary.words()[index],
            entropy,
            self.vocabulary.len(),
            true,
        ))
    }

    /// Vocabulary words consistent with every turn of `history`, in
    /// vocabulary order.
    pub fn candidates(&self, history: &[Turn]) -> Result<Vec<&'v Word>> {
        let word_len = self.vocabulary.word_len();
        for (guess, pattern) in history {
            if guess.len() != word_len {
                return Err(Error::LengthMismatch {
                    expected: word_len,
                    found: guess.to_string(),
                });
            }
            if pattern.len() != word_len {
                return Err(Error::LengthMismatch {
                    expected: word_len,
                    found: pattern.to_digits(),
                });
            }
        }

        Ok(self
            .vocabulary
            .words()
            .iter()
            .filter(|candidate| {
                history
                    .iter()
                    .all(|(guess, pattern)| evaluate(guess, candidate) == *pattern)
            })
            .collect())
    }

    /// Candidates for the final attempt, the whole vocabulary otherwise.
    fn guess_pool(&self, candidates: &[&'v Word], is_final_attempt: bool) -> Vec<&'v Word> {
        if is_final_attempt {
            candidates.to_vec()
        } else {
            self.vocabulary.words().iter().collect()
        }
    }

    /// Pick the next guess.
    ///
    /// Returns the opening word on an empty history and the sole candidate
    /// once only one remains. Otherwise returns the most informative word of
    /// the guess pool, the first one in vocabulary order on ties.
    pub fn choose_guess(&self, history: &[Turn], is_final_attempt: bool) -> Result<&'v Word> {
        if history.is_empty() {
            return Ok(self.opening);
        }

        let candidates = self.candidates(history)?;
        match candidates.as_slice() {
            [] => Err(Error::ContradictoryHistory {
                turns: history.len(),
            }),
            [only] => {
                debug!(turn = history.len() + 1, guess = %only, "single candidate left");
                Ok(*only)
            }
            _ => {
                let pool = self.guess_pool(&candidates, is_final_attempt);
                let (index, entropy) =
                    most_informative(&pool, &candidates).ok_or(Error::EmptyVocabulary)?;
                let guess = pool[index];
                debug!(
                    turn = history.len() + 1,
                    candidates = candidates.len(),
                    pool = pool.len(),
                    guess = %guess,
                    entropy,
                    "chose guess"
                );
                Ok(guess)
            }
        }
    }

    /// The `n` most informative guesses, best first.
    pub fn rank_guesses(
        &self,
        history: &[Turn],
        is_final_attempt: bool,
        n: usize,
    ) -> Result<Vec<GuessAnalysis>> {
        let candidates = self.candidates(history)?;
        match candidates.as_slice() {
            [] => Err(Error::ContradictoryHistory {
                turns: history.len(),
            }),
            [only] => {
                let mut analyses = vec![GuessAnalysis::new(only, 0.0, 1, true)];
                analyses.truncate(n);
                Ok(analyses)
            }
            _ => {
                let pool = self.guess_pool(&candidates, is_final_attempt);
                let possible = candidates.iter().copied().collect::<FxHashSet<_>>();

                let mut analyses = pool
                    .iter()
                    .zip(score_all(&pool, &candidates))
                    .map(|(&word, entropy)| {
                        GuessAnalysis::new(
                            word,
                            entropy,
                            candidates.len(),
                            possible.contains(word),
                        )
                    })
                    .collect::<Vec<_>>();

                analyses.sort_by(|a, b| b.entropy.total_cmp(&a.entropy));
                analyses.truncate(n);
                Ok(analyses)
            }
        }
    }
}
