//! # Shannon Wordle
//!
//! An automated Wordle player built on information theory.
//!
//! The [`feedback`] module simulates the colored tiles Wordle returns for a
//! guess, including its duplicate-letter rules. The [`solver`] module uses that
//! simulation to pick, at every turn, the guess whose feedback distribution over
//! the remaining candidate secrets has the highest Shannon entropy.
//!
//! Everything else ([`vocabulary`] loading, the [`game`] driver) sits around
//! those two and only calls into them.

pub mod error;
pub mod feedback;
pub mod game;
pub mod solver;
pub mod vocabulary;
pub mod word;

pub use error::{Error, Result};
pub use feedback::{evaluate, try_evaluate, Feedback, FeedbackPattern};
pub use game::{
    draw_secrets, judge_guess, play, play_all, Benchmark, GameConfig, GameOutcome, Stats,
};
pub use solver::{entropy, frequency_table, GuessAnalysis, Solver, SolverConfig, Turn};
pub use vocabulary::Vocabulary;
pub use word::Word;

/// Longest supported word. A pattern over this many positions still fits a `u32` code.
pub const MAX_WORD_LENGTH: usize = 20;

/// Opening guess precomputed for the standard 5-letter vocabulary.
pub const DEFAULT_OPENING: &str = "SOARE";

/// Attempts allowed in a standard game
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;
