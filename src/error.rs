//! Errors raised while parsing words, patterns and vocabularies, or while solving.

use std::path::PathBuf;
use thiserror::Error;

use crate::MAX_WORD_LENGTH;

#[derive(Error, Debug)]
pub enum Error {
    #[error("empty word")]
    EmptyWord,

    #[error("word \"{word}\" is longer than {} letters", MAX_WORD_LENGTH)]
    WordTooLong { word: String },

    #[error("word \"{word}\" contains '{found}', only ASCII letters are allowed")]
    InvalidCharacter { word: String, found: char },

    #[error("invalid feedback pattern \"{pattern}\": use g/y/b or 2/1/0, one per letter")]
    InvalidPattern { pattern: String },

    #[error("expected length {expected}, found \"{found}\" of length {}", found.len())]
    LengthMismatch { expected: usize, found: String },

    #[error("vocabulary is empty")]
    EmptyVocabulary,

    #[error("\"{word}\" is not in the vocabulary")]
    NotInVocabulary { word: String },

    #[error("no vocabulary word is consistent with the {turns} guess(es) so far")]
    ContradictoryHistory { turns: usize },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
