//! Case-normalized Wordle words.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::MAX_WORD_LENGTH;

/// A word of uppercase ASCII letters.
///
/// Construction is the only place letters are checked, so everything
/// downstream can index the alphabet with `byte - b'A'`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word(Box<str>);

impl Word {
    pub fn new(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::EmptyWord);
        }
        if let Some(found) = trimmed.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(Error::InvalidCharacter {
                word: trimmed.to_string(),
                found,
            });
        }
        if trimmed.len() > MAX_WORD_LENGTH {
            return Err(Error::WordTooLong {
                word: trimmed.to_string(),
            });
        }

        Ok(Self(trimmed.to_ascii_uppercase().into_boxed_str()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for Word {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Word {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl PartialEq<str> for Word {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Word {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
