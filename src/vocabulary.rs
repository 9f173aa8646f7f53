//! The fixed word list a game is played over.

use std::fs;
use std::path::Path;

use fxhash::FxHashSet;
use tracing::debug;

use crate::error::{Error, Result};
use crate::word::Word;

/// Ordered, deduplicated list of equal-length words.
///
/// Serves both as the universe of legal guesses and as the pool the secret is
/// drawn from. The order is significant: solver ties are broken by it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<Word>,
    word_len: usize,
}

impl Vocabulary {
    /// Build a vocabulary, keeping the first occurrence of any duplicate.
    pub fn new(words: Vec<Word>) -> Result<Self> {
        let word_len = words.first().ok_or(Error::EmptyVocabulary)?.len();

        if let Some(odd) = words.iter().find(|w| w.len() != word_len) {
            return Err(Error::LengthMismatch {
                expected: word_len,
                found: odd.to_string(),
            });
        }

        let total = words.len();
        let mut seen = FxHashSet::default();
        seen.reserve(total);
        let words = words
            .into_iter()
            .filter(|w| seen.insert(w.clone()))
            .collect::<Vec<_>>();

        if words.len() < total {
            debug!(dropped = total - words.len(), "dropped duplicate words");
        }

        Ok(Self { words, word_len })
    }

    /// Parse one word per line, ignoring blank lines.
    pub fn parse(text: &str) -> Result<Self> {
        let words = text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(Word::new)
            .collect::<Result<Vec<_>>>()?;

        Self::new(words)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let vocabulary = Self::parse(&text)?;
        debug!(
            path = %path.display(),
            words = vocabulary.len(),
            word_len = vocabulary.word_len(),
            "loaded vocabulary"
        );
        Ok(vocabulary)
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn word_len(&self) -> usize {
        self.word_len
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn position(&self, word: &Word) -> Option<usize> {
        self.words.iter().position(|w| w == word)
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.position(word).is_some()
    }

    /// Look a word up by text, case-insensitively.
    pub fn get(&self, word: &str) -> Option<&Word> {
        let word = Word::new(word).ok()?;
        self.words.iter().find(|&w| *w == word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_blank_lines_and_duplicates() {
        let vocabulary = Vocabulary::parse("abide\n\nabyss\nABIDE\n  early \n").unwrap();
        let words: Vec<&str> = vocabulary.words().iter().map(Word::as_str).collect();
        assert_eq!(words, ["ABIDE", "ABYSS", "EARLY"]);
        assert_eq!(vocabulary.word_len(), 5);
    }

    #[test]
    fn rejects_mixed_lengths() {
        let err = Vocabulary::parse("abide\nabyss\nears").unwrap_err();
        assert!(matches!(err, Error::LengthMismatch { expected: 5, .. }));
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(
            Vocabulary::parse("\n\n"),
            Err(Error::EmptyVocabulary)
        ));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let vocabulary = Vocabulary::parse("abide\nabyss").unwrap();
        assert_eq!(vocabulary.get("abyss").map(Word::as_str), Some("ABYSS"));
        assert_eq!(vocabulary.position(&"ABYSS".parse().unwrap()), Some(1));
        assert!(vocabulary.get("early").is_none());
    }
}
