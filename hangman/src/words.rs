//! Candidate secret words and how one is picked per round.

use anyhow::{Result, bail};
use rand::Rng;
use rand::rngs::ThreadRng;

/// Built-in word set used when no config is given.
pub const DEFAULT_WORDS: [&str; 5] = ["apple", "tiger", "chair", "python", "cloud"];

/// Lowercase form of a single character used for all comparisons.
///
/// Characters whose lowercase form is more than one character are kept as-is.
pub fn canonical(letter: char) -> char {
    let mut lower = letter.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(single), None) => single,
        _ => letter,
    }
}

/// Non-empty list of alphabetic words, stored in canonical (lowercase) form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut canonical_words = Vec::new();
        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() {
                bail!("word list contains an empty word");
            }
            if !word.chars().all(char::is_alphabetic) {
                bail!("word {word:?} must contain only letters");
            }
            canonical_words.push(word.chars().map(canonical).collect());
        }
        if canonical_words.is_empty() {
            bail!("word list must not be empty");
        }
        Ok(Self {
            words: canonical_words,
        })
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    /// Pick the secret word for a round.
    pub fn pick(&self, picker: &mut dyn WordPicker) -> &str {
        let index = picker.pick_index(self.words.len()).min(self.words.len() - 1);
        &self.words[index]
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self {
            words: DEFAULT_WORDS.iter().map(|word| word.to_string()).collect(),
        }
    }
}

/// Source of the index of the next secret word.
pub trait WordPicker {
    /// Return an index in `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Uniform random choice.
#[derive(Debug, Clone)]
pub struct RandomPicker<R> {
    rng: R,
}

impl<R: Rng> RandomPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomPicker<ThreadRng> {
    pub fn thread_local() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: Rng> WordPicker for RandomPicker<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Always picks the same index. Used to make rounds deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPicker(pub usize);

impl WordPicker for FixedPicker {
    fn pick_index(&mut self, _len: usize) -> usize {
        self.0
    }
}
