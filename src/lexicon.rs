//! Digit words and irregular tables of a language profile.
//!
//! Both start as borrowed views of the built-in `'static` data and only
//! allocate when a data file overrides an entry.

use crate::lang::{DigitClass, WordMap};
use std::borrow::Cow;

pub type Word = Cow<'static, str>;

/// Words for the single digits `0`-`9`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DigitLexicon {
    words: [Option<Word>; 10],
}

impl DigitLexicon {
    pub fn from_static(zero: &'static str, digits: &'static [&'static str; 9]) -> Self {
        let mut lexicon = Self::default();
        lexicon.set(b'0', Cow::Borrowed(zero));
        for (digit, word) in (b'1'..=b'9').zip(digits.iter()) {
            lexicon.set(digit, Cow::Borrowed(*word));
        }
        lexicon
    }

    /// Replace the word for an ASCII digit. Non-digits are ignored.
    pub fn set(&mut self, digit: u8, word: Word) {
        if digit.is_ascii_digit() {
            self.words[(digit - b'0') as usize] = Some(word);
        }
    }

    /// The word for `digit`, if the digit belongs to `class` and has an entry.
    #[inline]
    pub fn word_for(&self, digit: u8, class: DigitClass) -> Option<&str> {
        if !class.contains(digit) {
            return None;
        }
        self.words[(digit - b'0') as usize].as_deref()
    }

    /// First digit with no entry, if any.
    pub fn first_gap(&self) -> Option<u8> {
        (b'0'..=b'9').find(|d| self.words[(d - b'0') as usize].is_none())
    }
}

/// A fixed digit-string key to word mapping (teens, tens, signs, markers).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IrregularTable {
    entries: Vec<(Word, Word)>,
}

impl IrregularTable {
    pub fn from_static(map: &'static [WordMap]) -> Self {
        Self {
            entries: map
                .iter()
                .map(|m| (Cow::Borrowed(m.key), Cow::Borrowed(m.word)))
                .collect(),
        }
    }

    /// Insert or replace an entry.
    pub fn insert(&mut self, key: impl Into<Word>, word: impl Into<Word>) {
        let key = key.into();
        let word = word.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = word,
            None => self.entries.push((key, word)),
        }
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, w)| w.as_ref())
    }

    /// The entry whose key starts `text`, with the key length.
    ///
    /// Keys are prefix-free (checked when the profile is built), so at most
    /// one entry can match.
    #[inline]
    pub fn longest_prefix(&self, text: &str) -> Option<(usize, &str)> {
        self.entries
            .iter()
            .filter(|(k, _)| !k.is_empty() && text.starts_with(k.as_ref()))
            .max_by_key(|(k, _)| k.len())
            .map(|(k, w)| (k.len(), w.as_ref()))
    }

    /// Two keys where one is a prefix of the other.
    pub fn prefix_clash(&self) -> Option<(&str, &str)> {
        for (i, (a, _)) in self.entries.iter().enumerate() {
            for (b, _) in &self.entries[i + 1..] {
                if a.starts_with(b.as_ref()) || b.starts_with(a.as_ref()) {
                    return Some((a.as_ref(), b.as_ref()));
                }
            }
        }
        None
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_ref())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
