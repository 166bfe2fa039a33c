//! Tagger abstraction.
//!
//! A tagger proposes spans it can read, starting at a given byte offset of
//! the input, and carries a fixed [`Cost`]. The [`Resolver`](crate::resolve::Resolver)
//! picks the cheapest cover of the whole text, so a tagger never needs to
//! know about the others:
//!
//! | tagger          | cost  |
//! |-----------------|-------|
//! | [`Whitelist`]   | 1.01  |
//! | [`Cardinal`]    | 1.05  |
//! | [`CharFallback`]| 100   |

pub mod cardinal;
pub mod char_fallback;
pub mod whitelist;

pub use cardinal::Cardinal;
pub use char_fallback::CharFallback;
pub use whitelist::Whitelist;

use crate::{profile::LanguageProfile, token::TokenKind};
use smallvec::SmallVec;
use std::fmt;
use thiserror::Error;

/// Public error type for every tagger.
#[derive(Debug, Error)]
pub enum TagError {
    #[error("Tagging failed at tagger `{0}`: {1}")]
    Failed(&'static str, String),
}

/// Path weight of one token, in hundredths. Lower wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cost(pub u32);

impl Cost {
    pub const WHITELIST: Cost = Cost(101);
    pub const CARDINAL: Cost = Cost(105);
    pub const CHAR: Cost = Cost(10_000);
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// A span `start..end` a tagger can read, with its spoken value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub end: usize,
    pub value: String,
}

pub type Candidates = SmallVec<[Candidate; 4]>;

/// One alternative reading of the input.
pub trait Tagger: Send + Sync {
    /// Human-readable name, used in logs and error messages.
    fn name(&self) -> &'static str;

    fn kind(&self) -> TokenKind;

    fn cost(&self) -> Cost;

    /// Push every candidate starting at byte `start` of `text`.
    ///
    /// `start` is always a char boundary and never whitespace. Candidate ends
    /// must be char boundaries after `start`.
    fn candidates(
        &self,
        text: &str,
        start: usize,
        profile: &LanguageProfile,
        out: &mut Candidates,
    ) -> Result<(), TagError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn costs_are_strictly_ordered() {
        assert!(Cost::WHITELIST < Cost::CARDINAL);
        assert!(Cost::CARDINAL < Cost::CHAR);
    }

    #[test]
    fn cost_displays_as_weight() {
        assert_eq!(Cost::WHITELIST.to_string(), "1.01");
        assert_eq!(Cost::CARDINAL.to_string(), "1.05");
        assert_eq!(Cost::CHAR.to_string(), "100.00");
    }
}
