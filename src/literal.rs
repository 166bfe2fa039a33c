//! Parsing of numeric literals: `sign? digit{1,4} (marker digit+)? %?`.

use crate::{profile::LanguageProfile, rule::MAX_TIER};
use smallvec::SmallVec;

/// The decimal part of a literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fraction<'a> {
    /// The decimal marker as written (`.`).
    pub marker: &'a str,
    /// One or more ASCII digits.
    pub digits: &'a str,
}

/// One numeric span, borrowed from the input it was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberLiteral<'a> {
    pub sign: Option<&'a str>,
    pub integer: &'a str,
    pub fraction: Option<Fraction<'a>>,
    pub percent: bool,
}

impl<'a> NumberLiteral<'a> {
    /// Parse the whole of `text`, using the sign glyphs and decimal markers
    /// configured in `profile`.
    ///
    /// Returns `None` for anything outside the grammar: more than four
    /// integer digits, a leading zero on a multi-digit integer, a second
    /// decimal marker, trailing characters.
    pub fn parse(text: &'a str, profile: &LanguageProfile) -> Option<Self> {
        let (sign, rest) = match profile.signs().longest_prefix(text) {
            Some((len, _)) => (Some(&text[..len]), &text[len..]),
            None => (None, text),
        };

        let (integer, rest) = split_digits(rest);
        if integer.is_empty() || integer.len() > MAX_TIER {
            return None;
        }
        if integer.len() > 1 && integer.starts_with('0') {
            return None;
        }

        let (fraction, rest) = match profile.decimal_markers().longest_prefix(rest) {
            Some((len, _)) => {
                let (digits, after) = split_digits(&rest[len..]);
                if digits.is_empty() {
                    return None;
                }
                let fraction = Fraction {
                    marker: &rest[..len],
                    digits,
                };
                (Some(fraction), after)
            }
            None => (None, rest),
        };

        let percent = match rest {
            "" => false,
            "%" => true,
            _ => return None,
        };

        Some(Self {
            sign,
            integer,
            fraction,
            percent,
        })
    }
}

/// Byte lengths of the prefixes of `text` that end where a literal may end:
/// after the integer, the fraction or the percent sign, never inside a digit
/// run. Each slot of the grammar is read once; nothing past the literal is
/// scanned.
pub fn literal_ends(text: &str, profile: &LanguageProfile) -> SmallVec<[usize; 4]> {
    let mut ends = SmallVec::new();
    let at = profile.signs().longest_prefix(text).map_or(0, |(len, _)| len);

    let (integer, _) = split_digits(&text[at..]);
    if integer.is_empty() || integer.len() > MAX_TIER {
        return ends;
    }
    let mut at = at + integer.len();
    ends.push(at);

    if let Some((len, _)) = profile.decimal_markers().longest_prefix(&text[at..]) {
        let (digits, _) = split_digits(&text[at + len..]);
        if !digits.is_empty() {
            at += len + digits.len();
            ends.push(at);
        }
    }

    if text[at..].starts_with('%') {
        ends.push(at + 1);
    }
    ends
}

#[inline]
fn split_digits(text: &str) -> (&str, &str) {
    let end = text
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(text.len());
    text.split_at(end)
}
