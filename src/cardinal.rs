//! The number assembler: sign, integer tier, digit-by-digit fraction, percent.

use crate::{
    lang::DigitClass,
    literal::NumberLiteral,
    profile::LanguageProfile,
    rule,
};
use std::fmt;

/// The spoken form of one numeral.
///
/// Words are separated by single spaces; hyphens and glued compounds
/// ("vint-i-un", "douscentos") stay inside a word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Verbalization {
    text: String,
}

impl Verbalization {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.text
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.text.split(' ')
    }
}

impl fmt::Display for Verbalization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Verbalization {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Read a parsed literal aloud.
///
/// `None` means the profile has no reading for it; the caller falls back
/// to another tagger.
pub fn verbalize(literal: &NumberLiteral<'_>, profile: &LanguageProfile) -> Option<Verbalization> {
    let mut text = String::with_capacity(64);

    if let Some(sign) = literal.sign {
        text.push_str(profile.signs().get(sign)?);
        text.push(' ');
    }

    if !rule::render(profile, literal.integer, &mut text) {
        return None;
    }

    if let Some(fraction) = literal.fraction {
        text.push(' ');
        text.push_str(profile.decimal_markers().get(fraction.marker)?);
        for digit in fraction.digits.bytes() {
            text.push(' ');
            text.push_str(profile.lexicon().word_for(digit, DigitClass::Any)?);
        }
    }

    if literal.percent {
        text.push(' ');
        text.push_str(profile.percent());
    }

    Some(Verbalization { text })
}

/// Parse and verbalize in one step.
#[inline]
pub fn verbalize_str(text: &str, profile: &LanguageProfile) -> Option<Verbalization> {
    let literal = NumberLiteral::parse(text, profile)?;
    verbalize(&literal, profile)
}
