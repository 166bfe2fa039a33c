pub mod preset;
pub(crate) mod tsv;

use crate::{
    cardinal::{self, Verbalization},
    lang::{CompoundRule, DigitClass, Lang, LangEntry, Table},
    lexicon::{DigitLexicon, IrregularTable, Word},
    rule::{self, MAX_TIER},
};
use smallvec::SmallVec;
use std::{borrow::Cow, path::Path};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("no built-in data for language `{0}`")]
    UnknownLang(&'static str),

    #[error("{lang}: no `{class}` word for digit `{digit}`")]
    MissingDigit {
        lang: &'static str,
        class: &'static str,
        digit: char,
    },

    #[error("{lang}: `{table}` table has no entry `{key}`")]
    MissingEntry {
        lang: &'static str,
        table: &'static str,
        key: String,
    },

    #[error("{lang}: `{table}` table keys `{a}` and `{b}` overlap")]
    OverlappingKeys {
        lang: &'static str,
        table: &'static str,
        a: String,
        b: String,
    },

    #[error("{lang}: `{table}` key `{key}` may not contain digits")]
    DigitKey {
        lang: &'static str,
        table: &'static str,
        key: String,
    },

    #[error("{lang}: `{digits}` is matched by rules {rules:?} of tier {tier}")]
    AmbiguousRule {
        lang: &'static str,
        tier: usize,
        digits: String,
        rules: SmallVec<[usize; 2]>,
    },

    #[error("{lang}: no rule of tier {tier} reads `{digits}`")]
    Uncovered {
        lang: &'static str,
        tier: usize,
        digits: String,
    },

    #[error("{path}:{line}: {reason}")]
    DataFile {
        path: String,
        line: usize,
        reason: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// The editable word data of a profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileData {
    pub lexicon: DigitLexicon,
    pub teens: IrregularTable,
    pub tens: IrregularTable,
    pub signs: IrregularTable,
    pub decimal_markers: IrregularTable,
    pub percent: Word,
}

impl ProfileData {
    fn from_entry(entry: &'static LangEntry) -> Self {
        Self {
            lexicon: DigitLexicon::from_static(entry.zero, entry.digits),
            teens: IrregularTable::from_static(entry.teens),
            tens: IrregularTable::from_static(entry.tens),
            signs: IrregularTable::from_static(entry.signs),
            decimal_markers: IrregularTable::from_static(entry.decimal_markers),
            percent: Cow::Borrowed(entry.percent),
        }
    }
}

/// Everything needed to verbalize numerals in one language.
///
/// Built once and shared read-only; see [`preset`] for the cached built-in
/// profiles.
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    lang: Lang,
    data: ProfileData,
    tiers: [&'static [CompoundRule]; MAX_TIER],
}

impl LanguageProfile {
    pub fn builder(lang: Lang) -> ProfileBuilder {
        ProfileBuilder::new(lang)
    }

    /// Built-in profile, freshly constructed. Prefer [`preset::for_lang`].
    pub fn new(lang: Lang) -> Result<Self, ProfileError> {
        Self::builder(lang).build()
    }

    #[inline(always)]
    pub fn lang(&self) -> Lang {
        self.lang
    }
    #[inline(always)]
    pub fn lexicon(&self) -> &DigitLexicon {
        &self.data.lexicon
    }
    #[inline(always)]
    pub fn teens(&self) -> &IrregularTable {
        &self.data.teens
    }
    #[inline(always)]
    pub fn signs(&self) -> &IrregularTable {
        &self.data.signs
    }
    #[inline(always)]
    pub fn decimal_markers(&self) -> &IrregularTable {
        &self.data.decimal_markers
    }
    #[inline(always)]
    pub fn percent(&self) -> &str {
        &self.data.percent
    }

    #[inline]
    pub fn table(&self, table: Table) -> &IrregularTable {
        match table {
            Table::Teens => &self.data.teens,
            Table::Tens => &self.data.tens,
        }
    }

    #[inline]
    pub fn tier(&self, digits: usize) -> &'static [CompoundRule] {
        match digits {
            1..=MAX_TIER => self.tiers[digits - 1],
            _ => &[],
        }
    }

    /// Verbalize one numeric span; `None` if it is not a numeral this
    /// profile can read.
    pub fn verbalize(&self, text: &str) -> Option<Verbalization> {
        cardinal::verbalize_str(text, self)
    }

    /// Walk every digit string of one to four digits and check that the
    /// tiers are total and disjoint.
    ///
    /// Strings without a superfluous leading zero must be matched by exactly
    /// one rule and read as a non-empty phrase; the rest by at most one.
    /// Returns the number of strings checked.
    pub fn audit(&self) -> Result<usize, ProfileError> {
        let lang = self.lang.code();
        let mut checked = 0;
        let mut out = String::new();
        for tier in 1..=MAX_TIER {
            let end = 10usize.pow(tier as u32);
            for n in 0..end {
                let digits = format!("{n:0tier$}");
                let canonical = tier == 1 || !digits.starts_with('0');
                let matched = rule::matching_rules(self, tier, &digits);
                match matched.len() {
                    0 if canonical => {
                        return Err(ProfileError::Uncovered { lang, tier, digits });
                    }
                    0 | 1 => {}
                    _ => {
                        return Err(ProfileError::AmbiguousRule {
                            lang,
                            tier,
                            digits,
                            rules: matched,
                        });
                    }
                }
                if canonical {
                    out.clear();
                    if !rule::render(self, &digits, &mut out) || out.trim().is_empty() {
                        return Err(ProfileError::Uncovered { lang, tier, digits });
                    }
                }
                checked += 1;
            }
        }
        Ok(checked)
    }
}

/// Builds a [`LanguageProfile`] from built-in data plus optional overrides.
pub struct ProfileBuilder {
    lang: Lang,
    entry: Option<&'static LangEntry>,
    data: Option<ProfileData>,
}

impl ProfileBuilder {
    pub fn new(lang: Lang) -> Self {
        let entry = lang.entry();
        Self {
            lang,
            entry,
            data: entry.map(ProfileData::from_entry),
        }
    }

    /// Override word data from the TSV files found in `dir`.
    ///
    /// Recognised files: `zero.tsv`, `digit.tsv`, `teen.tsv`, `tens.tsv`
    /// (or `twenties.tsv`), `sign.tsv`, `dot.tsv`, `percent.tsv`. Missing
    /// files keep the built-in data.
    pub fn load_dir(mut self, dir: impl AsRef<Path>) -> Result<Self, ProfileError> {
        if let Some(data) = self.data.as_mut() {
            let loaded = tsv::load_dir(dir.as_ref(), data)?;
            info!(
                lang = self.lang.code(),
                dir = %dir.as_ref().display(),
                files = loaded,
                "loaded numeral data files"
            );
        }
        Ok(self)
    }

    /// Edit the word data in place before the profile is validated.
    pub fn modify(mut self, f: impl FnOnce(&mut ProfileData)) -> Self {
        if let Some(data) = self.data.as_mut() {
            f(data);
        }
        self
    }

    /// Validate and freeze. Every lexicon gap a rule could reach is reported
    /// here, never during verbalization.
    pub fn build(self) -> Result<LanguageProfile, ProfileError> {
        let lang = self.lang.code();
        let (Some(entry), Some(data)) = (self.entry, self.data) else {
            return Err(ProfileError::UnknownLang(lang));
        };

        if let Some(digit) = data.lexicon.first_gap() {
            return Err(ProfileError::MissingDigit {
                lang,
                class: DigitClass::Any.name(),
                digit: digit as char,
            });
        }

        if entry.uses_table(Table::Teens) {
            for n in 10..20 {
                let key = n.to_string();
                if data.teens.get(&key).is_none() {
                    return Err(ProfileError::MissingEntry {
                        lang,
                        table: Table::Teens.name(),
                        key,
                    });
                }
            }
        }

        for (table, name) in [
            (&data.teens, Table::Teens.name()),
            (&data.tens, Table::Tens.name()),
            (&data.signs, "sign"),
            (&data.decimal_markers, "dot"),
        ] {
            if let Some((a, b)) = table.prefix_clash() {
                return Err(ProfileError::OverlappingKeys {
                    lang,
                    table: name,
                    a: a.to_string(),
                    b: b.to_string(),
                });
            }
        }

        for (table, name) in [(&data.signs, "sign"), (&data.decimal_markers, "dot")] {
            if let Some(key) = table.keys().find(|k| k.bytes().any(|b| b.is_ascii_digit())) {
                return Err(ProfileError::DigitKey {
                    lang,
                    table: name,
                    key: key.to_string(),
                });
            }
        }

        if entry.uses_table(Table::Tens) && data.tens.is_empty() {
            return Err(ProfileError::MissingEntry {
                lang,
                table: Table::Tens.name(),
                key: String::new(),
            });
        }

        let profile = LanguageProfile {
            lang: self.lang,
            data,
            tiers: entry.tiers,
        };

        // Higher tiers only add lexicon words and connectors, so a complete
        // two-digit tier means every table entry a rule reads is present.
        let mut out = String::new();
        for n in 10..100 {
            let digits = n.to_string();
            out.clear();
            if !rule::render_tier(&profile, 2, &digits, &mut out) {
                return Err(ProfileError::Uncovered {
                    lang,
                    tier: 2,
                    digits,
                });
            }
        }
        info!(lang, name = self.lang.name(), "language profile built");
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{CAT, EUS, GLG, all_langs};

    #[test]
    fn builtin_profiles_build_and_audit() {
        for &lang in all_langs() {
            let profile = LanguageProfile::new(lang).unwrap();
            assert_eq!(profile.audit().unwrap(), 10 + 100 + 1000 + 10000);
        }
    }

    #[test]
    fn unknown_lang_is_rejected() {
        let lang = Lang {
            code: "XXX",
            name: "Nowhere",
        };
        assert!(matches!(
            LanguageProfile::new(lang),
            Err(ProfileError::UnknownLang("XXX"))
        ));
    }

    #[test]
    fn missing_teen_fails_fast() {
        let err = LanguageProfile::builder(EUS)
            .modify(|d| d.teens = IrregularTable::default())
            .build()
            .unwrap_err();
        assert!(matches!(err, ProfileError::MissingEntry { key, .. } if key == "10"));
    }

    #[test]
    fn missing_tens_fails_fast() {
        let err = LanguageProfile::builder(CAT)
            .modify(|d| {
                d.tens = IrregularTable::default();
                d.tens.insert("3", "trenta");
            })
            .build()
            .unwrap_err();
        assert!(matches!(err, ProfileError::Uncovered { tier: 2, digits, .. } if digits == "40"));

        let err = LanguageProfile::builder(EUS)
            .modify(|d| {
                d.tens = IrregularTable::default();
                d.tens.insert("20", "hogei");
                d.tens.insert("40", "berrogei");
            })
            .build()
            .unwrap_err();
        assert!(matches!(err, ProfileError::Uncovered { tier: 2, digits, .. } if digits == "60"));
    }

    #[test]
    fn missing_digit_fails_fast() {
        let err = LanguageProfile::builder(CAT)
            .modify(|d| d.lexicon = DigitLexicon::default())
            .build()
            .unwrap_err();
        assert!(matches!(err, ProfileError::MissingDigit { digit: '0', class: "any", .. }));
    }

    #[test]
    fn digit_sign_key_is_rejected() {
        let err = LanguageProfile::builder(GLG)
            .modify(|d| d.signs.insert("1", "un"))
            .build()
            .unwrap_err();
        assert!(matches!(err, ProfileError::DigitKey { table: "sign", .. }));
    }

    #[test]
    fn overlapping_tens_keys_are_rejected() {
        let err = LanguageProfile::builder(CAT)
            .modify(|d| d.tens.insert("30", "trenta"))
            .build()
            .unwrap_err();
        assert!(matches!(err, ProfileError::OverlappingKeys { table: "tens", .. }));
    }

    #[test]
    fn modified_words_flow_into_verbalization() {
        let profile = LanguageProfile::builder(GLG)
            .modify(|d| d.percent = Cow::Borrowed("por cen"))
            .build()
            .unwrap();
        assert_eq!(profile.verbalize("5%").unwrap().as_str(), "cinco por cen");
    }
}
