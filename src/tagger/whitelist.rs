use crate::{
    profile::{LanguageProfile, ProfileError, tsv},
    tagger::{Candidate, Candidates, Cost, TagError, Tagger},
    token::TokenKind,
};
use std::path::Path;
use tracing::info;

/// Exact-string overrides, e.g. `"km/h"` -> `"kilometro orduko"`.
///
/// Keys may span whitespace; every key matching at a position is proposed
/// and the resolver keeps the cheapest cover.
#[derive(Debug, Clone, Default)]
pub struct Whitelist {
    entries: Vec<(String, String)>,
}

impl Whitelist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `key<TAB>replacement` lines.
    pub fn from_tsv(path: impl AsRef<Path>) -> Result<Self, ProfileError> {
        let path = path.as_ref();
        let mut whitelist = Self::new();
        for (_, key, value) in tsv::read(path)? {
            whitelist = whitelist.insert(key, value);
        }
        info!(path = %path.display(), entries = whitelist.len(), "whitelist loaded");
        Ok(whitelist)
    }

    /// Add or replace an entry. Keys are trimmed, since matching never starts
    /// at whitespace; blank keys are ignored.
    pub fn insert(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let key = key.trim();
        if key.is_empty() {
            return self;
        }
        let key = key.to_string();
        let value = value.into();
        match self.entries.binary_search_by(|(k, _)| k.as_str().cmp(&key)) {
            Ok(i) => self.entries[i].1 = value,
            Err(i) => self.entries.insert(i, (key, value)),
        }
        self
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

impl Tagger for Whitelist {
    fn name(&self) -> &'static str {
        "whitelist"
    }

    fn kind(&self) -> TokenKind {
        TokenKind::Whitelist
    }

    fn cost(&self) -> Cost {
        Cost::WHITELIST
    }

    fn candidates(
        &self,
        text: &str,
        start: usize,
        _profile: &LanguageProfile,
        out: &mut Candidates,
    ) -> Result<(), TagError> {
        let rest = &text[start..];
        for (key, value) in &self.entries {
            if rest.starts_with(key.as_str()) {
                out.push(Candidate {
                    end: start + key.len(),
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }
}
