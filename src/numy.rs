use thiserror::Error;

use crate::{
    lang::{DEFAULT_LANG, Lang},
    profile::{LanguageProfile, ProfileError, preset},
    resolve::Resolver,
    tagger::{Cardinal, CharFallback, Cost, TagError, Tagger, Whitelist},
    token::Normalized,
};
use std::sync::Arc;
use tracing::{debug, instrument};

#[derive(Debug, Error)]
pub enum NumyError {
    #[error("profile error: {0}")]
    Profile(#[from] ProfileError),
    #[error("tagger error: {0}")]
    Tag(#[from] TagError),
    #[error("taggers `{0}` and `{1}` share cost {2}")]
    CostTie(&'static str, &'static str, Cost),
    #[error("no tagger covers the input at byte {offset}")]
    Uncovered { offset: usize },
}

/// A text normalizer for one language.
///
/// ```
/// use numy::{CAT, Numy};
///
/// let numy = Numy::builder().lang(CAT).build().unwrap();
/// assert_eq!(numy.verbalize("tinc 21 anys").unwrap(), "tinc vint-i-un anys");
/// ```
pub struct Numy {
    profile: Arc<LanguageProfile>,
    resolver: Resolver,
}

impl Numy {
    pub fn builder() -> NumyBuilder {
        NumyBuilder::default()
    }

    #[inline(always)]
    pub fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    #[inline(always)]
    pub fn lang(&self) -> Lang {
        self.profile.lang()
    }

    pub fn taggers(&self) -> impl Iterator<Item = &dyn Tagger> {
        self.resolver.taggers()
    }

    /// Tag `text` with the cheapest cover the taggers allow.
    #[instrument(skip(self, text), fields(lang = self.lang().code(), len = text.len()))]
    pub fn normalize(&self, text: &str) -> Result<Normalized, NumyError> {
        let normalized = self.resolver.resolve(text, &self.profile)?;
        debug!(tokens = normalized.tokens.len(), "resolved");
        Ok(normalized)
    }

    /// Spoken form of `text`, see [`Normalized::text`].
    pub fn verbalize(&self, text: &str) -> Result<String, NumyError> {
        Ok(self.normalize(text)?.text())
    }
}

pub struct NumyBuilder {
    lang: Lang,
    profile: Option<Arc<LanguageProfile>>,
    whitelist: Option<Whitelist>,
    extra: Vec<Arc<dyn Tagger>>,
    fallback: bool,
}

impl Default for NumyBuilder {
    fn default() -> Self {
        Self {
            lang: DEFAULT_LANG,
            profile: None,
            whitelist: None,
            extra: Vec::new(),
            fallback: true,
        }
    }
}

impl NumyBuilder {
    pub fn lang(mut self, lang: Lang) -> Self {
        self.lang = lang;
        self
    }

    /// Use a custom profile; its language replaces [`lang`](Self::lang).
    pub fn profile(mut self, profile: impl Into<Arc<LanguageProfile>>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    pub fn whitelist(mut self, whitelist: Whitelist) -> Self {
        self.whitelist = Some(whitelist);
        self
    }

    pub fn add_tagger<T: Tagger + 'static>(mut self, tagger: T) -> Self {
        self.extra.push(Arc::new(tagger));
        self
    }

    /// Drop the character fallback; unreadable input then fails with
    /// [`NumyError::Uncovered`].
    pub fn without_fallback(mut self) -> Self {
        self.fallback = false;
        self
    }

    pub fn build(self) -> Result<Numy, NumyError> {
        let profile = match self.profile {
            Some(profile) => profile,
            None => match preset::for_lang(self.lang) {
                Some(profile) => profile,
                None => Arc::new(LanguageProfile::new(self.lang)?),
            },
        };

        let mut resolver = Resolver::new();
        if let Some(whitelist) = self.whitelist {
            resolver = resolver.push(whitelist)?;
        }
        resolver = resolver.push(Cardinal)?;
        if self.fallback {
            resolver = resolver.push(CharFallback)?;
        }
        for tagger in self.extra {
            resolver = resolver.push_arc(tagger)?;
        }

        Ok(Numy { profile, resolver })
    }
}
