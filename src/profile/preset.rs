//! Built-in profiles, built on first use and shared for the life of the process.

use crate::{
    lang::{CAT, EUS, GLG, Lang},
    profile::LanguageProfile,
};
use lazy_static::lazy_static;
use std::sync::Arc;

fn builtin(lang: Lang) -> Arc<LanguageProfile> {
    Arc::new(
        LanguageProfile::new(lang)
            .unwrap_or_else(|e| panic!("built-in {} data is invalid: {e}", lang.name())),
    )
}

lazy_static! {
    static ref BASQUE: Arc<LanguageProfile> = builtin(EUS);
    static ref CATALAN: Arc<LanguageProfile> = builtin(CAT);
    static ref GALICIAN: Arc<LanguageProfile> = builtin(GLG);
}

/// Basque: vigesimal tens, "eta" after hundreds and thousands.
pub fn basque() -> Arc<LanguageProfile> {
    Arc::clone(&BASQUE)
}

/// Catalan: hyphenated compounds ("vint-i-un", "dos-cents").
pub fn catalan() -> Arc<LanguageProfile> {
    Arc::clone(&CATALAN)
}

/// Galician: "e" inside decades, glued hundreds ("douscentos").
pub fn galician() -> Arc<LanguageProfile> {
    Arc::clone(&GALICIAN)
}

pub fn for_lang(lang: Lang) -> Option<Arc<LanguageProfile>> {
    match lang.code() {
        "EUS" => Some(basque()),
        "CAT" => Some(catalan()),
        "GLG" => Some(galician()),
        _ => None,
    }
}
