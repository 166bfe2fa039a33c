pub mod cardinal;
pub mod lang;
pub mod lexicon;
pub mod literal;
pub mod numy;
pub mod profile;
pub mod resolve;
pub mod rule;
pub mod tagger;
pub mod testing;
pub mod token;

pub use cardinal::{Verbalization, verbalize, verbalize_str};
pub use lang::Lang;
pub use lang::{CAT, DEFAULT_LANG, EUS, GLG, all_langs, from_code};
pub use literal::NumberLiteral;
pub use numy::{Numy, NumyBuilder, NumyError};
pub use profile::{LanguageProfile, ProfileBuilder, ProfileData, ProfileError, preset};
pub use resolve::Resolver;
pub use tagger::{Cardinal, CharFallback, Cost, TagError, Tagger, Whitelist};
pub use token::{Normalized, Token, TokenKind};

#[cfg(test)]
mod tests {
    include!("tests/unit.rs");
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
}
