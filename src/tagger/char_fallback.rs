use crate::{
    profile::LanguageProfile,
    tagger::{Candidate, Candidates, Cost, TagError, Tagger},
    token::TokenKind,
};

/// Reads any single character as itself. Covers everything, costs the most.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharFallback;

impl Tagger for CharFallback {
    fn name(&self) -> &'static str {
        "char"
    }

    fn kind(&self) -> TokenKind {
        TokenKind::Char
    }

    fn cost(&self) -> Cost {
        Cost::CHAR
    }

    #[inline]
    fn candidates(
        &self,
        text: &str,
        start: usize,
        _profile: &LanguageProfile,
        out: &mut Candidates,
    ) -> Result<(), TagError> {
        if let Some(c) = text[start..].chars().next() {
            out.push(Candidate {
                end: start + c.len_utf8(),
                value: c.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::preset;

    #[test]
    fn one_char_at_a_time() {
        let mut out = Candidates::new();
        CharFallback
            .candidates("añb", 1, &preset::catalan(), &mut out)
            .unwrap();
        assert_eq!(
            out.as_slice(),
            [Candidate {
                end: 3,
                value: "ñ".to_string()
            }]
        );
    }
}
