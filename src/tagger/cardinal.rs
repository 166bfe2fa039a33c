use crate::{
    cardinal::verbalize_str,
    literal::literal_ends,
    profile::LanguageProfile,
    tagger::{Candidate, Candidates, Cost, TagError, Tagger},
    token::TokenKind,
};
use tracing::debug;

/// Reads numeric literals through the language profile.
///
/// A candidate never starts or ends inside a run of ASCII digits, so a
/// numeral the engine cannot read (`12345`) is left whole for the fallback
/// instead of being cut into readable pieces.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cardinal;

impl Tagger for Cardinal {
    fn name(&self) -> &'static str {
        "cardinal"
    }

    fn kind(&self) -> TokenKind {
        TokenKind::Cardinal
    }

    fn cost(&self) -> Cost {
        Cost::CARDINAL
    }

    fn candidates(
        &self,
        text: &str,
        start: usize,
        profile: &LanguageProfile,
        out: &mut Candidates,
    ) -> Result<(), TagError> {
        if text[..start].bytes().next_back().is_some_and(|b| b.is_ascii_digit()) {
            return Ok(());
        }
        let rest = &text[start..];
        let before = out.len();
        let ends = literal_ends(rest, profile);
        for &end in &ends {
            if let Some(spoken) = verbalize_str(&rest[..end], profile) {
                out.push(Candidate {
                    end: start + end,
                    value: spoken.into_string(),
                });
            }
        }

        if out.len() == before && rest.starts_with(|c: char| c.is_ascii_digit()) {
            debug!(
                lang = profile.lang().code(),
                offset = start,
                "numeral has no cardinal reading, deferring to fallback"
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::preset;

    fn spans(text: &str, start: usize) -> Vec<(usize, String)> {
        let mut out = Candidates::new();
        Cardinal
            .candidates(text, start, &preset::basque(), &mut out)
            .unwrap();
        out.into_iter().map(|c| (c.end, c.value)).collect()
    }

    #[test]
    fn proposes_every_readable_prefix() {
        assert_eq!(
            spans("-3.5%", 0),
            [
                (2, "minus hiru".to_string()),
                (4, "minus hiru koma bost".to_string()),
                (5, "minus hiru koma bost ehuneko".to_string()),
            ]
        );
    }

    #[test]
    fn never_cuts_a_digit_run() {
        assert!(spans("12345", 0).is_empty());
        assert!(spans("12345", 1).is_empty());
        assert_eq!(spans("x20", 1), [(3, "hogei".to_string())]);
    }

    #[test]
    fn stops_at_the_end_of_the_literal() {
        assert_eq!(
            spans("1.2.3", 0),
            [(1, "bat".to_string()), (3, "bat koma bi".to_string())]
        );
        assert_eq!(spans("5%%", 0), [(1, "bost".to_string()), (2, "bost ehuneko".to_string())]);
        assert!(spans("---5", 0).is_empty());
        assert_eq!(spans("--5", 1), [(3, "minus bost".to_string())]);
    }

    #[test]
    fn ignores_letters() {
        assert!(spans("abc", 0).is_empty());
    }
}
