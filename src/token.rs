use std::{fmt, ops::Range};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Whitelist,
    Cardinal,
    Char,
}

impl TokenKind {
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Whitelist => "whitelist",
            TokenKind::Cardinal => "cardinal",
            TokenKind::Char => "char",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One tagged span of the input.
///
/// Displays in the tagged form consumed by downstream reassembly:
/// `cardinal { value: "bi ehun" }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte range in the input.
    pub span: Range<usize>,
    pub value: String,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{ value: \"", self.kind)?;
        for c in self.value.chars() {
            match c {
                '"' => f.write_str("\\\"")?,
                '\\' => f.write_str("\\\\")?,
                _ => write!(f, "{c}")?,
            }
        }
        f.write_str("\" }")
    }
}

/// The resolved tokens of one input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Normalized {
    pub tokens: Vec<Token>,
}

impl Normalized {
    /// Tokens in tagged form, space separated.
    pub fn tagged(&self) -> String {
        self.tokens
            .iter()
            .map(Token::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Reassembled spoken text.
    ///
    /// Fallback characters that touched in the input stay glued; every other
    /// token boundary becomes one space.
    pub fn text(&self) -> String {
        let mut out = String::new();
        let mut prev: Option<&Token> = None;
        for token in &self.tokens {
            if let Some(p) = prev {
                let glued = p.kind == TokenKind::Char
                    && token.kind == TokenKind::Char
                    && p.span.end == token.span.start;
                if !glued {
                    out.push(' ');
                }
            }
            out.push_str(&token.value);
            prev = Some(token);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(kind: TokenKind, span: Range<usize>, value: &str) -> Token {
        Token {
            kind,
            span,
            value: value.to_string(),
        }
    }

    #[test]
    fn tagged_form() {
        let t = token(TokenKind::Cardinal, 0..3, "bi ehun");
        assert_eq!(t.to_string(), r#"cardinal { value: "bi ehun" }"#);
        let q = token(TokenKind::Char, 0..1, "\"");
        assert_eq!(q.to_string(), r#"char { value: "\"" }"#);
    }

    #[test]
    fn text_glues_touching_chars_only() {
        let n = Normalized {
            tokens: vec![
                token(TokenKind::Char, 0..1, "a"),
                token(TokenKind::Char, 1..2, "b"),
                token(TokenKind::Cardinal, 2..5, "bi ehun"),
                token(TokenKind::Char, 5..6, "k"),
                token(TokenKind::Char, 6..7, "m"),
                token(TokenKind::Char, 8..9, "x"),
            ],
        };
        assert_eq!(n.text(), "ab bi ehun km x");
    }
}
