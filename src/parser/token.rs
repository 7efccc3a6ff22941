use serde::{Deserialize, Serialize};

use crate::parser::Clause;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Keyword,
    Identifier,
    StringLiteral,
    NumericLiteral,
    Operator,
    Punctuation,
    /// A rendered `{{.name}}` marker.
    Placeholder,
    /// A single character the token-class table does not cover.
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
    pub clause: Clause,
    /// Character offset of the first character in the source.
    pub position: usize,
}

impl Token {
    pub fn new(text: impl Into<String>, kind: TokenKind, clause: Clause, position: usize) -> Self {
        Self {
            text: text.into(),
            kind,
            clause,
            position,
        }
    }

    /// Case-insensitive keyword check; multi-word keywords are stored with
    /// single spaces, e.g. `GROUP BY`.
    pub fn is_keyword(&self, word: &str) -> bool {
        self.kind == TokenKind::Keyword && self.text.eq_ignore_ascii_case(word)
    }

    pub fn is_any_keyword(&self, words: &[&str]) -> bool {
        words.iter().any(|word| self.is_keyword(word))
    }

    pub fn is_join_keyword(&self) -> bool {
        self.kind == TokenKind::Keyword && self.text.to_ascii_uppercase().ends_with("JOIN")
    }

    pub fn is_punctuation(&self, ch: char) -> bool {
        self.kind == TokenKind::Punctuation && self.text.len() == 1 && self.text.starts_with(ch)
    }

    pub fn is_literal(&self) -> bool {
        matches!(self.kind, TokenKind::StringLiteral | TokenKind::NumericLiteral)
    }

    /// True when the token is, or contains, a rendered placeholder.
    pub fn is_parameterized(&self) -> bool {
        self.kind == TokenKind::Placeholder || self.text.contains("{{.")
    }
}
