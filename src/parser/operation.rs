use std::fmt::Display;

use crate::parser::{Token, TokenKind};

/// Statement kind, taken from the first keyword of the statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Select,
    Insert,
    Update,
    Delete,
    Create,
    Alter,
    Drop,
    Truncate,
    Other,
}

impl Operation {
    pub fn from_tokens(tokens: &[Token]) -> Operation {
        tokens
            .iter()
            .find(|token| token.kind == TokenKind::Keyword)
            .map(|token| Operation::from_keyword(&token.text))
            .unwrap_or(Operation::Other)
    }

    /// One operation per statement: `;` separates statements, and a
    /// statement without any keyword counts as [`Operation::Other`].
    pub fn statements(tokens: &[Token]) -> Vec<Operation> {
        tokens
            .split(|token| token.is_punctuation(';'))
            .filter(|statement| !statement.is_empty())
            .map(Operation::from_tokens)
            .collect()
    }

    pub fn from_keyword(keyword: &str) -> Operation {
        match keyword.to_ascii_uppercase().as_str() {
            "SELECT" => Operation::Select,
            "INSERT" => Operation::Insert,
            "UPDATE" => Operation::Update,
            "DELETE" => Operation::Delete,
            "CREATE" => Operation::Create,
            "ALTER" => Operation::Alter,
            "DROP" => Operation::Drop,
            "TRUNCATE" => Operation::Truncate,
            _ => Operation::Other,
        }
    }

    /// Tag used by the label generator; `None` for statements it does not name.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Operation::Select => Some("select"),
            Operation::Insert => Some("insert"),
            Operation::Update => Some("update"),
            Operation::Delete => Some("delete"),
            Operation::Create => Some("create"),
            Operation::Alter => Some("alter"),
            Operation::Drop => Some("drop"),
            Operation::Truncate | Operation::Other => None,
        }
    }

    pub fn is_read_only(&self) -> bool {
        *self == Operation::Select
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Operation::Select => "SELECT",
            Operation::Insert => "INSERT",
            Operation::Update => "UPDATE",
            Operation::Delete => "DELETE",
            Operation::Create => "CREATE",
            Operation::Alter => "ALTER",
            Operation::Drop => "DROP",
            Operation::Truncate => "TRUNCATE",
            Operation::Other => "OTHER",
        };
        f.write_str(name)
    }
}
