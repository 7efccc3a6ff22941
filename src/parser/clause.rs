use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Clause enclosing a token. Doubles as the tokenizer state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Clause {
    #[default]
    Unknown,
    Select,
    From,
    Join,
    Where,
    GroupBy,
    Having,
    OrderBy,
    Limit,
    Offset,
}

impl Clause {
    pub fn as_str(&self) -> &'static str {
        match self {
            Clause::Unknown => "UNKNOWN",
            Clause::Select => "SELECT",
            Clause::From => "FROM",
            Clause::Join => "JOIN",
            Clause::Where => "WHERE",
            Clause::GroupBy => "GROUP_BY",
            Clause::Having => "HAVING",
            Clause::OrderBy => "ORDER_BY",
            Clause::Limit => "LIMIT",
            Clause::Offset => "OFFSET",
        }
    }
}

impl Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
