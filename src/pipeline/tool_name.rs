use sha2::{Digest, Sha256};

use crate::{
    labels::LabelFacts,
    parser::{Clause, Token},
};

pub const MAX_NAME_FEATURES: usize = 3;
pub const MAX_NAME_CHARS: usize = 50;

/// Structural features in naming priority order.
const NAME_FEATURES: [(&str, fn(&LabelFacts) -> bool); 12] = [
    ("count", |facts| facts.calls("COUNT")),
    ("sum", |facts| !facts.calls("COUNT") && facts.calls("SUM")),
    ("aggregate", |facts| {
        !facts.calls("COUNT") && !facts.calls("SUM") && facts.has_aggregate_call()
    }),
    ("grouped", |facts| facts.has_clause(Clause::GroupBy)),
    ("joined", |facts| facts.has_clause(Clause::Join) && !is_left_join_only(facts)),
    ("left_joined", is_left_join_only),
    ("filtered", |facts| facts.has_clause(Clause::Where)),
    ("sorted", |facts| facts.has_clause(Clause::OrderBy)),
    ("limited", |facts| facts.has_clause(Clause::Limit)),
    ("distinct", |facts| facts.has_keyword("DISTINCT")),
    ("having", |facts| facts.has_clause(Clause::Having)),
    ("offset", |facts| facts.has_clause(Clause::Offset)),
];

fn is_left_join_only(facts: &LabelFacts) -> bool {
    let mut joins = facts.tokens.iter().filter(|token| token.is_join_keyword()).peekable();
    joins.peek().is_some() && joins.all(|token| token.text.to_ascii_uppercase().starts_with("LEFT"))
}

/// Readable tool name: the operation, up to three structural features and
/// four hex digits of `sha256(sql + question)`.
pub fn tool_name(tokens: &[Token], sql: &str, question: &str) -> String {
    let facts = LabelFacts::new(tokens);

    let mut parts = vec![facts.operation.label().unwrap_or("query")];
    parts.extend(
        NAME_FEATURES
            .iter()
            .filter(|(_, applies)| applies(&facts))
            .map(|(feature, _)| *feature)
            .take(MAX_NAME_FEATURES),
    );

    let mut name = parts.join("_");
    if name.len() > MAX_NAME_CHARS {
        name.truncate(MAX_NAME_CHARS);
        name.truncate(name.trim_end_matches('_').len());
    }

    format!("{name}_{}", short_hash(&format!("{sql}{question}")))
}

fn short_hash(material: &str) -> String {
    let digest = Sha256::digest(material.as_bytes());
    hex::encode(&digest[..2])
}
