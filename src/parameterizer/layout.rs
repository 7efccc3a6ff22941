use crate::parser::{Token, TokenKind};

/// Joins rendered token texts with single spaces, dropping the space
/// before `,` `)` `;`, after `(`, and between a function name and its `(`.
pub fn join_tokens(tokens: &[Token], rendered: &[String]) -> String {
    let mut sql = String::new();

    for (index, text) in rendered.iter().enumerate() {
        if index > 0 && needs_space(&tokens[index - 1], &tokens[index]) {
            sql.push(' ');
        }
        sql.push_str(text);
    }

    sql
}

fn needs_space(previous: &Token, current: &Token) -> bool {
    if current.is_punctuation(',') || current.is_punctuation(')') || current.is_punctuation(';') {
        return false;
    }
    if previous.is_punctuation('(') {
        return false;
    }
    if current.is_punctuation('(') && previous.kind == TokenKind::Identifier {
        return false;
    }
    true
}
