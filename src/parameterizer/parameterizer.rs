use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    parameterizer::{
        join_tokens, render_placeholder, NameRegistry, Parameter, ParameterType,
        ParameterizeOptions, ParameterizedQuery,
    },
    parser::{Clause, Token, TokenKind},
};

static DATE_LITERAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^['"]\d{4}-\d{2}-\d{2}([ T]\d{2}:\d{2}(:\d{2}(\.\d+)?)?)?['"]$"#)
        .expect("date literal pattern is valid")
});

/// What an identifier stands for at its position in the statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IdentifierRole {
    Table,
    SelectColumn,
    WhereColumn,
    GroupColumn,
    OrderColumn,
    JoinColumn,
}

impl IdentifierRole {
    fn base_name(&self) -> &'static str {
        match self {
            IdentifierRole::Table => "table",
            IdentifierRole::SelectColumn => "select_col",
            IdentifierRole::WhereColumn => "where_col",
            IdentifierRole::GroupColumn => "group_col",
            IdentifierRole::OrderColumn => "order_col",
            IdentifierRole::JoinColumn => "join_col",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            IdentifierRole::Table => "Table name",
            IdentifierRole::SelectColumn => "Column to select",
            IdentifierRole::WhereColumn => "Column to filter on",
            IdentifierRole::GroupColumn => "Column to group by",
            IdentifierRole::OrderColumn => "Column to order by",
            IdentifierRole::JoinColumn => "Column to join on",
        }
    }
}

/// Replaces literals, and optionally table and column names, with named
/// placeholders.
pub fn parameterize(tokens: &[Token], options: &ParameterizeOptions) -> ParameterizedQuery {
    Parameterizer::new(tokens, options).run()
}

struct Parameterizer<'a> {
    tokens: &'a [Token],
    options: &'a ParameterizeOptions,
    names: NameRegistry,
    parameters: Vec<Parameter>,
    /// Inside the `ON` condition of the current join.
    in_join_condition: bool,
}

impl<'a> Parameterizer<'a> {
    fn new(tokens: &'a [Token], options: &'a ParameterizeOptions) -> Self {
        Self {
            tokens,
            options,
            names: NameRegistry::new(),
            parameters: Vec::new(),
            in_join_condition: false,
        }
    }

    fn run(mut self) -> ParameterizedQuery {
        let mut rendered = Vec::with_capacity(self.tokens.len());

        for index in 0..self.tokens.len() {
            let token = &self.tokens[index];
            self.track_join_condition(token);

            let text = if token.is_literal() {
                self.replace_literal(token)
            } else if token.kind == TokenKind::Identifier {
                match self.identifier_role(index) {
                    Some(role) => self.replace_identifier(token, role),
                    None => token.text.clone(),
                }
            } else {
                token.text.clone()
            };

            rendered.push(text);
        }

        ParameterizedQuery::new(join_tokens(self.tokens, &rendered), self.parameters)
    }

    fn track_join_condition(&mut self, token: &Token) {
        if token.is_join_keyword() {
            self.in_join_condition = false;
        } else if token.clause == Clause::Join && token.is_keyword("ON") {
            self.in_join_condition = true;
        } else if token.clause != Clause::Join {
            self.in_join_condition = false;
        }
    }

    fn replace_literal(&mut self, token: &Token) -> String {
        let param_type = match token.kind {
            TokenKind::NumericLiteral => ParameterType::Number,
            _ if DATE_LITERAL_RE.is_match(&token.text) => ParameterType::Date,
            _ => ParameterType::String,
        };

        let (base, label) = match (token.clause, param_type) {
            (Clause::Limit, _) => ("limit_n", "Maximum number of rows"),
            (Clause::Offset, _) => ("offset_n", "Number of rows to skip"),
            (_, ParameterType::Number) => ("value", "Numeric value"),
            (_, ParameterType::Date) => ("value", "Date value"),
            (_, ParameterType::String) if token.text.contains('%') => ("value", "String pattern for LIKE"),
            (_, ParameterType::String) => ("value", "String value"),
        };

        let name = self.names.allocate(base);
        self.parameters.push(Parameter::new(
            name.clone(),
            param_type,
            format!("{label} (e.g., {})", token.text),
            token.clause,
            token.text.clone(),
        ));

        render_placeholder(&name)
    }

    fn replace_identifier(&mut self, token: &Token, role: IdentifierRole) -> String {
        // qualified columns keep their qualifier: `T1.{{.where_col}}`
        let (qualifier, replaced) = match (role, split_qualifier(&token.text)) {
            (IdentifierRole::Table, _) | (_, None) => ("", token.text.as_str()),
            (_, Some((qualifier, column))) => (qualifier, column),
        };

        let name = self.names.allocate(role.base_name());
        self.parameters.push(Parameter::new(
            name.clone(),
            ParameterType::String,
            format!("{} (e.g., {replaced})", role.description()),
            token.clause,
            replaced.to_string(),
        ));

        match qualifier {
            "" => render_placeholder(&name),
            _ => format!("{qualifier}.{}", render_placeholder(&name)),
        }
    }

    fn identifier_role(&self, index: usize) -> Option<IdentifierRole> {
        let token = &self.tokens[index];
        let previous = index.checked_sub(1).map(|i| &self.tokens[i]);

        if self.is_table_position(token, previous) {
            return self.options.parameterize_tables.then_some(IdentifierRole::Table);
        }

        if !self.options.parameterize_columns || !self.is_column_reference(index) {
            return None;
        }

        let previous = previous?;
        match token.clause {
            Clause::Select => Some(IdentifierRole::SelectColumn),
            Clause::Where if previous.is_any_keyword(&["WHERE", "AND", "OR", "NOT"]) || previous.is_punctuation('(') => {
                Some(IdentifierRole::WhereColumn)
            }
            Clause::GroupBy if previous.is_keyword("GROUP BY") || previous.is_punctuation(',') => {
                Some(IdentifierRole::GroupColumn)
            }
            Clause::OrderBy if previous.is_keyword("ORDER BY") || previous.is_punctuation(',') => {
                Some(IdentifierRole::OrderColumn)
            }
            Clause::Join if self.in_join_condition => Some(IdentifierRole::JoinColumn),
            _ => None,
        }
    }

    fn is_table_position(&self, token: &Token, previous: Option<&Token>) -> bool {
        let Some(previous) = previous else {
            return false;
        };

        match token.clause {
            Clause::From => previous.is_keyword("FROM") || previous.is_punctuation(','),
            Clause::Join => previous.is_join_keyword(),
            _ => false,
        }
    }

    /// Plain column use: not a function name, not an alias, not a wildcard.
    fn is_column_reference(&self, index: usize) -> bool {
        let token = &self.tokens[index];
        if token.text.ends_with('*') || token.is_parameterized() {
            return false;
        }

        if self.tokens.get(index + 1).is_some_and(|next| next.is_punctuation('(')) {
            return false;
        }

        match index.checked_sub(1).map(|i| &self.tokens[i]) {
            Some(previous) if previous.is_keyword("AS") => false,
            // implicit alias: `SELECT name n`, `FROM students s`
            Some(previous) if matches!(previous.kind, TokenKind::Identifier | TokenKind::Placeholder) => false,
            Some(previous) if previous.is_punctuation(')') && token.clause != Clause::Where => false,
            _ => true,
        }
    }
}

/// Splits `qualifier.column` at the last dot outside backtick quotes, so
/// `` `t.name` `` stays whole and `` `t`.`name` `` splits.
fn split_qualifier(text: &str) -> Option<(&str, &str)> {
    let mut quoted = false;
    let mut last_dot = None;
    for (at, ch) in text.char_indices() {
        match ch {
            '`' => quoted = !quoted,
            '.' if !quoted => last_dot = Some(at),
            _ => {}
        }
    }

    last_dot.map(|at| (&text[..at], &text[at + 1..]))
}
