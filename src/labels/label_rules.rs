use crate::parser::{Clause, Operation, Token, TokenKind};

pub const AGGREGATE_FUNCTIONS: [&str; 5] = ["COUNT", "SUM", "AVG", "MIN", "MAX"];

/// Facts about a statement the label rules are evaluated against.
#[derive(Debug, Clone, Copy)]
pub struct LabelFacts<'a> {
    pub tokens: &'a [Token],
    pub operation: Operation,
}

impl<'a> LabelFacts<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            operation: Operation::from_tokens(tokens),
        }
    }

    pub fn has_clause(&self, clause: Clause) -> bool {
        self.tokens.iter().any(|token| token.clause == clause)
    }

    pub fn has_keyword(&self, keyword: &str) -> bool {
        self.tokens.iter().any(|token| token.is_keyword(keyword))
    }

    pub fn keyword_count(&self, keyword: &str) -> usize {
        self.tokens.iter().filter(|token| token.is_keyword(keyword)).count()
    }

    /// A call of `function`, e.g. `count(`.
    pub fn calls(&self, function: &str) -> bool {
        self.tokens.windows(2).any(|pair| {
            pair[0].kind == TokenKind::Identifier
                && pair[0].text.eq_ignore_ascii_case(function)
                && pair[1].is_punctuation('(')
        })
    }

    pub fn has_aggregate_call(&self) -> bool {
        AGGREGATE_FUNCTIONS.iter().any(|function| self.calls(function))
    }
}

/// What a matching rule contributes.
#[derive(Debug, Clone, Copy)]
pub enum LabelEffect {
    /// The statement's operation tag, if it has one.
    Operation,
    Tag(&'static str),
}

pub struct LabelRule {
    pub applies: fn(&LabelFacts) -> bool,
    pub effect: LabelEffect,
}

/// Evaluated in order; every matching rule fires.
pub static LABEL_RULES: [LabelRule; 11] = [
    LabelRule {
        applies: |_| true,
        effect: LabelEffect::Operation,
    },
    LabelRule {
        applies: |facts| facts.has_clause(Clause::Join),
        effect: LabelEffect::Tag("join"),
    },
    LabelRule {
        applies: |facts| facts.has_clause(Clause::GroupBy),
        effect: LabelEffect::Tag("grouped"),
    },
    LabelRule {
        applies: |facts| facts.has_clause(Clause::OrderBy),
        effect: LabelEffect::Tag("ordered"),
    },
    LabelRule {
        applies: |facts| facts.has_clause(Clause::Where),
        effect: LabelEffect::Tag("filtered"),
    },
    LabelRule {
        applies: |facts| facts.has_clause(Clause::Limit),
        effect: LabelEffect::Tag("limited"),
    },
    LabelRule {
        applies: |facts| facts.has_clause(Clause::Having),
        effect: LabelEffect::Tag("having"),
    },
    LabelRule {
        applies: |facts| facts.has_clause(Clause::Offset),
        effect: LabelEffect::Tag("offset"),
    },
    LabelRule {
        applies: |facts| facts.has_keyword("DISTINCT"),
        effect: LabelEffect::Tag("distinct"),
    },
    LabelRule {
        applies: |facts| facts.has_aggregate_call(),
        effect: LabelEffect::Tag("aggregate"),
    },
    LabelRule {
        applies: |facts| facts.keyword_count("SELECT") > 1,
        effect: LabelEffect::Tag("subquery"),
    },
];
