use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::parser::{
    literals::{NumberScanner, PlaceholderScanner, StringScanner},
    Clause, SqlScanner, Token, TokenKind, WordComparer, CLAUSE_COMPARERS,
};

static RESERVED_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "SELECT", "FROM", "WHERE", "JOIN", "INNER", "LEFT", "RIGHT", "FULL", "OUTER", "CROSS",
        "ON", "USING", "AS", "AND", "OR", "NOT", "IN", "IS", "NULL", "LIKE", "ILIKE", "BETWEEN",
        "EXISTS", "GROUP", "ORDER", "BY", "HAVING", "LIMIT", "OFFSET", "ASC", "DESC", "DISTINCT",
        "ALL", "UNION", "INTERSECT", "EXCEPT", "CASE", "WHEN", "THEN", "ELSE", "END", "INSERT",
        "INTO", "VALUES", "UPDATE", "SET", "DELETE", "DROP", "CREATE", "ALTER", "TABLE",
        "TRUNCATE", "WITH", "TRUE", "FALSE",
    ]
    .into_iter()
    .collect()
});

const PUNCTUATION: [char; 5] = [',', '(', ')', ';', '.'];

const TWO_CHAR_OPERATORS: [&str; 6] = ["<>", "!=", "<=", ">=", "||", "=="];

const SINGLE_CHAR_OPERATORS: [char; 13] = ['=', '<', '>', '+', '-', '*', '/', '%', '!', '|', '&', '^', '~'];

pub fn is_reserved_word(word: &str) -> bool {
    RESERVED_WORDS.contains(word.to_ascii_uppercase().as_str())
}

/// Splits `sql` into typed tokens tagged with their enclosing clause.
///
/// Never fails: characters outside the token-class table come back as
/// single-character [`TokenKind::Unknown`] tokens.
pub fn tokenize(sql: &str) -> Vec<Token> {
    Tokenizer::new(sql).run()
}

/// Single-pass scanner whose state is the clause currently open.
///
/// `(` saves the open clause and `)` restores it, so a subquery never leaks
/// its clause into the enclosing statement.
#[derive(Debug)]
pub struct Tokenizer {
    scanner: SqlScanner,
    clause: Clause,
    saved_clauses: Vec<Clause>,
    tokens: Vec<Token>,
}

impl Tokenizer {
    pub fn new(sql: &str) -> Self {
        Self {
            scanner: SqlScanner::new(sql),
            clause: Clause::Unknown,
            saved_clauses: Vec::new(),
            tokens: Vec::new(),
        }
    }

    pub fn run(mut self) -> Vec<Token> {
        loop {
            self.scanner.next_non_whitespace();
            if self.scanner.eof() {
                break;
            }
            self.scan_token();
        }

        self.tokens
    }

    fn scan_token(&mut self) {
        let pivot = self.scanner.position;
        let current = self.scanner.current();

        if StringScanner::is_string_delimiter(current) {
            let text = StringScanner::scan(&mut self.scanner);
            self.push(text, TokenKind::StringLiteral, pivot);
        } else if NumberScanner::is_number_start(&self.scanner) {
            let text = NumberScanner::scan(&mut self.scanner);
            self.push(text, TokenKind::NumericLiteral, pivot);
        } else if let Some(text) = PlaceholderScanner::scan(&mut self.scanner) {
            self.push(text, TokenKind::Placeholder, pivot);
        } else if WordComparer::is_word_start(current) || current == '`' {
            self.scan_word(pivot);
        } else if PUNCTUATION.contains(&current) {
            self.scanner.next();
            self.scan_punctuation(current, pivot);
        } else if let Some(length) = Self::operator_len(&self.scanner) {
            self.scanner.jump(length);
            let text = self.scanner.text_from_pivot(pivot);
            self.push(text, TokenKind::Operator, pivot);
        } else {
            self.scanner.next();
            self.push(current.to_string(), TokenKind::Unknown, pivot);
        }
    }

    fn scan_word(&mut self, pivot: usize) {
        if let Some((clause, length)) = CLAUSE_COMPARERS.clause_at(&self.scanner) {
            self.scanner.jump(length);
            self.clause = clause;
            let text = self
                .scanner
                .text_from_pivot(pivot)
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ");
            self.push(text, TokenKind::Keyword, pivot);
            return;
        }

        let text = self.scan_identifier();
        let kind = if !text.contains('.') && is_reserved_word(&text) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        self.push(text, kind, pivot);
    }

    /// Reads `name`, `` `name` ``, and dotted forms such as `T1.name`,
    /// `T1.*` or `T1.{{.col}}`.
    fn scan_identifier(&mut self) -> String {
        let pivot = self.scanner.position;
        self.scan_segment();

        while self.scanner.current() == '.' {
            let next = self.scanner.peek(1);
            if next == '*' {
                self.scanner.jump(2);
                break;
            }
            if let Some(length) = PlaceholderScanner::placeholder_len_at(&self.scanner, 1) {
                self.scanner.jump(length + 1);
                continue;
            }
            if WordComparer::is_word_start(next) || next.is_ascii_digit() || next == '`' {
                self.scanner.next();
                self.scan_segment();
                continue;
            }
            break;
        }

        self.scanner.text_from_pivot(pivot)
    }

    fn scan_segment(&mut self) {
        if self.scanner.current() == '`' {
            self.scanner.next();
            while !self.scanner.eof() && self.scanner.current() != '`' {
                self.scanner.next();
            }
            self.scanner.next();
            return;
        }

        while WordComparer::is_word_char(self.scanner.current()) {
            self.scanner.next();
        }
    }

    fn scan_punctuation(&mut self, ch: char, pivot: usize) {
        match ch {
            '(' => {
                self.push(ch.to_string(), TokenKind::Punctuation, pivot);
                self.saved_clauses.push(self.clause);
            }
            ')' => {
                if let Some(outer) = self.saved_clauses.pop() {
                    self.clause = outer;
                }
                self.push(ch.to_string(), TokenKind::Punctuation, pivot);
            }
            _ => self.push(ch.to_string(), TokenKind::Punctuation, pivot),
        }
    }

    fn operator_len(scanner: &SqlScanner) -> Option<usize> {
        if TWO_CHAR_OPERATORS.iter().any(|operator| scanner.starts_with(operator)) {
            return Some(2);
        }
        SINGLE_CHAR_OPERATORS.contains(&scanner.current()).then_some(1)
    }

    fn push(&mut self, text: String, kind: TokenKind, position: usize) {
        self.tokens.push(Token::new(text, kind, self.clause, position));
    }
}
