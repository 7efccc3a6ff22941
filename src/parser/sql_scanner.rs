/// Character cursor over a SQL string.
///
/// Positions are character offsets, not byte offsets, so multi-byte text in
/// string literals never splits a token.
#[derive(Debug, Default)]
pub struct SqlScanner {
    pub position: usize,
    pub length: usize,
    pub text_v: Vec<char>,
}

impl SqlScanner {
    pub fn new(sql: &str) -> Self {
        let text_v: Vec<char> = sql.chars().collect();
        Self {
            position: 0,
            length: text_v.len(),
            text_v,
        }
    }

    pub fn eof(&self) -> bool {
        self.position >= self.length
    }

    pub fn current(&self) -> char {
        self.peek(0)
    }

    /// Character `ahead` positions after the cursor, `'\0'` past the end.
    pub fn peek(&self, ahead: usize) -> char {
        self.text_v
            .get(self.position + ahead)
            .copied()
            .unwrap_or('\0')
    }

    pub fn next(&mut self) {
        if !self.eof() {
            self.position += 1;
        }
    }

    pub fn jump(&mut self, ahead: usize) {
        self.position = (self.position + ahead).min(self.length);
    }

    pub fn next_non_whitespace(&mut self) {
        while !self.eof() && self.current().is_whitespace() {
            self.next();
        }
    }

    /// Exact, case-sensitive match of `pattern` at the cursor.
    pub fn starts_with(&self, pattern: &str) -> bool {
        pattern
            .chars()
            .enumerate()
            .all(|(offset, ch)| self.peek(offset) == ch)
    }

    pub fn text_from_range(&self, start: usize, end: usize) -> String {
        let end = end.min(self.length);
        let start = start.min(end);
        self.text_v[start..end].iter().collect()
    }

    pub fn text_from_pivot(&self, pivot: usize) -> String {
        self.text_from_range(pivot, self.position)
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::SqlScanner;

    #[test]
    pub fn test_peek_past_end() {
        let scanner = SqlScanner::new("ab");

        assert_eq!(scanner.current(), 'a');
        assert_eq!(scanner.peek(1), 'b');
        assert_eq!(scanner.peek(2), '\0');
    }

    #[test]
    pub fn test_jump_is_clamped() {
        let mut scanner = SqlScanner::new("SELECT");
        scanner.jump(40);

        assert!(scanner.eof());
        assert_eq!(scanner.position, 6);
    }

    #[test]
    pub fn test_positions_are_char_based() {
        let mut scanner = SqlScanner::new("'Évora' x");
        scanner.jump(7);

        assert_eq!(scanner.text_from_pivot(0), "'Évora'");
        scanner.next_non_whitespace();
        assert_eq!(scanner.current(), 'x');
    }
}
