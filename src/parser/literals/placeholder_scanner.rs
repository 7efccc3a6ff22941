use crate::parser::{SqlScanner, WordComparer};

/// Recognizes rendered `{{.name}}` markers so templates can be re-read.
pub struct PlaceholderScanner;

impl PlaceholderScanner {
    /// Length in chars of a well-formed placeholder starting `offset` chars
    /// after the cursor.
    pub fn placeholder_len_at(scanner: &SqlScanner, offset: usize) -> Option<usize> {
        if scanner.peek(offset) != '{' || scanner.peek(offset + 1) != '{' || scanner.peek(offset + 2) != '.' {
            return None;
        }

        let mut length = 3;
        while WordComparer::is_word_char(scanner.peek(offset + length)) {
            length += 1;
        }

        if length == 3 || scanner.peek(offset + length) != '}' || scanner.peek(offset + length + 1) != '}' {
            return None;
        }

        Some(length + 2)
    }

    pub fn scan(scanner: &mut SqlScanner) -> Option<String> {
        let length = Self::placeholder_len_at(scanner, 0)?;
        let pivot = scanner.position;
        scanner.jump(length);
        Some(scanner.text_from_pivot(pivot))
    }
}

#[cfg(test)]
pub mod tests {
    use crate::parser::{literals::PlaceholderScanner, SqlScanner};

    #[test]
    pub fn test_placeholder() {
        let mut scanner = SqlScanner::new("{{.where_col}} > 3");

        assert_eq!(PlaceholderScanner::scan(&mut scanner).as_deref(), Some("{{.where_col}}"));
        assert_eq!(scanner.current(), ' ');
    }

    #[test]
    pub fn test_placeholder_after_qualifier() {
        let scanner = SqlScanner::new("T1.{{.col}}");

        assert_eq!(PlaceholderScanner::placeholder_len_at(&scanner, 3), Some(8));
    }

    #[test]
    pub fn test_malformed_placeholder() {
        assert_eq!(PlaceholderScanner::placeholder_len_at(&SqlScanner::new("{{.}}"), 0), None);
        assert_eq!(PlaceholderScanner::placeholder_len_at(&SqlScanner::new("{{.name}"), 0), None);
        assert_eq!(PlaceholderScanner::placeholder_len_at(&SqlScanner::new("{name}"), 0), None);
    }
}
