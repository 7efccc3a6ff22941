use crate::parser::SqlScanner;

/// Case-insensitive matcher for a keyword made of one or more words.
///
/// Any run of whitespace is accepted between the words, so `GROUP BY`
/// matches `group\n   by` as well.
#[derive(Debug, Clone)]
pub struct WordComparer {
    pub keyword: String,
    words: Vec<Vec<char>>,
}

impl WordComparer {
    pub fn new(keyword: &str) -> Self {
        Self {
            keyword: keyword.to_uppercase(),
            words: keyword
                .split_whitespace()
                .map(|word| word.to_uppercase().chars().collect())
                .collect(),
        }
    }

    pub fn is_word_start(ch: char) -> bool {
        ch.is_alphabetic() || ch == '_'
    }

    pub fn is_word_char(ch: char) -> bool {
        ch.is_alphanumeric() || ch == '_' || ch == '$'
    }

    /// Number of characters consumed when the keyword matches at the cursor.
    pub fn compare(&self, scanner: &SqlScanner) -> Option<usize> {
        let mut offset = 0;

        for (index, word) in self.words.iter().enumerate() {
            if index > 0 {
                let gap = Self::whitespace_run(scanner, offset);
                if gap == 0 {
                    return None;
                }
                offset += gap;
            }

            for (position, ch) in word.iter().enumerate() {
                if scanner.peek(offset + position).to_ascii_uppercase() != *ch {
                    return None;
                }
            }
            offset += word.len();
        }

        if Self::is_word_char(scanner.peek(offset)) {
            return None;
        }

        Some(offset)
    }

    fn whitespace_run(scanner: &SqlScanner, from: usize) -> usize {
        let mut length = 0;
        while scanner.peek(from + length).is_whitespace() {
            length += 1;
        }
        length
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{SqlScanner, WordComparer};

    #[test]
    pub fn test_single_word() {
        let comparer = WordComparer::new("WHERE");

        assert_eq!(comparer.compare(&SqlScanner::new("where age > 3")), Some(5));
        assert_eq!(comparer.compare(&SqlScanner::new("WHERE")), Some(5));
    }

    #[test]
    pub fn test_rejects_longer_identifier() {
        let comparer = WordComparer::new("FROM");

        assert_eq!(comparer.compare(&SqlScanner::new("from_date = 1")), None);
        assert_eq!(comparer.compare(&SqlScanner::new("fromage")), None);
    }

    #[test]
    pub fn test_multi_word_with_irregular_whitespace() {
        let comparer = WordComparer::new("GROUP BY");

        assert_eq!(comparer.compare(&SqlScanner::new("group\n   by city")), Some(11));
        assert_eq!(comparer.compare(&SqlScanner::new("GROUPBY city")), None);
        assert_eq!(comparer.compare(&SqlScanner::new("GROUP city")), None);
    }
}
