use crate::parser::SqlScanner;

pub struct NumberScanner;

impl NumberScanner {
    pub fn is_number_start(scanner: &SqlScanner) -> bool {
        let current = scanner.current();
        current.is_ascii_digit() || (current == '.' && scanner.peek(1).is_ascii_digit())
    }

    /// Scans `digits[.digits]` or `.digits`. Signs are left to the operator
    /// table.
    pub fn scan(scanner: &mut SqlScanner) -> String {
        let pivot = scanner.position;
        let mut seen_dot = false;

        while !scanner.eof() {
            let current = scanner.current();
            if current.is_ascii_digit() {
                scanner.next();
            } else if current == '.' && !seen_dot && scanner.peek(1).is_ascii_digit() {
                seen_dot = true;
                scanner.next();
            } else {
                break;
            }
        }

        scanner.text_from_pivot(pivot)
    }
}

#[cfg(test)]
pub mod tests {
    use crate::parser::{literals::NumberScanner, SqlScanner};

    #[test]
    pub fn test_number_scanner_int() {
        let mut scanner = SqlScanner::new("25 ");

        assert!(NumberScanner::is_number_start(&scanner));
        assert_eq!(NumberScanner::scan(&mut scanner), "25");
    }

    #[test]
    pub fn test_number_scanner_float() {
        let mut scanner = SqlScanner::new("32.5,");

        assert_eq!(NumberScanner::scan(&mut scanner), "32.5");
        assert_eq!(scanner.current(), ',');
    }

    #[test]
    pub fn test_number_scanner_leading_dot() {
        let mut scanner = SqlScanner::new(".75)");

        assert!(NumberScanner::is_number_start(&scanner));
        assert_eq!(NumberScanner::scan(&mut scanner), ".75");
    }

    #[test]
    pub fn test_number_scanner_stops_at_second_dot() {
        let mut scanner = SqlScanner::new("1.2.3");

        assert_eq!(NumberScanner::scan(&mut scanner), "1.2");
    }

    #[test]
    pub fn test_dot_alone_is_not_a_number() {
        let scanner = SqlScanner::new(".name");

        assert!(!NumberScanner::is_number_start(&scanner));
    }
}
