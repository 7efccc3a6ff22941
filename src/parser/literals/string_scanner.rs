use crate::parser::SqlScanner;

pub struct StringScanner;

impl StringScanner {
    pub fn is_string_delimiter(ch: char) -> bool {
        ch == '\'' || ch == '"'
    }

    /// Scans a quoted literal and returns it with its quotes.
    ///
    /// Doubled quotes (`'it''s'`) and backslash escapes stay inside the
    /// literal. An unterminated literal runs to the end of input.
    pub fn scan(scanner: &mut SqlScanner) -> String {
        let pivot = scanner.position;
        let quote = scanner.current();
        scanner.next();

        while !scanner.eof() {
            let current = scanner.current();
            if current == '\\' {
                scanner.jump(2);
                continue;
            }
            if current == quote {
                if scanner.peek(1) == quote {
                    scanner.jump(2);
                    continue;
                }
                scanner.next();
                break;
            }
            scanner.next();
        }

        scanner.text_from_pivot(pivot)
    }
}
