use once_cell::sync::Lazy;

use crate::parser::{Clause, SqlScanner, WordComparer};

pub static CLAUSE_COMPARERS: Lazy<ClauseComparers> = Lazy::new(ClauseComparers::new);

/// Keywords that open a clause, and the clause each one opens.
#[derive(Debug)]
pub struct ClauseComparers {
    pub select: WordComparer,
    pub from: WordComparer,
    pub join: WordComparer,
    pub inner_join: WordComparer,
    pub cross_join: WordComparer,
    pub left_join: WordComparer,
    pub left_outer_join: WordComparer,
    pub right_join: WordComparer,
    pub right_outer_join: WordComparer,
    pub full_join: WordComparer,
    pub full_outer_join: WordComparer,
    pub r#where: WordComparer,
    pub group_by: WordComparer,
    pub having: WordComparer,
    pub order_by: WordComparer,
    pub limit: WordComparer,
    pub offset: WordComparer,
}

impl Default for ClauseComparers {
    fn default() -> Self {
        Self::new()
    }
}

impl ClauseComparers {
    pub fn new() -> Self {
        Self {
            select: WordComparer::new("SELECT"),
            from: WordComparer::new("FROM"),
            join: WordComparer::new("JOIN"),
            inner_join: WordComparer::new("INNER JOIN"),
            cross_join: WordComparer::new("CROSS JOIN"),
            left_join: WordComparer::new("LEFT JOIN"),
            left_outer_join: WordComparer::new("LEFT OUTER JOIN"),
            right_join: WordComparer::new("RIGHT JOIN"),
            right_outer_join: WordComparer::new("RIGHT OUTER JOIN"),
            full_join: WordComparer::new("FULL JOIN"),
            full_outer_join: WordComparer::new("FULL OUTER JOIN"),
            r#where: WordComparer::new("WHERE"),
            group_by: WordComparer::new("GROUP BY"),
            having: WordComparer::new("HAVING"),
            order_by: WordComparer::new("ORDER BY"),
            limit: WordComparer::new("LIMIT"),
            offset: WordComparer::new("OFFSET"),
        }
    }

    /// Longest clause keyword matching at the cursor, with its length in chars.
    pub fn clause_at(&self, scanner: &SqlScanner) -> Option<(Clause, usize)> {
        // multi-word forms first so `LEFT OUTER JOIN` never stops at `LEFT`
        let ordered = [
            (&self.left_outer_join, Clause::Join),
            (&self.right_outer_join, Clause::Join),
            (&self.full_outer_join, Clause::Join),
            (&self.left_join, Clause::Join),
            (&self.right_join, Clause::Join),
            (&self.full_join, Clause::Join),
            (&self.inner_join, Clause::Join),
            (&self.cross_join, Clause::Join),
            (&self.group_by, Clause::GroupBy),
            (&self.order_by, Clause::OrderBy),
            (&self.select, Clause::Select),
            (&self.from, Clause::From),
            (&self.join, Clause::Join),
            (&self.r#where, Clause::Where),
            (&self.having, Clause::Having),
            (&self.limit, Clause::Limit),
            (&self.offset, Clause::Offset),
        ];

        ordered
            .into_iter()
            .find_map(|(comparer, clause)| comparer.compare(scanner).map(|length| (clause, length)))
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::{Clause, SqlScanner, CLAUSE_COMPARERS};

    #[test]
    pub fn test_outer_join_wins_over_left() {
        let scanner = SqlScanner::new("LEFT OUTER JOIN orders o");

        assert_eq!(CLAUSE_COMPARERS.clause_at(&scanner), Some((Clause::Join, 15)));
    }

    #[test]
    pub fn test_left_alone_is_not_a_clause() {
        let scanner = SqlScanner::new("left(name, 2)");

        assert_eq!(CLAUSE_COMPARERS.clause_at(&scanner), None);
    }

    #[test]
    pub fn test_order_by() {
        let scanner = SqlScanner::new("order by age desc");

        assert_eq!(CLAUSE_COMPARERS.clause_at(&scanner), Some((Clause::OrderBy, 8)));
    }
}
