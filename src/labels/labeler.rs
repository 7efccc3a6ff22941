use tracing::trace;

use crate::{
    labels::{LabelEffect, LabelFacts, LabelSet, LABEL_RULES},
    parameterizer::ParameterizedQuery,
    parser::Token,
};

/// Tags a statement from its tokens: operation first, then the structural
/// tags in rule order.
pub fn label(tokens: &[Token], query: &ParameterizedQuery) -> LabelSet {
    let facts = LabelFacts::new(tokens);
    let mut labels = LabelSet::new();

    for rule in LABEL_RULES.iter().filter(|rule| (rule.applies)(&facts)) {
        match rule.effect {
            LabelEffect::Operation => {
                if let Some(tag) = facts.operation.label() {
                    labels.insert(tag);
                }
            }
            LabelEffect::Tag(tag) => {
                labels.insert(tag);
            }
        }
    }

    trace!(template = %query.template, labels = %labels, "labeled template");
    labels
}

#[cfg(test)]
mod tests {
    use crate::{
        labels::{label, LabelSet},
        parameterizer::{parameterize, ParameterizeOptions},
        parser::tokenize,
    };

    fn labels_of(sql: &str) -> LabelSet {
        let tokens = tokenize(sql);
        let query = parameterize(&tokens, &ParameterizeOptions::new());
        label(&tokens, &query)
    }

    #[test]
    fn students_scenario() {
        let labels = labels_of("SELECT name FROM students WHERE age > 25");

        assert_eq!(labels.to_string(), "select, filtered");
    }

    #[test]
    fn rule_order_is_fixed() {
        let labels = labels_of(
            "SELECT a FROM t JOIN u ON t.id = u.tid WHERE b = 1 GROUP BY a ORDER BY a LIMIT 3",
        );

        assert_eq!(labels.to_string(), "select, join, grouped, ordered, filtered, limited");
    }

    #[test]
    fn supplemental_tags() {
        let labels = labels_of(
            "SELECT DISTINCT a, COUNT(*) FROM t WHERE id IN (SELECT tid FROM u) \
             GROUP BY a HAVING count(*) > 1 LIMIT 5 OFFSET 10",
        );

        assert_eq!(
            labels.to_string(),
            "select, grouped, filtered, limited, having, offset, distinct, aggregate, subquery"
        );
    }

    #[test]
    fn operation_labels() {
        assert!(labels_of("DELETE FROM t WHERE a = 1").contains("delete"));
        assert!(labels_of("UPDATE t SET a = 1").contains("update"));
        assert!(labels_of("INSERT INTO t VALUES (1)").contains("insert"));
        assert!(labels_of("DROP TABLE t").contains("drop"));
        assert!(labels_of("TRUNCATE TABLE t").is_empty());
    }

    #[test]
    fn no_duplicates_with_many_joins() {
        let labels = labels_of("SELECT a FROM t JOIN u ON t.id = u.id LEFT JOIN v ON u.id = v.id");

        assert_eq!(labels.iter().filter(|l| *l == "join").count(), 1);
    }
}
