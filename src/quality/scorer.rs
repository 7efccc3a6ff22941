use indexmap::IndexMap;
use tracing::trace;

use crate::{
    parameterizer::ParameterizedQuery,
    parser::tokenize,
    quality::{MetricInput, QualityScore, METRICS},
};

/// Scores a parameterized query. Pure: the same query always gets the same
/// score.
pub fn score(query: &ParameterizedQuery) -> QualityScore {
    let tokens = tokenize(&query.template);
    let input = MetricInput { query, tokens: &tokens };

    let breakdown: IndexMap<String, f64> = METRICS
        .iter()
        .map(|metric| (metric.name.to_string(), (metric.measure)(&input, metric.weight)))
        .collect();

    let score = QualityScore::from_breakdown(breakdown);
    trace!(value = score.value, breakdown = ?score.breakdown, "scored template");
    score
}

#[cfg(test)]
mod tests {
    use crate::{
        parameterizer::{parameterize, ParameterizeOptions},
        parser::tokenize,
        quality::score,
    };

    #[test]
    fn students_scenario() {
        let query = parameterize(
            &tokenize("SELECT name FROM students WHERE age > 25"),
            &ParameterizeOptions::new(),
        );

        let score = score(&query);

        assert_eq!(score.get("parameter_diversity"), Some(20.0));
        assert_eq!(score.get("parameter_count"), Some(20.0));
        assert_eq!(score.get("structural_complexity"), Some(3.0));
        assert_eq!(score.get("reusability"), Some(10.0));
        assert_eq!(score.value, 53.0);
    }

    #[test]
    fn breakdown_keeps_metric_order() {
        let query = parameterize(&tokenize("SELECT * FROM t"), &ParameterizeOptions::new());

        let score = score(&query);

        assert_eq!(
            score.breakdown.keys().collect::<Vec<_>>(),
            vec!["parameter_diversity", "parameter_count", "structural_complexity", "reusability"]
        );
        assert!((0.0..=100.0).contains(&score.value));
    }

    #[test]
    fn richer_queries_score_higher() {
        let plain = parameterize(&tokenize("SELECT a FROM t WHERE b = 1"), &ParameterizeOptions::new());
        let rich = parameterize(
            &tokenize("SELECT a, count(*) FROM t JOIN u ON t.id = u.tid WHERE b = 'x' GROUP BY a ORDER BY a LIMIT 10"),
            &ParameterizeOptions::new(),
        );

        assert!(score(&rich).value > score(&plain).value);
    }

    #[test]
    fn dotted_quoted_columns_keep_the_structure() {
        let query = parameterize(
            &tokenize(
                "SELECT `t.name` FROM t JOIN u ON t.id = u.tid WHERE b = 1 GROUP BY `t.name` ORDER BY `t.name` LIMIT 3",
            ),
            &ParameterizeOptions::new(),
        );

        assert!(query.check_consistency().is_ok());
        assert!(query.template.starts_with("SELECT {{.select_col}} FROM {{.table}} JOIN {{.table_2}}"));
        assert_eq!(score(&query).get("structural_complexity"), Some(25.0));
    }

    #[test]
    fn deterministic() {
        let query = parameterize(&tokenize("SELECT a FROM t WHERE b > 2 LIMIT 5"), &ParameterizeOptions::new());

        assert_eq!(score(&query), score(&query));
    }
}
