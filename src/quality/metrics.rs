use std::collections::HashSet;

use crate::{
    parameterizer::{ParameterType, ParameterizedQuery},
    parser::{Clause, Token},
};

/// What a metric gets to look at: the query and its re-tokenized template.
pub struct MetricInput<'a> {
    pub query: &'a ParameterizedQuery,
    pub tokens: &'a [Token],
}

/// One row of the scoring table. `measure` returns points in `[0, weight]`.
pub struct Metric {
    pub name: &'static str,
    pub weight: f64,
    pub measure: fn(&MetricInput, f64) -> f64,
}

pub const PARAMETER_COUNT_SATURATION: usize = 5;

/// Weights sum to 100.
pub static METRICS: [Metric; 4] = [
    Metric {
        name: "parameter_diversity",
        weight: 30.0,
        measure: parameter_diversity,
    },
    Metric {
        name: "parameter_count",
        weight: 25.0,
        measure: parameter_count,
    },
    Metric {
        name: "structural_complexity",
        weight: 25.0,
        measure: structural_complexity,
    },
    Metric {
        name: "reusability",
        weight: 20.0,
        measure: reusability,
    },
];

/// 10 points per distinct type; one type repeated across several
/// parameters earns only 5.
fn parameter_diversity(input: &MetricInput, weight: f64) -> f64 {
    let parameters = &input.query.parameters;
    let types: HashSet<ParameterType> = parameters.iter().map(|parameter| parameter.param_type).collect();

    let points = match types.len() {
        0 => 0.0,
        1 if parameters.len() > 1 => 5.0,
        distinct => 10.0 * distinct as f64,
    };
    points.min(weight)
}

fn parameter_count(input: &MetricInput, weight: f64) -> f64 {
    let count = input.query.parameters.len().min(PARAMETER_COUNT_SATURATION);
    weight * count as f64 / PARAMETER_COUNT_SATURATION as f64
}

const STRUCTURE_POINTS: [(Clause, f64); 5] = [
    (Clause::Join, 8.0),
    (Clause::GroupBy, 7.0),
    (Clause::OrderBy, 4.0),
    (Clause::Limit, 3.0),
    (Clause::Where, 3.0),
];

fn structural_complexity(input: &MetricInput, weight: f64) -> f64 {
    let present: HashSet<Clause> = input
        .tokens
        .iter()
        .filter(|token| token.clause != Clause::Unknown)
        .map(|token| token.clause)
        .collect();

    let points: f64 = STRUCTURE_POINTS
        .iter()
        .filter(|(clause, _)| present.contains(clause))
        .fold(0.0, |acc, (_, points)| acc + points);
    points.min(weight)
}

fn reusability(input: &MetricInput, weight: f64) -> f64 {
    if input.tokens.is_empty() {
        return 0.0;
    }

    let parameterized = input.tokens.iter().filter(|token| token.is_parameterized()).count();
    weight * parameterized as f64 / input.tokens.len() as f64
}

#[cfg(test)]
mod tests {
    use crate::{
        parameterizer::{Parameter, ParameterType, ParameterizedQuery},
        parser::{tokenize, Clause},
        quality::{MetricInput, METRICS},
    };

    fn param(name: &str, param_type: ParameterType) -> Parameter {
        Parameter::new(name.to_string(), param_type, String::new(), Clause::Where, String::new())
    }

    fn measure(metric: &str, template: &str, parameters: Vec<Parameter>) -> f64 {
        let query = ParameterizedQuery::new(template.to_string(), parameters);
        let tokens = tokenize(&query.template);
        let input = MetricInput { query: &query, tokens: &tokens };
        let metric = METRICS.iter().find(|m| m.name == metric).unwrap();
        (metric.measure)(&input, metric.weight)
    }

    #[test]
    fn weights_sum_to_hundred() {
        assert_eq!(METRICS.iter().map(|m| m.weight).sum::<f64>(), 100.0);
    }

    #[test]
    fn diversity_penalizes_a_single_repeated_type() {
        let strings = vec![param("a", ParameterType::String), param("b", ParameterType::String)];
        let mixed = vec![
            param("a", ParameterType::String),
            param("b", ParameterType::Number),
            param("c", ParameterType::Date),
        ];

        assert_eq!(measure("parameter_diversity", "", Vec::new()), 0.0);
        assert_eq!(measure("parameter_diversity", "", vec![param("a", ParameterType::Number)]), 10.0);
        assert_eq!(measure("parameter_diversity", "", strings), 5.0);
        assert_eq!(measure("parameter_diversity", "", mixed), 30.0);
    }

    #[test]
    fn count_saturates() {
        let many = (0..8).map(|i| param(&format!("p{i}"), ParameterType::String)).collect();

        assert_eq!(measure("parameter_count", "", vec![param("a", ParameterType::String)]), 5.0);
        assert_eq!(measure("parameter_count", "", many), 25.0);
    }

    #[test]
    fn structure_counts_clauses() {
        assert_eq!(measure("structural_complexity", "SELECT a FROM t", Vec::new()), 0.0);
        assert_eq!(
            measure(
                "structural_complexity",
                "SELECT a FROM t JOIN u ON t.id = u.id WHERE b = 1 GROUP BY a ORDER BY a LIMIT 3",
                Vec::new()
            ),
            25.0
        );
    }

    #[test]
    fn no_structure_is_positive_zero() {
        let points = measure("structural_complexity", "SELECT a FROM t", Vec::new());

        assert!(points.is_sign_positive());
        assert_eq!(format!("{points}"), "0");
    }

    #[test]
    fn reusability_is_token_ratio() {
        assert_eq!(measure("reusability", "SELECT {{.a}} FROM {{.b}}", Vec::new()), 10.0);
        assert_eq!(measure("reusability", "", Vec::new()), 0.0);
    }
}
