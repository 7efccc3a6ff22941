use crate::{
    labels::{LabelFacts, LabelSet},
    parameterizer::{ParameterType, ParameterizedQuery},
    parser::{Clause, Operation, Token},
};

pub const MAX_DESCRIPTION_CHARS: usize = 500;

/// First matching aggregate call names the phrase.
const AGGREGATE_PHRASES: [(&[&str], &str); 4] = [
    (&["COUNT"], "counts records"),
    (&["SUM"], "calculates sum"),
    (&["AVG"], "calculates average"),
    (&["MAX", "MIN"], "finds extremes"),
];

const CLAUSE_PHRASES: [(Clause, &str); 5] = [
    (Clause::Join, "by joining multiple tables"),
    (Clause::GroupBy, "grouped by criteria"),
    (Clause::Where, "with filtering conditions"),
    (Clause::OrderBy, "sorted by specified column"),
    (Clause::Limit, "limited to top results"),
];

/// Retrieval-oriented description built from the statement structure and
/// its parameters rather than from the question.
///
/// Falls back to `question` when the structure says nothing. Labels, when
/// present, are appended as ` [Labels: ...]`.
pub fn describe(tokens: &[Token], query: &ParameterizedQuery, labels: &LabelSet, question: &str) -> String {
    let parts: Vec<String> = [describe_structure(tokens), describe_parameters(query)]
        .into_iter()
        .flatten()
        .collect();

    let mut description: String = parts.join(". ").chars().take(MAX_DESCRIPTION_CHARS).collect();
    if description.is_empty() {
        description = question.trim().to_string();
    }

    if labels.is_empty() {
        return description;
    }
    format!("{description} [Labels: {labels}]")
}

fn describe_structure(tokens: &[Token]) -> Option<String> {
    let facts = LabelFacts::new(tokens);
    if facts.operation != Operation::Select {
        return None;
    }

    let mut words = vec!["Retrieves data"];

    let aggregate = AGGREGATE_PHRASES
        .iter()
        .find(|(functions, _)| functions.iter().any(|function| facts.calls(function)))
        .map(|(_, phrase)| *phrase);
    words.extend(aggregate);

    words.extend(
        CLAUSE_PHRASES
            .iter()
            .filter(|(clause, _)| facts.has_clause(*clause))
            .map(|(_, phrase)| *phrase),
    );

    Some(words.join(" "))
}

fn describe_parameters(query: &ParameterizedQuery) -> Option<String> {
    let parameters = &query.parameters;
    let tables = parameters.iter().filter(|p| p.is_table()).count();
    let columns = parameters.iter().filter(|p| p.is_column()).count();
    let filters = parameters.iter().filter(|p| p.is_filter()).count();
    let strings = parameters
        .iter()
        .filter(|p| p.param_type == ParameterType::String && !p.is_table() && !p.is_column())
        .count();

    let groups: Vec<String> = [
        ("customizable tables", tables),
        ("flexible column selection", columns),
        ("adjustable filters and limits", filters),
        ("string pattern matching", strings),
    ]
    .into_iter()
    .filter(|(_, count)| *count > 0)
    .map(|(phrase, count)| format!("{phrase} ({count})"))
    .collect();

    if groups.is_empty() {
        return None;
    }
    Some(format!("Parameters: {}", groups.join(", ")))
}

#[cfg(test)]
mod tests {
    use crate::{
        labels::{label, LabelSet},
        parameterizer::{parameterize, ParameterizeOptions, ParameterizedQuery},
        parser::tokenize,
        pipeline::describe,
    };

    fn description_of(sql: &str) -> String {
        let tokens = tokenize(sql);
        let query = parameterize(&tokens, &ParameterizeOptions::new());
        let labels = label(&tokens, &query);
        describe(&tokens, &query, &labels, "question")
    }

    #[test]
    fn students_scenario() {
        assert_eq!(
            description_of("SELECT name FROM students WHERE age > 25"),
            "Retrieves data with filtering conditions. Parameters: customizable tables (1), \
             flexible column selection (2), adjustable filters and limits (1) [Labels: select, filtered]"
        );
    }

    #[test]
    fn aggregate_and_clauses() {
        let description = description_of(
            "SELECT T1.country, count(*) FROM singer AS T1 JOIN concert AS T2 ON T1.id = T2.sid \
             GROUP BY T1.country ORDER BY count(*) DESC LIMIT 1",
        );

        assert!(description.starts_with(
            "Retrieves data counts records by joining multiple tables grouped by criteria \
             sorted by specified column limited to top results. Parameters:"
        ));
    }

    #[test]
    fn literal_strings_are_pattern_matching() {
        let tokens = tokenize("SELECT * FROM t WHERE name LIKE '%a%'");
        let query = parameterize(&tokens, &ParameterizeOptions::literals_only());

        let description = describe(&tokens, &query, &LabelSet::new(), "q");

        assert_eq!(
            description,
            "Retrieves data with filtering conditions. Parameters: adjustable filters and limits (1), \
             string pattern matching (1)"
        );
    }

    #[test]
    fn falls_back_to_question() {
        let tokens = tokenize("DROP TABLE t");
        let query = ParameterizedQuery::unparameterized("DROP TABLE t");

        assert_eq!(describe(&tokens, &query, &LabelSet::new(), " Drop it "), "Drop it");
    }
}
