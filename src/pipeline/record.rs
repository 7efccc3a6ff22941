use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const QUESTION_KEYS: [&str; 4] = ["question", "prompt", "nl", "instruction"];
const SQL_KEYS: [&str; 5] = ["sql", "query", "gold_sql", "gold", "pred_sql"];
const DB_ID_KEYS: [&str; 3] = ["db_id", "db", "schema"];
const SOURCE_KEYS: [&str; 2] = ["source", "origin"];

pub const UNKNOWN_SOURCE: &str = "unknown";

/// One (question, SQL) pair from a text-to-SQL dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub question: String,
    pub sql: String,
    pub db_id: String,
    pub source: String,
}

impl Record {
    pub fn new(question: &str, sql: &str, db_id: &str, source: &str) -> Self {
        Self {
            question: question.to_string(),
            sql: sql.to_string(),
            db_id: db_id.to_string(),
            source: source.to_string(),
        }
    }

    /// Builds a record from a JSON object, accepting the field names common
    /// across text-to-SQL datasets. Returns `None` for non-objects.
    pub fn normalize(value: &Value) -> Option<Self> {
        let object = value.as_object()?;

        let source = match first_text(object, &SOURCE_KEYS) {
            source if source.is_empty() => UNKNOWN_SOURCE.to_string(),
            source => source,
        };

        Some(Self {
            question: first_text(object, &QUESTION_KEYS),
            sql: first_text(object, &SQL_KEYS),
            db_id: first_text(object, &DB_ID_KEYS),
            source,
        })
    }

    /// Records without SQL never enter the pipeline.
    pub fn has_sql(&self) -> bool {
        !self.sql.trim().is_empty()
    }
}

/// Trimmed text of the first key holding a string, or empty.
fn first_text(object: &Map<String, Value>, keys: &[&str]) -> String {
    keys.iter()
        .find_map(|key| object.get(*key).and_then(Value::as_str))
        .map(|text| text.trim().to_string())
        .unwrap_or_default()
}
