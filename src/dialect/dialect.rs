use std::{fmt::Display, str::FromStr};

use regex::Captures;
use serde::{Deserialize, Serialize};

use crate::{
    dialect::rewrite,
    parameterizer::{ParameterizedQuery, PLACEHOLDER_RE},
    Result, ToolError,
};

/// Target database flavour: bind markers, row limits and date functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    MySql,
    Sqlite,
    Postgres,
    SqlServer,
}

impl FromStr for Dialect {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "mysql" | "mariadb" => Ok(Dialect::MySql),
            "sqlite" | "sqlite3" => Ok(Dialect::Sqlite),
            "postgres" | "postgresql" | "pg" => Ok(Dialect::Postgres),
            "sqlserver" | "mssql" | "tsql" => Ok(Dialect::SqlServer),
            other => Err(ToolError::InvalidConfig(format!("unknown dialect '{other}'"))),
        }
    }
}

impl Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::MySql => f.write_str("mysql"),
            Dialect::Sqlite => f.write_str("sqlite"),
            Dialect::Postgres => f.write_str("postgres"),
            Dialect::SqlServer => f.write_str("sqlserver"),
        }
    }
}

/// Driver-ready SQL plus the parameter names to bind, in bind order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedStatement {
    pub sql: String,
    pub bindings: Vec<String>,
}

/// Replaces every `{{.name}}` with the dialect's bind marker, then rewrites
/// row limits and date functions the dialect spells differently.
///
/// Positional markers (`?`) bind once per occurrence; numbered (`$n`) and
/// named (`@name`) markers bind once per distinct name.
pub fn render(query: &ParameterizedQuery, dialect: Dialect) -> RenderedStatement {
    let mut bindings: Vec<String> = Vec::new();

    let sql = PLACEHOLDER_RE
        .replace_all(&query.template, |captures: &Captures| {
            let name = &captures[1];
            match dialect {
                Dialect::MySql | Dialect::Sqlite => {
                    bindings.push(name.to_string());
                    "?".to_string()
                }
                Dialect::Postgres => {
                    let position = match bindings.iter().position(|bound| bound == name) {
                        Some(position) => position,
                        None => {
                            bindings.push(name.to_string());
                            bindings.len() - 1
                        }
                    };
                    format!("${}", position + 1)
                }
                Dialect::SqlServer => {
                    if !bindings.iter().any(|bound| bound == name) {
                        bindings.push(name.to_string());
                    }
                    format!("@{name}")
                }
            }
        })
        .into_owned();

    RenderedStatement {
        sql: rewrite(&sql, dialect),
        bindings,
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        dialect::{render, Dialect},
        parameterizer::{parameterize, ParameterizeOptions, ParameterizedQuery},
        parser::tokenize,
    };

    fn students() -> ParameterizedQuery {
        parameterize(
            &tokenize("SELECT name FROM students WHERE age > 25 LIMIT 10"),
            &ParameterizeOptions::literals_only(),
        )
    }

    #[test]
    fn positional_markers() {
        let rendered = render(&students(), Dialect::Sqlite);

        assert_eq!(rendered.sql, "SELECT name FROM students WHERE age > ? LIMIT ?");
        assert_eq!(rendered.bindings, vec!["value", "limit_n"]);
    }

    #[test]
    fn numbered_markers_reuse_positions() {
        let query = ParameterizedQuery::unparameterized(
            "SELECT a FROM t WHERE b > {{.low}} AND c < {{.high}} OR d = {{.low}}",
        );

        let rendered = render(&query, Dialect::Postgres);

        assert_eq!(rendered.sql, "SELECT a FROM t WHERE b > $1 AND c < $2 OR d = $1");
        assert_eq!(rendered.bindings, vec!["low", "high"]);
    }

    #[test]
    fn named_markers() {
        let rendered = render(&students(), Dialect::SqlServer);

        assert_eq!(
            rendered.sql,
            "SELECT name FROM students WHERE age > @value ORDER BY (SELECT NULL) OFFSET 0 ROWS FETCH NEXT @limit_n ROWS ONLY"
        );
        assert_eq!(rendered.bindings, vec!["value", "limit_n"]);
    }

    #[test]
    fn sql_server_pages_with_offset_fetch() {
        let query = parameterize(
            &tokenize("SELECT name FROM students WHERE age > 25 ORDER BY age LIMIT 10 OFFSET 20"),
            &ParameterizeOptions::literals_only(),
        );

        let rendered = render(&query, Dialect::SqlServer);

        assert_eq!(
            rendered.sql,
            "SELECT name FROM students WHERE age > @value ORDER BY age OFFSET @offset_n ROWS FETCH NEXT @limit_n ROWS ONLY"
        );
        assert_eq!(rendered.bindings, vec!["value", "limit_n", "offset_n"]);
    }

    #[test]
    fn date_functions_follow_the_dialect() {
        let query = ParameterizedQuery::unparameterized("SELECT a FROM t WHERE d > CURDATE()");

        assert_eq!(render(&query, Dialect::MySql).sql, "SELECT a FROM t WHERE d > CURDATE()");
        assert_eq!(render(&query, Dialect::Postgres).sql, "SELECT a FROM t WHERE d > CURRENT_DATE");
        assert_eq!(render(&query, Dialect::Sqlite).sql, "SELECT a FROM t WHERE d > date('now')");
        assert_eq!(
            render(&query, Dialect::SqlServer).sql,
            "SELECT a FROM t WHERE d > CAST(GETDATE() AS DATE)"
        );
    }

    #[test]
    fn parses_names() {
        assert_eq!("PostgreSQL".parse::<Dialect>().unwrap(), Dialect::Postgres);
        assert_eq!("mssql".parse::<Dialect>().unwrap(), Dialect::SqlServer);
        assert_eq!(Dialect::MySql.to_string(), "mysql");
        assert!("oracle".parse::<Dialect>().is_err());
    }
}
