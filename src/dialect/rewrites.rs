use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::dialect::Dialect;

fn pattern(source: &str) -> Regex {
    Regex::new(source).expect("rewrite pattern is valid")
}

static NOW_RE: Lazy<Regex> = Lazy::new(|| pattern(r"(?i)\bNOW\(\)"));
static CURDATE_RE: Lazy<Regex> = Lazy::new(|| pattern(r"(?i)\bCURDATE\(\)"));
static CURTIME_RE: Lazy<Regex> = Lazy::new(|| pattern(r"(?i)\bCURTIME\(\)"));
static LENGTH_RE: Lazy<Regex> = Lazy::new(|| pattern(r"(?i)\bLENGTH\("));
static DATE_ADD_RE: Lazy<Regex> =
    Lazy::new(|| pattern(r"(?i)\bDATE_ADD\(([^,()]+),\s*INTERVAL\s+(\d+|@\w+)\s+(\w+)\)"));
static SQLITE_DATE_ADD_RE: Lazy<Regex> =
    Lazy::new(|| pattern(r"(?i)\bDATE_ADD\(([^,()]+),\s*INTERVAL\s+(\d+)\s+DAYS?\)"));
static SQLITE_BOUND_DATE_ADD_RE: Lazy<Regex> =
    Lazy::new(|| pattern(r"(?i)\bDATE_ADD\(([^,()]+),\s*INTERVAL\s+\?\s+DAYS?\)"));

static ORDER_BY_RE: Lazy<Regex> = Lazy::new(|| pattern(r"(?i)\bORDER\s+BY\b"));
static OFFSET_LIMIT_RE: Lazy<Regex> =
    Lazy::new(|| pattern(r"(?i)\bOFFSET\s+(\d+|@\w+)\s+LIMIT\s+(\d+|@\w+)"));
static LIMIT_RE: Lazy<Regex> =
    Lazy::new(|| pattern(r"(?i)\bLIMIT\s+(\d+|@\w+)(?:\s+OFFSET\s+(\d+|@\w+))?"));
static OFFSET_RE: Lazy<Regex> = Lazy::new(|| pattern(r"(?i)\bOFFSET\s+(\d+|@\w+)(\s+ROWS\b)?"));

/// Rewrites MySQL-flavoured row limits and date or string functions into
/// the target dialect. Runs on rendered SQL, after bind markers are in.
pub fn rewrite(sql: &str, dialect: Dialect) -> String {
    match dialect {
        Dialect::MySql => sql.to_string(),
        Dialect::Postgres => replace_each(sql, &[(&CURDATE_RE, "CURRENT_DATE"), (&CURTIME_RE, "CURRENT_TIME")]),
        Dialect::Sqlite => replace_each(
            sql,
            &[
                (&NOW_RE, "datetime('now')"),
                (&CURDATE_RE, "date('now')"),
                (&CURTIME_RE, "time('now')"),
                (&SQLITE_DATE_ADD_RE, "date(${1}, '+${2} days')"),
                (&SQLITE_BOUND_DATE_ADD_RE, "date(${1}, '+' || ? || ' days')"),
            ],
        ),
        Dialect::SqlServer => {
            let sql = replace_each(
                sql,
                &[
                    (&NOW_RE, "GETDATE()"),
                    (&CURDATE_RE, "CAST(GETDATE() AS DATE)"),
                    (&CURTIME_RE, "CAST(GETDATE() AS TIME)"),
                    (&LENGTH_RE, "LEN("),
                ],
            );
            let sql = DATE_ADD_RE.replace_all(&sql, |captures: &Captures| {
                format!("DATEADD({}, {}, {})", date_part(&captures[3]), &captures[2], captures[1].trim())
            });
            offset_fetch(&sql)
        }
    }
}

fn replace_each(sql: &str, rules: &[(&Lazy<Regex>, &str)]) -> String {
    rules
        .iter()
        .fold(sql.to_string(), |sql, (pattern, replacement)| {
            pattern.replace_all(&sql, *replacement).into_owned()
        })
}

/// SQL Server datepart for a MySQL `INTERVAL` unit; unknown units count days.
fn date_part(unit: &str) -> &'static str {
    match unit.to_ascii_uppercase().as_str() {
        "MONTH" => "month",
        "YEAR" => "year",
        "HOUR" => "hour",
        "MINUTE" => "minute",
        "SECOND" => "second",
        _ => "day",
    }
}

/// `LIMIT n [OFFSET m]` becomes `OFFSET m ROWS FETCH NEXT n ROWS ONLY`.
/// T-SQL only allows `OFFSET` after `ORDER BY`, so a statement without one
/// gets `ORDER BY (SELECT NULL)`.
fn offset_fetch(sql: &str) -> String {
    let order = if ORDER_BY_RE.is_match(sql) { "" } else { "ORDER BY (SELECT NULL) " };

    let sql = OFFSET_LIMIT_RE.replace_all(sql, |captures: &Captures| {
        format!("{order}OFFSET {} ROWS FETCH NEXT {} ROWS ONLY", &captures[1], &captures[2])
    });
    let sql = LIMIT_RE.replace_all(&sql, |captures: &Captures| {
        let offset = captures.get(2).map_or("0", |offset| offset.as_str());
        format!("{order}OFFSET {offset} ROWS FETCH NEXT {} ROWS ONLY", &captures[1])
    });
    OFFSET_RE
        .replace_all(&sql, |captures: &Captures| match captures.get(2) {
            Some(_) => captures[0].to_string(),
            None => format!("{order}OFFSET {} ROWS", &captures[1]),
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use crate::dialect::{rewrite, Dialect};

    #[test]
    fn limit_becomes_offset_fetch() {
        assert_eq!(
            rewrite("SELECT a FROM t ORDER BY a LIMIT @limit_n", Dialect::SqlServer),
            "SELECT a FROM t ORDER BY a OFFSET 0 ROWS FETCH NEXT @limit_n ROWS ONLY"
        );
        assert_eq!(
            rewrite("SELECT a FROM t ORDER BY a LIMIT 5 OFFSET 10", Dialect::SqlServer),
            "SELECT a FROM t ORDER BY a OFFSET 10 ROWS FETCH NEXT 5 ROWS ONLY"
        );
        assert_eq!(
            rewrite("SELECT a FROM t ORDER BY a OFFSET @offset_n LIMIT @limit_n", Dialect::SqlServer),
            "SELECT a FROM t ORDER BY a OFFSET @offset_n ROWS FETCH NEXT @limit_n ROWS ONLY"
        );
    }

    #[test]
    fn offset_fetch_needs_an_order() {
        assert_eq!(
            rewrite("SELECT a FROM t LIMIT 3", Dialect::SqlServer),
            "SELECT a FROM t ORDER BY (SELECT NULL) OFFSET 0 ROWS FETCH NEXT 3 ROWS ONLY"
        );
        assert_eq!(
            rewrite("SELECT a FROM t ORDER BY a OFFSET 4", Dialect::SqlServer),
            "SELECT a FROM t ORDER BY a OFFSET 4 ROWS"
        );
    }

    #[test]
    fn sql_server_functions() {
        assert_eq!(
            rewrite("SELECT NOW(), CURDATE(), curtime(), LENGTH(name) FROM t", Dialect::SqlServer),
            "SELECT GETDATE(), CAST(GETDATE() AS DATE), CAST(GETDATE() AS TIME), LEN(name) FROM t"
        );
        assert_eq!(
            rewrite("SELECT a FROM t WHERE d < DATE_ADD(created, INTERVAL @value MONTH)", Dialect::SqlServer),
            "SELECT a FROM t WHERE d < DATEADD(month, @value, created)"
        );
    }

    #[test]
    fn postgres_functions() {
        assert_eq!(
            rewrite("SELECT CURDATE(), CURTIME(), NOW()", Dialect::Postgres),
            "SELECT CURRENT_DATE, CURRENT_TIME, NOW()"
        );
    }

    #[test]
    fn sqlite_functions() {
        assert_eq!(
            rewrite("SELECT NOW(), CURDATE(), CURTIME()", Dialect::Sqlite),
            "SELECT datetime('now'), date('now'), time('now')"
        );
        assert_eq!(
            rewrite("SELECT a FROM t WHERE d > DATE_ADD(created, INTERVAL 7 DAY)", Dialect::Sqlite),
            "SELECT a FROM t WHERE d > date(created, '+7 days')"
        );
        assert_eq!(
            rewrite("SELECT a FROM t WHERE d > DATE_ADD(?, INTERVAL ? DAY)", Dialect::Sqlite),
            "SELECT a FROM t WHERE d > date(?, '+' || ? || ' days')"
        );
    }

    #[test]
    fn mysql_is_untouched() {
        let sql = "SELECT NOW() FROM t LIMIT 5 OFFSET 2";

        assert_eq!(rewrite(sql, Dialect::MySql), sql);
        assert_eq!(rewrite(sql, Dialect::Postgres), sql);
    }
}
