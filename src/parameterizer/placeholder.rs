use once_cell::sync::Lazy;
use regex::Regex;

pub static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{\.(\w+)\}\}").expect("placeholder pattern is valid"));

pub fn render_placeholder(name: &str) -> String {
    format!("{{{{.{name}}}}}")
}

/// Placeholder names in order of appearance, repeats included.
pub fn placeholder_names(template: &str) -> Vec<String> {
    PLACEHOLDER_RE
        .captures_iter(template)
        .map(|captures| captures[1].to_string())
        .collect()
}
