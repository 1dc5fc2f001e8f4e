//! Placeholder substitution.
//!
//! # Responsibilities
//! - Replace every `{{ name }}` token (whitespace-tolerant inside the
//!   braces) with the variable's value
//! - Fetch-then-render for templates addressed by path
//!
//! # Design Decisions
//! - `render` is pure; `load_and_render` contains fetch failures locally
//!   (log + empty string) so page scripts never see an exception

use crate::page::fetch::TemplateFetcher;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::OnceLock;

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{\{\s*([A-Za-z0-9_]+)\s*\}\}").unwrap())
}

/// Substitute `{{ name }}` tokens in `source` with values from `vars`.
/// Tokens without a matching variable are left untouched.
pub fn render(source: &str, vars: &HashMap<String, String>) -> String {
    placeholder_pattern()
        .replace_all(source, |caps: &Captures<'_>| match vars.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Fetch the template at `path` and substitute `vars`. On fetch failure,
/// logs the error and returns an empty string.
pub async fn load_and_render(
    fetcher: &dyn TemplateFetcher,
    path: &str,
    vars: &HashMap<String, String>,
) -> String {
    match fetcher.fetch(path).await {
        Ok(source) => render(&source, vars),
        Err(error) => {
            tracing::error!(path = %path, error = %error, "Failed to load template");
            String::new()
        }
    }
}
