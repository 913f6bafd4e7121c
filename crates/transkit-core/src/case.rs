//! Case-convention conversion between camelCase and delimited snake_case
//!
//! `camel_to_snake` splits an identifier at case and digit boundaries and
//! lower-cases the result; `snake_to_camel` splits on a delimiter and joins the
//! tokens back in camelCase. The two directions are asymmetric: undelimited
//! input passes through `snake_to_camel` untouched, while `camel_to_snake`
//! always lower-cases.
//!
//! Boundaries are classified on ASCII letters and digits only.
//!
//! # Examples
//!
//! ```
//! use transkit_core::case::{camel_to_snake, snake_to_camel};
//!
//! assert_eq!(camel_to_snake("getHTTPResponseCode", "_"), "get_http_response_code");
//! assert_eq!(camel_to_snake("CamelCase", "."), "camel.case");
//! assert_eq!(snake_to_camel("snake.CasE", "."), "snakeCase");
//! assert_eq!(snake_to_camel("Theid", "_"), "Theid");
//! ```

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::OnceLock;

/// Delimiter used when none is given
pub const DEFAULT_DELIMITER: &str = "_";

/// Any character followed by an uppercase letter that opens a lowercase run
static WORD_START: OnceLock<Regex> = OnceLock::new();

/// A lowercase letter or digit directly followed by an uppercase letter
static LOWER_UPPER: OnceLock<Regex> = OnceLock::new();

fn word_start() -> &'static Regex {
    WORD_START.get_or_init(|| Regex::new(r"(.)([A-Z][a-z]+)").expect("word start pattern is valid"))
}

fn lower_upper() -> &'static Regex {
    LOWER_UPPER.get_or_init(|| Regex::new(r"([a-z0-9])([A-Z])").expect("lower/upper pattern is valid"))
}

/// Insert `delimiter` between the two capture groups of every match
fn split_with(pattern: &Regex, input: &str, delimiter: &str) -> String {
    pattern
        .replace_all(input, |caps: &Captures| format!("{}{}{}", &caps[1], delimiter, &caps[2]))
        .into_owned()
}

/// Convert a camelCase (or PascalCase) identifier to delimited snake_case.
///
/// Acronym runs stay together (`HTTPResponse` becomes `http_response`) and a
/// digit ends a word before an uppercase letter (`get2HTTP` becomes
/// `get2_http`). The delimiter is inserted literally and may be any string.
pub fn camel_to_snake(input: &str, delimiter: &str) -> String {
    let words = split_with(word_start(), input, delimiter);
    split_with(lower_upper(), &words, delimiter).to_lowercase()
}

/// Convert a delimited snake_case identifier to camelCase.
///
/// Input that does not contain the delimiter is returned unchanged. Otherwise
/// the first token is lower-cased and every following token is capitalised,
/// whatever its original casing. An empty delimiter never matches.
pub fn snake_to_camel(input: &str, delimiter: &str) -> String {
    if delimiter.is_empty() || !input.contains(delimiter) {
        return input.to_string();
    }

    let mut tokens = input.split(delimiter);
    let mut camel = tokens.next().unwrap_or_default().to_lowercase();
    for token in tokens {
        camel.push_str(&capitalize(token));
    }
    camel
}

/// Upper-case the first character and lower-case the remainder
fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => {
            let mut capitalized: String = first.to_uppercase().collect();
            capitalized.push_str(&chars.as_str().to_lowercase());
            capitalized
        }
        None => String::new(),
    }
}

/// `camel_to_snake` with the default `_` delimiter
pub fn to_snake(input: &str) -> String {
    camel_to_snake(input, DEFAULT_DELIMITER)
}

/// `snake_to_camel` with the default `_` delimiter
pub fn to_camel(input: &str) -> String {
    snake_to_camel(input, DEFAULT_DELIMITER)
}

/// Textual form of an arbitrary value, used to make the case functions total.
///
/// Strings are taken verbatim and `null` reads as `None`; every other value
/// uses its compact JSON text.
pub fn coerce_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "None".to_string(),
        other => other.to_string(),
    }
}

/// `camel_to_snake` over any value, coercing it to text first
pub fn camel_to_snake_value(value: &Value, delimiter: &str) -> String {
    camel_to_snake(&coerce_to_text(value), delimiter)
}

/// `snake_to_camel` over any value, coercing it to text first
pub fn snake_to_camel_value(value: &Value, delimiter: &str) -> String {
    snake_to_camel(&coerce_to_text(value), delimiter)
}

/// Target case convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    /// Delimited lowercase words
    Snake,
    /// camelCase
    Camel,
}

impl CaseStyle {
    /// Convert `input` into this case style
    pub fn apply(self, input: &str, delimiter: &str) -> String {
        match self {
            CaseStyle::Snake => camel_to_snake(input, delimiter),
            CaseStyle::Camel => snake_to_camel(input, delimiter),
        }
    }
}
