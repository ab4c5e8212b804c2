//! Raw List Field Parsing
//!
//! Catalog list fields (`activities`, `packs`, `meteo`) arrive in several
//! shapes depending on how the catalog was exported:
//!
//! - a native JSON array: `["Trek", "Randonnée"]`
//! - a comma-delimited string: `"Trek, Randonnée"`
//! - a serialized list in a string: `"['Trek', 'Randonnée']"`
//! - a lone scalar: `3` or `true`
//!
//! Each shape is classified into a [`RawList`] variant first, then converted
//! by the matching function. Every token leaving this module is trimmed,
//! stripped of surrounding quotes and non-empty.

use serde_json::Value;

/// Classified shape of a raw list field
#[derive(Debug, Clone, PartialEq)]
pub enum RawList<'a> {
    /// Absent, null or blank
    Missing,

    /// Number or boolean
    Scalar(String),

    /// Plain string, split on commas
    Delimited(&'a str),

    /// String wrapped in `[` `]`, parsed as a list literal
    Bracketed(&'a str),

    /// Native JSON array
    Native(&'a [Value]),

    /// Objects carry no usable labels
    Unsupported,
}

impl<'a> RawList<'a> {
    pub fn classify(value: Option<&'a Value>) -> Self {
        match value {
            None | Some(Value::Null) => RawList::Missing,
            Some(Value::Array(items)) => RawList::Native(items),
            Some(Value::String(s)) => {
                let text = s.trim();
                if text.is_empty() {
                    RawList::Missing
                } else if text.len() >= 2 && text.starts_with('[') && text.ends_with(']') {
                    RawList::Bracketed(text)
                } else {
                    RawList::Delimited(text)
                }
            }
            Some(Value::Number(n)) => RawList::Scalar(n.to_string()),
            Some(Value::Bool(b)) => RawList::Scalar(b.to_string()),
            Some(Value::Object(_)) => RawList::Unsupported,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, RawList::Unsupported)
    }

    pub fn into_tokens(self) -> Vec<String> {
        match self {
            RawList::Missing | RawList::Unsupported => Vec::new(),
            RawList::Scalar(s) => clean_token(&s).into_iter().collect(),
            RawList::Delimited(text) => split_delimited(text),
            RawList::Bracketed(text) => parse_bracketed(text),
            RawList::Native(items) => flatten_native(items),
        }
    }
}

/// Classify and convert in one step.
pub fn normalize_list(value: Option<&Value>) -> Vec<String> {
    RawList::classify(value).into_tokens()
}

/// Trim whitespace and quote characters from both ends.
fn clean_token(raw: &str) -> Option<String> {
    let token = raw.trim_matches(|c: char| c.is_whitespace() || c == '\'' || c == '"');
    (!token.is_empty()).then(|| token.to_string())
}

fn split_delimited(text: &str) -> Vec<String> {
    text.split(',').filter_map(clean_token).collect()
}

fn parse_bracketed(text: &str) -> Vec<String> {
    // Single-quoted literals are the common export artefact
    match serde_json::from_str::<Value>(&text.replace('\'', "\"")) {
        Ok(Value::Array(items)) => flatten_native(&items),
        _ => split_delimited(&text[1..text.len() - 1]),
    }
}

fn flatten_native(items: &[Value]) -> Vec<String> {
    let mut tokens = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::String(s) => tokens.extend(clean_token(s)),
            Value::Number(n) => tokens.extend(clean_token(&n.to_string())),
            Value::Bool(b) => tokens.extend(clean_token(&b.to_string())),
            Value::Array(nested) => tokens.extend(flatten_native(nested)),
            Value::Null | Value::Object(_) => {}
        }
    }
    tokens
}
