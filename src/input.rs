//! Raw shapes of the input documents and helpers for deserializing them.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Language code of a sentence. Code [BASE_LANG] is the base language.
pub type Lang = i64;

/// Paragraph identifier shared by a sentence and its translations.
pub type ParaId = i64;

/// The base language of a text.
pub const BASE_LANG: Lang = 0;

/// The translation language reported in search results by default.
pub const DEFAULT_TRANSLATION_LANG: Lang = 1;

/// Document-level metadata. Only `filename` is required.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Meta {
    pub filename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjusted: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parallel: Option<Value>,
}

/// One entry of a sentence's `para_alignment` list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ParaAlignment {
    pub para_id: ParaId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub off_start: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub off_end: Option<usize>,
}

/// Deserializes a list of alignments, keeping only the first one.
pub fn first_alignment<'de, D>(deserializer: D) -> Result<Option<ParaAlignment>, D::Error>
where
    D: Deserializer<'de>,
{
    let all: Option<Vec<ParaAlignment>> = Option::deserialize(deserializer)?;
    Ok(all.and_then(|v| v.into_iter().next()))
}

/// Normalizes a field that may hold either one string or a list of strings.
///
/// Values of any other shape are not rejected: a scalar becomes a one-element
/// list and non-string list elements are kept as their JSON text.
pub fn one_or_many(value: Value) -> Vec<String> {
    match value {
        Value::String(s) => vec![s],
        Value::Array(items) => items.into_iter().map(value_text).collect(),
        other => vec![value_text(other)],
    }
}

fn value_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Serde adapter for [one_or_many] on optional fields.
pub fn opt_one_or_many<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(value.map(one_or_many))
}
