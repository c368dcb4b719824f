//! One candidate morphological reading of a token.

use crate::input;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A gloss/lemma/part-of-speech/translation bundle.
///
/// Every field is optional. A missing key is `None`; a key that is present
/// but empty is `Some` of an empty value.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Analysis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gloss: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parts: Option<String>,
    #[serde(
        rename = "gr.pos",
        default,
        deserialize_with = "input::opt_one_or_many",
        skip_serializing_if = "Option::is_none"
    )]
    pub grpos: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "input::opt_one_or_many",
        skip_serializing_if = "Option::is_none"
    )]
    pub lex: Option<Vec<String>>,
    #[serde(
        default,
        deserialize_with = "input::opt_one_or_many",
        skip_serializing_if = "Option::is_none"
    )]
    pub trans_en: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gloss_index: Option<Value>,
}

impl Analysis {
    /// Morpheme segments of the gloss, split on `-` and `=`.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.gloss
            .iter()
            .flat_map(|g| g.split(['-', '=']))
            .filter(|s| !s.is_empty())
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match serde_json::to_string_pretty(self) {
            Ok(s) => write!(f, "{s}"),
            Err(_) => Err(fmt::Error),
        }
    }
}
