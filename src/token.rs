//! Word forms and their analyses.

use crate::analysis::Analysis;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// A word form with its offsets in the sentence text.
///
/// `next_word` and `sentence_index_neg` are plain indices into the owning
/// sentence, not references.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Token {
    pub wf: String,
    pub off_start: usize,
    pub off_end: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wtype: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_word: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentence_index: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentence_index_neg: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ana: Option<Vec<Analysis>>,
}

impl Token {
    /// Analyses in source order; empty if the token carries none.
    pub fn analyses(&self) -> &[Analysis] {
        self.ana.as_deref().unwrap_or_default()
    }

    pub fn is_analysed(&self) -> bool {
        self.ana.is_some()
    }
}

impl Index<usize> for Token {
    type Output = Analysis;

    fn index(&self, index: usize) -> &Analysis {
        &self.analyses()[index]
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.wf)
    }
}
