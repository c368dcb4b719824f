//! Data structures for representing search results, and report formatting.

use crate::input::ParaId;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::io;

/// One search hit, with enough context to cite it.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Match {
    /// The matched part of the gloss.
    #[serde(rename = "match")]
    pub matched: String,
    /// The whole gloss of the matching analysis.
    pub gloss: String,
    /// The `parts` field of the matching analysis.
    pub wf: Option<String>,
    /// Start of the match within the gloss, in characters.
    pub span_a: usize,
    /// End of the match within the gloss, in characters.
    pub span_b: usize,
    /// Position of the token within the sentence.
    pub i_token: usize,
    pub off_start: usize,
    pub off_end: usize,
    pub sentence: String,
    pub translation: Option<String>,
    /// Paragraph id of the sentence.
    pub i_sentence: Option<ParaId>,
    pub text_title: Option<String>,
    pub filename: Option<String>,
}

impl Match {
    /// The matching word form, cut from the sentence text.
    pub fn word(&self) -> &str {
        let start = char_index(&self.sentence, self.off_start);
        let end = char_index(&self.sentence, self.off_end);
        self.sentence.get(start..end).unwrap_or_default()
    }
}

fn char_index(s: &str, chars: usize) -> usize {
    s.char_indices().nth(chars).map_or(s.len(), |(i, _)| i)
}

pub fn write_json(writer: impl io::Write, matches: &[Match], pretty: bool) -> serde_json::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, matches)
    } else {
        serde_json::to_writer(writer, matches)
    }
}

fn highlight(m: &Match) -> String {
    let chars = m.gloss.chars().collect_vec();
    let a = m.span_a.min(chars.len());
    let b = m.span_b.clamp(a, chars.len());
    format!(
        "{}[{}]{}",
        chars[..a].iter().collect::<String>(),
        chars[a..b].iter().collect::<String>(),
        chars[b..].iter().collect::<String>(),
    )
}

fn provenance(m: &Match) -> String {
    let mut parts = vec![];
    if let Some(f) = &m.filename {
        parts.push(f.clone());
    }
    if let Some(t) = &m.text_title {
        parts.push(format!("\"{t}\""));
    }
    if let Some(p) = m.i_sentence {
        parts.push(format!("para {p}"));
    }
    parts.push(format!("token {}", m.i_token));
    parts.join(", ")
}

/// Renders matches as a plain-text concordance, wrapped to `width` columns.
pub fn concordance(matches: &[Match], width: usize) -> String {
    let options = textwrap::Options::new(width)
        .initial_indent("    ")
        .subsequent_indent("    ");
    matches
        .iter()
        .map(|m| {
            let mut lines = vec![
                provenance(m),
                format!(
                    "  {} {} {}",
                    m.word(),
                    m.wf.as_deref().unwrap_or("-"),
                    highlight(m)
                ),
                textwrap::fill(&m.sentence, &options),
            ];
            if let Some(t) = &m.translation {
                lines.push(textwrap::fill(&format!("‘{t}’"), &options));
            }
            lines.join("\n")
        })
        .join("\n\n")
}
