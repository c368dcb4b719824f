//! Sentences and the gloss search over their tokens.

use crate::errors::Result;
use crate::input::{self, Lang, ParaAlignment, ParaId};
use crate::output::Match;
use crate::query::{Query, SearchOptions};
use crate::token::Token;
use log::trace;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Index;

/// Translations of a sentence, keyed by language code.
pub type Translations = BTreeMap<Lang, String>;

/// A tokenized sentence with its alignment metadata.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Sentence {
    pub text: String,
    pub words: Vec<Token>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<Lang>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
    #[serde(
        default,
        deserialize_with = "input::first_alignment",
        skip_serializing_if = "Option::is_none"
    )]
    pub para_alignment: Option<ParaAlignment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src_alignment: Option<Value>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub translations: Translations,
}

impl Sentence {
    /// Parses a sentence record and attaches the given translations.
    pub fn from_value(value: Value, translations: Translations) -> serde_json::Result<Sentence> {
        let mut sentence: Sentence = serde_json::from_value(value)?;
        sentence.translations = translations;
        Ok(sentence)
    }

    pub fn para_id(&self) -> Option<ParaId> {
        self.para_alignment.map(|a| a.para_id)
    }

    pub fn translation(&self, lang: Lang) -> Option<&str> {
        self.translations.get(&lang).map(String::as_str)
    }

    pub fn words(&self) -> &[Token] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.words.iter()
    }

    /// Finds every analysis whose gloss contains one of the query glosses.
    ///
    /// Results are ordered by query gloss, then token, then analysis.
    /// `text_title` and `filename` are copied into each match.
    pub fn search(
        &self,
        query: &Query,
        text_title: Option<&str>,
        filename: Option<&str>,
    ) -> Vec<Match> {
        let mut results = vec![];
        let translation = self.translation(query.translation_lang());
        for pattern in query.patterns() {
            for (i_token, token) in self.words.iter().enumerate() {
                for ana in token.analyses() {
                    let Some(gloss) = &ana.gloss else {
                        continue;
                    };
                    let Some(hit) = pattern.find(gloss) else {
                        continue;
                    };
                    trace!(
                        "{}: '{}' in {} at token {}",
                        pattern.gloss(),
                        hit.matched,
                        gloss,
                        i_token
                    );
                    results.push(Match {
                        matched: hit.matched.to_owned(),
                        gloss: gloss.clone(),
                        wf: ana.parts.clone(),
                        span_a: hit.start,
                        span_b: hit.end,
                        i_token,
                        off_start: token.off_start,
                        off_end: token.off_end,
                        sentence: self.text.clone(),
                        translation: translation.map(str::to_owned),
                        i_sentence: self.para_id(),
                        text_title: text_title.map(str::to_owned),
                        filename: filename.map(str::to_owned),
                    });
                }
            }
        }
        results
    }

    /// Compiles the glosses with default options and searches.
    pub fn search_gloss<S: AsRef<str>>(
        &self,
        glosses: &[S],
        whole: bool,
        text_title: Option<&str>,
        filename: Option<&str>,
    ) -> Result<Vec<Match>> {
        let query = Query::new(glosses, &SearchOptions::whole(whole))?;
        Ok(self.search(&query, text_title, filename))
    }
}

impl Index<usize> for Sentence {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.words[index]
    }
}

impl<'a> IntoIterator for &'a Sentence {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
