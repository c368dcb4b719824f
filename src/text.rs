//! One annotated text: its metadata and its base-language sentences.

use crate::errors::{in_file, Result};
use crate::input::{self, Lang, Meta, ParaAlignment, ParaId, BASE_LANG};
use crate::output::Match;
use crate::query::{Query, SearchOptions};
use crate::sentence::{Sentence, Translations};
use log::debug;
use serde::Deserialize;
use serde_json::Value;
use std::collections::{BTreeSet, HashMap};
use std::ops::Index;
use std::path::{Path, PathBuf};
use std::{fmt, fs, io};

#[derive(Deserialize)]
struct Document {
    meta: Meta,
    sentences: Vec<Value>,
}

/// The fields every sentence entry must have, whatever its language.
#[derive(Deserialize)]
struct SentenceHead {
    text: String,
    lang: Lang,
    #[serde(default, deserialize_with = "input::first_alignment")]
    para_alignment: Option<ParaAlignment>,
}

/// An annotated text.
///
/// Only base-language sentences are kept as [Sentence] values. Sentences in
/// other languages are attached to the base sentence with the same paragraph
/// id as translations; the rest are dropped.
#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    path: Option<PathBuf>,
    meta: Meta,
    langs: BTreeSet<Lang>,
    sentences: Vec<Sentence>,
}

impl Text {
    /// Reads and parses one JSON document.
    pub fn load(path: impl AsRef<Path>) -> Result<Text> {
        let path = path.as_ref();
        let name = path.display().to_string();
        debug!("read: {name}");
        let data = fs::read_to_string(path)
            .map_err(|e| io::Error::new(e.kind(), format!("{name}: {e}")))?;
        let mut text = Text::from_json_str(&data).map_err(|e| in_file(&name, e))?;
        text.path = Some(path.to_owned());
        Ok(text)
    }

    pub fn from_json_str(data: &str) -> Result<Text> {
        let document: Document = serde_json::from_str(data)?;
        Text::from_document(document)
    }

    pub fn from_value(value: Value) -> Result<Text> {
        let document: Document = serde_json::from_value(value)?;
        Text::from_document(document)
    }

    fn from_document(document: Document) -> Result<Text> {
        let heads = document
            .sentences
            .iter()
            .map(SentenceHead::deserialize)
            .collect::<serde_json::Result<Vec<_>>>()?;
        let langs: BTreeSet<Lang> = heads.iter().map(|h| h.lang).collect();

        let mut by_para: HashMap<ParaId, Translations> = HashMap::new();
        for head in &heads {
            if head.lang == BASE_LANG {
                continue;
            }
            if let Some(a) = head.para_alignment {
                by_para
                    .entry(a.para_id)
                    .or_default()
                    .insert(head.lang, head.text.clone());
            }
        }

        let mut sentences = vec![];
        for (head, value) in heads.iter().zip(document.sentences) {
            if head.lang != BASE_LANG {
                continue;
            }
            let translations = head
                .para_alignment
                .and_then(|a| by_para.get(&a.para_id))
                .cloned()
                .unwrap_or_default();
            sentences.push(Sentence::from_value(value, translations)?);
        }
        debug!(
            "{}: {} sentences, languages {:?}",
            document.meta.filename,
            sentences.len(),
            langs
        );
        Ok(Text {
            path: None,
            meta: document.meta,
            langs,
            sentences,
        })
    }

    /// Where the text was loaded from, if it came from a file.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn meta(&self) -> &Meta {
        &self.meta
    }

    pub fn filename(&self) -> &str {
        &self.meta.filename
    }

    pub fn title(&self) -> Option<&str> {
        self.meta.title.as_deref()
    }

    pub fn author(&self) -> Option<&str> {
        self.meta.author.as_deref()
    }

    pub fn source(&self) -> Option<&str> {
        self.meta.source.as_deref()
    }

    pub fn year(&self) -> Option<&Value> {
        self.meta.year.as_ref()
    }

    pub fn genre(&self) -> Option<&str> {
        self.meta.genre.as_deref()
    }

    pub fn adjusted(&self) -> Option<&Value> {
        self.meta.adjusted.as_ref()
    }

    pub fn parallel(&self) -> Option<&Value> {
        self.meta.parallel.as_ref()
    }

    /// Every language code seen in the document, translations included.
    pub fn langs(&self) -> &BTreeSet<Lang> {
        &self.langs
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sentence> {
        self.sentences.iter()
    }

    pub fn search(&self, query: &Query) -> Vec<Match> {
        self.sentences
            .iter()
            .flat_map(|s| s.search(query, self.title(), Some(self.filename())))
            .collect()
    }

    /// Compiles the glosses with default options and searches.
    pub fn search_gloss<S: AsRef<str>>(&self, glosses: &[S], whole: bool) -> Result<Vec<Match>> {
        let query = Query::new(glosses, &SearchOptions::whole(whole))?;
        Ok(self.search(&query))
    }
}

impl Index<usize> for Text {
    type Output = Sentence;

    fn index(&self, index: usize) -> &Sentence {
        &self.sentences[index]
    }
}

impl<'a> IntoIterator for &'a Text {
    type Item = &'a Sentence;
    type IntoIter = std::slice::Iter<'a, Sentence>;

    fn into_iter(self) -> Self::IntoIter {
        self.sentences.iter()
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match serde_json::to_string_pretty(&self.meta) {
            Ok(s) => write!(f, "{s}"),
            Err(_) => Err(fmt::Error),
        }
    }
}
