//! A directory of annotated texts.

use crate::errors::Result;
use crate::output::Match;
use crate::query::{Query, SearchOptions};
use crate::text::Text;
use itertools::Itertools;
use log::{debug, info};
use std::ops::Index;
use std::path::{Path, PathBuf};
use std::{fmt, fs, io};

/// All texts found in one directory.
#[derive(Clone, Debug, PartialEq)]
pub struct Corpus {
    texts: Vec<Text>,
}

/// Lists the `*.json` regular files directly inside `dir`, sorted by name.
pub fn json_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = vec![];
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|e| e == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

impl Corpus {
    /// Loads every text in `dir`. One bad file fails the whole corpus.
    pub fn load(dir: impl AsRef<Path>) -> Result<Corpus> {
        let dir = dir.as_ref();
        info!("read: {}", dir.display());
        let files = json_files(dir)
            .map_err(|e| io::Error::new(e.kind(), format!("{}: {e}", dir.display())))?;
        debug!("{} files", files.len());
        let texts = files.iter().map(Text::load).collect::<Result<Vec<_>>>()?;
        Ok(Corpus { texts })
    }

    pub fn from_texts(texts: Vec<Text>) -> Corpus {
        Corpus { texts }
    }

    pub fn texts(&self) -> &[Text] {
        &self.texts
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Text> {
        self.texts.iter()
    }

    pub fn search(&self, query: &Query) -> Vec<Match> {
        let results = self.texts.iter().flat_map(|t| t.search(query)).collect_vec();
        info!("matches: {}", results.len());
        results
    }

    /// Compiles the glosses with default options and searches.
    pub fn search_gloss<S: AsRef<str>>(&self, glosses: &[S], whole: bool) -> Result<Vec<Match>> {
        let query = Query::new(glosses, &SearchOptions::whole(whole))?;
        Ok(self.search(&query))
    }
}

impl Index<usize> for Corpus {
    type Output = Text;

    fn index(&self, index: usize) -> &Text {
        &self.texts[index]
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Text;
    type IntoIter = std::slice::Iter<'a, Text>;

    fn into_iter(self) -> Self::IntoIter {
        self.texts.iter()
    }
}

impl fmt::Display for Corpus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}]", self.texts.iter().map(|t| t.filename()).join(", "))
    }
}
