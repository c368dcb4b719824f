use crate::corpus::Corpus;
use crate::input::Lang;
use itertools::Itertools;
use log::info;
use std::collections::{BTreeMap, BTreeSet, HashSet};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CorpusStats {
    pub texts: usize,
    pub sentences: usize,
    pub tokens: usize,
    pub analysed_tokens: usize,
    pub analyses: usize,
    pub glosses: usize,
    pub langs: BTreeSet<Lang>,
}

pub fn statistics(corpus: &Corpus) -> CorpusStats {
    let mut stats = CorpusStats {
        texts: corpus.len(),
        ..Default::default()
    };
    let mut glosses = HashSet::new();
    for text in corpus {
        stats.langs.extend(text.langs());
        for sentence in text {
            stats.sentences += 1;
            for token in sentence {
                stats.tokens += 1;
                if token.is_analysed() {
                    stats.analysed_tokens += 1;
                }
                for ana in token.analyses() {
                    stats.analyses += 1;
                    if let Some(g) = &ana.gloss {
                        glosses.insert(g.as_str());
                    }
                }
            }
        }
    }
    stats.glosses = glosses.len();
    stats
}

pub fn log_statistics(stats: &CorpusStats) {
    info!("texts: {}", stats.texts);
    info!("base sentences: {}", stats.sentences);
    info!(
        "tokens: {} ({} analysed, {} analyses)",
        stats.tokens, stats.analysed_tokens, stats.analyses
    );
    info!("distinct glosses: {}", stats.glosses);
    info!("languages: {}", stats.langs.iter().join(", "));
}

/// Every morpheme segment of every gloss, with its frequency.
pub fn gloss_inventory(corpus: &Corpus) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    for ana in corpus
        .iter()
        .flatten()
        .flatten()
        .flat_map(|t| t.analyses())
    {
        for segment in ana.segments() {
            *counts.entry(segment).or_default() += 1;
        }
    }
    counts
}
