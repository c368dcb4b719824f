//! Compiled gloss queries.
//!
//! A query gloss is interpolated into a pattern that accepts it only as a
//! whole morpheme segment of an analysis gloss. Segments are the pieces of
//! the gloss between `-` and `=` boundaries; in partial mode a segment may
//! also carry extra material around the query, and `.` counts as a boundary
//! too.
//!
//! Query glosses are spliced into the pattern as text unless
//! [SearchOptions::literal] is set. A `.` in the query matches any
//! character, and a top-level `|` splits the whole pattern: `"PST|FUT"`
//! finds `PST` at the start of any segment, not only as a whole segment.

use crate::errors::{invalid_argument, Result};
use crate::input::{Lang, DEFAULT_TRANSLATION_LANG};
use itertools::Itertools;
use log::debug;
use regex::Regex;

/// How to search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    /// Require the query to be a whole segment.
    pub whole: bool,
    /// Escape the query glosses instead of treating them as patterns.
    pub literal: bool,
    /// Language code of the translation reported with each match.
    pub translation_lang: Lang,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            whole: true,
            literal: false,
            translation_lang: DEFAULT_TRANSLATION_LANG,
        }
    }
}

impl SearchOptions {
    pub fn whole(whole: bool) -> Self {
        SearchOptions {
            whole,
            ..Default::default()
        }
    }
}

/// Capture groups holding a boundary consumed before the match.
const LEADING: [&str; 2] = ["lead_a", "lead_b"];
/// Capture groups holding a boundary consumed after the match.
const TRAILING: [&str; 2] = ["trail_a", "trail_b"];

/// Builds the pattern for one query gloss.
///
/// The gloss is pasted as text into four top-level alternatives: the whole
/// string, the first segment, an inner segment and the last segment.
/// Boundary characters are consumed by the named groups in [LEADING] and
/// [TRAILING]; [GlossPattern::find] trims them off the match.
pub fn pattern(gloss: &str, whole: bool, literal: bool) -> String {
    let g = if literal {
        regex::escape(gloss)
    } else {
        gloss.to_owned()
    };
    let (d, n) = if whole {
        (r"[\-=]", "")
    } else {
        (r"[.\-=]", r"[^\-=]*")
    };
    let [la, lb] = LEADING;
    let [ta, tb] = TRAILING;
    [
        format!("^{n}{g}{n}$"),
        format!("^{n}{g}{n}(?P<{ta}>{d})"),
        format!("(?P<{la}>{d}){n}{g}{n}(?P<{tb}>{d})"),
        format!("(?P<{lb}>{d}){n}{g}{n}$"),
    ]
    .join("|")
}

/// A match of one query gloss within one analysis gloss.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hit<'a> {
    pub matched: &'a str,
    /// Start of the match, in characters.
    pub start: usize,
    /// End of the match, in characters.
    pub end: usize,
}

/// One query gloss and its compiled pattern.
#[derive(Clone, Debug)]
pub struct GlossPattern {
    gloss: String,
    regex: Regex,
}

impl GlossPattern {
    pub fn new(gloss: &str, whole: bool, literal: bool) -> Result<GlossPattern> {
        let p = pattern(gloss, whole, literal);
        let regex = Regex::new(&p).map_err(|e| {
            invalid_argument(format!("cannot use gloss '{gloss}' as a pattern: {e}"))
        })?;
        Ok(GlossPattern {
            gloss: gloss.to_owned(),
            regex,
        })
    }

    pub fn gloss(&self) -> &str {
        &self.gloss
    }

    /// Finds the leftmost match in an analysis gloss.
    pub fn find<'a>(&self, haystack: &'a str) -> Option<Hit<'a>> {
        let caps = self.regex.captures(haystack)?;
        let m = caps.get(0)?;
        let (mut a, mut b) = (m.start(), m.end());
        for name in LEADING {
            if let Some(d) = caps.name(name).filter(|d| d.start() == m.start()) {
                a = d.end();
            }
        }
        for name in TRAILING {
            if let Some(d) = caps.name(name).filter(|d| d.end() == m.end()) {
                b = d.start();
            }
        }
        let b = b.max(a);
        let matched = &haystack[a..b];
        let start = haystack[..a].chars().count();
        Some(Hit {
            matched,
            start,
            end: start + matched.chars().count(),
        })
    }
}

/// A set of query glosses compiled for searching.
#[derive(Clone, Debug)]
pub struct Query {
    patterns: Vec<GlossPattern>,
    options: SearchOptions,
}

impl Query {
    pub fn new<S: AsRef<str>>(glosses: &[S], options: &SearchOptions) -> Result<Query> {
        let patterns = glosses
            .iter()
            .map(|g| GlossPattern::new(g.as_ref(), options.whole, options.literal))
            .collect::<Result<Vec<_>>>()?;
        debug!(
            "query: {} ({}{})",
            patterns.iter().map(|p| p.gloss()).join(", "),
            if options.whole { "whole" } else { "partial" },
            if options.literal { ", literal" } else { "" },
        );
        Ok(Query {
            patterns,
            options: *options,
        })
    }

    /// A query for one gloss with default options.
    pub fn single(gloss: &str) -> Result<Query> {
        Query::new(&[gloss], &SearchOptions::default())
    }

    pub fn patterns(&self) -> &[GlossPattern] {
        &self.patterns
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    pub fn translation_lang(&self) -> Lang {
        self.options.translation_lang
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn find<'a>(q: &str, whole: bool, gloss: &'a str) -> Option<Hit<'a>> {
        GlossPattern::new(q, whole, false).unwrap().find(gloss)
    }

    fn hit(matched: &str, start: usize, end: usize) -> Option<Hit<'_>> {
        Some(Hit {
            matched,
            start,
            end,
        })
    }

    #[test]
    fn whole_segments() {
        assert_eq!(find("PST", true, "PST"), hit("PST", 0, 3));
        assert_eq!(find("PST", true, "do-PST"), hit("PST", 3, 6));
        assert_eq!(find("PST", true, "PST=3SG"), hit("PST", 0, 3));
        assert_eq!(find("PST", true, "a-PST-b"), hit("PST", 2, 5));
        assert_eq!(find("PST", true, "do-PST2"), None);
        assert_eq!(find("PST", true, "PST.SG"), None);
        assert_eq!(find("PST", true, "1.PST"), None);
        assert_eq!(find("1", true, "1SG"), None);
    }

    #[test]
    fn partial_segments() {
        assert_eq!(find("PST", false, "PST"), hit("PST", 0, 3));
        assert_eq!(find("PST", false, "PST.SG"), hit("PST.SG", 0, 6));
        assert_eq!(find("PST", false, "1.PST"), hit("1.PST", 0, 5));
        assert_eq!(find("PST", false, "do-1.PST"), hit("1.PST", 3, 8));
        assert_eq!(find("PST", false, "a.PST.b-c"), hit("a.PST.b", 0, 7));
        assert_eq!(find("1", false, "1SG"), hit("1SG", 0, 3));
        assert_eq!(find("PST", false, "do-FUT"), None);
    }

    #[test]
    fn leftmost_match() {
        assert_eq!(find("PST", true, "PST-PST"), hit("PST", 0, 3));
        assert_eq!(find("PST", true, "-PST"), hit("PST", 1, 4));
    }

    #[test]
    fn char_offsets() {
        assert_eq!(find("PST", true, "тут-PST"), hit("PST", 4, 7));
    }

    #[test]
    fn patterns_are_not_escaped() {
        assert_eq!(find("P.T", true, "do-PST"), hit("PST", 3, 6));
        assert_eq!(find("PST|FUT", true, "do-FUT"), hit("FUT", 3, 6));
        assert!(GlossPattern::new("(", true, false).is_err());
    }

    #[test]
    fn alternation_splits_whole_pattern() {
        assert_eq!(find("PST|FUT", true, "do-PST2"), hit("PST", 3, 6));
        assert_eq!(find("PST|FUT", true, "PSTX"), hit("PST", 0, 3));
        assert_eq!(find("PST|FUT", true, "XFUT"), hit("FUT", 1, 4));
        assert_eq!(find("(?:PST|FUT)", true, "do-PST2"), None);
    }

    #[test]
    fn pattern_shape() {
        assert_eq!(
            pattern("PST", true, false),
            r"^PST$|^PST(?P<trail_a>[\-=])|(?P<lead_a>[\-=])PST(?P<trail_b>[\-=])|(?P<lead_b>[\-=])PST$"
        );
    }

    #[test]
    fn literal_escapes() {
        let p = GlossPattern::new("P.T", true, true).unwrap();
        assert_eq!(p.find("do-PST"), None);
        assert_eq!(p.find("do-P.T"), hit("P.T", 3, 6));
        assert!(GlossPattern::new("(", true, true).is_ok());
    }

    #[test]
    fn query_options() {
        let q = Query::single("PST").unwrap();
        assert_eq!(q.patterns().len(), 1);
        assert_eq!(q.translation_lang(), 1);
        assert!(q.options().whole);
        let q = Query::new::<&str>(&[], &SearchOptions::whole(false)).unwrap();
        assert!(q.is_empty());
    }
}
