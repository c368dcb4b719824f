use glossearch::{Corpus, Query, SearchOptions, Text};
use std::fs;
use std::path::PathBuf;

fn init() {
    let _ = pretty_env_logger::formatted_timed_builder()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

fn data_path(name: &str) -> PathBuf {
    let dir = env!("CARGO_MANIFEST_DIR");
    let mut path = PathBuf::from(dir);
    path.push("test-data");
    path.push(name);
    path
}

fn corpus() -> Corpus {
    Corpus::load(data_path("corpus")).unwrap()
}

#[test]
fn test_load_corpus() {
    init();
    let corpus = corpus();
    assert_eq!(corpus.len(), 2);
    assert_eq!(corpus[0].filename(), "a-tale.txt");
    assert_eq!(corpus[1].filename(), "b-song.txt");
    assert_eq!(corpus.to_string(), "[a-tale.txt, b-song.txt]");
}

#[test]
fn test_text_fields() {
    init();
    let text = Text::load(data_path("corpus/a-tale.json")).unwrap();
    assert_eq!(text.title(), Some("The Tale"));
    assert_eq!(text.author(), Some("Unknown"));
    assert_eq!(text.source(), None);
    assert_eq!(text.genre(), Some("folklore"));
    assert_eq!(text.parallel(), Some(&serde_json::Value::Bool(true)));
    assert_eq!(text.adjusted(), None);
    assert_eq!(text.len(), 1);

    let sentence = &text[0];
    assert_eq!(sentence.text, "Pinɨ kɨtɨ.");
    assert_eq!(sentence.translation(1), Some("The dog ran."));
    assert_eq!(sentence.len(), 3);

    let token = &sentence[1];
    assert_eq!(token.wf, "kɨtɨ");
    assert_eq!((token.off_start, token.off_end), (5, 9));
    assert_eq!(token.next_word, Some(2));
    assert_eq!(token.sentence_index_neg, Some(0));
    let ana = &token[0];
    assert_eq!(ana.grpos, Some(vec!["V".to_owned(), "intr".to_owned()]));
    assert_eq!(ana.lex, Some(vec!["kɨt".to_owned()]));
    assert_eq!(ana.trans_en, Some(vec!["run".to_owned(), "flee".to_owned()]));
    assert_eq!(sentence[2].ana, None);
}

#[test]
fn test_search_whole() {
    init();
    let corpus = corpus();
    let matches = corpus.search(&Query::single("PST").unwrap());
    assert_eq!(matches.len(), 2);

    let m = &matches[0];
    assert_eq!(m.filename.as_deref(), Some("a-tale.txt"));
    assert_eq!(m.text_title.as_deref(), Some("The Tale"));
    assert_eq!(m.gloss, "run-PST");
    assert_eq!(m.wf.as_deref(), Some("kɨt-ɨ"));
    assert_eq!((m.span_a, m.span_b), (4, 7));
    assert_eq!(m.i_token, 1);
    assert_eq!((m.off_start, m.off_end), (5, 9));
    assert_eq!(m.translation.as_deref(), Some("The dog ran."));
    assert_eq!(m.i_sentence, Some(0));
    assert_eq!(m.word(), "kɨtɨ");

    let m = &matches[1];
    assert_eq!(m.filename.as_deref(), Some("b-song.txt"));
    assert_eq!(m.gloss, "go-PST");
    assert_eq!(m.translation, None);
    assert_eq!(m.i_sentence, Some(3));
}

#[test]
fn test_search_partial() {
    init();
    let corpus = corpus();
    let matches = corpus.search_gloss(&["PST"], false).unwrap();
    let found: Vec<_> = matches.iter().map(|m| m.matched.as_str()).collect();
    assert_eq!(found, vec!["PST", "PST", "PST.SG"]);
}

#[test]
fn test_segment_boundaries() {
    init();
    let corpus = corpus();
    assert!(corpus.search_gloss(&["1"], true).unwrap().is_empty());
    assert_eq!(corpus.search_gloss(&["1"], false).unwrap().len(), 1);
    assert!(corpus.search_gloss(&["PS"], true).unwrap().is_empty());
}

#[test]
fn test_search_several_glosses() {
    init();
    let corpus = corpus();
    let matches = corpus.search_gloss(&["dog", "1SG", "run"], true).unwrap();
    let found: Vec<_> = matches.iter().map(|m| m.gloss.as_str()).collect();
    assert_eq!(found, vec!["dog", "run-PST", "1SG"]);
}

#[test]
fn test_search_is_repeatable() {
    init();
    let corpus = corpus();
    let query = Query::new(&["PST", "go"], &SearchOptions::whole(false)).unwrap();
    assert_eq!(corpus.search(&query), corpus.search(&query));
}

#[test]
fn test_broken_file_fails_corpus() {
    init();
    let e = Corpus::load(data_path("broken")).unwrap_err();
    assert!(e.to_string().contains("bad.json"), "{e}");
}

#[test]
fn test_missing_file() {
    init();
    let e = Text::load(data_path("corpus/no-such-file.json")).unwrap_err();
    assert!(e.to_string().contains("no-such-file.json"), "{e}");
}

#[test]
fn test_missing_directory() {
    init();
    assert!(Corpus::load(data_path("no-such-dir")).is_err());
}

#[test]
fn test_missing_word_field() {
    init();
    let mut path = std::env::temp_dir();
    path.push(format!("glossearch-missing-wf-{}.json", std::process::id()));
    fs::write(
        &path,
        r#"{"meta": {"filename": "x"}, "sentences": [
            {"text": "a", "lang": 0, "words": [{"off_start": 0, "off_end": 1}]}
        ]}"#,
    )
    .unwrap();
    let result = Text::load(&path);
    fs::remove_file(&path).unwrap();
    let e = result.unwrap_err();
    assert!(e.to_string().contains("wf"), "{e}");
}

#[test]
fn test_missing_lang_is_invalid_input() {
    init();
    let mut path = std::env::temp_dir();
    path.push(format!("glossearch-missing-lang-{}.json", std::process::id()));
    fs::write(
        &path,
        r#"{"meta": {"filename": "x"}, "sentences": [{"text": "a", "words": []}]}"#,
    )
    .unwrap();
    let result = Text::load(&path);
    fs::remove_file(&path).unwrap();
    let e = result.unwrap_err();
    assert!(e.is::<glossearch::errors::InvalidInput>(), "{e}");
    assert!(e.to_string().contains("lang"), "{e}");
}

#[test]
fn test_empty_query_finds_nothing() {
    init();
    let corpus = corpus();
    let query = Query::new::<&str>(&[], &SearchOptions::default()).unwrap();
    assert!(corpus.search(&query).is_empty());
}

#[test]
fn test_alternation_in_query() {
    init();
    let corpus = corpus();
    let matches = corpus.search_gloss(&["run|1SG"], true).unwrap();
    let found: Vec<_> = matches.iter().map(|m| m.matched.as_str()).collect();
    assert_eq!(found, vec!["run", "1SG"]);
}
