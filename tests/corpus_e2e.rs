// tests/corpus_e2e.rs
// Directory-level runs over on-disk fixtures.

use std::fs;

use text_corpus_stats::{
    analyze_directory, AnalysisError, Analyzer, FailurePolicy, Lexicon, SentimentLabel,
};

fn write(dir: &std::path::Path, name: &str, body: &[u8]) {
    fs::write(dir.join(name), body).unwrap();
}

#[test]
fn scenario_files_produce_expected_records() {
    let tmp = tempfile::tempdir().unwrap();
    write(tmp.path(), "01_day.txt", b"Good day. Good day.\n");
    write(tmp.path(), "02_worse.txt", b"This is bad.\n\n   \nThis is worse.\n");
    write(tmp.path(), "readme.md", b"ignored, not a txt file");

    let report =
        analyze_directory(&Analyzer::default(), tmp.path(), "txt", FailurePolicy::Abort).unwrap();
    assert_eq!(report.len(), 2);

    let day = &report.files[0];
    assert_eq!(day.file_name, "01_day.txt");
    assert_eq!(day.total_words, 14);
    assert_eq!(day.total_sections, 2);
    assert_eq!(day.avg_line_length, 7.0);
    assert_eq!(day.top_words, vec!["day", "good"]);

    let worse = &report.files[1];
    assert_eq!(worse.file_name, "02_worse.txt");
    // blank and whitespace-only lines are not counted
    assert_eq!(worse.total_lines, 2);
    assert_eq!(worse.sentiment, SentimentLabel::Negative);
    assert_eq!(worse.top_words, vec!["bad", "worse"]);
}

#[test]
fn neutral_when_lexicon_has_no_polarity_hits() {
    let tmp = tempfile::tempdir().unwrap();
    write(tmp.path(), "day.txt", b"Good day. Good day.");
    let lx = Lexicon::default().with_positive(&["great"]);
    let analyzer = Analyzer::new(lx, 5).unwrap();

    let report = analyze_directory(&analyzer, tmp.path(), "txt", FailurePolicy::Abort).unwrap();
    assert_eq!(report.files[0].sentiment, SentimentLabel::Neutral);
}

#[test]
fn invalid_utf8_is_a_decoding_error() {
    let tmp = tempfile::tempdir().unwrap();
    write(tmp.path(), "latin1.txt", b"Caf\xe9 au lait.\n");

    let err = analyze_directory(&Analyzer::default(), tmp.path(), "txt", FailurePolicy::Abort)
        .unwrap_err();
    match err {
        AnalysisError::Decoding { name, line } => {
            assert_eq!(name, "latin1.txt");
            assert_eq!(line, 1);
        }
        other => panic!("expected decoding error, got {other:?}"),
    }
}

#[test]
fn isolate_keeps_good_files_and_lists_failures() {
    let tmp = tempfile::tempdir().unwrap();
    write(tmp.path(), "a.txt", b"Fine text.");
    write(tmp.path(), "b.txt", b"\xff\xfe");
    write(tmp.path(), "c.txt", b"no terminator");
    write(tmp.path(), "d.txt", b"Also fine.");

    let report =
        analyze_directory(&Analyzer::default(), tmp.path(), "txt", FailurePolicy::Isolate)
            .unwrap();
    let ok: Vec<&str> = report.files.iter().map(|f| f.file_name.as_str()).collect();
    assert_eq!(ok, vec!["a.txt", "d.txt"]);
    let kinds: Vec<(&str, &str)> = report
        .failures
        .iter()
        .map(|f| (f.file_name.as_str(), f.kind.as_str()))
        .collect();
    assert_eq!(kinds, vec![("b.txt", "decoding"), ("c.txt", "no_sections")]);
}

#[test]
fn missing_directory_is_not_found() {
    let tmp = tempfile::tempdir().unwrap();
    let err = analyze_directory(
        &Analyzer::default(),
        &tmp.path().join("absent"),
        "txt",
        FailurePolicy::Abort,
    )
    .unwrap_err();
    assert!(matches!(err, AnalysisError::NotFound(_)));
}

#[test]
fn ranked_words_listing_of_a_file() {
    let tmp = tempfile::tempdir().unwrap();
    write(
        tmp.path(),
        "t.txt",
        b"Python is amazing! Python is powerful.\nI love programming in Python.\n\nPython makes programming fun and easy.\n",
    );
    let listing = Analyzer::default()
        .ranked_words_in_file(&tmp.path().join("t.txt"))
        .unwrap();
    let head: Vec<(&str, u64)> = listing
        .iter()
        .take(4)
        .map(|e| (e.word.as_str(), e.count))
        .collect();
    assert_eq!(
        head,
        vec![("python", 4), ("is", 2), ("programming", 2), ("amazing", 1)]
    );
}
