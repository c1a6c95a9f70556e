use std::io::Write;

use para_digest::{digest, Digest, Error, Options, SentenceSplitter, SplitterPreference};
use pretty_assertions::assert_eq;

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Digest</title><style>p { color: red; }</style></head>
<body>
  <!-- tracking pixel -->
  <p>First paragraph opens here. It continues! Does it end? Yes.</p>
  <p><!-- hidden --></p>
  <p>  Second <b>bold</b> paragraph.<script>track();</script> Trailing.</p>
  <p></p>
  <p>Third.</p>
  <p>Fourth.</p>
  <p>Fifth.</p>
  <p>Sixth is never printed.</p>
</body>
</html>"#;

fn regex_options() -> Options {
    Options {
        splitter: SplitterPreference::Regex,
        ..Options::default()
    }
}

#[test]
fn report_collects_first_five_non_empty_paragraphs() {
    let report = digest(PAGE, &regex_options()).expect("report");
    assert_eq!(report.comments_removed, 2);
    assert_eq!(report.splitter, SentenceSplitter::Regex);

    let summaries: Vec<&str> = report.paragraphs.iter().map(|p| p.summary.as_str()).collect();
    assert_eq!(
        summaries,
        vec![
            "First paragraph opens here. It continues!",
            "Second bold paragraph. Trailing.",
            "Third.",
            "Fourth.",
            "Fifth.",
        ]
    );
}

#[test]
fn report_text_excludes_scripts() {
    let report = digest(PAGE, &regex_options()).expect("report");
    let second = &report.paragraphs[1];
    assert_eq!(second.text, "  Second bold paragraph. Trailing.");
    assert_eq!(second.stripped_text, "Secondboldparagraph.Trailing.");
    assert!(!second.text.contains("track"));
}

#[test]
fn printed_output_is_one_paragraph_per_line() {
    let digest = Digest::parse(PAGE, &regex_options()).expect("digest");
    let mut out = Vec::new();
    digest.write_paragraphs(&mut out).expect("write");
    assert_eq!(
        String::from_utf8(out).expect("utf8"),
        concat!(
            "First paragraph opens here. It continues! Does it end? Yes.\n",
            "  Second bold paragraph. Trailing.\n",
            "Third.\n",
            "Fourth.\n",
            "Fifth.\n",
        )
    );
}

#[test]
fn strip_whitespace_trims_printed_fragments() {
    let options = Options {
        strip_whitespace: true,
        max_paragraphs: 2,
        ..regex_options()
    };
    let digest = Digest::parse(PAGE, &options).expect("digest");
    let mut out = Vec::new();
    assert_eq!(digest.write_paragraphs(&mut out).expect("write"), 2);
    assert_eq!(
        String::from_utf8(out).expect("utf8"),
        "First paragraph opens here. It continues! Does it end? Yes.\nSecondboldparagraph.Trailing.\n"
    );
}

#[test]
fn quiet_digest_still_reports() {
    let options = Options {
        suppress_output: true,
        ..regex_options()
    };
    let digest = Digest::parse(PAGE, &options).expect("digest");
    let mut out = Vec::new();
    assert_eq!(digest.write_paragraphs(&mut out).expect("write"), 0);
    assert!(out.is_empty());
    assert_eq!(digest.report().paragraphs.len(), 5);
}

#[test]
fn summary_length_follows_options() {
    let options = Options {
        sentences: 3,
        ..regex_options()
    };
    let report = digest(PAGE, &options).expect("report");
    assert_eq!(
        report.paragraphs[0].summary,
        "First paragraph opens here. It continues! Does it end?"
    );
}

#[test]
fn empty_document_has_no_paragraphs() {
    for html in ["", "   ", "<html></html>", "<p>   </p><p><!-- x --></p>"] {
        let report = digest(html, &Options::default()).expect("report");
        assert!(report.is_empty(), "html: {html:?}");
    }
}

#[test]
fn from_path_reads_whole_file() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    file.write_all(PAGE.as_bytes()).expect("write");
    let digest = Digest::from_path(file.path(), &regex_options()).expect("digest");
    assert_eq!(digest.paragraphs().len(), 5);
}

#[test]
fn from_path_missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("nope.html");
    match Digest::from_path(&missing, &Options::default()) {
        Err(Error::Io { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected Err(Io), got {other:?}"),
    }
}

#[test]
fn from_reader_matches_parse() {
    let from_reader = Digest::from_reader(PAGE.as_bytes(), &regex_options())
        .expect("digest")
        .report();
    let parsed = digest(PAGE, &regex_options()).expect("report");
    assert_eq!(from_reader, parsed);
}

#[test]
fn report_serializes_to_json() {
    let report = digest("<p>One. Two. Three.</p>", &regex_options()).expect("report");
    let json = serde_json::to_value(&report).expect("json");
    assert_eq!(json["splitter"], "regex");
    assert_eq!(json["paragraphs"][0]["summary"], "One. Two.");
    assert_eq!(json["comments_removed"], 0);
}
