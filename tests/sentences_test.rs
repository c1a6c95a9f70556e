use para_digest::sentences::RegexTokenizer;
use para_digest::{SentenceSplitter, SentenceTokenizer, SplitterPreference};
use pretty_assertions::assert_eq;

/// (input, n, expected) under the regex splitter.
const FALLBACK_CORPUS: &[(&str, usize, &str)] = &[
    ("", 2, ""),
    ("Hello world", 2, "Hello world"),
    ("A. B! C?", 2, "A. B!"),
    ("A. B! C?", 3, "A. B! C?"),
    ("Ends with a period.", 2, "Ends with a period."),
    ("Dr. Smith arrived. He sat down.", 2, "Dr. Smith arrived."),
    ("e.g. abbreviations split", 1, "e.g."),
    ("Pi is 3.14 exactly. Or not.", 1, "Pi is 3.14 exactly."),
    ("Line one.\nLine two.\n\nLine three.", 2, "Line one. Line two."),
    ("Why?!  Because.", 2, "Why?! Because."),
    ("  padded.   text  ", 2, "padded. text"),
    ("Quoted.\" Next", 2, "Quoted.\" Next"),
];

fn regex() -> SentenceSplitter {
    SentenceSplitter::resolve(SplitterPreference::Regex)
}

#[test]
fn fallback_matches_corpus() {
    for (input, n, expected) in FALLBACK_CORPUS {
        assert_eq!(regex().first_n_sentences(input, *n), *expected, "input: {input:?}");
    }
}

#[cfg(not(feature = "unicode-sentences"))]
#[test]
fn auto_without_tokenizer_matches_fallback_corpus() {
    let splitter = SentenceSplitter::default();
    assert_eq!(splitter, SentenceSplitter::Regex);
    for (input, n, expected) in FALLBACK_CORPUS {
        assert_eq!(splitter.first_n_sentences(input, *n), *expected, "input: {input:?}");
    }
}

#[test]
fn never_more_than_n_segments() {
    let text = "One. Two. Three. Four. Five. Six.";
    for n in 1..=8 {
        let summary = regex().first_n_sentences(text, n);
        assert!(RegexTokenizer.split(&summary).len() <= n, "n = {n}: {summary:?}");
    }
}

#[test]
fn reapplying_does_not_grow() {
    let text = "Alpha beta. Gamma! Delta? Epsilon.";
    for splitter in [regex(), SentenceSplitter::default()] {
        let once = splitter.first_n_sentences(text, 2);
        let twice = splitter.first_n_sentences(&once, 2);
        assert_eq!(once, twice);
        assert!(splitter.split(&twice).len() <= splitter.split(&once).len());
    }
}

#[test]
fn zero_sentences_is_empty() {
    assert_eq!(regex().first_n_sentences("A. B.", 0), "");
    assert_eq!(SentenceSplitter::default().first_n_sentences("A. B.", 0), "");
}

#[test]
fn default_splitter_handles_degenerate_input() {
    let splitter = SentenceSplitter::default();
    assert_eq!(splitter.first_n_sentences("", 2), "");
    assert_eq!(splitter.first_n_sentences("Hello world", 2), "Hello world");
    assert_eq!(splitter.first_n_sentences("A. B! C?", 2), "A. B!");
}

#[cfg(feature = "unicode-sentences")]
#[test]
fn linguistic_splitter_keeps_decimal_numbers_together() {
    let splitter = SentenceSplitter::Linguistic;
    assert_eq!(
        splitter.first_n_sentences("Version 2.5 shipped. It works. Mostly.", 2),
        "Version 2.5 shipped. It works."
    );
}
