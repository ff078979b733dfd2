/*!
 * Tests for the saved definitions store
 */

use transplayer::line_defs::LineDefsStore;
use transplayer::markup::{markup_kanji, markup_vocab_by_expression, NormalizedMarkup};
use transplayer::renderer::{DefCategory, MembershipQuery};

use crate::common::{kanji_def, vocab_def};

fn sample_store() -> LineDefsStore {
    let mut store = LineDefsStore::new();
    store.add(3, "言う", "いう", "to say");
    store.add(3, "見る", "みる", "to see");
    store.add(7, "話", "", "talk");
    store
}

/// Added definitions are retrievable by their transcript line
#[test]
fn test_lookup_line_withSavedDefinitions_shouldReturnMatchingRows() {
    let store = sample_store();

    let line3 = store.lookup_line(3);
    assert_eq!(line3.len(), 2);
    assert_eq!(line3[0].expression, "言う");
    assert_eq!(line3[0].reading, "いう");
    assert_eq!(line3[1].expression, "見る");

    assert_eq!(store.lookup_line(7).len(), 1);
    assert!(store.lookup_line(99).is_empty());
}

/// Display rows format as `expression [reading] glossary`
#[test]
fn test_format_line_withSavedDefinitions_shouldFormatRows() {
    let store = sample_store();

    assert_eq!(
        store.format_line(3),
        "言う [いう] to say\n見る [みる] to see\n"
    );
    assert_eq!(store.format_line(99), "");
}

/// An empty store reports as such
#[test]
fn test_store_withNoEntries_shouldBeEmpty() {
    let store = LineDefsStore::new();

    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
}

/// Vocabulary membership matches on expression and reading
#[test]
fn test_contains_withVocabRecord_shouldMatchExpressionAndReading() {
    let store = sample_store();

    let saved = NormalizedMarkup::Vocab(markup_vocab_by_expression(&vocab_def(
        "言う", "いう", "to say",
    )));
    assert!(store.contains(DefCategory::Vocab, &saved));

    // Same expression, different reading: not the same entry
    let different_reading = NormalizedMarkup::Vocab(markup_vocab_by_expression(&vocab_def(
        "言う", "ゆう", "to say",
    )));
    assert!(!store.contains(DefCategory::Vocab, &different_reading));

    let unsaved = NormalizedMarkup::Vocab(markup_vocab_by_expression(&vocab_def(
        "食べる",
        "たべる",
        "to eat",
    )));
    assert!(!store.contains(DefCategory::Vocab, &unsaved));
}

/// Kanji membership matches the character against saved expressions
#[test]
fn test_contains_withKanjiRecord_shouldMatchCharacter() {
    let store = sample_store();

    let saved = NormalizedMarkup::Kanji(markup_kanji(&kanji_def("話", "ワ", "はな.す", "talk")));
    assert!(store.contains(DefCategory::Kanji, &saved));

    let unsaved = NormalizedMarkup::Kanji(markup_kanji(&kanji_def("犬", "ケン", "いぬ", "dog")));
    assert!(!store.contains(DefCategory::Kanji, &unsaved));
}

/// A category/record mismatch never matches
#[test]
fn test_contains_withMismatchedCategory_shouldReturnFalse() {
    let store = sample_store();

    let vocab = NormalizedMarkup::Vocab(markup_vocab_by_expression(&vocab_def(
        "言う", "いう", "to say",
    )));
    assert!(!store.contains(DefCategory::Kanji, &vocab));
}

/// Save and load round-trip through the JSON definitions file
#[test]
fn test_save_load_withRoundTrip_shouldPreserveEntries() {
    let store = sample_store();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("episode01.tdef");

    store.save(&path).unwrap();
    let loaded = LineDefsStore::load(&path).unwrap();

    assert_eq!(loaded.len(), store.len());
    assert_eq!(loaded.lookup_line(3), store.lookup_line(3));
    assert_eq!(loaded.format_line(7), store.format_line(7));
}

/// The on-disk format keeps the historical parallel-array field names
#[test]
fn test_save_withStore_shouldWriteParallelArrayFields() {
    let store = sample_store();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fields.tdef");
    store.save(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"TranscriptLine\""));
    assert!(content.contains("\"Expression\""));
    assert!(content.contains("\"Reading\""));
    assert!(content.contains("\"Glossary\""));
}

/// Loading a missing file surfaces a store error
#[test]
fn test_load_withMissingFile_shouldReturnError() {
    let result = LineDefsStore::load("/nonexistent/definitely-missing.tdef");

    assert!(result.is_err());
}

/// Loading malformed JSON surfaces a format error
#[test]
fn test_load_withMalformedContent_shouldReturnError() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.tdef");
    std::fs::write(&path, "not json at all").unwrap();

    assert!(LineDefsStore::load(&path).is_err());
}
