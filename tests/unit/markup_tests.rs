/*!
 * Tests for markup normalization
 */

use transplayer::markup::{
    kanji_clipboard_text, markup_kanji, markup_vocab_by_expression, markup_vocab_by_reading,
    vocab_clipboard_text, VocabDefinition,
};

use crate::common::{kanji_def, vocab_def};

/// The expression projection summarizes as `expression [reading]`
#[test]
fn test_markup_vocab_by_expression_withReading_shouldBracketReading() {
    let def = vocab_def("言う", "いう", "to say");
    let markup = markup_vocab_by_expression(&def);

    assert_eq!(markup.expression, "言う");
    assert_eq!(markup.reading, "いう");
    assert_eq!(markup.glossary, "to say");
    assert_eq!(markup.summary, "言う [いう]");
}

/// Without a reading the summary is just the expression
#[test]
fn test_markup_vocab_by_expression_withoutReading_shouldSummarizeExpressionOnly() {
    let def = vocab_def("はい", "", "yes");
    let markup = markup_vocab_by_expression(&def);

    assert_eq!(markup.summary, "はい");
    assert_eq!(markup.reading, "");
}

/// The context sentence rides along unchanged
#[test]
fn test_markup_vocab_by_expression_withSentence_shouldKeepSentence() {
    let def = VocabDefinition {
        sentence: Some("そう言った。".to_string()),
        ..vocab_def("言う", "いう", "to say")
    };
    let markup = markup_vocab_by_expression(&def);

    assert_eq!(markup.sentence.as_deref(), Some("そう言った。"));
}

/// The reading projection keys on the reading and clears the reading field
#[test]
fn test_markup_vocab_by_reading_withReading_shouldKeyOnReading() {
    let def = vocab_def("言う", "いう", "to say");
    let markup = markup_vocab_by_reading(&def).unwrap();

    assert_eq!(markup.expression, "いう");
    assert_eq!(markup.reading, "");
    assert_eq!(markup.glossary, "to say");
    assert_eq!(markup.summary, "いう");
}

/// No reading means no reading projection, not an error
#[test]
fn test_markup_vocab_by_reading_withoutReading_shouldReturnNone() {
    let def = vocab_def("はい", "", "yes");

    assert!(markup_vocab_by_reading(&def).is_none());
}

/// Kanji markup copies fields and summarizes as the character
#[test]
fn test_markup_kanji_withDefinition_shouldCopyFields() {
    let def = kanji_def("話", "ワ", "はな.す", "talk");
    let markup = markup_kanji(&def);

    assert_eq!(markup.character, "話");
    assert_eq!(markup.onyomi, "ワ");
    assert_eq!(markup.kunyomi, "はな.す");
    assert_eq!(markup.glossary, "talk");
    assert_eq!(markup.summary, "話");
}

/// Normalization is recomputed, not cached: equal inputs give equal outputs
#[test]
fn test_markup_vocab_withIdenticalInput_shouldBeDeterministic() {
    let def = vocab_def("言う", "いう", "to say");

    assert_eq!(
        markup_vocab_by_expression(&def),
        markup_vocab_by_expression(&def)
    );
    assert_eq!(markup_vocab_by_reading(&def), markup_vocab_by_reading(&def));
}

/// Clipboard payload is tab-separated, reading column omitted when empty
#[test]
fn test_vocab_clipboard_text_withAndWithoutReading_shouldFormatColumns() {
    let with_reading = vocab_def("言う", "いう", "to say");
    let without_reading = vocab_def("はい", "", "yes");

    assert_eq!(vocab_clipboard_text(&with_reading), "言う\tいう\tto say\n");
    assert_eq!(vocab_clipboard_text(&without_reading), "はい\tyes\n");
}

/// Kanji clipboard payload orders character, kunyomi, onyomi, glossary
#[test]
fn test_kanji_clipboard_text_withDefinition_shouldFormatColumns() {
    let def = kanji_def("話", "ワ", "はな.す", "talk");

    assert_eq!(kanji_clipboard_text(&def), "話\tはな.す\tワ\ttalk");
}

/// Definitions deserialize from collaborator JSON with optional fields absent
#[test]
fn test_vocab_definition_withMissingOptionalFields_shouldDeserialize() {
    let json = r#"{"expression": "犬", "glossary": "dog"}"#;
    let def: VocabDefinition = serde_json::from_str(json).unwrap();

    assert_eq!(def.expression, "犬");
    assert_eq!(def.reading, "");
    assert!(def.rules.is_empty());
    assert!(def.sentence.is_none());
}
