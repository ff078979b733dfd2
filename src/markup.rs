/*!
 * Dictionary lookup records and their display-ready projections.
 *
 * Lookup results arrive from an external dictionary collaborator as loose
 * records; this module gives them explicit types and normalizes them into
 * the canonical shape the renderer and the saved-definitions store consume.
 * Projections are recomputed on demand, never cached: the same definition
 * may be rendered against different collections between calls.
 */

use serde::{Deserialize, Serialize};

/// A vocabulary lookup record as supplied by the dictionary collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabDefinition {
    /// Dictionary form of the matched expression
    pub expression: String,

    /// Kana reading; empty when the expression is its own reading
    #[serde(default)]
    pub reading: String,

    /// Glossary text
    pub glossary: String,

    /// Grammar rules applied during deinflection, outermost first
    #[serde(default)]
    pub rules: Vec<String>,

    /// Context sentence the match was found in
    #[serde(default)]
    pub sentence: Option<String>,
}

/// A kanji lookup record as supplied by the dictionary collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KanjiDefinition {
    /// The character itself
    pub character: String,

    /// On reading(s)
    pub onyomi: String,

    /// Kun reading(s)
    pub kunyomi: String,

    /// Glossary text
    pub glossary: String,
}

/// Canonical display shape of a vocabulary definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabMarkup {
    pub expression: String,
    pub reading: String,
    pub glossary: String,
    pub sentence: Option<String>,
    pub summary: String,
}

/// Canonical display shape of a kanji definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KanjiMarkup {
    pub character: String,
    pub onyomi: String,
    pub kunyomi: String,
    pub glossary: String,
    pub summary: String,
}

/// Either normalized shape, as handed to a membership query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizedMarkup {
    Vocab(VocabMarkup),
    Kanji(KanjiMarkup),
}

/// Project a vocabulary definition keyed on its expression.
///
/// The summary reads `expression [reading]`, or just the expression when no
/// reading is present.
pub fn markup_vocab_by_expression(definition: &VocabDefinition) -> VocabMarkup {
    let summary = if definition.reading.is_empty() {
        definition.expression.clone()
    } else {
        format!("{} [{}]", definition.expression, definition.reading)
    };

    VocabMarkup {
        expression: definition.expression.clone(),
        reading: definition.reading.clone(),
        glossary: definition.glossary.clone(),
        sentence: definition.sentence.clone(),
        summary,
    }
}

/// Project a vocabulary definition keyed on its reading.
///
/// Returns `None` when the definition has no reading: a reading-based entry
/// is meaningless then, and callers omit the projection rather than treat
/// this as an error.
pub fn markup_vocab_by_reading(definition: &VocabDefinition) -> Option<VocabMarkup> {
    if definition.reading.is_empty() {
        return None;
    }

    Some(VocabMarkup {
        expression: definition.reading.clone(),
        reading: String::new(),
        glossary: definition.glossary.clone(),
        sentence: definition.sentence.clone(),
        summary: definition.reading.clone(),
    })
}

/// Project a kanji definition into its canonical display shape.
pub fn markup_kanji(definition: &KanjiDefinition) -> KanjiMarkup {
    KanjiMarkup {
        character: definition.character.clone(),
        onyomi: definition.onyomi.clone(),
        kunyomi: definition.kunyomi.clone(),
        glossary: definition.glossary.clone(),
        summary: definition.character.clone(),
    }
}

/// Tab-separated clipboard payload for a vocabulary definition. The reading
/// column is omitted entirely when empty.
pub fn vocab_clipboard_text(definition: &VocabDefinition) -> String {
    if definition.reading.is_empty() {
        format!("{}\t{}\n", definition.expression, definition.glossary)
    } else {
        format!(
            "{}\t{}\t{}\n",
            definition.expression, definition.reading, definition.glossary
        )
    }
}

/// Tab-separated clipboard payload for a kanji definition.
pub fn kanji_clipboard_text(definition: &KanjiDefinition) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        definition.character, definition.kunyomi, definition.onyomi, definition.glossary
    )
}
