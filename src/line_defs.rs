/*!
 * Saved per-line definitions.
 *
 * Each saved entry ties an expression/reading/glossary triple to the
 * transcript line it was added from, so the panel can show everything the
 * user recorded for the current cue. The on-disk layout is four parallel
 * arrays addressed by position, kept compatible with the field names of the
 * earlier definitions files.
 */

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::StoreError;
use crate::markup::NormalizedMarkup;
use crate::renderer::{DefCategory, MembershipQuery};

/// One saved definition row, materialized from the parallel arrays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedDefinition {
    /// Transcript line the definition was added from
    pub transcript_line: usize,

    /// Saved expression (the character itself for kanji entries)
    pub expression: String,

    /// Saved reading, possibly empty
    pub reading: String,

    /// Saved glossary text
    pub glossary: String,
}

/// Collection of saved definitions for one transcript.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LineDefsStore {
    transcript_line: Vec<usize>,
    expression: Vec<String>,
    reading: Vec<String>,
    glossary: Vec<String>,
}

impl LineDefsStore {
    pub fn new() -> Self {
        LineDefsStore::default()
    }

    /// Number of saved definitions.
    pub fn len(&self) -> usize {
        self.transcript_line.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transcript_line.is_empty()
    }

    /// Record a definition against a transcript line.
    pub fn add(&mut self, transcript_line: usize, expression: &str, reading: &str, glossary: &str) {
        self.transcript_line.push(transcript_line);
        self.expression.push(expression.to_string());
        self.reading.push(reading.to_string());
        self.glossary.push(glossary.to_string());
    }

    /// All definitions saved against `line`, in insertion order.
    pub fn lookup_line(&self, line: usize) -> Vec<SavedDefinition> {
        self.transcript_line
            .iter()
            .enumerate()
            .filter(|(_, saved_line)| **saved_line == line)
            .map(|(i, _)| SavedDefinition {
                transcript_line: line,
                expression: self.expression[i].clone(),
                reading: self.reading[i].clone(),
                glossary: self.glossary[i].clone(),
            })
            .collect()
    }

    /// Display rows for `line`, one `expression [reading] glossary` line per
    /// saved definition.
    pub fn format_line(&self, line: usize) -> String {
        let mut result = String::new();
        for def in self.lookup_line(line) {
            result.push_str(&format!(
                "{} [{}] {}\n",
                def.expression, def.reading, def.glossary
            ));
        }
        result
    }

    /// Load a store from a JSON definitions file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let content = fs::read_to_string(path.as_ref())?;
        let store: LineDefsStore = serde_json::from_str(&content)?;
        debug!(
            "loaded {} saved definition(s) from {:?}",
            store.len(),
            path.as_ref()
        );
        Ok(store)
    }

    /// Save the store to a JSON definitions file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), content)?;
        debug!(
            "saved {} definition(s) to {:?}",
            self.len(),
            path.as_ref()
        );
        Ok(())
    }
}

impl MembershipQuery for LineDefsStore {
    /// Vocabulary records match on expression + reading; kanji records match
    /// their character against saved expressions. Glossary wording is not
    /// compared, it may differ between dictionary versions.
    fn contains(&self, category: DefCategory, markup: &NormalizedMarkup) -> bool {
        match (category, markup) {
            (DefCategory::Vocab, NormalizedMarkup::Vocab(vocab)) => (0..self.len()).any(|i| {
                self.expression[i] == vocab.expression && self.reading[i] == vocab.reading
            }),
            (DefCategory::Kanji, NormalizedMarkup::Kanji(kanji)) => {
                self.expression.iter().any(|saved| *saved == kanji.character)
            }
            // Mismatched category/record pairings never match anything.
            _ => false,
        }
    }
}
