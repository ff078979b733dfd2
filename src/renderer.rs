/*!
 * Definition rendering.
 *
 * Composes normalized lookup records into the HTML document shown in the
 * vocabulary and kanji panels: a theme-derived style header, one block per
 * definition with its action links, and a fixed footer. The presentation
 * layer owns interactivity; it dispatches the embedded `copyVocabDef:<i>`,
 * `addVocabExp:<i>`, `addVocabReading:<i>`, `copyKanjiDef:<i>` and
 * `addKanji:<i>` links back to the definition record at index `i`.
 */

use serde::{Deserialize, Serialize};

use crate::markup::{
    markup_kanji, markup_vocab_by_expression, markup_vocab_by_reading, KanjiDefinition,
    NormalizedMarkup, VocabDefinition,
};

/// Category tag handed to a membership query alongside the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefCategory {
    /// Vocabulary definitions
    Vocab,
    /// Kanji definitions
    Kanji,
}

/// Query into the user's saved collection.
///
/// Implementations answer whether an equivalent entry is already saved; the
/// renderer uses the answer to suppress redundant add links. `None` in place
/// of a query means no collection is active, and only the add links are
/// omitted — rendering itself always succeeds.
pub trait MembershipQuery {
    /// Whether an entry equivalent to `markup` already exists under `category`.
    fn contains(&self, category: DefCategory, markup: &NormalizedMarkup) -> bool;
}

/// Font styling for one rendered field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontStyle {
    /// Point size
    pub size_pt: u32,

    /// CSS font family
    pub family: String,

    /// CSS color
    pub color: String,
}

impl FontStyle {
    fn new(size_pt: u32, family: &str, color: &str) -> Self {
        FontStyle {
            size_pt,
            family: family.to_string(),
            color: color.to_string(),
        }
    }
}

/// Presentation parameters for the definition document, supplied by the
/// presentation layer (window palette, user font preferences).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderTheme {
    /// Document background color
    pub background_color: String,

    /// Style of the expression line
    pub expression: FontStyle,

    /// Style of the reading line
    pub reading: FontStyle,

    /// Style of the glossary line
    pub glossary: FontStyle,
}

impl Default for RenderTheme {
    fn default() -> Self {
        RenderTheme {
            background_color: "#ffffff".to_string(),
            expression: FontStyle::new(15, "serif", "#000000"),
            reading: FontStyle::new(12, "serif", "#404040"),
            glossary: FontStyle::new(10, "serif", "#202020"),
        }
    }
}

/// Render vocabulary definitions into a complete markup document.
pub fn render_vocab_defs(
    definitions: &[VocabDefinition],
    membership: Option<&dyn MembershipQuery>,
    theme: &RenderTheme,
) -> String {
    let mut html = build_def_header(theme);
    if definitions.is_empty() {
        html.push_str(&build_empty());
    } else {
        for (index, definition) in definitions.iter().enumerate() {
            html.push_str(&build_vocab_def(definition, index, membership));
        }
    }
    html.push_str(&build_def_footer());
    html
}

/// Render kanji definitions into a complete markup document.
pub fn render_kanji_defs(
    definitions: &[KanjiDefinition],
    membership: Option<&dyn MembershipQuery>,
    theme: &RenderTheme,
) -> String {
    let mut html = build_def_header(theme);
    if definitions.is_empty() {
        html.push_str(&build_empty());
    } else {
        for (index, definition) in definitions.iter().enumerate() {
            html.push_str(&build_kanji_def(definition, index, membership));
        }
    }
    html.push_str(&build_def_footer());
    html
}

fn build_def_header(theme: &RenderTheme) -> String {
    format!(
        "<html><head><style>\n\
         body {{ background-color: {} }}\n\
         span.expression {{ font-size: {}pt; font-family: {}; color: {} }}\n\
         span.reading {{ font-size: {}pt; font-family: {}; color: {} }}\n\
         span.glossary {{ font-size: {}pt; font-family: {}; color: {} }}\n\
         </style></head><body>\n",
        theme.background_color,
        theme.expression.size_pt,
        theme.expression.family,
        theme.expression.color,
        theme.reading.size_pt,
        theme.reading.family,
        theme.reading.color,
        theme.glossary.size_pt,
        theme.glossary.family,
        theme.glossary.color,
    )
}

fn build_def_footer() -> String {
    "</body></html>".to_string()
}

/// Placeholder block shown instead of an empty document.
fn build_empty() -> String {
    "<p>No definitions to display.</p>\n\
     <p>Mouse over text with the <em>middle mouse button</em> or <em>shift key</em> \
     pressed to search.</p>\n\
     <p>You can also input terms in the search box below.</p>\n"
        .to_string()
}

fn build_vocab_def(
    definition: &VocabDefinition,
    index: usize,
    membership: Option<&dyn MembershipQuery>,
) -> String {
    let reading = if definition.reading.is_empty() {
        String::new()
    } else {
        format!(
            "<span class = \"reading\">[{}]<br/></span>\n",
            definition.reading
        )
    };

    let rules = if definition.rules.is_empty() {
        String::new()
    } else {
        format!(
            "<span class = \"rules\">({})<br/></span>\n",
            definition.rules.join(" &lt; ")
        )
    };

    let mut links = format!(
        "<a href = \"copyVocabDef:{index}\"><img src = \"img/icon_copy_definition.png\" align = \"right\"/></a>"
    );
    if let Some(query) = membership {
        let by_expression = NormalizedMarkup::Vocab(markup_vocab_by_expression(definition));
        if !query.contains(DefCategory::Vocab, &by_expression) {
            links.push_str(&format!(
                "<a href = \"addVocabExp:{index}\"><img src = \"img/icon_add_expression.png\" align = \"right\"/></a>"
            ));
        }
        if let Some(by_reading) = markup_vocab_by_reading(definition) {
            let by_reading = NormalizedMarkup::Vocab(by_reading);
            if !query.contains(DefCategory::Vocab, &by_reading) {
                links.push_str(&format!(
                    "<a href = \"addVocabReading:{index}\"><img src = \"img/icon_add_reading.png\" align = \"right\"/></a>"
                ));
            }
        }
    }

    format!(
        "<span class = \"links\">{}</span>\n\
         <span class = \"expression\">{}<br/></span>\n\
         {}\
         <span class = \"glossary\">{}<br/></span>\n\
         {}\
         <br clear = \"all\"/>\n",
        links, definition.expression, reading, definition.glossary, rules
    )
}

fn build_kanji_def(
    definition: &KanjiDefinition,
    index: usize,
    membership: Option<&dyn MembershipQuery>,
) -> String {
    let mut links = format!(
        "<a href = \"copyKanjiDef:{index}\"><img src = \"img/icon_copy_definition.png\" align = \"right\"/></a>"
    );
    if let Some(query) = membership {
        let markup = NormalizedMarkup::Kanji(markup_kanji(definition));
        if !query.contains(DefCategory::Kanji, &markup) {
            links.push_str(&format!(
                "<a href = \"addKanji:{index}\"><img src = \"img/icon_add_expression.png\" align = \"right\"/></a>"
            ));
        }
    }

    let readings = format!("{}, {}", definition.kunyomi, definition.onyomi);
    format!(
        "<span class = \"links\">{}</span>\n\
         <span class = \"expression\">{}<br/></span>\n\
         <span class = \"reading\">[{}]<br/></span>\n\
         <span class = \"glossary\">{}<br/></span>\n\
         <br clear = \"all\"/>\n",
        links, definition.character, readings, definition.glossary
    )
}
