/*!
 * Small pure helpers for tag strings and field templates.
 */

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Tag separators: whitespace, comma, semicolon
static TAG_SPLIT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[;,\s]").unwrap());

/// `{name}` references inside a field template
static FIELD_REF_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{([^{}]+)\}").unwrap());

/// Split a free-text tag string into clean tokens.
///
/// Splits on whitespace, commas and semicolons; empty tokens are dropped.
pub fn split_tags(tags: &str) -> Vec<String> {
    TAG_SPLIT_REGEX
        .split(tags)
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Substitute `{name}` references in each field template from `values`.
///
/// A field whose template references any key missing from `values` is
/// silently dropped from the result; the remaining fields still format. A
/// template with no references passes through unchanged.
pub fn format_fields(
    fields: &HashMap<String, String>,
    values: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut result = HashMap::new();

    for (field, template) in fields {
        let unsatisfied = FIELD_REF_REGEX
            .captures_iter(template)
            .any(|caps| !values.contains_key(&caps[1]));
        if unsatisfied {
            continue;
        }

        let formatted = FIELD_REF_REGEX
            .replace_all(template, |caps: &regex::Captures| values[&caps[1]].clone());
        result.insert(field.clone(), formatted.into_owned());
    }

    result
}
