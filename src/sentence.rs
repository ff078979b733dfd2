/*!
 * Sentence extraction around a cursor offset.
 *
 * Given a paragraph of mixed-script text and the character the user's
 * pointer landed on, find the grammatically coherent sentence enclosing that
 * character. Quotation marks nest (「…」, 『…』, straight quotes), and a
 * terminator inside a quote must not end the enclosing sentence, so both
 * scans carry a stack of expected quote characters.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Inline reading annotations (furigana), e.g. 漢字《かんじ》
static READING_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new("《[^》]+》").unwrap());

/// Sentence-ending punctuation, full-width and half-width forms
const TERMINATORS: [char; 7] = ['。', '．', '.', '？', '?', '！', '!'];

fn is_terminator(c: char) -> bool {
    TERMINATORS.contains(&c)
}

/// Forward quote table: opening character to its expected closing character
fn closing_for(c: char) -> Option<char> {
    match c {
        '「' => Some('」'),
        '『' => Some('』'),
        '\'' => Some('\''),
        '"' => Some('"'),
        _ => None,
    }
}

/// Backward quote table: closing character to its expected opening character
fn opening_for(c: char) -> Option<char> {
    match c {
        '」' => Some('「'),
        '』' => Some('『'),
        '\'' => Some('\''),
        '"' => Some('"'),
        _ => None,
    }
}

/// Remove bracket-delimited inline reading annotations from text.
///
/// Transcripts aimed at learners carry pronunciations inline
/// (`漢字《かんじ》`); they are stripped before the text is shown or
/// measured for sentence extraction.
pub fn strip_readings(text: &str) -> String {
    READING_REGEX.replace_all(text, "").into_owned()
}

/// Extract the sentence enclosing the character at `offset`.
///
/// The backward scan walks from the offset toward the start of the text and
/// stops past a terminator or newline, or at an opening quote, whichever
/// comes first outside of any nested quotation. The forward scan then walks
/// from that start with a fresh stack, so a quotation enclosing the offset
/// stays balanced and is contained whole rather than split at its edges.
///
/// Out-of-range offsets clamp to the last character, unbalanced quotation
/// degrades to the text boundaries. The result is trimmed. Never panics.
pub fn extract_sentence(text: &str, offset: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return String::new();
    }
    let offset = offset.min(chars.len() - 1);

    // Backward scan for the sentence start. Boundary stops are suppressed at
    // the cursor itself: a cursor parked on a terminator or quote belongs to
    // the sentence that character is part of.
    let mut stack: Vec<char> = Vec::new();
    let mut start = 0;
    for i in (0..=offset).rev() {
        let c = chars[i];
        if i != offset && stack.is_empty() {
            if is_terminator(c) || c == '\n' {
                start = i + 1;
                break;
            }
            if closing_for(c).is_some() {
                // Opening quote: the quote itself belongs to the sentence.
                start = i;
                break;
            }
        }
        if stack.last() == Some(&c) {
            stack.pop();
        } else if let Some(opener) = opening_for(c) {
            stack.push(opener);
        }
    }

    // Forward scan for the sentence end, restarted from the computed start.
    let mut stack: Vec<char> = Vec::new();
    let mut end = chars.len();
    for i in start..chars.len() {
        let c = chars[i];
        if i != start && stack.is_empty() {
            if is_terminator(c) {
                end = i + 1;
                break;
            }
            if opening_for(c).is_some() {
                // Closing quote of an enclosing span: excluded from the sentence.
                end = i;
                break;
            }
        }
        if stack.last() == Some(&c) {
            stack.pop();
        } else if let Some(closer) = closing_for(c) {
            stack.push(closer);
        }
    }

    chars[start..end].iter().collect::<String>().trim().to_string()
}
