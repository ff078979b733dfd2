/*!
 * Best-effort decoding of transcript text with unknown encoding.
 *
 * Subtitle files in the wild arrive as UTF-8, Shift-JIS, EUC-JP or UTF-16
 * with no reliable marker. The resolver tries each candidate strictly and,
 * when none decodes cleanly, falls back to the candidate that got furthest
 * into the buffer before its first malformed sequence.
 */

use encoding_rs::{DecoderResult, Encoding, EUC_JP, SHIFT_JIS, UTF_16LE, UTF_8};
use log::debug;

/// Candidate encodings tried in priority order. The order doubles as the
/// tie-break when several candidates fail at the same byte offset.
fn candidates() -> [(&'static str, &'static Encoding); 4] {
    [
        ("utf-8", UTF_8),
        ("shift_jis", SHIFT_JIS),
        ("euc-jp", EUC_JP),
        ("utf-16", UTF_16LE),
    ]
}

/// A decoded text buffer together with the label of the encoding that
/// produced it. When the label comes from the lossy fallback path the text
/// may contain U+FFFD replacement characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    /// Decoded Unicode content
    pub text: String,

    /// Label of the winning candidate encoding
    pub encoding: &'static str,
}

/// Decode a raw byte buffer into text, never failing.
///
/// Returns the first candidate that decodes without error. If every
/// candidate errors, the buffer is re-decoded with the least-bad candidate
/// in replacement mode, so the caller always receives usable text.
pub fn decode_content(raw: &[u8]) -> DecodedText {
    // (first invalid byte offset, label, encoding) of the best failure so far
    let mut best: Option<(usize, &'static str, &'static Encoding)> = None;

    for (label, encoding) in candidates() {
        match decode_strict(encoding, raw) {
            Ok(text) => return DecodedText { text, encoding: label },
            Err(error_offset) => {
                // Strictly-greater keeps the earlier candidate on ties.
                if best.is_none_or(|(offset, _, _)| error_offset > offset) {
                    best = Some((error_offset, label, encoding));
                }
            }
        }
    }

    // Decoding is ambiguous: more of the buffer surviving before the first
    // failure counts as a better guess, so re-decode with that candidate and
    // let invalid sequences become visible replacement characters.
    let (offset, label, encoding) = best.expect("candidate list is non-empty");
    debug!(
        "no clean decoding for {} byte(s), falling back to {} (first invalid sequence at byte {})",
        raw.len(),
        label,
        offset
    );
    let (text, _) = encoding.decode_without_bom_handling(raw);
    DecodedText {
        text: text.into_owned(),
        encoding: label,
    }
}

/// Strictly decode `raw` with `encoding`. On failure returns the byte offset
/// of the first malformed sequence.
fn decode_strict(encoding: &'static Encoding, raw: &[u8]) -> Result<String, usize> {
    let mut decoder = encoding.new_decoder_without_bom_handling();
    let capacity = decoder
        .max_utf8_buffer_length_without_replacement(raw.len())
        .unwrap_or(raw.len().saturating_mul(3).saturating_add(16));
    let mut text = String::with_capacity(capacity);

    let mut consumed = 0;
    loop {
        let (result, read) =
            decoder.decode_to_string_without_replacement(&raw[consumed..], &mut text, true);
        consumed += read;
        match result {
            DecoderResult::InputEmpty => return Ok(text),
            DecoderResult::Malformed(bad, extra) => {
                // The malformed sequence is the `bad` bytes preceding the
                // last `extra` bytes of consumed input.
                return Err(consumed.saturating_sub(bad as usize + extra as usize));
            }
            DecoderResult::OutputFull => text.reserve(capacity.max(16)),
        }
    }
}
