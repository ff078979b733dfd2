/*!
 * Timed transcript cues and playback-position tracking.
 *
 * Cues arrive already parsed from whatever subtitle source the caller uses;
 * this module only models them and follows the active cue as playback time
 * moves, so the presentation layer can highlight the current transcript row
 * and re-run the line lookup when it changes.
 */

use std::fmt;

use anyhow::{anyhow, Result};
use log::debug;

use crate::sentence::strip_readings;

/// A single timed transcript cue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptCue {
    /// Sequence number
    pub seq_num: usize,

    /// Start time in ms
    pub start_time_ms: u64,

    /// End time in ms
    pub end_time_ms: u64,

    /// Cue text
    pub text: String,
}

impl TranscriptCue {
    /// Creates a new cue without validation.
    pub fn new(seq_num: usize, start_time_ms: u64, end_time_ms: u64, text: String) -> Self {
        TranscriptCue {
            seq_num,
            start_time_ms,
            end_time_ms,
            text,
        }
    }

    /// Creates a validated cue: the time range must be non-empty and the
    /// text non-blank.
    pub fn new_validated(
        seq_num: usize,
        start_time_ms: u64,
        end_time_ms: u64,
        text: String,
    ) -> Result<Self> {
        if end_time_ms <= start_time_ms {
            return Err(anyhow!(
                "Invalid time range: end time {} <= start time {}",
                end_time_ms,
                start_time_ms
            ));
        }

        let trimmed_text = text.trim();
        if trimmed_text.is_empty() {
            return Err(anyhow!("Empty cue text for entry {}", seq_num));
        }

        Ok(TranscriptCue {
            seq_num,
            start_time_ms,
            end_time_ms,
            text: trimmed_text.to_string(),
        })
    }

    /// Cue text with inline reading annotations removed, the form shown in
    /// the transcript list and measured for sentence extraction.
    pub fn stripped_text(&self) -> String {
        strip_readings(&self.text)
    }

    /// Whether the cue is on screen at `time_ms`.
    pub fn is_active_at(&self, time_ms: u64) -> bool {
        self.start_time_ms <= time_ms && time_ms < self.end_time_ms
    }

    /// Convert start time to a formatted timestamp
    pub fn format_start_time(&self) -> String {
        Self::format_timestamp(self.start_time_ms)
    }

    /// Convert end time to a formatted timestamp
    pub fn format_end_time(&self) -> String {
        Self::format_timestamp(self.end_time_ms)
    }

    /// Format a timestamp in milliseconds as HH:MM:SS,mmm
    pub fn format_timestamp(ms: u64) -> String {
        let hours = ms / 3_600_000;
        let minutes = (ms % 3_600_000) / 60_000;
        let seconds = (ms % 60_000) / 1_000;
        let millis = ms % 1_000;

        format!("{:02}:{:02}:{:02},{:03}", hours, minutes, seconds, millis)
    }
}

impl fmt::Display for TranscriptCue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.seq_num)?;
        writeln!(f, "{} --> {}", self.format_start_time(), self.format_end_time())?;
        writeln!(f, "{}", self.text)
    }
}

/// Index of the cue most recently started at `time_ms`, or `None` before
/// the first cue begins. `cues` must be ordered by start time.
pub fn cue_at(cues: &[TranscriptCue], time_ms: u64) -> Option<usize> {
    cues.iter().rposition(|cue| cue.start_time_ms <= time_ms)
}

/// Follows the current transcript row as playback advances or the user
/// seeks. Reports row changes so the caller can re-highlight and re-run the
/// line lookup.
#[derive(Debug, Clone, Default)]
pub struct CueTracker {
    current: Option<usize>,
}

impl CueTracker {
    pub fn new() -> Self {
        CueTracker { current: None }
    }

    /// The current transcript row, if playback has reached one.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Jump directly to a row (user activated a transcript line).
    pub fn seek_to(&mut self, index: usize) {
        self.current = Some(index);
    }

    /// Advance to the cue active at `time_ms`. Returns the new row index
    /// when the current row changed, `None` otherwise. Time may move in
    /// either direction; a seek before the first cue clears the row.
    pub fn tick(&mut self, cues: &[TranscriptCue], time_ms: u64) -> Option<usize> {
        let target = cue_at(cues, time_ms);
        if target == self.current {
            return None;
        }

        debug!("transcript row changed: {:?} -> {:?}", self.current, target);
        self.current = target;
        target
    }
}
