//! NoteEvent entity exchanged between the parser and the synthesizer.

use serde::{Deserialize, Serialize};

/// A single pitched note or rest extracted from notation text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoteEvent {
    /// MIDI note number (0-127). Meaningful only when `rest` is false.
    pub pitch: u8,

    /// Duration in beats relative to the default note length.
    pub duration: f32,

    /// True for rests; the pitch field is ignored.
    pub rest: bool,
}

impl NoteEvent {
    /// Creates a pitched note event.
    pub fn note(pitch: u8, duration: f32) -> Self {
        Self {
            pitch,
            duration,
            rest: false,
        }
    }

    /// Creates a rest event of the given duration.
    pub fn rest(duration: f32) -> Self {
        Self {
            pitch: 0,
            duration,
            rest: true,
        }
    }

    /// Frequency in Hz under 12-tone equal temperament (A4 = 440 Hz at
    /// MIDI pitch 69).
    pub fn frequency(&self) -> f32 {
        440.0 * 2f32.powf((self.pitch as f32 - 69.0) / 12.0)
    }
}
