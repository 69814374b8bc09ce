//! Audio output module.
//!
//! Provides note-event synthesis and WAV encoding for generated notation.

pub mod synth;
pub mod wav;

// Re-export commonly used items
pub use synth::{envelope_curve, synthesize, EnvelopeParams, DEFAULT_TEMPO_BPM};
pub use wav::{samples_to_duration, write_wav, write_wav_to_buffer, CHANNELS, SAMPLE_RATE};
