//! Waveform synthesizer.
//!
//! Renders an ordered note-event sequence into quantized 16-bit samples:
//! pure sine tones shaped by an ADSR envelope, rests as silence, the whole
//! buffer peak-normalized before quantization.

use serde::{Deserialize, Serialize};

use crate::audio::wav::SAMPLE_RATE;
use crate::error::{EngineError, Result};
use crate::types::NoteEvent;

/// Default playback tempo in beats per minute.
pub const DEFAULT_TEMPO_BPM: f32 = 120.0;

/// Headroom factor applied after peak normalization.
const NORMALIZE_CEILING: f32 = 0.9;

/// ADSR envelope timing parameters.
///
/// The defaults are the tuned values the engine has always shipped with;
/// they are fields rather than constants so callers can override them
/// without a rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeParams {
    /// Linear ramp 0 -> 1 over this many seconds.
    pub attack_sec: f32,
    /// Linear ramp 1 -> sustain over this many seconds.
    pub decay_sec: f32,
    /// Amplitude held between decay and release.
    pub sustain_level: f32,
    /// Linear ramp sustain -> 0 over the final seconds of the note.
    pub release_sec: f32,
}

impl Default for EnvelopeParams {
    fn default() -> Self {
        Self {
            attack_sec: 0.01,
            decay_sec: 0.05,
            sustain_level: 0.7,
            release_sec: 0.1,
        }
    }
}

/// Synthesizes an event sequence into signed 16-bit samples at 44.1 kHz.
///
/// An empty sequence is rejected: no audio can be produced from zero
/// events, and silently returning an empty buffer would hide upstream
/// parse failures.
pub fn synthesize(
    events: &[NoteEvent],
    tempo_bpm: f32,
    envelope: &EnvelopeParams,
) -> Result<Vec<i16>> {
    if events.is_empty() {
        return Err(EngineError::no_notes());
    }

    let beat_sec = 60.0 / tempo_bpm;
    let mut samples: Vec<f32> = Vec::new();

    for event in events {
        let duration_sec = beat_sec * event.duration;
        let num_samples = (duration_sec * SAMPLE_RATE as f32).round() as usize;

        if event.rest {
            samples.extend(std::iter::repeat(0.0).take(num_samples));
            continue;
        }

        let frequency = event.frequency();
        let curve = envelope_curve(num_samples, envelope);
        let omega = 2.0 * std::f32::consts::PI * frequency / SAMPLE_RATE as f32;
        samples.extend((0..num_samples).map(|i| (omega * i as f32).sin() * curve[i]));
    }

    Ok(quantize(&samples))
}

/// Computes the ADSR amplitude curve for a note of `num_samples` samples.
///
/// Segments that would overlap on very short notes are clipped to the
/// available sample count.
pub fn envelope_curve(num_samples: usize, params: &EnvelopeParams) -> Vec<f32> {
    let mut curve = vec![1.0f32; num_samples];
    if num_samples == 0 {
        return curve;
    }

    let sample_rate = SAMPLE_RATE as f32;
    let attack = ((params.attack_sec * sample_rate).round() as usize).min(num_samples);
    if attack > 0 {
        let denom = (attack - 1).max(1) as f32;
        for (i, v) in curve.iter_mut().take(attack).enumerate() {
            *v = i as f32 / denom;
        }
    }

    let decay = (params.decay_sec * sample_rate).round() as usize;
    let decay_end = attack + decay;
    if decay > 0 && decay_end <= num_samples {
        let denom = (decay - 1).max(1) as f32;
        for i in 0..decay {
            curve[attack + i] = 1.0 - (1.0 - params.sustain_level) * (i as f32 / denom);
        }
        for v in &mut curve[decay_end..] {
            *v = params.sustain_level;
        }
    }

    let release = (params.release_sec * sample_rate).round() as usize;
    let release_start = num_samples.saturating_sub(release);
    let span = num_samples - release_start;
    if span > 0 {
        let denom = (span - 1).max(1) as f32;
        for i in 0..span {
            curve[release_start + i] = params.sustain_level * (1.0 - i as f32 / denom);
        }
    }

    curve
}

/// Peak-normalizes to 0.9 full scale and quantizes to i16.
///
/// An all-silent buffer skips normalization entirely.
fn quantize(samples: &[f32]) -> Vec<i16> {
    let peak = samples.iter().fold(0.0f32, |m, s| m.max(s.abs()));
    let scale = if peak > 0.0 {
        NORMALIZE_CEILING / peak
    } else {
        1.0
    };
    samples
        .iter()
        .map(|s| (s * scale * i16::MAX as f32) as i16)
        .collect()
}
