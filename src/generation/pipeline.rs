//! Generation pipeline.
//!
//! Ties the pieces together: parameters go in, a timestamped
//! [`GenerationResult`] comes out, and the same notation can independently
//! be rendered to audio samples.

use log::info;
use rand::Rng;

use super::sampler::{self, SamplerConfig};
use crate::audio::synth::{self, EnvelopeParams};
use crate::error::Result;
use crate::models::Scorer;
use crate::notation;
use crate::types::{GenerationParams, GenerationResult};

/// Generates notation for a validated request.
///
/// Never fails: scorer problems and low-quality output are recovered via
/// the procedural fallback inside the sampler.
pub fn generate<R: Rng>(
    params: &GenerationParams,
    scorer: Option<&dyn Scorer>,
    cfg: &SamplerConfig,
    rng: &mut R,
) -> GenerationResult {
    info!(
        "Generating notation with temperature={}, length={}",
        params.temperature, params.length
    );

    let notation = sampler::generate_notation(params, scorer, cfg, rng);

    info!("Generated {} characters", notation.chars().count());
    GenerationResult::new(notation, params.clone())
}

/// Renders notation text to quantized audio samples.
///
/// Parsing and synthesis are independent of how the notation was produced;
/// text with no recognizable notes is rejected at the synthesis boundary.
pub fn render_audio(notation: &str, tempo_bpm: f32, envelope: &EnvelopeParams) -> Result<Vec<i16>> {
    let events = notation::parse(notation);
    info!("Parsed {} note events", events.len());
    synth::synthesize(&events, tempo_bpm, envelope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::DEFAULT_TEMPO_BPM;
    use crate::error::ErrorCode;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn generate_echoes_parameters_and_caps_length() {
        let params = GenerationParams::new("", 1.0, 200).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let result = generate(&params, None, &SamplerConfig::default(), &mut rng);
        assert_eq!(result.parameters, params);
        assert!(result.notation.starts_with("X:1"));
        assert!(result.notation.chars().count() <= 200);
    }

    #[test]
    fn generated_notation_renders_to_audio() {
        let params = GenerationParams::new("", 1.0, 300).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(10);
        let result = generate(&params, None, &SamplerConfig::default(), &mut rng);
        let samples =
            render_audio(&result.notation, DEFAULT_TEMPO_BPM, &EnvelopeParams::default()).unwrap();
        assert!(!samples.is_empty());
        assert!(samples.iter().any(|&s| s != 0));
    }

    #[test]
    fn noteless_notation_is_rejected_at_synthesis() {
        let err = render_audio("X:1\nT:Empty\n", DEFAULT_TEMPO_BPM, &EnvelopeParams::default())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NoNotes);
    }
}
