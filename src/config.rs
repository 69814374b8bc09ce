//! Engine configuration module.
//!
//! Provides configuration for model and artifact paths, playback tempo,
//! and the tunable sampling/envelope constants.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::audio::synth::{EnvelopeParams, DEFAULT_TEMPO_BPM};
use crate::generation::sampler::SamplerConfig;

/// Configuration for the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Path to the trained scorer model file, handed to whichever external
    /// scorer implementation the host wires in.
    pub model_path: PathBuf,

    /// Directory where rendered WAV artifacts are written.
    pub output_path: PathBuf,

    /// Playback tempo for synthesis in beats per minute.
    pub tempo_bpm: f32,

    /// Sampling-loop constants.
    pub sampler: SamplerConfig,

    /// ADSR envelope constants.
    pub envelope: EnvelopeParams,
}

impl Default for EngineConfig {
    fn default() -> Self {
        // Use platform-appropriate cache directory
        let base_cache = directories::BaseDirs::new()
            .map(|d| d.cache_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".cache"));

        let cache = base_cache.join("abcgen");

        Self {
            model_path: PathBuf::from("best_model.pt"),
            output_path: cache.join("tracks"),
            tempo_bpm: DEFAULT_TEMPO_BPM,
            sampler: SamplerConfig::default(),
            envelope: EnvelopeParams::default(),
        }
    }
}

impl EngineConfig {
    /// Creates a configuration with the specified model path.
    pub fn with_model_path(model_path: PathBuf) -> Self {
        Self {
            model_path,
            ..Default::default()
        }
    }

    /// Checks whether the scorer model file exists.
    pub fn model_exists(&self) -> bool {
        self.model_path.exists()
    }

    /// Returns the output path for a named WAV artifact.
    pub fn artifact_path(&self, stem: &str) -> PathBuf {
        self.output_path.join(format!("{}.wav", stem))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tempo_and_knobs() {
        let config = EngineConfig::default();
        assert_eq!(config.tempo_bpm, 120.0);
        assert_eq!(config.sampler, SamplerConfig::default());
        assert_eq!(config.envelope, EnvelopeParams::default());
    }

    #[test]
    fn artifact_path_appends_wav_extension() {
        let config = EngineConfig::default();
        let path = config.artifact_path("tune-1");
        assert!(path.ends_with("tune-1.wav"));
        assert!(path.starts_with(&config.output_path));
    }

    #[test]
    fn with_model_path_keeps_other_defaults() {
        let config = EngineConfig::with_model_path(PathBuf::from("/models/rnn.pt"));
        assert_eq!(config.model_path, PathBuf::from("/models/rnn.pt"));
        assert_eq!(config.tempo_bpm, 120.0);
    }
}
