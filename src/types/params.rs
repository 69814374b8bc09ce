//! Validated generation request parameters.
//!
//! The web layer hands raw values here; everything downstream of this
//! constructor can assume the bounds hold.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// Validated parameters for a single generation request.
///
/// Immutable once constructed; echoed back inside
/// [`GenerationResult`](crate::types::GenerationResult).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Seed text the generated notation extends.
    pub seed: String,

    /// Randomness parameter, 0.1-2.0 in steps of 0.1.
    pub temperature: f32,

    /// Requested output length in characters, 50-500 in steps of 10.
    pub length: usize,
}

impl GenerationParams {
    /// Seed substituted when the caller provides none.
    pub const DEFAULT_SEED: &'static str = "X:1\nM:4/4\nL:1/8";
    /// Maximum accepted seed length in characters.
    pub const MAX_SEED_LENGTH: usize = 50;
    /// Inclusive temperature bounds.
    pub const MIN_TEMPERATURE: f32 = 0.1;
    pub const MAX_TEMPERATURE: f32 = 2.0;
    /// Inclusive length bounds; length must also be a multiple of the step.
    pub const MIN_LENGTH: usize = 50;
    pub const MAX_LENGTH: usize = 500;
    pub const LENGTH_STEP: usize = 10;

    /// Validates raw request values into a usable parameter set.
    ///
    /// An empty seed is replaced with [`Self::DEFAULT_SEED`]. Temperature is
    /// range-checked first, then snapped to the nearest 0.1 step.
    pub fn new(seed: &str, temperature: f32, length: usize) -> Result<Self> {
        if seed.chars().count() > Self::MAX_SEED_LENGTH {
            return Err(EngineError::invalid_seed(format!(
                "Seed must be at most {} characters",
                Self::MAX_SEED_LENGTH
            )));
        }
        let seed = if seed.is_empty() {
            Self::DEFAULT_SEED.to_string()
        } else {
            seed.to_string()
        };

        if !temperature.is_finite()
            || temperature < Self::MIN_TEMPERATURE
            || temperature > Self::MAX_TEMPERATURE
        {
            return Err(EngineError::invalid_temperature(temperature));
        }
        let temperature = (temperature * 10.0).round() / 10.0;

        if length < Self::MIN_LENGTH || length > Self::MAX_LENGTH {
            return Err(EngineError::invalid_length(
                format!(
                    "Length must be between {} and {}",
                    Self::MIN_LENGTH,
                    Self::MAX_LENGTH
                ),
                length,
            ));
        }
        if length % Self::LENGTH_STEP != 0 {
            return Err(EngineError::invalid_length(
                format!("Length must be a multiple of {}", Self::LENGTH_STEP),
                length,
            ));
        }

        Ok(Self {
            seed,
            temperature,
            length,
        })
    }
}
