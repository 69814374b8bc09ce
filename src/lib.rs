//! abcgen: ABC notation music generation engine.
//!
//! This library provides the core generation-and-synthesis pipeline: a
//! constrained sequence sampler driven by an external next-character
//! scorer, a deterministic procedural fallback generator, an ABC notation
//! parser, and a sine-wave synthesizer with ADSR shaping.
//!
//! # Modules
//!
//! - [`config`] - Engine configuration (paths, tempo, tunable constants)
//! - [`error`] - Error types and result aliases
//! - [`types`] - Core domain types (GenerationParams, NoteEvent, GenerationResult)
//! - [`vocab`] - Fixed character/index vocabulary shared with the scorer
//! - [`models`] - The scorer contract external models implement
//! - [`generation`] - Sampling, procedural fallback, and pipeline orchestration
//! - [`notation`] - ABC notation parsing
//! - [`audio`] - Synthesis and WAV encoding
//!
//! # Example
//!
//! ```rust,ignore
//! use abcgen::generation::{self, SamplerConfig};
//! use abcgen::types::GenerationParams;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let params = GenerationParams::new("", 1.0, 200)?;
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//!
//! // No scorer wired in: the procedural fallback produces the tune.
//! let result = generation::generate(&params, None, &SamplerConfig::default(), &mut rng);
//! println!("{}", result.notation);
//! ```

pub mod audio;
pub mod config;
pub mod error;
pub mod generation;
pub mod models;
pub mod notation;
pub mod types;
pub mod vocab;

// Re-export commonly used types at crate root for convenience
pub use config::EngineConfig;
pub use error::{EngineError, ErrorCode, Result};
pub use generation::{generate, render_audio, SamplerConfig, CANONICAL_HEADER};
pub use models::Scorer;
pub use types::{GenerationParams, GenerationResult, NoteEvent};
pub use vocab::{vocabulary, Vocabulary};
