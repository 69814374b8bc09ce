//! Notation generation module.
//!
//! Provides the scorer-driven constrained sampler, the procedural fallback
//! generator, and the pipeline tying generation to parsing and synthesis.

pub mod fallback;
pub mod pipeline;
pub mod sampler;

/// Canonical notation header used when a seed is blank and prepended to
/// any generated text that lacks one. Collaborators detect "already has a
/// header" against this exact five-line form.
pub const CANONICAL_HEADER: &str = "X:1\nT:Generated\nM:4/4\nL:1/8\nK:Emin\n";

/// Prefix marking the start of a notation header block.
pub const HEADER_MARKER: &str = "X:";

// Re-export commonly used items
pub use fallback::generate_tune;
pub use pipeline::{generate, render_audio};
pub use sampler::{generate_notation, SamplerConfig};
