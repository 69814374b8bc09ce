//! Next-character scoring contract.
//!
//! The sampling loop is isolated from the scoring mechanism: anything that
//! maps a context window to a score vector over the vocabulary can drive
//! generation. Concrete model wrappers (RNN inference, remote services)
//! live outside this crate and implement this trait.

use crate::error::Result;

/// A capability scoring the next character given recent context.
///
/// `context` holds vocabulary indices for the most recent characters of the
/// growing output, oldest first. Implementations return one unnormalized
/// score (logit) per vocabulary index; temperature scaling and
/// normalization happen in the sampler.
///
/// Implementations must tolerate concurrent read-only use from multiple
/// requests and must not mutate shared state per call. A returned error is
/// recovered by the caller via procedural fallback, never surfaced.
pub trait Scorer: Send + Sync {
    /// Scores the next character for the given context window.
    fn score(&self, context: &[usize]) -> Result<Vec<f32>>;
}

/// Plain functions and closures act as scorers directly.
impl<F> Scorer for F
where
    F: Fn(&[usize]) -> Result<Vec<f32>> + Send + Sync,
{
    fn score(&self, context: &[usize]) -> Result<Vec<f32>> {
        self(context)
    }
}
