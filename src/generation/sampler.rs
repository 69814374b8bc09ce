//! Constrained sequence sampler.
//!
//! Extends a seed string one character at a time by querying an external
//! scorer, applying temperature scaling, top-k truncation, and
//! vocabulary-validity filtering. Scorer failures and low-quality output
//! both route to the procedural fallback generator; generation as a whole
//! never fails for validated parameters.

use log::{info, warn};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{fallback, CANONICAL_HEADER, HEADER_MARKER};
use crate::error::{EngineError, Result};
use crate::models::Scorer;
use crate::types::GenerationParams;
use crate::vocab::{vocabulary, Vocabulary};

/// Tunable constants of the sampling loop.
///
/// The defaults are the empirically tuned values the engine has always
/// used; they are fields rather than hard-coded so callers can experiment
/// without a rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplerConfig {
    /// Number of trailing characters fed to the scorer as context.
    pub context_window: usize,
    /// Number of top candidates kept before validity filtering.
    pub top_k: usize,
    /// Lower bound applied to temperature before logit scaling.
    pub min_temperature: f32,
    /// Minimum fraction of valid-output characters an accepted sample
    /// must contain.
    pub quality_threshold: f32,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            context_window: 50,
            top_k: 20,
            min_temperature: 0.1,
            quality_threshold: 0.3,
        }
    }
}

/// Generates a notation string, falling back to procedural generation when
/// the scorer is absent, fails, or produces low-quality output.
///
/// The result always starts with a notation header and never exceeds
/// `params.length` characters.
pub fn generate_notation<R: Rng>(
    params: &GenerationParams,
    scorer: Option<&dyn Scorer>,
    cfg: &SamplerConfig,
    rng: &mut R,
) -> String {
    let mut notation = match scorer {
        Some(scorer) => match sample_notation(params, scorer, cfg, rng) {
            Ok(text) => {
                let ratio = vocabulary().valid_output_ratio(&text);
                if ratio < cfg.quality_threshold {
                    warn!(
                        "scorer output quality low ({:.0}% valid chars), using fallback",
                        ratio * 100.0
                    );
                    fallback::generate_tune(params, rng)
                } else {
                    info!("scorer output quality good ({:.0}% valid chars)", ratio * 100.0);
                    text
                }
            }
            Err(err) => {
                warn!("scorer-driven generation failed: {}, using fallback", err);
                fallback::generate_tune(params, rng)
            }
        },
        None => fallback::generate_tune(params, rng),
    };

    if !notation.starts_with(HEADER_MARKER) {
        notation.insert_str(0, CANONICAL_HEADER);
    }

    truncate_chars(&mut notation, params.length);
    notation
}

/// Runs the scorer-driven sampling loop.
///
/// A failing step aborts the loop and keeps the partial output; the
/// attempt as a whole only errors when the scorer never contributed a
/// single character.
pub fn sample_notation<R: Rng>(
    params: &GenerationParams,
    scorer: &dyn Scorer,
    cfg: &SamplerConfig,
    rng: &mut R,
) -> Result<String> {
    let vocab = vocabulary();

    let mut generated = if params.seed.trim().is_empty() {
        CANONICAL_HEADER.to_string()
    } else {
        params.seed.clone()
    };

    let max_iterations = (params.length / 2).max(150);
    let mut appended = 0usize;
    let mut last_error = None;

    for iteration in 0..max_iterations {
        if generated.chars().count() >= params.length {
            break;
        }

        match sample_step(&generated, scorer, cfg, vocab, params.temperature, rng) {
            Ok(Some(c)) => {
                generated.push(c);
                appended += 1;
            }
            // Candidate fell outside the emittable set; skip the step.
            Ok(None) => {}
            Err(err) => {
                warn!("sampling step {} failed: {}", iteration, err);
                last_error = Some(err);
                break;
            }
        }
    }

    match last_error {
        Some(err) if appended == 0 => Err(err),
        _ => Ok(generated),
    }
}

/// Samples one candidate character from the scorer's distribution.
///
/// Returns `Ok(None)` when the sampled character is not emittable.
fn sample_step<R: Rng>(
    generated: &str,
    scorer: &dyn Scorer,
    cfg: &SamplerConfig,
    vocab: &Vocabulary,
    temperature: f32,
    rng: &mut R,
) -> Result<Option<char>> {
    // Unknown context characters map to index 0.
    let tail: Vec<char> = generated.chars().rev().take(cfg.context_window).collect();
    let context: Vec<usize> = tail
        .iter()
        .rev()
        .map(|&c| vocab.index_of(c).unwrap_or(0))
        .collect();

    let logits = scorer.score(&context)?;
    if logits.len() != vocab.len() {
        return Err(EngineError::scorer_failed(format!(
            "Scorer returned {} scores for a vocabulary of {}",
            logits.len(),
            vocab.len()
        )));
    }

    let probs = softmax_with_temperature(&logits, temperature.max(cfg.min_temperature))?;

    // Top-k candidates by probability.
    let mut order: Vec<usize> = (0..probs.len()).collect();
    order.sort_by(|&a, &b| {
        probs[b]
            .partial_cmp(&probs[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    order.truncate(cfg.top_k.min(probs.len()));

    let valid: Vec<usize> = order
        .iter()
        .copied()
        .filter(|&idx| vocab.char_of(idx).is_some_and(|c| vocab.is_valid_output(c)))
        .collect();

    // Sample from the valid candidates, or from the unfiltered top-k when
    // the filter leaves nothing.
    let pool = if valid.is_empty() { &order } else { &valid };
    let weights: Vec<f32> = pool.iter().map(|&idx| probs[idx]).collect();
    let dist = WeightedIndex::new(&weights)
        .map_err(|e| EngineError::scorer_failed(format!("Degenerate distribution: {}", e)))?;
    let choice = pool[dist.sample(rng)];

    let c = vocab.char_of(choice).unwrap_or('C');
    Ok(if vocab.is_valid_output(c) { Some(c) } else { None })
}

/// Temperature-scaled softmax over raw scores.
///
/// Higher temperature flattens the distribution, lower sharpens it.
fn softmax_with_temperature(logits: &[f32], temperature: f32) -> Result<Vec<f32>> {
    let scaled: Vec<f32> = logits.iter().map(|l| l / temperature).collect();
    let max = scaled.iter().fold(f32::NEG_INFINITY, |m, &v| m.max(v));
    if !max.is_finite() {
        return Err(EngineError::scorer_failed("Non-finite scores from model"));
    }
    let exp: Vec<f32> = scaled.iter().map(|v| (v - max).exp()).collect();
    let sum: f32 = exp.iter().sum();
    if sum <= 0.0 || !sum.is_finite() {
        return Err(EngineError::scorer_failed("Degenerate score distribution"));
    }
    Ok(exp.iter().map(|v| v / sum).collect())
}

fn truncate_chars(s: &mut String, max_chars: usize) {
    if let Some((idx, _)) = s.char_indices().nth(max_chars) {
        s.truncate(idx);
    }
}
