//! Command-line front end for the generation engine.
//!
//! Generates a tune, prints the result as JSON, and optionally renders it
//! to a WAV file.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::{info, LevelFilter};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use abcgen::audio::{samples_to_duration, write_wav};
use abcgen::config::EngineConfig;
use abcgen::generation;
use abcgen::types::GenerationParams;

#[derive(Debug, Parser)]
#[command(name = "abcgen", about = "Generate ABC notation tunes and render them to WAV")]
struct Args {
    /// Seed text the generated notation extends (at most 50 characters).
    #[arg(long, default_value = "")]
    seed: String,

    /// Randomness parameter, 0.1-2.0.
    #[arg(long, default_value_t = 1.0)]
    temperature: f32,

    /// Requested output length in characters, 50-500 in steps of 10.
    #[arg(long, default_value_t = 200)]
    length: usize,

    /// Seed for the random source; random when omitted.
    #[arg(long)]
    rng_seed: Option<u64>,

    /// Write the rendered audio to this WAV file.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    simple_logger::SimpleLogger::new().with_level(level).init()?;

    let config = EngineConfig::default();
    let params = GenerationParams::new(&args.seed, args.temperature, args.length)
        .context("invalid generation parameters")?;

    let mut rng = match args.rng_seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    // No scorer ships with the crate; generation runs on the procedural
    // path unless a host wires a model in through the library API.
    let result = generation::generate(&params, None, &config.sampler, &mut rng);
    println!("{}", serde_json::to_string_pretty(&result)?);

    if let Some(path) = args.output {
        let samples = generation::render_audio(&result.notation, config.tempo_bpm, &config.envelope)
            .context("failed to render audio")?;
        write_wav(&path, &samples).context("failed to write WAV file")?;
        info!(
            "Wrote {} ({:.2}s of audio)",
            path.display(),
            samples_to_duration(samples.len())
        );
    }

    Ok(())
}
