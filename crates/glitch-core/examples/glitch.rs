//! Open an image, bend it, reverse odd columns, binarize it, and save it.
//!
//! ```text
//! RUST_LOG=debug cargo run -p glitch-core --example glitch -- in.jpg out.jpg --seed 7
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use glitch_core::{ImageEffectEngine, OutputFormat};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Parser)]
#[command(about = "Apply a wave, a column reversal and a color round to an image")]
struct Args {
    /// Source image (JPEG or PNG).
    input: PathBuf,

    /// Destination; the extension picks JPEG or PNG.
    output: PathBuf,

    /// Seed for the random wave amplitude; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// JPEG quality (1-100).
    #[arg(long, default_value_t = glitch_core::encode::DEFAULT_JPEG_QUALITY)]
    quality: u8,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let bytes = std::fs::read(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let mut engine = ImageEffectEngine::from_bytes(&bytes)?;
    let (width, height) = engine.dimensions();
    log::info!("loaded {} ({width}x{height})", args.input.display());

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);

    engine.horizontal_wave(rng.random_range(20..50));
    engine.y_reverse();
    engine.color_round();

    let format = match args
        .output
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(OutputFormat::from_extension)
    {
        Some(OutputFormat::Jpeg { .. }) | None => OutputFormat::Jpeg {
            quality: args.quality,
        },
        Some(other) => other,
    };

    let encoded = engine.encode(format)?;
    std::fs::write(&args.output, encoded)
        .with_context(|| format!("writing {}", args.output.display()))?;
    log::info!("saved {}", args.output.display());

    Ok(())
}
