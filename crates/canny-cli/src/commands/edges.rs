use std::path::PathBuf;

use anyhow::{Context, Result};
use canny_core::TieBreak;
use clap::{Args, ValueEnum};

use super::common::{load_batch, load_config, write_batch};
use crate::summary::print_edges_summary;

#[derive(Clone, Copy, ValueEnum)]
pub enum TieBreakArg {
    Strict,
    Leading,
}

impl From<TieBreakArg> for TieBreak {
    fn from(arg: TieBreakArg) -> Self {
        match arg {
            TieBreakArg::Strict => TieBreak::Strict,
            TieBreakArg::Leading => TieBreak::Leading,
        }
    }
}

#[derive(Args)]
pub struct EdgesArgs {
    /// Input images (PNG, TIFF, ...); all must share one size
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Config file (TOML); command-line options override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Lower hysteresis threshold (0.0 to 1.0)
    #[arg(long)]
    pub min_rate: Option<f32>,

    /// Upper hysteresis threshold (0.0 to 1.0)
    #[arg(long)]
    pub max_rate: Option<f32>,

    /// Hysteresis propagation rounds (maximum linking distance)
    #[arg(long)]
    pub rounds: Option<usize>,

    /// Let the output shrink instead of reflection-padding the borders
    #[arg(long)]
    pub no_preserve_size: bool,

    /// Clip smoothed intensities to half range before differentiation
    #[arg(long)]
    pub remove_high_val: bool,

    /// Write raw suppressed edge strength instead of a binary mask
    #[arg(long)]
    pub raw: bool,

    /// Plateau handling during non-maximum suppression
    #[arg(long, value_enum)]
    pub tie_break: Option<TieBreakArg>,

    /// Output directory
    #[arg(short, long, default_value = "edges")]
    pub output: PathBuf,
}

pub fn run(args: &EdgesArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    let params = &mut config.edges;
    if let Some(v) = args.min_rate {
        params.min_rate = v;
    }
    if let Some(v) = args.max_rate {
        params.max_rate = v;
    }
    if let Some(v) = args.rounds {
        params.rounds = v;
    }
    if let Some(v) = args.tie_break {
        params.tie_break = v.into();
    }
    params.preserve_size &= !args.no_preserve_size;
    params.remove_high_val |= args.remove_high_val;
    params.raw_only |= args.raw;
    params.validate().context("Invalid edge options")?;

    print_edges_summary(&config, args.files.len(), &args.output);

    let batch = load_batch(&args.files)?;
    let detector = config.detector()?;
    let edges = detector.detect_edges(&batch, &config.edges)?;

    write_batch(edges, &args.files, &args.output, "edges")?;
    println!("Saved {} edge map(s) to {}", args.files.len(), args.output.display());
    Ok(())
}
