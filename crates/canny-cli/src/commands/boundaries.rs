use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use super::common::{load_batch, load_config, write_batch};
use crate::summary::print_boundaries_summary;

#[derive(Args)]
pub struct BoundariesArgs {
    /// Input mask images; all must share one size
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Config file (TOML); command-line options override it
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Erosion passes before edge detection
    #[arg(long)]
    pub erode: Option<usize>,

    /// Dilation passes after edge detection
    #[arg(long)]
    pub dilate: Option<usize>,

    /// Edge strength threshold (0.0 to 1.0)
    #[arg(long)]
    pub threshold: Option<f32>,

    /// Output directory
    #[arg(short, long, default_value = "boundaries")]
    pub output: PathBuf,
}

pub fn run(args: &BoundariesArgs) -> Result<()> {
    let mut config = load_config(args.config.as_deref())?;
    let params = &mut config.boundary;
    if let Some(v) = args.erode {
        params.erosion_iterations = v;
    }
    if let Some(v) = args.dilate {
        params.dilation_iterations = v;
    }
    if let Some(v) = args.threshold {
        params.edge_threshold = v;
    }
    params.validate().context("Invalid boundary options")?;

    print_boundaries_summary(&config, args.files.len(), &args.output);

    let masks = load_batch(&args.files)?;
    let extractor = config.boundary_extractor()?;
    let outlines = extractor.extract(&masks)?;

    write_batch(outlines, &args.files, &args.output, "boundary")?;
    println!(
        "Saved {} boundary mask(s) to {}",
        args.files.len(),
        args.output.display()
    );
    Ok(())
}
