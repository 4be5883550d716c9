use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use canny_core::io::image_io::{load_gray, save_mask};
use canny_core::{CannyConfig, ImageBatch};
use indicatif::{ProgressBar, ProgressStyle};
use ndarray::Array2;
use rayon::prelude::*;
use tracing::info;

/// Read a TOML config, or fall back to defaults.
pub fn load_config(path: Option<&Path>) -> Result<CannyConfig> {
    let config: CannyConfig = match path {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            toml::from_str(&contents).context("Invalid config")?
        }
        None => CannyConfig::default(),
    };
    config.validate().context("Invalid config")?;
    Ok(config)
}

/// Load every file as one batch. All images must share a shape.
pub fn load_batch(files: &[PathBuf]) -> Result<ImageBatch> {
    if files.is_empty() {
        anyhow::bail!("No input files given");
    }

    let pb = progress_bar(files.len(), "Loading images");
    let images: Vec<Array2<f32>> = files
        .par_iter()
        .map(|path| {
            let img = load_gray(path).with_context(|| format!("Failed to load {}", path.display()));
            pb.inc(1);
            img
        })
        .collect::<Result<_>>()?;
    pb.finish_and_clear();

    let batch = ImageBatch::from_images(&images).context("Input images must share one size")?;
    info!(
        images = batch.len(),
        height = batch.height(),
        width = batch.width(),
        "Loaded batch"
    );
    Ok(batch)
}

/// Write each output image next to its input name inside `out_dir`.
pub fn write_batch(batch: ImageBatch, files: &[PathBuf], out_dir: &Path, suffix: &str) -> Result<()> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let pb = progress_bar(files.len(), "Writing results");
    for (img, input) in batch.images().zip(files) {
        let stem = input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("image");
        let path = out_dir.join(format!("{stem}_{suffix}.png"));
        save_mask(img, &path).with_context(|| format!("Failed to write {}", path.display()))?;
        pb.inc(1);
    }
    pb.finish_with_message("Done");
    Ok(())
}

fn progress_bar(len: usize, message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar().template("{msg:20} [{bar:40}] {pos}/{len}") {
        pb.set_style(style.progress_chars("=> "));
    }
    pb.set_message(message);
    pb
}
