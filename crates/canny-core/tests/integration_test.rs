#[allow(dead_code)]
mod common;

use tempfile::TempDir;

use canny_core::io::image_io::{load_gray, save_mask, save_tiff};
use canny_core::{CannyConfig, ImageBatch};

use common::{assert_binary, count_ones, filled_square};

/// Write a few synthetic masks to disk, load them back, and run both
/// pipelines from a TOML configuration.
#[test]
fn test_files_through_both_pipelines() {
    let dir = TempDir::new().unwrap();
    let shapes = [(8, 8, 16), (6, 10, 14), (9, 7, 14)];

    let mut paths = Vec::new();
    for (i, &(top, left, size)) in shapes.iter().enumerate() {
        let path = dir.path().join(format!("mask_{i}.tif"));
        save_tiff(filled_square(32, 32, top, left, size).view(), &path).unwrap();
        paths.push(path);
    }

    let images: Vec<_> = paths.iter().map(|p| load_gray(p).unwrap()).collect();
    let batch = ImageBatch::from_images(&images).unwrap();

    let config: CannyConfig = toml::from_str(
        r#"
        [edges]
        min_rate = 0.2
        max_rate = 0.5
        tie_break = "Leading"
        "#,
    )
    .unwrap();
    config.validate().unwrap();

    let edges = config.detector().unwrap().detect_edges(&batch, &config.edges).unwrap();
    assert_eq!(edges.len(), 3);
    for (i, img) in edges.images().enumerate() {
        let img = img.to_owned();
        assert_binary(&img);
        assert!(count_ones(&img) > 0, "image {i} has no edges");
    }

    let boundaries = config.boundary_extractor().unwrap().extract(&batch).unwrap();
    assert_eq!(boundaries.data().dim(), (3, 32, 32));

    for (i, ring) in boundaries.into_images().into_iter().enumerate() {
        assert_binary(&ring);
        let (top, left, size) = shapes[i];
        let center = (top + size / 2, left + size / 2);
        assert_eq!(ring[[center.0, center.1]], 0.0, "ring {i} interior");
        assert_eq!(ring[[0, 0]], 0.0, "ring {i} exterior");
        assert!(count_ones(&ring) > 0);

        let out = dir.path().join(format!("ring_{i}.png"));
        save_mask(ring.view(), &out).unwrap();
        assert_eq!(load_gray(&out).unwrap(), ring);
    }
}
