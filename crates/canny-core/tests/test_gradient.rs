use approx::assert_abs_diff_eq;
use ndarray::Array2;

use canny_core::edges::{GradientField, OrientationBucket};
use canny_core::filters::padding::pad_symmetric;
use canny_core::KernelBank;

#[allow(dead_code)]
mod common;
use common::textured;

#[test]
fn test_bucket_boundaries() {
    assert_eq!(OrientationBucket::from_degrees(0.0), OrientationBucket::Deg0);
    assert_eq!(OrientationBucket::from_degrees(22.4), OrientationBucket::Deg0);
    assert_eq!(OrientationBucket::from_degrees(22.5), OrientationBucket::Deg45);
    assert_eq!(OrientationBucket::from_degrees(67.4), OrientationBucket::Deg45);
    assert_eq!(OrientationBucket::from_degrees(67.5), OrientationBucket::Deg90);
    assert_eq!(OrientationBucket::from_degrees(112.4), OrientationBucket::Deg90);
    assert_eq!(OrientationBucket::from_degrees(112.5), OrientationBucket::Deg135);
    assert_eq!(OrientationBucket::from_degrees(157.4), OrientationBucket::Deg135);
    assert_eq!(OrientationBucket::from_degrees(157.5), OrientationBucket::Deg0);
    assert_eq!(OrientationBucket::from_degrees(179.9), OrientationBucket::Deg0);
}

#[test]
fn test_bucket_display() {
    assert_eq!(OrientationBucket::Deg0.to_string(), "0\u{b0}");
    assert_eq!(OrientationBucket::Deg135.to_string(), "135\u{b0}");
}

#[test]
fn test_unpadded_field_shrinks() {
    let bank = KernelBank::default();
    let img = textured(12, 15);
    let field = GradientField::compute(img.view(), &bank, false, false);
    assert_eq!(field.dim(), (8, 11));
}

#[test]
fn test_padded_field_matches_input_shape() {
    let bank = KernelBank::default();
    let img = textured(12, 15);
    let padded = pad_symmetric(img.view(), bank.config().gaussian_radius());
    let field = GradientField::compute(padded.view(), &bank, true, false);
    assert_eq!(field.dim(), (12, 15));
}

#[test]
fn test_flat_image_has_no_gradient() {
    let bank = KernelBank::default();
    let img = Array2::from_elem((8, 8), 0.7f32);
    let field = GradientField::compute(img.view(), &bank, false, false);
    assert!(field.magnitude.iter().all(|&m| m.abs() < 1e-6));
}

#[test]
fn test_horizontal_step_is_vertical_gradient() {
    let bank = KernelBank::default();
    let img = Array2::from_shape_fn((8, 8), |(r, _)| if r >= 4 { 1.0 } else { 0.0 });
    let field = GradientField::compute(img.view(), &bank, false, false);

    let mut seen = 0;
    for ((r, c), &m) in field.magnitude.indexed_iter() {
        if m > 1e-6 {
            assert_eq!(field.bucket_at(r, c), OrientationBucket::Deg90);
            seen += 1;
        }
    }
    assert!(seen > 0);
}

#[test]
fn test_vertical_step_is_horizontal_gradient() {
    let bank = KernelBank::default();
    let img = Array2::from_shape_fn((8, 8), |(_, c)| if c >= 4 { 1.0 } else { 0.0 });
    let field = GradientField::compute(img.view(), &bank, false, false);

    for ((r, c), &m) in field.magnitude.indexed_iter() {
        if m > 1e-6 {
            assert_eq!(field.bucket_at(r, c), OrientationBucket::Deg0);
            assert_abs_diff_eq!(field.orientation[[r, c]], 0.0, epsilon = 1e-3);
        }
    }
}

#[test]
fn test_diagonal_ramps() {
    let bank = KernelBank::default();
    let slope = 0.1f32;

    // Brighter toward the bottom-right.
    let down_right = Array2::from_shape_fn((9, 9), |(r, c)| (r + c) as f32 * slope);
    let field = GradientField::compute(down_right.view(), &bank, false, false);
    let expected = 8.0 * slope * bank.gaussian().sum() * std::f32::consts::SQRT_2;
    for ((r, c), &m) in field.magnitude.indexed_iter() {
        assert_abs_diff_eq!(m, expected, epsilon = 1e-3);
        assert_abs_diff_eq!(field.orientation[[r, c]], 135.0, epsilon = 1e-2);
        assert_eq!(field.bucket_at(r, c), OrientationBucket::Deg135);
    }

    // Brighter toward the bottom-left.
    let down_left = Array2::from_shape_fn((9, 9), |(r, c)| (r + 8 - c) as f32 * slope);
    let field = GradientField::compute(down_left.view(), &bank, false, false);
    for ((r, c), _) in field.magnitude.indexed_iter() {
        assert_abs_diff_eq!(field.orientation[[r, c]], 45.0, epsilon = 1e-2);
        assert_eq!(field.bucket_at(r, c), OrientationBucket::Deg45);
    }
}

#[test]
fn test_orientation_range() {
    let bank = KernelBank::default();
    let img = textured(16, 16);
    let field = GradientField::compute(img.view(), &bank, false, false);
    for &deg in field.orientation.iter() {
        assert!((0.0..180.0).contains(&deg), "orientation {deg} out of range");
    }
    assert!(field.magnitude.iter().all(|&m| m >= 0.0));
}

#[test]
fn test_bucket_masks_partition_field() {
    let bank = KernelBank::default();
    let img = textured(16, 16);
    let field = GradientField::compute(img.view(), &bank, false, false);

    let mut total = Array2::<f32>::zeros(field.dim());
    for bucket in OrientationBucket::ALL {
        total += &field.bucket_mask(bucket);
    }
    assert!(total.iter().all(|&v| v == 1.0));
}

#[test]
fn test_remove_high_val_flattens_bright_interior() {
    let bank = KernelBank::default();
    let img = Array2::from_shape_fn((12, 12), |(r, c)| {
        if (2..10).contains(&r) && (2..10).contains(&c) {
            0.8 + 0.02 * c as f32
        } else {
            0.0
        }
    });

    let plain = GradientField::compute(img.view(), &bank, false, false);
    let clipped = GradientField::compute(img.view(), &bank, false, true);
    // Center of the square: sloped before clipping, flat after.
    assert!(plain.magnitude[[4, 4]] > 1e-4);
    assert_abs_diff_eq!(clipped.magnitude[[4, 4]], 0.0, epsilon = 1e-6);
}
