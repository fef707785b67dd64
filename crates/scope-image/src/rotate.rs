//! Orientation normalization for the display's physical mounting.
//!
//! The display shows the frame mirrored and upside down, so the transmit
//! copy is flipped horizontally and then rotated 180 degrees. The rotation is
//! a general affine warp onto the full rotated bounding box.

use image::imageops;
use image::{GrayImage, Luma};
use tracing::debug;

/// Rotation applied to every transmitted frame, in degrees.
pub const DEVICE_ROTATION_DEGREES: f64 = 180.0;

/// Flip and rotate a frame into display orientation.
pub fn orient_for_device(img: &GrayImage) -> GrayImage {
    flip_and_rotate(img, DEVICE_ROTATION_DEGREES)
}

/// Mirror an image horizontally, then rotate it by `angle_deg`.
pub fn flip_and_rotate(img: &GrayImage, angle_deg: f64) -> GrayImage {
    let flipped = imageops::flip_horizontal(img);
    rotate_bound(&flipped, angle_deg)
}

/// Size of the axis-aligned box that holds a `width x height` image rotated
/// by `angle_deg`. Fractional sizes are truncated.
pub fn bounding_box(width: u32, height: u32, angle_deg: f64) -> (u32, u32) {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    let (w, h) = (f64::from(width), f64::from(height));
    let b_w = h * sin.abs() + w * cos.abs();
    let b_h = h * cos.abs() + w * sin.abs();
    (b_w as u32, b_h as u32)
}

/// Rotate counter-clockwise by `angle_deg` about the image centre without
/// cropping the corners.
///
/// Output pixels are inverse-mapped into the source and sampled bilinearly;
/// samples outside the source read as 0.
pub fn rotate_bound(img: &GrayImage, angle_deg: f64) -> GrayImage {
    let (w, h) = img.dimensions();
    let (b_w, b_h) = bounding_box(w, h, angle_deg);
    debug!(w, h, b_w, b_h, angle_deg, "Rotating image onto bounding box");

    let (sin, cos) = angle_deg.to_radians().sin_cos();
    let src_cx = (f64::from(w) - 1.0) / 2.0;
    let src_cy = (f64::from(h) - 1.0) / 2.0;
    let dst_cx = (f64::from(b_w) - 1.0) / 2.0;
    let dst_cy = (f64::from(b_h) - 1.0) / 2.0;

    // forward: dst = R * (src - src_c) + dst_c with R = [[cos, sin], [-sin, cos]]
    // inverse: src = R^T * (dst - dst_c) + src_c
    GrayImage::from_fn(b_w, b_h, |x, y| {
        let dx = f64::from(x) - dst_cx;
        let dy = f64::from(y) - dst_cy;
        let sx = cos * dx - sin * dy + src_cx;
        let sy = sin * dx + cos * dy + src_cy;
        let val = sample_bilinear(img, sx, sy).round().clamp(0.0, 255.0) as u8;
        Luma([val])
    })
}

/// Bilinear sample with a constant zero border.
fn sample_bilinear(img: &GrayImage, x: f64, y: f64) -> f64 {
    let (w, h) = (i64::from(img.width()), i64::from(img.height()));
    let x0 = x.floor();
    let y0 = y.floor();
    let fx = x - x0;
    let fy = y - y0;
    let (x0, y0) = (x0 as i64, y0 as i64);

    let px = |xi: i64, yi: i64| -> f64 {
        if xi < 0 || yi < 0 || xi >= w || yi >= h {
            0.0
        } else {
            f64::from(img.get_pixel(xi as u32, yi as u32).0[0])
        }
    };

    let top = px(x0, y0) * (1.0 - fx) + px(x0 + 1, y0) * fx;
    let bottom = px(x0, y0 + 1) * (1.0 - fx) + px(x0 + 1, y0 + 1) * fx;
    top * (1.0 - fy) + bottom * fy
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a test image with unique pixel values at corners.
    /// Top-left=10, Top-right=20, Bottom-left=30, Bottom-right=40
    fn create_corner_image(width: u32, height: u32) -> GrayImage {
        let mut img = GrayImage::from_pixel(width, height, Luma([128]));
        img.put_pixel(0, 0, Luma([10]));
        img.put_pixel(width - 1, 0, Luma([20]));
        img.put_pixel(0, height - 1, Luma([30]));
        img.put_pixel(width - 1, height - 1, Luma([40]));
        img
    }

    fn create_noise_image(width: u32, height: u32) -> GrayImage {
        GrayImage::from_fn(width, height, |x, y| {
            Luma([if (x * 7 + y * 13) % 5 < 2 { 0 } else { 255 }])
        })
    }

    #[test]
    fn test_bounding_box_quarter_turns() {
        assert_eq!(bounding_box(64, 64, 180.0), (64, 64));
        assert_eq!(bounding_box(10, 20, 180.0), (10, 20));
        assert_eq!(bounding_box(10, 20, 90.0), (20, 10));
        assert_eq!(bounding_box(10, 20, 0.0), (10, 20));
    }

    #[test]
    fn test_bounding_box_grows_at_45_degrees() {
        let (b_w, b_h) = bounding_box(100, 100, 45.0);
        assert_eq!((b_w, b_h), (141, 141));
    }

    #[test]
    fn test_rotate_180_corner_values() {
        let img = create_corner_image(4, 4);
        let rotated = rotate_bound(&img, 180.0);

        assert_eq!(rotated.dimensions(), (4, 4));
        assert_eq!(rotated.get_pixel(0, 0).0[0], 40);
        assert_eq!(rotated.get_pixel(3, 0).0[0], 30);
        assert_eq!(rotated.get_pixel(0, 3).0[0], 20);
        assert_eq!(rotated.get_pixel(3, 3).0[0], 10);
    }

    #[test]
    fn test_rotate_180_reverses_both_axes() {
        let img = create_noise_image(16, 16);
        let rotated = rotate_bound(&img, 180.0);

        for (x, y, p) in rotated.enumerate_pixels() {
            assert_eq!(p.0[0], img.get_pixel(15 - x, 15 - y).0[0], "at ({x}, {y})");
        }
    }

    #[test]
    fn test_rotate_180_is_involution() {
        let img = create_noise_image(24, 24);
        let double_rotated = rotate_bound(&rotate_bound(&img, 180.0), 180.0);
        assert_eq!(double_rotated, img);
    }

    #[test]
    fn test_rotate_90_moves_top_right_to_top_left() {
        // Counter-clockwise: the top-right corner ends up at the top-left.
        let img = create_corner_image(5, 5);
        let rotated = rotate_bound(&img, 90.0);

        assert_eq!(rotated.dimensions(), (5, 5));
        assert_eq!(rotated.get_pixel(0, 0).0[0], 20);
        assert_eq!(rotated.get_pixel(0, 4).0[0], 10);
        assert_eq!(rotated.get_pixel(4, 4).0[0], 30);
    }

    #[test]
    fn test_orient_for_device_is_vertical_flip() {
        // Horizontal mirror followed by a half turn leaves the columns in
        // place and reverses the rows.
        let img = create_noise_image(16, 8);
        let oriented = orient_for_device(&img);

        assert_eq!(oriented.dimensions(), (16, 8));
        for (x, y, p) in oriented.enumerate_pixels() {
            assert_eq!(p.0[0], img.get_pixel(x, 7 - y).0[0], "at ({x}, {y})");
        }
    }

    #[test]
    fn test_orient_keeps_binary_values() {
        let img = create_noise_image(64, 64);
        let oriented = orient_for_device(&img);
        assert!(oriented.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
    }
}
