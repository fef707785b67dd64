//! Resizing utilities for the transmit and preview paths.

use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage, Luma};
use tracing::debug;

/// Convert an image to grayscale and resize it to `side x side`.
///
/// Uses bilinear (triangle) filtering. The input is expected to be square
/// already; a non-square input is stretched.
pub fn to_gray_square(img: &DynamicImage, side: u32) -> GrayImage {
    let gray = to_luma_601(img);
    let (orig_w, orig_h) = gray.dimensions();

    if (orig_w, orig_h) == (side, side) {
        debug!(side, "Image already at target size, skipping resize");
        return gray;
    }

    debug!(orig_w, orig_h, side, "Resizing grayscale image");
    imageops::resize(&gray, side, side, FilterType::Triangle)
}

/// Grayscale with BT.601 weights (0.299 R + 0.587 G + 0.114 B), rounded.
///
/// `DynamicImage::to_luma8` weighs with BT.709 instead, which shifts the
/// threshold on saturated colours. Alpha is dropped.
pub fn to_luma_601(img: &DynamicImage) -> GrayImage {
    let rgb = img.to_rgb8();
    GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        let [r, g, b] = rgb.get_pixel(x, y).0.map(u32::from);
        Luma([((299 * r + 587 * g + 114 * b + 500) / 1000) as u8])
    })
}

/// Resize a binary image to `side x side` without introducing gray levels.
///
/// Nearest-neighbour sampling keeps every output pixel at 0 or 255.
pub fn resize_binary(img: &GrayImage, side: u32) -> GrayImage {
    if img.dimensions() == (side, side) {
        return img.clone();
    }
    debug!(
        orig_w = img.width(),
        orig_h = img.height(),
        side,
        "Resizing binary image"
    );
    imageops::resize(img, side, side, FilterType::Nearest)
}
