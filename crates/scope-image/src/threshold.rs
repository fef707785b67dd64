//! Binarization for converting grayscale images to strictly black-and-white.
//!
//! Provides global Otsu thresholding, adaptive Gaussian thresholding and the
//! inversion helpers that produce the preview and transmit copies.

use image::{GrayImage, ImageBuffer, Luma};
use imageproc::contrast::otsu_level;
use imageproc::filter::separable_filter_equal;
use tracing::debug;

use crate::options::ThresholdAlgorithm;

/// Side of the square neighbourhood used by adaptive thresholding.
pub const ADAPTIVE_BLOCK_SIZE: usize = 11;

/// Constant subtracted from the local mean before comparison.
pub const ADAPTIVE_BIAS: i32 = 2;

/// Binarize a grayscale image with the selected algorithm.
///
/// Every output pixel is either 0 or 255.
pub fn binarize(img: &GrayImage, algorithm: ThresholdAlgorithm) -> GrayImage {
    match algorithm {
        ThresholdAlgorithm::GlobalOtsu => otsu_threshold(img),
        ThresholdAlgorithm::AdaptiveGaussian => {
            adaptive_gaussian_threshold(img, ADAPTIVE_BLOCK_SIZE, ADAPTIVE_BIAS)
        }
    }
}

/// Global threshold at the Otsu level.
///
/// The Otsu level is the brightest intensity of the background class, so
/// pixels strictly above it become white (255) and the rest black (0).
pub fn otsu_threshold(img: &GrayImage) -> GrayImage {
    let level = otsu_level(img);
    debug!(
        width = img.width(),
        height = img.height(),
        level,
        "Applying Otsu threshold"
    );
    threshold_above(img, level)
}

fn threshold_above(img: &GrayImage, level: u8) -> GrayImage {
    let mut output = img.clone();
    for p in output.pixels_mut() {
        p.0[0] = if p.0[0] > level { 255 } else { 0 };
    }
    output
}

/// Adaptive threshold against a Gaussian-weighted local mean.
///
/// A pixel becomes white when it is greater than `mean - bias`, where `mean`
/// is the rounded Gaussian average over a `block_size x block_size` window.
/// Borders replicate the edge pixels so the output keeps the input size.
pub fn adaptive_gaussian_threshold(img: &GrayImage, block_size: usize, bias: i32) -> GrayImage {
    let (width, height) = img.dimensions();
    debug!(width, height, block_size, bias, "Applying adaptive Gaussian threshold");

    let kernel = gaussian_kernel(block_size);
    let mean = gaussian_mean(img, &kernel);

    let mut output = GrayImage::new(width, height);
    for ((out, src), m) in output.pixels_mut().zip(img.pixels()).zip(mean.pixels()) {
        let local = m.0[0].round() as i32;
        let val = if i32::from(src.0[0]) > local - bias { 255 } else { 0 };
        *out = Luma([val]);
    }
    output
}

/// Normalized 1D Gaussian kernel of odd length `size`.
///
/// Sigma is derived from the size as `0.3 * ((size - 1) / 2 - 1) + 0.8`,
/// which gives 2.0 for the 11-tap kernel.
pub fn gaussian_kernel(size: usize) -> Vec<f32> {
    let size = size.max(1) | 1;
    let sigma = 0.3 * ((size as f64 - 1.0) * 0.5 - 1.0) + 0.8;
    let center = (size / 2) as f64;
    let scale = -0.5 / (sigma * sigma);

    let raw: Vec<f64> = (0..size)
        .map(|i| {
            let d = i as f64 - center;
            (scale * d * d).exp()
        })
        .collect();
    let sum: f64 = raw.iter().sum();
    raw.into_iter().map(|v| (v / sum) as f32).collect()
}

/// Gaussian blur of `img` as floating-point means, borders replicated.
fn gaussian_mean(img: &GrayImage, kernel: &[f32]) -> ImageBuffer<Luma<f32>, Vec<f32>> {
    let (width, height) = img.dimensions();
    let float: ImageBuffer<Luma<f32>, Vec<f32>> =
        ImageBuffer::from_fn(width, height, |x, y| Luma([f32::from(img.get_pixel(x, y).0[0])]));
    separable_filter_equal(&float, kernel)
}

/// Bitwise-invert a binary image (0 <-> 255).
pub fn invert(img: &GrayImage) -> GrayImage {
    let mut output = img.clone();
    image::imageops::invert(&mut output);
    output
}

/// Produce the `(preview, transmit)` copies of a binarized image.
///
/// With `invert` set the preview copy is inverted and the transmit copy is
/// left as binarized; without it the transmit copy is inverted instead. The
/// two copies are always bitwise complements of each other.
pub fn split_for_targets(binary: &GrayImage, invert_preview: bool) -> (GrayImage, GrayImage) {
    if invert_preview {
        debug!("Preview inverted, transmit copy as binarized");
        (invert(binary), binary.clone())
    } else {
        debug!("Transmit copy inverted, preview as binarized");
        (binary.clone(), invert(binary))
    }
}
