//! Source loading and square cropping.

use std::path::Path;

use image::DynamicImage;
use tracing::debug;

use crate::{ImageError, Result};

/// Decode an image file from disk.
pub fn load_source(path: &Path) -> Result<DynamicImage> {
    let img = image::open(path)
        .map_err(|e| ImageError::InvalidImage(format!("{}: {e}", path.display())))?;
    debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "Loaded source image"
    );
    Ok(img)
}

/// Crop an image to a square of side `min(width, height)`.
///
/// The square is anchored at the top-left corner; the excess of the longer
/// axis is dropped, not centered.
pub fn crop_square(img: &DynamicImage) -> Result<DynamicImage> {
    let (w, h) = (img.width(), img.height());
    if w == 0 || h == 0 {
        return Err(ImageError::InvalidImage(format!(
            "image has zero size ({w}x{h})"
        )));
    }

    if w == h {
        debug!(side = w, "Image already square, skipping crop");
        return Ok(img.clone());
    }

    let side = w.min(h);
    debug!(w, h, side, "Cropping image to top-left square");
    Ok(img.crop_imm(0, 0, side, side))
}
