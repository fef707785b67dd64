//! 1-bit packing of binary frames for the serial wire.
//!
//! Each byte carries 8 horizontally adjacent pixels, leftmost pixel in the
//! least-significant bit. A bit is set when the pixel is non-zero. Rows are
//! emitted top to bottom with no padding, framing or header.

use image::{GrayImage, Luma};
use tracing::debug;

use crate::{ImageError, Result};

/// Pixels per packed byte.
pub const PIXELS_PER_BYTE: u32 = 8;

/// Number of bytes a `width x height` frame packs into.
pub fn packed_len(width: u32, height: u32) -> usize {
    (width as usize) * (height as usize) / PIXELS_PER_BYTE as usize
}

/// Pack a binary frame into bytes, LSB first.
///
/// The width must be a multiple of 8.
pub fn pack_bits(img: &GrayImage) -> Result<Vec<u8>> {
    let (width, height) = img.dimensions();
    if width % PIXELS_PER_BYTE != 0 {
        return Err(ImageError::UnalignedWidth { width });
    }

    // Rows are contiguous and byte aligned, so 8-pixel chunks never span rows.
    let packed: Vec<u8> = img
        .as_raw()
        .chunks_exact(PIXELS_PER_BYTE as usize)
        .map(pack_byte)
        .collect();

    debug!(width, height, bytes = packed.len(), "Packed frame");
    Ok(packed)
}

fn pack_byte(pixels: &[u8]) -> u8 {
    pixels
        .iter()
        .enumerate()
        .filter(|&(_, &px)| px != 0)
        .fold(0u8, |byte, (bit, _)| byte | (1 << bit))
}

/// Expand packed bytes back into a 0/255 frame.
pub fn unpack_bits(data: &[u8], width: u32, height: u32) -> Result<GrayImage> {
    if width % PIXELS_PER_BYTE != 0 {
        return Err(ImageError::UnalignedWidth { width });
    }
    let expected = packed_len(width, height);
    if data.len() != expected {
        return Err(ImageError::LengthMismatch {
            expected,
            actual: data.len(),
            width,
            height,
        });
    }

    let bytes_per_row = (width / PIXELS_PER_BYTE) as usize;
    Ok(GrayImage::from_fn(width, height, |x, y| {
        let byte = data[y as usize * bytes_per_row + (x / PIXELS_PER_BYTE) as usize];
        let bit = x % PIXELS_PER_BYTE;
        Luma([if (byte >> bit) & 1 == 1 { 255 } else { 0 }])
    }))
}
