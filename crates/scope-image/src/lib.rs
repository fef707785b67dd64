//! Image processing for oscilloscope point displays.
//!
//! Provides square cropping, resizing, binarization (Otsu and adaptive
//! Gaussian), device orientation, 8-pixels-per-byte packing and the preview
//! coordinate mapping used to verify a bitmap on screen.

pub mod crop;
pub mod options;
pub mod pack;
pub mod preview;
pub mod resize;
pub mod rotate;
pub mod threshold;

// Re-exports for convenience
pub use crop::{crop_square, load_source};
pub use options::{Resolution, ThresholdAlgorithm};
pub use pack::{pack_bits, unpack_bits};
pub use preview::{DevicePoint, preview_points, reference_grid, render_preview};
pub use resize::{resize_binary, to_gray_square, to_luma_601};
pub use rotate::{flip_and_rotate, orient_for_device};
pub use threshold::{binarize, invert, split_for_targets};

/// Errors that can occur while turning an image into a bitstream.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("Image width {width} is not a multiple of 8")]
    UnalignedWidth { width: u32 },

    #[error("Packed data is {actual} bytes, expected {expected} for {width}x{height}")]
    LengthMismatch {
        expected: usize,
        actual: usize,
        width: u32,
        height: u32,
    },
}

/// Result type alias for image operations.
pub type Result<T> = std::result::Result<T, ImageError>;
