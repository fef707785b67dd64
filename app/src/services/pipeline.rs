//! Image-to-bitstream pipeline.
//!
//! Square crop, grayscale resize, binarize, then split into a preview copy
//! (mapped to device points) and a transmit copy (oriented and packed).

use image::{DynamicImage, GrayImage};
use scope_image::{
    DevicePoint, Resolution, binarize, crop_square, load_source, orient_for_device, pack_bits,
    preview_points, split_for_targets, to_gray_square,
};
use tracing::{debug, info};

use crate::config::RunConfig;
use crate::error::RunError;

/// Output of the processing stages of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedFrame {
    pub resolution: Resolution,
    /// Packed transmit frame, `resolution² / 8` bytes.
    pub bitstream: Vec<u8>,
    /// Dark pixels of the 256x256 preview in device space.
    pub preview: Vec<DevicePoint>,
}

/// Load the configured image and process it.
pub fn process(config: &RunConfig) -> Result<ProcessedFrame, RunError> {
    let source = load_source(&config.image_path)?;
    process_image(&source, config)
}

/// Process an already decoded image.
///
/// Pure: the same image and configuration always give the same frame.
pub fn process_image(source: &DynamicImage, config: &RunConfig) -> Result<ProcessedFrame, RunError> {
    let (preview_binary, transmit_binary) = binary_targets(source, config)?;

    let preview = preview_points(&preview_binary);

    let oriented = orient_for_device(&transmit_binary);
    let bitstream = pack_bits(&oriented)?;
    info!(
        resolution = %config.resolution,
        bytes = bitstream.len(),
        preview_points = preview.len(),
        "Frame processed"
    );

    Ok(ProcessedFrame {
        resolution: config.resolution,
        bitstream,
        preview,
    })
}

/// Crop, resize and binarize, returning the `(preview, transmit)` copies.
pub fn binary_targets(
    source: &DynamicImage,
    config: &RunConfig,
) -> Result<(GrayImage, GrayImage), RunError> {
    let square = crop_square(source)?;
    let gray = to_gray_square(&square, config.resolution.side());
    debug!(algorithm = %config.algorithm, "Binarizing");
    let binary = binarize(&gray, config.algorithm);
    Ok(split_for_targets(&binary, config.invert))
}
