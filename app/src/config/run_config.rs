//! Immutable per-run configuration.

use std::path::PathBuf;

use scope_image::{Resolution, ThresholdAlgorithm};
use scope_link::{BaudRate, Destination};

use crate::error::RunError;

/// Raw selector values as supplied by the front end.
#[derive(Debug, Clone, Copy)]
pub struct Selection<'a> {
    pub image_path: &'a str,
    pub resolution: &'a str,
    pub algorithm: &'a str,
    pub invert: bool,
    pub destination: &'a str,
    pub baud_rate: &'a str,
}

/// Everything one pipeline run needs, validated up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub image_path: PathBuf,
    pub resolution: Resolution,
    pub algorithm: ThresholdAlgorithm,
    /// Invert the preview; the transmitted frame carries the complement.
    pub invert: bool,
    pub destination: Destination,
    pub baud_rate: BaudRate,
}

impl RunConfig {
    /// Validate a selection. Fails before any image is touched.
    pub fn from_selection(sel: &Selection<'_>) -> Result<Self, RunError> {
        let resolution = parse_resolution(sel.resolution)?;
        let algorithm = ThresholdAlgorithm::from_label(sel.algorithm)
            .ok_or_else(|| RunError::UnknownAlgorithm(sel.algorithm.to_string()))?;
        let baud_rate = sel.baud_rate.parse::<BaudRate>()?;

        Ok(Self {
            image_path: PathBuf::from(sel.image_path),
            resolution,
            algorithm,
            invert: sel.invert,
            destination: Destination::from_selection(sel.destination),
            baud_rate,
        })
    }
}

/// Parse a `"WxH"` resolution label.
///
/// Only the first token before `x` is read; it must be one of the supported
/// sides.
pub fn parse_resolution(label: &str) -> Result<Resolution, RunError> {
    let side: u32 = label
        .split('x')
        .next()
        .map(str::trim)
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| RunError::BadResolutionFormat(label.to_string()))?;

    Resolution::from_side(side).ok_or(RunError::UnsupportedResolution(side))
}
