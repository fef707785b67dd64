//! One complete run: process the image, then hand the frame to the link.

use scope_image::DevicePoint;
use scope_link::{LinkError, transmit};
use tracing::{error, info, warn};

use crate::config::RunConfig;
use crate::error::RunError;
use crate::services::pipeline::process;

/// Outcome of a run whose image processing succeeded.
///
/// Transmission failures do not discard the processed frame; they are
/// carried in `transport_error` for the caller to present.
#[derive(Debug)]
pub struct RunReport {
    pub bitstream: Vec<u8>,
    pub preview: Vec<DevicePoint>,
    /// Bytes accepted by the serial device (0 in test mode or on failure).
    pub bytes_written: usize,
    pub transport_error: Option<LinkError>,
}

impl RunReport {
    /// Message for the user if the transfer failed.
    pub fn user_message(&self) -> Option<String> {
        self.transport_error.as_ref().map(ToString::to_string)
    }
}

/// Run the pipeline end to end.
///
/// Processing errors abort the run before anything is sent. Transport
/// errors are logged and returned inside the report. There is no retry.
pub fn execute(config: &RunConfig) -> Result<RunReport, RunError> {
    info!(
        image = %config.image_path.display(),
        resolution = %config.resolution,
        algorithm = %config.algorithm,
        invert = config.invert,
        destination = %config.destination,
        baud = %config.baud_rate,
        "Starting run"
    );

    let frame = process(config).inspect_err(|e| warn!("Run aborted: {e}"))?;

    let (bytes_written, transport_error) =
        match transmit(&config.destination, config.baud_rate, &frame.bitstream) {
            Ok(n) => (n, None),
            Err(e) => {
                error!("Transmission failed: {e}");
                (0, Some(e))
            }
        };

    Ok(RunReport {
        bitstream: frame.bitstream,
        preview: frame.preview,
        bytes_written,
        transport_error,
    })
}
