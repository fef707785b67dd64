//! Run-level error type.

use scope_image::ImageError;
use scope_link::LinkError;

/// Errors from configuring or running the pipeline.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("Bad resolution format: {0:?} (expected e.g. \"256x256\")")]
    BadResolutionFormat(String),

    #[error("Unsupported resolution: {0} (supported: 64, 128, 256, 512, 1024)")]
    UnsupportedResolution(u32),

    #[error("Unknown thresholding algorithm: {0:?}")]
    UnknownAlgorithm(String),

    #[error(transparent)]
    Image(#[from] ImageError),

    #[error(transparent)]
    Link(#[from] LinkError),
}

impl RunError {
    /// Whether the error should be shown to the user.
    ///
    /// Image-processing failures only abort the run and are logged;
    /// configuration and transport failures are reported.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, RunError::Image(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_errors_are_silent() {
        let err = RunError::from(ImageError::InvalidImage("missing.png".into()));
        assert!(!err.is_user_facing());
    }

    #[test]
    fn test_transport_and_config_errors_are_shown() {
        let err = RunError::from(LinkError::PortOpen {
            port: "COM9".into(),
            reason: "busy".into(),
        });
        assert!(err.is_user_facing());
        assert_eq!(err.to_string(), "Failed to open serial port COM9: busy");

        assert!(RunError::BadResolutionFormat("big".into()).is_user_facing());
    }
}
