//! Setting value validation.

use scope_image::ThresholdAlgorithm;
use scope_link::BaudRate;

use super::defaults::{KEY_ALGORITHM, KEY_BAUD_RATE, KEY_INVERT, KEY_PORT, KEY_RESOLUTION};
use super::run_config::parse_resolution;

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        KEY_RESOLUTION => {
            parse_resolution(value).map_err(|e| e.to_string())?;
        }
        KEY_ALGORITHM => {
            if ThresholdAlgorithm::from_label(value).is_none() {
                return Err(format!(
                    "must be '{}' or '{}'",
                    ThresholdAlgorithm::GlobalOtsu.label(),
                    ThresholdAlgorithm::AdaptiveGaussian.label()
                ));
            }
        }
        KEY_INVERT => {
            if value != "true" && value != "false" {
                return Err("must be 'true' or 'false'".into());
            }
        }
        KEY_PORT => {
            if value.trim().is_empty() {
                return Err("port name must not be empty".into());
            }
        }
        KEY_BAUD_RATE => {
            value.parse::<BaudRate>().map_err(|e| e.to_string())?;
        }
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_resolution() {
        assert!(validate_setting(KEY_RESOLUTION, "512x512").is_ok());
        assert!(validate_setting(KEY_RESOLUTION, "100x100").is_err());
        assert!(validate_setting(KEY_RESOLUTION, "big").is_err());
    }

    #[test]
    fn test_validate_algorithm() {
        assert!(validate_setting(KEY_ALGORITHM, "Adaptive Gaussian Thresholding").is_ok());
        assert!(validate_setting(KEY_ALGORITHM, "Otsu").is_err());
    }

    #[test]
    fn test_validate_invert() {
        assert!(validate_setting(KEY_INVERT, "true").is_ok());
        assert!(validate_setting(KEY_INVERT, "yes").is_err());
    }

    #[test]
    fn test_validate_port_and_baud() {
        assert!(validate_setting(KEY_PORT, "/dev/ttyUSB0").is_ok());
        assert!(validate_setting(KEY_PORT, "  ").is_err());
        assert!(validate_setting(KEY_BAUD_RATE, "1000000").is_ok());
        assert!(validate_setting(KEY_BAUD_RATE, "19200").is_err());
    }

    #[test]
    fn test_unknown_keys_pass() {
        assert!(validate_setting("SOMETHING_ELSE", "anything").is_ok());
    }
}
