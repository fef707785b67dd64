//! Serial port discovery.
//!
//! Ports are re-enumerated on every call; nothing is cached between scans.

use tracing::{info, warn};

use crate::options::TEST_MODE_LABEL;
use crate::{LinkError, Result};

/// Names of the serial devices currently visible to the system.
pub fn available_port_names() -> Result<Vec<String>> {
    let ports =
        serialport::available_ports().map_err(|e| LinkError::Enumerate(e.to_string()))?;
    Ok(ports.into_iter().map(|p| p.port_name).collect())
}

/// Destination selector entries: discovered ports followed by "Test mode".
///
/// An enumeration failure is logged and yields only the test-mode entry.
pub fn list_destinations() -> Vec<String> {
    let mut names = match available_port_names() {
        Ok(names) => names,
        Err(e) => {
            warn!("{e}");
            Vec::new()
        }
    };
    info!(count = names.len(), "Serial port scan complete");
    names.push(TEST_MODE_LABEL.to_string());
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_destinations_ends_with_test_mode() {
        let names = list_destinations();
        assert_eq!(names.last().map(String::as_str), Some(TEST_MODE_LABEL));
        assert_eq!(names.iter().filter(|n| *n == TEST_MODE_LABEL).count(), 1);
    }
}
