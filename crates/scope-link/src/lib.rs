//! Serial link to the oscilloscope display controller.
//!
//! Provides port discovery, baud rate selection and a one-shot
//! open/write/close transfer of a packed frame. The wire carries raw bytes
//! only: no header, framing, checksum or length prefix.

pub mod options;
pub mod ports;
pub mod serial;

// Re-exports for convenience
pub use options::{BaudRate, Destination, TEST_MODE_LABEL};
pub use ports::{available_port_names, list_destinations};
pub use serial::{SerialConnection, transmit};

/// Errors that can occur during link operations.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    #[error("Failed to open serial port {port}: {reason}")]
    PortOpen { port: String, reason: String },

    #[error("Serial write error: {0}")]
    Write(String),

    #[error("Serial port enumeration failed: {0}")]
    Enumerate(String),

    #[error("Unsupported baud rate: {0}")]
    UnsupportedBaudRate(String),
}

/// Result type alias for link operations.
pub type Result<T> = std::result::Result<T, LinkError>;
