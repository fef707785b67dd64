//! # Serial Transport
//!
//! One transfer is one open/write/close cycle: the port is opened at the
//! selected baud rate (8 data bits, no parity, one stop bit, no flow
//! control), the whole frame goes out in a single blocking write, and the
//! port is closed when the connection is dropped.
//!
//! There is no retry and no partial-write recovery. If the device accepts
//! only part of the frame the transfer fails with [`LinkError::Write`] and
//! must be triggered again.

use std::io::Write;
use std::time::Duration;

use serialport::{DataBits, FlowControl, Parity, SerialPort, StopBits};
use tracing::{debug, info};

use crate::options::{BaudRate, Destination};
use crate::{LinkError, Result};

/// Bits on the wire per byte with 8N1 framing.
const BITS_PER_FRAME_BYTE: u64 = 10;

/// Slack added on top of the nominal transfer time.
const WRITE_TIMEOUT_MARGIN: Duration = Duration::from_secs(2);

/// An open serial port.
pub struct SerialConnection {
    port: Box<dyn SerialPort>,
    name: String,
}

impl SerialConnection {
    /// Open `name` at `baud` with room for a transfer of `expected_len` bytes.
    ///
    /// The write timeout is twice the nominal transfer time plus a margin, so
    /// slow rates with large frames do not time out mid-transfer.
    pub fn open(name: &str, baud: BaudRate, expected_len: usize) -> Result<Self> {
        let timeout = write_timeout(baud, expected_len);
        debug!(port = name, baud = baud.as_u32(), ?timeout, "Opening serial port");

        let port = serialport::new(name, baud.as_u32())
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .flow_control(FlowControl::None)
            .timeout(timeout)
            .open()
            .map_err(|e| LinkError::PortOpen {
                port: name.to_string(),
                reason: e.to_string(),
            })?;

        info!(port = name, baud = baud.as_u32(), "Serial port opened");
        Ok(Self {
            port,
            name: name.to_string(),
        })
    }

    /// Write the whole buffer and wait for it to drain.
    pub fn write_frame(&mut self, data: &[u8]) -> Result<usize> {
        self.port.write_all(data).map_err(|e| {
            LinkError::Write(format!("{} ({} bytes): {e}", self.name, data.len()))
        })?;
        self.port
            .flush()
            .map_err(|e| LinkError::Write(format!("{}: flush failed: {e}", self.name)))?;
        Ok(data.len())
    }

    /// Close the port.
    pub fn close(self) {
        debug!(port = %self.name, "Closing serial port");
        drop(self.port);
    }
}

/// Nominal time to clock `len` bytes out at `baud`, doubled, plus a margin.
pub fn write_timeout(baud: BaudRate, len: usize) -> Duration {
    let bits = len as u64 * BITS_PER_FRAME_BYTE;
    let nominal_ms = bits * 1000 / u64::from(baud.as_u32());
    Duration::from_millis(nominal_ms * 2) + WRITE_TIMEOUT_MARGIN
}

/// Send a packed frame to `destination`.
///
/// Test mode performs no I/O and reports 0 bytes written. Otherwise the
/// port is opened, written and closed; the port is closed on every path.
pub fn transmit(destination: &Destination, baud: BaudRate, data: &[u8]) -> Result<usize> {
    let name = match destination {
        Destination::TestMode => {
            info!(bytes = data.len(), "Test mode, skipping transmission");
            return Ok(0);
        }
        Destination::Serial(name) => name,
    };

    let mut conn = SerialConnection::open(name, baud, data.len())?;
    let result = conn.write_frame(data);
    conn.close();

    let written = result?;
    info!(port = %name, bytes = written, "Frame transmitted");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transmit_test_mode_does_no_io() {
        let written = transmit(&Destination::TestMode, BaudRate::B9600, &[0xAA; 512]).unwrap();
        assert_eq!(written, 0);
    }

    #[test]
    fn test_transmit_missing_device_is_port_open_error() {
        let dest = Destination::Serial("/dev/scope-link-does-not-exist".into());
        let result = transmit(&dest, BaudRate::B115200, &[0x00; 16]);

        match result {
            Err(LinkError::PortOpen { port, .. }) => {
                assert_eq!(port, "/dev/scope-link-does-not-exist");
            }
            other => panic!("expected PortOpen, got {other:?}"),
        }
    }

    #[test]
    fn test_write_timeout_scales_with_size() {
        // 131072 bytes at 9600 baud is about 136.5 s on the wire.
        let slow = write_timeout(BaudRate::B9600, 131_072);
        assert!(slow > Duration::from_secs(270));

        let fast = write_timeout(BaudRate::B1000000, 512);
        assert!(fast < Duration::from_secs(3));
        assert!(fast >= WRITE_TIMEOUT_MARGIN);
    }

    #[cfg(unix)]
    #[test]
    fn test_transmit_writes_whole_frame_to_pty() {
        use serialport::TTYPort;
        use std::io::Read;

        // The slave end stands in for the display controller's device node.
        let (mut master, slave) = TTYPort::pair().expect("pty pair");
        let slave_name = slave.name().expect("pty slave name");
        let frame: Vec<u8> = (0..64).collect();

        let written =
            transmit(&Destination::Serial(slave_name), BaudRate::B115200, &frame).unwrap();
        assert_eq!(written, frame.len());

        master.set_timeout(Duration::from_secs(2)).unwrap();
        let mut received = vec![0u8; frame.len()];
        master.read_exact(&mut received).unwrap();
        assert_eq!(received, frame);

        drop(slave);
    }
}
