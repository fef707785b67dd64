//! Link options: baud rate and destination selection.

use std::fmt;
use std::str::FromStr;

use crate::LinkError;

/// Selector entry that runs the pipeline without opening any port.
pub const TEST_MODE_LABEL: &str = "Test mode";

/// Baud rates the display controller firmware accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BaudRate {
    #[default]
    B9600,
    B38400,
    B57600,
    B115200,
    B250000,
    B500000,
    B1000000,
}

impl BaudRate {
    /// All supported rates in selector order.
    pub const ALL: [BaudRate; 7] = [
        BaudRate::B9600,
        BaudRate::B38400,
        BaudRate::B57600,
        BaudRate::B115200,
        BaudRate::B250000,
        BaudRate::B500000,
        BaudRate::B1000000,
    ];

    pub fn as_u32(self) -> u32 {
        match self {
            BaudRate::B9600 => 9600,
            BaudRate::B38400 => 38400,
            BaudRate::B57600 => 57600,
            BaudRate::B115200 => 115_200,
            BaudRate::B250000 => 250_000,
            BaudRate::B500000 => 500_000,
            BaudRate::B1000000 => 1_000_000,
        }
    }
}

impl TryFrom<u32> for BaudRate {
    type Error = LinkError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|b| b.as_u32() == value)
            .ok_or_else(|| LinkError::UnsupportedBaudRate(value.to_string()))
    }
}

impl FromStr for BaudRate {
    type Err = LinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s
            .trim()
            .parse()
            .map_err(|_| LinkError::UnsupportedBaudRate(s.to_string()))?;
        Self::try_from(value)
    }
}

impl fmt::Display for BaudRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u32())
    }
}

/// Where a packed frame goes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Destination {
    /// Full pipeline, no transmission.
    #[default]
    TestMode,
    /// A system serial device, e.g. `/dev/ttyUSB0` or `COM3`.
    Serial(String),
}

impl Destination {
    /// Interpret a destination selector entry.
    pub fn from_selection(selection: &str) -> Self {
        if selection == TEST_MODE_LABEL {
            Destination::TestMode
        } else {
            Destination::Serial(selection.to_string())
        }
    }

    /// Selector label for this destination.
    pub fn label(&self) -> &str {
        match self {
            Destination::TestMode => TEST_MODE_LABEL,
            Destination::Serial(name) => name,
        }
    }

    pub fn is_test_mode(&self) -> bool {
        matches!(self, Destination::TestMode)
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baud_rates_parse() {
        for rate in BaudRate::ALL {
            let parsed: BaudRate = rate.to_string().parse().unwrap();
            assert_eq!(parsed, rate);
        }
        assert_eq!(BaudRate::try_from(250_000).unwrap(), BaudRate::B250000);
    }

    #[test]
    fn test_unsupported_baud_rate() {
        assert!(matches!(
            BaudRate::try_from(19200),
            Err(LinkError::UnsupportedBaudRate(_))
        ));
        assert!(matches!(
            "fast".parse::<BaudRate>(),
            Err(LinkError::UnsupportedBaudRate(_))
        ));
    }

    #[test]
    fn test_default_baud_is_first_entry() {
        assert_eq!(BaudRate::default(), BaudRate::ALL[0]);
        assert_eq!(BaudRate::default().as_u32(), 9600);
    }

    #[test]
    fn test_destination_from_selection() {
        assert_eq!(Destination::from_selection("Test mode"), Destination::TestMode);
        assert_eq!(
            Destination::from_selection("/dev/ttyACM0"),
            Destination::Serial("/dev/ttyACM0".into())
        );
        // Labels are matched exactly.
        assert_eq!(
            Destination::from_selection("test mode"),
            Destination::Serial("test mode".into())
        );
    }

    #[test]
    fn test_destination_label() {
        assert_eq!(Destination::TestMode.label(), TEST_MODE_LABEL);
        assert_eq!(Destination::Serial("COM3".into()).to_string(), "COM3");
        assert!(Destination::TestMode.is_test_mode());
    }
}
