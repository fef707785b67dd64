//! Processing options selected by the user for a run.

use std::fmt;

/// Square output resolution supported by the display firmware.
///
/// Every side is a multiple of 8 so rows pack into whole bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    R64,
    R128,
    R256,
    R512,
    R1024,
}

impl Resolution {
    /// All supported resolutions, smallest first.
    pub const ALL: [Resolution; 5] = [
        Resolution::R64,
        Resolution::R128,
        Resolution::R256,
        Resolution::R512,
        Resolution::R1024,
    ];

    /// Side length in pixels.
    pub fn side(self) -> u32 {
        match self {
            Resolution::R64 => 64,
            Resolution::R128 => 128,
            Resolution::R256 => 256,
            Resolution::R512 => 512,
            Resolution::R1024 => 1024,
        }
    }

    /// Look up a resolution by its side length.
    pub fn from_side(side: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.side() == side)
    }

    /// Number of bytes a packed frame at this resolution occupies.
    pub fn packed_len(self) -> usize {
        let side = self.side() as usize;
        side * side / 8
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}x{0}", self.side())
    }
}

/// Binarization algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThresholdAlgorithm {
    /// Single global cut point chosen by Otsu's method.
    #[default]
    GlobalOtsu,
    /// Per-pixel cut point from a Gaussian-weighted 11x11 neighbourhood.
    AdaptiveGaussian,
}

impl ThresholdAlgorithm {
    pub const ALL: [ThresholdAlgorithm; 2] = [
        ThresholdAlgorithm::GlobalOtsu,
        ThresholdAlgorithm::AdaptiveGaussian,
    ];

    /// Label shown in the algorithm selector.
    pub fn label(self) -> &'static str {
        match self {
            ThresholdAlgorithm::GlobalOtsu => "Global Thresholding",
            ThresholdAlgorithm::AdaptiveGaussian => "Adaptive Gaussian Thresholding",
        }
    }

    /// Parse a selector label. Matching is exact.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.label() == label)
    }
}

impl fmt::Display for ThresholdAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
