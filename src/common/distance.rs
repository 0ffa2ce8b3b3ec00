// src/common/distance.rs

use core::fmt;

/// A measured distance in whole centimeters.
///
/// [`Distance::INVALID`] marks a measurement that produced no result. It is
/// the maximum representable value, outside the range of any real reading,
/// and is returned (never thrown) for all failure paths.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Distance(u32);

impl Distance {
    /// Sentinel for "no valid measurement".
    pub const INVALID: Distance = Distance(u32::MAX);

    /// Creates a distance from whole centimeters.
    #[inline]
    pub const fn from_cm(cm: u32) -> Self {
        Distance(cm)
    }

    /// Converts an echo pulse width to a distance.
    ///
    /// Uses truncating integer division: fractional centimeters are always
    /// rounded toward zero. Callers must guarantee `us_per_cm != 0`; profile
    /// validation enforces this before a session can run.
    #[inline]
    pub const fn from_pulse_width(duration_us: u32, us_per_cm: u32) -> Self {
        Distance(duration_us / us_per_cm)
    }

    /// Distance in centimeters. The sentinel reports `u32::MAX`.
    #[inline]
    pub const fn cm(&self) -> u32 {
        self.0
    }

    /// True unless this is the invalid sentinel.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.0 != u32::MAX
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "{} cm", self.0)
        } else {
            write!(f, "invalid")
        }
    }
}
