// src/common/profile.rs

use super::error::UrmError;
use super::hal_traits::Level;
use super::timing;

/// Configuration bundle for one sensor attachment.
///
/// A profile is a plain value record: active levels for the trigger and echo
/// lines, the trigger hold width, the two timeout windows, and the pulse
/// width to distance conversion factor. It is immutable for the lifetime of
/// an attachment. Named presets exist for common sensor families; for other
/// hardware take the constants from the datasheet and use
/// [`SensorProfile::new`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorProfile {
    trigger_active_level: Level,
    echo_active_level: Level,
    trigger_pulse_width_us: u32,
    pulse_start_timeout_us: u32,
    max_pulse_duration_us: u32,
    microseconds_per_centimeter: u32,
}

impl SensorProfile {
    /// Preset for the HC-SR04: active-high trigger and echo, 10 µs trigger
    /// hold, 61 µs of pulse width per centimeter.
    pub const HC_SR04: SensorProfile = SensorProfile {
        trigger_active_level: Level::High,
        echo_active_level: Level::High,
        trigger_pulse_width_us: timing::HC_SR04_TRIGGER_PULSE_US,
        pulse_start_timeout_us: timing::HC_SR04_PULSE_START_TIMEOUT_US,
        max_pulse_duration_us: timing::HC_SR04_MAX_PULSE_DURATION_US,
        microseconds_per_centimeter: timing::HC_SR04_US_PER_CM,
    };

    /// Preset for the DFRobot URM37 in PWM mode: both lines idle high and
    /// pulse low, 50 µs of pulse width per centimeter.
    pub const URM37_PWM: SensorProfile = SensorProfile {
        trigger_active_level: Level::Low,
        echo_active_level: Level::Low,
        trigger_pulse_width_us: timing::URM37_TRIGGER_PULSE_US,
        pulse_start_timeout_us: timing::URM37_PULSE_START_TIMEOUT_US,
        max_pulse_duration_us: timing::URM37_MAX_PULSE_DURATION_US,
        microseconds_per_centimeter: timing::URM37_US_PER_CM,
    };

    /// Creates a validated profile.
    ///
    /// Rejects constants that would make every measurement fail or divide by
    /// zero during conversion.
    pub fn new(
        trigger_active_level: Level,
        echo_active_level: Level,
        trigger_pulse_width_us: u32,
        pulse_start_timeout_us: u32,
        max_pulse_duration_us: u32,
        microseconds_per_centimeter: u32,
    ) -> Result<Self, UrmError> {
        if microseconds_per_centimeter == 0 {
            return Err(UrmError::ZeroConversionFactor);
        }
        if trigger_pulse_width_us == 0 {
            return Err(UrmError::ZeroTriggerPulseWidth);
        }
        if pulse_start_timeout_us == 0 || max_pulse_duration_us == 0 {
            return Err(UrmError::ZeroTimingWindow);
        }
        Ok(SensorProfile {
            trigger_active_level,
            echo_active_level,
            trigger_pulse_width_us,
            pulse_start_timeout_us,
            max_pulse_duration_us,
            microseconds_per_centimeter,
        })
    }

    #[inline]
    pub const fn trigger_active_level(&self) -> Level {
        self.trigger_active_level
    }

    #[inline]
    pub const fn echo_active_level(&self) -> Level {
        self.echo_active_level
    }

    #[inline]
    pub const fn trigger_pulse_width_us(&self) -> u32 {
        self.trigger_pulse_width_us
    }

    #[inline]
    pub const fn pulse_start_timeout_us(&self) -> u32 {
        self.pulse_start_timeout_us
    }

    #[inline]
    pub const fn max_pulse_duration_us(&self) -> u32 {
        self.max_pulse_duration_us
    }

    #[inline]
    pub const fn microseconds_per_centimeter(&self) -> u32 {
        self.microseconds_per_centimeter
    }
}
