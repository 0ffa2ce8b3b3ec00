// src/common/error.rs

/// Errors raised when constructing a [`SensorProfile`](super::profile::SensorProfile).
///
/// Measurement failures (not attached, echo already active, pulse-start
/// timeout, pulse-duration timeout) are deliberately NOT part of this enum:
/// the state machine reports all of them uniformly by returning to
/// `SessionState::Idle` and answering distance queries with
/// [`Distance::INVALID`](super::distance::Distance::INVALID). Callers who care
/// about the current phase can inspect `RangingSession::state()`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UrmError {
    /// A conversion factor of 0 µs/cm would divide by zero on every reading.
    #[error("microseconds-per-centimeter conversion factor must be nonzero")]
    ZeroConversionFactor,

    /// A 0 µs trigger pulse cannot arm the sensor.
    #[error("trigger pulse width must be nonzero")]
    ZeroTriggerPulseWidth,

    /// A 0 µs timeout window makes every measurement fail on the first poll.
    #[error("pulse-start timeout and max pulse duration must be nonzero")]
    ZeroTimingWindow,
}
