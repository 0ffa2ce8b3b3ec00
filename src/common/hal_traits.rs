// src/common/hal_traits.rs

/// Logic level of a digital line.
///
/// Which level counts as "active" for a given sensor line is family-specific
/// and carried by the [`SensorProfile`](super::profile::SensorProfile).
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl Level {
    /// Returns the opposite level.
    #[inline]
    pub const fn toggled(self) -> Self {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }
}

/// Abstraction for the trigger line of the sensor.
///
/// Line writes are infallible by contract. HALs with fallible pins can be
/// wrapped with the `impl-generic-hal` adapters as long as their pin error
/// type is `Infallible`.
pub trait OutputLine {
    /// Drives the line to the given level.
    fn write(&mut self, level: Level);
}

/// Abstraction for the echo line of the sensor.
pub trait InputLine {
    /// Samples the current level of the line.
    fn read(&mut self) -> Level;
}

/// Abstraction for timer operations required by the ranging protocol.
///
/// Note: This could potentially be replaced by directly requiring
/// `embedded_hal::delay::DelayNs` plus a HAL instant type, but the protocol
/// only ever needs a raw wrapping microsecond counter, so the trait keeps it
/// at that.
pub trait UrmTimer {
    /// Current value of a monotonic microsecond counter.
    ///
    /// The counter is allowed to wrap; all elapsed-time computations in this
    /// crate use `wrapping_sub` on the returned value.
    fn now_us(&self) -> u32;

    /// Busy-delay for at least the specified number of microseconds.
    ///
    /// Only used for the bounded trigger-pulse hold (typically 10 µs).
    fn delay_us(&mut self, us: u32);
}

/// Adapter from an infallible `embedded-hal` output pin to [`OutputLine`].
#[cfg(feature = "impl-generic-hal")]
pub struct GenericHalOutput<P> {
    pin: P,
}

#[cfg(feature = "impl-generic-hal")]
impl<P> GenericHalOutput<P>
where
    P: embedded_hal::digital::OutputPin<Error = core::convert::Infallible>,
{
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Releases the wrapped pin.
    pub fn release(self) -> P {
        self.pin
    }
}

#[cfg(feature = "impl-generic-hal")]
impl<P> OutputLine for GenericHalOutput<P>
where
    P: embedded_hal::digital::OutputPin<Error = core::convert::Infallible>,
{
    fn write(&mut self, level: Level) {
        let result = match level {
            Level::Low => self.pin.set_low(),
            Level::High => self.pin.set_high(),
        };
        result.unwrap_or_else(|e| match e {})
    }
}

/// Adapter from an infallible `embedded-hal` input pin to [`InputLine`].
#[cfg(feature = "impl-generic-hal")]
pub struct GenericHalInput<P> {
    pin: P,
}

#[cfg(feature = "impl-generic-hal")]
impl<P> GenericHalInput<P>
where
    P: embedded_hal::digital::InputPin<Error = core::convert::Infallible>,
{
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Releases the wrapped pin.
    pub fn release(self) -> P {
        self.pin
    }
}

#[cfg(feature = "impl-generic-hal")]
impl<P> InputLine for GenericHalInput<P>
where
    P: embedded_hal::digital::InputPin<Error = core::convert::Infallible>,
{
    fn read(&mut self) -> Level {
        let high = self.pin.is_high().unwrap_or_else(|e| match e {});
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}
