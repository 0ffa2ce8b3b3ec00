// src/session/mod.rs

//! Non-blocking measurement session for one trigger/echo ranging sensor.
//!
//! The session is a polled state machine: `start()` arms the sensor and emits
//! the trigger pulse, then repeated `refresh()` (or `finished_measure()`)
//! calls advance the machine from the current clock reading and echo level.
//! Nothing blocks except the bounded trigger-pulse hold, so the host can keep
//! doing other work during the tens of milliseconds an echo can take.
//!
//! Two execution models are supported by the same representation:
//! - a foreground loop calling [`RangingSession::finished_measure`] until it
//!   stops reporting `WouldBlock`;
//! - [`RangingSession::refresh`] invoked from an edge-triggered interrupt
//!   handler whenever the echo line changes.
//!
//! With interrupt-driven refresh, all session calls must share one critical
//! section: the machine assumes no concurrent state mutation, so the caller
//! has to guarantee mutual exclusion between the handler and any foreground
//! call such as `start()` or `finished_measure()`.

use crate::common::distance::Distance;
use crate::common::hal_traits::{InputLine, OutputLine, UrmTimer};
use crate::common::profile::SensorProfile;
use core::convert::Infallible;

/// Phase of the measurement state machine, exposed verbatim for diagnostics.
///
/// All no-result outcomes (not attached, echo already active at `start()`,
/// pulse-start timeout, pulse-duration timeout) end in `Idle`; the causes are
/// not distinguished further.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionState {
    /// Rest state; no measurement in flight and no result available.
    Idle,
    /// Trigger pulse sent, waiting for the sensor to pull echo active.
    WaitingForPulse,
    /// Echo is active; timing the pulse.
    Measuring,
    /// Echo pulse completed; the stored duration is valid.
    FinishedMeasure,
}

struct Attachment<TRIG, ECHO> {
    profile: SensorProfile,
    trigger: TRIG,
    echo: ECHO,
}

/// Measurement session for a single sensor attachment.
///
/// Owns the timer; the lines and profile are bound with [`attach`] and can be
/// reclaimed with [`detach`]. All operations except the lifecycle ones are
/// no-ops (or report the invalid sentinel) while detached.
///
/// [`attach`]: RangingSession::attach
/// [`detach`]: RangingSession::detach
pub struct RangingSession<TRIG, ECHO, TMR> {
    timer: TMR,
    attachment: Option<Attachment<TRIG, ECHO>>,
    state: SessionState,
    /// Clock capture at entry to WaitingForPulse or Measuring.
    phase_started_at: u32,
    /// Elapsed echo pulse time; meaningful only in FinishedMeasure.
    last_duration_us: u32,
}

impl<TRIG, ECHO, TMR> RangingSession<TRIG, ECHO, TMR>
where
    TRIG: OutputLine,
    ECHO: InputLine,
    TMR: UrmTimer,
{
    /// Creates a detached session.
    pub fn new(timer: TMR) -> Self {
        RangingSession {
            timer,
            attachment: None,
            state: SessionState::Idle,
            phase_started_at: 0,
            last_duration_us: 0,
        }
    }

    /// Binds a profile and the two sensor lines.
    ///
    /// Replaces any previous attachment, returning its lines; the state
    /// resets to `Idle` and any previous result becomes unreadable, so
    /// nothing leaks between attachments.
    pub fn attach(
        &mut self,
        profile: SensorProfile,
        trigger: TRIG,
        echo: ECHO,
    ) -> Option<(TRIG, ECHO)> {
        self.state = SessionState::Idle;
        self.last_duration_us = 0;
        self.attachment
            .replace(Attachment {
                profile,
                trigger,
                echo,
            })
            .map(|old| (old.trigger, old.echo))
    }

    /// Unbinds and returns the sensor lines.
    ///
    /// Any in-flight measurement is abandoned and the state resets to `Idle`.
    pub fn detach(&mut self) -> Option<(TRIG, ECHO)> {
        self.state = SessionState::Idle;
        self.attachment.take().map(|att| (att.trigger, att.echo))
    }

    /// Whether a profile and lines are currently bound.
    #[inline]
    pub fn is_attached(&self) -> bool {
        self.attachment.is_some()
    }

    /// The profile of the current attachment, if any.
    pub fn profile(&self) -> Option<SensorProfile> {
        self.attachment.as_ref().map(|att| att.profile)
    }

    /// Current state machine phase, for diagnostics and tests.
    #[inline]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// True iff a measurement is in flight.
    #[inline]
    pub fn is_measuring(&self) -> bool {
        matches!(
            self.state,
            SessionState::WaitingForPulse | SessionState::Measuring
        )
    }

    /// Starts a new measurement.
    ///
    /// Idempotent while a measurement is in flight: the existing run is
    /// neither restarted nor corrupted. If the session is detached, or the
    /// echo line already reads its active level, the request is rejected and
    /// the state is forced to `Idle`; subsequent distance queries yield
    /// [`Distance::INVALID`].
    ///
    /// On acceptance this emits the trigger pulse: the trigger line is driven
    /// active, held for the profile's pulse width (the only busy-wait in the
    /// driver, bounded and typically 10 µs), then driven back inactive.
    pub fn start(&mut self) {
        if self.is_measuring() {
            return;
        }
        let Some(att) = self.attachment.as_mut() else {
            self.state = SessionState::Idle;
            return;
        };
        if att.echo.read() == att.profile.echo_active_level() {
            self.state = SessionState::Idle;
            return;
        }

        self.state = SessionState::WaitingForPulse;

        let trigger_active = att.profile.trigger_active_level();
        att.trigger.write(trigger_active);
        self.timer.delay_us(att.profile.trigger_pulse_width_us());
        att.trigger.write(trigger_active.toggled());

        self.phase_started_at = self.timer.now_us();
        self.refresh();
    }

    /// Unconditionally aborts any measurement and forces `Idle`.
    ///
    /// Any previously stored duration becomes unreadable.
    pub fn interrupt(&mut self) {
        self.state = SessionState::Idle;
    }

    /// Performs exactly one state machine step from the current clock reading
    /// and echo level.
    ///
    /// Safe to call from a tight polling loop or from an interrupt handler
    /// (see the module docs for the mutual exclusion requirement). Has no
    /// side effects in `Idle` or `FinishedMeasure`, or while detached.
    ///
    /// Elapsed time is computed with wrapping subtraction, so the clock is
    /// free to overflow mid-measurement.
    pub fn refresh(&mut self) {
        let Some(att) = self.attachment.as_mut() else {
            return;
        };
        let echo = att.echo.read();
        let now = self.timer.now_us();
        let elapsed = now.wrapping_sub(self.phase_started_at);

        match self.state {
            SessionState::WaitingForPulse => {
                // The echo check comes first: a pulse arriving right at the
                // timeout boundary still counts as a valid start.
                if echo == att.profile.echo_active_level() {
                    self.state = SessionState::Measuring;
                    self.phase_started_at = now;
                } else if elapsed >= att.profile.pulse_start_timeout_us() {
                    self.state = SessionState::Idle;
                }
            }
            SessionState::Measuring => {
                if echo != att.profile.echo_active_level() {
                    self.last_duration_us = elapsed;
                    self.state = SessionState::FinishedMeasure;
                } else if elapsed >= att.profile.max_pulse_duration_us() {
                    self.state = SessionState::Idle;
                }
            }
            SessionState::Idle | SessionState::FinishedMeasure => {}
        }
    }

    /// Polls the measurement once.
    ///
    /// Returns `Err(nb::Error::WouldBlock)` while the measurement is still in
    /// flight. Once done it returns `Ok` with the converted distance, which
    /// is [`Distance::INVALID`] if the run timed out, was rejected, or the
    /// session is detached. A distance is never produced while not done.
    pub fn finished_measure(&mut self) -> nb::Result<Distance, Infallible> {
        if !self.is_attached() {
            self.state = SessionState::Idle;
            return Ok(Distance::INVALID);
        }

        self.refresh();
        if self.is_measuring() {
            return Err(nb::Error::WouldBlock);
        }

        Ok(self.measured_distance())
    }

    /// Converted result of the last completed measurement.
    ///
    /// Pure query: returns [`Distance::INVALID`] unless the state is
    /// `FinishedMeasure`, so a stale duration is never observable.
    pub fn measured_distance(&self) -> Distance {
        let Some(att) = self.attachment.as_ref() else {
            return Distance::INVALID;
        };
        if self.state != SessionState::FinishedMeasure {
            return Distance::INVALID;
        }
        Distance::from_pulse_width(
            self.last_duration_us,
            att.profile.microseconds_per_centimeter(),
        )
    }

    /// Synchronously measures the distance in front of the sensor.
    ///
    /// Blocking convenience on top of the non-blocking primitives: calls
    /// [`start`](RangingSession::start) and spins on
    /// [`finished_measure`](RangingSession::finished_measure). Worst case is
    /// bounded by the trigger pulse width plus the profile's pulse-start
    /// timeout plus its max pulse duration.
    pub fn measure_distance(&mut self) -> Distance {
        self.start();
        match nb::block!(self.finished_measure()) {
            Ok(distance) => distance,
            Err(e) => match e {},
        }
    }

    /// Consumes the session, returning the timer and any attached lines.
    pub fn free(self) -> (TMR, Option<(TRIG, ECHO)>) {
        (
            self.timer,
            self.attachment.map(|att| (att.trigger, att.echo)),
        )
    }
}
