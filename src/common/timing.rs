// src/common/timing.rs

// Per-family constants used by the named profiles in `profile.rs`. All times
// are in microseconds. Values come from the respective datasheets except
// where noted; timeout windows are deliberately generous so that a slow
// sensor fails the measurement rather than the driver truncating it early.

// === HC-SR04 ===

/// Trigger hold required to arm an HC-SR04 (datasheet: 10 µs TTL pulse).
pub const HC_SR04_TRIGGER_PULSE_US: u32 = 10;
/// Pulse width to range conversion for the HC-SR04.
pub const HC_SR04_US_PER_CM: u32 = 61;
/// The module normally raises echo well under a millisecond after the 40 kHz
/// burst; anything beyond this window means it never acknowledged the trigger.
pub const HC_SR04_PULSE_START_TIMEOUT_US: u32 = 10_000;
/// The HC-SR04 emits a 38 ms pulse when nothing reflects the burst. A pulse
/// still high past this point carries no usable range.
pub const HC_SR04_MAX_PULSE_DURATION_US: u32 = 38_000;

// === DFRobot URM37 (PWM mode) ===

/// Trigger hold for the URM37's PWM trigger input (active low).
pub const URM37_TRIGGER_PULSE_US: u32 = 10;
/// Pulse width to range conversion for the URM37 in PWM mode (50 µs per cm).
pub const URM37_US_PER_CM: u32 = 50;
/// The URM37 takes noticeably longer than the HC-SR04 to start its response
/// pulse; allow a full ranging cycle before giving up.
pub const URM37_PULSE_START_TIMEOUT_US: u32 = 50_000;
/// 5 m maximum range at 50 µs/cm is 25 ms; beyond 30 ms the pulse is bogus.
pub const URM37_MAX_PULSE_DURATION_US: u32 = 30_000;
