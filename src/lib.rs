// src/lib.rs

#![no_std] // Specify no_std at the crate root

#[cfg(test)]
extern crate std;

pub mod common;
pub mod session;

// Re-export key types for convenience
pub use common::hal_traits::{InputLine, Level, OutputLine, UrmTimer};
pub use common::{Distance, SensorProfile, UrmError};
pub use session::{RangingSession, SessionState};
