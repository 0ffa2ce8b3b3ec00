// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod distance;
pub mod error;
pub mod hal_traits;
pub mod profile;
pub mod timing;

// --- Re-export key types/traits for easier access ---

// From distance.rs
pub use distance::Distance;

// From error.rs
pub use error::UrmError;

// From hal_traits.rs
pub use hal_traits::{InputLine, Level, OutputLine, UrmTimer};

// From profile.rs
pub use profile::SensorProfile;

// From timing.rs (constants - users can access via common::timing::*)
// No re-exports by default.

// --- Feature-gated re-exports ---

// Generic HAL adapters (from hal_traits.rs)
#[cfg(feature = "impl-generic-hal")]
pub use hal_traits::{GenericHalInput, GenericHalOutput};
