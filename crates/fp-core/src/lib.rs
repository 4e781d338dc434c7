//! fp-core: stable foundation for favorprep.
//!
//! Contains:
//! - units (uom-backed time and flow conversions)
//! - cadence (declared measurement interval + wire literals)
//! - window (inclusive extraction time window)
//! - contract (marker-column constants shared by assembly and recovery)
//! - error (shared error types)

pub mod cadence;
pub mod contract;
pub mod error;
pub mod units;
pub mod window;

// Re-exports: nice ergonomics for downstream crates
pub use cadence::Cadence;
pub use error::{CoreError, CoreResult};
pub use units::*;
pub use window::TimeWindow;
