//! Financial statement request builders

/// As-reported statement request builder
pub mod as_reported;

pub use as_reported::AsReported;
