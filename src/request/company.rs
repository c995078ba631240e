//! Per-company request builders

/// Company profile request builder
pub mod profile;

pub use profile::Profile;
