//! REST API endpoints for Financial Modeling Prep
//!
//! Every function returns a request builder producing the raw JSON body; switch the
//! output with `.as_json::<T>()` or (feature `table`) `.as_dataframe()`.
pub mod raw;

// Re-export raw module for convenience.
pub use raw::*;
