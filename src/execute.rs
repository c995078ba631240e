//! Execute trait shared by the endpoint builders
//!
//! Every request builder implements [`Execute`]; its inherent `.get()` forwards here.

use crate::error::Result;

/// Trait for executing API requests
pub trait Execute {
    /// What the builder's processor produces
    type Output;

    /// Send the request and process the response
    fn get(self) -> impl std::future::Future<Output = Result<Self::Output>>;
}
