//! Response processors
//!
//! A request builder carries a [`Processor`] that turns the HTTP response into its output.
//! Builders start out as [`Raw`] and switch with `.as_json::<T>()` or `.as_dataframe()`.

use crate::error::{Error, Result};
use crate::response::Response;

mod json;
#[cfg(feature = "table")]
pub(crate) mod table;

pub use json::Json;
#[cfg(feature = "table")]
pub use table::Table;

/// Converts a response into the builder's output type
pub trait Processor {
    /// Output type
    type Output;

    /// Process the result of an HTTP request
    fn process<R: Response>(&self, response: Result<R>) -> Result<Self::Output>;
}

/// Raw processor returning the response body unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct Raw;

impl Processor for Raw {
    type Output = String;

    fn process<R: Response>(&self, response: Result<R>) -> Result<String> {
        let resp = successful(response)?;
        Ok(resp.body().to_owned())
    }
}

/// Unwrap the transport result and reject any status other than 200.
pub(crate) fn successful<R: Response>(response: Result<R>) -> Result<R> {
    let resp = response?;
    if resp.status() != 200 {
        return Err(Error::ApiError {
            request_id: resp.request_id().to_owned(),
            status: resp.status(),
            message: resp.body().to_owned(),
        });
    }
    Ok(resp)
}
