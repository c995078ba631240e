//! Serde processor for typed JSON responses
use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::processor::{Processor, successful};
use crate::response::Response;

/// Deserializes a 200 response body into `T`
pub struct Json<T> {
    _output: PhantomData<fn() -> T>,
}

impl<T> Json<T> {
    /// Create a new JSON processor
    pub fn new() -> Self {
        Self { _output: PhantomData }
    }
}

impl<T> Default for Json<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DeserializeOwned> Processor for Json<T> {
    type Output = T;

    fn process<R: Response>(&self, response: Result<R>) -> Result<T> {
        let resp = successful(response)?;
        Ok(serde_json::from_str(resp.body())?)
    }
}
