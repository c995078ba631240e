//! Endpoint functions returning raw-JSON request builders

pub mod company;
pub mod lists;
pub mod statements;
