//! Response types for the Financial Modeling Prep API

/// Trait for HTTP response objects
pub trait Response {
    /// HTTP status code
    fn status(&self) -> u16;

    /// Response body as text
    fn body(&self) -> &str;

    /// The ID of the corresponding request, if the server sent one
    fn request_id(&self) -> &Option<String>;
}
