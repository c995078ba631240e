use crate::client::Fmp;
use crate::error::Result;
use crate::execute::Execute;
use crate::processor::{Json, Processor, Raw};
use crate::request::Request;

/// Company profile request builder
///
/// The API wraps the single profile in a one-element array.
pub struct Profile<'a, Client: Request, P: Processor = Raw> {
    client: &'a Fmp<Client>,
    /// Stock symbol
    pub symbol: String,
    processor: P,
}

impl<'a, C: Request> Profile<'a, C, Raw> {
    /// Create new profile request (returns raw JSON by default)
    pub fn new(client: &'a Fmp<C>, symbol: impl Into<String>) -> Self {
        Self {
            client,
            symbol: symbol.into(),
            processor: Raw,
        }
    }
}

impl<'a, C: Request, P: Processor + 'a> Profile<'a, C, P> {
    /// Execute the request and return the result
    pub fn get(self) -> impl std::future::Future<Output = Result<P::Output>> + 'a {
        Execute::get(self)
    }

    /// Deserialize the response body into `T`
    pub fn as_json<T: serde::de::DeserializeOwned>(self) -> Profile<'a, C, Json<T>> {
        Profile {
            client: self.client,
            symbol: self.symbol,
            processor: Json::new(),
        }
    }

    /// Convert to DataFrame output (Polars DataFrame)
    #[cfg(feature = "table")]
    pub fn as_dataframe(self) -> Profile<'a, C, crate::processor::Table> {
        Profile {
            client: self.client,
            symbol: self.symbol,
            processor: crate::processor::Table,
        }
    }
}

impl<'a, C: Request, P: Processor + 'a> Execute for Profile<'a, C, P> {
    type Output = P::Output;

    #[allow(refining_impl_trait_reachable)]
    async fn get(self) -> Result<P::Output> {
        let url = self.client.symbol_url("/api/v3/profile", &self.symbol, &[])?;
        tracing::debug!(symbol = %self.symbol, "requesting profile");

        let response = self.client.client().get(&url).await;
        self.processor.process(response)
    }
}
