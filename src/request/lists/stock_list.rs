use crate::client::Fmp;
use crate::error::Result;
use crate::execute::Execute;
use crate::processor::{Json, Processor, Raw};
use crate::request::Request;

/// Endpoint listing every tradable instrument
pub const PATH: &str = "/api/v3/stock/list";

/// Stock list request builder
pub struct StockList<'a, Client: Request, P: Processor = Raw> {
    client: &'a Fmp<Client>,
    processor: P,
}

// Constructor - always starts with Raw
impl<'a, C: Request> StockList<'a, C, Raw> {
    /// Create new stock list request (returns raw JSON by default)
    pub fn new(client: &'a Fmp<C>) -> Self {
        Self { client, processor: Raw }
    }
}

impl<'a, C: Request, P: Processor + 'a> StockList<'a, C, P> {
    /// Execute the request and return the result
    pub fn get(self) -> impl std::future::Future<Output = Result<P::Output>> + 'a {
        Execute::get(self)
    }

    /// Deserialize the response body into `T`
    pub fn as_json<T: serde::de::DeserializeOwned>(self) -> StockList<'a, C, Json<T>> {
        StockList {
            client: self.client,
            processor: Json::new(),
        }
    }

    /// Convert to DataFrame output (Polars DataFrame)
    #[cfg(feature = "table")]
    pub fn as_dataframe(self) -> StockList<'a, C, crate::processor::Table> {
        StockList {
            client: self.client,
            processor: crate::processor::Table,
        }
    }
}

impl<'a, C: Request, P: Processor + 'a> Execute for StockList<'a, C, P> {
    type Output = P::Output;

    #[allow(refining_impl_trait_reachable)]
    async fn get(self) -> Result<P::Output> {
        let url = self.client.url(PATH, &[])?;
        tracing::debug!(path = PATH, "requesting stock list");

        let response = self.client.client().get(&url).await;
        self.processor.process(response)
    }
}
