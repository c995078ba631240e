use crate::client::Fmp;
use crate::error::Result;
use crate::execute::Execute;
use crate::processor::{Json, Processor, Raw};
use crate::request::Request;

/// Endpoint listing the symbols that have financial-statement coverage
pub const PATH: &str = "/api/v3/financial-statement-symbol-lists";

/// Financial-statement symbol list request builder
///
/// The endpoint answers with a bare JSON array of ticker strings.
pub struct StatementSymbolList<'a, Client: Request, P: Processor = Raw> {
    client: &'a Fmp<Client>,
    processor: P,
}

impl<'a, C: Request> StatementSymbolList<'a, C, Raw> {
    /// Create new symbol list request (returns raw JSON by default)
    pub fn new(client: &'a Fmp<C>) -> Self {
        Self { client, processor: Raw }
    }
}

impl<'a, C: Request, P: Processor + 'a> StatementSymbolList<'a, C, P> {
    /// Execute the request and return the result
    pub fn get(self) -> impl std::future::Future<Output = Result<P::Output>> + 'a {
        Execute::get(self)
    }

    /// Deserialize the response body into `T`
    pub fn as_json<T: serde::de::DeserializeOwned>(self) -> StatementSymbolList<'a, C, Json<T>> {
        StatementSymbolList {
            client: self.client,
            processor: Json::new(),
        }
    }
}

impl<'a, C: Request, P: Processor + 'a> Execute for StatementSymbolList<'a, C, P> {
    type Output = P::Output;

    #[allow(refining_impl_trait_reachable)]
    async fn get(self) -> Result<P::Output> {
        let url = self.client.url(PATH, &[])?;
        tracing::debug!(path = PATH, "requesting financial statement symbol list");

        let response = self.client.client().get(&url).await;
        self.processor.process(response)
    }
}
