use crate::client::Fmp;
use crate::error::Result;
use crate::execute::Execute;
use crate::processor::{Json, Processor, Raw};
use crate::request::Request;
use crate::request::common::{Period, StatementKind};

/// Page size used when no limit is set
pub const DEFAULT_LIMIT: u32 = 50;

/// As-reported financial statement request builder
///
/// One builder serves all three statement kinds; the kind picks the endpoint.
pub struct AsReported<'a, Client: Request, P: Processor = Raw> {
    client: &'a Fmp<Client>,
    /// Which statement to fetch
    pub kind: StatementKind,
    /// Stock symbol
    pub symbol: String,
    /// Reporting period (defaults to quarter)
    pub period: Period,
    /// Maximum number of periods returned (defaults to 50)
    pub limit: u32,
    processor: P,
}

impl<'a, C: Request> AsReported<'a, C, Raw> {
    /// Create new statement request (returns raw JSON by default)
    pub fn new(client: &'a Fmp<C>, kind: StatementKind, symbol: impl Into<String>) -> Self {
        Self {
            client,
            kind,
            symbol: symbol.into(),
            period: Period::Quarter,
            limit: DEFAULT_LIMIT,
            processor: Raw,
        }
    }
}

impl<'a, C: Request, P: Processor + 'a> AsReported<'a, C, P> {
    /// Execute the request and return the result
    pub fn get(self) -> impl std::future::Future<Output = Result<P::Output>> + 'a {
        Execute::get(self)
    }

    /// Set reporting period
    pub fn period(mut self, period: Period) -> Self {
        self.period = period;
        self
    }

    /// Set maximum number of periods
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Deserialize the response body into `T`
    pub fn as_json<T: serde::de::DeserializeOwned>(self) -> AsReported<'a, C, Json<T>> {
        self.with_processor(Json::new())
    }

    /// Convert to DataFrame output (Polars DataFrame)
    #[cfg(feature = "table")]
    pub fn as_dataframe(self) -> AsReported<'a, C, crate::processor::Table> {
        self.with_processor(crate::processor::Table)
    }

    fn with_processor<Q: Processor>(self, processor: Q) -> AsReported<'a, C, Q> {
        AsReported {
            client: self.client,
            kind: self.kind,
            symbol: self.symbol,
            period: self.period,
            limit: self.limit,
            processor,
        }
    }
}

impl<'a, C: Request, P: Processor + 'a> Execute for AsReported<'a, C, P> {
    type Output = P::Output;

    #[allow(refining_impl_trait_reachable)]
    async fn get(self) -> Result<P::Output> {
        let params = [
            ("period", self.period.to_string()),
            ("limit", self.limit.to_string()),
        ];
        let url = self.client.symbol_url(self.kind.path(), &self.symbol, &params)?;
        tracing::debug!(symbol = %self.symbol, kind = %self.kind, period = %self.period, "requesting statement");

        let response = self.client.client().get(&url).await;
        self.processor.process(response)
    }
}
