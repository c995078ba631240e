//! Scripted HTTP client for exercising the pipelines without the network
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use fmprep::request::HttpResponse;
use fmprep::report::{FetchFailure, Observer};
use fmprep::{FmpClient, Request};
use serde_json::Value;

/// Answers GETs by URL path; unknown paths get a 404.
#[derive(Default)]
pub struct MockClient {
    routes: HashMap<String, (u16, String)>,
    calls: Mutex<Vec<String>>,
}

impl MockClient {
    pub fn route(mut self, path: &str, status: u16, body: impl Into<String>) -> Self {
        self.routes.insert(path.to_string(), (status, body.into()));
        self
    }

    pub fn json(self, path: &str, body: Value) -> Self {
        self.route(path, 200, body.to_string())
    }

    pub fn profile(self, body: Value) -> Self {
        let symbol = body["symbol"].as_str().expect("profile needs a symbol").to_string();
        self.json(&format!("/api/v3/profile/{symbol}"), Value::Array(vec![body]))
    }

    pub fn statements(self, symbol: &str, income: Value, balance: Value, cash_flow: Value) -> Self {
        self.json(&format!("/api/v3/income-statement-as-reported/{symbol}"), income)
            .json(&format!("/api/v3/balance-sheet-statement-as-reported/{symbol}"), balance)
            .json(&format!("/api/v3/cash-flow-statement-as-reported/{symbol}"), cash_flow)
    }

    /// Full URLs requested so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Request for MockClient {
    type Response = HttpResponse;

    fn new() -> Self {
        Self::default()
    }

    async fn get(&self, url: &str) -> fmprep::Result<HttpResponse> {
        self.calls.lock().unwrap().push(url.to_string());

        let path = url
            .strip_prefix("https://financialmodelingprep.com")
            .unwrap_or(url)
            .split('?')
            .next()
            .unwrap_or_default();

        Ok(match self.routes.get(path) {
            Some((status, body)) => HttpResponse::new(*status, body.clone()),
            None => HttpResponse::new(404, r#"{"Error Message":"Not Found"}"#),
        })
    }
}

pub fn client(mock: MockClient) -> FmpClient<MockClient> {
    FmpClient::from_client(mock).with_key("test_key")
}

/// Observer that remembers everything it was told.
#[derive(Default)]
pub struct Recorder {
    pub events: Mutex<Vec<String>>,
    pub failures: Mutex<Vec<FetchFailure>>,
}

impl Recorder {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    pub fn failures(&self) -> Vec<FetchFailure> {
        self.failures.lock().unwrap().clone()
    }

    pub fn advances(&self) -> usize {
        self.events().iter().filter(|e| *e == "advance").count()
    }
}

impl Observer for Recorder {
    fn begin(&self, label: &str, total: usize) {
        self.events.lock().unwrap().push(format!("begin {label} {total}"));
    }

    fn advance(&self) {
        self.events.lock().unwrap().push("advance".to_string());
    }

    fn finish(&self) {
        self.events.lock().unwrap().push("finish".to_string());
    }

    fn failure(&self, failure: &FetchFailure) {
        self.failures.lock().unwrap().push(failure.clone());
    }
}

pub fn profile(symbol: &str, mkt_cap: f64, sector: &str, industry: &str, name: &str, country: &str) -> Value {
    serde_json::json!({
        "symbol": symbol,
        "price": 10.0,
        "mktCap": mkt_cap,
        "sector": sector,
        "industry": industry,
        "companyName": name,
        "country": country
    })
}

pub fn small_tech(symbol: &str) -> Value {
    profile(symbol, 500_000_000.0, "Technology", "Software", &format!("{symbol} Corp"), "US")
}

/// `n` statement rows for `symbol`, one per quarter.
pub fn quarters(symbol: &str, n: usize) -> Value {
    Value::Array(
        (0..n)
            .map(|i| {
                serde_json::json!({
                    "date": format!("2024-Q{}", 4 - i % 4),
                    "symbol": symbol,
                    "period": "Q",
                    "revenues": 1000 + i
                })
            })
            .collect(),
    )
}
