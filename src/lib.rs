//! Rust client library and screening pipeline for the Financial Modeling Prep API
//!
//! # Quick Start
//!
//! ```no_run
//! use fmprep::Fmp;
//! use fmprep::rest;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Fmp::default().with_key("your_api_key");
//!     let json = rest::company::profile(&client, "AAPL").get().await?;
//!     println!("{}", json);
//!     Ok(())
//! }
//! ```
//!
//! # Endpoint API
//!
//! Each endpoint returns a specific request builder type. Call `.get()` to execute:
//!
//! ```no_run
//! use fmprep::Fmp;
//! use fmprep::rest::statements;
//! use fmprep::request::common::Period;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Fmp::default().with_key("your_api_key");
//!
//! // Raw JSON response
//! let json = statements::income_statement(&client, "AAPL").get().await?;
//!
//! // With options
//! let json = statements::cash_flow(&client, "AAPL")
//!     .period(Period::Annual)
//!     .limit(10)
//!     .get()
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Screening pipeline
//!
//! [`screen::filter_and_merge`] narrows a symbol universe to small-cap, non-financial,
//! North American companies; [`aggregate::fetch_all_financial_statements`] then pulls
//! the quarterly as-reported statements for the survivors into three [`Frame`]s.
//!
//! ```no_run
//! use fmprep::{Fmp, aggregate, fetch, screen};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Fmp::default().with_key("your_api_key");
//!
//! let Some(universe) = fetch::fetch_financial_statement_symbol_list(&client, &()).await? else {
//!     return Ok(());
//! };
//! let candidates = screen::filter_and_merge(&client, &universe.symbols()?, &()).await?;
//! let statements = aggregate::fetch_all_financial_statements(&client, &candidates.symbols()?, &()).await?;
//! let (income, balance, cash_flow) = statements.into_parts();
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **`hyper`** (default) - Uses [`hyper`](https://docs.rs/hyper) as the HTTP client (lightweight and fast).
//!
//! - **`reqwest`** - Alternative HTTP client using [`reqwest`](https://docs.rs/reqwest) (more features).
//!   To use reqwest instead: `default-features = false, features = ["reqwest"]`.
//!
//! - **`dotenvy`** - Enables loading API keys from environment variables via [`dotenvy`](https://docs.rs/dotenvy).
//!   Adds `Fmp::new()` which loads `FMP_API_KEY` from `.env` or environment.
//!   Without this feature, use `Fmp::default().with_key("your_key")` instead.
//!
//! - **`table`** - Enables Polars DataFrame output via [`polars`](https://docs.rs/polars).
//!
//! - **`progress`** - Implements [`report::Observer`] for `indicatif::ProgressBar`.

#![warn(missing_docs)]

mod client;
pub mod error;
pub mod request;
pub mod response;
pub mod rest;

pub mod aggregate;
pub mod execute;
pub mod fetch;
pub mod frame;
pub mod model;
pub mod processor;
pub mod report;
pub mod screen;

pub use error::{Error, Result};
pub use frame::Frame;
pub use model::Record;
pub use request::Request;
pub use response::Response;

/// The main Financial Modeling Prep API client with the default HTTP client.
///
/// - When `hyper` feature is enabled (default): uses `HyperClient`
/// - When `reqwest` feature is enabled: uses `reqwest::Client`
/// - Otherwise: use `client::Fmp<YourClient>` directly
#[cfg(feature = "reqwest")]
pub type Fmp = client::Fmp<reqwest::Client>;

/// The main Financial Modeling Prep API client with the default HTTP client.
///
/// - When `hyper` feature is enabled (default): uses `HyperClient`
/// - When `reqwest` feature is enabled: uses `reqwest::Client`
/// - Otherwise: use `client::Fmp<YourClient>` directly
#[cfg(all(feature = "hyper", not(feature = "reqwest")))]
pub type Fmp = client::Fmp<request::HyperClient>;

// When neither reqwest nor hyper is enabled, re-export the generic Fmp
#[cfg(not(any(feature = "reqwest", feature = "hyper")))]
pub use client::Fmp;

/// Generic client type, usable with any [`Request`] implementation.
pub use client::Fmp as FmpClient;
pub use client::{API_KEY_VAR, DEFAULT_BASE_URL};

#[cfg(any(feature = "reqwest", feature = "hyper"))]
static STATIC_INSTANCE: std::sync::LazyLock<arc_swap::ArcSwap<Fmp>> =
    std::sync::LazyLock::new(|| arc_swap::ArcSwap::from_pointee(Fmp::default()));

/// Initialize the process-wide client instance, returning the previous one.
#[cfg(any(feature = "reqwest", feature = "hyper"))]
pub fn initialize(client: Fmp) -> std::sync::Arc<Fmp> {
    STATIC_INSTANCE.swap(std::sync::Arc::from(client))
}

/// Get the process-wide client instance.
#[cfg(any(feature = "reqwest", feature = "hyper"))]
pub fn instance() -> std::sync::Arc<Fmp> {
    STATIC_INSTANCE.load().clone()
}
