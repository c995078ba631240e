//! Progress and failure reporting
//!
//! The pipelines call an [`Observer`] once per processed symbol and once per failed fetch.
//! `()` ignores everything; with the `progress` feature an `indicatif::ProgressBar` works too.
//! Failures are logged through `tracing` regardless of the observer.

use crate::request::common::StatementKind;

/// The fetch that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Full stock list
    StockList,
    /// Financial-statement symbol list
    StatementSymbolList,
    /// Company profile
    Profile,
    /// One of the as-reported statements
    Statement(StatementKind),
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::StockList => write!(f, "stock list"),
            Operation::StatementSymbolList => write!(f, "financial statement symbol list"),
            Operation::Profile => write!(f, "profile"),
            Operation::Statement(kind) => write!(f, "{kind}"),
        }
    }
}

/// A fetch that produced no data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    /// What was being fetched
    pub operation: Operation,
    /// Symbol, for per-symbol endpoints
    pub symbol: Option<String>,
    /// HTTP status, when the server answered with something other than 200
    pub status: Option<u16>,
    /// Server message or a description of the unexpected payload
    pub detail: String,
}

impl FetchFailure {
    pub(crate) fn log(&self) {
        tracing::warn!(
            operation = %self.operation,
            symbol = self.symbol.as_deref(),
            status = self.status,
            detail = %self.detail,
            "{self}"
        );
    }
}

impl std::fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to fetch {}", self.operation)?;
        if let Some(symbol) = &self.symbol {
            write!(f, " for symbol {symbol}")?;
        }
        if let Some(status) = self.status {
            write!(f, " (status {status})")?;
        }
        Ok(())
    }
}

/// Side channel for progress and failures
///
/// Every method has a no-op default.
pub trait Observer {
    /// A batch of `total` items labelled `label` is starting.
    fn begin(&self, _label: &str, _total: usize) {}

    /// One item of the batch is done.
    fn advance(&self) {}

    /// The batch is done.
    fn finish(&self) {}

    /// A fetch failed and its contribution was dropped.
    fn failure(&self, _failure: &FetchFailure) {}
}

impl Observer for () {}

impl<O: Observer + ?Sized> Observer for &O {
    fn begin(&self, label: &str, total: usize) {
        (**self).begin(label, total)
    }

    fn advance(&self) {
        (**self).advance()
    }

    fn finish(&self) {
        (**self).finish()
    }

    fn failure(&self, failure: &FetchFailure) {
        (**self).failure(failure)
    }
}

#[cfg(feature = "progress")]
impl Observer for indicatif::ProgressBar {
    fn begin(&self, label: &str, total: usize) {
        self.reset();
        self.set_length(total as u64);
        self.set_message(label.to_string());
    }

    fn advance(&self) {
        self.inc(1);
    }

    fn finish(&self) {
        indicatif::ProgressBar::finish(self);
    }

    fn failure(&self, failure: &FetchFailure) {
        self.println(failure.to_string());
    }
}
