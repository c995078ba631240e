//! Lenient fetchers used by the pipelines
//!
//! These wrap the request builders with the batch policy: a non-200 answer is reported
//! through the [`Observer`] and `tracing`, then turned into "no data" (`None` for lists and
//! profiles, an empty `Vec` for statements). Transport failures and malformed JSON are
//! still returned as errors.

use serde_json::Value;

use crate::client::Fmp;
use crate::error::{Error, Result};
use crate::frame::Frame;
use crate::model::Record;
use crate::report::{FetchFailure, Observer, Operation};
use crate::request::Request;
use crate::request::common::StatementKind;
use crate::rest;

/// Full stock list, or `None` if the API refused.
pub async fn fetch_stock_list<C: Request>(client: &Fmp<C>, observer: &impl Observer) -> Result<Option<Frame>> {
    let result = rest::lists::stock_list(client).as_json::<Vec<Value>>().get().await;
    let Some(values) = recover(result, Operation::StockList, None, observer)? else {
        return Ok(None);
    };
    Ok(Some(Frame::from_records(object_rows(values)?)))
}

/// Symbols with financial-statement coverage, one `symbol` column, or `None` if the API refused.
///
/// The endpoint returns bare ticker strings; each becomes a `{"symbol": ...}` row.
pub async fn fetch_financial_statement_symbol_list<C: Request>(
    client: &Fmp<C>,
    observer: &impl Observer,
) -> Result<Option<Frame>> {
    let result = rest::lists::statement_symbol_list(client)
        .as_json::<Vec<Value>>()
        .get()
        .await;
    let Some(values) = recover(result, Operation::StatementSymbolList, None, observer)? else {
        return Ok(None);
    };

    let rows = values
        .into_iter()
        .map(|value| match value {
            Value::String(symbol) => {
                let mut row = Record::new();
                row.insert("symbol".to_string(), Value::String(symbol));
                Ok(row)
            }
            Value::Object(row) => Ok(row),
            other => Err(unexpected_row(&other)),
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Some(Frame::from_records(rows)))
}

/// Profile of one symbol, or `None` if the API refused or returned no profile.
pub async fn fetch_symbol_profile<C: Request>(
    client: &Fmp<C>,
    symbol: &str,
    observer: &impl Observer,
) -> Result<Option<Record>> {
    let result = rest::company::profile(client, symbol).as_json::<Vec<Value>>().get().await;
    let Some(values) = recover(result, Operation::Profile, Some(symbol), observer)? else {
        return Ok(None);
    };

    match values.into_iter().next() {
        Some(Value::Object(profile)) if !profile.is_empty() => Ok(Some(profile)),
        Some(Value::Object(_)) | None => {
            report(
                FetchFailure {
                    operation: Operation::Profile,
                    symbol: Some(symbol.to_string()),
                    status: None,
                    detail: "empty profile response".to_string(),
                },
                observer,
            );
            Ok(None)
        }
        Some(other) => Err(unexpected_row(&other)),
    }
}

/// Quarterly as-reported income statement records (up to 50).
pub async fn fetch_income_statement<C: Request>(
    client: &Fmp<C>,
    symbol: &str,
    observer: &impl Observer,
) -> Result<Vec<Record>> {
    fetch_statement(client, StatementKind::IncomeStatement, symbol, observer).await
}

/// Quarterly as-reported balance sheet records (up to 50).
pub async fn fetch_balance_sheet<C: Request>(
    client: &Fmp<C>,
    symbol: &str,
    observer: &impl Observer,
) -> Result<Vec<Record>> {
    fetch_statement(client, StatementKind::BalanceSheet, symbol, observer).await
}

/// Quarterly as-reported cash flow records (up to 50).
pub async fn fetch_cash_flow<C: Request>(
    client: &Fmp<C>,
    symbol: &str,
    observer: &impl Observer,
) -> Result<Vec<Record>> {
    fetch_statement(client, StatementKind::CashFlow, symbol, observer).await
}

/// Quarterly as-reported records of `kind` for `symbol`; empty when the API refused
/// or answered with something other than an array.
pub async fn fetch_statement<C: Request>(
    client: &Fmp<C>,
    kind: StatementKind,
    symbol: &str,
    observer: &impl Observer,
) -> Result<Vec<Record>> {
    let operation = Operation::Statement(kind);
    let result = rest::statements::as_reported(client, kind, symbol)
        .as_json::<Value>()
        .get()
        .await;

    match recover(result, operation, Some(symbol), observer)? {
        Some(Value::Array(values)) => object_rows(values),
        Some(other) => {
            report(
                FetchFailure {
                    operation,
                    symbol: Some(symbol.to_string()),
                    status: None,
                    detail: format!("expected a JSON array, got {}", json_kind(&other)),
                },
                observer,
            );
            Ok(Vec::new())
        }
        None => Ok(Vec::new()),
    }
}

/// Turn an API refusal into `None` after reporting it; pass other errors through.
fn recover<T>(
    result: Result<T>,
    operation: Operation,
    symbol: Option<&str>,
    observer: &impl Observer,
) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(Error::ApiError { status, message, .. }) => {
            report(
                FetchFailure {
                    operation,
                    symbol: symbol.map(str::to_owned),
                    status: Some(status),
                    detail: message,
                },
                observer,
            );
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn report(failure: FetchFailure, observer: &impl Observer) {
    failure.log();
    observer.failure(&failure);
}

fn object_rows(values: Vec<Value>) -> Result<Vec<Record>> {
    values
        .into_iter()
        .map(|value| match value {
            Value::Object(row) => Ok(row),
            other => Err(unexpected_row(&other)),
        })
        .collect()
}

fn unexpected_row(value: &Value) -> Error {
    Error::Custom(format!("expected JSON object rows, got {}", json_kind(value)))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
