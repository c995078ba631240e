//! Typed views over API records
//!
//! Rows travel through the crate as untyped [`Record`]s so every field the API returns is
//! kept. The structs here pull out the fields the pipelines depend on, turning a missing or
//! mistyped field into [`Error::MissingField`] / [`Error::InvalidField`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// One JSON object as returned by the API, keys in response order
pub type Record = serde_json::Map<String, Value>;

/// Fields the screen reads from every profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolProfile {
    /// Ticker
    pub symbol: String,
    /// Market capitalisation, in the API's currency unit
    pub mkt_cap: f64,
    /// Sector name
    pub sector: String,
    /// Industry name
    pub industry: String,
    /// Company name
    pub company_name: String,
    /// Two-letter country code
    pub country: String,
}

impl SymbolProfile {
    /// Read a profile out of row `row` of a profile table.
    pub fn from_record(row: usize, record: &Record) -> Result<Self> {
        let fields = Fields::new(row, record);
        Ok(Self {
            symbol: fields.string("symbol")?,
            mkt_cap: fields.number("mktCap")?,
            sector: fields.string("sector")?,
            industry: fields.string("industry")?,
            company_name: fields.string("companyName")?,
            country: fields.string("country")?,
        })
    }
}

/// Entry of the stock list; only the symbol is guaranteed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockListing {
    /// Ticker
    pub symbol: String,
    /// Instrument name
    #[serde(default)]
    pub name: Option<String>,
    /// Exchange long name
    #[serde(default)]
    pub exchange: Option<String>,
    /// Exchange short name
    #[serde(default)]
    pub exchange_short_name: Option<String>,
    /// Instrument type (`stock`, `etf`, ...)
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl StockListing {
    /// Read a listing out of row `row` of a stock list table.
    pub fn from_record(row: usize, record: &Record) -> Result<Self> {
        let fields = Fields::new(row, record);
        Ok(Self {
            symbol: fields.string("symbol")?,
            name: fields.optional_string("name"),
            exchange: fields.optional_string("exchange"),
            exchange_short_name: fields.optional_string("exchangeShortName"),
            kind: fields.optional_string("type"),
        })
    }
}

/// Field accessor that reports failures against a row
pub(crate) struct Fields<'r> {
    row: usize,
    record: &'r Record,
}

impl<'r> Fields<'r> {
    pub(crate) fn new(row: usize, record: &'r Record) -> Self {
        Self { row, record }
    }

    fn symbol(&self) -> Option<String> {
        self.record.get("symbol").and_then(Value::as_str).map(str::to_owned)
    }

    fn present(&self, field: &'static str) -> Result<&'r Value> {
        match self.record.get(field) {
            Some(Value::Null) | None => Err(Error::MissingField {
                row: self.row,
                symbol: self.symbol(),
                field,
            }),
            Some(value) => Ok(value),
        }
    }

    pub(crate) fn string(&self, field: &'static str) -> Result<String> {
        self.present(field)?
            .as_str()
            .map(str::to_owned)
            .ok_or_else(|| self.invalid(field, "a string"))
    }

    pub(crate) fn number(&self, field: &'static str) -> Result<f64> {
        self.present(field)?
            .as_f64()
            .ok_or_else(|| self.invalid(field, "a number"))
    }

    fn optional_string(&self, field: &'static str) -> Option<String> {
        self.record.get(field).and_then(Value::as_str).map(str::to_owned)
    }

    fn invalid(&self, field: &'static str, expected: &'static str) -> Error {
        Error::InvalidField {
            row: self.row,
            symbol: self.symbol(),
            field,
            expected,
        }
    }
}
