//! As-reported financial statement endpoints

use crate::client::Fmp;
use crate::processor::Raw;
use crate::request::Request;
use crate::request::common::StatementKind;
use crate::request::statements::AsReported;

/// Get any of the three as-reported statements for a stock
pub fn as_reported<'a, Client: Request>(
    client: &'a Fmp<Client>,
    kind: StatementKind,
    symbol: impl Into<String>,
) -> AsReported<'a, Client, Raw> {
    AsReported::new(client, kind, symbol)
}

/// Get the as-reported income statement for a stock
///
/// Quarterly, 50 periods unless changed with `.period()` / `.limit()`.
///
/// # Example
/// ```no_run
/// # use fmprep::Fmp;
/// # use fmprep::request::common::Period;
/// # async fn example() {
/// # let client = Fmp::default().with_key("api-key");
/// let json = fmprep::rest::statements::income_statement(&client, "AAPL")
///     .period(Period::Annual)
///     .limit(5)
///     .get()
///     .await
///     .unwrap();
/// # }
/// ```
pub fn income_statement<'a, Client: Request>(
    client: &'a Fmp<Client>,
    symbol: impl Into<String>,
) -> AsReported<'a, Client, Raw> {
    AsReported::new(client, StatementKind::IncomeStatement, symbol)
}

/// Get the as-reported balance sheet for a stock
pub fn balance_sheet<'a, Client: Request>(
    client: &'a Fmp<Client>,
    symbol: impl Into<String>,
) -> AsReported<'a, Client, Raw> {
    AsReported::new(client, StatementKind::BalanceSheet, symbol)
}

/// Get the as-reported cash flow statement for a stock
pub fn cash_flow<'a, Client: Request>(
    client: &'a Fmp<Client>,
    symbol: impl Into<String>,
) -> AsReported<'a, Client, Raw> {
    AsReported::new(client, StatementKind::CashFlow, symbol)
}
