//! Universe list endpoints

use crate::client::Fmp;
use crate::processor::Raw;
use crate::request::Request;
use crate::request::lists::{StatementSymbolList, StockList};

/// Get the full list of tradable instruments
///
/// # Example
/// ```no_run
/// # use fmprep::Fmp;
/// # async fn example() {
/// # let client = Fmp::default().with_key("api-key");
/// let json = fmprep::rest::lists::stock_list(&client)
///     .get()
///     .await
///     .unwrap();
/// # }
/// ```
pub fn stock_list<Client: Request>(client: &Fmp<Client>) -> StockList<'_, Client, Raw> {
    StockList::new(client)
}

/// Get the symbols that have financial-statement coverage
pub fn statement_symbol_list<Client: Request>(client: &Fmp<Client>) -> StatementSymbolList<'_, Client, Raw> {
    StatementSymbolList::new(client)
}
