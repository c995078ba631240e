//! Company endpoints

use crate::client::Fmp;
use crate::processor::Raw;
use crate::request::Request;
use crate::request::company::Profile;

/// Get the company profile for a stock
///
/// # Example
/// ```no_run
/// # use fmprep::Fmp;
/// # async fn example() {
/// # let client = Fmp::default().with_key("api-key");
/// let profiles: Vec<fmprep::Record> = fmprep::rest::company::profile(&client, "AAPL")
///     .as_json()
///     .get()
///     .await
///     .unwrap();
/// # }
/// ```
pub fn profile<'a, Client: Request>(client: &'a Fmp<Client>, symbol: impl Into<String>) -> Profile<'a, Client, Raw> {
    Profile::new(client, symbol)
}
