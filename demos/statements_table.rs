//! Statements Table Example
//!
//! Fetches the quarterly as-reported statements of a few symbols and prints
//! them as Polars DataFrames.
//!
//! Run with:
//! ```sh
//! cargo run --example statements_table --features=table -- AAPL MSFT
//! ```

use fmprep::request::common::StatementKind;
use fmprep::{Fmp, aggregate, rest};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    dotenvy::dotenv().ok();
    let api_key = std::env::var("FMP_API_KEY").expect("FMP_API_KEY must be set in .env or environment");
    let client = Fmp::default().with_key(api_key);

    let mut symbols: Vec<String> = std::env::args().skip(1).collect();
    if symbols.is_empty() {
        symbols = vec!["AAPL".to_string(), "MSFT".to_string()];
    }

    // Single request straight into a DataFrame
    let profile = rest::company::profile(&client, &symbols[0]).as_dataframe().get().await?;
    println!("{profile}");

    let statements = aggregate::fetch_all_financial_statements(&client, &symbols, &()).await?;
    for kind in StatementKind::ALL {
        let df = statements.get(kind).to_dataframe()?;
        println!("\n{:═<80}", "");
        println!("{kind}: {} rows × {} columns", df.height(), df.width());
        println!("{:═<80}\n", "");
        println!("{}", df.head(Some(5)));
    }

    Ok(())
}
