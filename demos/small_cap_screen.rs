//! Small-Cap Screen Example
//!
//! Screens the financial-statement universe down to small-cap, non-financial
//! US/Canadian companies, then pulls their quarterly as-reported statements.
//!
//! Run with:
//! ```sh
//! RUST_LOG=fmprep=info cargo run --example small_cap_screen --features=progress -- 25
//! ```
//!
//! The optional argument caps how many symbols of the universe are screened.

use fmprep::{Fmp, aggregate, fetch, screen};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    // Load API key from environment
    dotenvy::dotenv().ok();
    let api_key = std::env::var("FMP_API_KEY").expect("FMP_API_KEY must be set in .env or environment");
    let client = Fmp::default().with_key(api_key);

    let cap: usize = std::env::args().nth(1).and_then(|a| a.parse().ok()).unwrap_or(50);

    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40.cyan/blue}] {pos}/{len} ({elapsed})")?
            .progress_chars("=> "),
    );

    let Some(universe) = fetch::fetch_financial_statement_symbol_list(&client, &progress).await? else {
        eprintln!("Could not fetch the symbol universe");
        return Ok(());
    };
    let symbols: Vec<String> = universe.symbols()?.into_iter().take(cap).collect();

    let candidates = screen::filter_and_merge(&client, &symbols, &progress).await?;
    println!("\n{} of {} symbols passed the screen", candidates.height(), symbols.len());
    for row in candidates.rows() {
        println!(
            "  {:<8} {:<40} {}",
            row["symbol"].as_str().unwrap_or_default(),
            row["companyName"].as_str().unwrap_or_default(),
            row["mktCap"]
        );
    }

    let statements = aggregate::fetch_all_financial_statements(&client, &candidates.symbols()?, &progress).await?;

    println!("\n{:─<60}", "");
    println!("Income statement rows: {}", statements.income_statement.height());
    println!("Balance sheet rows:    {}", statements.balance_sheet.height());
    println!("Cash flow rows:        {}", statements.cash_flow.height());

    Ok(())
}
