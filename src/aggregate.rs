//! Bulk statement aggregation

use crate::client::Fmp;
use crate::error::{Error, Result};
use crate::fetch::fetch_statement;
use crate::frame::Frame;
use crate::report::Observer;
use crate::request::Request;
use crate::request::common::StatementKind;

/// Progress label of the statement pass
pub const STATEMENTS_LABEL: &str = "Fetching Financial Data";

/// One consolidated table per statement kind
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FinancialStatements {
    /// Income statement rows of every symbol
    pub income_statement: Frame,
    /// Balance sheet rows of every symbol
    pub balance_sheet: Frame,
    /// Cash flow rows of every symbol
    pub cash_flow: Frame,
}

impl FinancialStatements {
    /// Table for `kind`.
    pub fn get(&self, kind: StatementKind) -> &Frame {
        match kind {
            StatementKind::IncomeStatement => &self.income_statement,
            StatementKind::BalanceSheet => &self.balance_sheet,
            StatementKind::CashFlow => &self.cash_flow,
        }
    }

    /// `(income, balance sheet, cash flow)`
    pub fn into_parts(self) -> (Frame, Frame, Frame) {
        (self.income_statement, self.balance_sheet, self.cash_flow)
    }
}

/// Fetch all three quarterly statements for each symbol and stack them per kind.
///
/// Symbols are processed in order and their rows appear in that order. A statement that
/// comes back empty or refused contributes nothing; when no symbol contributes to a kind,
/// its table is empty with no columns.
pub async fn fetch_all_financial_statements<C: Request, S: AsRef<str>>(
    client: &Fmp<C>,
    symbols: &[S],
    observer: &impl Observer,
) -> Result<FinancialStatements> {
    observer.begin(STATEMENTS_LABEL, symbols.len());
    let fetched = async {
        let mut pages: [Vec<Frame>; 3] = Default::default();
        for symbol in symbols {
            let symbol = symbol.as_ref();
            for (slot, kind) in pages.iter_mut().zip(StatementKind::ALL) {
                let records = fetch_statement(client, kind, symbol, observer).await?;
                if !records.is_empty() {
                    slot.push(Frame::from_records(records));
                }
            }
            observer.advance();
        }
        Ok::<_, Error>(pages)
    }
    .await;
    observer.finish();

    let [income, balance, cash_flow] = fetched?;
    let statements = FinancialStatements {
        income_statement: Frame::concat(income),
        balance_sheet: Frame::concat(balance),
        cash_flow: Frame::concat(cash_flow),
    };

    tracing::info!(
        symbols = symbols.len(),
        income_rows = statements.income_statement.height(),
        balance_rows = statements.balance_sheet.height(),
        cash_flow_rows = statements.cash_flow.height(),
        "financial statements aggregated"
    );
    Ok(statements)
}
