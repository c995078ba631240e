//! Common types used across multiple endpoints
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Reporting period of a financial statement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// Quarterly filings
    #[default]
    Quarter,
    /// Annual filings
    Annual,
}

impl FromStr for Period {
    type Err = crate::error::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "quarter" => Ok(Period::Quarter),
            "annual" => Ok(Period::Annual),
            _ => Err(crate::error::Error::Custom(format!("Invalid period: {s}"))),
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Period::Quarter => write!(f, "quarter"),
            Period::Annual => write!(f, "annual"),
        }
    }
}

/// The three as-reported financial statements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementKind {
    /// Income statement
    IncomeStatement,
    /// Balance sheet
    BalanceSheet,
    /// Cash flow statement
    CashFlow,
}

impl StatementKind {
    /// All kinds, in the order the bulk aggregator fetches them.
    pub const ALL: [StatementKind; 3] = [
        StatementKind::IncomeStatement,
        StatementKind::BalanceSheet,
        StatementKind::CashFlow,
    ];

    /// Endpoint path prefix; the symbol is appended as the last segment.
    pub fn path(self) -> &'static str {
        match self {
            StatementKind::IncomeStatement => "/api/v3/income-statement-as-reported",
            StatementKind::BalanceSheet => "/api/v3/balance-sheet-statement-as-reported",
            StatementKind::CashFlow => "/api/v3/cash-flow-statement-as-reported",
        }
    }
}

impl std::fmt::Display for StatementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatementKind::IncomeStatement => write!(f, "income statement"),
            StatementKind::BalanceSheet => write!(f, "balance sheet"),
            StatementKind::CashFlow => write!(f, "cash flow"),
        }
    }
}
