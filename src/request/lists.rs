//! Universe list request builders

/// Full stock list request builder
pub mod stock_list;
/// Financial-statement symbol list request builder
pub mod statement_symbol_list;

pub use statement_symbol_list::StatementSymbolList;
pub use stock_list::StockList;
