//! Row-oriented table of API records
//!
//! A [`Frame`] holds records in insertion order together with the union of their keys,
//! in the order each key was first seen. Rows that lack a column read as `null`.
//! [`Frame::concat`] stacks frames the same way, so differently-shaped statement pages
//! line up under one header.

use serde::ser::{Serialize, SerializeSeq, Serializer};
use serde_json::Value;

use crate::error::Result;
use crate::model::{Fields, Record, StockListing};

static NULL: Value = Value::Null;

/// Ordered rows plus their column union
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    columns: Vec<String>,
    rows: Vec<Record>,
}

impl Frame {
    /// An empty frame with no columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a frame from records, keeping their order.
    pub fn from_records(rows: Vec<Record>) -> Self {
        let mut frame = Self::new();
        for row in rows {
            frame.push(row);
        }
        frame
    }

    /// Append one row, extending the header with any new keys.
    pub fn push(&mut self, row: Record) {
        for key in row.keys() {
            if !self.columns.iter().any(|c| c == key) {
                self.columns.push(key.clone());
            }
        }
        self.rows.push(row);
    }

    /// Stack frames top to bottom.
    ///
    /// Rows keep their order; the header is the union of all headers in first-seen order.
    /// Concatenating nothing gives an empty frame with no columns.
    pub fn concat(frames: impl IntoIterator<Item = Frame>) -> Self {
        let mut out = Self::new();
        for frame in frames {
            for column in frame.columns {
                if !out.columns.contains(&column) {
                    out.columns.push(column);
                }
            }
            out.rows.extend(frame.rows);
        }
        out
    }

    /// Keep only the rows matching `keep`; the header is unchanged.
    pub fn filter(&self, mut keep: impl FnMut(&Record) -> bool) -> Self {
        Self {
            columns: self.columns.clone(),
            rows: self.rows.iter().filter(|row| keep(row)).cloned().collect(),
        }
    }

    /// Column names.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows, in order.
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    /// Take the rows out.
    pub fn into_rows(self) -> Vec<Record> {
        self.rows
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// `true` when there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell at `row` / `column`; absent cells read as `null`.
    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        self.rows.get(row).map(|r| r.get(column).unwrap_or(&NULL))
    }

    /// All values of `column`, or `None` if no row has it.
    pub fn column(&self, column: &str) -> Option<Vec<&Value>> {
        if !self.columns.iter().any(|c| c == column) {
            return None;
        }
        Some(self.rows.iter().map(|r| r.get(column).unwrap_or(&NULL)).collect())
    }

    /// The `symbol` column as strings.
    ///
    /// # Errors
    ///
    /// [`Error::MissingField`](crate::Error::MissingField) for the first row without a symbol.
    pub fn symbols(&self) -> Result<Vec<String>> {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| Fields::new(i, row).string("symbol"))
            .collect()
    }

    /// Read every row as a [`StockListing`].
    pub fn listings(&self) -> Result<Vec<StockListing>> {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| StockListing::from_record(i, row))
            .collect()
    }

    /// Rows with every column present, absent cells filled with `null`.
    fn dense_rows(&self) -> impl Iterator<Item = Record> + '_ {
        self.rows.iter().map(|row| {
            self.columns
                .iter()
                .map(|c| (c.clone(), row.get(c).cloned().unwrap_or(Value::Null)))
                .collect()
        })
    }

    /// Serialize as a JSON array of dense rows.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Convert to a Polars DataFrame.
    ///
    /// An empty frame converts to an empty DataFrame.
    #[cfg(feature = "table")]
    pub fn to_dataframe(&self) -> Result<polars_core::frame::DataFrame> {
        let rows: Vec<Value> = self.dense_rows().map(Value::Object).collect();
        crate::processor::table::json_to_dataframe(&Value::Array(rows))
    }
}

impl Serialize for Frame {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
        for row in self.dense_rows() {
            seq.serialize_element(&row)?;
        }
        seq.end()
    }
}

impl From<Vec<Record>> for Frame {
    fn from(rows: Vec<Record>) -> Self {
        Self::from_records(rows)
    }
}

impl FromIterator<Record> for Frame {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut frame = Self::new();
        for row in iter {
            frame.push(row);
        }
        frame
    }
}
