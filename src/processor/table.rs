//! Table processor using Polars DataFrames
use crate::error::Result;
use crate::processor::{Processor, successful};
use crate::response::Response;
use polars_core::frame::DataFrame;
use polars_io::prelude::*;
use std::io::Cursor;

/// Table processor that converts JSON array responses to Polars DataFrames
pub struct Table;

impl Processor for Table {
    type Output = DataFrame;

    fn process<R: Response>(&self, response: Result<R>) -> Result<DataFrame> {
        let resp = successful(response)?;
        let json_value: serde_json::Value = serde_json::from_str(resp.body())?;
        json_to_dataframe(&json_value)
    }
}

/// Read a JSON array of objects into a DataFrame.
///
/// An empty array yields an empty DataFrame with no columns.
pub(crate) fn json_to_dataframe(data: &serde_json::Value) -> Result<DataFrame> {
    let Some(rows) = data.as_array() else {
        return Err(crate::error::Error::Custom(format!(
            "Expected array data for DataFrame conversion, got: {}",
            if data.is_object() {
                "object"
            } else if data.is_null() {
                "null"
            } else {
                "other"
            }
        )));
    };

    if rows.is_empty() {
        return Ok(DataFrame::empty());
    }

    let json_bytes = serde_json::to_vec(data)?;
    let json_preview = String::from_utf8_lossy(&json_bytes[..json_bytes.len().min(200)]).to_string();
    let df = JsonReader::new(Cursor::new(json_bytes)).finish().map_err(|e| {
        crate::error::Error::Custom(format!(
            "Failed to parse JSON as DataFrame: {}. Data preview: {}",
            e, json_preview
        ))
    })?;
    Ok(df)
}
