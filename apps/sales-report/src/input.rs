//! Record readers.
//!
//! Both formats produce the same thing: a list of JSON values handed to
//! [`sales_core::aggregate`] untouched. Shape and type checks belong to the
//! core, so readers never reject a record for its content.

use std::io::Read;

use sales_core::NUMERIC_FIELDS;
use serde_json::{Map, Number, Value};
use tracing::debug;

use crate::config::RecordFormat;
use crate::error::{ReportError, ReportResult};

/// Reads all records from `reader` in the given format.
pub fn read_records<R: Read>(reader: R, format: RecordFormat) -> ReportResult<Vec<Value>> {
    let records = match format {
        RecordFormat::Json => read_json(reader)?,
        RecordFormat::Csv => read_csv(reader)?,
    };
    debug!(%format, records = records.len(), "Records read");
    Ok(records)
}

/// Reads a top-level JSON array.
pub fn read_json<R: Read>(reader: R) -> ReportResult<Vec<Value>> {
    match serde_json::from_reader::<_, Value>(reader)? {
        Value::Array(items) => Ok(items),
        _ => Err(ReportError::InvalidInput(
            "expected a JSON array of records".into(),
        )),
    }
}

/// Reads CSV with a header row into one JSON object per row.
///
/// Only `quantity` and `price` cells go through [`infer_cell`]; every other
/// column, `product` included, stays text so `007` and `7` remain distinct
/// products. Empty cells are left out of the object, so a blank `price`
/// surfaces as a missing column rather than as a non-numeric value.
pub fn read_csv<R: Read>(reader: R) -> ReportResult<Vec<Value>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let numeric: Vec<bool> = headers
        .iter()
        .map(|name| NUMERIC_FIELDS.contains(&name))
        .collect();
    let mut records = Vec::new();

    for row in rdr.records() {
        let row = row?;
        let object: Map<String, Value> = headers
            .iter()
            .zip(&numeric)
            .zip(row.iter())
            .filter(|(_, cell)| !cell.is_empty())
            .map(|((name, &is_numeric), cell)| {
                let value = if is_numeric {
                    infer_cell(cell)
                } else {
                    Value::String(cell.to_string())
                };
                (name.to_string(), value)
            })
            .collect();
        records.push(Value::Object(object));
    }

    Ok(records)
}

/// Types a CSV cell: integer, then finite float, else text.
pub fn infer_cell(cell: &str) -> Value {
    if let Ok(int) = cell.parse::<i64>() {
        return Value::from(int);
    }
    cell.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(cell.to_string()))
}
