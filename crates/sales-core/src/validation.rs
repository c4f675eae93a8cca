//! # Validation Module
//!
//! Input checks for raw sales records.
//!
//! ## Validation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Steps                                   │
//! │                                                                         │
//! │  Step 0: validate_not_empty      → EmptyInput                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Step 1: validate_shape          → UnexpectedFailure (not a mapping)   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Step 2: validate_columns        → MissingColumn                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Step 3: validate_numeric        → NonNumericValue                     │
//! │           │                      (quantity column, then price)          │
//! │           ▼                                                             │
//! │  Step 4: validate_non_negative   → NegativeValue                       │
//! │           │                      (quantity column, then price)          │
//! │           ▼                                                             │
//! │  Build:  product keys            → UnexpectedFailure (not a scalar)    │
//! │                                                                         │
//! │  Each step covers every record before the next step starts, so the    │
//! │  reported error is always the earliest step that fails.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use sales_core::validation::validate_records;
//! use serde_json::json;
//!
//! let records = vec![json!({"product": "A", "quantity": 1, "price": 10})];
//! let typed = validate_records(&records).unwrap();
//! assert_eq!(typed[0].product.to_string(), "A");
//! ```

use serde_json::{Map, Value};

use crate::error::{DataProcessingError, DataResult};
use crate::numeric::Numeric;
use crate::types::{ProductKey, SaleRecord};
use crate::{NUMERIC_FIELDS, PRODUCT_FIELD, REQUIRED_FIELDS};

/// A record that passed the shape check.
pub type Row = Map<String, Value>;

/// Quantity and price of one record, in [`NUMERIC_FIELDS`] order.
pub type NumericPair = [Numeric; 2];

// =============================================================================
// Pipeline
// =============================================================================

/// Runs every validation step and returns typed records.
///
/// ## Errors
/// The first failing step, see the module docs for the order.
pub fn validate_records(records: &[Value]) -> DataResult<Vec<SaleRecord>> {
    validate_not_empty(records)?;
    let rows = validate_shape(records)?;
    validate_columns(&rows)?;
    let numbers = validate_numeric(&rows)?;
    validate_non_negative(&numbers)?;

    rows.iter()
        .zip(numbers)
        .enumerate()
        .map(|(index, (row, [quantity, price]))| {
            Ok(SaleRecord {
                product: product_key(row, index)?,
                quantity,
                price,
            })
        })
        .collect()
}

/// Checks already-typed records.
///
/// Types rule out shape, column and numeric failures, so only emptiness
/// and sign remain.
pub fn validate_sale_records(records: &[SaleRecord]) -> DataResult<()> {
    validate_not_empty(records)?;
    let numbers: Vec<NumericPair> = records
        .iter()
        .map(|record| [record.quantity, record.price])
        .collect();
    validate_non_negative(&numbers)
}

// =============================================================================
// Individual Steps
// =============================================================================

/// Fails with `EmptyInput` when there are no records.
pub fn validate_not_empty<T>(records: &[T]) -> DataResult<()> {
    if records.is_empty() {
        return Err(DataProcessingError::EmptyInput);
    }
    Ok(())
}

/// Requires every record to be a mapping.
pub fn validate_shape(records: &[Value]) -> DataResult<Vec<&Row>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            record.as_object().ok_or_else(|| {
                DataProcessingError::UnexpectedFailure(format!(
                    "record {} is {}, expected a mapping",
                    index,
                    json_type_name(record)
                ))
            })
        })
        .collect()
}

/// Requires every record to carry all [`REQUIRED_FIELDS`].
///
/// The error lists the fields missing from the first offending record.
pub fn validate_columns(rows: &[&Row]) -> DataResult<()> {
    for row in rows {
        let missing: Vec<String> = REQUIRED_FIELDS
            .iter()
            .filter(|field| !row.contains_key(**field))
            .map(|field| field.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(DataProcessingError::MissingColumn(missing));
        }
    }
    Ok(())
}

/// Requires `quantity` and `price` to be JSON numbers.
///
/// The whole quantity column is checked before the price column.
pub fn validate_numeric(rows: &[&Row]) -> DataResult<Vec<NumericPair>> {
    let mut columns: [Vec<Numeric>; 2] = [
        Vec::with_capacity(rows.len()),
        Vec::with_capacity(rows.len()),
    ];

    for (column, field) in columns.iter_mut().zip(NUMERIC_FIELDS) {
        for (index, row) in rows.iter().enumerate() {
            let value = row
                .get(field)
                .and_then(Numeric::from_json)
                .ok_or_else(|| DataProcessingError::non_numeric(field, index))?;
            column.push(value);
        }
    }

    let [quantities, prices] = columns;
    Ok(quantities
        .into_iter()
        .zip(prices)
        .map(|(quantity, price)| [quantity, price])
        .collect())
}

/// Rejects negative quantities and prices.
///
/// ## Rules
/// - Zero is allowed (free items, zero units)
/// - `-0.0` is allowed
/// - The quantity column is checked before the price column
pub fn validate_non_negative(numbers: &[NumericPair]) -> DataResult<()> {
    for (position, field) in NUMERIC_FIELDS.iter().enumerate() {
        if let Some(index) = numbers.iter().position(|pair| pair[position].is_negative()) {
            return Err(DataProcessingError::negative(field, index));
        }
    }
    Ok(())
}

// =============================================================================
// Helpers
// =============================================================================

fn product_key(row: &Row, index: usize) -> DataResult<ProductKey> {
    let value = row.get(PRODUCT_FIELD).unwrap_or(&Value::Null);
    ProductKey::from_json(value).ok_or_else(|| {
        DataProcessingError::UnexpectedFailure(format!(
            "{} in record {} is {}, expected a scalar identifier",
            PRODUCT_FIELD,
            index,
            json_type_name(value)
        ))
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
