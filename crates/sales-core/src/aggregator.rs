//! # Sales Aggregator Module
//!
//! Groups validated sale records by product and totals them.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Sales Aggregator                                 │
//! │                                                                         │
//! │  records ──► validate_records ──► SaleRecord[] ──► group_and_total     │
//! │                                                        │                │
//! │                         ┌──────────────────────────────┘                │
//! │                         ▼                                               │
//! │              ┌─────────────────────┐                                    │
//! │              │  IndexMap (ordered) │                                    │
//! │              │                     │                                    │
//! │              │  A: total 30, qty 3 │  ◄── first seen at record 0       │
//! │              │  B: total 45, qty 3 │  ◄── first seen at record 1       │
//! │              └──────────┬──────────┘                                    │
//! │                         ▼                                               │
//! │              ProductSummary[] (first-seen order, never sorted)          │
//! │                                                                         │
//! │  Sums are ADDITIVE: line totals and quantities only ever accumulate.   │
//! │  average_price is derived once per group at the end.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, debug_span, trace};

use crate::error::{DataProcessingError, DataResult};
use crate::numeric::Numeric;
use crate::types::{ProductKey, ProductSummary, SaleRecord};
use crate::validation::{validate_records, validate_sale_records};

// =============================================================================
// Group Totals
// =============================================================================

/// Running sums for one product.
#[derive(Debug, Clone, Copy, Default)]
struct GroupTotals {
    /// Sum of line totals so far.
    total: Numeric,
    /// Sum of quantities so far.
    quantity: Numeric,
}

impl GroupTotals {
    /// Folds one record into the running sums.
    fn add(&mut self, record: &SaleRecord) -> DataResult<()> {
        let line_total = record.line_total()?;

        self.total = self
            .total
            .checked_add(line_total)
            .ok_or_else(|| overflow("total", &record.product))?;
        self.quantity = self
            .quantity
            .checked_add(record.quantity)
            .ok_or_else(|| overflow("quantity", &record.product))?;

        Ok(())
    }
}

fn overflow(what: &str, product: &ProductKey) -> DataProcessingError {
    DataProcessingError::UnexpectedFailure(format!(
        "{} overflows for product {}",
        what, product
    ))
}

// =============================================================================
// Entry Points
// =============================================================================

/// Validates raw records and aggregates them into one summary per product.
///
/// Each record must be a JSON object with `product`, `quantity` and
/// `price`. Extra fields are ignored.
///
/// ## Example
/// ```rust
/// use sales_core::{aggregate, Numeric, ProductKey};
/// use serde_json::json;
///
/// let records = vec![json!({"product": "A", "quantity": 0, "price": 10})];
/// let summaries = aggregate(&records).unwrap();
///
/// assert_eq!(summaries[0].product, ProductKey::from("A"));
/// assert_eq!(summaries[0].total, Numeric::Int(0));
/// assert_eq!(summaries[0].average_price, 0.0);
/// ```
///
/// ## Errors
/// The first failing validation step (see [`crate::validation`]), or
/// `UnexpectedFailure` on integer overflow. No partial result is returned.
pub fn aggregate(records: &[Value]) -> DataResult<Vec<ProductSummary>> {
    let span = debug_span!("aggregate", records = records.len());
    let _guard = span.enter();

    let validated = validate_records(records).inspect_err(|e| {
        debug!(kind = %e.kind(), error = %e, "Sales records rejected");
    })?;

    group_and_total(&validated)
}

/// Aggregates records that are already typed.
///
/// ## Example
/// ```rust
/// use sales_core::{summarize, Numeric, SaleRecord};
///
/// let records = vec![
///     SaleRecord::new("B", 3, 15),
///     SaleRecord::new("A", 2, 10),
///     SaleRecord::new("B", 1, 15),
/// ];
/// let summaries = summarize(&records).unwrap();
///
/// assert_eq!(summaries[0].product.to_string(), "B");
/// assert_eq!(summaries[0].quantity, Numeric::Int(4));
/// ```
///
/// ## Errors
/// `EmptyInput`, `NegativeValue`, or `UnexpectedFailure` on overflow.
pub fn summarize(records: &[SaleRecord]) -> DataResult<Vec<ProductSummary>> {
    let span = debug_span!("summarize", records = records.len());
    let _guard = span.enter();

    validate_sale_records(records).inspect_err(|e| {
        debug!(kind = %e.kind(), error = %e, "Sale records rejected");
    })?;

    group_and_total(records)
}

// =============================================================================
// Grouping
// =============================================================================

fn group_and_total(records: &[SaleRecord]) -> DataResult<Vec<ProductSummary>> {
    let mut groups: IndexMap<&ProductKey, GroupTotals> = IndexMap::new();

    for record in records {
        trace!(product = %record.product, quantity = %record.quantity, price = %record.price, "Adding record");
        groups.entry(&record.product).or_default().add(record)?;
    }

    debug!(products = groups.len(), "Sales records aggregated");

    Ok(groups
        .into_iter()
        .map(|(product, totals)| {
            ProductSummary::from_totals(product.clone(), totals.total, totals.quantity)
        })
        .collect())
}

// =============================================================================
// Unit Tests
// =============================================================================
