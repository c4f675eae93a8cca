//! # sales-core: Pure Business Logic for Sales Aggregation
//!
//! This crate turns per-line-item sales records into one summary per
//! product: total revenue, total quantity and average price. Everything
//! here is a pure function with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Sales Aggregator Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    sales-report (CLI)                           │   │
//! │  │    config ──► read JSON/CSV ──► aggregate ──► write JSON/CSV    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ &[serde_json::Value]                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ sales-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ validation│  │   types   │  │  numeric  │  │ aggregator│  │   │
//! │  │   │  shape    │  │ SaleRecord│  │  Numeric  │  │  group by │  │   │
//! │  │   │  columns  │  │ Summary   │  │  int/float│  │  product  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • PURE FUNCTIONS                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`aggregator`] - The `aggregate` / `summarize` entry points
//! - [`validation`] - Input checks, in the order they are applied
//! - [`types`] - `SaleRecord`, `ProductKey`, `ProductSummary`
//! - [`numeric`] - Integer/float value with checked arithmetic
//! - [`error`] - `DataProcessingError`
//!
//! ## Example Usage
//!
//! ```rust
//! use sales_core::{aggregate, Numeric};
//! use serde_json::json;
//!
//! let records = vec![
//!     json!({"product": "A", "quantity": 2, "price": 10}),
//!     json!({"product": "B", "quantity": 3, "price": 15}),
//!     json!({"product": "A", "quantity": 1, "price": 10}),
//! ];
//!
//! let summaries = aggregate(&records).unwrap();
//! assert_eq!(summaries.len(), 2);
//! assert_eq!(summaries[0].total, Numeric::Int(30));
//! assert_eq!(summaries[0].average_price, 10.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod aggregator;
pub mod error;
pub mod numeric;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use aggregator::{aggregate, summarize};
pub use error::{DataProcessingError, DataResult, ErrorKind};
pub use numeric::Numeric;
pub use types::{ProductKey, ProductSummary, SaleRecord};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Field holding the product identifier.
pub const PRODUCT_FIELD: &str = "product";

/// Field holding the number of units sold.
pub const QUANTITY_FIELD: &str = "quantity";

/// Field holding the unit price.
pub const PRICE_FIELD: &str = "price";

/// Every record must carry all of these fields.
pub const REQUIRED_FIELDS: [&str; 3] = [PRODUCT_FIELD, QUANTITY_FIELD, PRICE_FIELD];

/// Fields that must hold non-negative numbers, in check order.
pub const NUMERIC_FIELDS: [&str; 2] = [QUANTITY_FIELD, PRICE_FIELD];
