//! # Domain Types
//!
//! Record and summary types used throughout the sales aggregator.
//!
//! ## Type Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐                         ┌─────────────────────┐   │
//! │  │   SaleRecord    │   quantity × price      │   ProductSummary    │   │
//! │  │  ─────────────  │ ──────────────────────► │  ─────────────────  │   │
//! │  │  product        │   grouped by product    │  product            │   │
//! │  │  quantity       │                         │  total              │   │
//! │  │  price          │                         │  quantity           │   │
//! │  └─────────────────┘                         │  average_price      │   │
//! │                                              └─────────────────────┘   │
//! │  ┌─────────────────┐                                                    │
//! │  │   ProductKey    │  Text │ Integer │ Float │ Boolean                  │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{DataProcessingError, DataResult};
use crate::numeric::Numeric;

// =============================================================================
// Product Key
// =============================================================================

/// Scalar product identifier used as the grouping key.
///
/// ## Equality
/// Keys compare by variant and value: text `"1"` and integer `1` are two
/// different products. Floats compare by bit pattern with `-0.0` folded
/// into `0.0`, which makes the type usable as a map key.
///
/// [`ProductKey::from_json`] reads integral floats such as `1.0` as
/// `Integer`, so JSON `1` and `1.0` name the same product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductKey {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Text(String),
}

impl ProductKey {
    /// Reads a JSON scalar as a product key.
    ///
    /// Integral floats within `i64` range become `Integer`. Returns `None`
    /// for null, arrays and objects.
    ///
    /// ## Example
    /// ```rust
    /// use sales_core::ProductKey;
    /// use serde_json::json;
    ///
    /// assert_eq!(ProductKey::from_json(&json!("A")), Some(ProductKey::from("A")));
    /// assert_eq!(ProductKey::from_json(&json!(7)), Some(ProductKey::Integer(7)));
    /// assert_eq!(ProductKey::from_json(&json!(7.0)), Some(ProductKey::Integer(7)));
    /// assert_eq!(ProductKey::from_json(&json!(null)), None);
    /// ```
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(text) => Some(ProductKey::Text(text.clone())),
            Value::Bool(flag) => Some(ProductKey::Boolean(*flag)),
            Value::Number(number) => match number.as_i64() {
                Some(int) => Some(ProductKey::Integer(int)),
                None => number.as_f64().map(ProductKey::from_float),
            },
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    fn from_float(value: f64) -> Self {
        // 2^63 itself is out of range, hence the strict upper bound.
        if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
            ProductKey::Integer(value as i64)
        } else {
            ProductKey::Float(value)
        }
    }
}

#[inline]
fn float_bits(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

impl PartialEq for ProductKey {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ProductKey::Integer(a), ProductKey::Integer(b)) => a == b,
            (ProductKey::Float(a), ProductKey::Float(b)) => float_bits(*a) == float_bits(*b),
            (ProductKey::Boolean(a), ProductKey::Boolean(b)) => a == b,
            (ProductKey::Text(a), ProductKey::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for ProductKey {}

impl Hash for ProductKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            ProductKey::Integer(v) => v.hash(state),
            ProductKey::Float(v) => float_bits(*v).hash(state),
            ProductKey::Boolean(v) => v.hash(state),
            ProductKey::Text(v) => v.hash(state),
        }
    }
}

impl fmt::Display for ProductKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductKey::Integer(v) => write!(f, "{}", v),
            ProductKey::Float(v) => write!(f, "{}", v),
            ProductKey::Boolean(v) => write!(f, "{}", v),
            ProductKey::Text(v) => f.write_str(v),
        }
    }
}

impl From<&str> for ProductKey {
    fn from(value: &str) -> Self {
        ProductKey::Text(value.to_string())
    }
}

impl From<String> for ProductKey {
    fn from(value: String) -> Self {
        ProductKey::Text(value)
    }
}

impl From<i64> for ProductKey {
    fn from(value: i64) -> Self {
        ProductKey::Integer(value)
    }
}

// =============================================================================
// Sale Record
// =============================================================================

/// One validated line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    /// Product identifier (grouping key).
    pub product: ProductKey,
    /// Units sold.
    pub quantity: Numeric,
    /// Unit price.
    pub price: Numeric,
}

impl SaleRecord {
    pub fn new(
        product: impl Into<ProductKey>,
        quantity: impl Into<Numeric>,
        price: impl Into<Numeric>,
    ) -> Self {
        Self {
            product: product.into(),
            quantity: quantity.into(),
            price: price.into(),
        }
    }

    /// Line total before grouping: `quantity × price`.
    ///
    /// ## Example
    /// ```rust
    /// use sales_core::{Numeric, SaleRecord};
    ///
    /// let record = SaleRecord::new("A", 2, 10);
    /// assert_eq!(record.line_total().unwrap(), Numeric::Int(20));
    /// ```
    ///
    /// ## Errors
    /// `UnexpectedFailure` if an integer product overflows `i64`.
    pub fn line_total(&self) -> DataResult<Numeric> {
        self.quantity.checked_mul(self.price).ok_or_else(|| {
            DataProcessingError::UnexpectedFailure(format!(
                "line total overflows for product {}: {} x {}",
                self.product, self.quantity, self.price
            ))
        })
    }
}

// =============================================================================
// Product Summary
// =============================================================================

/// Aggregated figures for one distinct product.
///
/// Field order here is the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub product: ProductKey,
    /// Sum of line totals.
    pub total: Numeric,
    /// Sum of quantities.
    pub quantity: Numeric,
    /// `total / quantity`, or `0.0` when no units were sold.
    pub average_price: f64,
}

impl ProductSummary {
    /// Builds a summary from group sums, deriving the average price.
    pub fn from_totals(product: ProductKey, total: Numeric, quantity: Numeric) -> Self {
        Self {
            product,
            total,
            quantity,
            average_price: total.ratio(quantity),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    #[test]
    fn test_product_key_from_json() {
        assert_eq!(ProductKey::from_json(&json!("A")), Some(ProductKey::from("A")));
        assert_eq!(ProductKey::from_json(&json!(1.5)), Some(ProductKey::Float(1.5)));
        assert_eq!(ProductKey::from_json(&json!(1.0)), Some(ProductKey::Integer(1)));
        assert_eq!(ProductKey::from_json(&json!(-0.0)), Some(ProductKey::Integer(0)));
        assert_eq!(ProductKey::from_json(&json!(1e19)), Some(ProductKey::Float(1e19)));
        assert_eq!(ProductKey::from_json(&json!(true)), Some(ProductKey::Boolean(true)));
        assert_eq!(ProductKey::from_json(&json!(["A"])), None);
        assert_eq!(ProductKey::from_json(&json!({"sku": "A"})), None);
    }

    #[test]
    fn test_product_key_equality() {
        assert_ne!(ProductKey::from("1"), ProductKey::Integer(1));
        assert_eq!(ProductKey::Float(0.0), ProductKey::Float(-0.0));
        assert_ne!(ProductKey::Float(1.0), ProductKey::Integer(1));

        let mut keys = HashSet::new();
        keys.insert(ProductKey::Float(0.0));
        keys.insert(ProductKey::Float(-0.0));
        keys.insert(ProductKey::from("A"));
        keys.insert(ProductKey::from("A".to_string()));
        assert_eq!(keys.len(), 2);
    }

    #[test]
    fn test_line_total() {
        assert_eq!(SaleRecord::new("A", 3, 15).line_total().unwrap(), Numeric::Int(45));
        assert_eq!(
            SaleRecord::new("A", 2, 1.25).line_total().unwrap(),
            Numeric::Float(2.5)
        );

        let err = SaleRecord::new("A", i64::MAX, 2).line_total().unwrap_err();
        assert!(matches!(err, DataProcessingError::UnexpectedFailure(_)));
    }

    #[test]
    fn test_summary_average_price() {
        let summary =
            ProductSummary::from_totals(ProductKey::from("A"), Numeric::Int(30), Numeric::Int(3));
        assert_eq!(summary.average_price, 10.0);

        let summary =
            ProductSummary::from_totals(ProductKey::from("A"), Numeric::Int(0), Numeric::Int(0));
        assert_eq!(summary.average_price, 0.0);
    }

    #[test]
    fn test_summary_serialized_key_order() {
        let summary =
            ProductSummary::from_totals(ProductKey::from("B"), Numeric::Int(45), Numeric::Int(3));
        assert_eq!(
            serde_json::to_string(&summary).unwrap(),
            r#"{"product":"B","total":45,"quantity":3,"average_price":15.0}"#
        );
    }
}
