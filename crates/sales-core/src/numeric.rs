//! # Numeric Module
//!
//! Provides the `Numeric` type for quantities, prices and totals.
//!
//! ## Why Not Just f64?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  INTEGER INPUTS STAY INTEGER                                            │
//! │                                                                         │
//! │  Records usually carry whole units and whole-cent prices:              │
//! │    {"quantity": 2, "price": 10}                                         │
//! │                                                                         │
//! │  Int × Int  → Int   (checked, overflow is an error)                    │
//! │  Int + Int  → Int   (checked)                                          │
//! │  Int ⊕ Float → Float                                                   │
//! │                                                                         │
//! │  Totals of integer columns are exact; only genuinely fractional input  │
//! │  ever goes through floating point.                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use sales_core::numeric::Numeric;
//!
//! let qty = Numeric::Int(3);
//! let price = Numeric::Int(15);
//! assert_eq!(qty.checked_mul(price), Some(Numeric::Int(45)));
//!
//! let half = Numeric::Float(0.5);
//! assert_eq!(qty.checked_mul(half), Some(Numeric::Float(1.5)));
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

// =============================================================================
// Numeric Type
// =============================================================================

/// A number read from a sales record.
///
/// ## Design Decisions
/// - **Two variants**: JSON integers map to `Int`, everything else to `Float`
/// - **Untagged serde**: serializes as a bare JSON number
/// - **No `Eq`**: the float variant rules it out; tests compare exact values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Numeric {
    /// Whole number, the common case for quantities.
    Int(i64),
    /// Fractional number, or an integer too large for `i64`.
    Float(f64),
}

impl Numeric {
    /// Reads a JSON value as a number.
    ///
    /// Returns `None` for anything that is not a JSON number. Booleans are
    /// not numbers here, and neither are numeric-looking strings.
    ///
    /// ## Example
    /// ```rust
    /// use sales_core::numeric::Numeric;
    /// use serde_json::json;
    ///
    /// assert_eq!(Numeric::from_json(&json!(2)), Some(Numeric::Int(2)));
    /// assert_eq!(Numeric::from_json(&json!(2.5)), Some(Numeric::Float(2.5)));
    /// assert_eq!(Numeric::from_json(&json!("2")), None);
    /// assert_eq!(Numeric::from_json(&json!(true)), None);
    /// ```
    pub fn from_json(value: &Value) -> Option<Self> {
        let Value::Number(number) = value else {
            return None;
        };
        if let Some(int) = number.as_i64() {
            return Some(Numeric::Int(int));
        }
        number.as_f64().map(Numeric::Float)
    }

    /// Returns zero (integer).
    #[inline]
    pub const fn zero() -> Self {
        Numeric::Int(0)
    }

    /// Checks if the value is zero. `-0.0` counts as zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        match *self {
            Numeric::Int(v) => v == 0,
            Numeric::Float(v) => v == 0.0,
        }
    }

    /// Checks if the value is strictly below zero.
    ///
    /// `-0.0` is not negative, and neither is NaN.
    #[inline]
    pub fn is_negative(&self) -> bool {
        match *self {
            Numeric::Int(v) => v < 0,
            Numeric::Float(v) => v < 0.0,
        }
    }

    /// Returns the value as `f64` (lossy above 2^53 for integers).
    #[inline]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Numeric::Int(v) => v as f64,
            Numeric::Float(v) => v,
        }
    }

    /// Adds two values. `None` only on integer overflow.
    pub fn checked_add(self, other: Numeric) -> Option<Numeric> {
        match (self, other) {
            (Numeric::Int(a), Numeric::Int(b)) => a.checked_add(b).map(Numeric::Int),
            (a, b) => Some(Numeric::Float(a.as_f64() + b.as_f64())),
        }
    }

    /// Multiplies two values. `None` only on integer overflow.
    ///
    /// ## Example
    /// ```rust
    /// use sales_core::numeric::Numeric;
    ///
    /// assert_eq!(Numeric::Int(i64::MAX).checked_mul(Numeric::Int(2)), None);
    /// ```
    pub fn checked_mul(self, other: Numeric) -> Option<Numeric> {
        match (self, other) {
            (Numeric::Int(a), Numeric::Int(b)) => a.checked_mul(b).map(Numeric::Int),
            (a, b) => Some(Numeric::Float(a.as_f64() * b.as_f64())),
        }
    }

    /// Divides `self` by `divisor`, yielding `0.0` when the divisor is zero.
    ///
    /// This is how an average price is taken: a product with no units sold
    /// has an average price of zero, not an error.
    ///
    /// ## Example
    /// ```rust
    /// use sales_core::numeric::Numeric;
    ///
    /// assert_eq!(Numeric::Int(30).ratio(Numeric::Int(3)), 10.0);
    /// assert_eq!(Numeric::Int(0).ratio(Numeric::Int(0)), 0.0);
    /// ```
    pub fn ratio(self, divisor: Numeric) -> f64 {
        if divisor.is_zero() {
            return 0.0;
        }
        self.as_f64() / divisor.as_f64()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeric::Int(v) => write!(f, "{}", v),
            Numeric::Float(v) => write!(f, "{}", v),
        }
    }
}

impl Default for Numeric {
    fn default() -> Self {
        Numeric::zero()
    }
}

impl From<i64> for Numeric {
    fn from(value: i64) -> Self {
        Numeric::Int(value)
    }
}

impl From<i32> for Numeric {
    fn from(value: i32) -> Self {
        Numeric::Int(value as i64)
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Numeric::Float(value)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
