use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{LedgerError, Result};

// ---------------------------------------------------------------------------
// RawRecord — One sale line from a source feed
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    pub name: String,
    pub unit_price: f64,
    pub sold: u64,
}

impl RawRecord {
    /// Create a record, rejecting a negative or non-finite unit price.
    pub fn new(name: impl Into<String>, unit_price: f64, sold: u64) -> Result<Self> {
        if !unit_price.is_finite() || unit_price < 0.0 {
            return Err(LedgerError::InvalidArgument(format!(
                "unit price must be a non-negative number, got {}",
                unit_price
            )));
        }
        Ok(Self {
            name: name.into(),
            unit_price,
            sold,
        })
    }

    /// `unit_price × sold`.
    pub fn revenue(&self) -> f64 {
        self.unit_price * self.sold as f64
    }

    /// Validate one untyped feed entry.
    ///
    /// `index` is the position of the entry within the source's `products`
    /// array and is reported back in [`LedgerError::InvalidRecord`] together
    /// with the first offending field.
    pub fn from_json(source_name: &str, index: usize, value: &Value) -> Result<Self> {
        let invalid = |field: &'static str, reason: &str| LedgerError::InvalidRecord {
            source_name: source_name.to_string(),
            index,
            field,
            reason: reason.to_string(),
        };

        let obj = value
            .as_object()
            .ok_or_else(|| invalid("record", "is not an object"))?;

        let name = match obj.get("name") {
            None | Some(Value::Null) => return Err(invalid("name", "is missing")),
            Some(Value::String(s)) => s.clone(),
            Some(_) => return Err(invalid("name", "must be a string")),
        };

        let unit_price = match obj.get("unitPrice") {
            None | Some(Value::Null) => return Err(invalid("unitPrice", "is missing")),
            Some(Value::Number(n)) => n
                .as_f64()
                .filter(|p| p.is_finite() && *p >= 0.0)
                .ok_or_else(|| invalid("unitPrice", "must be a non-negative number"))?,
            Some(_) => return Err(invalid("unitPrice", "must be a number")),
        };

        let sold = match obj.get("sold") {
            None | Some(Value::Null) => return Err(invalid("sold", "is missing")),
            Some(Value::Number(n)) => match n.as_u64() {
                Some(s) => s,
                // 3.0 is an integer in JSON terms; 3.5 and -1 are not.
                None => n
                    .as_f64()
                    .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= u64::MAX as f64)
                    .map(|f| f as u64)
                    .ok_or_else(|| invalid("sold", "must be a non-negative integer"))?,
            },
            Some(_) => return Err(invalid("sold", "must be a number")),
        };

        Ok(Self {
            name,
            unit_price,
            sold,
        })
    }
}

// ---------------------------------------------------------------------------
// FeedDocument — Wire shape of one source feed
// ---------------------------------------------------------------------------

/// `{ "products": [...] }` as served by a feed.
///
/// Entries are kept untyped so that each one can be validated individually
/// and reported with its index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedDocument {
    pub products: Vec<Value>,
}
