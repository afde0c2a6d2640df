//! Cart line type.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// One product/quantity pairing held by a shopper's in-progress order.
///
/// A cart holds at most one line per product; quantity is always >= 1 (a
/// decrement to zero removes the line instead).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// The product this line refers to.
    pub product_id: ProductId,
    /// How many units of the product.
    pub quantity: i64,
}

impl CartLine {
    /// Create a new line.
    pub fn new(product_id: ProductId, quantity: i64) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_field_names() {
        let line = CartLine::new(ProductId::new("1"), 2);
        let json = serde_json::to_string(&line).unwrap();
        assert_eq!(json, r#"{"productId":"1","quantity":2}"#);
    }

    #[test]
    fn test_round_trip() {
        let line = CartLine::new(ProductId::new("3"), 5);
        let json = serde_json::to_string(&line).unwrap();
        let back: CartLine = serde_json::from_str(&json).unwrap();
        assert_eq!(back, line);
    }
}
