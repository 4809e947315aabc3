//! Cart domain types and their wire format.
//!
//! A cart is stored in Redis as a single JSON blob under one key; these
//! structs ARE the serialization contract. Field names are load-bearing:
//! `user_id`, `items`, `product_name`, `quantity`, `is_active`. Renaming any
//! of them breaks every blob already in the store.

use serde::{Deserialize, Serialize};

/// A shopping cart, serialized wholesale as one Redis value.
///
/// Any mutation is a full read-modify-write of the blob. Decoding is total:
/// a blob written before the visibility flag existed decodes as active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    /// Caller-supplied user id. Not validated against the user store.
    pub user_id: String,
    /// Ordered line items.
    pub items: Vec<CartItem>,
    /// Visibility flag. False means soft-deleted.
    #[serde(default = "active_by_default")]
    pub is_active: bool,
}

/// One line item in a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Name of the product.
    pub product_name: String,
    /// Number of units.
    pub quantity: u32,
}

const fn active_by_default() -> bool {
    true
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_cart() -> Cart {
        Cart {
            user_id: "u1".to_owned(),
            items: vec![CartItem {
                product_name: "plantain chips".to_owned(),
                quantity: 2,
            }],
            is_active: true,
        }
    }

    #[test]
    fn test_wire_field_names() {
        let value = serde_json::to_value(sample_cart()).unwrap();
        assert_eq!(value["user_id"], "u1");
        assert_eq!(value["items"][0]["product_name"], "plantain chips");
        assert_eq!(value["items"][0]["quantity"], 2);
        assert_eq!(value["is_active"], true);
    }

    #[test]
    fn test_roundtrip() {
        let cart = sample_cart();
        let json = serde_json::to_string(&cart).unwrap();
        let decoded: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, cart);
    }

    #[test]
    fn test_legacy_blob_without_flag_decodes_active() {
        let legacy = r#"{"user_id":"u1","items":[]}"#;
        let decoded: Cart = serde_json::from_str(legacy).unwrap();
        assert!(decoded.is_active);
        assert!(decoded.items.is_empty());
    }

    #[test]
    fn test_inactive_blob_roundtrip() {
        let json = r#"{"user_id":"u2","items":[],"is_active":false}"#;
        let decoded: Cart = serde_json::from_str(json).unwrap();
        assert!(!decoded.is_active);
    }
}
