//! Cart store over Redis.
//!
//! Each cart is one JSON blob under a derived key. There is no partial
//! update: `save` replaces the whole value, and `soft_delete` is a
//! get-then-set of the whole value. The store offers no read-modify-write
//! atomicity, so concurrent writers to the same key race and the last
//! writer wins; callers accept that.

use redis::AsyncCommands;
use redis::aio::ConnectionManager;

use super::KvError;
use crate::models::cart::{Cart, CartItem};

/// Derive the Redis key for a user's cart.
///
/// The exact format is shared with external tooling; do not change it.
#[must_use]
pub fn cart_key(user_id: &str) -> String {
    format!("cart_{user_id}")
}

/// Store for cart blob operations.
#[derive(Clone)]
pub struct CartStore {
    conn: ConnectionManager,
}

impl CartStore {
    /// Create a new cart store over the given connection manager.
    #[must_use]
    pub const fn new(conn: ConnectionManager) -> Self {
        Self { conn }
    }

    /// Save a cart: build a fresh active blob and overwrite the key.
    ///
    /// The prior value is never read, so saving over a soft-deleted cart
    /// silently resurrects it.
    ///
    /// # Errors
    ///
    /// Returns `KvError::Backend` if the write fails.
    /// Returns `KvError::Codec` if the blob cannot be encoded.
    pub async fn save(&self, user_id: &str, items: Vec<CartItem>) -> Result<Cart, KvError> {
        let cart = Cart {
            user_id: user_id.to_owned(),
            items,
            is_active: true,
        };

        let payload = serde_json::to_string(&cart)?;
        let mut conn = self.conn.clone();
        let _: () = conn.set(cart_key(user_id), payload).await?;

        Ok(cart)
    }

    /// Get a user's cart, only if the blob exists and is active.
    ///
    /// A missing key and an inactive blob produce the same `NotFound`;
    /// callers cannot tell the two apart.
    ///
    /// # Errors
    ///
    /// Returns `KvError::NotFound` if the key is absent or the cart is
    /// soft-deleted.
    /// Returns `KvError::Backend` / `KvError::Codec` on store or decode
    /// failures.
    pub async fn get(&self, user_id: &str) -> Result<Cart, KvError> {
        let mut conn = self.conn.clone();
        let payload: Option<String> = conn.get(cart_key(user_id)).await?;

        let cart: Cart = match payload {
            Some(payload) => serde_json::from_str(&payload)?,
            None => return Err(KvError::NotFound),
        };

        if !cart.is_active {
            return Err(KvError::NotFound);
        }

        Ok(cart)
    }

    /// Soft-delete a cart: read the blob, flip `is_active`, write it back.
    ///
    /// An already-inactive blob reports as missing, so a second delete
    /// fails where the first succeeded. Get-then-set without any locking;
    /// a concurrent `save` on the same key can overwrite this write (or be
    /// overwritten by it) wholesale.
    ///
    /// # Errors
    ///
    /// Returns `KvError::NotFound` if no blob exists at the key or the
    /// cart is already soft-deleted.
    /// Returns `KvError::Backend` / `KvError::Codec` on store or codec
    /// failures.
    pub async fn soft_delete(&self, user_id: &str) -> Result<(), KvError> {
        let key = cart_key(user_id);
        let mut conn = self.conn.clone();

        let payload: Option<String> = conn.get(&key).await?;
        let mut cart: Cart = match payload {
            Some(payload) => serde_json::from_str(&payload)?,
            None => return Err(KvError::NotFound),
        };

        if !cart.is_active {
            return Err(KvError::NotFound);
        }

        cart.is_active = false;
        let payload = serde_json::to_string(&cart)?;
        let _: () = conn.set(&key, payload).await?;

        Ok(())
    }
}
