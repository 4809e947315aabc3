//! Domain types for the three entity stores.
//!
//! These types represent validated domain objects separate from database row
//! and document types. Each entity carries its own visibility flag; reads
//! filter on it, mutations flip it, nothing ever deletes the record.

pub mod cart;
pub mod review;
pub mod user;

pub use cart::{Cart, CartItem};
pub use review::Review;
pub use user::User;
