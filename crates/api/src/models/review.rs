//! Review domain types.

/// A product review (domain type), backed by a MongoDB document.
///
/// The id is the document's `ObjectId` rendered as its 24-character hex
/// string; callers only ever see the string form.
#[derive(Debug, Clone)]
pub struct Review {
    /// Document id as a hex string.
    pub id: String,
    /// Email of the reviewing user. Not checked against the user store;
    /// the two stores are deliberately decoupled.
    pub user_email: String,
    /// Name of the reviewed product.
    pub product_name: String,
    /// Review body. Mutable only while the review is active.
    pub content: String,
    /// Star rating, 1-5 by convention. The range is not enforced.
    pub rating: i32,
    /// Visibility flag. False means soft-deleted.
    pub active: bool,
}
