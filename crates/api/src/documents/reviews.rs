//! Review repository for document store operations.
//!
//! Reviews live in the `reviews` collection as typed documents, not loose
//! maps. Soft delete flips `active`; the document itself is never removed.
//! Single-document conditional updates (filter + `$set`) are the only
//! atomicity this store relies on: the update result's counters are what
//! distinguish "found and changed" from "not found or unchanged".

use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

use super::DocumentError;
use crate::models::review::Review;

const COLLECTION: &str = "reviews";

// =============================================================================
// Internal Document Types
// =============================================================================

/// Internal document type for the `reviews` collection.
#[derive(Debug, Serialize, Deserialize)]
struct ReviewDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    user_email: String,
    product_name: String,
    content: String,
    rating: i32,
    active: bool,
}

impl TryFrom<ReviewDocument> for Review {
    type Error = DocumentError;

    fn try_from(document: ReviewDocument) -> Result<Self, Self::Error> {
        let id = document
            .id
            .ok_or_else(|| DocumentError::DataCorruption("document without _id".to_owned()))?;

        Ok(Self {
            id: id.to_hex(),
            user_email: document.user_email,
            product_name: document.product_name,
            content: document.content,
            rating: document.rating,
            active: document.active,
        })
    }
}

/// Parse a caller-supplied id into an `ObjectId`.
fn parse_object_id(id: &str) -> Result<ObjectId, DocumentError> {
    ObjectId::parse_str(id).map_err(|_| DocumentError::MalformedId(id.to_owned()))
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for review document operations.
pub struct ReviewRepository {
    collection: Collection<ReviewDocument>,
}

impl ReviewRepository {
    /// Create a new review repository over the given database handle.
    #[must_use]
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(COLLECTION),
        }
    }

    /// Create a new review. Always succeeds; there is no uniqueness
    /// constraint, and new reviews are always active.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::Database` if the insert fails.
    /// Returns `DocumentError::DataCorruption` if the store does not hand
    /// back an object id for the inserted document.
    pub async fn create(
        &self,
        user_email: &str,
        product_name: &str,
        content: &str,
        rating: i32,
    ) -> Result<Review, DocumentError> {
        let document = ReviewDocument {
            id: None,
            user_email: user_email.to_owned(),
            product_name: product_name.to_owned(),
            content: content.to_owned(),
            rating,
            active: true,
        };

        let result = self.collection.insert_one(&document).await?;
        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            DocumentError::DataCorruption("inserted document id is not an ObjectId".to_owned())
        })?;

        Ok(Review {
            id: id.to_hex(),
            user_email: document.user_email,
            product_name: document.product_name,
            content: document.content,
            rating: document.rating,
            active: document.active,
        })
    }

    /// List all active reviews.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::Database` if the query fails.
    /// Returns `DocumentError::DataCorruption` if a document is invalid.
    pub async fn list_active(&self) -> Result<Vec<Review>, DocumentError> {
        let mut cursor = self.collection.find(doc! { "active": true }).await?;

        let mut reviews = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            reviews.push(document.try_into()?);
        }

        Ok(reviews)
    }

    /// Get a review by id, only if the document exists and is active.
    ///
    /// An inactive document returns `None`, same as a missing one.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::MalformedId` if `id` is not a valid object id.
    /// Returns `DocumentError::Database` if the query fails.
    pub async fn get_active(&self, id: &str) -> Result<Option<Review>, DocumentError> {
        let oid = parse_object_id(id)?;

        let document = self
            .collection
            .find_one(doc! { "_id": oid, "active": true })
            .await?;

        document.map(TryInto::try_into).transpose()
    }

    /// Soft-delete a review: set `active = false`, keep the document.
    ///
    /// The filter matches on `_id` alone, but the check is on
    /// `modified_count`, not `matched_count`: a review that was already
    /// inactive matches without changing and reports as missing. Absent and
    /// already-deleted are indistinguishable to the caller.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::MalformedId` if `id` is not a valid object id.
    /// Returns `DocumentError::NotFound` if nothing was modified.
    /// Returns `DocumentError::Database` for other driver errors.
    pub async fn soft_delete(&self, id: &str) -> Result<(), DocumentError> {
        let oid = parse_object_id(id)?;

        let result = self
            .collection
            .update_one(doc! { "_id": oid }, doc! { "$set": { "active": false } })
            .await?;

        if result.modified_count == 0 {
            return Err(DocumentError::NotFound);
        }

        Ok(())
    }

    /// Update a review's content. Only active reviews are mutable.
    ///
    /// The filter matches `_id` AND `active == true`; the check is on
    /// `matched_count`, so rewriting an active review with identical
    /// content still succeeds.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::MalformedId` if `id` is not a valid object id.
    /// Returns `DocumentError::NotFound` if no active document matched.
    /// Returns `DocumentError::Database` for other driver errors.
    pub async fn update_content(&self, id: &str, content: &str) -> Result<(), DocumentError> {
        let oid = parse_object_id(id)?;

        let result = self
            .collection
            .update_one(
                doc! { "_id": oid, "active": true },
                doc! { "$set": { "content": content } },
            )
            .await?;

        if result.matched_count == 0 {
            return Err(DocumentError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_id_valid() {
        let oid = ObjectId::new();
        let parsed = parse_object_id(&oid.to_hex()).unwrap();
        assert_eq!(parsed, oid);
    }

    #[test]
    fn test_parse_object_id_malformed() {
        let err = parse_object_id("not-a-hex-id").unwrap_err();
        assert!(matches!(err, DocumentError::MalformedId(_)));
    }

    #[test]
    fn test_document_conversion() {
        let oid = ObjectId::new();
        let document = ReviewDocument {
            id: Some(oid),
            user_email: "ana@example.com".to_owned(),
            product_name: "dried mango".to_owned(),
            content: "great".to_owned(),
            rating: 5,
            active: true,
        };

        let review = Review::try_from(document).unwrap();
        assert_eq!(review.id, oid.to_hex());
        assert_eq!(review.rating, 5);
        assert!(review.active);
    }

    #[test]
    fn test_document_conversion_without_id_fails() {
        let document = ReviewDocument {
            id: None,
            user_email: "ana@example.com".to_owned(),
            product_name: "dried mango".to_owned(),
            content: "great".to_owned(),
            rating: 5,
            active: true,
        };

        let err = Review::try_from(document).unwrap_err();
        assert!(matches!(err, DocumentError::DataCorruption(_)));
    }

    #[test]
    fn test_new_document_serializes_without_id() {
        let document = ReviewDocument {
            id: None,
            user_email: "ana@example.com".to_owned(),
            product_name: "dried mango".to_owned(),
            content: "great".to_owned(),
            rating: 4,
            active: true,
        };

        let value = mongodb::bson::to_document(&document).unwrap();
        assert!(!value.contains_key("_id"));
        assert!(value.get_bool("active").unwrap());
    }
}
