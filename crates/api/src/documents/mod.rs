//! Document operations for MongoDB, the document entity store.
//!
//! ## Collections
//!
//! - `reviews` - Product reviews with the `active` soft-delete flag
//!
//! No schema management is needed; collections are created on first insert.

pub mod reviews;

use mongodb::{Client, Database};
use secrecy::ExposeSecret;
use thiserror::Error;

pub use reviews::ReviewRepository;

/// Errors that can occur during document store operations.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Driver error from mongodb.
    #[error("document store error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// Data in the store is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// The supplied id is not a syntactically valid document id.
    ///
    /// Distinct from `NotFound`: a malformed id is a caller mistake and
    /// surfaces as 400, never 404.
    #[error("malformed document id: {0}")]
    MalformedId(String),

    /// Requested document was not found (or is not visible).
    #[error("not found")]
    NotFound,
}

/// Connect to MongoDB and select the named database.
///
/// # Arguments
///
/// * `mongo_url` - MongoDB connection string (wrapped in `SecretString`)
/// * `database` - Name of the database to use
///
/// # Errors
///
/// Returns `mongodb::error::Error` if the connection string is invalid.
pub async fn connect(
    mongo_url: &secrecy::SecretString,
    database: &str,
) -> Result<Database, mongodb::error::Error> {
    let client = Client::with_uri_str(mongo_url.expose_secret()).await?;
    Ok(client.database(database))
}
