//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                  - Liveness check
//! GET  /health/ready            - Readiness check (all three stores)
//!
//! # Users (PostgreSQL)
//! POST   /users/                - Create user (400 on duplicate email)
//! GET    /users/                - List active users
//! GET    /users/{id}            - Get active user (404 if missing/inactive)
//! DELETE /users/{id}            - Soft-delete user (404 if missing)
//! PATCH  /users/{id}/restore    - Restore user (always 200; body carries the outcome)
//!
//! # Reviews (MongoDB)
//! POST   /reviews/              - Create review
//! GET    /reviews/              - List active reviews
//! GET    /reviews/{id}          - Get active review (400 bad id; 404 missing/inactive)
//! DELETE /reviews/{id}          - Soft-delete review (404 if missing or already inactive)
//! PATCH  /reviews/{id}?content= - Update content of an active review
//!
//! # Carts (Redis)
//! POST   /cart/{user_id}        - Save cart (replaces the whole blob, reactivates)
//! GET    /cart/{user_id}        - Get active cart (404 missing/inactive)
//! DELETE /cart/{user_id}        - Soft-delete cart (404 if missing)
//! ```

pub mod carts;
pub mod reviews;
pub mod users;

use axum::Router;
use serde::Serialize;

use crate::state::AppState;

/// A plain confirmation message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Create the full application router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/users", users::routes())
        .nest("/reviews", reviews::routes())
        .nest("/cart", carts::routes())
}
