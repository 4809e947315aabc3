//! Review route handlers (document store).

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use super::MessageResponse;
use crate::documents::ReviewRepository;
use crate::error::AppError;
use crate::models::review::Review;
use crate::state::AppState;

/// Create the review routes router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_review).get(list_reviews))
        .route(
            "/{id}",
            get(get_review).delete(delete_review).patch(update_review),
        )
}

/// Request body for creating a review.
#[derive(Debug, Deserialize)]
pub struct CreateReviewRequest {
    pub user_email: String,
    pub product_name: String,
    pub content: String,
    pub rating: i32,
}

/// Query parameters for updating a review's content.
#[derive(Debug, Deserialize)]
pub struct UpdateContentParams {
    pub content: String,
}

/// A review as rendered to callers, id as hex string.
#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub id: String,
    pub user_email: String,
    pub product_name: String,
    pub content: String,
    pub rating: i32,
    pub active: bool,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            user_email: review.user_email,
            product_name: review.product_name,
            content: review.content,
            rating: review.rating,
            active: review.active,
        }
    }
}

/// Create a new review. Always succeeds; nothing is unique here.
///
/// # Errors
///
/// Returns 500 if the document store insert fails.
pub async fn create_review(
    State(state): State<AppState>,
    Json(body): Json<CreateReviewRequest>,
) -> Result<Json<ReviewResponse>, AppError> {
    let review = ReviewRepository::new(state.documents())
        .create(
            &body.user_email,
            &body.product_name,
            &body.content,
            body.rating,
        )
        .await?;

    Ok(Json(review.into()))
}

/// List all active reviews.
///
/// # Errors
///
/// Returns 500 if the document store query fails.
pub async fn list_reviews(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReviewResponse>>, AppError> {
    let reviews = ReviewRepository::new(state.documents())
        .list_active()
        .await?;

    Ok(Json(reviews.into_iter().map(Into::into).collect()))
}

/// Get a single active review by id.
///
/// # Errors
///
/// Returns 400 if the id is not a valid document id.
/// Returns 404 if the review does not exist or is soft-deleted.
pub async fn get_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ReviewResponse>, AppError> {
    let review = ReviewRepository::new(state.documents())
        .get_active(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("review not found".to_owned()))?;

    Ok(Json(review.into()))
}

/// Soft-delete a review.
///
/// # Errors
///
/// Returns 400 if the id is not a valid document id.
/// Returns 404 if the review does not exist — or was already inactive;
/// the two report identically.
pub async fn delete_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    ReviewRepository::new(state.documents())
        .soft_delete(&id)
        .await?;

    Ok(Json(MessageResponse::new("review soft-deleted")))
}

/// Update the content of an active review. The new content arrives as the
/// `content` query parameter.
///
/// # Errors
///
/// Returns 400 if the id is not a valid document id.
/// Returns 404 if no active review matched.
pub async fn update_review(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<UpdateContentParams>,
) -> Result<Json<MessageResponse>, AppError> {
    ReviewRepository::new(state.documents())
        .update_content(&id, &params.content)
        .await?;

    Ok(Json(MessageResponse::new("review updated")))
}
