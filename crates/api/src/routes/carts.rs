//! Cart route handlers (key-value store).

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::post,
};
use serde::Deserialize;

use super::MessageResponse;
use crate::error::AppError;
use crate::kv::CartStore;
use crate::models::cart::{Cart, CartItem};
use crate::state::AppState;

/// Create the cart routes router.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/{user_id}",
        post(save_cart).get(get_cart).delete(delete_cart),
    )
}

/// Request body for saving a cart.
#[derive(Debug, Deserialize)]
pub struct SaveCartRequest {
    pub items: Vec<CartItem>,
}

/// Save a user's cart. The stored blob is replaced wholesale and comes
/// back active, even if the previous cart was soft-deleted.
///
/// The response body is the full stored blob.
///
/// # Errors
///
/// Returns 500 if the store write fails.
pub async fn save_cart(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(body): Json<SaveCartRequest>,
) -> Result<Json<Cart>, AppError> {
    let cart = CartStore::new(state.kv().clone())
        .save(&user_id, body.items)
        .await?;

    Ok(Json(cart))
}

/// Get a user's cart.
///
/// # Errors
///
/// Returns 404 if no cart exists for the user or it is soft-deleted.
pub async fn get_cart(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Cart>, AppError> {
    let cart = CartStore::new(state.kv().clone()).get(&user_id).await?;

    Ok(Json(cart))
}

/// Soft-delete a user's cart.
///
/// # Errors
///
/// Returns 404 if no cart exists for the user or it is already
/// soft-deleted.
pub async fn delete_cart(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    CartStore::new(state.kv().clone())
        .soft_delete(&user_id)
        .await?;

    Ok(Json(MessageResponse::new("cart soft-deleted")))
}
