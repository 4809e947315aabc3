//! Integration tests for the cart endpoints (key-value store).
//!
//! These tests require the API server plus Redis.
//! Run with: cargo test -p multibase-integration-tests -- --ignored

use reqwest::StatusCode;
use serde_json::{Value, json};

use multibase_integration_tests::{TestContext, unique_user_id};

async fn save_cart(ctx: &TestContext, user_id: &str, items: Value) -> Value {
    let resp = ctx
        .client
        .post(ctx.url(&format!("/cart/{user_id}")))
        .json(&json!({ "items": items }))
        .send()
        .await
        .expect("Failed to save cart");

    assert_eq!(resp.status(), StatusCode::OK);
    resp.json().await.expect("Failed to parse cart")
}

#[tokio::test]
#[ignore = "Requires running API server and backing stores"]
async fn test_saved_cart_is_active_and_echoed_back() {
    let ctx = TestContext::new();
    let user_id = unique_user_id();

    let cart = save_cart(
        &ctx,
        &user_id,
        json!([{ "product_name": "plantain chips", "quantity": 2 }]),
    )
    .await;

    assert_eq!(cart["user_id"], user_id);
    assert_eq!(cart["is_active"], true);
    assert_eq!(cart["items"][0]["product_name"], "plantain chips");
    assert_eq!(cart["items"][0]["quantity"], 2);
}

#[tokio::test]
#[ignore = "Requires running API server and backing stores"]
async fn test_get_missing_cart_is_404() {
    let ctx = TestContext::new();

    let resp = ctx
        .client
        .get(ctx.url(&format!("/cart/{}", unique_user_id())))
        .send()
        .await
        .expect("Failed to get cart");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running API server and backing stores"]
async fn test_soft_deleted_cart_reads_as_missing() {
    let ctx = TestContext::new();
    let user_id = unique_user_id();
    save_cart(&ctx, &user_id, json!([])).await;

    let resp = ctx
        .client
        .delete(ctx.url(&format!("/cart/{user_id}")))
        .send()
        .await
        .expect("Failed to delete cart");
    assert_eq!(resp.status(), StatusCode::OK);

    // The blob is still in Redis, but reads can't tell it from absent.
    let resp = ctx
        .client
        .get(ctx.url(&format!("/cart/{user_id}")))
        .send()
        .await
        .expect("Failed to get cart");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running API server and backing stores"]
async fn test_second_soft_delete_is_404() {
    // The first delete leaves an inactive blob behind; the second finds it
    // already inactive and reports 404, same as if the key were absent.
    let ctx = TestContext::new();
    let user_id = unique_user_id();
    save_cart(&ctx, &user_id, json!([])).await;

    let resp = ctx
        .client
        .delete(ctx.url(&format!("/cart/{user_id}")))
        .send()
        .await
        .expect("Failed to delete cart");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = ctx
        .client
        .delete(ctx.url(&format!("/cart/{user_id}")))
        .send()
        .await
        .expect("Failed to re-delete cart");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires running API server and backing stores"]
async fn test_save_resurrects_soft_deleted_cart() {
    // Save never reads the prior blob, so it silently undoes a soft delete.
    let ctx = TestContext::new();
    let user_id = unique_user_id();
    save_cart(
        &ctx,
        &user_id,
        json!([{ "product_name": "a", "quantity": 2 }]),
    )
    .await;

    ctx.client
        .delete(ctx.url(&format!("/cart/{user_id}")))
        .send()
        .await
        .expect("Failed to delete cart");

    let cart = save_cart(&ctx, &user_id, json!([])).await;
    assert_eq!(cart["is_active"], true);
    assert_eq!(cart["items"], json!([]));

    let resp = ctx
        .client
        .get(ctx.url(&format!("/cart/{user_id}")))
        .send()
        .await
        .expect("Failed to get cart");
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running API server and backing stores"]
async fn test_save_replaces_items_wholesale() {
    let ctx = TestContext::new();
    let user_id = unique_user_id();
    save_cart(
        &ctx,
        &user_id,
        json!([
            { "product_name": "a", "quantity": 1 },
            { "product_name": "b", "quantity": 2 }
        ]),
    )
    .await;

    let cart = save_cart(
        &ctx,
        &user_id,
        json!([{ "product_name": "c", "quantity": 3 }]),
    )
    .await;

    let items = cart["items"].as_array().expect("items array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["product_name"], "c");
}
