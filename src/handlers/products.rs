use std::time::Instant;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tracing::{debug, info};

use super::{AppJson, AppPath};
use crate::{
    error::AppResult,
    models::{Product, ProductId, ProductPayload},
    AppState,
};

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    let start = Instant::now();
    let products = state.store.read().await.list();

    info!(
        count = products.len(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Listed products"
    );

    Json(products)
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    AppPath(id): AppPath<ProductId>,
) -> AppResult<Json<Product>> {
    let product = state
        .store
        .read()
        .await
        .get(id)
        .cloned()
        .inspect_err(|err| debug!(id, %err, "Product lookup failed"))?;

    info!(id, "Fetched product");
    Ok(Json(product))
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_product(
    State(state): State<AppState>,
    AppJson(payload): AppJson<ProductPayload>,
) -> AppResult<impl IntoResponse> {
    let start = Instant::now();
    let product = state
        .store
        .write()
        .await
        .create(&payload)
        .inspect_err(|err| debug!(%err, "Rejected product create"))?;

    info!(
        id = product.id,
        name = %product.name,
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Created product"
    );

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, product.location())],
        Json(product),
    ))
}

// ── Update ────────────────────────────────────────────────────────────────────

pub async fn update_product(
    State(state): State<AppState>,
    AppPath(id): AppPath<ProductId>,
    AppJson(payload): AppJson<ProductPayload>,
) -> AppResult<Json<Product>> {
    let start = Instant::now();
    let product = state
        .store
        .write()
        .await
        .update(id, &payload)
        .inspect_err(|err| debug!(id, %err, "Rejected product update"))?;

    info!(
        id,
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Updated product"
    );

    Ok(Json(product))
}

// ── Delete ────────────────────────────────────────────────────────────────────

pub async fn delete_product(
    State(state): State<AppState>,
    AppPath(id): AppPath<ProductId>,
) -> AppResult<StatusCode> {
    state
        .store
        .write()
        .await
        .delete(id)
        .inspect_err(|err| debug!(id, %err, "Rejected product delete"))?;

    info!(id, "Deleted product");
    Ok(StatusCode::NO_CONTENT)
}
