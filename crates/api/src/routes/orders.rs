//! Order CRUD endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use common::{OrderId, OrderStatus};
use domain::{CreateOrder, OrderService, OrderView, Page};
use order_store::OrderStore;
use serde::Deserialize;

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<S: OrderStore> {
    pub order_service: OrderService<S>,
}

// -- Request types --

/// Body of POST /orders. Fields are optional so a missing field is
/// reported as a field error, not a deserialization failure.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub customer_id: Option<String>,
    pub product_id: Option<i64>,
    pub quantity: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub size: u32,
}

fn default_page_size() -> u32 {
    10
}

#[derive(Debug, Deserialize)]
pub struct StatusParams {
    pub status: Option<String>,
}

// -- Handlers --

/// POST /orders — validate and persist a new order.
#[tracing::instrument(skip(state, req))]
pub async fn create<S: OrderStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<OrderView>), ApiError> {
    let cmd = CreateOrder::new(req.customer_id, req.product_id, req.quantity);
    let view = state.order_service.create(cmd).await?;

    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /orders/:id — fetch a single order.
#[tracing::instrument(skip(state))]
pub async fn get<S: OrderStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<i64>,
) -> Result<Json<OrderView>, ApiError> {
    let view = state.order_service.get(OrderId::new(id)).await?;
    Ok(Json(view))
}

/// GET /orders?page=&size= — list one page of orders in store order.
#[tracing::instrument(skip(state))]
pub async fn list<S: OrderStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Page<OrderView>>, ApiError> {
    let page = state.order_service.list(params.page, params.size).await?;
    Ok(Json(page))
}

/// PATCH /orders/:id/status?status=VALUE — overwrite the status.
#[tracing::instrument(skip(state))]
pub async fn update_status<S: OrderStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<i64>,
    Query(params): Query<StatusParams>,
) -> Result<Json<OrderView>, ApiError> {
    let raw = params
        .status
        .ok_or(ApiError::MissingParameter("status"))?;
    let status: OrderStatus = raw.parse().map_err(|_| ApiError::InvalidEnumValue {
        param: "status",
        value: raw.clone(),
    })?;

    let view = state
        .order_service
        .update_status(OrderId::new(id), status)
        .await?;

    Ok(Json(view))
}
