#![forbid(unsafe_code)]

use super::require_amount;
use crate::error::ApiError;
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use depot_core::ids::{CategoryId, ItemId};
use depot_core::model::{MainStockLevel, MainStockTransaction};
use depot_storage::RestockRequest;
use serde::Deserialize;
use serde_json::{Value, json};

pub(crate) async fn list_main_stock(
    State(state): State<AppState>,
) -> Result<Json<Vec<MainStockLevel>>, ApiError> {
    let levels = state.with_store(|store| store.list_main_stock()).await?;
    Ok(Json(levels))
}

pub(crate) async fn list_by_category(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
) -> Result<Json<Vec<MainStockLevel>>, ApiError> {
    let levels = state
        .with_store(move |store| store.list_main_stock_by_category(CategoryId::new(category_id)))
        .await?;
    Ok(Json(levels))
}

#[derive(Debug, Deserialize)]
pub(crate) struct RestockBody {
    add_amount: Option<i64>,
}

pub(crate) async fn restock(
    State(state): State<AppState>,
    Path(item_id): Path<i64>,
    Json(body): Json<RestockBody>,
) -> Result<Json<Value>, ApiError> {
    let add_amount = require_amount(body.add_amount, "add_amount")?;
    let item_id = ItemId::new(item_id);

    let quantity = state
        .with_store(move |store| {
            store.restock(RestockRequest {
                item_id,
                add_amount,
            })
        })
        .await?;

    tracing::info!(item_id = item_id.get(), add_amount, quantity, "restocked");
    Ok(Json(json!({
        "success": true,
        "message": format!("Added {add_amount} to main stock for item {item_id}."),
        "item_id": item_id,
        "quantity": quantity,
    })))
}

pub(crate) async fn transactions(
    State(state): State<AppState>,
) -> Result<Json<Vec<MainStockTransaction>>, ApiError> {
    let history = state
        .with_store(|store| store.list_main_stock_transactions())
        .await?;
    Ok(Json(history))
}
