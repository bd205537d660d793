#![forbid(unsafe_code)]

use super::require_amount;
use crate::error::ApiError;
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use depot_core::ids::ItemId;
use depot_core::model::InventoryChange;
use depot_storage::AuditedUpdateRequest;
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Debug, Deserialize)]
pub(crate) struct AmountBody {
    amount: Option<i64>,
}

/// Audited direct amount set on the legacy item-level quantity. An unknown
/// item is a silent no-op (zero rows to update, nothing logged), which is the
/// behavior this endpoint has always had.
pub(crate) async fn update_item_amount(
    State(state): State<AppState>,
    Path(item_id): Path<i64>,
    Json(body): Json<AmountBody>,
) -> Result<Json<Value>, ApiError> {
    let new_amount = require_amount(body.amount, "amount")?;
    let item_id = ItemId::new(item_id);

    let updated = state
        .with_store(move |store| {
            store.update_item_amount_audited(AuditedUpdateRequest {
                item_id,
                new_amount,
            })
        })
        .await?;

    if let Some(update) = &updated {
        tracing::info!(
            item_id = item_id.get(),
            before = update.amount_before,
            after = update.amount_after,
            "audited amount update"
        );
    }

    Ok(Json(json!({
        "success": true,
        "message": format!("Amount updated for item {item_id}."),
    })))
}

pub(crate) async fn transaction_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<InventoryChange>>, ApiError> {
    let history = state
        .with_store(|store| store.list_inventory_changes())
        .await?;
    Ok(Json(history))
}
