#![forbid(unsafe_code)]

use super::require_amount;
use crate::error::ApiError;
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use depot_core::ids::{BranchId, CategoryId, ItemId};
use depot_core::model::{Branch, BranchStockLevel};
use depot_storage::{SetBranchAmountRequest, TransferRequest};
use serde::Deserialize;
use serde_json::{Value, json};

pub(crate) async fn list_branches(
    State(state): State<AppState>,
) -> Result<Json<Vec<Branch>>, ApiError> {
    let branches = state.with_store(|store| store.list_branches()).await?;
    Ok(Json(branches))
}

pub(crate) async fn branch_detail(
    State(state): State<AppState>,
    Path(branch_id): Path<i64>,
) -> Result<Json<Branch>, ApiError> {
    let branch = state
        .with_store(move |store| store.branch_detail(BranchId::new(branch_id)))
        .await?;
    Ok(Json(branch))
}

pub(crate) async fn branch_items(
    State(state): State<AppState>,
    Path(branch_id): Path<i64>,
) -> Result<Json<Vec<BranchStockLevel>>, ApiError> {
    let levels = state
        .with_store(move |store| store.list_branch_stock(BranchId::new(branch_id)))
        .await?;
    Ok(Json(levels))
}

pub(crate) async fn branch_items_by_category(
    State(state): State<AppState>,
    Path((branch_id, category_id)): Path<(i64, i64)>,
) -> Result<Json<Vec<BranchStockLevel>>, ApiError> {
    let levels = state
        .with_store(move |store| {
            store.list_branch_stock_by_category(
                BranchId::new(branch_id),
                CategoryId::new(category_id),
            )
        })
        .await?;
    Ok(Json(levels))
}

#[derive(Debug, Deserialize)]
pub(crate) struct TransferBody {
    change_amount: Option<i64>,
}

pub(crate) async fn request_from_main(
    State(state): State<AppState>,
    Path((branch_id, item_id)): Path<(i64, i64)>,
    Json(body): Json<TransferBody>,
) -> Result<Json<Value>, ApiError> {
    let change_amount = require_amount(body.change_amount, "change_amount")?;
    let branch_id = BranchId::new(branch_id);
    let item_id = ItemId::new(item_id);

    let outcome = state
        .with_store(move |store| {
            store.transfer_to_branch(TransferRequest {
                branch_id,
                item_id,
                change_amount,
            })
        })
        .await?;

    tracing::info!(
        branch_id = branch_id.get(),
        item_id = item_id.get(),
        change_amount,
        main_quantity = outcome.main_quantity,
        "transferred from main stock"
    );
    Ok(Json(json!({
        "success": true,
        "message": format!(
            "Transferred {change_amount} of item {item_id} from main stock to branch {branch_id}."
        ),
        "branch_id": outcome.branch_id,
        "item_id": outcome.item_id,
        "change_amount": outcome.change_amount,
        "main_stock_quantity": outcome.main_quantity,
        "branch_stock_quantity": outcome.branch_quantity,
    })))
}

#[derive(Debug, Deserialize)]
pub(crate) struct BranchAmountBody {
    new_amount: Option<i64>,
}

pub(crate) async fn update_branch_item(
    State(state): State<AppState>,
    Path((branch_id, item_id)): Path<(i64, i64)>,
    Json(body): Json<BranchAmountBody>,
) -> Result<Json<Value>, ApiError> {
    let new_amount = require_amount(body.new_amount, "new_amount")?;
    let branch_id = BranchId::new(branch_id);
    let item_id = ItemId::new(item_id);

    state
        .with_store(move |store| {
            store.set_branch_amount(SetBranchAmountRequest {
                branch_id,
                item_id,
                new_amount,
            })
        })
        .await?;

    Ok(Json(json!({
        "success": true,
        "message": format!("Amount updated for item {item_id} at branch {branch_id}."),
    })))
}
