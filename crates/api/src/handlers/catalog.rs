#![forbid(unsafe_code)]

use crate::error::ApiError;
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use depot_core::ids::{CategoryId, ItemId};
use depot_core::model::{Category, CategoryDetail, ItemWithCategory};

pub(crate) async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>, ApiError> {
    let categories = state.with_store(|store| store.list_categories()).await?;
    Ok(Json(categories))
}

pub(crate) async fn list_items(
    State(state): State<AppState>,
) -> Result<Json<Vec<ItemWithCategory>>, ApiError> {
    let items = state
        .with_store(|store| store.list_items_with_category())
        .await?;
    Ok(Json(items))
}

pub(crate) async fn category_detail(
    State(state): State<AppState>,
    Path(category_id): Path<i64>,
) -> Result<Json<CategoryDetail>, ApiError> {
    let detail = state
        .with_store(move |store| store.category_detail(CategoryId::new(category_id)))
        .await?;
    Ok(Json(detail))
}

/// `{item}` is an item id when it parses as an integer, otherwise a
/// case-insensitive item name.
pub(crate) async fn item_detail(
    State(state): State<AppState>,
    Path((category_id, item)): Path<(i64, String)>,
) -> Result<Json<ItemWithCategory>, ApiError> {
    let category_id = CategoryId::new(category_id);
    let found = state
        .with_store(move |store| match item.parse::<i64>() {
            Ok(item_id) => store.item_in_category_by_id(category_id, ItemId::new(item_id)),
            Err(_) => store.item_in_category_by_name(category_id, &item),
        })
        .await?;
    Ok(Json(found))
}
