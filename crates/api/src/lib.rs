#![forbid(unsafe_code)]

pub mod config;
mod error;
mod handlers;
mod state;

pub use error::ApiError;
pub use state::AppState;

use axum::Router;
use axum::routing::{get, put};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health))
        .route("/api/v1/category/", get(handlers::catalog::list_categories))
        .route(
            "/api/v1/category/items/",
            get(handlers::catalog::list_items),
        )
        .route(
            "/api/v1/category/{category_id}",
            get(handlers::catalog::category_detail),
        )
        .route(
            "/api/v1/category/{category_id}/{item}",
            get(handlers::catalog::item_detail),
        )
        .route(
            "/api/v1/item/{item_id}/update_amount",
            put(handlers::audit::update_item_amount).patch(handlers::audit::update_item_amount),
        )
        .route(
            "/api/v1/transaction_history",
            get(handlers::audit::transaction_history),
        )
        .route("/api/v1/branch/", get(handlers::branches::list_branches))
        .route(
            "/api/v1/branch/{branch_id}",
            get(handlers::branches::branch_detail),
        )
        .route(
            "/api/v1/branch/{branch_id}/items",
            get(handlers::branches::branch_items),
        )
        .route(
            "/api/v1/branch/{branch_id}/category/{category_id}/items",
            get(handlers::branches::branch_items_by_category),
        )
        .route(
            "/api/v1/branch/{branch_id}/item/{item_id}/request_from_main",
            put(handlers::branches::request_from_main)
                .patch(handlers::branches::request_from_main),
        )
        .route(
            "/api/v1/branch/{branch_id}/item/{item_id}/update_amount",
            put(handlers::branches::update_branch_item)
                .patch(handlers::branches::update_branch_item),
        )
        .route(
            "/api/v1/main_stock/items",
            get(handlers::main_stock::list_main_stock),
        )
        .route(
            "/api/v1/main_stock/category/{category_id}",
            get(handlers::main_stock::list_by_category),
        )
        .route(
            "/api/v1/main_stock/{item_id}/add_amount",
            put(handlers::main_stock::restock),
        )
        .route(
            "/api/v1/main_stock/transactions",
            get(handlers::main_stock::transactions),
        )
        .with_state(state)
}
