#![forbid(unsafe_code)]

use crate::ids::{BranchId, CategoryId, ItemId};
use serde::{Deserialize, Serialize};

/// Direction of a main-stock mutation as recorded in the ledger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Add,
    Remove,
}

impl ChangeType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "add" => Some(Self::Add),
            "remove" => Some(Self::Remove),
            _ => None,
        }
    }
}

impl std::fmt::Display for ChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub category_id: CategoryId,
    pub category_name: String,
    pub image: Option<String>,
}

/// Item row as nested under its category detail (the category is implied by
/// context, so it carries no category fields).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSummary {
    pub item_id: ItemId,
    pub item_name: String,
    pub unit: String,
    pub amount: i64,
    pub image: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDetail {
    pub category_id: CategoryId,
    pub category_name: String,
    pub image: Option<String>,
    pub items: Vec<ItemSummary>,
}

/// Item joined with its category name, the shape catalog listings return.
///
/// `amount` is the legacy item-level quantity the audited direct update
/// (`/item/{id}/update_amount`) targets; branch and main stock live in their
/// own tables.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemWithCategory {
    pub item_id: ItemId,
    pub item_name: String,
    pub unit: String,
    pub amount: i64,
    pub category_name: String,
    pub image: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub branch_id: BranchId,
    pub branch_name: String,
    pub location: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MainStockLevel {
    pub item_id: ItemId,
    pub item_name: String,
    pub unit: String,
    pub category_name: String,
    pub quantity: i64,
}

/// Per-branch stock row joined with item metadata.
///
/// `category_name` is `None` when the listing was filtered by a category id
/// that does not exist; the filter endpoint deliberately does not 404.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchStockLevel {
    pub item_id: ItemId,
    pub item_name: String,
    pub unit: String,
    pub quantity: i64,
    pub category_name: Option<String>,
}

/// Immutable branch-scope ledger row: one per audited direct amount update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryChange {
    pub change_id: i64,
    pub transaction_time: String,
    pub item_id: ItemId,
    pub item_name: String,
    pub category_name: String,
    pub amount_before_change: i64,
    pub amount_after_change: i64,
}

/// Immutable main-scope ledger row: one per restock or transfer-out.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MainStockTransaction {
    pub transaction_id: i64,
    pub transaction_time: String,
    pub item_id: ItemId,
    pub item_name: String,
    pub category_name: String,
    pub change_type: ChangeType,
    pub amount: i64,
}

/// Final balances after a successful main-to-branch transfer, read back inside
/// the same transaction that moved the stock.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferOutcome {
    pub branch_id: BranchId,
    pub item_id: ItemId,
    pub change_amount: i64,
    pub main_quantity: i64,
    pub branch_quantity: i64,
}

/// Before/after pair recorded by the audited direct item update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditedUpdate {
    pub item_id: ItemId,
    pub amount_before: i64,
    pub amount_after: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_type_wire_form_is_lowercase() {
        assert_eq!(ChangeType::Add.as_str(), "add");
        assert_eq!(ChangeType::parse("remove"), Some(ChangeType::Remove));
        assert_eq!(ChangeType::parse("ADD"), None);
        assert_eq!(
            serde_json::to_string(&ChangeType::Remove).expect("serialize"),
            "\"remove\""
        );
    }
}
