#![forbid(unsafe_code)]

use depot_core::ids::{BranchId, CategoryId, ItemId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RestockRequest {
    pub item_id: ItemId,
    pub add_amount: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransferRequest {
    pub branch_id: BranchId,
    pub item_id: ItemId,
    pub change_amount: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SetBranchAmountRequest {
    pub branch_id: BranchId,
    pub item_id: ItemId,
    pub new_amount: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuditedUpdateRequest {
    pub item_id: ItemId,
    pub new_amount: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewCategory {
    pub category_name: String,
    pub image: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewItem {
    pub item_name: String,
    pub unit: String,
    pub amount: i64,
    pub image: Option<String>,
    pub category_id: CategoryId,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewBranch {
    pub branch_name: String,
    pub location: Option<String>,
}
