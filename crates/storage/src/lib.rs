#![forbid(unsafe_code)]

mod store;

pub use store::{
    AuditedUpdateRequest, NewBranch, NewCategory, NewItem, RestockRequest, SetBranchAmountRequest,
    SqliteStore, StoreError, TransferRequest,
};
