#![forbid(unsafe_code)]

pub mod ids;
pub mod model;

pub use ids::{BranchId, CategoryId, ItemId};
pub use model::ChangeType;
