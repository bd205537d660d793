#![forbid(unsafe_code)]
#![allow(dead_code)] // not every test binary uses every helper

use depot_core::ids::{BranchId, CategoryId, ItemId};
use depot_storage::{NewBranch, NewCategory, NewItem, SqliteStore};
use std::path::PathBuf;

pub fn temp_db(test_name: &str) -> PathBuf {
    let base = std::env::temp_dir();
    let pid = std::process::id();
    let nonce = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let dir = base.join(format!("depot_storage_{test_name}_{pid}_{nonce}"));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    dir.join("depot.db")
}

pub fn open_store(test_name: &str) -> SqliteStore {
    SqliteStore::open(temp_db(test_name)).expect("open store")
}

pub struct Fixture {
    pub category_id: CategoryId,
    pub item_id: ItemId,
    pub branch_id: BranchId,
}

/// One category, one item with a 100-unit main balance, one branch with no
/// branch stock yet.
pub fn seed_basic(store: &mut SqliteStore) -> Fixture {
    let category_id = store
        .insert_category(NewCategory {
            category_name: "Produce".to_string(),
            image: None,
        })
        .expect("insert category");
    let item_id = store
        .insert_item(NewItem {
            item_name: "Tomatoes".to_string(),
            unit: "kg".to_string(),
            amount: 0,
            image: None,
            category_id,
        })
        .expect("insert item");
    let branch_id = store
        .insert_branch(NewBranch {
            branch_name: "Downtown".to_string(),
            location: None,
        })
        .expect("insert branch");
    store.put_main_stock(item_id, 100).expect("seed main stock");

    Fixture {
        category_id,
        item_id,
        branch_id,
    }
}
