#![forbid(unsafe_code)]

mod support;

use depot_core::ids::{BranchId, ItemId};
use depot_core::model::ChangeType;
use depot_storage::{RestockRequest, StoreError, TransferRequest};
use support::seed_basic;

#[test]
fn transfer_moves_stock_and_logs_one_remove_row() {
    let mut store = support::open_store("transfer_moves_stock");
    let fx = seed_basic(&mut store);

    let outcome = store
        .transfer_to_branch(TransferRequest {
            branch_id: fx.branch_id,
            item_id: fx.item_id,
            change_amount: 30,
        })
        .expect("transfer");

    assert_eq!(outcome.main_quantity, 70);
    assert_eq!(outcome.branch_quantity, 30);
    assert_eq!(outcome.change_amount, 30);

    let levels = store.list_main_stock().expect("list main stock");
    assert_eq!(levels.len(), 1);
    assert_eq!(levels[0].quantity, 70);

    let branch_levels = store.list_branch_stock(fx.branch_id).expect("branch stock");
    assert_eq!(branch_levels.len(), 1);
    assert_eq!(branch_levels[0].quantity, 30);

    let ledger = store
        .list_main_stock_transactions()
        .expect("list transactions");
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger[0].change_type, ChangeType::Remove);
    assert_eq!(ledger[0].amount, 30);
    assert_eq!(ledger[0].item_id, fx.item_id);
}

#[test]
fn transfer_into_seeded_branch_row_accumulates() {
    let mut store = support::open_store("transfer_accumulates");
    let fx = seed_basic(&mut store);
    store
        .put_branch_stock(fx.branch_id, fx.item_id, 5)
        .expect("seed branch stock");

    let outcome = store
        .transfer_to_branch(TransferRequest {
            branch_id: fx.branch_id,
            item_id: fx.item_id,
            change_amount: 10,
        })
        .expect("transfer");

    assert_eq!(outcome.main_quantity, 90);
    assert_eq!(outcome.branch_quantity, 15);
}

#[test]
fn insufficient_transfer_leaves_everything_unchanged() {
    let mut store = support::open_store("insufficient_transfer");
    let fx = seed_basic(&mut store);
    store.put_main_stock(fx.item_id, 10).expect("set balance");

    let err = store
        .transfer_to_branch(TransferRequest {
            branch_id: fx.branch_id,
            item_id: fx.item_id,
            change_amount: 30,
        })
        .expect_err("transfer must fail");
    match err {
        StoreError::InsufficientStock {
            available,
            requested,
        } => {
            assert_eq!(available, 10);
            assert_eq!(requested, 30);
        }
        other => panic!("unexpected error: {other}"),
    }

    let levels = store.list_main_stock().expect("list main stock");
    assert_eq!(levels[0].quantity, 10);
    assert!(
        store
            .list_branch_stock(fx.branch_id)
            .expect("branch stock")
            .is_empty()
    );
    assert!(
        store
            .list_main_stock_transactions()
            .expect("transactions")
            .is_empty()
    );
}

#[test]
fn transfer_rejects_unknown_branch_and_item() {
    let mut store = support::open_store("transfer_unknowns");
    let fx = seed_basic(&mut store);

    let err = store
        .transfer_to_branch(TransferRequest {
            branch_id: BranchId::new(999),
            item_id: fx.item_id,
            change_amount: 1,
        })
        .expect_err("unknown branch");
    assert!(matches!(err, StoreError::UnknownBranch), "{err}");

    let err = store
        .transfer_to_branch(TransferRequest {
            branch_id: fx.branch_id,
            item_id: ItemId::new(999),
            change_amount: 1,
        })
        .expect_err("unknown item");
    assert!(matches!(err, StoreError::UnknownItem), "{err}");

    assert!(
        store
            .list_main_stock_transactions()
            .expect("transactions")
            .is_empty()
    );
}

#[test]
fn transfer_rejects_non_positive_amounts() {
    let mut store = support::open_store("transfer_non_positive");
    let fx = seed_basic(&mut store);

    for amount in [0, -5] {
        let err = store
            .transfer_to_branch(TransferRequest {
                branch_id: fx.branch_id,
                item_id: fx.item_id,
                change_amount: amount,
            })
            .expect_err("must reject");
        assert!(matches!(err, StoreError::InvalidInput(_)), "{err}");
    }
}

#[test]
fn ledger_sum_matches_stored_main_quantity() {
    let mut store = support::open_store("ledger_sum");
    let fx = seed_basic(&mut store);
    store.put_main_stock(fx.item_id, 0).expect("zero balance");

    store
        .restock(RestockRequest {
            item_id: fx.item_id,
            add_amount: 50,
        })
        .expect("restock");
    store
        .transfer_to_branch(TransferRequest {
            branch_id: fx.branch_id,
            item_id: fx.item_id,
            change_amount: 20,
        })
        .expect("transfer");
    store
        .restock(RestockRequest {
            item_id: fx.item_id,
            add_amount: 7,
        })
        .expect("restock again");

    let ledger = store
        .list_main_stock_transactions()
        .expect("transactions");
    assert_eq!(ledger.len(), 3);

    let implied: i64 = ledger
        .iter()
        .map(|row| match row.change_type {
            ChangeType::Add => row.amount,
            ChangeType::Remove => -row.amount,
        })
        .sum();
    let stored = store.list_main_stock().expect("levels")[0].quantity;
    assert_eq!(implied, stored);
    assert_eq!(stored, 37);
}
