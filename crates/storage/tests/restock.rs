#![forbid(unsafe_code)]

mod support;

use depot_core::ids::ItemId;
use depot_core::model::ChangeType;
use depot_storage::{RestockRequest, StoreError};
use support::seed_basic;

#[test]
fn restock_increments_and_logs_one_add_row() {
    let mut store = support::open_store("restock_increments");
    let fx = seed_basic(&mut store);

    let quantity = store
        .restock(RestockRequest {
            item_id: fx.item_id,
            add_amount: 25,
        })
        .expect("restock");
    assert_eq!(quantity, 125);

    let ledger = store
        .list_main_stock_transactions()
        .expect("transactions");
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger[0].change_type, ChangeType::Add);
    assert_eq!(ledger[0].amount, 25);
}

#[test]
fn restock_rejects_zero_and_negative_amounts() {
    let mut store = support::open_store("restock_rejects");
    let fx = seed_basic(&mut store);

    for amount in [0, -10] {
        let err = store
            .restock(RestockRequest {
                item_id: fx.item_id,
                add_amount: amount,
            })
            .expect_err("must reject");
        assert!(matches!(err, StoreError::InvalidInput(_)), "{err}");
    }

    assert_eq!(store.list_main_stock().expect("levels")[0].quantity, 100);
    assert!(
        store
            .list_main_stock_transactions()
            .expect("transactions")
            .is_empty()
    );
}

#[test]
fn restock_without_main_stock_row_is_not_found_and_logs_nothing() {
    let mut store = support::open_store("restock_unknown");
    seed_basic(&mut store);

    let err = store
        .restock(RestockRequest {
            item_id: ItemId::new(999),
            add_amount: 5,
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
fn transaction_listing_is_newest_first() {
    let mut store = support::open_store("transactions_newest_first");
    let fx = seed_basic(&mut store);

    store
        .restock(RestockRequest {
            item_id: fx.item_id,
            add_amount: 1,
        })
        .expect("first restock");
    store
        .restock(RestockRequest {
            item_id: fx.item_id,
            add_amount: 2,
        })
        .expect("second restock");

    let ledger = store
        .list_main_stock_transactions()
        .expect("transactions");
    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger[0].amount, 2, "latest mutation listed first");
    assert_eq!(ledger[1].amount, 1);
    assert!(ledger[0].transaction_id > ledger[1].transaction_id);
}
