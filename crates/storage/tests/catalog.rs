#![forbid(unsafe_code)]

mod support;

use depot_core::ids::{CategoryId, ItemId};
use depot_storage::{NewCategory, NewItem, StoreError};
use support::seed_basic;

#[test]
fn category_detail_lists_its_items() {
    let mut store = support::open_store("category_detail");
    let fx = seed_basic(&mut store);
    store
        .insert_item(NewItem {
            item_name: "Basil".to_string(),
            unit: "bunch".to_string(),
            amount: 4,
            image: None,
            category_id: fx.category_id,
        })
        .expect("insert item");

    let detail = store.category_detail(fx.category_id).expect("detail");
    assert_eq!(detail.category_name, "Produce");
    assert_eq!(detail.items.len(), 2);
    assert_eq!(detail.items[1].item_name, "Basil");
    assert_eq!(detail.items[1].amount, 4);
}

#[test]
fn unknown_category_is_not_found() {
    let mut store = support::open_store("unknown_category");
    seed_basic(&mut store);

    let err = store
        .category_detail(CategoryId::new(99))
        .expect_err("must be missing");
    assert!(matches!(err, StoreError::UnknownCategory), "{err}");
}

#[test]
fn item_lookup_by_name_is_case_insensitive() {
    let mut store = support::open_store("item_by_name");
    let fx = seed_basic(&mut store);

    let item = store
        .item_in_category_by_name(fx.category_id, "tOmAtOeS")
        .expect("case-insensitive match");
    assert_eq!(item.item_id, fx.item_id);
    assert_eq!(item.category_name, "Produce");

    let err = store
        .item_in_category_by_name(fx.category_id, "Basil")
        .expect_err("no such item");
    assert!(matches!(err, StoreError::UnknownItem), "{err}");
}

#[test]
fn item_lookup_by_id_is_scoped_to_the_category() {
    let mut store = support::open_store("item_by_id_scoped");
    let fx = seed_basic(&mut store);
    let other_category = store
        .insert_category(NewCategory {
            category_name: "Dry Goods".to_string(),
            image: None,
        })
        .expect("insert category");

    let item = store
        .item_in_category_by_id(fx.category_id, fx.item_id)
        .expect("lookup");
    assert_eq!(item.item_name, "Tomatoes");

    let err = store
        .item_in_category_by_id(other_category, fx.item_id)
        .expect_err("item is not in that category");
    assert!(matches!(err, StoreError::UnknownItem), "{err}");

    let err = store
        .item_in_category_by_id(fx.category_id, ItemId::new(999))
        .expect_err("unknown id");
    assert!(matches!(err, StoreError::UnknownItem), "{err}");
}

#[test]
fn listings_join_category_names() {
    let mut store = support::open_store("listings_join");
    seed_basic(&mut store);

    let categories = store.list_categories().expect("categories");
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].category_name, "Produce");

    let items = store.list_items_with_category().expect("items");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].category_name, "Produce");
    assert_eq!(items[0].unit, "kg");
}
