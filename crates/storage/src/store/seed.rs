#![forbid(unsafe_code)]

//! Out-of-band row creation. The HTTP surface never creates catalog rows,
//! branches, or stock rows; these exist for seeding (demo data, tests, or an
//! operator shell).

use super::{NewBranch, NewCategory, NewItem, SqliteStore, StoreError};
use depot_core::ids::{BranchId, CategoryId, ItemId};
use rusqlite::params;

impl SqliteStore {
    pub fn insert_category(&mut self, category: NewCategory) -> Result<CategoryId, StoreError> {
        self.conn.execute(
            "INSERT INTO categories(category_name, image) VALUES (?1, ?2)",
            params![category.category_name, category.image],
        )?;
        Ok(CategoryId::new(self.conn.last_insert_rowid()))
    }

    pub fn insert_item(&mut self, item: NewItem) -> Result<ItemId, StoreError> {
        if item.amount < 0 {
            return Err(StoreError::InvalidInput("item amount must not be negative"));
        }
        self.conn.execute(
            "INSERT INTO items(item_name, unit, amount, image, category_id) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                item.item_name,
                item.unit,
                item.amount,
                item.image,
                item.category_id.get(),
            ],
        )?;
        Ok(ItemId::new(self.conn.last_insert_rowid()))
    }

    pub fn insert_branch(&mut self, branch: NewBranch) -> Result<BranchId, StoreError> {
        self.conn.execute(
            "INSERT INTO branches(branch_name, location) VALUES (?1, ?2)",
            params![branch.branch_name, branch.location],
        )?;
        Ok(BranchId::new(self.conn.last_insert_rowid()))
    }

    pub fn put_main_stock(&mut self, item_id: ItemId, quantity: i64) -> Result<(), StoreError> {
        if quantity < 0 {
            return Err(StoreError::InvalidInput("quantity must not be negative"));
        }
        self.conn.execute(
            "INSERT INTO main_stock(item_id, quantity) VALUES (?1, ?2) \
             ON CONFLICT(item_id) DO UPDATE SET quantity=excluded.quantity",
            params![item_id.get(), quantity],
        )?;
        Ok(())
    }

    pub fn put_branch_stock(
        &mut self,
        branch_id: BranchId,
        item_id: ItemId,
        quantity: i64,
    ) -> Result<(), StoreError> {
        if quantity < 0 {
            return Err(StoreError::InvalidInput("quantity must not be negative"));
        }
        self.conn.execute(
            "INSERT INTO branch_stock(branch_id, item_id, quantity) VALUES (?1, ?2, ?3) \
             ON CONFLICT(branch_id, item_id) DO UPDATE SET quantity=excluded.quantity",
            params![branch_id.get(), item_id.get(), quantity],
        )?;
        Ok(())
    }
}
