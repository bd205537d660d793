#![forbid(unsafe_code)]

use super::{RestockRequest, SqliteStore, StoreError, now_ms, ts_ms_to_rfc3339};
use depot_core::ids::{CategoryId, ItemId};
use depot_core::model::{ChangeType, MainStockLevel, MainStockTransaction};
use rusqlite::{Row, params};

impl SqliteStore {
    pub fn list_main_stock(&self) -> Result<Vec<MainStockLevel>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT m.item_id, i.item_name, i.unit, c.category_name, m.quantity \
             FROM main_stock m \
             JOIN items i ON m.item_id = i.item_id \
             JOIN categories c ON i.category_id = c.category_id \
             ORDER BY m.item_id ASC",
        )?;

        let mut rows = stmt.query([])?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            out.push(main_stock_row(row)?);
        }

        Ok(out)
    }

    /// Filtered view; an unknown category id simply yields no rows.
    pub fn list_main_stock_by_category(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<MainStockLevel>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT m.item_id, i.item_name, i.unit, c.category_name, m.quantity \
             FROM main_stock m \
             JOIN items i ON m.item_id = i.item_id \
             JOIN categories c ON i.category_id = c.category_id \
             WHERE i.category_id=?1 \
             ORDER BY m.item_id ASC",
        )?;

        let mut rows = stmt.query(params![category_id.get()])?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            out.push(main_stock_row(row)?);
        }

        Ok(out)
    }

    /// Adds `add_amount` to the central balance and appends the matching
    /// ledger row in the same transaction. Returns the new quantity.
    pub fn restock(&mut self, request: RestockRequest) -> Result<i64, StoreError> {
        if request.add_amount <= 0 {
            return Err(StoreError::InvalidInput(
                "add_amount must be a positive, non-zero number",
            ));
        }

        let tx = self.conn.transaction()?;

        let updated = tx.execute(
            "UPDATE main_stock SET quantity = quantity + ?2 WHERE item_id = ?1",
            params![request.item_id.get(), request.add_amount],
        )?;
        if updated == 0 {
            return Err(StoreError::UnknownItem);
        }

        tx.execute(
            "INSERT INTO main_stock_transactions(time_ms, item_id, change_type, amount) \
             VALUES (?1, ?2, ?3, ?4)",
            params![
                now_ms(),
                request.item_id.get(),
                ChangeType::Add.as_str(),
                request.add_amount,
            ],
        )?;

        let quantity = tx.query_row(
            "SELECT quantity FROM main_stock WHERE item_id=?1",
            params![request.item_id.get()],
            |row| row.get::<_, i64>(0),
        )?;

        tx.commit()?;
        Ok(quantity)
    }

    pub fn list_main_stock_transactions(&self) -> Result<Vec<MainStockTransaction>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT t.transaction_id, t.time_ms, t.item_id, i.item_name, c.category_name, \
                    t.change_type, t.amount \
             FROM main_stock_transactions t \
             JOIN items i ON t.item_id = i.item_id \
             JOIN categories c ON i.category_id = c.category_id \
             ORDER BY t.time_ms DESC, t.transaction_id DESC",
        )?;

        let mut rows = stmt.query([])?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            let change_type: String = row.get(5)?;
            let change_type = ChangeType::parse(&change_type)
                .ok_or(StoreError::InvalidInput("invalid change_type row"))?;
            out.push(MainStockTransaction {
                transaction_id: row.get(0)?,
                transaction_time: ts_ms_to_rfc3339(row.get(1)?),
                item_id: ItemId::new(row.get(2)?),
                item_name: row.get(3)?,
                category_name: row.get(4)?,
                change_type,
                amount: row.get(6)?,
            });
        }

        Ok(out)
    }
}

fn main_stock_row(row: &Row<'_>) -> Result<MainStockLevel, rusqlite::Error> {
    Ok(MainStockLevel {
        item_id: ItemId::new(row.get(0)?),
        item_name: row.get(1)?,
        unit: row.get(2)?,
        category_name: row.get(3)?,
        quantity: row.get(4)?,
    })
}
