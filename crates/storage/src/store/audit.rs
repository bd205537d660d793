#![forbid(unsafe_code)]

use super::{AuditedUpdateRequest, SqliteStore, StoreError, now_ms, ts_ms_to_rfc3339};
use depot_core::ids::ItemId;
use depot_core::model::{AuditedUpdate, InventoryChange};
use rusqlite::{OptionalExtension, params};

impl SqliteStore {
    /// Audited direct update of the legacy item-level amount: reads the
    /// current value, overwrites it, and appends one `inventory_changes` row
    /// with the before/after pair, all in one transaction.
    ///
    /// Returns `None` when the item does not exist: the whole operation
    /// no-ops and nothing is written, so the ledger never records a change
    /// that did not happen.
    pub fn update_item_amount_audited(
        &mut self,
        request: AuditedUpdateRequest,
    ) -> Result<Option<AuditedUpdate>, StoreError> {
        if request.new_amount < 0 {
            return Err(StoreError::InvalidInput("amount must not be negative"));
        }

        let tx = self.conn.transaction()?;

        let current = tx
            .query_row(
                "SELECT amount FROM items WHERE item_id=?1",
                params![request.item_id.get()],
                |row| row.get::<_, i64>(0),
            )
            .optional()?;
        let Some(amount_before) = current else {
            return Ok(None);
        };

        tx.execute(
            "UPDATE items SET amount = ?2 WHERE item_id = ?1",
            params![request.item_id.get(), request.new_amount],
        )?;

        tx.execute(
            "INSERT INTO inventory_changes(time_ms, item_id, amount_before_change, amount_after_change) \
             VALUES (?1, ?2, ?3, ?4)",
            params![
                now_ms(),
                request.item_id.get(),
                amount_before,
                request.new_amount,
            ],
        )?;

        tx.commit()?;
        Ok(Some(AuditedUpdate {
            item_id: request.item_id,
            amount_before,
            amount_after: request.new_amount,
        }))
    }

    pub fn list_inventory_changes(&self) -> Result<Vec<InventoryChange>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT ic.change_id, ic.time_ms, ic.item_id, i.item_name, c.category_name, \
                    ic.amount_before_change, ic.amount_after_change \
             FROM inventory_changes ic \
             JOIN items i ON ic.item_id = i.item_id \
             JOIN categories c ON i.category_id = c.category_id \
             ORDER BY ic.time_ms DESC, ic.change_id DESC",
        )?;

        let mut rows = stmt.query([])?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            out.push(InventoryChange {
                change_id: row.get(0)?,
                transaction_time: ts_ms_to_rfc3339(row.get(1)?),
                item_id: ItemId::new(row.get(2)?),
                item_name: row.get(3)?,
                category_name: row.get(4)?,
                amount_before_change: row.get(5)?,
                amount_after_change: row.get(6)?,
            });
        }

        Ok(out)
    }
}
