#![forbid(unsafe_code)]

use super::{SetBranchAmountRequest, SqliteStore, StoreError, branch_exists, category_name};
use depot_core::ids::{BranchId, CategoryId, ItemId};
use depot_core::model::{Branch, BranchStockLevel};
use rusqlite::{OptionalExtension, params};

impl SqliteStore {
    pub fn list_branches(&self) -> Result<Vec<Branch>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT branch_id, branch_name, location FROM branches ORDER BY branch_id ASC",
        )?;

        let mut rows = stmt.query([])?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            out.push(Branch {
                branch_id: BranchId::new(row.get(0)?),
                branch_name: row.get(1)?,
                location: row.get(2)?,
            });
        }

        Ok(out)
    }

    pub fn branch_detail(&self, branch_id: BranchId) -> Result<Branch, StoreError> {
        self.conn
            .query_row(
                "SELECT branch_id, branch_name, location FROM branches WHERE branch_id=?1",
                params![branch_id.get()],
                |row| {
                    Ok(Branch {
                        branch_id: BranchId::new(row.get(0)?),
                        branch_name: row.get(1)?,
                        location: row.get(2)?,
                    })
                },
            )
            .optional()?
            .ok_or(StoreError::UnknownBranch)
    }

    pub fn list_branch_stock(&self, branch_id: BranchId) -> Result<Vec<BranchStockLevel>, StoreError> {
        if !branch_exists(&self.conn, branch_id)? {
            return Err(StoreError::UnknownBranch);
        }

        let mut stmt = self.conn.prepare(
            "SELECT b.item_id, i.item_name, i.unit, b.quantity, c.category_name \
             FROM branch_stock b \
             JOIN items i ON b.item_id = i.item_id \
             JOIN categories c ON i.category_id = c.category_id \
             WHERE b.branch_id=?1 \
             ORDER BY b.item_id ASC",
        )?;

        let mut rows = stmt.query(params![branch_id.get()])?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            out.push(BranchStockLevel {
                item_id: ItemId::new(row.get(0)?),
                item_name: row.get(1)?,
                unit: row.get(2)?,
                quantity: row.get(3)?,
                category_name: Some(row.get(4)?),
            });
        }

        Ok(out)
    }

    /// Branch stock filtered by the item's category. An invalid category id is
    /// not an error here: the rows come back empty and `category_name` stays
    /// `None`, which is what the endpoint has always returned.
    pub fn list_branch_stock_by_category(
        &self,
        branch_id: BranchId,
        category_id: CategoryId,
    ) -> Result<Vec<BranchStockLevel>, StoreError> {
        if !branch_exists(&self.conn, branch_id)? {
            return Err(StoreError::UnknownBranch);
        }

        let resolved = category_name(&self.conn, category_id)?;

        let mut stmt = self.conn.prepare(
            "SELECT b.item_id, i.item_name, i.unit, b.quantity \
             FROM branch_stock b \
             JOIN items i ON b.item_id = i.item_id \
             WHERE b.branch_id=?1 AND i.category_id=?2 \
             ORDER BY b.item_id ASC",
        )?;

        let mut rows = stmt.query(params![branch_id.get(), category_id.get()])?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            out.push(BranchStockLevel {
                item_id: ItemId::new(row.get(0)?),
                item_name: row.get(1)?,
                unit: row.get(2)?,
                quantity: row.get(3)?,
                category_name: resolved.clone(),
            });
        }

        Ok(out)
    }

    /// Direct correction: unconditional overwrite of a branch balance with no
    /// ledger row. Affecting zero rows is still success; a correction aimed at
    /// a pair that was never seeded simply changes nothing. Returns the number
    /// of rows touched so callers can phrase the response.
    pub fn set_branch_amount(
        &mut self,
        request: SetBranchAmountRequest,
    ) -> Result<usize, StoreError> {
        if request.new_amount < 0 {
            return Err(StoreError::InvalidInput("new_amount must not be negative"));
        }

        let updated = self.conn.execute(
            "UPDATE branch_stock SET quantity = ?3 WHERE branch_id = ?1 AND item_id = ?2",
            params![
                request.branch_id.get(),
                request.item_id.get(),
                request.new_amount,
            ],
        )?;

        Ok(updated)
    }
}
