#![forbid(unsafe_code)]

use super::{SqliteStore, StoreError, TransferRequest, branch_exists, now_ms};
use depot_core::model::{ChangeType, TransferOutcome};
use rusqlite::{OptionalExtension, params};

impl SqliteStore {
    /// Moves stock from the central balance to a branch.
    ///
    /// One transaction covers the sufficiency check, the main-stock decrement,
    /// the ledger append, and the branch-stock increment. Any early return
    /// drops the transaction, which rolls everything back, so a failed
    /// precondition leaves no partial writes. The decrement carries its own
    /// `quantity >= :amount` guard and is judged by affected-row count, so the
    /// balance can never be overdrawn even if the earlier read went stale.
    pub fn transfer_to_branch(
        &mut self,
        request: TransferRequest,
    ) -> Result<TransferOutcome, StoreError> {
        if request.change_amount <= 0 {
            return Err(StoreError::InvalidInput(
                "change_amount must be a positive, non-zero number",
            ));
        }

        let tx = self.conn.transaction()?;

        if !branch_exists(&tx, request.branch_id)? {
            return Err(StoreError::UnknownBranch);
        }

        let available = tx
            .query_row(
                "SELECT quantity FROM main_stock WHERE item_id=?1",
                params![request.item_id.get()],
                |row| row.get::<_, i64>(0),
            )
            .optional()?;
        let Some(available) = available else {
            return Err(StoreError::UnknownItem);
        };

        let decremented = tx.execute(
            "UPDATE main_stock SET quantity = quantity - ?2 \
             WHERE item_id = ?1 AND quantity >= ?2",
            params![request.item_id.get(), request.change_amount],
        )?;
        if decremented == 0 {
            return Err(StoreError::InsufficientStock {
                available,
                requested: request.change_amount,
            });
        }

        tx.execute(
            "INSERT INTO main_stock_transactions(time_ms, item_id, change_type, amount) \
             VALUES (?1, ?2, ?3, ?4)",
            params![
                now_ms(),
                request.item_id.get(),
                ChangeType::Remove.as_str(),
                request.change_amount,
            ],
        )?;

        // Transfer-in creates the branch row when the pair was never seeded;
        // otherwise the moved quantity would vanish from both balances.
        tx.execute(
            "INSERT INTO branch_stock(branch_id, item_id, quantity) \
             VALUES (?1, ?2, ?3) \
             ON CONFLICT(branch_id, item_id) DO UPDATE SET quantity = quantity + ?3",
            params![
                request.branch_id.get(),
                request.item_id.get(),
                request.change_amount,
            ],
        )?;

        let main_quantity = tx.query_row(
            "SELECT quantity FROM main_stock WHERE item_id=?1",
            params![request.item_id.get()],
            |row| row.get::<_, i64>(0),
        )?;
        let branch_quantity = tx.query_row(
            "SELECT quantity FROM branch_stock WHERE branch_id=?1 AND item_id=?2",
            params![request.branch_id.get(), request.item_id.get()],
            |row| row.get::<_, i64>(0),
        )?;

        tx.commit()?;
        Ok(TransferOutcome {
            branch_id: request.branch_id,
            item_id: request.item_id,
            change_amount: request.change_amount,
            main_quantity,
            branch_quantity,
        })
    }
}
