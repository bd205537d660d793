#![forbid(unsafe_code)]

mod audit;
mod branch_stock;
mod catalog;
mod error;
mod main_stock;
mod requests;
mod seed;
mod transfer;

pub use error::StoreError;
pub use requests::*;

use depot_core::ids::{BranchId, CategoryId};
use rusqlite::{Connection, OptionalExtension, params};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

const SCHEMA_VERSION: i64 = 1;
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Owns the single SQLite connection every inventory operation goes through.
///
/// Mutating operations take `&mut self`, so two transactions can never
/// interleave on the same store. Callers that share a store across threads
/// wrap it in a mutex; correctness still comes from the per-operation
/// transactions, not from that lock.
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
    db_path: PathBuf,
}

impl SqliteStore {
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let db_path = db_path.as_ref().to_path_buf();
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(&db_path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;

        preflight_gate(&conn)?;
        install_schema(&conn)?;

        Ok(Self { conn, db_path })
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Explicit teardown. Dropping the store also closes the connection, but
    /// this surfaces close-time errors instead of swallowing them.
    pub fn close(self) -> Result<(), StoreError> {
        self.conn.close().map_err(|(_, err)| StoreError::Sql(err))
    }
}

fn preflight_gate(conn: &Connection) -> Result<(), StoreError> {
    let mut stmt = conn.prepare(
        "SELECT name FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
    )?;
    let mut rows = stmt.query([])?;
    let mut tables = BTreeSet::new();
    while let Some(row) = rows.next()? {
        tables.insert(row.get::<_, String>(0)?);
    }

    if tables.is_empty() {
        return Ok(());
    }

    let required: BTreeSet<&str> = [
        "store_state",
        "categories",
        "items",
        "branches",
        "main_stock",
        "branch_stock",
        "inventory_changes",
        "main_stock_transactions",
    ]
    .into_iter()
    .collect();

    if tables
        .iter()
        .any(|table| !required.contains(table.as_str()))
    {
        return Err(StoreError::InvalidInput(
            "RESET_REQUIRED: unsupported tables detected",
        ));
    }

    for table in required {
        if !tables.contains(table) {
            return Err(StoreError::InvalidInput(
                "RESET_REQUIRED: required table is missing",
            ));
        }
    }

    let version = conn
        .query_row(
            "SELECT schema_version FROM store_state WHERE singleton=1",
            [],
            |row| row.get::<_, i64>(0),
        )
        .optional()?;

    match version {
        Some(v) if v == SCHEMA_VERSION => Ok(()),
        Some(_) => Err(StoreError::InvalidInput(
            "RESET_REQUIRED: schema version mismatch",
        )),
        None => Err(StoreError::InvalidInput(
            "RESET_REQUIRED: schema state row is missing",
        )),
    }
}

fn install_schema(conn: &Connection) -> Result<(), StoreError> {
    let now_ms = now_ms();

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS store_state (
          singleton INTEGER PRIMARY KEY CHECK(singleton = 1),
          schema_version INTEGER NOT NULL,
          created_at_ms INTEGER NOT NULL,
          updated_at_ms INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS categories (
          category_id INTEGER PRIMARY KEY AUTOINCREMENT,
          category_name TEXT NOT NULL UNIQUE,
          image TEXT
        );

        CREATE TABLE IF NOT EXISTS items (
          item_id INTEGER PRIMARY KEY AUTOINCREMENT,
          item_name TEXT NOT NULL,
          unit TEXT NOT NULL,
          amount INTEGER NOT NULL DEFAULT 0 CHECK(amount >= 0),
          image TEXT,
          category_id INTEGER NOT NULL,
          FOREIGN KEY(category_id) REFERENCES categories(category_id) ON DELETE RESTRICT
        );

        CREATE INDEX IF NOT EXISTS idx_items_category
          ON items(category_id, item_name);

        CREATE TABLE IF NOT EXISTS branches (
          branch_id INTEGER PRIMARY KEY AUTOINCREMENT,
          branch_name TEXT NOT NULL,
          location TEXT
        );

        CREATE TABLE IF NOT EXISTS main_stock (
          item_id INTEGER PRIMARY KEY,
          quantity INTEGER NOT NULL CHECK(quantity >= 0),
          FOREIGN KEY(item_id) REFERENCES items(item_id) ON DELETE CASCADE
        );

        CREATE TABLE IF NOT EXISTS branch_stock (
          branch_id INTEGER NOT NULL,
          item_id INTEGER NOT NULL,
          quantity INTEGER NOT NULL CHECK(quantity >= 0),
          PRIMARY KEY(branch_id, item_id),
          FOREIGN KEY(branch_id) REFERENCES branches(branch_id) ON DELETE CASCADE,
          FOREIGN KEY(item_id) REFERENCES items(item_id) ON DELETE CASCADE
        );

        CREATE TABLE IF NOT EXISTS inventory_changes (
          change_id INTEGER PRIMARY KEY AUTOINCREMENT,
          time_ms INTEGER NOT NULL,
          item_id INTEGER NOT NULL,
          amount_before_change INTEGER NOT NULL,
          amount_after_change INTEGER NOT NULL,
          FOREIGN KEY(item_id) REFERENCES items(item_id) ON DELETE RESTRICT
        );

        CREATE INDEX IF NOT EXISTS idx_inventory_changes_time
          ON inventory_changes(time_ms, change_id);

        CREATE TABLE IF NOT EXISTS main_stock_transactions (
          transaction_id INTEGER PRIMARY KEY AUTOINCREMENT,
          time_ms INTEGER NOT NULL,
          item_id INTEGER NOT NULL,
          change_type TEXT NOT NULL CHECK(change_type IN ('add', 'remove')),
          amount INTEGER NOT NULL CHECK(amount > 0),
          FOREIGN KEY(item_id) REFERENCES items(item_id) ON DELETE RESTRICT
        );

        CREATE INDEX IF NOT EXISTS idx_main_stock_transactions_time
          ON main_stock_transactions(time_ms, transaction_id);
        "#,
    )?;

    conn.execute(
        "INSERT INTO store_state(singleton, schema_version, created_at_ms, updated_at_ms) \
         VALUES (1, ?1, ?2, ?2) \
         ON CONFLICT(singleton) DO UPDATE SET schema_version=excluded.schema_version, updated_at_ms=excluded.updated_at_ms",
        params![SCHEMA_VERSION, now_ms],
    )?;

    Ok(())
}

/// Shared lookups. These take `&Connection` so they work both on the bare
/// store connection and inside a transaction (`Transaction` derefs to it).
pub(crate) fn branch_exists(conn: &Connection, branch_id: BranchId) -> Result<bool, StoreError> {
    Ok(conn
        .query_row(
            "SELECT 1 FROM branches WHERE branch_id=?1",
            params![branch_id.get()],
            |row| row.get::<_, i64>(0),
        )
        .optional()?
        .is_some())
}

pub(crate) fn category_name(
    conn: &Connection,
    category_id: CategoryId,
) -> Result<Option<String>, StoreError> {
    Ok(conn
        .query_row(
            "SELECT category_name FROM categories WHERE category_id=?1",
            params![category_id.get()],
            |row| row.get::<_, String>(0),
        )
        .optional()?)
}

pub(crate) fn now_ms() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    let now = match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(duration) => duration,
        Err(_) => return 0,
    };

    i64::try_from(now.as_millis()).unwrap_or(i64::MAX)
}

pub(crate) fn ts_ms_to_rfc3339(ts_ms: i64) -> String {
    use time::OffsetDateTime;
    use time::format_description::well_known::Rfc3339;

    let nanos = (ts_ms as i128) * 1_000_000i128;
    let dt = OffsetDateTime::from_unix_timestamp_nanos(nanos).unwrap_or(OffsetDateTime::UNIX_EPOCH);
    dt.format(&Rfc3339)
        .unwrap_or_else(|_| "1970-01-01T00:00:00Z".to_string())
}
