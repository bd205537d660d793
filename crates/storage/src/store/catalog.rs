#![forbid(unsafe_code)]

use super::{SqliteStore, StoreError};
use depot_core::ids::{CategoryId, ItemId};
use depot_core::model::{Category, CategoryDetail, ItemSummary, ItemWithCategory};
use rusqlite::{OptionalExtension, Row, params};

impl SqliteStore {
    pub fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT category_id, category_name, image FROM categories ORDER BY category_id ASC",
        )?;

        let mut rows = stmt.query([])?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            out.push(Category {
                category_id: CategoryId::new(row.get(0)?),
                category_name: row.get(1)?,
                image: row.get(2)?,
            });
        }

        Ok(out)
    }

    pub fn category_detail(&self, category_id: CategoryId) -> Result<CategoryDetail, StoreError> {
        let header = self
            .conn
            .query_row(
                "SELECT category_name, image FROM categories WHERE category_id=?1",
                params![category_id.get()],
                |row| Ok((row.get::<_, String>(0)?, row.get::<_, Option<String>>(1)?)),
            )
            .optional()?;

        let Some((category_name, image)) = header else {
            return Err(StoreError::UnknownCategory);
        };

        let mut stmt = self.conn.prepare(
            "SELECT item_id, item_name, unit, amount, image \
             FROM items WHERE category_id=?1 ORDER BY item_id ASC",
        )?;
        let mut rows = stmt.query(params![category_id.get()])?;
        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            items.push(ItemSummary {
                item_id: ItemId::new(row.get(0)?),
                item_name: row.get(1)?,
                unit: row.get(2)?,
                amount: row.get(3)?,
                image: row.get(4)?,
            });
        }

        Ok(CategoryDetail {
            category_id,
            category_name,
            image,
            items,
        })
    }

    pub fn list_items_with_category(&self) -> Result<Vec<ItemWithCategory>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT i.item_id, i.item_name, i.unit, i.amount, c.category_name, i.image \
             FROM items i JOIN categories c ON i.category_id = c.category_id \
             ORDER BY i.item_id ASC",
        )?;

        let mut rows = stmt.query([])?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            out.push(item_with_category_row(row)?);
        }

        Ok(out)
    }

    pub fn item_in_category_by_id(
        &self,
        category_id: CategoryId,
        item_id: ItemId,
    ) -> Result<ItemWithCategory, StoreError> {
        let item = self
            .conn
            .query_row(
                "SELECT i.item_id, i.item_name, i.unit, i.amount, c.category_name, i.image \
                 FROM items i JOIN categories c ON i.category_id = c.category_id \
                 WHERE i.category_id=?1 AND i.item_id=?2",
                params![category_id.get(), item_id.get()],
                item_with_category_row,
            )
            .optional()?;

        item.ok_or(StoreError::UnknownItem)
    }

    /// Name match is case-insensitive, mirroring the lookup clients rely on
    /// when they only know the display name.
    pub fn item_in_category_by_name(
        &self,
        category_id: CategoryId,
        item_name: &str,
    ) -> Result<ItemWithCategory, StoreError> {
        let item = self
            .conn
            .query_row(
                "SELECT i.item_id, i.item_name, i.unit, i.amount, c.category_name, i.image \
                 FROM items i JOIN categories c ON i.category_id = c.category_id \
                 WHERE i.category_id=?1 AND LOWER(i.item_name) = LOWER(?2)",
                params![category_id.get(), item_name],
                item_with_category_row,
            )
            .optional()?;

        item.ok_or(StoreError::UnknownItem)
    }
}

fn item_with_category_row(row: &Row<'_>) -> Result<ItemWithCategory, rusqlite::Error> {
    Ok(ItemWithCategory {
        item_id: ItemId::new(row.get(0)?),
        item_name: row.get(1)?,
        unit: row.get(2)?,
        amount: row.get(3)?,
        category_name: row.get(4)?,
        image: row.get(5)?,
    })
}
