// src/core/store.rs
use crate::errors::StoreResult;
use crate::models::Item;
use rusqlite::{Connection, params};
use std::fs;
use std::path::Path;

const SCHEMA_ITEMS: &str = "CREATE TABLE IF NOT EXISTS items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    task TEXT NOT NULL,
    completed BOOLEAN DEFAULT FALSE
);";
const INSERT_ITEM: &str = "INSERT INTO items (task) VALUES (?1)";
const SELECT_ITEMS: &str = "SELECT id, task, completed FROM items ORDER BY id";
const COMPLETE_ITEM: &str = "UPDATE items SET completed = TRUE WHERE id = ?1";
const DELETE_ITEM: &str = "DELETE FROM items WHERE id = ?1";

/// Durable storage for checklist items, backed by a single `SQLite` table.
///
/// One handle is opened per process and handed to the command dispatcher.
#[derive(Debug)]
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Opens (creating if needed) the database file at `path` and ensures the
    /// `items` table exists.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * The parent directory of `path` cannot be created
    /// * The file cannot be opened as a `SQLite` database
    /// * The schema statement fails
    #[inline]
    pub fn open(path: &Path) -> StoreResult<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        tracing::debug!(path = %path.display(), "opening checklist store");
        let store = Self {
            conn: Connection::open(path)?,
        };
        store.initialize()?;
        Ok(store)
    }

    /// Opens a throwaway store that lives only as long as the handle.
    #[cfg(test)]
    pub(crate) fn open_in_memory() -> StoreResult<Self> {
        let store = Self {
            conn: Connection::open_in_memory()?,
        };
        store.initialize()?;
        Ok(store)
    }

    /// Ensures the `items` table exists. Safe to call on every start.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema statement fails.
    #[inline]
    pub fn initialize(&self) -> StoreResult<()> {
        self.conn.execute_batch(SCHEMA_ITEMS)?;
        Ok(())
    }

    /// Appends a new, uncompleted item and returns the id the store assigned.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert cannot be written.
    #[inline]
    pub fn insert(&self, task: &str) -> StoreResult<i64> {
        self.conn.execute(INSERT_ITEM, params![task])?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, "inserted item");
        Ok(id)
    }

    /// Returns every item in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be read.
    #[inline]
    pub fn list_all(&self) -> StoreResult<Vec<Item>> {
        let mut stmt = self.conn.prepare(SELECT_ITEMS)?;
        let rows = stmt.query_map([], |row| {
            Ok(Item {
                id: row.get(0)?,
                task: row.get(1)?,
                completed: row.get::<_, Option<bool>>(2)?.unwrap_or(false),
            })
        })?;

        let mut items = Vec::new();
        for row in rows {
            items.push(row?);
        }
        Ok(items)
    }

    /// Marks the item with `id` as completed and returns how many rows changed.
    ///
    /// An unknown id changes nothing and is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the update cannot be written.
    #[inline]
    pub fn set_completed(&self, id: i64) -> StoreResult<usize> {
        let changed = self.conn.execute(COMPLETE_ITEM, params![id])?;
        tracing::debug!(id, changed, "completed item");
        Ok(changed)
    }

    /// Deletes the item with `id` and returns how many rows were removed.
    ///
    /// An unknown id removes nothing and is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete cannot be written.
    #[inline]
    pub fn delete(&self, id: i64) -> StoreResult<usize> {
        let removed = self.conn.execute(DELETE_ITEM, params![id])?;
        tracing::debug!(id, removed, "deleted item");
        Ok(removed)
    }
}
