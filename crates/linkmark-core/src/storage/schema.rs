//! SQLite schema for users and bookmarks
//!
//! Schema creation is additive and idempotent: safe to run on every open,
//! never drops or alters existing tables. There is no migration path;
//! the schema is fixed at two tables and one foreign-key relationship.

use rusqlite::{Connection, Result};

/// Initialize the database schema
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        -- Users table
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            email TEXT UNIQUE NOT NULL,
            password TEXT NOT NULL,
            created_at INTEGER NOT NULL
        );

        -- Bookmarks table; every row is owned by a user
        CREATE TABLE IF NOT EXISTS bookmarks (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL,
            url TEXT NOT NULL,
            title TEXT NOT NULL DEFAULT '',
            favicon TEXT NOT NULL DEFAULT '',
            summary TEXT NOT NULL DEFAULT '',
            tags TEXT NOT NULL DEFAULT '',
            created_at INTEGER NOT NULL,
            FOREIGN KEY (user_id) REFERENCES users(id)
        );

        -- Query bookmarks by owner
        CREATE INDEX IF NOT EXISTS idx_bookmarks_user_id ON bookmarks(user_id);

        -- Newest-first listing
        CREATE INDEX IF NOT EXISTS idx_bookmarks_created_at ON bookmarks(created_at);
        "#,
    )
}

/// Check whether the schema has been created
pub fn is_initialized(conn: &Connection) -> bool {
    conn.prepare("SELECT 1 FROM sqlite_master WHERE type='table' AND name='bookmarks'")
        .and_then(|mut stmt| stmt.exists([]))
        .unwrap_or(false)
}
