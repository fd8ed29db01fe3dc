//! Ownership-scoped bookmark CRUD and tag search
//!
//! Every query includes the owning user's id in its SQL predicate, never
//! a post-hoc filter, so rows belonging to other users are structurally
//! unreachable. Lookups return `None` and deletes return `false` whether
//! the row is absent or owned by someone else; callers cannot tell the
//! two apart.
//!
//! Any engine error other than "no rows" propagates as a
//! [`StorageError`](crate::storage::StorageError) and is never retried.

use chrono::Utc;
use rusqlite::{params, OptionalExtension, Row, ToSql};
use tracing::debug;

use crate::models::{datetime_from_millis, Bookmark, BookmarkPatch, NewBookmark};
use crate::storage::{Database, StorageResult};

/// Insert a bookmark owned by `user_id`, returning the stored row
///
/// URLs are not validated or deduplicated; saving the same URL twice
/// creates two rows. The insert and the fetch of the generated row run
/// in one transaction.
pub fn create(db: &mut Database, user_id: i64, bookmark: NewBookmark) -> StorageResult<Bookmark> {
    let created_at = Utc::now().timestamp_millis();

    let tx = db.transaction()?;
    tx.execute(
        "INSERT INTO bookmarks (user_id, url, title, favicon, summary, tags, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            user_id,
            bookmark.url,
            bookmark.title,
            bookmark.favicon,
            bookmark.summary,
            bookmark.tags,
            created_at
        ],
    )?;

    let stored = tx.query_row(
        "SELECT id, user_id, url, title, favicon, summary, tags, created_at
         FROM bookmarks WHERE id = ?1",
        params![tx.last_insert_rowid()],
        bookmark_from_row,
    )?;
    tx.commit()?;

    debug!(bookmark_id = stored.id, user_id, "created bookmark");
    Ok(stored)
}

/// List all bookmarks owned by `user_id`, newest first
///
/// Descending `created_at` order is a contract, not incidental; rows
/// created in the same millisecond fall back to insertion order.
pub fn list_by_user(db: &Database, user_id: i64) -> StorageResult<Vec<Bookmark>> {
    let mut stmt = db.connection().prepare(
        "SELECT id, user_id, url, title, favicon, summary, tags, created_at
         FROM bookmarks
         WHERE user_id = ?1
         ORDER BY created_at DESC, id DESC",
    )?;

    let rows = stmt.query_map(params![user_id], bookmark_from_row)?;

    let mut bookmarks = Vec::new();
    for row in rows {
        bookmarks.push(row?);
    }
    Ok(bookmarks)
}

/// Get a single bookmark by id, scoped to its owner
///
/// Returns `None` when the id does not exist or the row belongs to a
/// different user.
pub fn get_by_id(db: &Database, id: i64, user_id: i64) -> StorageResult<Option<Bookmark>> {
    let bookmark = db
        .connection()
        .query_row(
            "SELECT id, user_id, url, title, favicon, summary, tags, created_at
             FROM bookmarks WHERE id = ?1 AND user_id = ?2",
            params![id, user_id],
            bookmark_from_row,
        )
        .optional()?;
    Ok(bookmark)
}

/// Apply a partial update to a bookmark's title, summary, or tags
///
/// Only fields present in the patch change; url, owner, and creation
/// time are immutable. Returns `None` when no row matches the
/// `(id, user_id)` pair. An empty patch mutates nothing and returns the
/// current row.
pub fn update(
    db: &mut Database,
    id: i64,
    user_id: i64,
    patch: BookmarkPatch,
) -> StorageResult<Option<Bookmark>> {
    if patch.is_empty() {
        return get_by_id(db, id, user_id);
    }

    let mut assignments: Vec<&str> = Vec::new();
    let mut values: Vec<&dyn ToSql> = Vec::new();
    if let Some(ref title) = patch.title {
        assignments.push("title = ?");
        values.push(title);
    }
    if let Some(ref summary) = patch.summary {
        assignments.push("summary = ?");
        values.push(summary);
    }
    if let Some(ref tags) = patch.tags {
        assignments.push("tags = ?");
        values.push(tags);
    }
    values.push(&id);
    values.push(&user_id);

    let sql = format!(
        "UPDATE bookmarks SET {} WHERE id = ? AND user_id = ?",
        assignments.join(", ")
    );

    let tx = db.transaction()?;
    let changed = tx.execute(&sql, values.as_slice())?;
    if changed == 0 {
        return Ok(None);
    }

    let stored = tx.query_row(
        "SELECT id, user_id, url, title, favicon, summary, tags, created_at
         FROM bookmarks WHERE id = ?1",
        params![id],
        bookmark_from_row,
    )?;
    tx.commit()?;

    debug!(bookmark_id = id, user_id, "updated bookmark");
    Ok(Some(stored))
}

/// Delete a bookmark, scoped to its owner
///
/// Returns `true` iff a row matching `(id, user_id)` was removed.
pub fn delete(db: &mut Database, id: i64, user_id: i64) -> StorageResult<bool> {
    let changed = db.connection().execute(
        "DELETE FROM bookmarks WHERE id = ?1 AND user_id = ?2",
        params![id, user_id],
    )?;

    if changed > 0 {
        debug!(bookmark_id = id, user_id, "deleted bookmark");
    }
    Ok(changed > 0)
}

/// Find bookmarks whose tag string contains `fragment`, newest first
///
/// Naive substring match over the flat comma-separated tags field:
/// "go" matches "golang,web" and "mongo,db". The fragment is passed to
/// LIKE verbatim, wildcards included.
pub fn search_by_tag(db: &Database, user_id: i64, fragment: &str) -> StorageResult<Vec<Bookmark>> {
    let mut stmt = db.connection().prepare(
        "SELECT id, user_id, url, title, favicon, summary, tags, created_at
         FROM bookmarks
         WHERE user_id = ?1 AND tags LIKE ?2
         ORDER BY created_at DESC, id DESC",
    )?;

    let pattern = format!("%{}%", fragment);
    let rows = stmt.query_map(params![user_id, pattern], bookmark_from_row)?;

    let mut bookmarks = Vec::new();
    for row in rows {
        bookmarks.push(row?);
    }
    Ok(bookmarks)
}

fn bookmark_from_row(row: &Row<'_>) -> rusqlite::Result<Bookmark> {
    Ok(Bookmark {
        id: row.get(0)?,
        user_id: row.get(1)?,
        url: row.get(2)?,
        title: row.get(3)?,
        favicon: row.get(4)?,
        summary: row.get(5)?,
        tags: row.get(6)?,
        created_at: datetime_from_millis(row.get(7)?),
    })
}
