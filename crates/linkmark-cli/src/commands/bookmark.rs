//! Bookmark command handlers
//!
//! All handlers receive the user id the session layer verified; the
//! repository scopes every query by it.

use anyhow::{bail, Context, Result};

use linkmark_core::bookmarks;
use linkmark_core::{BookmarkPatch, Database, NewBookmark};

use crate::output::Output;

/// Save a bookmark
#[allow(clippy::too_many_arguments)]
pub fn add(
    db: &mut Database,
    user_id: i64,
    url: String,
    title: Option<String>,
    favicon: Option<String>,
    summary: Option<String>,
    tags: Option<String>,
    output: &Output,
) -> Result<()> {
    let bookmark = bookmarks::create(
        db,
        user_id,
        NewBookmark {
            url,
            title: title.unwrap_or_default(),
            favicon: favicon.unwrap_or_default(),
            summary: summary.unwrap_or_default(),
            tags: tags.unwrap_or_default(),
        },
    )
    .context("Failed to save bookmark")?;

    output.success(&format!("Saved bookmark {}", bookmark.id));
    output.print_bookmark(&bookmark);
    Ok(())
}

/// List bookmarks, optionally filtered by tag substring
pub fn list(db: &Database, user_id: i64, tag: Option<String>, output: &Output) -> Result<()> {
    let found = match tag {
        Some(ref fragment) => bookmarks::search_by_tag(db, user_id, fragment)?,
        None => bookmarks::list_by_user(db, user_id)?,
    };

    output.print_bookmarks(&found);
    Ok(())
}

/// Show a single bookmark
pub fn show(db: &Database, user_id: i64, id: i64, output: &Output) -> Result<()> {
    let Some(bookmark) = bookmarks::get_by_id(db, id, user_id)? else {
        bail!("Bookmark not found: {}", id);
    };

    output.print_bookmark(&bookmark);
    Ok(())
}

/// Update title, summary, or tags
pub fn update(
    db: &mut Database,
    user_id: i64,
    id: i64,
    title: Option<String>,
    summary: Option<String>,
    tags: Option<String>,
    output: &Output,
) -> Result<()> {
    let patch = BookmarkPatch {
        title,
        summary,
        tags,
    };

    let Some(bookmark) = bookmarks::update(db, id, user_id, patch)? else {
        bail!("Bookmark not found: {}", id);
    };

    output.success(&format!("Updated bookmark {}", bookmark.id));
    output.print_bookmark(&bookmark);
    Ok(())
}

/// Delete a bookmark
pub fn delete(db: &mut Database, user_id: i64, id: i64, output: &Output) -> Result<()> {
    if !bookmarks::delete(db, id, user_id)? {
        bail!("Bookmark not found: {}", id);
    }

    output.success(&format!("Deleted bookmark {}", id));
    Ok(())
}
