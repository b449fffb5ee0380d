//! Bookmark Manager.
//!
//! Implements `BookmarkManagerTrait` on SQLite: adding, tagging, searching and removing
//! bookmarks.

use rusqlite::{params, Connection, OptionalExtension};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

use crate::managers::history_manager::like_pattern;
use crate::types::bookmark::Bookmark;
use crate::types::errors::BookmarkError;

/// Trait defining bookmark management operations.
pub trait BookmarkManagerTrait {
    fn add_bookmark(&mut self, url: &str, title: &str) -> Result<String, BookmarkError>;
    fn remove_bookmark(&mut self, id: &str) -> Result<(), BookmarkError>;
    fn update_title(&mut self, id: &str, title: &str) -> Result<(), BookmarkError>;
    fn add_tag(&mut self, id: &str, tag: &str) -> Result<(), BookmarkError>;
    fn search_bookmarks(&self, query: &str) -> Result<Vec<Bookmark>, BookmarkError>;
    fn list_bookmarks(&self) -> Result<Vec<Bookmark>, BookmarkError>;
}

/// Bookmark manager backed by a SQLite connection.
pub struct BookmarkManager<'a> {
    conn: &'a Connection,
}

const SELECT_BOOKMARK: &str = "SELECT id, url, title, created_at, updated_at FROM bookmarks";

impl<'a> BookmarkManager<'a> {
    /// Creates a new `BookmarkManager` using the provided database connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    /// Reads a bookmark row; tags are attached separately.
    fn row_to_bookmark(row: &rusqlite::Row) -> rusqlite::Result<Bookmark> {
        Ok(Bookmark {
            id: row.get(0)?,
            url: row.get(1)?,
            title: row.get(2)?,
            tags: Vec::new(),
            created_at: row.get(3)?,
            updated_at: row.get(4)?,
        })
    }

    fn tags_for(&self, id: &str) -> Result<Vec<String>, BookmarkError> {
        let mut stmt = self
            .conn
            .prepare("SELECT tag FROM bookmark_tags WHERE bookmark_id = ?1 ORDER BY tag")
            .map_err(|e| BookmarkError::DatabaseError(e.to_string()))?;
        let rows = stmt
            .query_map(params![id], |row| row.get::<_, String>(0))
            .map_err(|e| BookmarkError::DatabaseError(e.to_string()))?;
        rows.map(|r| r.map_err(|e| BookmarkError::DatabaseError(e.to_string())))
            .collect()
    }

    fn query_bookmarks(
        &self,
        sql: &str,
        args: impl rusqlite::Params,
    ) -> Result<Vec<Bookmark>, BookmarkError> {
        let mut stmt = self
            .conn
            .prepare(sql)
            .map_err(|e| BookmarkError::DatabaseError(e.to_string()))?;
        let rows = stmt
            .query_map(args, Self::row_to_bookmark)
            .map_err(|e| BookmarkError::DatabaseError(e.to_string()))?;

        let mut results = Vec::new();
        for row in rows {
            let mut bookmark = row.map_err(|e| BookmarkError::DatabaseError(e.to_string()))?;
            bookmark.tags = self.tags_for(&bookmark.id)?;
            results.push(bookmark);
        }
        Ok(results)
    }
}

impl<'a> BookmarkManagerTrait for BookmarkManager<'a> {
    /// Adds a new bookmark. Returns the generated bookmark ID.
    fn add_bookmark(&mut self, url: &str, title: &str) -> Result<String, BookmarkError> {
        let existing: Option<String> = self
            .conn
            .query_row(
                "SELECT id FROM bookmarks WHERE url = ?1",
                params![url],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| BookmarkError::DatabaseError(e.to_string()))?;
        if existing.is_some() {
            return Err(BookmarkError::DuplicateUrl(url.to_string()));
        }

        let id = Uuid::new_v4().to_string();
        let now = Self::now();
        self.conn
            .execute(
                "INSERT INTO bookmarks (id, url, title, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5)",
                params![id, url, title, now, now],
            )
            .map_err(|e| BookmarkError::DatabaseError(e.to_string()))?;

        Ok(id)
    }

    fn remove_bookmark(&mut self, id: &str) -> Result<(), BookmarkError> {
        let affected = self
            .conn
            .execute("DELETE FROM bookmarks WHERE id = ?1", params![id])
            .map_err(|e| BookmarkError::DatabaseError(e.to_string()))?;

        if affected == 0 {
            return Err(BookmarkError::NotFound(id.to_string()));
        }
        Ok(())
    }

    fn update_title(&mut self, id: &str, title: &str) -> Result<(), BookmarkError> {
        let affected = self
            .conn
            .execute(
                "UPDATE bookmarks SET title = ?1, updated_at = ?2 WHERE id = ?3",
                params![title, Self::now(), id],
            )
            .map_err(|e| BookmarkError::DatabaseError(e.to_string()))?;

        if affected == 0 {
            return Err(BookmarkError::NotFound(id.to_string()));
        }
        Ok(())
    }

    /// Attaches a tag to a bookmark. Adding an existing tag is a no-op.
    fn add_tag(&mut self, id: &str, tag: &str) -> Result<(), BookmarkError> {
        let exists: i32 = self
            .conn
            .query_row(
                "SELECT COUNT(*) FROM bookmarks WHERE id = ?1",
                params![id],
                |row| row.get(0),
            )
            .map_err(|e| BookmarkError::DatabaseError(e.to_string()))?;
        if exists == 0 {
            return Err(BookmarkError::NotFound(id.to_string()));
        }

        self.conn
            .execute(
                "INSERT OR IGNORE INTO bookmark_tags (bookmark_id, tag) VALUES (?1, ?2)",
                params![id, tag],
            )
            .map_err(|e| BookmarkError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    /// Case-insensitive substring search over URL and title.
    fn search_bookmarks(&self, query: &str) -> Result<Vec<Bookmark>, BookmarkError> {
        let sql = format!(
            "{SELECT_BOOKMARK} WHERE lower(url) LIKE ?1 ESCAPE '\\' OR lower(title) LIKE ?1 ESCAPE '\\' \
             ORDER BY updated_at DESC"
        );
        self.query_bookmarks(&sql, params![like_pattern(query)])
    }

    fn list_bookmarks(&self) -> Result<Vec<Bookmark>, BookmarkError> {
        let sql = format!("{SELECT_BOOKMARK} ORDER BY created_at, url");
        self.query_bookmarks(&sql, [])
    }
}
