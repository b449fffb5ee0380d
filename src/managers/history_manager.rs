//! History Manager.
//!
//! Implements `HistoryManagerTrait` on SQLite. Visits to the same URL fold
//! into one row; its visit count and last visit time feed the suggestion
//! ranking.

use rusqlite::{params, Connection, OptionalExtension};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

use crate::types::errors::HistoryError;
use crate::types::history::HistoryEntry;

/// Trait defining history management operations.
pub trait HistoryManagerTrait {
    fn record_visit(&mut self, url: &str, title: &str) -> Result<String, HistoryError>;
    fn search_history(&self, query: &str) -> Result<Vec<HistoryEntry>, HistoryError>;
    fn list_history(&self, limit: Option<usize>) -> Result<Vec<HistoryEntry>, HistoryError>;
    fn delete_entry(&mut self, id: &str) -> Result<(), HistoryError>;
    fn clear_all(&mut self) -> Result<(), HistoryError>;
    fn is_recording_enabled(&self) -> bool;
    fn set_recording_enabled(&mut self, enabled: bool);
}

const ENTRY_COLUMNS: &str = "id, url, title, visit_time, visit_count";

fn db_err(e: rusqlite::Error) -> HistoryError {
    HistoryError::DatabaseError(e.to_string())
}

pub struct HistoryManager<'a> {
    conn: &'a Connection,
    recording_enabled: bool,
}

impl<'a> HistoryManager<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self {
            conn,
            recording_enabled: true,
        }
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    fn row_to_entry(row: &rusqlite::Row) -> rusqlite::Result<HistoryEntry> {
        Ok(HistoryEntry {
            id: row.get(0)?,
            url: row.get(1)?,
            title: row.get(2)?,
            visit_time: row.get(3)?,
            visit_count: row.get(4)?,
        })
    }

    fn select<P: rusqlite::Params>(&self, sql: &str, args: P) -> Result<Vec<HistoryEntry>, HistoryError> {
        let mut stmt = self.conn.prepare(sql).map_err(db_err)?;
        let rows = stmt.query_map(args, Self::row_to_entry).map_err(db_err)?;
        rows.map(|row| row.map_err(db_err)).collect()
    }
}

/// Builds a `LIKE` pattern matching `query` literally anywhere in the column.
pub(crate) fn like_pattern(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len() + 2);
    escaped.push('%');
    for c in query.to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

impl<'a> HistoryManagerTrait for HistoryManager<'a> {
    /// Records a visit and returns the row id. A repeat visit bumps the
    /// count and refreshes the time; an empty title keeps the stored one.
    fn record_visit(&mut self, url: &str, title: &str) -> Result<String, HistoryError> {
        if !self.recording_enabled {
            return Err(HistoryError::RecordingDisabled);
        }
        let now = Self::now();

        let existing: Option<String> = self
            .conn
            .query_row("SELECT id FROM history WHERE url = ?1", params![url], |row| row.get(0))
            .optional()
            .map_err(db_err)?;

        if let Some(id) = existing {
            self.conn
                .execute(
                    "UPDATE history \
                     SET visit_count = visit_count + 1, visit_time = ?1, \
                         title = CASE WHEN ?2 = '' THEN title ELSE ?2 END \
                     WHERE id = ?3",
                    params![now, title, id],
                )
                .map_err(db_err)?;
            return Ok(id);
        }

        let id = Uuid::new_v4().to_string();
        self.conn
            .execute(
                "INSERT INTO history (id, url, title, visit_time, visit_count) VALUES (?1, ?2, ?3, ?4, 1)",
                params![id, url, title, now],
            )
            .map_err(db_err)?;
        Ok(id)
    }

    /// Case-insensitive substring search over URL and title, most recent first.
    fn search_history(&self, query: &str) -> Result<Vec<HistoryEntry>, HistoryError> {
        let sql = format!(
            "SELECT {ENTRY_COLUMNS} FROM history \
             WHERE lower(url) LIKE ?1 ESCAPE '\\' OR lower(title) LIKE ?1 ESCAPE '\\' \
             ORDER BY visit_time DESC"
        );
        self.select(&sql, params![like_pattern(query)])
    }

    fn list_history(&self, limit: Option<usize>) -> Result<Vec<HistoryEntry>, HistoryError> {
        let limit = limit.map(|l| l as i64).unwrap_or(-1);
        let sql = format!("SELECT {ENTRY_COLUMNS} FROM history ORDER BY visit_time DESC LIMIT ?1");
        self.select(&sql, params![limit])
    }

    fn delete_entry(&mut self, id: &str) -> Result<(), HistoryError> {
        match self.conn.execute("DELETE FROM history WHERE id = ?1", params![id]) {
            Ok(0) => Err(HistoryError::NotFound(id.to_string())),
            Ok(_) => Ok(()),
            Err(e) => Err(db_err(e)),
        }
    }

    fn clear_all(&mut self) -> Result<(), HistoryError> {
        self.conn.execute("DELETE FROM history", []).map_err(db_err)?;
        Ok(())
    }

    fn is_recording_enabled(&self) -> bool {
        self.recording_enabled
    }

    /// Private mode: visits are refused while recording is off.
    fn set_recording_enabled(&mut self, enabled: bool) {
        self.recording_enabled = enabled;
    }
}
