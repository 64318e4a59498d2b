//! SQLite-backed resolution history.
//!
//! Every successful resolution can be recorded so users can re-download a
//! video without resolving it again. The store is append-plus-prune: new rows
//! go in, and [`HistoryDb::prune`] trims the oldest rows past the configured
//! limit.

use anyhow::Result;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Row, Sqlite};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::descriptor::VideoDescriptor;
use crate::platform::Platform;

/// One recorded resolution, as read back from the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub id: i64,
    pub url: String,
    pub platform: Platform,
    pub title: String,
    pub download_url: String,
    pub demo: bool,
    pub created_at: i64,
}

/// Percent-encode a path for use in a sqlite:// URI so spaces and special chars don't break parsing.
fn path_to_sqlite_uri(path: &Path) -> String {
    let s = path.to_string_lossy();
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '%' => out.push_str("%25"),
            ' ' => out.push_str("%20"),
            '#' => out.push_str("%23"),
            '?' => out.push_str("%3F"),
            '&' => out.push_str("%26"),
            c => out.push(c),
        }
    }
    format!("sqlite://{}", out)
}

/// Handle to the SQLite-backed history database.
///
/// The database file is stored under the XDG state directory:
/// `~/.local/state/svdl/history.db`.
#[derive(Clone)]
pub struct HistoryDb {
    pool: Pool<Sqlite>,
}

impl HistoryDb {
    /// Open (or create) the default history database and run migrations.
    pub async fn open_default() -> Result<Self> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("svdl")?;
        let db_path = xdg_dirs.place_state_file("history.db")?;
        Self::open_at(db_path).await
    }

    /// Open (or create) the database at a specific path. Creates parent dirs if needed.
    /// Intended for tests so the DB can be placed in a temp directory.
    pub async fn open_at(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let uri = path_to_sqlite_uri(path) + "?mode=rwc";
        let pool = SqlitePoolOptions::new()
            .max_connections(4)
            .connect(&uri)
            .await?;
        let db = HistoryDb { pool };
        db.migrate().await?;
        Ok(db)
    }

    async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS resolutions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                url TEXT NOT NULL,
                platform TEXT NOT NULL,
                title TEXT NOT NULL,
                download_url TEXT NOT NULL,
                demo INTEGER NOT NULL,
                created_at INTEGER NOT NULL
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Record one resolution. Returns the new row id.
    pub async fn add(&self, url: &str, descriptor: &VideoDescriptor) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO resolutions (url, platform, title, download_url, demo, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(url)
        .bind(descriptor.platform.as_str())
        .bind(&descriptor.title)
        .bind(&descriptor.download_url)
        .bind(descriptor.demo as i64)
        .bind(unix_timestamp())
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// The most recent resolutions, newest first.
    pub async fn recent(&self, limit: usize) -> Result<Vec<HistoryEntry>> {
        let rows = sqlx::query(
            r#"
            SELECT id, url, platform, title, download_url, demo, created_at
            FROM resolutions
            ORDER BY id DESC
            LIMIT ?1
            "#,
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            let demo: i64 = row.get("demo");
            let platform_str: String = row.get("platform");
            out.push(HistoryEntry {
                id: row.get("id"),
                url: row.get("url"),
                platform: Platform::from_str(&platform_str),
                title: row.get("title"),
                download_url: row.get("download_url"),
                demo: demo != 0,
                created_at: row.get("created_at"),
            });
        }

        Ok(out)
    }

    /// Delete all rows older than the newest `keep`. Returns rows removed.
    pub async fn prune(&self, keep: usize) -> Result<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM resolutions
            WHERE id NOT IN (SELECT id FROM resolutions ORDER BY id DESC LIMIT ?1)
            "#,
        )
        .bind(keep as i64)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete everything. Returns rows removed.
    pub async fn clear(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM resolutions")
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

/// Current time as Unix seconds (for DB timestamps).
fn unix_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}
