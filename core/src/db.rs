use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use rusqlite::{Connection, params};

use crate::models::FavoriteRecord;

/// Storage key the serialized favorites collection lives under.
pub const FAVORITES_KEY: &str = "favorite_recipes";

/// Local store backed by a single sqlite file.
///
/// The favorites collection is one JSON-serialized array in the
/// `user_settings` key/value table; every mutation rewrites the whole blob.
/// Collections are expected to stay in the tens of records.
///
/// `Connection` is `!Sync`, so read-modify-write sequences on the blob are
/// single-threaded by construction. A multi-threaded embedder must add its
/// own mutex around the store.
pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {}", path.display()))?;
        let db = Database { conn };
        db.migrate()?;
        Ok(db)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Database { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<()> {
        let version: i64 = self
            .conn
            .pragma_query_value(None, "user_version", |row| row.get(0))?;

        if version < 1 {
            self.conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS user_settings (
                    key TEXT PRIMARY KEY,
                    value TEXT NOT NULL,
                    updated_at TEXT NOT NULL
                );

                PRAGMA user_version = 1;",
            )?;
        }

        Ok(())
    }

    // --- Key/value slots ---

    pub fn set_setting(&self, key: &str, value: &str) -> Result<()> {
        let now = Local::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO user_settings (key, value, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, now],
        )?;
        Ok(())
    }

    pub fn get_setting(&self, key: &str) -> Result<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM user_settings WHERE key = ?1")?;
        let mut rows = stmt.query(params![key])?;
        if let Some(row) = rows.next()? {
            Ok(Some(row.get(0)?))
        } else {
            Ok(None)
        }
    }

    pub fn delete_setting(&self, key: &str) -> Result<bool> {
        let rows = self
            .conn
            .execute("DELETE FROM user_settings WHERE key = ?1", params![key])?;
        Ok(rows > 0)
    }

    // --- Favorites ---

    /// Read the whole favorites collection, insertion order preserved.
    /// An absent or undecodable blob is an empty collection, not an error.
    pub fn load_favorites(&self) -> Result<Vec<FavoriteRecord>> {
        match self.get_setting(FAVORITES_KEY)? {
            Some(blob) => Ok(serde_json::from_str(&blob).unwrap_or_default()),
            None => Ok(Vec::new()),
        }
    }

    fn save_favorites(&self, favorites: &[FavoriteRecord]) -> Result<()> {
        let blob = serde_json::to_string(favorites).context("Failed to serialize favorites")?;
        self.set_setting(FAVORITES_KEY, &blob)
    }

    pub fn is_favorite(&self, uri: &str) -> Result<bool> {
        Ok(self.load_favorites()?.iter().any(|f| f.uri == uri))
    }

    /// Append the record unless one with the same uri already exists.
    /// A duplicate add is a no-op (not an update); returns whether the
    /// record was inserted.
    pub fn add_favorite(&self, record: &FavoriteRecord) -> Result<bool> {
        let mut favorites = self.load_favorites()?;
        if favorites.iter().any(|f| f.uri == record.uri) {
            return Ok(false);
        }
        favorites.push(record.clone());
        self.save_favorites(&favorites)?;
        Ok(true)
    }

    /// Remove the record with the given uri, if present. Returns whether
    /// anything was removed; a missing uri is a no-op.
    pub fn remove_favorite(&self, uri: &str) -> Result<bool> {
        let mut favorites = self.load_favorites()?;
        let before = favorites.len();
        favorites.retain(|f| f.uri != uri);
        if favorites.len() == before {
            return Ok(false);
        }
        self.save_favorites(&favorites)?;
        Ok(true)
    }

    /// Flip membership for the candidate's uri. Returns the new state:
    /// true when the recipe is now a favorite.
    pub fn toggle_favorite(&self, candidate: &FavoriteRecord) -> Result<bool> {
        if self.remove_favorite(&candidate.uri)? {
            Ok(false)
        } else {
            self.add_favorite(candidate)?;
            Ok(true)
        }
    }
}
