//! Persistent store for scans, chat history, settings, and cached weather
//!
//! Single SQLite database. Scan history is capped at the newest 50
//! entries; the cached weather observation expires after one hour.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use crate::i18n::Language;
use crate::weather::WeatherObservation;

/// Newest entries kept in scan history
pub const MAX_HISTORY_ITEMS: usize = 50;

/// Cached weather observations older than this are discarded
const WEATHER_TTL_MINUTES: i64 = 60;

const DEFAULT_FARMER_NAME: &str = "Farmer";

/// One persisted diagnosis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanRecord {
    pub id: String,
    pub disease_id: String,
    pub confidence: u8,
    pub image_path: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Ai => "ai",
        }
    }
}

impl FromStr for Sender {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "user" => Ok(Sender::User),
            "ai" => Ok(Sender::Ai),
            other => anyhow::bail!("Invalid message sender: {}", other),
        }
    }
}

/// One persisted chat message in the current conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub sender: Sender,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// SQLite-backed store
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open (and if needed create) the database at `path`
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory {}", parent.display()))?;
        }
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database {}", path.display()))?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS scans (
                    id TEXT PRIMARY KEY,
                    disease_id TEXT NOT NULL,
                    confidence INTEGER NOT NULL,
                    image_path TEXT,
                    created_at TEXT NOT NULL
                );
                CREATE TABLE IF NOT EXISTS chat_messages (
                    id TEXT PRIMARY KEY,
                    sender TEXT NOT NULL,
                    text TEXT NOT NULL,
                    created_at TEXT NOT NULL
                );
                CREATE TABLE IF NOT EXISTS settings (
                    key TEXT PRIMARY KEY,
                    value TEXT NOT NULL
                );
                CREATE TABLE IF NOT EXISTS weather_cache (
                    id INTEGER PRIMARY KEY CHECK (id = 1),
                    payload TEXT NOT NULL,
                    cached_at TEXT NOT NULL
                );",
            )
            .context("Failed to initialize database schema")?;
        Ok(())
    }

    // ---- Scan history ----

    /// Persist a new scan as the most recent one, pruning history beyond
    /// the cap
    pub fn save_scan(
        &self,
        disease_id: &str,
        confidence: u8,
        image_path: Option<&str>,
    ) -> Result<ScanRecord> {
        let record = ScanRecord {
            id: uuid::Uuid::new_v4().to_string(),
            disease_id: disease_id.to_string(),
            confidence,
            image_path: image_path.map(|p| p.to_string()),
            created_at: Utc::now(),
        };
        self.conn
            .execute(
                "INSERT INTO scans (id, disease_id, confidence, image_path, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    record.id,
                    record.disease_id,
                    record.confidence,
                    record.image_path,
                    record.created_at,
                ],
            )
            .context("Failed to save scan")?;
        self.conn
            .execute(
                "DELETE FROM scans WHERE id NOT IN (
                    SELECT id FROM scans ORDER BY created_at DESC, id LIMIT ?1
                 )",
                params![MAX_HISTORY_ITEMS as i64],
            )
            .context("Failed to prune scan history")?;
        tracing::debug!(scan_id = %record.id, disease = %record.disease_id, "scan saved");
        Ok(record)
    }

    /// Most recent scan, if any
    pub fn last_scan(&self) -> Result<Option<ScanRecord>> {
        self.conn
            .query_row(
                "SELECT id, disease_id, confidence, image_path, created_at
                 FROM scans ORDER BY created_at DESC, id LIMIT 1",
                [],
                row_to_scan,
            )
            .optional()
            .context("Failed to read last scan")
    }

    /// Scan history, newest first
    pub fn scan_history(&self) -> Result<Vec<ScanRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, disease_id, confidence, image_path, created_at
             FROM scans ORDER BY created_at DESC, id",
        )?;
        let rows = stmt
            .query_map([], row_to_scan)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .context("Failed to read scan history")?;
        Ok(rows)
    }

    pub fn delete_scan(&self, scan_id: &str) -> Result<bool> {
        let n = self
            .conn
            .execute("DELETE FROM scans WHERE id = ?1", params![scan_id])
            .context("Failed to delete scan")?;
        Ok(n > 0)
    }

    pub fn clear_scans(&self) -> Result<()> {
        self.conn
            .execute("DELETE FROM scans", [])
            .context("Failed to clear scan history")?;
        Ok(())
    }

    // ---- Chat history ----

    /// Append a message to the current conversation
    pub fn append_message(&self, sender: Sender, text: &str) -> Result<ChatMessage> {
        let message = ChatMessage {
            id: uuid::Uuid::new_v4().to_string(),
            sender,
            text: text.to_string(),
            created_at: Utc::now(),
        };
        self.conn
            .execute(
                "INSERT INTO chat_messages (id, sender, text, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    message.id,
                    message.sender.as_str(),
                    message.text,
                    message.created_at,
                ],
            )
            .context("Failed to append chat message")?;
        Ok(message)
    }

    /// Conversation in chronological order
    pub fn chat_history(&self) -> Result<Vec<ChatMessage>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, sender, text, created_at
             FROM chat_messages ORDER BY created_at, id",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, DateTime<Utc>>(3)?,
                ))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()
            .context("Failed to read chat history")?;

        rows.into_iter()
            .map(|(id, sender, text, created_at)| {
                Ok(ChatMessage {
                    id,
                    sender: sender.parse()?,
                    text,
                    created_at,
                })
            })
            .collect()
    }

    pub fn clear_chat(&self) -> Result<()> {
        self.conn
            .execute("DELETE FROM chat_messages", [])
            .context("Failed to clear chat history")?;
        Ok(())
    }

    // ---- Settings ----

    fn get_setting(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .with_context(|| format!("Failed to read setting {}", key))
    }

    fn set_setting(&self, key: &str, value: &str) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO settings (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key, value],
            )
            .with_context(|| format!("Failed to write setting {}", key))?;
        Ok(())
    }

    pub fn farmer_name(&self) -> Result<String> {
        Ok(self
            .get_setting("farmer_name")?
            .unwrap_or_else(|| DEFAULT_FARMER_NAME.to_string()))
    }

    pub fn set_farmer_name(&self, name: &str) -> Result<()> {
        self.set_setting("farmer_name", name)
    }

    pub fn language(&self) -> Result<Language> {
        Ok(self
            .get_setting("language")?
            .and_then(|code| code.parse().ok())
            .unwrap_or_default())
    }

    pub fn set_language(&self, language: Language) -> Result<()> {
        self.set_setting("language", language.code())
    }

    // ---- Weather cache ----

    /// Replace the cached observation
    pub fn cache_weather(&self, observation: &WeatherObservation) -> Result<()> {
        let payload =
            serde_json::to_string(observation).context("Failed to serialize observation")?;
        self.conn
            .execute(
                "INSERT INTO weather_cache (id, payload, cached_at) VALUES (1, ?1, ?2)
                 ON CONFLICT(id) DO UPDATE SET payload = excluded.payload,
                                               cached_at = excluded.cached_at",
                params![payload, Utc::now()],
            )
            .context("Failed to cache weather")?;
        Ok(())
    }

    /// Cached observation, or `None` once it is older than one hour
    pub fn cached_weather(&self) -> Result<Option<WeatherObservation>> {
        let row: Option<(String, DateTime<Utc>)> = self
            .conn
            .query_row(
                "SELECT payload, cached_at FROM weather_cache WHERE id = 1",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()
            .context("Failed to read weather cache")?;

        let (payload, cached_at) = match row {
            Some(r) => r,
            None => return Ok(None),
        };

        if Utc::now() - cached_at > Duration::minutes(WEATHER_TTL_MINUTES) {
            return Ok(None);
        }

        let observation =
            serde_json::from_str(&payload).context("Failed to parse cached observation")?;
        Ok(Some(observation))
    }

    /// Wipe everything: scans, chat, settings, cached weather
    pub fn clear_all(&self) -> Result<()> {
        self.conn
            .execute_batch(
                "DELETE FROM scans;
                 DELETE FROM chat_messages;
                 DELETE FROM settings;
                 DELETE FROM weather_cache;",
            )
            .context("Failed to clear store")?;
        Ok(())
    }
}

fn row_to_scan(row: &rusqlite::Row<'_>) -> rusqlite::Result<ScanRecord> {
    Ok(ScanRecord {
        id: row.get(0)?,
        disease_id: row.get(1)?,
        confidence: row.get(2)?,
        image_path: row.get(3)?,
        created_at: row.get(4)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::WeatherCondition;
    use tempfile::TempDir;

    fn open_store() -> (TempDir, Store) {
        let dir = TempDir::new().unwrap();
        let store = Store::open(&dir.path().join("leafsense.db")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_scan_round_trip_and_last_scan() {
        let (_dir, store) = open_store();
        assert!(store.last_scan().unwrap().is_none());

        let saved = store.save_scan("rust", 92, Some("/tmp/leaf.jpg")).unwrap();
        let last = store.last_scan().unwrap().unwrap();
        assert_eq!(last.id, saved.id);
        assert_eq!(last.disease_id, "rust");
        assert_eq!(last.confidence, 92);
        assert_eq!(last.image_path.as_deref(), Some("/tmp/leaf.jpg"));
    }

    #[test]
    fn test_scan_history_capped_at_fifty() {
        let (_dir, store) = open_store();
        for i in 0..60 {
            store
                .save_scan("early_blight", 85 + (i % 15) as u8, None)
                .unwrap();
        }
        let history = store.scan_history().unwrap();
        assert_eq!(history.len(), MAX_HISTORY_ITEMS);
    }

    #[test]
    fn test_delete_and_clear_scans() {
        let (_dir, store) = open_store();
        let a = store.save_scan("rust", 90, None).unwrap();
        store.save_scan("healthy", 95, None).unwrap();

        assert!(store.delete_scan(&a.id).unwrap());
        assert!(!store.delete_scan(&a.id).unwrap());
        assert_eq!(store.scan_history().unwrap().len(), 1);

        store.clear_scans().unwrap();
        assert!(store.last_scan().unwrap().is_none());
    }

    #[test]
    fn test_chat_history_chronological() {
        let (_dir, store) = open_store();
        store.append_message(Sender::User, "hello").unwrap();
        store.append_message(Sender::Ai, "Hello! I'm LeafSense AI").unwrap();

        let history = store.chat_history().unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].sender, Sender::User);
        assert_eq!(history[1].sender, Sender::Ai);

        store.clear_chat().unwrap();
        assert!(store.chat_history().unwrap().is_empty());
    }

    #[test]
    fn test_settings_defaults() {
        let (_dir, store) = open_store();
        assert_eq!(store.farmer_name().unwrap(), "Farmer");
        assert_eq!(store.language().unwrap(), Language::En);

        store.set_farmer_name("Asha").unwrap();
        store.set_language(Language::Hi).unwrap();
        assert_eq!(store.farmer_name().unwrap(), "Asha");
        assert_eq!(store.language().unwrap(), Language::Hi);
    }

    #[test]
    fn test_weather_cache_expires_after_an_hour() {
        let (_dir, store) = open_store();
        assert!(store.cached_weather().unwrap().is_none());

        let obs = WeatherObservation {
            temperature_c: 24,
            humidity_pct: 65.0,
            condition: WeatherCondition::Clear,
            location: "12.97, 77.59".to_string(),
            observed_at: Utc::now(),
        };
        store.cache_weather(&obs).unwrap();
        assert!(store.cached_weather().unwrap().is_some());

        // age the cache row past the TTL
        store
            .conn
            .execute(
                "UPDATE weather_cache SET cached_at = ?1 WHERE id = 1",
                params![Utc::now() - Duration::minutes(61)],
            )
            .unwrap();
        assert!(store.cached_weather().unwrap().is_none());
    }

    #[test]
    fn test_clear_all() {
        let (_dir, store) = open_store();
        store.save_scan("rust", 90, None).unwrap();
        store.append_message(Sender::User, "hi").unwrap();
        store.set_farmer_name("Asha").unwrap();

        store.clear_all().unwrap();
        assert!(store.last_scan().unwrap().is_none());
        assert!(store.chat_history().unwrap().is_empty());
        assert_eq!(store.farmer_name().unwrap(), "Farmer");
    }
}
