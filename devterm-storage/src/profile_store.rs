use crate::error::StorageResult;
use devterm_types::{Identity, TermEntry};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::warn;

const ENTRIES_PREFIX: &str = "devterm_data_";
const CURRENT_USER_KEY: &str = "devterm_current_user";

/// Profile-scoped slot storage backed by SQLite.
pub struct ProfileStore {
    conn: Arc<Mutex<Connection>>,
}

impl ProfileStore {
    /// Opens (or creates) a profile store at the given path.
    pub fn new(path: &Path) -> StorageResult<Self> {
        let conn = Connection::open(path)?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Opens an in-memory profile store (for testing).
    pub fn open_in_memory() -> StorageResult<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> StorageResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS slots (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            ",
        )?;
        Ok(())
    }

    // ── Generic slots ────────────────────────────────────────────

    /// Writes a slot, replacing any previous value.
    pub fn write_slot(&self, key: &str, value: &str) -> StorageResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO slots (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    /// Reads a slot, `None` when absent.
    pub fn read_slot(&self, key: &str) -> StorageResult<Option<String>> {
        let conn = self.conn.lock().unwrap();
        let value = conn
            .query_row("SELECT value FROM slots WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    /// Deletes a slot. Absent slots are a no-op.
    pub fn delete_slot(&self, key: &str) -> StorageResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute("DELETE FROM slots WHERE key = ?1", params![key])?;
        Ok(())
    }

    // ── Entry datasets ───────────────────────────────────────────

    /// Saves an identity's entry list, overwriting the previous dataset.
    ///
    /// The list is serialized in its exact in-memory order (newest first) so
    /// a later load reproduces the store verbatim.
    pub fn save_entries(&self, email: &str, entries: &[TermEntry]) -> StorageResult<()> {
        let json = serde_json::to_string(entries)?;
        self.write_slot(&entries_key(email), &json)
    }

    /// Loads an identity's entry list.
    ///
    /// An absent slot yields an empty list. A malformed slot also yields an
    /// empty list, with a warning — corrupted local data resets that
    /// identity's view rather than crashing.
    pub fn load_entries(&self, email: &str) -> StorageResult<Vec<TermEntry>> {
        match self.read_slot(&entries_key(email))? {
            None => Ok(Vec::new()),
            Some(json) => match serde_json::from_str(&json) {
                Ok(entries) => Ok(entries),
                Err(e) => {
                    warn!(email, error = %e, "malformed entry dataset, resetting to empty");
                    Ok(Vec::new())
                }
            },
        }
    }

    /// Removes an identity's persisted dataset.
    pub fn delete_entries(&self, email: &str) -> StorageResult<()> {
        self.delete_slot(&entries_key(email))
    }

    // ── Current identity ─────────────────────────────────────────

    /// Persists the active identity so a restart can resume the session.
    pub fn save_current_identity(&self, identity: &Identity) -> StorageResult<()> {
        let json = serde_json::to_string(identity)?;
        self.write_slot(CURRENT_USER_KEY, &json)
    }

    /// Loads the active identity, `None` when signed out or the slot is
    /// malformed (logged, not propagated).
    pub fn load_current_identity(&self) -> StorageResult<Option<Identity>> {
        match self.read_slot(CURRENT_USER_KEY)? {
            None => Ok(None),
            Some(json) => match serde_json::from_str(&json) {
                Ok(identity) => Ok(Some(identity)),
                Err(e) => {
                    warn!(error = %e, "malformed current-identity slot, ignoring");
                    Ok(None)
                }
            },
        }
    }

    /// Clears the active identity (sign-out).
    pub fn clear_current_identity(&self) -> StorageResult<()> {
        self.delete_slot(CURRENT_USER_KEY)
    }
}

fn entries_key(email: &str) -> String {
    format!("{ENTRIES_PREFIX}{email}")
}
