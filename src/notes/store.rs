//! NoteStore — single-writer JSON-file note storage
//!
//! Owns the container file exclusively: every read-modify-write cycle runs
//! under one mutex, and the rewritten array lands via a sibling temp file
//! plus rename, so a crash mid-write never leaves a half-written container
//! and concurrent appends cannot lose each other's notes.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use parking_lot::Mutex;

use super::Note;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("notes file IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("notes file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// JSON-array-on-disk note store with serialized writers.
pub struct NoteStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl NoteStore {
    /// Open a store, creating the parent directory and an empty `[]`
    /// container on first run.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        if !path.exists() {
            write_atomic(&path, &[])?;
        }

        Ok(Self {
            path,
            lock: Mutex::new(()),
        })
    }

    /// Path of the container file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full ordered sequence of notes.
    pub fn list(&self) -> Result<Vec<Note>, StoreError> {
        let _guard = self.lock.lock();
        read_container(&self.path)
    }

    /// Append a note and rewrite the container, returning the new note.
    ///
    /// Runs the whole read-append-rewrite cycle under the store lock, so
    /// two concurrent calls cannot race on the pre-append state.
    pub fn add(&self, text: &str) -> Result<Note, StoreError> {
        let _guard = self.lock.lock();

        let mut notes = read_container(&self.path)?;

        // Timestamp-derived id, kept strictly increasing even when two
        // appends land within the same millisecond.
        let mut id = Utc::now().timestamp_millis();
        if let Some(last) = notes.last() {
            if id <= last.id {
                id = last.id + 1;
            }
        }

        let note = Note {
            id,
            text: text.to_string(),
            created: Utc::now(),
        };

        notes.push(note.clone());
        write_atomic(&self.path, &notes)?;

        Ok(note)
    }
}

fn read_container(path: &Path) -> Result<Vec<Note>, StoreError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Rewrite the container through a sibling temp file + rename.
fn write_atomic(path: &Path, notes: &[Note]) -> Result<(), StoreError> {
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, serde_json::to_vec_pretty(notes)?)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tempfile::tempdir;

    #[test]
    fn open_creates_empty_container() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data").join("notes.json");

        let store = NoteStore::open(&path).unwrap();

        assert!(path.exists());
        assert!(store.list().unwrap().is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap().trim(), "[]");
    }

    #[test]
    fn add_appends_at_end() {
        let dir = tempdir().unwrap();
        let store = NoteStore::open(dir.path().join("notes.json")).unwrap();

        store.add("first").unwrap();
        let created = store.add("x").unwrap();

        let notes = store.list().unwrap();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes.last().unwrap().text, "x");
        assert_eq!(notes.last().unwrap().id, created.id);
    }

    #[test]
    fn list_preserves_insertion_order() {
        let dir = tempdir().unwrap();
        let store = NoteStore::open(dir.path().join("notes.json")).unwrap();

        for i in 0..5 {
            store.add(&format!("note {}", i)).unwrap();
        }

        let texts: Vec<String> = store.list().unwrap().into_iter().map(|n| n.text).collect();
        assert_eq!(texts, vec!["note 0", "note 1", "note 2", "note 3", "note 4"]);
    }

    #[test]
    fn ids_strictly_increase() {
        let dir = tempdir().unwrap();
        let store = NoteStore::open(dir.path().join("notes.json")).unwrap();

        for _ in 0..20 {
            store.add("rapid").unwrap();
        }

        let notes = store.list().unwrap();
        for pair in notes.windows(2) {
            assert!(pair[1].id > pair[0].id, "ids must be strictly increasing");
        }
    }

    #[test]
    fn corrupted_container_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.json");
        let store = NoteStore::open(&path).unwrap();

        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(store.list(), Err(StoreError::Parse(_))));
        assert!(matches!(store.add("x"), Err(StoreError::Parse(_))));
    }

    #[test]
    fn concurrent_appends_are_serialized() {
        let dir = tempdir().unwrap();
        let store = Arc::new(NoteStore::open(dir.path().join("notes.json")).unwrap());

        let mut handles = Vec::new();
        for t in 0..4 {
            let store = Arc::clone(&store);
            handles.push(std::thread::spawn(move || {
                for i in 0..25 {
                    store.add(&format!("t{}-{}", t, i)).unwrap();
                }
            }));
        }
        for h in handles {
            h.join().unwrap();
        }

        // No lost updates: every append survives the rewrite cycle.
        assert_eq!(store.list().unwrap().len(), 100);
    }
}
