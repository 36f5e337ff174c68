//! Task Persistence
//!
//! The whole task array is stored as JSON under a single key and replaced on
//! every change.

use std::sync::Mutex;

use gloo_storage::{LocalStorage, Storage};

use crate::error::StorageError;
use crate::models::Task;

/// Durable slot holding the serialized task array
pub trait TaskStorage: Send + Sync {
    /// Read the stored tasks. `Ok(None)` when nothing was stored yet.
    fn load(&self) -> Result<Option<Vec<Task>>, StorageError>;

    /// Replace the stored tasks
    fn save(&self, tasks: &[Task]) -> Result<(), StorageError>;
}

/// Browser `localStorage` backend
pub struct LocalTaskStorage {
    key: String,
}

impl LocalTaskStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl TaskStorage for LocalTaskStorage {
    fn load(&self) -> Result<Option<Vec<Task>>, StorageError> {
        let stored: Result<Vec<Task>, gloo_storage::errors::StorageError> = LocalStorage::get(&self.key);
        match stored {
            Ok(tasks) => Ok(Some(tasks)),
            Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, tasks: &[Task]) -> Result<(), StorageError> {
        LocalStorage::set(&self.key, tasks)?;
        Ok(())
    }
}

/// In-memory backend keeping the same JSON encoding as `localStorage`
#[derive(Default)]
pub struct MemoryTaskStorage {
    slot: Mutex<Option<String>>,
}

impl MemoryTaskStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing JSON payload
    #[cfg(test)]
    pub fn with_payload(json: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(json.into())),
        }
    }

    /// Raw stored JSON, if any
    #[cfg(test)]
    pub fn payload(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }
}

impl TaskStorage for MemoryTaskStorage {
    fn load(&self) -> Result<Option<Vec<Task>>, StorageError> {
        let slot = self
            .slot
            .lock()
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        match slot.as_deref() {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }

    fn save(&self, tasks: &[Task]) -> Result<(), StorageError> {
        let json = serde_json::to_string(tasks)?;
        let mut slot = self
            .slot
            .lock()
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        *slot = Some(json);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task_list::TaskList;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_empty_storage_loads_none() {
        let storage = MemoryTaskStorage::new();
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn test_reload_reproduces_tasks() {
        let storage = MemoryTaskStorage::new();
        let now = Utc.with_ymd_and_hms(2026, 10, 18, 8, 0, 0).unwrap();

        let mut list = TaskList::default();
        list.add("Buy milk", now).unwrap();
        storage.save(list.tasks()).unwrap();

        let reloaded = TaskList::restore(storage.load().unwrap().unwrap());
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.tasks()[0].text, "Buy milk");
        assert!(!reloaded.tasks()[0].completed);
        assert_eq!(reloaded.tasks()[0].date_added, now);
        assert_eq!(reloaded.tasks()[0].id, list.tasks()[0].id);
    }

    #[test]
    fn test_applied_edit_is_persisted() {
        let storage = MemoryTaskStorage::new();
        let now = Utc.with_ymd_and_hms(2026, 10, 18, 8, 0, 0).unwrap();

        let mut list = TaskList::default();
        let id = list.add("Buy milk", now).unwrap();
        list.toggle_edit(id).unwrap();
        list.apply_edit(id, "Buy bread").unwrap();
        storage.save(list.tasks()).unwrap();

        let payload = storage.payload().unwrap();
        assert!(payload.contains(r#""text":"Buy bread""#));
        assert!(payload.contains(r#""edit":false"#));
    }

    #[test]
    fn test_save_overwrites_whole_array() {
        let storage = MemoryTaskStorage::new();
        let now = Utc.with_ymd_and_hms(2026, 10, 18, 8, 0, 0).unwrap();

        let mut list = TaskList::default();
        let first = list.add("a", now).unwrap();
        list.add("b", now).unwrap();
        storage.save(list.tasks()).unwrap();
        list.delete(first).unwrap();
        storage.save(list.tasks()).unwrap();

        let loaded = storage.load().unwrap().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].text, "b");
    }

    #[test]
    fn test_loads_payload_written_by_browser_date() {
        let storage = MemoryTaskStorage::with_payload(
            r#"[{"text":"Water plants","completed":false,"edit":true,"dateAdded":"2026-10-17T21:15:00.000Z"}]"#,
        );
        let tasks = storage.load().unwrap().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "Water plants");
        assert_eq!(tasks[0].date_added, Utc.with_ymd_and_hms(2026, 10, 17, 21, 15, 0).unwrap());
    }

    #[test]
    fn test_corrupt_payload_is_an_error() {
        let storage = MemoryTaskStorage::with_payload("{not json");
        assert!(matches!(storage.load(), Err(StorageError::Encode(_))));
    }
}
