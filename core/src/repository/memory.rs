use std::cell::RefCell;

use anyhow::Result;

use crate::model::task::{Task, TaskList};
use crate::repository::codec::{decode_tasks, encode_tasks};
use crate::repository::store::TaskStore;

/// Keeps the slot as raw text in memory, so it behaves exactly like the file
/// store including lenient decoding.
#[derive(Debug, Default)]
pub struct MemoryTaskStore {
    slot: RefCell<Option<String>>,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: RefCell::new(Some(raw.into())),
        }
    }

    pub fn with_tasks(tasks: &[Task]) -> Result<Self> {
        let store = Self::new();
        store.save(tasks)?;
        Ok(store)
    }

    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl TaskStore for MemoryTaskStore {
    fn load(&self) -> TaskList {
        decode_tasks(self.slot.borrow().as_deref())
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        let encoded = encode_tasks(tasks)?;
        *self.slot.borrow_mut() = Some(encoded);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slot_loads_empty() {
        let store = MemoryTaskStore::new();
        assert!(store.load().is_empty());
        assert_eq!(store.raw(), None);
    }

    #[test]
    fn test_save_overwrites() {
        let store = MemoryTaskStore::new();
        store.save(&[Task::new("a"), Task::new("b")]).unwrap();
        store.save(&[Task::new("c")]).unwrap();
        let tasks = store.load();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text, "c");
    }

    #[test]
    fn test_round_trip_is_noop() {
        let store = MemoryTaskStore::with_tasks(&[Task::new("a"), Task::new("b")]).unwrap();
        let before = store.raw();
        store.save(&store.load()).unwrap();
        assert_eq!(store.raw(), before);
    }

    #[test]
    fn test_round_trip_of_plain_entries_keeps_values() {
        let raw = r#"[{"text":"a","completed":false},{"text":"b","completed":true}]"#;
        let store = MemoryTaskStore::with_raw(raw);

        store.save(&store.load()).unwrap();
        let before: serde_json::Value = serde_json::from_str(raw).unwrap();
        let after: serde_json::Value = serde_json::from_str(&store.raw().unwrap()).unwrap();
        assert_eq!(before, after);
    }
}
