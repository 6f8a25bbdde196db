use std::path::PathBuf;

use anyhow::{anyhow, Result};

const DEFAULT_DIR_NAME: &str = ".todolist";
pub const DEFAULT_SLOT: &str = "todos";

/// Where the task list lives: a data directory and the slot key naming the
/// JSON file inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub data_dir: PathBuf,
    pub slot: String,
}

impl StoreConfig {
    pub fn resolve(data_dir: Option<PathBuf>, slot: Option<String>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => {
                let home_dir = dirs::home_dir()
                    .ok_or_else(|| anyhow!("Could not determine home directory"))?;
                home_dir.join(DEFAULT_DIR_NAME)
            }
        };

        let slot = slot.unwrap_or_else(|| DEFAULT_SLOT.to_string());
        validate_slot(&slot)?;

        Ok(Self { data_dir, slot })
    }

    pub fn slot_path(&self) -> PathBuf {
        self.data_dir.join(format!("{}.json", self.slot))
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join("todolist.log")
    }
}

fn validate_slot(slot: &str) -> Result<()> {
    if slot.trim().is_empty() {
        return Err(anyhow!("Slot key must not be empty"));
    }
    if slot.contains(['/', '\\']) || slot == "." || slot == ".." {
        return Err(anyhow!("Invalid slot key: '{}'", slot));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_dir_and_default_slot() {
        let config = StoreConfig::resolve(Some(PathBuf::from("/tmp/tl")), None).unwrap();
        assert_eq!(config.slot, DEFAULT_SLOT);
        assert_eq!(config.slot_path(), PathBuf::from("/tmp/tl/todos.json"));
        assert_eq!(config.log_path(), PathBuf::from("/tmp/tl/todolist.log"));
    }

    #[test]
    fn test_custom_slot() {
        let config = StoreConfig::resolve(Some(PathBuf::from("/tmp/tl")), Some("work".into())).unwrap();
        assert_eq!(config.slot_path(), PathBuf::from("/tmp/tl/work.json"));
    }

    #[test]
    fn test_rejects_bad_slots() {
        let dir = Some(PathBuf::from("/tmp/tl"));
        assert!(StoreConfig::resolve(dir.clone(), Some("".into())).is_err());
        assert!(StoreConfig::resolve(dir.clone(), Some("  ".into())).is_err());
        assert!(StoreConfig::resolve(dir.clone(), Some("a/b".into())).is_err());
        assert!(StoreConfig::resolve(dir, Some("..".into())).is_err());
    }
}
