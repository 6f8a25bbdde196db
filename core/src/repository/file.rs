use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::StoreConfig;
use crate::model::task::{Task, TaskList};
use crate::repository::codec::{decode_tasks, encode_tasks};
use crate::repository::store::TaskStore;

/// Stores the task list as a JSON file named after the slot key.
///
/// The file is only created by the first save; until then the slot is absent
/// and loads as an empty list.
#[derive(Clone, Debug)]
pub struct FileTaskStore {
    file_path: PathBuf,
}

impl FileTaskStore {
    pub fn new(config: &StoreConfig) -> Result<Self> {
        fs::create_dir_all(&config.data_dir).with_context(|| {
            format!("Could not create data directory {}", config.data_dir.display())
        })?;

        Ok(FileTaskStore {
            file_path: config.slot_path(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn read_slot(&self) -> Option<String> {
        match fs::read_to_string(&self.file_path) {
            Ok(content) => Some(content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(path = %self.file_path.display(), error = %e, "could not read task list");
                None
            }
        }
    }
}

impl TaskStore for FileTaskStore {
    fn load(&self) -> TaskList {
        decode_tasks(self.read_slot().as_deref())
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        let encoded = encode_tasks(tasks)?;
        let file = File::create(&self.file_path)
            .with_context(|| format!("Could not write {}", self.file_path.display()))?;
        let mut writer = BufWriter::new(file);
        writer.write_all(encoded.as_bytes())?;
        writer.flush()?;
        tracing::debug!(path = %self.file_path.display(), count = tasks.len(), "saved task list");
        Ok(())
    }
}
