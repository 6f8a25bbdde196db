use std::collections::HashMap;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::task::{Task, TaskList};

/// Persisted shape of a task. `id` is absent on entries written before ids
/// existed and stays absent when they are written back.
#[derive(Serialize, Deserialize, Debug)]
struct StoredTask {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<Uuid>,
    text: String,
    #[serde(default)]
    completed: bool,
}

/// Parses the raw slot content. Absent and malformed content both yield an
/// empty list.
pub fn decode_tasks(raw: Option<&str>) -> TaskList {
    let Some(raw) = raw else {
        return Vec::new();
    };

    let stored = match serde_json::from_str::<Vec<StoredTask>>(raw) {
        Ok(stored) => stored,
        Err(e) => {
            tracing::warn!(error = %e, "stored task list is malformed, treating it as empty");
            return Vec::new();
        }
    };

    let mut seen: HashMap<String, usize> = HashMap::new();
    stored
        .into_iter()
        .map(|entry| match entry.id {
            Some(id) => Task::stored(id, entry.text, entry.completed),
            None => {
                let occurrence = seen.entry(entry.text.clone()).or_default();
                let task = Task::without_stored_id(entry.text, entry.completed, *occurrence);
                *occurrence += 1;
                task
            }
        })
        .collect()
}

pub fn encode_tasks(tasks: &[Task]) -> Result<String> {
    let stored: Vec<StoredTask> = tasks
        .iter()
        .map(|task| StoredTask {
            id: task.has_stored_id().then_some(task.id),
            text: task.text.clone(),
            completed: task.completed,
        })
        .collect();
    Ok(serde_json::to_string_pretty(&stored)?)
}
