use thiserror::Error;
use uuid::Uuid;

use crate::model::task::Task;

const SHORT_ID_LEN: usize = 8;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveIdError {
    #[error("Task id is required")]
    Empty,
    #[error("No task matches id '{0}'")]
    Unknown(String),
    #[error("Ambiguous id '{prefix}' matches {matches:?}")]
    Ambiguous { prefix: String, matches: Vec<String> },
}

/// Finds the task whose id equals or starts with `prefix`.
pub fn resolve_id(prefix: &str, tasks: &[Task]) -> Result<Uuid, ResolveIdError> {
    let prefix = prefix.trim().to_lowercase();
    if prefix.is_empty() {
        return Err(ResolveIdError::Empty);
    }

    // 1. Exact match
    if let Some(task) = tasks.iter().find(|t| t.id.to_string() == prefix) {
        return Ok(task.id);
    }

    // 2. Prefix match
    let matches: Vec<&Task> = tasks
        .iter()
        .filter(|t| t.id.to_string().starts_with(&prefix))
        .collect();

    match matches.len() {
        1 => Ok(matches[0].id),
        0 => Err(ResolveIdError::Unknown(prefix)),
        _ => Err(ResolveIdError::Ambiguous {
            matches: matches.iter().map(|t| short_id(&t.id)).collect(),
            prefix,
        }),
    }
}

pub fn short_id(id: &Uuid) -> String {
    id.to_string()[..SHORT_ID_LEN].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task_with_id(id: &str) -> Task {
        let mut task = Task::new("t");
        task.id = Uuid::parse_str(id).unwrap();
        task
    }

    #[test]
    fn test_resolve_id() {
        let tasks = vec![
            task_with_id("aaaa1111-0000-0000-0000-000000000000"),
            task_with_id("aaaa2222-0000-0000-0000-000000000000"),
            task_with_id("bbbb0000-0000-0000-0000-000000000000"),
        ];

        assert_eq!(resolve_id("b", &tasks).unwrap(), tasks[2].id);
        assert_eq!(resolve_id("AAAA1", &tasks).unwrap(), tasks[0].id);
        assert_eq!(
            resolve_id("aaaa2222-0000-0000-0000-000000000000", &tasks).unwrap(),
            tasks[1].id
        );

        // Ambiguous
        assert!(matches!(
            resolve_id("aaaa", &tasks),
            Err(ResolveIdError::Ambiguous { .. })
        ));

        // Unknown
        assert_eq!(
            resolve_id("c", &tasks),
            Err(ResolveIdError::Unknown("c".to_string()))
        );
        assert_eq!(resolve_id("  ", &tasks), Err(ResolveIdError::Empty));
    }

    #[test]
    fn test_short_id() {
        let id = Uuid::parse_str("12345678-9abc-def0-1234-56789abcdef0").unwrap();
        assert_eq!(short_id(&id), "12345678");
    }
}
