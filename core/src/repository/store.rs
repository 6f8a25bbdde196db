use crate::model::task::{Task, TaskList};
use anyhow::Result;

/// Persistence boundary for the task list.
///
/// `load` never fails: a missing or unreadable slot is an empty list.
/// `save` overwrites the whole slot.
pub trait TaskStore {
    fn load(&self) -> TaskList;
    fn save(&self, tasks: &[Task]) -> Result<()>;
}

impl<S: TaskStore + ?Sized> TaskStore for &S {
    fn load(&self) -> TaskList {
        (**self).load()
    }

    fn save(&self, tasks: &[Task]) -> Result<()> {
        (**self).save(tasks)
    }
}
