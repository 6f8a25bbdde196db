//! Pure projection of the task list onto what a host should draw.

use uuid::Uuid;

use crate::model::filter::Filter;
use crate::model::task::Task;

/// One visible row. `index` is the task's position in the full list, not in
/// the filtered rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: Uuid,
    pub index: usize,
    pub text: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterControl {
    pub filter: Filter,
    pub active: bool,
}

pub fn visible_rows(tasks: &[Task], filter: Filter) -> Vec<RowView> {
    tasks
        .iter()
        .enumerate()
        .filter(|(_, task)| filter.matches(task))
        .map(|(index, task)| RowView {
            id: task.id,
            index,
            text: task.text.clone(),
            completed: task.completed,
        })
        .collect()
}

pub fn filter_bar(active: Filter) -> Vec<FilterControl> {
    Filter::ALL
        .iter()
        .map(|&filter| FilterControl {
            filter,
            active: filter == active,
        })
        .collect()
}
