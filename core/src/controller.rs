use anyhow::Result;
use uuid::Uuid;

use crate::model::filter::Filter;
use crate::model::task::Task;
use crate::notify::{Confirmation, Notifier};
use crate::repository::TaskStore;
use crate::view::{filter_bar, visible_rows, FilterControl, RowView};

pub const ADDED_TITLE: &str = "Task Added!";
pub const CONFIRM_DELETE_TITLE: &str = "Are you sure?";
pub const CONFIRM_DELETE_MESSAGE: &str = "You won't be able to revert this!";
pub const DELETED_TITLE: &str = "Deleted!";
pub const DELETED_MESSAGE: &str = "Your task has been deleted.";

pub fn added_message(text: &str) -> String {
    format!("Your task \"{}\" has been successfully added to the list.", text)
}

/// A delete waiting for the user's answer. Dropping it is the same as
/// cancelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    id: Uuid,
    text: String,
}

impl PendingDelete {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn title(&self) -> &'static str {
        CONFIRM_DELETE_TITLE
    }

    pub fn message(&self) -> &'static str {
        CONFIRM_DELETE_MESSAGE
    }
}

/// Turns user gestures into store mutations followed by a full re-render.
///
/// Nothing but the active filter and the last rendered rows is kept between
/// calls; every operation reloads the list from the store.
pub struct TodoController<S: TaskStore, N: Notifier> {
    store: S,
    notifier: N,
    filter: Filter,
    rows: Vec<RowView>,
}

impl<S: TaskStore, N: Notifier> TodoController<S, N> {
    pub fn new(store: S, notifier: N) -> Self {
        let mut controller = Self {
            store,
            notifier,
            filter: Filter::All,
            rows: Vec::new(),
        };
        controller.render();
        controller
    }

    pub fn render(&mut self) -> &[RowView] {
        let tasks = self.store.load();
        self.rows = visible_rows(&tasks, self.filter);
        &self.rows
    }

    pub fn submit(&mut self, text: &str) -> Result<Option<Task>> {
        let text = text.trim();
        if text.is_empty() {
            tracing::debug!("ignoring empty task text");
            return Ok(None);
        }

        let task = Task::new(text);
        let mut tasks = self.store.load();
        tasks.push(task.clone());
        self.store.save(&tasks)?;
        tracing::info!(id = %task.id, "task added");
        self.render();

        self.notifier
            .notify_success(ADDED_TITLE, &added_message(&task.text));
        Ok(Some(task))
    }

    /// Flips the completion flag. Returns `false` when no task has `id`.
    pub fn toggle(&mut self, id: Uuid) -> Result<bool> {
        let mut tasks = self.store.load();
        let Some(task) = tasks.iter_mut().find(|t| t.id == id) else {
            tracing::debug!(%id, "toggle of unknown task ignored");
            return Ok(false);
        };

        task.toggle();
        tracing::info!(%id, completed = task.completed, "task toggled");
        self.store.save(&tasks)?;
        self.render();
        Ok(true)
    }

    pub fn request_delete(&self, id: Uuid) -> Option<PendingDelete> {
        self.store
            .load()
            .into_iter()
            .find(|t| t.id == id)
            .map(|t| PendingDelete { id: t.id, text: t.text })
    }

    /// Completes a delete once the user has answered. Returns whether a task
    /// was removed.
    pub fn resolve_delete(&mut self, pending: PendingDelete, answer: Confirmation) -> Result<bool> {
        if !answer.is_confirmed() {
            tracing::debug!(id = %pending.id, "delete cancelled");
            return Ok(false);
        }

        let mut tasks = self.store.load();
        let Some(pos) = tasks.iter().position(|t| t.id == pending.id) else {
            tracing::debug!(id = %pending.id, "task vanished before delete was confirmed");
            return Ok(false);
        };

        tasks.remove(pos);
        self.store.save(&tasks)?;
        tracing::info!(id = %pending.id, "task deleted");
        self.render();

        self.notifier.notify_info(DELETED_TITLE, DELETED_MESSAGE);
        Ok(true)
    }

    /// Asks the notifier for confirmation and deletes on a yes.
    pub fn delete(&mut self, id: Uuid) -> Result<bool> {
        let Some(pending) = self.request_delete(id) else {
            tracing::debug!(%id, "delete of unknown task ignored");
            return Ok(false);
        };
        let answer = self
            .notifier
            .confirm_action(pending.title(), pending.message());
        self.resolve_delete(pending, answer)
    }

    pub fn select_filter(&mut self, filter: Filter) -> &[RowView] {
        self.filter = filter;
        self.render()
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn filter_bar(&self) -> Vec<FilterControl> {
        filter_bar(self.filter)
    }

    pub fn rows(&self) -> &[RowView] {
        &self.rows
    }

    pub fn row_at(&self, position: usize) -> Option<&RowView> {
        self.rows.get(position)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }
}
