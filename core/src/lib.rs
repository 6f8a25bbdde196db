pub mod config;
pub mod controller;
pub mod input;
pub mod model;
pub mod notify;
pub mod repository;
pub mod view;

pub use config::StoreConfig;
pub use controller::{PendingDelete, TodoController};
pub use input::{resolve_id, short_id, ResolveIdError};
pub use model::filter::Filter;
pub use model::task::{Task, TaskList};
pub use notify::{Confirmation, Notifier, RecordingNotifier};
pub use repository::{FileTaskStore, MemoryTaskStore, TaskStore};
pub use view::{filter_bar, visible_rows, FilterControl, RowView};
