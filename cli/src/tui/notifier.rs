use std::collections::VecDeque;

use todolist_core::notify::{Notice, NoticeKind};
use todolist_core::{Confirmation, Notifier};

/// Queues notifications for the app to show as popups.
///
/// Delete confirmations go through `App`'s modal. The event loop cannot
/// block, so a synchronous `confirm_action` answers `Cancelled`.
#[derive(Debug, Default)]
pub struct TuiNotifier {
    queue: VecDeque<Notice>,
}

impl TuiNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_notice(&mut self) -> Option<Notice> {
        self.queue.pop_front()
    }

    fn push(&mut self, kind: NoticeKind, title: &str, message: &str) {
        self.queue.push_back(Notice {
            kind,
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}

impl Notifier for TuiNotifier {
    fn notify_success(&mut self, title: &str, message: &str) {
        self.push(NoticeKind::Success, title, message);
    }

    fn confirm_action(&mut self, title: &str, _message: &str) -> Confirmation {
        tracing::warn!(title, "synchronous confirmation is not available in the TUI");
        Confirmation::Cancelled
    }

    fn notify_info(&mut self, title: &str, message: &str) {
        self.push(NoticeKind::Info, title, message);
    }
}
