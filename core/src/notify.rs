use std::collections::VecDeque;

/// Answer to a yes/no confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Cancelled,
}

impl Confirmation {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Confirmation::Confirmed)
    }
}

impl From<bool> for Confirmation {
    fn from(yes: bool) -> Self {
        if yes {
            Confirmation::Confirmed
        } else {
            Confirmation::Cancelled
        }
    }
}

/// The notification collaborator the controller talks to.
pub trait Notifier {
    fn notify_success(&mut self, title: &str, message: &str);
    fn confirm_action(&mut self, title: &str, message: &str) -> Confirmation;
    fn notify_info(&mut self, title: &str, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Confirm,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

/// Records every call and answers confirmations from a queue of preset
/// answers. An empty queue answers `Cancelled`.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub notices: Vec<Notice>,
    answers: VecDeque<Confirmation>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answering(answers: impl IntoIterator<Item = Confirmation>) -> Self {
        Self {
            notices: Vec::new(),
            answers: answers.into_iter().collect(),
        }
    }

    pub fn of_kind(&self, kind: NoticeKind) -> Vec<&Notice> {
        self.notices.iter().filter(|n| n.kind == kind).collect()
    }

    fn record(&mut self, kind: NoticeKind, title: &str, message: &str) {
        self.notices.push(Notice {
            kind,
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}

impl Notifier for RecordingNotifier {
    fn notify_success(&mut self, title: &str, message: &str) {
        self.record(NoticeKind::Success, title, message);
    }

    fn confirm_action(&mut self, title: &str, message: &str) -> Confirmation {
        self.record(NoticeKind::Confirm, title, message);
        self.answers.pop_front().unwrap_or(Confirmation::Cancelled)
    }

    fn notify_info(&mut self, title: &str, message: &str) {
        self.record(NoticeKind::Info, title, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_answers_in_order() {
        let mut n = RecordingNotifier::answering([Confirmation::Confirmed]);
        assert_eq!(n.confirm_action("t", "m"), Confirmation::Confirmed);
        assert_eq!(n.confirm_action("t", "m"), Confirmation::Cancelled);
        assert_eq!(n.of_kind(NoticeKind::Confirm).len(), 2);
    }

    #[test]
    fn test_confirmation_from_bool() {
        assert!(Confirmation::from(true).is_confirmed());
        assert!(!Confirmation::from(false).is_confirmed());
    }
}
