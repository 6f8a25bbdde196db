use uuid::Uuid;

// Namespace for ids derived from entries stored without one.
const STORED_ID_NAMESPACE: Uuid = Uuid::from_u128(0x6f1c_2a7e_93d4_4b58_a0e2_5d17_c4b9_8e31);

/// A single todo entry.
///
/// Entries stored before ids existed carry only `text` and `completed`. They
/// get an id derived from their text, which stays the same across loads and is
/// never written back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: Uuid,
    pub text: String,
    pub completed: bool,
    id_stored: bool,
}

/// Ordered collection of every task; insertion order is display order.
pub type TaskList = Vec<Task>;

impl Task {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            completed: false,
            id_stored: true,
        }
    }

    pub(crate) fn stored(id: Uuid, text: String, completed: bool) -> Self {
        Self { id, text, completed, id_stored: true }
    }

    /// `occurrence` counts earlier id-less entries with the same text, so
    /// duplicates get distinct ids.
    pub(crate) fn without_stored_id(text: String, completed: bool, occurrence: usize) -> Self {
        let name = format!("{}\u{0}{}", occurrence, text);
        Self {
            id: Uuid::new_v5(&STORED_ID_NAMESPACE, name.as_bytes()),
            text,
            completed,
            id_stored: false,
        }
    }

    /// Whether `id` is part of the persisted entry.
    pub fn has_stored_id(&self) -> bool {
        self.id_stored
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}
