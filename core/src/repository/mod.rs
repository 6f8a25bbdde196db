pub mod codec;
pub mod file;
pub mod memory;
pub mod store;

// Re-export
pub use codec::{decode_tasks, encode_tasks};
pub use file::FileTaskStore;
pub use memory::MemoryTaskStore;
pub use store::TaskStore;
