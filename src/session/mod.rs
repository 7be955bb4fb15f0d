// Session module
// In-memory state scoped to a screen visit (chat log, mood history) or to
// the whole app session (saved creative items)

mod chat_log;
mod message;
mod mood_history;
mod saved;

pub use chat_log::SessionLog;
pub use message::{Message, MoodEntry, Sender};
pub use mood_history::{MoodHistory, DEFAULT_MOOD_HISTORY_LIMIT};
pub use saved::SavedItems;
