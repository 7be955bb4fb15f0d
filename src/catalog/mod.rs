// Catalog module
// Static, read-only response tables. Nothing here changes at runtime.

pub mod chat;
pub mod creative;
pub mod home;
pub mod mood;

pub use creative::{CreativeContent, CreativeKind};
pub use mood::{MoodPreset, PositiveContent, PositiveKind, MOOD_PRESETS};
