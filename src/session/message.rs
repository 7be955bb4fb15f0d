// Session record types: chat messages and mood entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who wrote a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Agent,
}

/// A single chat message. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    id: Uuid,
    text: String,
    sender: Sender,
    timestamp: DateTime<Utc>,
    is_crisis: bool,
}

impl Message {
    pub(crate) fn new(
        text: String,
        sender: Sender,
        is_crisis: bool,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            sender,
            timestamp,
            is_crisis,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Agent replies to a crisis phrase carry this flag so the renderer
    /// can style them and show emergency contacts
    pub fn is_crisis(&self) -> bool {
        self.is_crisis
    }
}

/// One mood journal entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    id: Uuid,
    /// Preset mood id or the user's own words
    label: String,
    emoji: String,
    timestamp: DateTime<Utc>,
}

impl MoodEntry {
    pub(crate) fn new(label: String, emoji: String, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            label,
            emoji,
            timestamp,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn emoji(&self) -> &str {
        &self.emoji
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Wall clock that never goes backwards within one session
#[derive(Debug, Clone, Default)]
pub(crate) struct MonotonicClock {
    last: Option<DateTime<Utc>>,
}

impl MonotonicClock {
    pub(crate) fn now(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let stamp = match self.last {
            Some(last) if last > now => last,
            _ => now,
        };
        self.last = Some(stamp);
        stamp
    }
}
