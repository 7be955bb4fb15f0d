// Configuration structs

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::crisis::CrisisDetector;
use crate::errors::{Result, SolaceError};
use crate::session::DEFAULT_MOOD_HISTORY_LIMIT;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Shortest simulated typing delay before a chat reply (default: 1000)
    pub typing_delay_min_ms: u64,

    /// Longest simulated typing delay before a chat reply (default: 3000)
    pub typing_delay_max_ms: u64,

    /// Mood entries kept per journal visit (default and maximum: 7)
    pub mood_history_limit: usize,

    /// Optional JSON file with extra crisis phrases
    pub crisis_keywords_path: Option<PathBuf>,

    /// Colored terminal output
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            typing_delay_min_ms: 1000,
            typing_delay_max_ms: 3000,
            mood_history_limit: DEFAULT_MOOD_HISTORY_LIMIT,
            crisis_keywords_path: None,
            color: true,
        }
    }
}

impl Config {
    /// Typing delay bounds as durations
    pub fn typing_delay(&self) -> (Duration, Duration) {
        (
            Duration::from_millis(self.typing_delay_min_ms),
            Duration::from_millis(self.typing_delay_max_ms),
        )
    }

    /// No simulated typing; replies land as soon as they are scheduled
    pub fn without_typing_delay(mut self) -> Self {
        self.typing_delay_min_ms = 0;
        self.typing_delay_max_ms = 0;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.typing_delay_min_ms > self.typing_delay_max_ms {
            return Err(SolaceError::InvalidConfig(format!(
                "typing_delay_min_ms ({}) is greater than typing_delay_max_ms ({})",
                self.typing_delay_min_ms, self.typing_delay_max_ms
            )));
        }
        if self.mood_history_limit == 0 || self.mood_history_limit > DEFAULT_MOOD_HISTORY_LIMIT {
            return Err(SolaceError::InvalidConfig(format!(
                "mood_history_limit must be between 1 and {} (got {})",
                DEFAULT_MOOD_HISTORY_LIMIT, self.mood_history_limit
            )));
        }
        Ok(())
    }

    /// Crisis detector with the built-in phrases plus any configured file
    pub fn crisis_detector(&self) -> Result<CrisisDetector> {
        match &self.crisis_keywords_path {
            Some(path) => CrisisDetector::load_from_file(path),
            None => Ok(CrisisDetector::new()),
        }
    }
}
