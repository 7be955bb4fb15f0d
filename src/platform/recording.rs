// In-memory platform that records every request

use std::sync::{Arc, Mutex, MutexGuard};

use super::Platform;
use crate::errors::{Result, SolaceError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformAction {
    Dial(String),
    Text { number: String, body: String },
    OpenUrl(String),
    Share { title: String, body: String },
    Copy(String),
    Notify(String),
}

/// Headless platform for tests and scripted runs
///
/// Clones share one action log, so a test can keep a handle after boxing
/// the platform into an `App`.
#[derive(Debug, Clone, Default)]
pub struct RecordingPlatform {
    actions: Arc<Mutex<Vec<PlatformAction>>>,
    share_sheet: bool,
}

impl RecordingPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// A platform whose share sheet works
    pub fn with_share_sheet() -> Self {
        Self {
            share_sheet: true,
            ..Self::default()
        }
    }

    /// Snapshot of everything requested so far
    pub fn actions(&self) -> Vec<PlatformAction> {
        self.log().clone()
    }

    pub fn clear(&self) {
        self.log().clear();
    }

    fn log(&self) -> MutexGuard<'_, Vec<PlatformAction>> {
        self.actions.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record(&self, action: PlatformAction) {
        self.log().push(action);
    }
}

impl Platform for RecordingPlatform {
    fn dial(&mut self, number: &str) -> Result<()> {
        self.record(PlatformAction::Dial(number.to_string()));
        Ok(())
    }

    fn compose_text(&mut self, number: &str, body: &str) -> Result<()> {
        self.record(PlatformAction::Text {
            number: number.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }

    fn open_url(&mut self, url: &str) -> Result<()> {
        self.record(PlatformAction::OpenUrl(url.to_string()));
        Ok(())
    }

    fn share(&mut self, title: &str, body: &str) -> Result<()> {
        if !self.share_sheet {
            return Err(SolaceError::Unavailable("sharing"));
        }
        self.record(PlatformAction::Share {
            title: title.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }

    fn copy_to_clipboard(&mut self, text: &str) -> Result<()> {
        self.record(PlatformAction::Copy(text.to_string()));
        Ok(())
    }

    fn notify(&mut self, message: &str) {
        self.record(PlatformAction::Notify(message.to_string()));
    }
}
