// Platform capabilities
//
// Calls, texts, links, sharing and the clipboard are all fire-and-forget.
// The engine only asks for them; whatever hosts it decides what they mean.

mod console;
mod recording;

pub use console::ConsolePlatform;
pub use recording::{PlatformAction, RecordingPlatform};

use tracing::debug;

use crate::errors::{Result, SolaceError};

/// Trait for the device the app runs on
pub trait Platform: Send {
    /// Place a phone call to `number`
    fn dial(&mut self, number: &str) -> Result<()>;

    /// Open a text message to `number` with `body` prefilled
    fn compose_text(&mut self, number: &str, body: &str) -> Result<()>;

    fn open_url(&mut self, url: &str) -> Result<()>;

    /// Hand content to the system share sheet
    ///
    /// Platforms without one return `SolaceError::Unavailable`.
    fn share(&mut self, _title: &str, _body: &str) -> Result<()> {
        Err(SolaceError::Unavailable("sharing"))
    }

    fn copy_to_clipboard(&mut self, text: &str) -> Result<()>;

    /// Short confirmation shown to the user ("Saved!")
    fn notify(&mut self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Copied,
}

/// Share, falling back to the clipboard when sharing is unavailable.
///
/// The fallback is silent: the caller only learns which path was taken.
pub fn share_or_copy(platform: &mut dyn Platform, title: &str, body: &str) -> Result<ShareOutcome> {
    match platform.share(title, body) {
        Ok(()) => Ok(ShareOutcome::Shared),
        Err(SolaceError::Unavailable(what)) => {
            debug!(capability = what, "Falling back to clipboard");
            platform.copy_to_clipboard(&format!("{}\n\n{}", title, body))?;
            Ok(ShareOutcome::Copied)
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_falls_back_to_clipboard() {
        let mut platform = RecordingPlatform::new();
        let outcome = share_or_copy(&mut platform, "Gentle Waves", "Like waves").unwrap();

        assert_eq!(outcome, ShareOutcome::Copied);
        assert_eq!(
            platform.actions(),
            vec![PlatformAction::Copy("Gentle Waves\n\nLike waves".to_string())]
        );
    }

    #[test]
    fn test_share_when_supported() {
        let mut platform = RecordingPlatform::with_share_sheet();
        let outcome = share_or_copy(&mut platform, "Title", "Body").unwrap();

        assert_eq!(outcome, ShareOutcome::Shared);
        assert_eq!(
            platform.actions(),
            vec![PlatformAction::Share {
                title: "Title".to_string(),
                body: "Body".to_string()
            }]
        );
    }
}
