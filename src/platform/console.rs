// Terminal stand-in for phone, browser and clipboard
//
// A terminal cannot place calls or open a share sheet, so every request is
// turned into clear instructions the user can follow on their own device.

use std::io::Write;

use crossterm::style::Stylize;

use super::Platform;
use crate::crisis::ContactAction;
use crate::errors::{Result, SolaceError};

pub struct ConsolePlatform {
    out: Box<dyn Write + Send>,
    color: bool,
}

impl ConsolePlatform {
    pub fn stdout(color: bool) -> Self {
        Self::new(Box::new(std::io::stdout()), color)
    }

    pub fn new(out: Box<dyn Write + Send>, color: bool) -> Self {
        Self { out, color }
    }

    fn emit(&mut self, icon: &str, headline: String, detail: Option<String>) -> Result<()> {
        let headline = if self.color {
            headline.bold().to_string()
        } else {
            headline
        };
        writeln!(self.out, "{} {}", icon, headline)?;
        if let Some(detail) = detail {
            writeln!(self.out, "{}", detail)?;
        }
        self.out.flush()?;
        Ok(())
    }
}

impl Platform for ConsolePlatform {
    fn dial(&mut self, number: &str) -> Result<()> {
        let action = ContactAction::Dial {
            number: number.to_string(),
        };
        self.emit("📞", action.instructions(), None)
    }

    fn compose_text(&mut self, number: &str, body: &str) -> Result<()> {
        let action = ContactAction::Text {
            keyword: body.to_string(),
            number: number.to_string(),
        };
        self.emit("💬", format!("Text {} to {}", body, number), Some(action.instructions()))
    }

    fn open_url(&mut self, url: &str) -> Result<()> {
        self.emit("🔗", url.to_string(), None)
    }

    fn share(&mut self, _title: &str, _body: &str) -> Result<()> {
        Err(SolaceError::Unavailable("sharing"))
    }

    fn copy_to_clipboard(&mut self, text: &str) -> Result<()> {
        self.emit("📋", "Ready to copy:".to_string(), Some(text.to_string()))
    }

    fn notify(&mut self, message: &str) {
        if let Err(e) = self.emit("✨", message.to_string(), None) {
            tracing::warn!("Failed to show notification: {}", e);
        }
    }
}
