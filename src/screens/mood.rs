// Mood journal screen controller

use tracing::info;

use super::{Command, Screen};
use crate::catalog::mood::{
    custom_mood_response, mood_response, positive_content, preset, MoodPreset, PositiveContent,
    CUSTOM_MOOD_EMOJI,
};
use crate::matcher::RandomSource;
use crate::session::MoodHistory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoodInputMode {
    /// Pick one of the preset moods
    #[default]
    Emoji,
    /// Describe the mood in free text
    Text,
}

/// What the user picked
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoodSelection {
    Preset(&'static MoodPreset),
    /// An id with no preset behind it, e.g. from a stale quick link
    Unknown(String),
    Custom(String),
}

impl MoodSelection {
    fn from_id(id: &str) -> Self {
        match preset(id) {
            Some(preset) => MoodSelection::Preset(preset),
            None => MoodSelection::Unknown(id.to_string()),
        }
    }
}

/// One visit to the mood journal
#[derive(Debug, Clone)]
pub struct MoodScreen {
    mode: MoodInputMode,
    selection: Option<MoodSelection>,
    custom_text: String,
    response: Option<String>,
    history: MoodHistory,
    positive: &'static PositiveContent,
}

impl MoodScreen {
    /// Open the journal, optionally with a mood preselected from a quick link.
    ///
    /// Preselection only highlights the mood; nothing is recorded until the
    /// user actually picks one.
    pub fn enter(quick_mood: Option<&str>, history_limit: usize, rng: &mut dyn RandomSource) -> Self {
        Self {
            mode: MoodInputMode::Emoji,
            selection: quick_mood.map(MoodSelection::from_id),
            custom_text: String::new(),
            response: None,
            history: MoodHistory::with_limit(history_limit),
            positive: positive_content(rng),
        }
    }

    pub fn mode(&self) -> MoodInputMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: MoodInputMode) {
        self.mode = mode;
    }

    pub fn set_custom_text(&mut self, text: impl Into<String>) {
        self.custom_text = text.into();
    }

    pub fn custom_text(&self) -> &str {
        &self.custom_text
    }

    pub fn can_submit_custom(&self) -> bool {
        !self.custom_text.trim().is_empty()
    }

    /// Pick a preset mood by id and show its response.
    ///
    /// Unknown ids get the generic response and leave the history untouched.
    pub fn select_mood(&mut self, id: &str) -> &str {
        let selection = MoodSelection::from_id(id);
        if let MoodSelection::Preset(preset) = selection {
            self.history.append_entry(preset.id, preset.emoji);
            info!(mood = preset.id, "Logged mood");
        }
        self.selection = Some(selection);
        self.response.insert(mood_response(id).to_string())
    }

    /// Log the free-text mood. Blank text is ignored.
    pub fn submit_custom(&mut self, rng: &mut dyn RandomSource) -> Option<&str> {
        if !self.can_submit_custom() {
            return None;
        }

        let text = self.custom_text.clone();
        let response = custom_mood_response(&text, rng);
        self.history.append_entry(text.clone(), CUSTOM_MOOD_EMOJI);
        info!(len = text.len(), "Logged custom mood");

        self.selection = Some(MoodSelection::Custom(text));
        Some(self.response.insert(response).as_str())
    }

    /// Back to the picker, keeping the history
    pub fn log_another(&mut self) {
        self.selection = None;
        self.response = None;
        self.custom_text.clear();
        self.mode = MoodInputMode::Emoji;
    }

    pub fn selection(&self) -> Option<&MoodSelection> {
        self.selection.as_ref()
    }

    pub fn response(&self) -> Option<&str> {
        self.response.as_deref()
    }

    pub fn current_emoji(&self) -> &'static str {
        match &self.selection {
            Some(MoodSelection::Preset(preset)) => preset.emoji,
            _ => CUSTOM_MOOD_EMOJI,
        }
    }

    pub fn history(&self) -> &MoodHistory {
        &self.history
    }

    pub fn positive(&self) -> &'static PositiveContent {
        self.positive
    }

    /// Draw a new uplifting card
    pub fn refresh_positive(&mut self, rng: &mut dyn RandomSource) -> &'static PositiveContent {
        self.positive = positive_content(rng);
        self.positive
    }

    pub fn open_creative(&self) -> Command {
        Command::navigate(Screen::Creative)
    }

    pub fn talk_to_companion(&self) -> Command {
        Command::navigate(Screen::Chat)
    }

    pub fn back(&self) -> Command {
        Command::navigate(Screen::Home)
    }
}
