// Creative outlet screen controller

use tracing::info;

use super::{Command, Screen};
use crate::catalog::creative::generate;
use crate::catalog::{CreativeContent, CreativeKind};
use crate::matcher::RandomSource;
use crate::session::SavedItems;

/// Number of saved items listed before collapsing into "And N more..."
pub const SAVED_PREVIEW_LIMIT: usize = 3;

/// Newest saved items to list, plus how many were left out
pub fn saved_preview(saved: &SavedItems) -> (Vec<&CreativeContent>, usize) {
    let shown: Vec<_> = saved.iter().take(SAVED_PREVIEW_LIMIT).collect();
    let hidden = saved.len().saturating_sub(shown.len());
    (shown, hidden)
}

#[derive(Debug, Clone, Default)]
pub struct CreativeScreen {
    selected: Option<CreativeKind>,
    current: Option<CreativeContent>,
}

impl CreativeScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose a content type and generate a first piece for it
    pub fn select(&mut self, kind: CreativeKind, rng: &mut dyn RandomSource) -> &CreativeContent {
        self.selected = Some(kind);
        let content = generate(kind, rng);
        info!(kind = kind.as_str(), title = %content.title, "Generated creative content");
        self.current.insert(content)
    }

    /// "Generate Another" for the selected type
    pub fn regenerate(&mut self, rng: &mut dyn RandomSource) -> Option<&CreativeContent> {
        let kind = self.selected?;
        Some(self.select(kind, rng))
    }

    /// "Choose Different Type": back to the type picker
    pub fn choose_different(&mut self) {
        self.selected = None;
        self.current = None;
    }

    pub fn selected(&self) -> Option<CreativeKind> {
        self.selected
    }

    pub fn current(&self) -> Option<&CreativeContent> {
        self.current.as_ref()
    }

    /// Save a copy of the current item
    pub fn save(&self) -> Option<Command> {
        self.current.clone().map(Command::SaveItem)
    }

    pub fn share(&self) -> Option<Command> {
        self.current.as_ref().map(|content| Command::Share {
            title: content.title.clone(),
            body: content.body.clone(),
        })
    }

    pub fn back(&self) -> Command {
        Command::navigate(Screen::Home)
    }
}
