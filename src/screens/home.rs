// Home screen controller

use super::{Command, Route};
use crate::catalog::home::{daily_tip, QUICK_MOODS};
use crate::matcher::RandomSource;

/// Home dashboard; the tip is drawn once per visit
#[derive(Debug, Clone)]
pub struct HomeScreen {
    tip: &'static str,
}

impl HomeScreen {
    pub fn enter(rng: &mut dyn RandomSource) -> Self {
        Self {
            tip: daily_tip(rng),
        }
    }

    pub fn tip(&self) -> &'static str {
        self.tip
    }

    pub fn quick_moods(&self) -> &'static [(&'static str, &'static str, &'static str)] {
        &QUICK_MOODS
    }

    /// Jump to the mood journal with the quick mood at `index` preselected
    pub fn quick_mood(&self, index: usize) -> Option<Command> {
        QUICK_MOODS
            .get(index)
            .map(|(_, _, id)| Command::Navigate(Route::quick_mood(*id)))
    }
}
