// Crisis support screen controller

use tracing::{info, warn};

use super::{Command, Screen};
use crate::crisis::{
    ContactAction, CopingStrategy, CrisisResource, COPING_STRATEGIES, CRISIS_RESOURCES,
    EMERGENCY_NUMBER, SAFETY_PLAN_STEPS, SAFETY_PLAN_URL,
};

/// The support screen has no state of its own; every action maps straight
/// to a platform command.
#[derive(Debug, Clone, Copy, Default)]
pub struct SupportScreen;

impl SupportScreen {
    pub fn new() -> Self {
        Self
    }

    pub fn resources(&self) -> &'static [CrisisResource] {
        &CRISIS_RESOURCES
    }

    pub fn coping_strategies(&self) -> &'static [CopingStrategy] {
        &COPING_STRATEGIES
    }

    pub fn safety_plan_steps(&self) -> &'static [&'static str] {
        &SAFETY_PLAN_STEPS
    }

    pub fn call_emergency(&self) -> Command {
        warn!("Emergency call requested");
        Command::Dial {
            number: EMERGENCY_NUMBER.to_string(),
        }
    }

    /// Call or text the resource at `index`
    pub fn contact(&self, index: usize) -> Option<Command> {
        let resource = CRISIS_RESOURCES.get(index)?;
        info!(resource = resource.name, "Contacting crisis resource");
        let command = match resource.contact_action()? {
            ContactAction::Dial { number } => Command::Dial { number },
            ContactAction::Text { keyword, number } => Command::ComposeText {
                number,
                body: keyword,
            },
        };
        Some(command)
    }

    pub fn open_website(&self, index: usize) -> Option<Command> {
        CRISIS_RESOURCES
            .get(index)
            .map(|resource| Command::OpenUrl(resource.url.to_string()))
    }

    pub fn open_safety_plan(&self) -> Command {
        Command::OpenUrl(SAFETY_PLAN_URL.to_string())
    }

    pub fn talk_to_companion(&self) -> Command {
        Command::navigate(Screen::Chat)
    }

    pub fn back(&self) -> Command {
        Command::navigate(Screen::Home)
    }
}
