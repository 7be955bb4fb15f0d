// Chat screen controller

use tracing::{debug, info};

use super::{Command, Screen};
use crate::catalog::chat::GREETING;
use crate::companion::{Companion, Reply};
use crate::matcher::RandomSource;
use crate::session::{Message, SessionLog};

/// One visit to the chat screen
///
/// The log starts with the greeting and lives exactly as long as the visit.
/// While a reply is pending the screen is "typing" and refuses new input.
#[derive(Debug, Clone)]
pub struct ChatScreen {
    log: SessionLog,
    input: String,
    typing: bool,
}

impl Default for ChatScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatScreen {
    pub fn new() -> Self {
        let mut log = SessionLog::new();
        log.add_agent_message(GREETING, false);
        Self {
            log,
            input: String::new(),
            typing: false,
        }
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    /// Whether the send affordance is enabled
    pub fn can_submit(&self) -> bool {
        !self.typing && !self.input.trim().is_empty()
    }

    /// Send the current input.
    ///
    /// Appends the user message, composes the reply and asks for it to be
    /// delivered after the typing delay. Blank input and submissions while
    /// a reply is pending are ignored.
    pub fn submit(&mut self, companion: &Companion, rng: &mut dyn RandomSource) -> Option<Command> {
        if !self.can_submit() {
            debug!(typing = self.typing, "Ignoring chat submission");
            return None;
        }

        let text = std::mem::take(&mut self.input);
        let reply = companion.reply(text.trim(), rng);
        self.log.add_user_message(text);

        let delay = companion.typing_delay(rng);
        self.typing = true;

        info!(
            route = reply.route.as_str(),
            crisis = reply.is_crisis(),
            delay_ms = delay.as_millis() as u64,
            "Scheduled chat reply"
        );

        Some(Command::ScheduleReply { reply, delay })
    }

    /// Append a reply once its delay has elapsed
    pub fn deliver(&mut self, reply: Reply) -> &Message {
        self.typing = false;
        let is_crisis = reply.is_crisis();
        self.log.add_agent_message(reply.text, is_crisis)
    }

    pub fn log(&self) -> &SessionLog {
        &self.log
    }

    pub fn messages(&self) -> &[Message] {
        self.log.messages()
    }

    pub fn back(&self) -> Command {
        Command::navigate(Screen::Home)
    }
}
