// Reply routing for the chat companion
//
// Crisis detection runs first and short-circuits everything else; the
// keyword rules and the fallback set only see text with no crisis phrase.

use std::time::Duration;

use crate::catalog::chat::{CHAT_MATCHER, CRISIS_REPLY, DEFAULT_REPLIES};
use crate::config::Config;
use crate::crisis::CrisisDetector;
use crate::errors::Result;
use crate::matcher::{RandomSource, Selection};

/// Why a reply was chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyRoute {
    /// A crisis phrase was found
    Crisis { phrase: String },
    /// A keyword rule matched
    Rule { name: String, keyword: String },
    /// Nothing matched; a default supportive reply was drawn
    Fallback,
}

impl ReplyRoute {
    pub fn as_str(&self) -> &str {
        match self {
            ReplyRoute::Crisis { .. } => "crisis",
            ReplyRoute::Rule { name, .. } => name.as_str(),
            ReplyRoute::Fallback => "fallback",
        }
    }
}

/// A composed agent reply, not yet recorded in any log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub route: ReplyRoute,
}

impl Reply {
    pub fn is_crisis(&self) -> bool {
        matches!(self.route, ReplyRoute::Crisis { .. })
    }
}

#[derive(Debug, Clone)]
pub struct Companion {
    detector: CrisisDetector,
    typing_delay: (Duration, Duration),
}

impl Default for Companion {
    fn default() -> Self {
        Self::new(CrisisDetector::new(), Config::default().typing_delay())
    }
}

impl Companion {
    pub fn new(detector: CrisisDetector, typing_delay: (Duration, Duration)) -> Self {
        Self {
            detector,
            typing_delay,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(config.crisis_detector()?, config.typing_delay()))
    }

    pub fn detector(&self) -> &CrisisDetector {
        &self.detector
    }

    /// Compose a reply to already-trimmed, non-empty user text
    pub fn reply(&self, text: &str, rng: &mut dyn RandomSource) -> Reply {
        if let Some(phrase) = self.detector.matched_phrase(text) {
            return Reply {
                text: CRISIS_REPLY.to_string(),
                route: ReplyRoute::Crisis {
                    phrase: phrase.to_string(),
                },
            };
        }

        match CHAT_MATCHER.select(text, rng) {
            Some(Selection::Rule {
                rule,
                keyword,
                response,
            }) => Reply {
                text: response.to_string(),
                route: ReplyRoute::Rule {
                    name: rule.to_string(),
                    keyword: keyword.to_string(),
                },
            },
            Some(Selection::Fallback { response }) => Reply {
                text: response.to_string(),
                route: ReplyRoute::Fallback,
            },
            None => Reply {
                text: DEFAULT_REPLIES[0].to_string(),
                route: ReplyRoute::Fallback,
            },
        }
    }

    /// Simulated typing time before the reply is shown
    pub fn typing_delay(&self, rng: &mut dyn RandomSource) -> Duration {
        let (min, max) = self.typing_delay;
        rng.delay_between(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::ScriptedSource;

    #[test]
    fn test_crisis_takes_priority() {
        let companion = Companion::default();
        let mut rng = ScriptedSource::default();

        // "anxious" would match the anxiety rule, but crisis wins
        let reply = companion.reply("I'm anxious and I want to kill myself", &mut rng);
        assert!(reply.is_crisis());
        assert!(reply.text.contains("988"));
        assert_eq!(
            reply.route,
            ReplyRoute::Crisis {
                phrase: "kill myself".to_string()
            }
        );
    }

    #[test]
    fn test_rule_reply() {
        let companion = Companion::default();
        let mut rng = ScriptedSource::default();

        let reply = companion.reply("thanks, I feel a bit better", &mut rng);
        assert!(!reply.is_crisis());
        assert_eq!(reply.route.as_str(), "gratitude");
        assert!(reply.text.starts_with("I'm so glad you're feeling a bit better!"));
    }

    #[test]
    fn test_fallback_reply() {
        let companion = Companion::default();
        let mut rng = ScriptedSource::new([4]);

        let reply = companion.reply("I went for a walk", &mut rng);
        assert_eq!(reply.route, ReplyRoute::Fallback);
        assert_eq!(reply.text, DEFAULT_REPLIES[4]);
    }

    #[test]
    fn test_typing_delay_within_bounds() {
        let companion = Companion::new(
            CrisisDetector::new(),
            (Duration::from_millis(1000), Duration::from_millis(3000)),
        );
        let mut rng = ScriptedSource::default().with_delay(Duration::from_millis(1500));
        assert_eq!(companion.typing_delay(&mut rng), Duration::from_millis(1500));

        let mut rng = ScriptedSource::default();
        assert_eq!(companion.typing_delay(&mut rng), Duration::from_millis(1000));
    }
}
