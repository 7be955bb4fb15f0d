// Crisis hotlines, coping strategies and contact handling

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Emergency services number for immediate physical danger
pub const EMERGENCY_NUMBER: &str = "911";

/// Suicide & Crisis Lifeline, surfaced in every crisis reply
pub const CRISIS_LIFELINE: &str = "988";

/// Crisis Text Line short code and the keyword the chat reply suggests
pub const CRISIS_TEXT_NUMBER: &str = "741741";
pub const CRISIS_TEXT_KEYWORD: &str = "HELLO";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CrisisResource {
    pub name: &'static str,
    pub description: &'static str,
    /// Raw contact string as shown to the user ("988", "Text HOME to 741741")
    pub contact: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
    /// Staffed 24/7; rendered with emphasis
    pub urgent: bool,
}

impl CrisisResource {
    pub fn contact_action(&self) -> Option<ContactAction> {
        ContactAction::from_contact(self.contact)
    }
}

pub static CRISIS_RESOURCES: [CrisisResource; 4] = [
    CrisisResource {
        name: "988 Suicide & Crisis Lifeline",
        description: "24/7 free and confidential support",
        contact: "988",
        url: "https://988lifeline.org",
        icon: "🆘",
        urgent: true,
    },
    CrisisResource {
        name: "Crisis Text Line",
        description: "Text with trained crisis counselors",
        contact: "Text HOME to 741741",
        url: "https://crisistextline.org",
        icon: "💬",
        urgent: true,
    },
    CrisisResource {
        name: "Teen Line",
        description: "Peer-to-peer crisis support for teens",
        contact: "800-852-8336",
        url: "https://teenline.org",
        icon: "👥",
        urgent: false,
    },
    CrisisResource {
        name: "National Sexual Assault Hotline",
        description: "RAINN 24/7 confidential support",
        contact: "800-656-4673",
        url: "https://rainn.org",
        icon: "🤝",
        urgent: false,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CopingStrategy {
    pub title: &'static str,
    pub description: &'static str,
    pub emoji: &'static str,
}

pub static COPING_STRATEGIES: [CopingStrategy; 4] = [
    CopingStrategy {
        title: "Grounding Technique",
        description: "5-4-3-2-1: Name 5 things you see, 4 you can touch, 3 you hear, 2 you smell, 1 you taste",
        emoji: "🌱",
    },
    CopingStrategy {
        title: "Box Breathing",
        description: "Breathe in for 4, hold for 4, out for 4, hold for 4. Repeat until calm",
        emoji: "🫁",
    },
    CopingStrategy {
        title: "Cold Water",
        description: "Splash cold water on your face or hold ice cubes to reset your nervous system",
        emoji: "❄️",
    },
    CopingStrategy {
        title: "Safe Person",
        description: "Call or text someone you trust. You don't have to go through this alone",
        emoji: "🤗",
    },
];

/// Safety plan checklist shown on the support screen
pub const SAFETY_PLAN_STEPS: [&str; 5] = [
    "Identify your warning signs",
    "List coping strategies that help you",
    "Write down trusted people to contact",
    "Remove or secure items that could cause harm",
    "Professional contacts and crisis numbers",
];

pub const SAFETY_PLAN_URL: &str = "https://suicidesafetyplan.com";

static TEXT_CONTACT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*text\s+(\S+)\s+to\s+(\d+)\s*$").expect("valid text contact pattern")
});

static NON_DIGIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\D").expect("valid non-digit pattern"));

/// What the platform should do when the user taps a contact
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactAction {
    /// Place a call to the digits of the contact string
    Dial { number: String },
    /// Compose a text with `keyword` as the body
    Text { keyword: String, number: String },
}

impl ContactAction {
    /// Interpret a raw contact string.
    ///
    /// "Text <KEYWORD> to <number>" becomes a text; anything else is dialed
    /// with all non-digits stripped. `None` if nothing dialable remains.
    pub fn from_contact(contact: &str) -> Option<Self> {
        if let Some(captures) = TEXT_CONTACT.captures(contact) {
            return Some(ContactAction::Text {
                keyword: captures[1].to_string(),
                number: captures[2].to_string(),
            });
        }

        let number = NON_DIGIT.replace_all(contact, "").into_owned();
        if number.is_empty() {
            return None;
        }
        Some(ContactAction::Dial { number })
    }

    /// Step-by-step instructions for platforms that cannot prefill a text
    pub fn instructions(&self) -> String {
        match self {
            ContactAction::Dial { number } => format!("Call {}", number),
            ContactAction::Text { keyword, number } => format!(
                "To use this text line:\n1. Open your text messages\n2. Text {} to {}\n3. A crisis counselor will respond",
                keyword, number
            ),
        }
    }
}
