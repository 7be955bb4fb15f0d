// Mood journal catalog: preset moods, free-text mood rules, positive content

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::matcher::{choose, KeywordMatcher, RandomSource, Rule};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoodPreset {
    pub id: &'static str,
    pub emoji: &'static str,
    pub label: &'static str,
    pub response: &'static str,
}

pub static MOOD_PRESETS: [MoodPreset; 7] = [
    MoodPreset {
        id: "amazing",
        emoji: "🌟",
        label: "Amazing",
        response: "That's wonderful! ✨ Your positive energy is inspiring. Keep shining!",
    },
    MoodPreset {
        id: "happy",
        emoji: "😊",
        label: "Happy",
        response: "So glad you're feeling happy! 😊 Those good vibes are contagious.",
    },
    MoodPreset {
        id: "good",
        emoji: "🙂",
        label: "Good",
        response: "Nice to hear you're doing well! 🌱 Keep nurturing that positive momentum.",
    },
    MoodPreset {
        id: "neutral",
        emoji: "😐",
        label: "Okay",
        response: "It's okay to feel neutral sometimes. 🤍 Every feeling is valid and temporary.",
    },
    MoodPreset {
        id: "down",
        emoji: "😔",
        label: "Down",
        response: "I hear you. 💙 It's brave to acknowledge difficult feelings. You're not alone.",
    },
    MoodPreset {
        id: "sad",
        emoji: "😞",
        label: "Sad",
        response: "Sending you gentle comfort. 🫂 Remember, it's okay to feel sad - you're processing and healing.",
    },
    MoodPreset {
        id: "overwhelmed",
        emoji: "😰",
        label: "Overwhelmed",
        response: "Take a deep breath with me. 🌸 Let's break things down into smaller, manageable pieces.",
    },
];

/// Glyph recorded for free-text moods
pub const CUSTOM_MOOD_EMOJI: &str = "💭";

/// Response for a mood id that is not a preset
pub const UNKNOWN_MOOD_RESPONSE: &str = "Thank you for sharing how you're feeling. 💙";

/// Look up a preset by id, ignoring case and surrounding whitespace
pub fn preset(id: &str) -> Option<&'static MoodPreset> {
    let id = id.trim();
    MOOD_PRESETS.iter().find(|m| m.id.eq_ignore_ascii_case(id))
}

/// Fixed response for a mood id
pub fn mood_response(id: &str) -> &'static str {
    preset(id).map_or(UNKNOWN_MOOD_RESPONSE, |m| m.response)
}

const CUSTOM_MOOD_RULES: &[(&str, &[&str], &str)] = &[
    (
        "tired",
        &["tired", "exhausted"],
        "It sounds like you're feeling drained. 😴 Rest is important for healing. Have you been able to get enough sleep lately?",
    ),
    (
        "excited",
        &["excited", "energetic"],
        "I love hearing about your excitement! ⚡ That positive energy is wonderful. What's bringing you joy today?",
    ),
    (
        "confused",
        &["confused", "lost"],
        "Feeling uncertain is completely normal. 🌫️ Sometimes clarity comes when we give ourselves permission to not have all the answers right now.",
    ),
    (
        "grateful",
        &["grateful", "thankful"],
        "Gratitude is such a beautiful feeling! 🙏 It's amazing how acknowledging the good can shift our entire perspective.",
    ),
    (
        "creative",
        &["creative", "inspired"],
        "Creative energy is flowing through you! 🎨 This is a wonderful time to express yourself and explore new ideas.",
    ),
];

/// Free-text mood rules. No fallback set: the fallback echoes the user's
/// words, see [`custom_mood_response`].
pub static CUSTOM_MOOD_MATCHER: Lazy<KeywordMatcher> = Lazy::new(|| {
    let rules = CUSTOM_MOOD_RULES
        .iter()
        .map(|(name, keywords, reply)| Rule::new(*name, keywords.iter(), [*reply]))
        .collect();
    KeywordMatcher::new(rules, Vec::<String>::new())
});

/// Response for a free-text mood
pub fn custom_mood_response(text: &str, rng: &mut dyn RandomSource) -> String {
    match CUSTOM_MOOD_MATCHER.select(text, rng) {
        Some(selection) => selection.response().to_string(),
        None => format!(
            "Thank you for sharing \"{}\" with me. 💙 Your feelings are completely valid, and I'm here to support you through whatever you're experiencing.",
            text
        ),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PositiveKind {
    Poem,
    Quote,
    Affirmation,
    Song,
}

/// Short uplifting card shown under the mood picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PositiveContent {
    pub kind: PositiveKind,
    pub text: &'static str,
}

pub static POSITIVE_CONTENT: [PositiveContent; 4] = [
    PositiveContent {
        kind: PositiveKind::Poem,
        text: "You are enough, just as you are,\nA shining light, a brilliant star.\nEach breath you take, each step you make,\nIs progress for your spirit's sake. 🌟",
    },
    PositiveContent {
        kind: PositiveKind::Quote,
        text: "The only way out is through, and you are already on your way. Every small step counts. - You have got this! 💪",
    },
    PositiveContent {
        kind: PositiveKind::Affirmation,
        text: "I am resilient. I am growing. I am exactly where I need to be in this moment. 🌱",
    },
    PositiveContent {
        kind: PositiveKind::Song,
        text: "🎵 \"Here Comes the Sun\" by The Beatles - Because brighter days are always ahead! ☀️",
    },
];

pub fn positive_content(rng: &mut dyn RandomSource) -> &'static PositiveContent {
    choose(rng, &POSITIVE_CONTENT).unwrap_or(&POSITIVE_CONTENT[0])
}
