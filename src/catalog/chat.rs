// Chat reply catalog

use once_cell::sync::Lazy;

use crate::matcher::{KeywordMatcher, Rule};

/// First message of every chat visit
pub const GREETING: &str = "Hi there! 👋 I'm here to listen and support you. How are you feeling today? Remember, this is a safe space where you can share whatever is on your mind.";

/// Reply used whenever a crisis phrase is detected. Takes priority over
/// every keyword rule.
pub const CRISIS_REPLY: &str = "I'm really concerned about you right now. 💙 You are not alone, and your life has value. Please reach out for immediate help:\n\n🆘 Call 988 (Suicide & Crisis Lifeline)\n🆘 Text \"HELLO\" to 741741\n\nIs there someone you trust who you can talk to right now? I'm here with you.";

/// (rule name, keywords, reply) in priority order
const CHAT_RULES: &[(&str, &[&str], &str)] = &[
    (
        "anxiety",
        &["anxious", "anxiety"],
        "I understand anxiety can feel overwhelming. Let's try some grounding together: Name 5 things you can see, 4 things you can touch, 3 things you can hear, 2 things you can smell, and 1 thing you can taste. 🌸 Remember, anxiety is temporary - you've gotten through difficult moments before.",
    ),
    (
        "sadness",
        &["sad", "depressed"],
        "I hear that you're going through a tough time. 💙 It's okay to feel sad - these feelings are valid and part of being human. Have you been able to do any small self-care activities today, like drinking water or stepping outside? Sometimes tiny steps help.",
    ),
    (
        "stress",
        &["stress", "overwhelmed"],
        "Stress can feel like carrying a heavy backpack. Let's lighten the load together. 🎒 Can you identify just one thing that's causing stress? Sometimes breaking it down into smaller pieces makes it more manageable. Take a deep breath with me.",
    ),
    (
        "loneliness",
        &["lonely", "alone"],
        "Loneliness is such a difficult feeling, but you're not truly alone. 🤗 Even in this moment, I'm here with you. Have you considered reaching out to a friend, family member, or joining an online community with shared interests? Small connections can spark bigger ones.",
    ),
    (
        "anger",
        &["angry", "mad"],
        "Anger often shows up when we feel hurt or unheard. 🔥 Your feelings are valid. Have you tried expressing this through physical movement, journaling, or creative outlets? Sometimes anger needs a healthy way to move through us.",
    ),
    (
        "gratitude",
        &["thank", "better"],
        "I'm so glad you're feeling a bit better! 🌟 That takes strength. Remember this feeling - you have the ability to work through difficult emotions. What helped you feel better today? It's worth remembering for next time.",
    ),
];

/// Supportive replies when no keyword matches
pub const DEFAULT_REPLIES: [&str; 5] = [
    "Thank you for sharing that with me. 💙 Your feelings are completely valid. What do you think might help you feel a little bit better right now?",
    "I'm here to listen without judgment. 🌸 It sounds like you're going through something challenging. What's one small thing that usually brings you comfort?",
    "You're being really brave by reaching out and sharing. 🌱 Sometimes just talking about what we're feeling can help. How long have you been feeling this way?",
    "I hear you, and I want you to know that your feelings matter. 💜 Have you been able to take care of your basic needs today - eating, sleeping, staying hydrated?",
    "It's okay to not be okay sometimes. 🫂 You don't have to carry everything alone. Is there anyone in your life you feel comfortable talking to about this?",
];

pub static CHAT_MATCHER: Lazy<KeywordMatcher> = Lazy::new(|| {
    let rules = CHAT_RULES
        .iter()
        .map(|(name, keywords, reply)| Rule::new(*name, keywords.iter(), [*reply]))
        .collect();
    KeywordMatcher::new(rules, DEFAULT_REPLIES)
});
