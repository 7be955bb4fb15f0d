// Home screen catalog: daily tips and quick mood shortcuts

use crate::matcher::{choose, RandomSource};

pub const DAILY_TIPS: [&str; 4] = [
    "Take 5 deep breaths when you feel overwhelmed 🌸",
    "Remember: It's okay to feel whatever you're feeling today 💙",
    "You are stronger than you think, even on difficult days 🌟",
    "Small steps forward are still progress worth celebrating 🎉",
];

/// Quick mood check on the home screen: (emoji, label, mood id)
pub const QUICK_MOODS: [(&str, &str, &str); 3] = [
    ("😊", "Great", "happy"),
    ("😐", "Okay", "neutral"),
    ("😞", "Down", "sad"),
];

pub fn daily_tip(rng: &mut dyn RandomSource) -> &'static str {
    choose(rng, &DAILY_TIPS).copied().unwrap_or(DAILY_TIPS[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::mood;
    use crate::matcher::ScriptedSource;

    #[test]
    fn test_quick_moods_are_presets() {
        for (_, _, id) in QUICK_MOODS {
            assert!(mood::preset(id).is_some(), "{} is not a preset", id);
        }
    }

    #[test]
    fn test_daily_tip() {
        let mut rng = ScriptedSource::new([2]);
        assert_eq!(daily_tip(&mut rng), DAILY_TIPS[2]);
    }
}
