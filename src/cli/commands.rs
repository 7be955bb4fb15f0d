// Slash command handling

use crate::app::Action;
use crate::catalog::CreativeKind;
use crate::errors::{unknown_content_type_error, unknown_screen_error};
use crate::screens::{MoodInputMode, Route, Screen};

pub enum Command {
    Help,
    Quit,
    /// Redraw the current screen
    Show,
    /// List every saved creative item
    Saved,
    /// A screen action
    Act(Action),
    /// Recognised command with a bad or missing argument
    Invalid(String),
}

impl Command {
    /// Parse a line starting with `/`. Returns `None` for anything else.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if !trimmed.starts_with('/') {
            return None;
        }

        let (name, arg) = match trimmed.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (trimmed, ""),
        };

        // Handle simple commands without arguments
        let action = match name {
            "/help" | "/?" => return Some(Command::Help),
            "/quit" | "/exit" => return Some(Command::Quit),
            "/show" | "/look" => return Some(Command::Show),
            "/saved" => return Some(Command::Saved),
            "/back" => Action::Back,
            "/sos" | "/crisis" => Action::CrisisButton,
            "/start" => Action::GetStarted,
            "/skip" => Action::Skip,
            "/toggle" => Action::ToggleAuthMode,
            "/signin" | "/signup" => Action::SignIn,
            "/guest" => Action::ContinueAsGuest,
            "/emoji" => Action::SetMoodMode(MoodInputMode::Emoji),
            "/text" => Action::SetMoodMode(MoodInputMode::Text),
            "/another" => Action::LogAnotherMood,
            "/inspire" => Action::RefreshPositive,
            "/express" => Action::OpenCreative,
            "/talk" => Action::TalkToCompanion,
            "/again" | "/regenerate" => Action::Regenerate,
            "/different" => Action::ChooseDifferent,
            "/save" => Action::Save,
            "/share" => Action::Share,
            "/call911" => Action::CallEmergency,
            "/plan" => Action::OpenSafetyPlan,
            "/go" => return Some(parse_go(arg)),
            "/quick" => return Some(indexed(arg, "/quick <n>", Action::QuickMood)),
            "/contact" => return Some(indexed(arg, "/contact <n>", Action::Contact)),
            "/site" => return Some(indexed(arg, "/site <n>", Action::OpenWebsite)),
            "/mood" => {
                if arg.is_empty() {
                    return Some(Command::Invalid("Usage: /mood <id>".to_string()));
                }
                Action::PickMood(arg.to_string())
            }
            "/describe" => {
                if arg.is_empty() {
                    return Some(Command::Invalid("Usage: /describe <how you feel>".to_string()));
                }
                Action::DescribeMood(arg.to_string())
            }
            "/create" => match arg.parse::<CreativeKind>() {
                Ok(kind) => Action::Create(kind),
                Err(_) => return Some(Command::Invalid(unknown_content_type_error(arg))),
            },
            _ => return Some(Command::Invalid(format!("Unknown command: {}", name))),
        };

        Some(Command::Act(action))
    }
}

/// `/go mood`, `/go Create` or a raw location such as `/go /mood?quick=sad`
fn parse_go(arg: &str) -> Command {
    if arg.is_empty() {
        return Command::Invalid("Usage: /go <screen>".to_string());
    }
    if arg.starts_with('/') {
        return Command::Act(Action::Navigate(Route::parse(arg)));
    }
    match Screen::from_name(arg) {
        Ok(screen) => Command::Act(Action::Navigate(Route::to(screen))),
        Err(_) => Command::Invalid(unknown_screen_error(arg)),
    }
}

/// Takes the 1-based index shown on screen and builds a 0-based action
fn indexed(arg: &str, usage: &str, action: fn(usize) -> Action) -> Command {
    match arg.parse::<usize>() {
        Ok(n) if n >= 1 => Command::Act(action(n - 1)),
        _ => Command::Invalid(format!("Usage: {}", usage)),
    }
}

pub fn format_help() -> String {
    r#"Available commands:
  /help              - Show this help message
  /quit              - Exit
  /show              - Redraw the current screen
  /go <screen>       - Go to home, mood, chat, create or support
  /back              - Go back
  /sos               - Crisis support, right now

Welcome & sign in:
  /start, /skip, /toggle, /signin, /guest

Home:
  /quick <n>         - Quick mood check-in

Chat:
  Type anything to talk. Replies arrive after a short pause.

Mood journal:
  /mood <id>         - Log a mood (amazing, happy, good, neutral, down, sad, overwhelmed)
  /describe <text>   - Describe your mood in your own words
  /emoji, /text      - Switch input mode
  /another           - Log another mood
  /inspire           - Something uplifting
  /express           - Turn this feeling into something creative
  /talk              - Talk it through with the companion

Creative outlet:
  /create <type>     - poem, affirmation or art-idea
  /again             - Generate another
  /different         - Choose a different type
  /save, /share      - Keep or share the current piece
  /saved             - Everything you've saved

Crisis support:
  /call911           - Emergency services
  /contact <n>       - Call or text a support line
  /site <n>          - Open a support line's website
  /plan              - Safety plan template
  /talk              - Talk to the companion

If you are in danger, call 911. For the Suicide & Crisis Lifeline, call or text 988."#
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(input: &str) -> Action {
        match Command::parse(input) {
            Some(Command::Act(action)) => action,
            _ => panic!("Expected an action for {}", input),
        }
    }

    #[test]
    fn test_plain_text_is_not_a_command() {
        assert!(Command::parse("I feel sad").is_none());
        assert!(Command::parse("").is_none());
    }

    #[test]
    fn test_parse_meta_commands() {
        assert!(matches!(Command::parse("/help"), Some(Command::Help)));
        assert!(matches!(Command::parse("/quit"), Some(Command::Quit)));
        assert!(matches!(Command::parse("/exit"), Some(Command::Quit)));
        assert!(matches!(Command::parse("/saved"), Some(Command::Saved)));
    }

    #[test]
    fn test_parse_go() {
        assert_eq!(
            action("/go mood"),
            Action::Navigate(Route::to(Screen::Mood))
        );
        assert_eq!(
            action("/go Create"),
            Action::Navigate(Route::to(Screen::Creative))
        );
        assert_eq!(
            action("/go /mood?quick=sad"),
            Action::Navigate(Route::quick_mood("sad"))
        );
        assert!(matches!(Command::parse("/go nowhere"), Some(Command::Invalid(_))));
        assert!(matches!(Command::parse("/go"), Some(Command::Invalid(_))));
    }

    #[test]
    fn test_parse_arguments() {
        assert_eq!(action("/mood  happy "), Action::PickMood("happy".to_string()));
        assert_eq!(
            action("/describe so tired"),
            Action::DescribeMood("so tired".to_string())
        );
        assert_eq!(action("/create art"), Action::Create(CreativeKind::ArtIdea));
        assert_eq!(action("/contact 2"), Action::Contact(1));
        assert_eq!(action("/quick 1"), Action::QuickMood(0));
    }

    #[test]
    fn test_parse_onward_links() {
        assert_eq!(action("/express"), Action::OpenCreative);
        assert_eq!(action("/talk"), Action::TalkToCompanion);
    }

    #[test]
    fn test_parse_invalid_arguments() {
        assert!(matches!(Command::parse("/create limerick"), Some(Command::Invalid(_))));
        assert!(matches!(Command::parse("/contact 0"), Some(Command::Invalid(_))));
        assert!(matches!(Command::parse("/contact x"), Some(Command::Invalid(_))));
        assert!(matches!(Command::parse("/mood"), Some(Command::Invalid(_))));
        assert!(matches!(Command::parse("/dance"), Some(Command::Invalid(_))));
    }
}
