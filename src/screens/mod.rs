// Screens module
// Public interface for routes, screen controllers and the side effects they request

mod chat;
mod creative;
mod home;
mod mood;
mod onboarding;
mod support;

pub use chat::ChatScreen;
pub use creative::{saved_preview, CreativeScreen, SAVED_PREVIEW_LIMIT};
pub use home::HomeScreen;
pub use mood::{MoodInputMode, MoodScreen, MoodSelection};
pub use onboarding::{AuthMode, AuthScreen, WelcomeScreen};
pub use support::SupportScreen;

use std::fmt;
use std::time::Duration;

use crate::catalog::CreativeContent;
use crate::companion::Reply;
use crate::errors::{Result, SolaceError};

/// Every destination the navigation layer knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Welcome,
    Auth,
    Home,
    Mood,
    Chat,
    Creative,
    Support,
    NotFound,
}

impl Screen {
    /// Screens reachable by name; `NotFound` is only ever a routing result
    pub const ALL: [Screen; 7] = [
        Screen::Welcome,
        Screen::Auth,
        Screen::Home,
        Screen::Mood,
        Screen::Chat,
        Screen::Creative,
        Screen::Support,
    ];

    /// Bottom navigation bar, in display order
    pub const NAV_BAR: [Screen; 5] = [
        Screen::Home,
        Screen::Mood,
        Screen::Chat,
        Screen::Creative,
        Screen::Support,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Screen::Welcome => "welcome",
            Screen::Auth => "auth",
            Screen::Home => "home",
            Screen::Mood => "mood",
            Screen::Chat => "chat",
            Screen::Creative => "creative",
            Screen::Support => "support",
            Screen::NotFound => "not-found",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Screen::Welcome => "/",
            Screen::Auth => "/auth",
            Screen::Home => "/home",
            Screen::Mood => "/mood",
            Screen::Chat => "/chat",
            Screen::Creative => "/creative",
            Screen::Support => "/support",
            Screen::NotFound => "/404",
        }
    }

    /// Label in the bottom navigation bar, if the screen appears there
    pub fn nav_label(&self) -> Option<&'static str> {
        match self {
            Screen::Home => Some("Home"),
            Screen::Mood => Some("Mood"),
            Screen::Chat => Some("Chat"),
            Screen::Creative => Some("Create"),
            Screen::Support => Some("Support"),
            _ => None,
        }
    }

    /// Look up a screen by name or by its bottom-nav label
    pub fn from_name(name: &str) -> Result<Self> {
        let name = name.trim();
        Screen::ALL
            .into_iter()
            .find(|screen| {
                screen.name().eq_ignore_ascii_case(name)
                    || screen
                        .nav_label()
                        .is_some_and(|label| label.eq_ignore_ascii_case(name))
            })
            .ok_or_else(|| SolaceError::UnknownScreen(name.to_string()))
    }

    /// Resolve a path; anything unrecognised lands on `NotFound`
    pub fn from_path(path: &str) -> Self {
        let path = path.trim();
        let path = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path
        };
        Screen::ALL
            .into_iter()
            .find(|screen| screen.path() == path)
            .unwrap_or(Screen::NotFound)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A navigation target: a screen plus its optional query parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub screen: Screen,
    /// `?quick=<mood id>` preselects a mood on the mood screen
    pub quick_mood: Option<String>,
}

impl Route {
    pub fn to(screen: Screen) -> Self {
        Self {
            screen,
            quick_mood: None,
        }
    }

    pub fn quick_mood(mood_id: impl Into<String>) -> Self {
        Self {
            screen: Screen::Mood,
            quick_mood: Some(mood_id.into()),
        }
    }

    /// Parse "/mood?quick=happy" style locations
    pub fn parse(location: &str) -> Self {
        let (path, query) = match location.trim().split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (location.trim(), None),
        };
        let screen = Screen::from_path(path);

        let quick_mood = query
            .into_iter()
            .flat_map(|q| q.split('&'))
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == "quick")
            .map(|(_, value)| value.to_string())
            .filter(|value| !value.is_empty());

        Self { screen, quick_mood }
    }
}

impl From<Screen> for Route {
    fn from(screen: Screen) -> Self {
        Route::to(screen)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.screen.path())?;
        if let Some(mood) = &self.quick_mood {
            write!(f, "?quick={}", mood)?;
        }
        Ok(())
    }
}

/// Side effect requested by a screen transition
///
/// Controllers never perform effects themselves; the app loop carries
/// these out against the navigation service, the reply scheduler and the
/// platform.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Navigate(Route),
    /// Deliver `reply` to the chat screen after `delay`
    ScheduleReply { reply: Reply, delay: Duration },
    Dial { number: String },
    ComposeText { number: String, body: String },
    OpenUrl(String),
    Share { title: String, body: String },
    SaveItem(CreativeContent),
}

impl Command {
    pub fn navigate(route: impl Into<Route>) -> Self {
        Command::Navigate(route.into())
    }

    /// Crisis button shown in screen headers
    pub fn crisis_button() -> Self {
        Command::navigate(Screen::Support)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_lookup_by_name() {
        assert_eq!(Screen::from_name("mood").unwrap(), Screen::Mood);
        assert_eq!(Screen::from_name("Create").unwrap(), Screen::Creative);
        assert_eq!(Screen::from_name(" SUPPORT ").unwrap(), Screen::Support);
        assert!(Screen::from_name("settings").is_err());
        assert!(Screen::from_name("not-found").is_err());
    }

    #[test]
    fn test_paths_round_trip() {
        for screen in Screen::ALL {
            assert_eq!(Screen::from_path(screen.path()), screen);
        }
        assert_eq!(Screen::from_path("/chat/"), Screen::Chat);
        assert_eq!(Screen::from_path("/welcome"), Screen::NotFound);
    }

    #[test]
    fn test_nav_bar_labels() {
        let labels: Vec<_> = Screen::NAV_BAR
            .iter()
            .filter_map(|s| s.nav_label())
            .collect();
        assert_eq!(labels, vec!["Home", "Mood", "Chat", "Create", "Support"]);
        assert_eq!(Screen::Auth.nav_label(), None);
    }

    #[test]
    fn test_route_parse_quick_mood() {
        let route = Route::parse("/mood?quick=happy");
        assert_eq!(route, Route::quick_mood("happy"));
        assert_eq!(route.to_string(), "/mood?quick=happy");

        let route = Route::parse("/mood?other=1&quick=");
        assert_eq!(route, Route::to(Screen::Mood));

        assert_eq!(Route::parse("/nowhere").screen, Screen::NotFound);
    }

    #[test]
    fn test_crisis_button_goes_to_support() {
        assert_eq!(
            Command::crisis_button(),
            Command::Navigate(Route::to(Screen::Support))
        );
    }
}
