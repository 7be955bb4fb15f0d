// Test crisis detection and the support screen
//
// This test suite verifies that:
// 1. Detection is case-insensitive, unanchored and side-effect free
// 2. Extra phrases load from a keywords file via the config
// 3. Support actions reach the platform as calls, texts and links
// 4. The crisis button is reachable from every screen

use anyhow::Result;
use std::io::Write;

use solace::app::{Action, App};
use solace::config::Config;
use solace::crisis::{CrisisDetector, SAFETY_PLAN_URL};
use solace::matcher::ScriptedSource;
use solace::platform::{PlatformAction, RecordingPlatform};
use solace::screens::{Route, Screen};

fn support_app(platform: RecordingPlatform) -> Result<App> {
    let mut app = App::new(
        Config::default().without_typing_delay(),
        Box::new(ScriptedSource::default()),
        Box::new(platform),
    )?;
    app.navigate(Route::to(Screen::Support));
    Ok(app)
}

/// Same input, same answer, whatever the casing
#[test]
fn test_detect_is_stable() {
    let detector = CrisisDetector::new();
    for _ in 0..3 {
        assert!(detector.detect("Thinking about SUICIDE lately"));
        assert!(!detector.detect("thinking about dinner lately"));
    }
}

/// Phrases match anywhere inside the text
#[test]
fn test_detect_substrings() {
    let detector = CrisisDetector::new();
    assert!(detector.detect("suicide-prevention leaflet"));
    assert!(detector.detect("I keep wanting to hurt myself."));
    assert!(!detector.detect("I feel suicidal"));
}

/// Phrases from a keywords file are added to the built-in list
#[tokio::test]
async fn test_custom_keywords_from_config() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, r#"{{"self_harm": ["no reason to live"]}}"#)?;

    let config = Config {
        crisis_keywords_path: Some(file.path().to_path_buf()),
        ..Config::default().without_typing_delay()
    };
    let mut app = App::new(
        config,
        Box::new(ScriptedSource::default()),
        Box::new(RecordingPlatform::new()),
    )?;
    assert!(app.companion().detector().detect("there is No Reason To Live"));
    assert!(app.companion().detector().detect("want to die"));

    app.navigate(Route::to(Screen::Chat));
    app.dispatch(Action::Say("I have no reason to live".to_string()))?;
    let reply = app.next_reply().await.expect("reply should arrive");
    assert!(reply.is_crisis());
    Ok(())
}

/// A missing keywords file stops the app from starting
#[test]
fn test_missing_keywords_file() {
    let config = Config {
        crisis_keywords_path: Some("/nonexistent/solace/keywords.json".into()),
        ..Config::default()
    };
    let result = App::new(
        config,
        Box::new(ScriptedSource::default()),
        Box::new(RecordingPlatform::new()),
    );
    assert!(result.is_err());
}

/// Every hotline becomes the right platform request
#[test]
fn test_support_contacts() -> Result<()> {
    let platform = RecordingPlatform::new();
    let mut app = support_app(platform.clone())?;

    app.dispatch(Action::CallEmergency)?;
    for index in 0..4 {
        app.dispatch(Action::Contact(index))?;
    }

    assert_eq!(
        platform.actions(),
        vec![
            PlatformAction::Dial("911".to_string()),
            PlatformAction::Dial("988".to_string()),
            PlatformAction::Text {
                number: "741741".to_string(),
                body: "HOME".to_string(),
            },
            PlatformAction::Dial("8008528336".to_string()),
            PlatformAction::Dial("8006564673".to_string()),
        ]
    );
    Ok(())
}

/// Websites and the safety plan open as links
#[test]
fn test_support_links() -> Result<()> {
    let platform = RecordingPlatform::new();
    let mut app = support_app(platform.clone())?;

    app.dispatch(Action::OpenWebsite(3))?;
    app.dispatch(Action::OpenSafetyPlan)?;
    // Out of range does nothing
    app.dispatch(Action::OpenWebsite(9))?;

    assert_eq!(
        platform.actions(),
        vec![
            PlatformAction::OpenUrl("https://rainn.org".to_string()),
            PlatformAction::OpenUrl(SAFETY_PLAN_URL.to_string()),
        ]
    );
    Ok(())
}

/// The crisis button works from every screen
#[test]
fn test_crisis_button_everywhere() -> Result<()> {
    let mut app = support_app(RecordingPlatform::new())?;
    for screen in Screen::ALL {
        app.navigate(Route::to(screen));
        app.dispatch(Action::CrisisButton)?;
        assert_eq!(app.route().screen, Screen::Support);
    }
    Ok(())
}
