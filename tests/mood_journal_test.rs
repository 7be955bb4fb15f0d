// Test the mood journal through the app
//
// This test suite verifies that:
// 1. Picking a preset records it and shows its fixed response
// 2. The history keeps only the most recent entries, newest first
// 3. Free-text moods are matched by keyword or echoed back
// 4. Quick links from home preselect without recording

use anyhow::Result;

use solace::app::{Action, App, ScreenState};
use solace::catalog::mood::CUSTOM_MOOD_EMOJI;
use solace::config::Config;
use solace::matcher::ScriptedSource;
use solace::platform::RecordingPlatform;
use solace::screens::{MoodScreen, MoodSelection, Route, Screen};

fn app_with(config: Config) -> Result<App> {
    let mut app = App::new(
        config,
        Box::new(ScriptedSource::default()),
        Box::new(RecordingPlatform::new()),
    )?;
    app.navigate(Route::to(Screen::Mood));
    Ok(app)
}

fn mood(app: &App) -> &MoodScreen {
    match app.screen() {
        ScreenState::Mood(mood) => mood,
        other => panic!("expected mood screen, got {:?}", other),
    }
}

/// "overwhelmed" shows the breathing response and lands in history
#[test]
fn test_pick_overwhelmed() -> Result<()> {
    let mut app = app_with(Config::default())?;
    app.dispatch(Action::PickMood("overwhelmed".to_string()))?;

    let screen = mood(&app);
    assert_eq!(
        screen.response(),
        Some("Take a deep breath with me. 🌸 Let's break things down into smaller, manageable pieces.")
    );
    let latest = screen.history().latest().expect("entry recorded");
    assert_eq!(latest.label(), "overwhelmed");
    assert_eq!(latest.emoji(), "😰");
    Ok(())
}

/// Eight picks keep the last seven, newest first
#[test]
fn test_history_is_bounded() -> Result<()> {
    let mut app = app_with(Config::default())?;
    let picks = [
        "amazing", "happy", "good", "neutral", "down", "sad", "overwhelmed", "happy",
    ];
    for id in picks {
        app.dispatch(Action::PickMood(id.to_string()))?;
        app.dispatch(Action::LogAnotherMood)?;
    }

    let labels: Vec<&str> = mood(&app).history().entries().map(|e| e.label()).collect();
    assert_eq!(
        labels,
        ["happy", "overwhelmed", "sad", "down", "neutral", "good", "happy"]
    );
    Ok(())
}

/// A smaller configured limit is honored
#[test]
fn test_history_limit_from_config() -> Result<()> {
    let config = Config {
        mood_history_limit: 2,
        ..Config::default()
    };
    let mut app = app_with(config)?;
    for id in ["happy", "sad", "good"] {
        app.dispatch(Action::PickMood(id.to_string()))?;
    }

    let labels: Vec<&str> = mood(&app).history().entries().map(|e| e.label()).collect();
    assert_eq!(labels, ["good", "sad"]);
    Ok(())
}

/// Free text with a known keyword gets that rule's response
#[test]
fn test_custom_mood_keyword() -> Result<()> {
    let mut app = app_with(Config::default())?;
    app.dispatch(Action::DescribeMood("Completely exhausted today".to_string()))?;

    let screen = mood(&app);
    assert!(screen.response().unwrap_or_default().contains("drained"));
    let latest = screen.history().latest().expect("entry recorded");
    assert_eq!(latest.label(), "Completely exhausted today");
    assert_eq!(latest.emoji(), CUSTOM_MOOD_EMOJI);
    Ok(())
}

/// Free text with no keyword is echoed back
#[test]
fn test_custom_mood_echo() -> Result<()> {
    let mut app = app_with(Config::default())?;
    app.dispatch(Action::DescribeMood("kind of meh".to_string()))?;

    let response = mood(&app).response().unwrap_or_default();
    assert!(response.contains("\"kind of meh\""));
    Ok(())
}

/// Blank free text records nothing
#[test]
fn test_blank_custom_mood_ignored() -> Result<()> {
    let mut app = app_with(Config::default())?;
    app.dispatch(Action::DescribeMood("   ".to_string()))?;

    assert!(mood(&app).response().is_none());
    assert!(mood(&app).history().is_empty());
    Ok(())
}

/// Home quick mood opens the journal with the mood preselected
#[test]
fn test_quick_mood_preselects() -> Result<()> {
    let mut app = app_with(Config::default())?;
    app.navigate(Route::to(Screen::Home));
    app.dispatch(Action::QuickMood(2))?;

    assert_eq!(app.route().to_string(), "/mood?quick=sad");
    let screen = mood(&app);
    assert!(matches!(
        screen.selection(),
        Some(MoodSelection::Preset(preset)) if preset.id == "sad"
    ));
    assert!(screen.response().is_none());
    assert!(screen.history().is_empty());
    Ok(())
}

/// Leaving and coming back starts an empty journal
#[test]
fn test_history_resets_per_visit() -> Result<()> {
    let mut app = app_with(Config::default())?;
    app.dispatch(Action::PickMood("good".to_string()))?;
    app.dispatch(Action::Back)?;
    assert_eq!(app.route().screen, Screen::Home);

    app.navigate(Route::parse("/mood"));
    assert!(mood(&app).history().is_empty());
    Ok(())
}
