// Test the chat companion end to end
//
// This test suite verifies that:
// 1. Crisis phrases always win over keyword rules
// 2. Keyword rules are applied in priority order
// 3. Replies arrive only after the typing delay
// 4. Leaving the chat discards a pending reply

use anyhow::Result;
use std::time::{Duration, Instant};

use solace::app::{Action, App, ScreenState};
use solace::companion::{Companion, ReplyRoute};
use solace::config::Config;
use solace::matcher::{RngSource, ScriptedSource};
use solace::platform::RecordingPlatform;
use solace::screens::{Route, Screen};
use solace::session::Sender;

fn chat_app(delay_ms: u64) -> Result<App> {
    let config = Config {
        typing_delay_min_ms: delay_ms,
        typing_delay_max_ms: delay_ms,
        ..Config::default()
    };
    let mut app = App::new(
        config,
        Box::new(ScriptedSource::default()),
        Box::new(RecordingPlatform::new()),
    )?;
    app.navigate(Route::to(Screen::Chat));
    Ok(app)
}

fn chat(app: &App) -> &solace::screens::ChatScreen {
    match app.screen() {
        ScreenState::Chat(chat) => chat,
        other => panic!("expected chat screen, got {:?}", other),
    }
}

/// "I want to kill myself" gets the crisis reply with hotline numbers
#[tokio::test]
async fn test_crisis_message_gets_crisis_reply() -> Result<()> {
    let mut app = chat_app(0)?;
    app.dispatch(Action::Say("I want to kill myself".to_string()))?;

    let reply = app.next_reply().await.expect("reply should arrive");
    assert!(reply.is_crisis());
    assert!(reply.text().contains("988"));
    assert!(reply.text().contains("HELLO"));
    assert!(reply.text().contains("741741"));
    Ok(())
}

/// Mixed-case crisis phrases are still caught
#[test]
fn test_crisis_detection_is_case_insensitive() {
    let companion = Companion::default();
    let mut rng = ScriptedSource::default();

    for text in ["I WANT TO DIE", "thinking about Self Harm", "i might End It All"] {
        let reply = companion.reply(text, &mut rng);
        assert!(reply.is_crisis(), "{} should be a crisis", text);
    }
}

/// Anxiety rule surfaces the grounding exercise
#[test]
fn test_anxiety_reply() {
    let companion = Companion::default();
    let reply = companion.reply(
        "I'm feeling anxious about exams",
        &mut ScriptedSource::default(),
    );
    assert_eq!(
        reply.route,
        ReplyRoute::Rule {
            name: "anxiety".to_string(),
            keyword: "anxious".to_string()
        }
    );
    assert!(reply.text.contains("5 things you can see"));
}

/// Earlier rules win when several keywords are present
#[test]
fn test_first_matching_rule_wins() {
    let companion = Companion::default();
    let mut rng = ScriptedSource::default();

    // sadness comes before gratitude
    let reply = companion.reply("I'm sad but thanks for listening", &mut rng);
    assert_eq!(reply.route.as_str(), "sadness");

    // stress comes before loneliness
    let reply = companion.reply("overwhelmed and alone", &mut rng);
    assert_eq!(reply.route.as_str(), "stress");
}

/// Unanchored matching: "sad" inside "sadly" still counts
#[test]
fn test_substring_matching_is_unanchored() {
    let companion = Companion::default();
    let reply = companion.reply("Sadly the day went badly", &mut ScriptedSource::default());
    assert_eq!(reply.route.as_str(), "sadness");
}

/// Unmatched text draws from the default replies
#[test]
fn test_fallback_is_drawn_from_defaults() {
    let companion = Companion::default();
    let mut rng = RngSource::seeded(7);

    for _ in 0..20 {
        let reply = companion.reply("I went to the shop", &mut rng);
        assert_eq!(reply.route, ReplyRoute::Fallback);
        assert!(solace::catalog::chat::DEFAULT_REPLIES.contains(&reply.text.as_str()));
    }
}

/// The reply is not visible before the typing delay has passed
#[tokio::test]
async fn test_reply_waits_for_typing_delay() -> Result<()> {
    let mut app = chat_app(60)?;
    let started = Instant::now();
    app.dispatch(Action::Say("thank you".to_string()))?;

    assert_eq!(chat(&app).messages().len(), 2);
    assert!(chat(&app).is_typing());

    let reply = app.next_reply().await.expect("reply should arrive");
    assert_eq!(reply.sender(), Sender::Agent);
    assert!(started.elapsed() >= Duration::from_millis(60));
    assert_eq!(chat(&app).messages().len(), 3);
    assert!(!chat(&app).is_typing());
    Ok(())
}

/// Submitting while a reply is pending does nothing
#[tokio::test]
async fn test_cannot_send_while_typing() -> Result<()> {
    let mut app = chat_app(30)?;
    app.dispatch(Action::Say("hello".to_string()))?;
    app.dispatch(Action::Say("are you there?".to_string()))?;

    assert_eq!(chat(&app).messages().len(), 2);
    app.next_reply().await;
    assert_eq!(chat(&app).log().turn_count(), 1);
    Ok(())
}

/// Navigating away drops the pending reply for good
#[tokio::test]
async fn test_navigation_discards_pending_reply() -> Result<()> {
    let mut app = chat_app(40)?;
    app.dispatch(Action::Say("I feel lonely".to_string()))?;
    app.dispatch(Action::CrisisButton)?;
    assert_eq!(app.route().screen, Screen::Support);
    assert!(!app.has_pending_reply());

    tokio::time::sleep(Duration::from_millis(80)).await;
    app.dispatch(Action::Navigate(Route::to(Screen::Chat)))?;

    // Fresh visit: only the greeting, and nothing arrives later
    assert_eq!(chat(&app).messages().len(), 1);
    assert!(app.next_reply().await.is_none());
    Ok(())
}

/// Message ids are unique and timestamps never go backwards
#[tokio::test]
async fn test_message_ids_and_timestamps() -> Result<()> {
    let mut app = chat_app(0)?;
    for text in ["hi", "I'm stressed", "thanks"] {
        app.dispatch(Action::Say(text.to_string()))?;
        app.next_reply().await;
    }

    let messages = chat(&app).messages();
    assert_eq!(messages.len(), 7);

    let mut ids: Vec<_> = messages.iter().map(|m| m.id()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 7);

    assert!(messages
        .windows(2)
        .all(|pair| pair[0].timestamp() <= pair[1].timestamp()));
    Ok(())
}
