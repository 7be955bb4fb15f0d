// Test configuration loading
//
// This test suite verifies that:
// 1. A partial TOML file fills the rest from defaults
// 2. Invalid settings are rejected before the app starts
// 3. SOLACE_* overrides win over the file

use anyhow::Result;
use std::collections::HashMap;
use std::io::Write;

use solace::config::{apply_overrides, load_config, load_from_file, Config};
use solace::SolaceError;

fn write_config(contents: &str) -> Result<tempfile::NamedTempFile> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, "{}", contents)?;
    Ok(file)
}

/// Only the keys present in the file change
#[test]
fn test_partial_file_uses_defaults() -> Result<()> {
    let file = write_config("mood_history_limit = 3\n")?;
    let config = load_from_file(file.path())?;

    assert_eq!(config.mood_history_limit, 3);
    assert_eq!(config.typing_delay_min_ms, Config::default().typing_delay_min_ms);
    assert!(config.crisis_keywords_path.is_none());
    Ok(())
}

/// Inverted delay bounds fail validation on load
#[test]
fn test_invalid_file_is_rejected() -> Result<()> {
    let file = write_config("typing_delay_min_ms = 4000\ntyping_delay_max_ms = 100\n")?;
    let err = load_config(Some(file.path())).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<SolaceError>(),
        Some(SolaceError::InvalidConfig(_))
    ));
    Ok(())
}

/// The journal never keeps more than seven moods
#[test]
fn test_history_limit_above_seven_is_rejected() -> Result<()> {
    let file = write_config("mood_history_limit = 20\n")?;
    let err = load_config(Some(file.path())).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<SolaceError>(),
        Some(SolaceError::InvalidConfig(_))
    ));
    Ok(())
}

/// Environment-style overrides replace file values
#[test]
fn test_overrides_win() -> Result<()> {
    let file = write_config("typing_delay_min_ms = 10\ntyping_delay_max_ms = 20\n")?;
    let mut config = load_from_file(file.path())?;

    let vars: HashMap<&str, &str> = [
        ("SOLACE_TYPING_DELAY_MAX_MS", "500"),
        ("SOLACE_CRISIS_KEYWORDS", "/tmp/keywords.json"),
        ("NO_COLOR", "1"),
    ]
    .into_iter()
    .collect();
    apply_overrides(&mut config, |key| vars.get(key).map(|v| v.to_string()))?;

    assert_eq!(config.typing_delay_min_ms, 10);
    assert_eq!(config.typing_delay_max_ms, 500);
    assert_eq!(
        config.crisis_keywords_path.as_deref(),
        Some(std::path::Path::new("/tmp/keywords.json"))
    );
    assert!(!config.color);
    Ok(())
}

/// Garbage in an override is an error, not a silent default
#[test]
fn test_bad_override_value() {
    let mut config = Config::default();
    let err = apply_overrides(&mut config, |key| {
        (key == "SOLACE_TYPING_DELAY_MIN_MS").then(|| "soon".to_string())
    })
    .unwrap_err();
    assert!(matches!(err, SolaceError::InvalidConfig(_)));
}
