// Error types and user-friendly error messages
//
// The engine itself almost never fails: crisis detection is a routing
// decision and empty input is ignored. Errors only come from loading
// configuration, reading keyword files, and the terminal front-end.

use std::path::PathBuf;
use thiserror::Error;

use crate::screens::Screen;

#[derive(Debug, Error)]
pub enum SolaceError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse crisis keywords {}: {source}", path.display())]
    KeywordsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unknown screen: {0}")]
    UnknownScreen(String),

    #[error("'{action}' is not available on the {screen} screen")]
    WrongScreen { action: &'static str, screen: Screen },

    #[error("unknown creative content type: {0}")]
    UnknownContentType(String),

    #[error("{0} is not available on this platform")]
    Unavailable(&'static str),

    #[error("chat replies need a running Tokio runtime")]
    NoRuntime,

    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SolaceError>;

/// Format a config parse error with helpful suggestions
pub fn config_parse_error(path: &str, error: &str) -> String {
    format!(
        "Failed to parse config file {}\n\n\
        \x1b[1;33mError:\x1b[0m {}\n\n\
        \x1b[1;32mTry:\x1b[0m\n\
        1. Check the file syntax:\n\
           \x1b[36mcat {}\x1b[0m\n\n\
        2. Remove the file to fall back to defaults:\n\
           \x1b[36mmv {} {}.backup\x1b[0m\n\n\
        3. Known keys:\n\
           • typing_delay_min_ms / typing_delay_max_ms (milliseconds)\n\
           • mood_history_limit (1 to 7)\n\
           • crisis_keywords_path (JSON file)\n\
           • color (true/false)",
        path, error, path, path, path
    )
}

/// Format an unknown screen error listing the screens that exist
pub fn unknown_screen_error(name: &str) -> String {
    let known: Vec<&str> = Screen::ALL.iter().map(|s| s.name()).collect();
    format!(
        "No screen called '{}'\n\n\
        \x1b[1;32mAvailable screens:\x1b[0m {}\n\n\
        Need help right now? Type \x1b[36m/go support\x1b[0m",
        name,
        known.join(", ")
    )
}

/// Format an unknown creative type error
pub fn unknown_content_type_error(name: &str) -> String {
    format!(
        "Unknown creative content type '{}'\n\n\
        \x1b[1;32mTry one of:\x1b[0m poem, affirmation, art-idea",
        name
    )
}
