// Crisis phrase detector

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::errors::{Result, SolaceError};

/// Built-in high-risk phrases. Always checked, whatever else is loaded.
pub const DEFAULT_CRISIS_PHRASES: &[&str] = &[
    "suicide",
    "kill myself",
    "end it all",
    "hurt myself",
    "self harm",
    "want to die",
];

/// Extra phrases loaded from a JSON file, grouped by category
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CrisisKeywords {
    #[serde(default)]
    pub self_harm: Vec<String>,
    #[serde(default)]
    pub violence: Vec<String>,
    #[serde(default)]
    pub abuse: Vec<String>,
}

impl CrisisKeywords {
    fn into_phrases(self) -> impl Iterator<Item = String> {
        self.self_harm
            .into_iter()
            .chain(self.violence)
            .chain(self.abuse)
    }
}

/// Case-insensitive substring check against a fixed phrase list.
///
/// Pure and deterministic: the same text always gives the same answer.
#[derive(Debug, Clone)]
pub struct CrisisDetector {
    phrases: Vec<String>,
}

impl Default for CrisisDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl CrisisDetector {
    /// Detector with the built-in phrases only
    pub fn new() -> Self {
        Self {
            phrases: DEFAULT_CRISIS_PHRASES.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Built-in phrases plus `keywords`, deduplicated
    pub fn with_keywords(keywords: CrisisKeywords) -> Self {
        let mut detector = Self::new();
        for phrase in keywords.into_phrases() {
            let phrase = phrase.trim().to_lowercase();
            if !phrase.is_empty() && !detector.phrases.contains(&phrase) {
                detector.phrases.push(phrase);
            }
        }
        detector
    }

    /// Load extra crisis keywords from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| SolaceError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let keywords: CrisisKeywords =
            serde_json::from_str(&contents).map_err(|source| SolaceError::KeywordsParse {
                path: path.to_path_buf(),
                source,
            })?;

        let detector = Self::with_keywords(keywords);
        tracing::info!(
            phrases = detector.phrases.len(),
            path = %path.display(),
            "Loaded crisis keywords"
        );
        Ok(detector)
    }

    /// Detect if text contains a crisis phrase
    pub fn detect(&self, text: &str) -> bool {
        self.matched_phrase(text).is_some()
    }

    /// The first phrase found in `text`, if any
    pub fn matched_phrase(&self, text: &str) -> Option<&str> {
        let folded = text.to_lowercase();
        let phrase = self
            .phrases
            .iter()
            .find(|phrase| folded.contains(phrase.as_str()))?;
        tracing::warn!("Crisis detected: phrase '{}'", phrase);
        Some(phrase.as_str())
    }

    /// All phrases checked (for display purposes)
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }
}
