// First-match-wins keyword matcher

use super::random::{choose, RandomSource};

/// One keyword rule: if any keyword appears in the text, answer from
/// `responses`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    name: String,
    keywords: Vec<String>,
    responses: Vec<String>,
}

impl Rule {
    /// Keywords are case-folded here so matching only folds the input.
    pub fn new<K, R>(name: impl Into<String>, keywords: K, responses: R) -> Self
    where
        K: IntoIterator,
        K::Item: AsRef<str>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            name: name.into(),
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
            responses: responses.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn responses(&self) -> &[String] {
        &self.responses
    }

    /// First keyword found in already-folded text.
    ///
    /// Plain substring search: "sad" is found inside "sadly".
    pub fn keyword_in(&self, folded: &str) -> Option<&str> {
        self.keywords
            .iter()
            .find(|k| folded.contains(k.as_str()))
            .map(String::as_str)
    }
}

/// Outcome of a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    /// A rule matched; the response came from its set
    Rule {
        rule: &'a str,
        keyword: &'a str,
        response: &'a str,
    },
    /// Nothing matched; the response came from the fallback set
    Fallback { response: &'a str },
}

impl<'a> Selection<'a> {
    pub fn response(&self) -> &'a str {
        match *self {
            Selection::Rule { response, .. } => response,
            Selection::Fallback { response } => response,
        }
    }

    /// Name of the matching rule, `None` for a fallback
    pub fn rule(&self) -> Option<&'a str> {
        match *self {
            Selection::Rule { rule, .. } => Some(rule),
            Selection::Fallback { .. } => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Selection::Fallback { .. })
    }
}

/// Ordered rule table plus a fallback set.
///
/// Rules are tried in the order given; the first one with any keyword in
/// the text wins even if a later rule would also match. Callers trim and
/// reject empty input before calling.
#[derive(Debug, Clone, Default)]
pub struct KeywordMatcher {
    rules: Vec<Rule>,
    fallback: Vec<String>,
}

impl KeywordMatcher {
    pub fn new<F>(rules: Vec<Rule>, fallback: F) -> Self
    where
        F: IntoIterator,
        F::Item: Into<String>,
    {
        Self {
            rules,
            fallback: fallback.into_iter().map(Into::into).collect(),
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn fallback(&self) -> &[String] {
        &self.fallback
    }

    /// First rule matching `text`, with the keyword that triggered it.
    /// Rules without responses never match.
    pub fn find(&self, text: &str) -> Option<(&Rule, &str)> {
        let folded = text.to_lowercase();
        self.rules
            .iter()
            .filter(|rule| !rule.responses.is_empty())
            .find_map(|rule| rule.keyword_in(&folded).map(|keyword| (rule, keyword)))
    }

    /// Pick a response for `text`.
    ///
    /// Returns `None` only when no rule matches and the fallback set is
    /// empty; tables with a fallback always produce a response.
    pub fn select(&self, text: &str, rng: &mut dyn RandomSource) -> Option<Selection<'_>> {
        if let Some((rule, keyword)) = self.find(text) {
            let response = choose(rng, &rule.responses)?;
            tracing::debug!(rule = rule.name(), keyword, "Keyword rule matched");
            return Some(Selection::Rule {
                rule: &rule.name,
                keyword,
                response,
            });
        }

        let response = choose(rng, &self.fallback)?;
        tracing::debug!("No keyword rule matched, using fallback");
        Some(Selection::Fallback { response })
    }
}
