//! A single entry of a rule table.

use regex::Regex;

use crate::error::IntentError;
use crate::intent::Intent;

/// Pattern matched against the lower-cased utterance, paired with the intent
/// it produces.
#[derive(Debug, Clone)]
pub struct Rule {
    name: &'static str,
    pattern: Regex,
    intent: Intent,
}

impl Rule {
    /// Build a rule from a raw regex. The pattern sees lower-cased input.
    pub fn new(name: &'static str, pattern: &str, intent: Intent) -> Result<Self, IntentError> {
        let pattern = Regex::new(pattern).map_err(|source| IntentError::InvalidPattern {
            rule: name.to_string(),
            source,
        })?;
        Ok(Self {
            name,
            pattern,
            intent,
        })
    }

    /// Build a rule that fires when any keyword occurs anywhere in the
    /// utterance. No word boundaries: `"market"` also matches `"marketplace"`.
    pub fn keywords(
        name: &'static str,
        keywords: &[&str],
        intent: Intent,
    ) -> Result<Self, IntentError> {
        if keywords.is_empty() {
            return Err(IntentError::EmptyRule(name.to_string()));
        }
        let alternation = keywords
            .iter()
            .map(|k| regex::escape(&k.to_lowercase()))
            .collect::<Vec<_>>()
            .join("|");
        Self::new(name, &alternation, intent)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn intent(&self) -> &Intent {
        &self.intent
    }

    /// `lowered` must already be lower-cased.
    pub fn matches(&self, lowered: &str) -> bool {
        self.pattern.is_match(lowered)
    }
}
