//! Ordered rule-table intent router.
//!
//! Evaluates rules top to bottom against the lower-cased utterance and
//! returns the first match. Table order is the tie-break when an utterance
//! contains keywords from several categories; position in the utterance does
//! not matter.

use tracing::debug;

use crate::intent::Intent;
use crate::rule::Rule;

/// Pure mapping from utterance to [`Intent`].
#[derive(Debug, Clone)]
pub struct IntentRouter {
    rules: Vec<Rule>,
    fallback: Intent,
}

impl IntentRouter {
    pub fn new(rules: Vec<Rule>, fallback: Intent) -> Self {
        Self { rules, fallback }
    }

    /// Resolve an utterance. Every input, including the empty string,
    /// produces exactly one intent.
    pub fn resolve(&self, utterance: &str) -> Intent {
        match self.matching_rule(utterance) {
            Some(rule) => {
                debug!(rule = rule.name(), "Utterance matched rule");
                rule.intent().clone()
            }
            None => {
                debug!("No rule matched, using fallback");
                self.fallback.clone()
            }
        }
    }

    /// The first rule that matches, if any.
    pub fn matching_rule(&self, utterance: &str) -> Option<&Rule> {
        let lowered = utterance.to_lowercase();
        self.rules.iter().find(|rule| rule.matches(&lowered))
    }

    pub fn fallback(&self) -> &Intent {
        &self.fallback
    }

    /// Rule names in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(Rule::name).collect()
    }
}
