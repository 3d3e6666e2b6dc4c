//! The two rule tables shipped with the client.
//!
//! Voice and chat use structurally identical tables over the same router;
//! only the categories differ.

pub mod chat;
pub mod voice;

use crate::error::IntentError;
use crate::intent::Intent;
use crate::rule::Rule;

type Entry<'a> = (&'static str, &'a [&'a str], Intent);

fn build<'a>(table: impl IntoIterator<Item = Entry<'a>>) -> Result<Vec<Rule>, IntentError> {
    table
        .into_iter()
        .map(|(name, keywords, intent)| Rule::keywords(name, keywords, intent))
        .collect()
}
