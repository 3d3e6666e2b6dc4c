//! Text chat session.
//!
//! Keeps the visible message list: a bot greeting, then alternating user
//! messages and canned replies resolved through the chat rule table.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use krishi_core::config::ChatConfig;
use krishi_intent::{chat_router, IntentRouter};

use crate::error::AssistantError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Author {
    Bot,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub text: String,
    pub author: Author,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    fn new(text: impl Into<String>, author: Author) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            author,
            sent_at: Utc::now(),
        }
    }

    pub fn is_bot(&self) -> bool {
        self.author == Author::Bot
    }
}

pub struct ChatSession {
    router: IntentRouter,
    greeting: String,
    reply_delay: Duration,
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new(router: IntentRouter, greeting: impl Into<String>, reply_delay: Duration) -> Self {
        let greeting = greeting.into();
        Self {
            router,
            messages: vec![ChatMessage::new(greeting.clone(), Author::Bot)],
            greeting,
            reply_delay,
        }
    }

    /// Build a session with the shipped chat rule table and configured replies.
    pub fn from_config(config: &ChatConfig) -> Result<Self, AssistantError> {
        Ok(Self::new(
            chat_router(&config.replies)?,
            config.greeting.clone(),
            Duration::from_millis(config.reply_delay_ms),
        ))
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Append the user's message and, after the reply delay, the bot's answer.
    ///
    /// Blank input is ignored and returns `None`.
    pub async fn send(&mut self, input: &str) -> Option<&ChatMessage> {
        if input.trim().is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::new(input, Author::User));

        let intent = self.router.resolve(input);
        let reply = intent.acknowledgement().to_string();
        debug!(messages = self.messages.len(), "Chat reply resolved");

        if !self.reply_delay.is_zero() {
            tokio::time::sleep(self.reply_delay).await;
        }
        self.messages.push(ChatMessage::new(reply, Author::Bot));
        self.messages.last()
    }

    /// Drop the conversation and start again from the greeting.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.messages
            .push(ChatMessage::new(self.greeting.clone(), Author::Bot));
    }

    /// Replace the greeting (e.g. after a language change) and reset.
    pub fn set_greeting(&mut self, greeting: impl Into<String>) {
        self.greeting = greeting.into();
        self.reset();
    }
}

impl std::fmt::Debug for ChatSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatSession")
            .field("messages", &self.messages.len())
            .field("reply_delay", &self.reply_delay)
            .finish_non_exhaustive()
    }
}
