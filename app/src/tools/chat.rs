//! FILENAME: app/src/tools/chat.rs
//! PURPOSE: Mock assistant chat for the chat tool page.
//! CONTEXT: Replies are canned, keyword-matched strings; a real
//! deployment would swap this for an actual AI service client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    fn new(role: ChatRole, content: impl Into<String>) -> Self {
        ChatMessage {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// The conversation log. Starts with the assistant greeting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatLog {
    pub messages: Vec<ChatMessage>,
}

impl Default for ChatLog {
    fn default() -> Self {
        ChatLog::new()
    }
}

impl ChatLog {
    pub fn new() -> Self {
        ChatLog {
            messages: vec![ChatMessage::new(
                ChatRole::Assistant,
                "Hello! How can I help you today?",
            )],
        }
    }

    /// Appends the user message and the canned reply. Whitespace-only
    /// input is ignored and returns None.
    pub fn send(&mut self, input: &str) -> Option<&ChatMessage> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        self.messages.push(ChatMessage::new(ChatRole::User, input));
        let reply = canned_reply(input);
        self.messages
            .push(ChatMessage::new(ChatRole::Assistant, reply));
        self.messages.last()
    }

    pub fn clear(&mut self) {
        *self = ChatLog::new();
    }
}

fn canned_reply(input: &str) -> &'static str {
    let lower = input.to_lowercase();
    if lower.contains("hello") || lower.contains("hi") {
        "Hello! How can I assist you today?"
    } else if lower.contains("weather") {
        "I don't have access to real-time weather data, but I can help you find a weather service or answer general questions about weather patterns."
    } else if lower.contains("help") {
        "I'm here to help! You can ask me questions, request information, or just chat. What would you like to know?"
    } else if lower.contains("thank") {
        "You're welcome! Feel free to ask if you need anything else."
    } else if lower.contains("name") {
        "I'm an AI assistant here to help you with your questions and tasks."
    } else {
        "That's an interesting question. I'm a simulated AI in this demo, so my responses are pre-programmed. In a real implementation, this would connect to an actual AI service like GPT."
    }
}
