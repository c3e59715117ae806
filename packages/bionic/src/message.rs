use serde::Deserialize;
use thiserror::Error;

/// Error type for inbound messages that could not be decoded.
#[derive(Debug, Error)]
pub enum MessageError {
    /// The payload was not a JSON object with a string `action` field.
    #[error("malformed message: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// What the host wire format looks like: `{ "action": "..." }`. Other fields are ignored.
#[derive(Debug, Deserialize)]
struct Envelope {
    action: String,
}

/// A decoded inbound message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Flip the reader on or off
    Toggle,
    /// Any action this content script does not handle
    Other(String),
}

impl Message {
    /// Decode a JSON payload, recognising `toggle_action` as [`Message::Toggle`]
    pub fn from_json(payload: &str, toggle_action: &str) -> Result<Self, MessageError> {
        let envelope: Envelope = serde_json::from_str(payload)?;
        Ok(Self::from_action(envelope.action, toggle_action))
    }

    pub fn from_action(action: String, toggle_action: &str) -> Self {
        if action == toggle_action {
            Message::Toggle
        } else {
            Message::Other(action)
        }
    }
}
