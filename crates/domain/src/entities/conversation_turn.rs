//! Conversation turn supplied by the caller
//!
//! History is resent by the caller on every request, so a turn only lives
//! for the duration of one request. Only `user` and `assistant` are accepted;
//! a caller can never inject a system instruction through the history.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Role of a caller-supplied turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    /// Something the user said
    User,
    /// Something the assistant replied
    Assistant,
}

impl fmt::Display for TurnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for TurnRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "assistant" => Ok(Self::Assistant),
            other => Err(DomainError::InvalidRole(other.to_string())),
        }
    }
}

/// One prior exchange in the conversation history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// Who produced the content
    pub role: TurnRole,
    /// What was said
    pub content: String,
}

impl ConversationTurn {
    /// Create a new turn
    pub fn new(role: TurnRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Parse a turn from its JSON form `{"role": ..., "content": ...}`
    ///
    /// Extra keys are ignored. Malformed JSON, a missing key or a non-string
    /// value is a `ValidationError`; a role other than `user`/`assistant` is
    /// an `InvalidRole`.
    pub fn from_json(raw: &str) -> Result<Self, DomainError> {
        let wire: WireTurn =
            serde_json::from_str(raw).map_err(|e| DomainError::ValidationError(e.to_string()))?;
        Ok(Self {
            role: wire.role.parse()?,
            content: wire.content,
        })
    }
}

/// Turn as it arrives, before the role is checked
#[derive(Deserialize)]
struct WireTurn {
    role: String,
    content: String,
}
