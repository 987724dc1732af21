use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{AircraftModel, IssueCategory, MessageRole};

/// Optional classification tags on a chat message.
///
/// Each key is independently present-or-absent; an unset tag is omitted from
/// the wire payload rather than serialized as null, so "no tag" never
/// collides with an empty value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MessageTags {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aircraft_model: Option<AircraftModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_category: Option<IssueCategory>,
}

impl MessageTags {
    pub fn is_empty(&self) -> bool {
        self.aircraft_model.is_none() && self.issue_category.is_none()
    }
}

/// A single chat message. Immutable once appended to a conversation:
/// never reordered, never edited.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: Uuid,
    pub role: MessageRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    /// Present only when the sender attached at least one tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<MessageTags>,
    /// Server-reported handling time in seconds, assistant replies only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_time: Option<f64>,
    /// True for the apology bubble appended when the transport failed.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

impl Message {
    /// Build a user message. Empty tag records collapse to `None`.
    pub fn user(content: impl Into<String>, tags: MessageTags) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: MessageRole::User,
            content: content.into(),
            timestamp: Utc::now(),
            tags: if tags.is_empty() { None } else { Some(tags) },
            processing_time: None,
            is_error: false,
        }
    }

    /// Build an assistant reply.
    pub fn assistant(content: impl Into<String>, processing_time: Option<f64>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: MessageRole::Assistant,
            content: content.into(),
            timestamp: Utc::now(),
            tags: None,
            processing_time,
            is_error: false,
        }
    }

    /// Build an assistant-side error bubble with the given apology text.
    pub fn assistant_error(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: MessageRole::Assistant,
            content: content.into(),
            timestamp: Utc::now(),
            tags: None,
            processing_time: None,
            is_error: true,
        }
    }
}
