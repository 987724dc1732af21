//! Assistant transport boundary.
//!
//! The conversation core only sees [`AssistantClient`]; the network-backed
//! [`HttpAssistant`] is the canonical implementation, and [`LocalAssistant`]
//! is the deterministic offline stand-in (also the responder behind the
//! bundled server's chat endpoint).

pub mod http;
pub mod local;

use async_trait::async_trait;

use crate::models::MessageTags;

pub use http::HttpAssistant;
pub use local::LocalAssistant;

/// What a transport hands back on success.
#[derive(Debug, Clone, PartialEq)]
pub struct AssistantReply {
    pub text: String,
    /// Server-reported handling time in seconds, when the backend measures it.
    pub processing_time: Option<f64>,
}

/// Why a reply request failed. Any variant surfaces to the UI as a retryable
/// banner; none of them are fatal to the session.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TransportError {
    #[error("chat request failed: {0}")]
    Request(String),
    #[error("chat endpoint returned HTTP {status}")]
    Status { status: u16 },
    #[error("malformed chat response: {0}")]
    Malformed(String),
}

/// One round trip to whatever answers maintenance questions.
#[async_trait]
pub trait AssistantClient: Send + Sync {
    async fn send(&self, message: &str, tags: &MessageTags)
        -> Result<AssistantReply, TransportError>;
}
