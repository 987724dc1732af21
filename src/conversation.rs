//! Conversation sessions — ordered message log, turn-taking, and the
//! single-request-in-flight guard.
//!
//! A [`ConversationSession`] owns its message sequence (append-only, never
//! reordered) and the pending flag. [`ChatWorkspace`] owns the sessions and
//! drives the async reply round trip against an [`AssistantClient`],
//! discarding replies whose session was closed while the request was in
//! flight.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::assistant::{AssistantClient, TransportError};
use crate::models::{Message, MessageTags};

/// Fixed bubble text shown when the transport fails.
pub const TRANSPORT_APOLOGY: &str = "I apologize, but I encountered an error while processing \
your request. Please try again or contact support if the issue persists.";

/// Errors raised by the conversation core. `Transport` is the only one a
/// user can hit through normal UI gating; the others guard programmer
/// mistakes and blank input.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("message content is empty")]
    EmptyContent,
    #[error("a reply request is already in flight for this session")]
    RequestInFlight,
    #[error("conversation {0} no longer exists")]
    SessionNotFound(Uuid),
    #[error(transparent)]
    Transport(#[from] TransportError),
}

// ═══════════════════════════════════════════
// Session
// ═══════════════════════════════════════════

/// One chat thread. Held in memory only; grows monotonically.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationSession {
    pub id: Uuid,
    pub title: String,
    messages: Vec<Message>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip)]
    pending: bool,
}

impl ConversationSession {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: "New conversation".to_string(),
            messages: Vec::new(),
            created_at: now,
            updated_at: now,
            pending: false,
        }
    }

    /// Rebuild a session from stored parts (seed data, fixtures).
    pub fn from_parts(
        id: Uuid,
        title: impl Into<String>,
        messages: Vec<Message>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            messages,
            created_at,
            updated_at,
            pending: false,
        }
    }

    /// Messages in append order. No mutable access is exposed: a message is
    /// immutable once appended.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Append a user message. Blank content (after trimming) is rejected
    /// before it can reach any transport.
    pub fn append_user_message(
        &mut self,
        content: &str,
        tags: MessageTags,
    ) -> Result<&Message, ChatError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(ChatError::EmptyContent);
        }
        if self.messages.is_empty() && self.title == "New conversation" {
            self.title = generate_title(content);
        }
        Ok(self.push(Message::user(content, tags)))
    }

    /// Append a successful assistant reply.
    pub fn append_assistant_reply(
        &mut self,
        content: impl Into<String>,
        processing_time: Option<f64>,
    ) -> &Message {
        self.push(Message::assistant(content, processing_time))
    }

    /// Append the fixed apology bubble for a failed reply request.
    pub fn append_error_reply(&mut self) -> &Message {
        self.push(Message::assistant_error(TRANSPORT_APOLOGY))
    }

    fn push(&mut self, message: Message) -> &Message {
        self.messages.push(message);
        self.updated_at = Utc::now();
        self.messages.last().expect("just pushed")
    }

    /// Claim the single in-flight slot. Fails without side effects when a
    /// request is already outstanding.
    pub fn begin_request(&mut self) -> Result<(), ChatError> {
        if self.pending {
            return Err(ChatError::RequestInFlight);
        }
        self.pending = true;
        Ok(())
    }

    /// Release the in-flight slot. Always safe to call; the flag must never
    /// leak into a permanently-locked state.
    pub fn finish_request(&mut self) {
        self.pending = false;
    }
}

impl Default for ConversationSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate a conversation title from the first user message.
/// Truncates at 50 characters with "..." if longer, handling UTF-8 correctly.
pub fn generate_title(first_message: &str) -> String {
    let trimmed = first_message.trim();
    if trimmed.is_empty() {
        return "New conversation".to_string();
    }

    // Find the byte position at or just before the 50th character
    let boundary = trimmed
        .char_indices()
        .take_while(|(i, _)| *i < 50)
        .last()
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(trimmed.len());

    if boundary >= trimmed.len() {
        trimmed.to_string()
    } else {
        format!("{}...", &trimmed[..boundary])
    }
}

// ═══════════════════════════════════════════
// Workspace
// ═══════════════════════════════════════════

/// Owns the open conversations and the assistant transport.
///
/// Single-threaded and cooperative: every mutation happens in response to a
/// discrete call, and only the reply round trip suspends. The workspace —
/// not any global — is the unit of state; callers pass it explicitly.
pub struct ChatWorkspace {
    sessions: HashMap<Uuid, ConversationSession>,
    client: Box<dyn AssistantClient>,
}

impl ChatWorkspace {
    pub fn new(client: Box<dyn AssistantClient>) -> Self {
        Self {
            sessions: HashMap::new(),
            client,
        }
    }

    /// Open a fresh session and return its id.
    pub fn create_session(&mut self) -> Uuid {
        let session = ConversationSession::new();
        let id = session.id;
        self.sessions.insert(id, session);
        id
    }

    /// Adopt a pre-built session (seeded history).
    pub fn adopt_session(&mut self, session: ConversationSession) -> Uuid {
        let id = session.id;
        self.sessions.insert(id, session);
        id
    }

    pub fn session(&self, id: Uuid) -> Option<&ConversationSession> {
        self.sessions.get(&id)
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Close a session (the user navigated away). A reply still in flight
    /// for it will be discarded when it lands.
    pub fn close_session(&mut self, id: Uuid) -> Option<ConversationSession> {
        self.sessions.remove(&id)
    }

    /// Append a user message to a session without requesting a reply.
    pub fn append_user_message(
        &mut self,
        id: Uuid,
        content: &str,
        tags: MessageTags,
    ) -> Result<Message, ChatError> {
        let session = self
            .sessions
            .get_mut(&id)
            .ok_or(ChatError::SessionNotFound(id))?;
        session.append_user_message(content, tags).cloned()
    }

    /// Full turn: append the user message, hold the in-flight slot across
    /// the transport round trip, then merge the outcome back in.
    ///
    /// On transport failure the apology bubble is appended and the error is
    /// still returned so the UI can show its banner. The in-flight slot is
    /// released on every path.
    pub async fn request_assistant_reply(
        &mut self,
        id: Uuid,
        content: &str,
        tags: MessageTags,
    ) -> Result<Message, ChatError> {
        let (content, tags) = self.prepare_request(id, content, tags)?;
        let outcome = self.client.send(&content, &tags).await;
        self.apply_reply(id, outcome)
    }

    /// Validate input, append the user message, and claim the in-flight
    /// slot. Nothing is appended when the slot is taken or the content is
    /// blank.
    fn prepare_request(
        &mut self,
        id: Uuid,
        content: &str,
        tags: MessageTags,
    ) -> Result<(String, MessageTags), ChatError> {
        let session = self
            .sessions
            .get_mut(&id)
            .ok_or(ChatError::SessionNotFound(id))?;

        let content = content.trim();
        if content.is_empty() {
            return Err(ChatError::EmptyContent);
        }
        session.begin_request()?;
        session
            .append_user_message(content, tags.clone())
            .expect("content verified non-empty");
        Ok((content.to_string(), tags))
    }

    /// Merge a transport outcome into the owning session, if it still
    /// exists. A reply for a closed session is dropped on the floor — its
    /// pending flag died with it.
    fn apply_reply(
        &mut self,
        id: Uuid,
        outcome: Result<crate::assistant::AssistantReply, TransportError>,
    ) -> Result<Message, ChatError> {
        let Some(session) = self.sessions.get_mut(&id) else {
            tracing::debug!(%id, "discarding reply for closed conversation");
            return Err(ChatError::SessionNotFound(id));
        };
        session.finish_request();
        match outcome {
            Ok(reply) => Ok(session
                .append_assistant_reply(reply.text, reply.processing_time)
                .clone()),
            Err(e) => {
                tracing::warn!(error = %e, "assistant reply failed");
                session.append_error_reply();
                Err(ChatError::Transport(e))
            }
        }
    }
}

// ═══════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════
