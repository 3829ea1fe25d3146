//! Conversation history and the chat send state machine.
//!
//! DESIGN
//! ======
//! The transcript is append-only: messages are never edited or removed, and
//! display order is insertion order. A send is split into `begin_send`
//! (guard + optimistic user message) and `complete_send` (apply the reply),
//! with the network call happening between the two. `loading` is the
//! single-flight flag and is cleared on every completion path.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::api::ApiError;
use crate::net::types::{ChatReply, GenerateDocumentReply, Placeholder, Source};
use crate::state::document::DocumentPrompt;

/// Assistant text shown when the server replies with an unknown `type`.
pub const UNEXPECTED_REPLY_TEXT: &str = "Received an unexpected response from the server.";

const SERVER_HINT: &str = "Please ensure the Aleks AI API server is running.";

/// Who authored a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

/// How a message is rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MessageKind {
    #[default]
    Text,
    /// Assistant asked for template values; opens the fill-in form.
    DocumentRequest,
    /// Assistant returned a filled document preview.
    DocumentGenerated,
}

/// Structured data attached to assistant messages.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MessageExtra {
    pub sources: Option<Vec<Source>>,
    pub document_type: Option<String>,
    pub placeholders_to_fill: Option<Vec<Placeholder>>,
    pub generated_document_preview: Option<String>,
}

/// A single conversation entry. Immutable once appended.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    /// Stable render key for keyed list rendering.
    pub id: String,
    pub sender: Sender,
    pub text: String,
    pub kind: MessageKind,
    pub extra: Option<MessageExtra>,
}

impl Message {
    fn new(sender: Sender, text: impl Into<String>, kind: MessageKind, extra: Option<MessageExtra>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            sender,
            text: text.into(),
            kind,
            extra,
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Sender::User, text, MessageKind::Text, None)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Sender::Assistant, text, MessageKind::Text, None)
    }

    /// Citations to render under a text message; empty when there are none.
    pub fn sources(&self) -> &[Source] {
        if self.kind != MessageKind::Text {
            return &[];
        }
        self.extra
            .as_ref()
            .and_then(|e| e.sources.as_deref())
            .unwrap_or_default()
    }

    /// Generated document text for `DocumentGenerated` messages.
    pub fn document_preview(&self) -> Option<&str> {
        if self.kind != MessageKind::DocumentGenerated {
            return None;
        }
        self.extra
            .as_ref()
            .and_then(|e| e.generated_document_preview.as_deref())
            .filter(|p| !p.is_empty())
    }
}

/// Conversation transcript plus the chat request status.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    messages: Vec<Message>,
    /// A chat request is in flight.
    pub loading: bool,
    /// Last chat failure, shown in the error banner until the next send.
    pub error: Option<String>,
}

impl ChatState {
    /// A conversation seeded with the assistant's greeting.
    pub fn new(greeting: &str) -> Self {
        let mut state = Self::default();
        if !greeting.is_empty() {
            state.push(Message::assistant(greeting));
        }
        state
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Append one message to the end of the transcript.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Whether a send would be accepted right now.
    pub fn can_send(&self, input: &str, modal_open: bool) -> bool {
        !input.trim().is_empty() && !self.loading && !modal_open
    }

    /// Start a send: append the user's message and mark the request in flight.
    ///
    /// Returns the trimmed question to post, or `None` when the send is
    /// rejected (blank input, request already in flight, or the document form
    /// is open). A rejected send leaves the state untouched.
    pub fn begin_send(&mut self, input: &str, modal_open: bool) -> Option<String> {
        if !self.can_send(input, modal_open) {
            return None;
        }
        let question = input.trim().to_owned();
        self.push(Message::user(question.clone()));
        self.loading = true;
        self.error = None;
        Some(question)
    }

    /// Apply the outcome of a chat request and return to idle.
    ///
    /// Returns the document prompt to open when the server asks for template
    /// values.
    pub fn complete_send(&mut self, result: Result<ChatReply, ApiError>) -> Option<DocumentPrompt> {
        self.loading = false;
        match result {
            Ok(reply) => self.apply_reply(reply),
            Err(err) => {
                let text = format!("{err}. {SERVER_HINT}");
                log::warn!("chat failed: {text}");
                self.push(Message::assistant(format!("Error: {text}")));
                self.error = Some(text);
                None
            }
        }
    }

    fn apply_reply(&mut self, reply: ChatReply) -> Option<DocumentPrompt> {
        match reply {
            ChatReply::DocumentRequest {
                document_type,
                message,
                placeholders,
            } => {
                let extra = MessageExtra {
                    document_type: Some(document_type.clone()),
                    placeholders_to_fill: Some(placeholders.clone()),
                    ..MessageExtra::default()
                };
                self.push(Message::new(Sender::Assistant, message, MessageKind::DocumentRequest, Some(extra)));
                Some(DocumentPrompt {
                    document_type,
                    placeholders,
                })
            }
            ChatReply::Rag { response, sources } => {
                let extra = MessageExtra {
                    sources: Some(sources),
                    ..MessageExtra::default()
                };
                self.push(Message::new(Sender::Assistant, response, MessageKind::Text, Some(extra)));
                None
            }
            ChatReply::Text { response } => {
                self.push(Message::assistant(response));
                None
            }
            ChatReply::Unexpected { kind } => {
                log::warn!("unexpected chat reply type: {kind:?}");
                self.push(Message::assistant(UNEXPECTED_REPLY_TEXT));
                None
            }
        }
    }

    /// Append the assistant message announcing a generated document.
    pub fn append_generated(&mut self, reply: GenerateDocumentReply) {
        let extra = MessageExtra {
            generated_document_preview: Some(reply.generated_document_preview),
            ..MessageExtra::default()
        };
        self.push(Message::new(
            Sender::Assistant,
            reply.message,
            MessageKind::DocumentGenerated,
            Some(extra),
        ));
    }
}
