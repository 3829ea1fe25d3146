//! Wire DTOs for the assistant API.
//!
//! DESIGN
//! ======
//! Replies are decoded leniently: every field the server may omit is optional
//! and the `type` discriminator may be missing or unknown. `RawChatReply`
//! mirrors the JSON as sent, and `ChatReply` is the closed set of cases the
//! UI branches on.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Text shown for citation fields the server left out.
pub const MISSING_FIELD: &str = "N/A";

/// Body of `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Body of `POST /api/generate_document`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateDocumentRequest {
    /// Document type returned by the preceding `document_request` reply.
    pub template_key: String,
    /// Placeholder name to user-entered value.
    pub filled_data: BTreeMap<String, String>,
}

/// A named blank in a document template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placeholder {
    /// Form key; unique within one document request.
    pub name: String,
    /// Human-readable label.
    #[serde(default)]
    pub description: String,
}

impl Placeholder {
    /// Label for the form field, falling back to the raw name.
    pub fn label(&self) -> &str {
        if self.description.trim().is_empty() {
            &self.name
        } else {
            &self.description
        }
    }
}

/// A retrieval citation attached to a RAG answer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Source {
    #[serde(default)]
    pub source: Option<String>,
    /// Character offset into the source document; the server sends a number
    /// or the string `"N/A"`.
    #[serde(default, rename = "startIndex")]
    pub start_index: Option<serde_json::Value>,
    #[serde(default)]
    pub snippet: Option<String>,
}

impl Source {
    pub fn source_label(&self) -> String {
        non_empty_or_missing(self.source.as_deref())
    }

    pub fn start_index_label(&self) -> String {
        match &self.start_index {
            Some(serde_json::Value::String(s)) => non_empty_or_missing(Some(s)),
            Some(serde_json::Value::Number(n)) => n.to_string(),
            _ => MISSING_FIELD.to_owned(),
        }
    }

    pub fn snippet_label(&self) -> String {
        non_empty_or_missing(self.snippet.as_deref())
    }
}

fn non_empty_or_missing(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_owned(),
        _ => MISSING_FIELD.to_owned(),
    }
}

/// `POST /api/chat` success body exactly as the server sends it.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct RawChatReply {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub response: Option<String>,
    pub message: Option<String>,
    pub sources: Option<Vec<Source>>,
    pub document_type: Option<String>,
    pub placeholders_to_fill: Option<Vec<Placeholder>>,
}

/// Decoded chat reply the conversation state branches on.
#[derive(Clone, Debug, PartialEq)]
pub enum ChatReply {
    /// The server wants placeholder values for a document template.
    DocumentRequest {
        document_type: String,
        message: String,
        placeholders: Vec<Placeholder>,
    },
    /// Retrieval-augmented answer with citations.
    Rag { response: String, sources: Vec<Source> },
    /// Plain text answer.
    Text { response: String },
    /// Any `type` value the widget does not understand (including none).
    Unexpected { kind: Option<String> },
}

impl From<RawChatReply> for ChatReply {
    fn from(raw: RawChatReply) -> Self {
        match raw.kind.as_deref() {
            Some("document_request") => Self::DocumentRequest {
                document_type: raw.document_type.unwrap_or_default(),
                message: raw.message.unwrap_or_default(),
                placeholders: raw.placeholders_to_fill.unwrap_or_default(),
            },
            Some("rag_response") => Self::Rag {
                response: raw.response.unwrap_or_default(),
                sources: raw.sources.unwrap_or_default(),
            },
            Some("text") => Self::Text {
                response: raw.response.unwrap_or_default(),
            },
            _ => Self::Unexpected { kind: raw.kind },
        }
    }
}

/// `POST /api/generate_document` success body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct GenerateDocumentReply {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub generated_document_preview: String,
}

/// Body of a non-2xx response.
///
/// FastAPI sends a string `detail` for `HTTPException` and an array of
/// validation records for request-schema errors, so both shapes are accepted.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// The `detail` as display text, if present and non-empty.
    pub fn detail_text(&self) -> Option<String> {
        match self.detail.as_ref()? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) if s.trim().is_empty() => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}
