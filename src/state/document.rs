//! Document-fill form state.
//!
//! DESIGN
//! ======
//! An episode starts when the server answers a chat message with a
//! `document_request` and ends on a successful generation or a cancel. The
//! form is visible iff an episode is open. Each episode gets a fresh id so a
//! generation reply that lands after its episode was cancelled is dropped
//! instead of closing a newer form.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use std::collections::{BTreeMap, HashSet};

use crate::net::api::ApiError;
use crate::net::types::{GenerateDocumentReply, GenerateDocumentRequest, Placeholder};

/// What the server asked for; becomes a new episode on `open`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentPrompt {
    pub document_type: String,
    pub placeholders: Vec<Placeholder>,
}

/// One open document-fill form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentEpisode {
    pub id: u64,
    /// Template key sent back as `template_key`.
    pub document_type: String,
    /// Fields in display order, unique by name.
    pub placeholders: Vec<Placeholder>,
    values: BTreeMap<String, String>,
}

impl DocumentEpisode {
    /// Current value of a field; empty for unknown names.
    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map_or("", String::as_str)
    }

    /// Flat name -> value mapping for the generate request.
    pub fn form_data(&self) -> BTreeMap<String, String> {
        self.values.clone()
    }
}

/// Modal visibility, form values and generation status.
#[derive(Clone, Debug, Default)]
pub struct DocumentFillState {
    episode: Option<DocumentEpisode>,
    /// A generation request is in flight.
    pub generating: bool,
    /// Validation or generation failure shown inside the modal.
    pub error: Option<String>,
    next_episode_id: u64,
}

impl DocumentFillState {
    pub fn is_open(&self) -> bool {
        self.episode.is_some()
    }

    pub fn episode(&self) -> Option<&DocumentEpisode> {
        self.episode.as_ref()
    }

    /// Start a fresh episode, discarding any previous form state.
    ///
    /// Placeholders with a name already seen are dropped.
    pub fn open(&mut self, prompt: DocumentPrompt) {
        let mut seen = HashSet::new();
        let placeholders: Vec<Placeholder> = prompt
            .placeholders
            .into_iter()
            .filter(|p| seen.insert(p.name.clone()))
            .collect();
        let values = placeholders
            .iter()
            .map(|p| (p.name.clone(), String::new()))
            .collect();

        self.next_episode_id += 1;
        log::debug!(
            "document episode {} opened: {} ({} fields)",
            self.next_episode_id,
            prompt.document_type,
            placeholders.len()
        );
        self.episode = Some(DocumentEpisode {
            id: self.next_episode_id,
            document_type: prompt.document_type,
            placeholders,
            values,
        });
        self.generating = false;
        self.error = None;
    }

    /// Record a typed value. Names outside the open episode are ignored.
    pub fn set_value(&mut self, name: &str, value: String) {
        if let Some(slot) = self.episode.as_mut().and_then(|e| e.values.get_mut(name)) {
            *slot = value;
        }
    }

    /// Labels of required fields that are still blank.
    pub fn missing_fields(&self) -> Vec<String> {
        let Some(episode) = &self.episode else {
            return Vec::new();
        };
        episode
            .placeholders
            .iter()
            .filter(|p| episode.value(&p.name).trim().is_empty())
            .map(|p| p.label().to_owned())
            .collect()
    }

    /// Start generation for the open episode.
    ///
    /// Returns `None` without sending when no form is open, a request is
    /// already in flight, or a required field is blank (which sets a
    /// validation error).
    pub fn begin_generate(&mut self) -> Option<(u64, GenerateDocumentRequest)> {
        if self.generating {
            return None;
        }
        let missing = self.missing_fields();
        let episode = self.episode.as_ref()?;
        if !missing.is_empty() {
            self.error = Some(format!("Please fill in all required fields: {}", missing.join(", ")));
            return None;
        }
        let request = GenerateDocumentRequest {
            template_key: episode.document_type.clone(),
            filled_data: episode.form_data(),
        };
        let id = episode.id;
        self.generating = true;
        self.error = None;
        Some((id, request))
    }

    /// Apply a generation result for episode `episode_id`.
    ///
    /// On success the form closes and the reply is returned for the
    /// transcript. On failure the form stays open with the error shown.
    /// Results for an episode that is no longer open are discarded.
    pub fn complete_generate(
        &mut self,
        episode_id: u64,
        result: Result<GenerateDocumentReply, ApiError>,
    ) -> Option<GenerateDocumentReply> {
        if self.episode.as_ref().map(|e| e.id) != Some(episode_id) {
            log::debug!("dropping generation result for closed episode {episode_id}");
            return None;
        }
        self.generating = false;
        match result {
            Ok(reply) => {
                self.episode = None;
                self.error = None;
                Some(reply)
            }
            Err(err) => {
                log::warn!("document generation failed: {err}");
                self.error = Some(format!("Document Generation Error: {err}"));
                None
            }
        }
    }

    /// Close the form and drop all pending values. Safe to call repeatedly.
    pub fn cancel(&mut self) {
        self.episode = None;
        self.generating = false;
        self.error = None;
    }
}
