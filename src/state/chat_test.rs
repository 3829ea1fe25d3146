use super::*;

// =============================================================
// Helpers
// =============================================================

fn text_reply(response: &str) -> Result<ChatReply, ApiError> {
    Ok(ChatReply::Text { response: response.to_owned() })
}

fn affidavit_reply() -> Result<ChatReply, ApiError> {
    Ok(ChatReply::DocumentRequest {
        document_type: "Affidavit".to_owned(),
        message: "Okay, let's fill out your 'Affidavit' template.".to_owned(),
        placeholders: vec![Placeholder { name: "full_name".to_owned(), description: "Full Name".to_owned() }],
    })
}

// =============================================================
// Construction
// =============================================================

#[test]
fn chat_state_default_is_idle_and_empty() {
    let state = ChatState::default();
    assert!(state.is_empty());
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn chat_state_new_seeds_greeting() {
    let state = ChatState::new("Hi there!");
    assert_eq!(state.len(), 1);
    assert_eq!(state.messages()[0].sender, Sender::Assistant);
    assert_eq!(state.messages()[0].text, "Hi there!");
}

#[test]
fn chat_state_new_with_blank_greeting_is_empty() {
    assert!(ChatState::new("").is_empty());
}

#[test]
fn messages_have_unique_ids() {
    let a = Message::user("a");
    let b = Message::user("a");
    assert_ne!(a.id, b.id);
}

// =============================================================
// begin_send guard
// =============================================================

#[test]
fn begin_send_appends_trimmed_user_message() {
    let mut state = ChatState::default();
    let question = state.begin_send("  What is an affidavit?\n", false);
    assert_eq!(question.as_deref(), Some("What is an affidavit?"));
    assert_eq!(state.len(), 1);
    assert_eq!(state.messages()[0].sender, Sender::User);
    assert_eq!(state.messages()[0].text, "What is an affidavit?");
    assert!(state.loading);
}

#[test]
fn begin_send_rejects_blank_input() {
    let mut state = ChatState::default();
    assert_eq!(state.begin_send("", false), None);
    assert_eq!(state.begin_send("   \n\t", false), None);
    assert!(state.is_empty());
    assert!(!state.loading);
}

#[test]
fn begin_send_rejects_while_in_flight() {
    let mut state = ChatState::default();
    assert!(state.begin_send("first", false).is_some());
    assert_eq!(state.begin_send("second", false), None);
    assert_eq!(state.len(), 1);
}

#[test]
fn begin_send_rejects_while_modal_open() {
    let mut state = ChatState::default();
    assert_eq!(state.begin_send("hello", true), None);
    assert!(state.is_empty());
    assert!(!state.loading);
}

#[test]
fn begin_send_clears_previous_error() {
    let mut state = ChatState::default();
    state.begin_send("hi", false);
    state.complete_send(Err(ApiError::Network("Failed to fetch".to_owned())));
    assert!(state.error.is_some());
    state.begin_send("again", false);
    assert!(state.error.is_none());
}

// =============================================================
// complete_send branches
// =============================================================

#[test]
fn successful_exchanges_add_two_messages_each() {
    let mut state = ChatState::new("Hi");
    let before = state.len();
    for i in 0..5 {
        state.begin_send(&format!("question {i}"), false).unwrap();
        state.complete_send(text_reply("answer"));
    }
    assert_eq!(state.len(), before + 10);
    assert!(!state.loading);
}

#[test]
fn text_reply_appends_plain_assistant_message() {
    let mut state = ChatState::default();
    state.begin_send("hi", false);
    let prompt = state.complete_send(text_reply("Hello!"));
    assert!(prompt.is_none());
    let last = state.messages().last().unwrap();
    assert_eq!(last.sender, Sender::Assistant);
    assert_eq!(last.kind, MessageKind::Text);
    assert_eq!(last.text, "Hello!");
    assert!(last.sources().is_empty());
}

#[test]
fn rag_reply_carries_sources() {
    let mut state = ChatState::default();
    state.begin_send("annulment?", false);
    let source = Source {
        source: Some("family_code.pdf".to_owned()),
        start_index: Some(serde_json::json!(42)),
        snippet: Some("Art. 45...".to_owned()),
    };
    state.complete_send(Ok(ChatReply::Rag { response: "Under Art. 45...".to_owned(), sources: vec![source.clone()] }));
    let last = state.messages().last().unwrap();
    assert_eq!(last.kind, MessageKind::Text);
    assert_eq!(last.sources(), &[source]);
}

#[test]
fn document_request_reply_returns_prompt() {
    let mut state = ChatState::default();
    state.begin_send("I need an affidavit", false);
    let prompt = state.complete_send(affidavit_reply()).unwrap();
    assert_eq!(prompt.document_type, "Affidavit");
    assert_eq!(prompt.placeholders.len(), 1);

    let last = state.messages().last().unwrap();
    assert_eq!(last.kind, MessageKind::DocumentRequest);
    let extra = last.extra.as_ref().unwrap();
    assert_eq!(extra.document_type.as_deref(), Some("Affidavit"));
    assert_eq!(extra.placeholders_to_fill.as_ref().map(Vec::len), Some(1));
    assert!(!state.loading);
}

#[test]
fn unexpected_reply_appends_fallback() {
    let mut state = ChatState::default();
    state.begin_send("hi", false);
    state.complete_send(Ok(ChatReply::Unexpected { kind: Some("audio".to_owned()) }));
    assert_eq!(state.messages().last().unwrap().text, UNEXPECTED_REPLY_TEXT);
    assert!(state.error.is_none());
}

#[test]
fn failure_appends_error_message_and_sets_error() {
    let mut state = ChatState::default();
    state.begin_send("hi", false);
    let prompt = state.complete_send(Err(ApiError::Server { status: 500, detail: "Error processing RAG query".to_owned() }));
    assert!(prompt.is_none());
    assert!(!state.loading);
    assert_eq!(state.len(), 2);

    let last = state.messages().last().unwrap();
    assert_eq!(last.sender, Sender::Assistant);
    assert!(last.text.starts_with("Error: Error processing RAG query."));
    assert!(state.error.as_deref().unwrap().starts_with("Error processing RAG query."));
}

#[test]
fn network_failure_returns_to_idle() {
    let mut state = ChatState::default();
    state.begin_send("hi", false);
    state.complete_send(Err(ApiError::Network("Failed to fetch".to_owned())));
    assert!(!state.loading);
    assert!(state.can_send("next", false));
}

// =============================================================
// append_generated
// =============================================================

#[test]
fn append_generated_adds_document_generated_message() {
    let mut state = ChatState::default();
    state.append_generated(GenerateDocumentReply {
        status: Some("success".to_owned()),
        message: "Done".to_owned(),
        generated_document_preview: "AFFIDAVIT OF LOSS".to_owned(),
    });
    assert_eq!(state.len(), 1);
    let msg = &state.messages()[0];
    assert_eq!(msg.kind, MessageKind::DocumentGenerated);
    assert_eq!(msg.text, "Done");
    assert_eq!(msg.document_preview(), Some("AFFIDAVIT OF LOSS"));
}

#[test]
fn document_preview_absent_for_text_messages() {
    assert_eq!(Message::assistant("hi").document_preview(), None);
}
