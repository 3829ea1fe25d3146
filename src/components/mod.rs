//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the chat widget and read/write shared state from Leptos
//! context providers set up in `app::App`.

pub mod chat_input;
pub mod chat_status;
pub mod document_fill_modal;
pub mod message_list;
