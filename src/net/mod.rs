//! Networking modules for the assistant HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the two POST requests the widget makes, and `types` defines
//! the JSON schema exchanged with the server.

pub mod api;
pub mod types;
