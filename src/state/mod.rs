//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`chat`, `document`) so each component depends
//! on a small focused model. Every transition is a plain method on a plain
//! struct; components wrap the structs in `RwSignal`s and re-render from them.

pub mod chat;
pub mod document;
