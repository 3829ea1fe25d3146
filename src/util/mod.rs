//! Browser and rendering helpers shared by components.

pub mod markdown;
pub mod mount;
