//! Session configuration loader and schema types.
//!
//! This module exposes the session schema (track descriptors, playlist
//! indices, cache and mixer settings) and helpers to load it from disk.

mod load;
mod schema;

pub use load::{default_session_path, resolve_session_path};
pub use schema::*;

#[cfg(test)]
mod tests;
