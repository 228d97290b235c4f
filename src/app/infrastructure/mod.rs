//! Infrastructure layer - integrations with the host environment.
//!
//! This module contains code that touches the outside world:
//! - Preference storage (memory and JSON files)
//! - The document root that theme side effects are written to

pub mod document;
pub mod storage;

pub use document::{DocumentRoot, RootElement};
pub use storage::{JsonFileStore, MemoryStore, PreferenceStore};
