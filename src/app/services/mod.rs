//! Services layer - pure operations with no widget state.
//!
//! This module contains:
//! - Markdown parsing, rendering and sanitizing
//! - Fuzzy scoring for the command palette
//! - Chart percentage helpers

pub mod chart;
pub mod fuzzy;
pub mod markdown;
