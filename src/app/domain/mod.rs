//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Theme preferences and the built-in theme registry
//! - Markdown render nodes
//! - Command palette entries

pub mod command;
pub mod markdown;
pub mod theme;

pub use command::Command;
pub use markdown::{Block, Inline};
pub use theme::{BuiltinTheme, CustomTheme, Radius, ThemeState, BUILTIN_THEMES};
