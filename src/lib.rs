//! Headless interaction logic for a visual component toolkit.
//!
//! The rendering layer owns the DOM. This crate owns what the widgets
//! compute: chat markdown rendering and sanitizing, command palette ranking,
//! theme preferences, and the small value models behind charts, sliders
//! and selects.

pub mod app;

pub use app::services::fuzzy::fuzzy_score;
pub use app::services::markdown::{render_markdown, sanitize_html};
pub use app::*;
