//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (ThemeState, markdown nodes, commands)
//! - `services/` - Pure operations (markdown, sanitizer, fuzzy scoring, charts)
//! - `controllers/` - Widget state (theme, palette, preview, select, slider)
//! - `infrastructure/` - Host integrations (preference storage, document root)
//! - `error.rs` - Error type shared by every layer

pub mod controllers;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod services;

// Re-exports for convenient external access
pub use controllers::palette::CommandPalette;
pub use controllers::preview::{MessagePreview, RenderMode};
pub use controllers::select::{Select, SelectOption};
pub use controllers::slider::Slider;
pub use controllers::theme::ThemeController;
pub use domain::{Block, Command, CustomTheme, Inline, Radius, ThemeState};
pub use error::{KitError, Result};
pub use infrastructure::{DocumentRoot, JsonFileStore, MemoryStore, PreferenceStore, RootElement};
