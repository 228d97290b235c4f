//! Controllers layer - widget state and orchestration.
//!
//! This module contains the stateful pieces that sit between the domain
//! models, services, and the rendering layer:
//! - Theme preferences and document side effects
//! - Command palette
//! - Chat message preview
//! - Select and slider interaction state

pub mod palette;
pub mod preview;
pub mod select;
pub mod slider;
pub mod theme;
