//! User Interface layer
//!
//! This module contains all UI-related code:
//! - Theme definitions and colors
//! - Wheel projection geometry
//! - Reusable widgets
//! - Main render function

pub mod render;
pub mod theme;
pub mod wheel;
pub mod widgets;

pub use render::render;
pub use theme::Theme;
