//! Color constants for the pearl-blue birthday palette.
//!
//! Mirrors the CSS custom properties in `styles.rs` for code that builds
//! inline styles.

/// Lucky colour: titles, active state
pub const PEARL_BLUE: &str = "#005CA8";
