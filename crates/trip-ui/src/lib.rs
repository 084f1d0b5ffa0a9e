//! Birthday Trip UI Components
//!
//! Dioxus components for the birthday trip page, in the pearl-blue diamond
//! style of the original invitation.
//!
//! ## Palette
//!
//! - **Pearl blue (#005CA8)**: titles, active tabs, the lucky colour
//! - **Light blue (#E6F0FA)**: day badges, notes
//! - **Slate (#F8FAFC)**: page background

pub mod components;

pub use components::*;
