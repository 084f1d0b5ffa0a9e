//! Reusable UI components.
//!
//! Panels in the desktop app compose these; none of them own session state.

mod button;
mod cards;
mod diamond_field;
mod icon;
mod input;
mod tab_bar;

pub use button::*;
pub use cards::*;
pub use diamond_field::*;
pub use icon::*;
pub use input::*;
pub use tab_bar::*;
