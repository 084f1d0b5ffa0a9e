//! Page components for the birthday trip.

mod browse;
mod game;
mod intro;

pub use browse::Browse;
pub use game::GuessOverlay;
pub use intro::Intro;
