//! Session context for the birthday trip page.
//!
//! The session built in `main` is handed to the root component, which wraps
//! it in a signal and provides it to every page.
//!
//! ## Usage
//!
//! ```ignore
//! let mut session = use_session();
//! session.write().dismiss_intro();
//! ```

use dioxus::prelude::*;
use trip_core::TripSession;

/// Hook to access the page session.
pub fn use_session() -> Signal<TripSession> {
    use_context::<Signal<TripSession>>()
}
