//! Birthday Trip Core Library
//!
//! State and content behind the birthday trip micro-site.
//!
//! ## Overview
//!
//! The page opens with an intro animation, then asks the guest to guess the
//! destination, then shows four tabs of trip details. Everything here is
//! plain in-memory logic; rendering lives in `trip-ui` and the desktop app.
//!
//! - [`markers`]: jittered-grid layout for the background diamonds
//! - [`game`]: guess-the-destination state machine
//! - [`navigation`]: intro / game / panel screens
//! - [`session`]: one page load tying the above together
//! - [`content`]: compiled-in itinerary, food, hotel and notice data
//!
//! ## Quick Start
//!
//! ```
//! use trip_core::{GameEvent, Panel, Screen, SiteConfig, TripSession};
//!
//! let mut session = TripSession::new(&SiteConfig::default()).unwrap();
//! session.dismiss_intro();
//! session.game_event(GameEvent::SubmitGuess("高雄".to_string()));
//! assert_eq!(session.screen(), Screen::Browsing(Panel::Itinerary));
//! ```

pub mod assets;
pub mod config;
pub mod content;
pub mod error;
pub mod game;
pub mod markers;
pub mod navigation;
pub mod session;

// Re-exports
pub use assets::{AssetId, AssetLoader, AssetRef};
pub use config::SiteConfig;
pub use content::{content_for, Icon, PanelContent, CHROME};
pub use error::{TripError, TripResult};
pub use game::{GameEvent, GameOutcome, GamePhase, GuessGame, Hint, HintLevel};
pub use markers::DecorativeMarker;
pub use navigation::{Panel, Screen};
pub use session::TripSession;
