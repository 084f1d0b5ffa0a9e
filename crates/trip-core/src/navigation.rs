//! Screen and panel selection.
//!
//! A page load always walks `Intro -> Game -> Browsing(panel)` exactly once;
//! after that only the browsed panel changes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::content::Icon;

/// One of the four content tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Panel {
    #[default]
    Itinerary,
    Food,
    Hotel,
    Notice,
}

impl Panel {
    /// Tabs in display order.
    pub const ALL: [Panel; 4] = [Panel::Itinerary, Panel::Food, Panel::Hotel, Panel::Notice];

    /// Stable identifier used by the tab bar
    pub fn id(&self) -> &'static str {
        match self {
            Panel::Itinerary => "itinerary",
            Panel::Food => "food",
            Panel::Hotel => "hotel",
            Panel::Notice => "notice",
        }
    }

    /// Tab label
    pub fn label(&self) -> &'static str {
        match self {
            Panel::Itinerary => "行程",
            Panel::Food => "美食",
            Panel::Hotel => "住宿",
            Panel::Notice => "注意",
        }
    }

    pub fn icon(&self) -> Icon {
        match self {
            Panel::Itinerary => Icon::Calendar,
            Panel::Food => Icon::Utensils,
            Panel::Hotel => Icon::Home,
            Panel::Notice => Icon::AlertCircle,
        }
    }

    /// Look up a panel by identifier. Unknown identifiers fall back to
    /// [`Panel::Itinerary`].
    pub fn from_id(id: &str) -> Panel {
        Panel::ALL
            .into_iter()
            .find(|p| p.id() == id)
            .unwrap_or_else(|| {
                tracing::debug!(id, "Unknown panel id, falling back to itinerary");
                Panel::Itinerary
            })
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Which overlay or panel is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Opening animation
    #[default]
    Intro,
    /// Guess-the-destination overlay
    Game,
    /// Regular tabbed content
    Browsing(Panel),
}

impl Screen {
    /// Panel currently shown, if any.
    pub fn panel(&self) -> Option<Panel> {
        match self {
            Screen::Browsing(panel) => Some(*panel),
            _ => None,
        }
    }

    /// Intro dismissed. Only valid from [`Screen::Intro`].
    pub fn dismiss_intro(self) -> Screen {
        match self {
            Screen::Intro => Screen::Game,
            other => {
                tracing::debug!(screen = ?other, "Intro already dismissed");
                other
            }
        }
    }

    /// Guess accepted. Only valid from [`Screen::Game`].
    pub fn game_accepted(self) -> Screen {
        match self {
            Screen::Game => Screen::Browsing(Panel::default()),
            other => {
                tracing::debug!(screen = ?other, "Game acceptance outside the game screen");
                other
            }
        }
    }

    /// Select a panel by identifier. Only valid while browsing.
    pub fn select_panel(self, id: &str) -> Screen {
        match self {
            Screen::Browsing(_) => Screen::Browsing(Panel::from_id(id)),
            other => {
                tracing::debug!(screen = ?other, id, "Panel selection before browsing");
                other
            }
        }
    }
}
