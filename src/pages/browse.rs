//! Browse page - header, tab bar and the selected panel.

use dioxus::prelude::*;
use trip_core::{content_for, Icon, Panel, PanelContent, CHROME};
use trip_ui::LucideIcon;

use crate::components::{FoodPanel, HotelPanel, ItineraryPanel, NavHeader, NoticePanel};

#[component]
pub fn Browse(panel: Panel) -> Element {
    rsx! {
        NavHeader { current: panel }

        main { class: "content",
            {match content_for(panel) {
                PanelContent::Itinerary(days) => rsx! { ItineraryPanel { days } },
                PanelContent::Food(guide) => rsx! { FoodPanel { guide } },
                PanelContent::Hotel(hotel) => rsx! { HotelPanel { hotel } },
                PanelContent::Notice(board) => rsx! { NoticePanel { board } },
            }}
        }

        footer { class: "footer",
            "{CHROME.footer_prefix} "
            LucideIcon { icon: Icon::Heart, size: 10, fill: "currentColor".to_string(), class: "footer-heart".to_string() }
            " {CHROME.footer_suffix}"
        }
    }
}
