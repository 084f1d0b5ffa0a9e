use dioxus::prelude::*;
use trip_core::content::HotelInfo;
use trip_core::Icon;
use trip_ui::{HotelFeatureRow, LucideIcon};

use crate::context::use_session;
use crate::theme::colors::PEARL_BLUE;

/// Hotel card with photo, features and a personal note.
#[component]
pub fn HotelPanel(hotel: &'static HotelInfo) -> Element {
    let session = use_session();
    let photo = session.read().assets().resolve(hotel.photo).to_string();

    rsx! {
        div { class: "panel hotel",
            div { class: "hotel-card",
                div { class: "hotel-photo",
                    img { src: "{photo}", alt: hotel.photo.alt() }
                    div { class: "hotel-badge", "{hotel.badge}" }
                }
                div { class: "hotel-body",
                    h2 { class: "hotel-name", "{hotel.name}" }
                    p { class: "hotel-english", "{hotel.english_name}" }
                    div { class: "hotel-features",
                        for feature in hotel.features.iter() {
                            HotelFeatureRow { feature: *feature }
                        }
                    }
                }
            }

            div { class: "hotel-note",
                div { class: "hotel-note-icon",
                    LucideIcon { icon: Icon::Heart, size: 20, fill: PEARL_BLUE.to_string() }
                }
                div {
                    h4 { "{hotel.note_title}" }
                    p { "{hotel.note}" }
                }
            }
        }
    }
}
