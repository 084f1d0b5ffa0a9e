use dioxus::prelude::*;
use trip_core::content::ItineraryDay;
use trip_ui::TimelineItem;

/// Two-day timeline.
#[component]
pub fn ItineraryPanel(days: &'static [ItineraryDay]) -> Element {
    rsx! {
        div { class: "panel itinerary",
            for day in days.iter() {
                section { class: "day",
                    div { class: "day-line" }
                    div { class: "day-header",
                        div { class: "day-badge", "{day.number}" }
                        h3 { class: "day-heading", "{day.heading}" }
                    }
                    for entry in day.entries.iter() {
                        TimelineItem { entry: *entry }
                    }
                }
            }
        }
    }
}
