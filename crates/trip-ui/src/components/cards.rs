//! Content Cards
//!
//! One small component per content record shape: timeline stop, food spot,
//! hotel feature and numbered notice.

use dioxus::prelude::*;
use trip_core::content::{FoodItem, HotelFeature, NoticeItem, TimelineEntry};

use super::icon::LucideIcon;

/// A single stop on the day timeline
///
/// # Design Notes
///
/// - Rotated square bullet sits on the vertical timeline line
/// - Highlighted stops get a filled bullet and light-blue card
#[component]
pub fn TimelineItem(entry: TimelineEntry) -> Element {
    let (bullet_class, card_class, title_class) = if entry.highlight {
        ("timeline-bullet highlight", "timeline-card highlight", "timeline-title highlight")
    } else {
        ("timeline-bullet", "timeline-card", "timeline-title")
    };

    rsx! {
        div { class: "timeline-item",
            div { class: "{bullet_class}" }
            div { class: "{card_class}",
                div { class: "timeline-meta",
                    span { class: "timeline-time", "{entry.time}" }
                    span { class: "timeline-icon",
                        LucideIcon { icon: entry.icon }
                    }
                }
                h4 { class: "{title_class}", "{entry.title}" }
                p { class: "timeline-content", "{entry.content}" }
            }
        }
    }
}

/// A restaurant or snack stall
#[component]
pub fn FoodItemCard(item: FoodItem) -> Element {
    rsx! {
        div { class: "food-item",
            div { class: "food-item-head",
                span { class: "food-name", "{item.name}" }
                span { class: "food-tag", "{item.tag}" }
            }
            p { class: "food-desc", "{item.desc}" }
        }
    }
}

#[component]
pub fn HotelFeatureRow(feature: HotelFeature) -> Element {
    rsx! {
        div { class: "hotel-feature",
            div { class: "hotel-feature-icon",
                LucideIcon { icon: feature.icon, size: 18 }
            }
            div {
                h4 { class: "hotel-feature-title", "{feature.title}" }
                p { class: "hotel-feature-desc", "{feature.desc}" }
            }
        }
    }
}

/// Numbered notice on the blue "read before leaving" card
#[component]
pub fn NoticeRow(item: NoticeItem) -> Element {
    rsx! {
        div { class: "notice-item",
            div { class: "notice-num", "{item.num}" }
            div {
                h4 { class: "notice-title", "{item.title}" }
                p { class: "notice-desc", "{item.desc}" }
            }
        }
    }
}
