use dioxus::prelude::*;
use trip_core::content::FoodGuide;
use trip_ui::{FoodItemCard, LucideIcon};

/// Must-eat list, grouped by neighbourhood.
#[component]
pub fn FoodPanel(guide: &'static FoodGuide) -> Element {
    rsx! {
        div { class: "panel food",
            div { class: "panel-heading",
                h3 { "{guide.heading}" }
                p { "{guide.subheading}" }
            }
            for category in guide.categories.iter() {
                div { class: "food-category",
                    div { class: "food-category-title",
                        LucideIcon { icon: category.icon, size: 18 }
                        "{category.title}"
                    }
                    div { class: "food-items",
                        for item in category.items.iter() {
                            FoodItemCard { item: *item }
                        }
                    }
                }
            }
        }
    }
}
