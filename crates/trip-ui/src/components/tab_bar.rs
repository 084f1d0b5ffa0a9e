//! Tab Bar Component
//!
//! Row of panel tabs under the page header. The selected tab gets a light
//! blue background and pearl-blue icon and label.

use dioxus::prelude::*;
use trip_core::Panel;

use super::icon::LucideIcon;

/// Properties for the TabBar component
#[derive(Clone, PartialEq, Props)]
pub struct TabBarProps {
    /// Currently selected panel
    pub selected: Panel,
    /// Called with the panel identifier of the clicked tab
    pub on_select: EventHandler<String>,
}

/// Displays the four panel tabs
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TabBar {
///         selected: Panel::Itinerary,
///         on_select: move |id: String| session.write().select_panel(&id)
///     }
/// }
/// ```
#[component]
pub fn TabBar(props: TabBarProps) -> Element {
    rsx! {
        div {
            class: "tab-bar",
            role: "tablist",
            for panel in Panel::ALL {
                {
                    let is_selected = panel == props.selected;
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            class: tab_class(is_selected),
                            role: "tab",
                            "aria-selected": if is_selected { "true" } else { "false" },
                            onclick: move |_| on_select.call(panel.id().to_string()),
                            span { class: "tab-icon",
                                LucideIcon { icon: panel.icon(), size: 18 }
                            }
                            span { class: "tab-label", "{panel.label()}" }
                        }
                    }
                }
            }
        }
    }
}

fn tab_class(selected: bool) -> &'static str {
    if selected {
        "tab selected"
    } else {
        "tab"
    }
}
