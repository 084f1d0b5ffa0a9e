//! Navigation Header Component
//!
//! Sticky header: diamond + site title on the left, trip dates on the
//! right, tab bar underneath.

use dioxus::prelude::*;
use trip_core::{Panel, CHROME};
use trip_ui::TabBar;

use crate::context::use_session;

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Panel currently shown
    pub current: Panel,
}

#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    let mut session = use_session();

    rsx! {
        nav { class: "nav-header",
            div { class: "nav-top",
                div { class: "nav-title",
                    div { class: "nav-diamond" }
                    "{CHROME.title}"
                }
                div { class: "nav-dates", "{CHROME.date_range}" }
            }
            TabBar {
                selected: props.current,
                on_select: move |id: String| {
                    tracing::debug!(%id, "Tab selected");
                    session.write().select_panel(&id);
                },
            }
        }
    }
}
