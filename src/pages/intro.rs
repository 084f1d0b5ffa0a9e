//! Intro overlay - the opening diamond animation.
//!
//! Stays up until the guest presses the button; the mount timer only logs.

use std::time::Duration;

use dioxus::prelude::*;
use trip_core::{Icon, CHROME};
use trip_ui::{Button, ButtonVariant, LucideIcon};

use crate::context::use_session;

/// Time the opening animation takes to settle.
const INTRO_SETTLE: Duration = Duration::from_secs(3);

#[component]
pub fn Intro() -> Element {
    let mut session = use_session();

    // Inert: the guest opens the journey by hand.
    use_effect(move || {
        spawn(async move {
            tokio::time::sleep(INTRO_SETTLE).await;
            tracing::debug!("Intro animation settled");
        });
    });

    rsx! {
        div { class: "intro-overlay",
            div { class: "intro-diamond",
                div { class: "intro-diamond-outer",
                    div { class: "intro-diamond-inner",
                        LucideIcon { icon: Icon::Sparkles, size: 40, class: "intro-sparkle".to_string() }
                    }
                }
                div { class: "intro-ping" }
            }

            h1 { class: "intro-greeting", "{CHROME.greeting}" }
            h2 { class: "intro-guest", "{CHROME.guest_name}" }

            Button {
                variant: ButtonVariant::Primary,
                class: "btn-large".to_string(),
                onclick: move |_| session.write().dismiss_intro(),
                LucideIcon { icon: Icon::Sparkles, size: 20 }
                "{CHROME.enter_label}"
            }

            p { class: "intro-tagline", "{CHROME.intro_tagline}" }
        }
    }
}
