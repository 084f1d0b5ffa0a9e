use dioxus::prelude::*;
use trip_core::{AssetId, Screen, TripSession};
use trip_ui::DiamondField;

use crate::pages::{Browse, GuessOverlay, Intro};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the session signal, and picks the screen.
#[component]
pub fn App() -> Element {
    let session: Signal<TripSession> = use_signal(consume_context::<TripSession>);
    use_context_provider(|| session);

    let state = session.read();
    let screen = state.screen();
    let markers = state.markers().to_vec();
    let diamond = state.assets().resolve(AssetId::DiamondMarker).to_string();
    drop(state);

    rsx! {
        style { {GLOBAL_STYLES} }
        div { class: "page",
            DiamondField { markers, src: diamond }
            {match screen {
                Screen::Intro => rsx! { Intro {} },
                Screen::Game => rsx! { GuessOverlay {} },
                Screen::Browsing(panel) => rsx! { Browse { panel } },
            }}
        }
    }
}
