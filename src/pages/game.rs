//! Guess overlay - "where are we going?"
//!
//! Shows the portrait, the clues revealed so far and the answer field. The
//! overlay disappears once the session accepts a guess.

use dioxus::prelude::*;
use trip_core::{AssetId, GameEvent, GameOutcome, CHROME};
use trip_ui::{Button, ButtonVariant, GuessInput};

use crate::context::use_session;

/// A clue ready for display.
#[derive(Clone, PartialEq)]
struct ShownHint {
    level: u8,
    text: &'static str,
    image: Option<(String, &'static str)>,
}

#[component]
pub fn GuessOverlay() -> Element {
    let mut session = use_session();

    let state = session.read();
    let Some(game) = state.game() else {
        return rsx! {};
    };
    let guess = game.current_guess().to_string();
    let error = game.last_error().map(str::to_owned);
    let hints_exhausted = game.hint_level().is_max();
    let hints: Vec<ShownHint> = game
        .revealed_hints()
        .iter()
        .map(|hint| ShownHint {
            level: hint.level,
            text: hint.text,
            image: hint
                .image
                .map(|id| (state.assets().resolve(id).to_string(), id.alt())),
        })
        .collect();
    let portrait = state.assets().resolve(AssetId::Portrait).to_string();
    drop(state);

    let submit = move |_: ()| {
        if session.write().submit_guess() == GameOutcome::WrongGuess {
            tracing::debug!("Guess rejected, waiting for another try");
        }
    };

    rsx! {
        div { class: "game-overlay",
            div { class: "game-card",
                img { class: "game-portrait", src: "{portrait}", alt: AssetId::Portrait.alt() }
                h2 { class: "game-title", "{CHROME.game_title}" }

                ol { class: "hint-list",
                    for hint in hints {
                        li { class: "hint",
                            span { class: "hint-level", "{hint.level}" }
                            p { class: "hint-text", "{hint.text}" }
                            if let Some((src, alt)) = hint.image {
                                img { class: "hint-image", src: "{src}", alt: "{alt}" }
                            }
                        }
                    }
                }

                GuessInput {
                    value: guess,
                    placeholder: CHROME.game_prompt.to_string(),
                    error: error,
                    oninput: move |text: String| {
                        session.write().game_event(GameEvent::TextChanged(text));
                    },
                    onsubmit: submit,
                }

                div { class: "game-actions",
                    Button {
                        variant: ButtonVariant::Hint,
                        disabled: hints_exhausted,
                        onclick: move |_| {
                            session.write().game_event(GameEvent::RequestHint);
                        },
                        "再給我一個提示"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: submit,
                        "就是這裡！"
                    }
                }
            }
        }
    }
}
