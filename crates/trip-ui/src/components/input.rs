//! Guess Input Component
//!
//! Single-line text field for the guessing game. Enter submits once any
//! IME composition has been committed.

use dioxus::prelude::*;

use super::button::class_list;

/// Properties for the GuessInput component
#[derive(Clone, PartialEq, Props)]
pub struct GuessInputProps {
    /// Current input value
    pub value: String,
    /// Called on every edit
    pub oninput: EventHandler<String>,
    /// Called when Enter is pressed
    pub onsubmit: EventHandler<()>,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Error line shown under the field
    #[props(!optional)]
    pub error: Option<String>,
    #[props(default = "guess-input".to_string())]
    pub id: String,
}

/// Enter submits, except while an IME composition is still open.
fn submits_on(key: &Key, composing: bool) -> bool {
    *key == Key::Enter && !composing
}

/// Text field with an error line
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     GuessInput {
///         value: game.current_guess().to_string(),
///         oninput: move |s| session.write().game_event(GameEvent::TextChanged(s)),
///         onsubmit: move |_| session.write().submit_guess(),
///         error: game.last_error().map(str::to_owned),
///     }
/// }
/// ```
#[component]
pub fn GuessInput(props: GuessInputProps) -> Element {
    let has_error = props.error.is_some();
    let input_class = class_list("guess-input", has_error.then_some("has-error"));

    rsx! {
        div { class: "guess-field",
            input {
                id: "{props.id}",
                class: "{input_class}",
                r#type: "text",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                autofocus: true,
                oninput: move |e| props.oninput.call(e.value()),
                onkeydown: move |e: KeyboardEvent| {
                    if submits_on(&e.key(), e.is_composing()) {
                        props.onsubmit.call(());
                    }
                },
            }
            if let Some(error) = &props.error {
                p { class: "guess-error", role: "alert", "{error}" }
            }
        }
    }
}
