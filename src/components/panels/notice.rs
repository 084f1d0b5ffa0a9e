use dioxus::prelude::*;
use trip_core::content::NoticeBoard;
use trip_core::Icon;
use trip_ui::{Button, ButtonVariant, LucideIcon, NoticeRow};

/// Packing notes, dress code and the countdown pill.
#[component]
pub fn NoticePanel(board: &'static NoticeBoard) -> Element {
    let dress = board.dress_code;

    rsx! {
        div { class: "panel notice",
            div { class: "notice-card",
                LucideIcon { icon: Icon::Sparkles, size: 80, class: "notice-watermark".to_string() }
                h3 { class: "notice-heading",
                    LucideIcon { icon: Icon::AlertCircle, size: 22 }
                    "{board.heading}"
                }
                div { class: "notice-items",
                    for item in board.items.iter() {
                        NoticeRow { item: *item }
                    }
                }
            }

            div { class: "dress-code",
                h3 { class: "dress-code-title",
                    div { class: "dress-code-diamond" }
                    "{dress.title}"
                }
                div { class: "dress-code-body",
                    div { class: "dress-code-text",
                        p { class: "dress-code-lead",
                            "{dress.lead}"
                            span { class: "dress-code-color", "{dress.color_name}" }
                            "。"
                        }
                        p { class: "dress-code-advice",
                            "{dress.advice}"
                            span { class: "dress-code-aside", "{dress.aside}" }
                        }
                    }
                    div { class: "dress-code-swatch",
                        div { class: "dress-code-swatch-inner" }
                    }
                }
            }

            div { class: "countdown",
                Button { variant: ButtonVariant::Muted, "{board.countdown}" }
            }
        }
    }
}
