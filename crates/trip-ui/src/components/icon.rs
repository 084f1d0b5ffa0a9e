//! Lucide icons as inline SVG.

use dioxus::prelude::*;
use trip_core::Icon;

#[derive(Clone, PartialEq, Props)]
pub struct LucideIconProps {
    pub icon: Icon,
    #[props(default = 16)]
    pub size: u32,
    /// Fill colour; icons are outline-only by default
    #[props(default = "none".to_string())]
    pub fill: String,
    #[props(default)]
    pub class: Option<String>,
}

/// Renders one Lucide icon, stroked with `currentColor`.
#[component]
pub fn LucideIcon(props: LucideIconProps) -> Element {
    let class = props.class.clone().unwrap_or_default();

    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            width: "{props.size}",
            height: "{props.size}",
            view_box: "0 0 24 24",
            fill: "{props.fill}",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {icon_shapes(props.icon)}
        }
    }
}

fn icon_shapes(icon: Icon) -> Element {
    match icon {
        Icon::Calendar => rsx! {
            path { d: "M8 2v4" }
            path { d: "M16 2v4" }
            rect { x: "3", y: "4", width: "18", height: "18", rx: "2" }
            path { d: "M3 10h18" }
        },
        Icon::MapPin => rsx! {
            path { d: "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" }
            circle { cx: "12", cy: "10", r: "3" }
        },
        Icon::Coffee => rsx! {
            path { d: "M10 2v2" }
            path { d: "M14 2v2" }
            path { d: "M16 8a1 1 0 0 1 1 1v8a4 4 0 0 1-4 4H7a4 4 0 0 1-4-4V9a1 1 0 0 1 1-1h14a4 4 0 1 1 0 8h-1" }
            path { d: "M6 2v2" }
        },
        Icon::Utensils => rsx! {
            path { d: "M3 2v7c0 1.1.9 2 2 2h4a2 2 0 0 0 2-2V2" }
            path { d: "M7 2v20" }
            path { d: "M21 15V2a5 5 0 0 0-5 5v6c0 1.1.9 2 2 2h3Zm0 0v7" }
        },
        Icon::Home => rsx! {
            path { d: "m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z" }
            path { d: "M9 22V12h6v10" }
        },
        Icon::AlertCircle => rsx! {
            circle { cx: "12", cy: "12", r: "10" }
            path { d: "M12 8v4" }
            path { d: "M12 16h.01" }
        },
        Icon::Sparkles => rsx! {
            path { d: "m12 3-1.912 5.813a2 2 0 0 1-1.275 1.275L3 12l5.813 1.912a2 2 0 0 1 1.275 1.275L12 21l1.912-5.813a2 2 0 0 1 1.275-1.275L21 12l-5.813-1.912a2 2 0 0 1-1.275-1.275L12 3Z" }
            path { d: "M5 3v4" }
            path { d: "M19 17v4" }
            path { d: "M3 5h4" }
            path { d: "M17 19h4" }
        },
        Icon::Heart => rsx! {
            path { d: "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z" }
        },
        Icon::Train => rsx! {
            rect { x: "4", y: "3", width: "16", height: "16", rx: "2" }
            path { d: "M4 11h16" }
            path { d: "M12 3v8" }
            path { d: "m8 19-2 3" }
            path { d: "m18 22-2-3" }
            path { d: "M8 15h.01" }
            path { d: "M16 15h.01" }
        },
        Icon::Camera => rsx! {
            path { d: "M14.5 4h-5L7 7H4a2 2 0 0 0-2 2v9a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V9a2 2 0 0 0-2-2h-3l-2.5-3z" }
            circle { cx: "12", cy: "13", r: "3" }
        },
        Icon::Volleyball => rsx! {
            circle { cx: "12", cy: "12", r: "10" }
            path { d: "M11.1 7.1a16.55 16.55 0 0 1 10.9 4" }
            path { d: "M12 12a12.6 12.6 0 0 1-8.7 5" }
            path { d: "M16.8 13.6a16.55 16.55 0 0 1-9 7.5" }
            path { d: "M20.7 17a12.8 12.8 0 0 0-8.7-5 13.3 13.3 0 0 1 0-10" }
            path { d: "M6.3 3.8a16.55 16.55 0 0 0 1.9 11.5" }
        },
    }
}
