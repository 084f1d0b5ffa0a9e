//! Diamond Field Component
//!
//! Background layer of faint, slowly drifting diamonds. Positions come from
//! [`trip_core::markers`]; this component only turns them into CSS.

use dioxus::prelude::*;
use trip_core::DecorativeMarker;

/// Properties for the DiamondField component
#[derive(Clone, PartialEq, Props)]
pub struct DiamondFieldProps {
    /// Pre-generated layout
    pub markers: Vec<DecorativeMarker>,
    /// Resolved reference to the diamond image
    pub src: String,
    #[props(default = 0.12)]
    pub opacity: f32,
}

/// Renders every marker as an absolutely positioned image
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     DiamondField {
///         markers: session.read().markers().to_vec(),
///         src: loader.resolve(AssetId::DiamondMarker).to_string(),
///     }
/// }
/// ```
#[component]
pub fn DiamondField(props: DiamondFieldProps) -> Element {
    let opacity = props.opacity;

    rsx! {
        div {
            class: "diamond-field",
            style: "position: absolute; inset: 0; pointer-events: none; overflow: hidden; opacity: {opacity};",
            "aria-hidden": "true",
            for marker in props.markers.iter() {
                img {
                    class: "diamond-marker",
                    src: "{props.src}",
                    alt: "",
                    style: marker_style(marker),
                }
            }
        }
    }
}

/// Inline CSS placing a single marker.
pub fn marker_style(marker: &DecorativeMarker) -> String {
    format!(
        "top: {:.2}%; left: {:.2}%; width: {:.1}px; height: {:.1}px; \
         transform: rotate({:.1}deg); animation-delay: {:.2}s; animation-duration: {:.2}s;",
        marker.top_percent,
        marker.left_percent,
        marker.size_px,
        marker.size_px,
        marker.rotation_deg,
        marker.animation_delay_sec,
        marker.animation_duration_sec,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn marker_style_formats_fields() {
        let marker = DecorativeMarker {
            id: 0,
            top_percent: 12.5,
            left_percent: 40.0,
            size_px: 20.0,
            rotation_deg: 45.0,
            animation_delay_sec: 1.5,
            animation_duration_sec: 12.0,
        };
        assert_eq!(
            marker_style(&marker),
            "top: 12.50%; left: 40.00%; width: 20.0px; height: 20.0px; \
             transform: rotate(45.0deg); animation-delay: 1.50s; animation-duration: 12.00s;"
        );
    }

    #[test]
    fn generated_markers_produce_styles() {
        let mut rng = StdRng::seed_from_u64(11);
        let markers = trip_core::markers::generate(4, 10.0, 20.0, &mut rng).unwrap();
        for m in &markers {
            let style = marker_style(m);
            assert!(style.starts_with("top: "));
            assert!(style.contains("animation-duration"));
        }
    }
}
