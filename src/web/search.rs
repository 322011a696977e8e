// External Crate Imports
use dioxus::prelude::*;

// Local Crate Imports
use crate::props::{DEFAULT_COLOR, IconSize};

// Public API ==========================================================================================================

/// Magnifying-glass "search" glyph for display surfaces — `class` and any spread SVG attribute are forwarded verbatim,
/// and a spread attribute that collides with a default replaces it
#[component]
pub fn Search(
    #[props(into, default)] size: IconSize,
    #[props(into, default = DEFAULT_COLOR.to_owned())] color: String,
    class: Option<String>,
    #[props(extends = svg, extends = SvgAttributes)] attributes: Vec<Attribute>,
) -> Element {
    // NOTE: Display engines keep the *first* of a duplicated attribute, so spreading `attributes` after the defaults
    // isn't enough for a caller's `stroke_width` (or any other collision) to win — the colliding default has to be
    // dropped from the output entirely
    let overridden = |name: &str| attributes.iter().any(|attribute| attribute.name == name);

    let xmlns = (!overridden("xmlns")).then_some("http://www.w3.org/2000/svg");
    let width = (!overridden("width")).then(|| size.to_string());
    let height = (!overridden("height")).then(|| size.to_string());
    let view_box = (!overridden("viewBox")).then_some("0 0 24 24");
    let fill = (!overridden("fill")).then_some("none");
    let stroke = (!overridden("stroke")).then_some(color);
    let stroke_width = (!overridden("stroke-width")).then_some("2");
    let stroke_linecap = (!overridden("stroke-linecap")).then_some("round");
    let stroke_linejoin = (!overridden("stroke-linejoin")).then_some("round");

    rsx! {
        svg {
            class,
            xmlns,
            width,
            height,
            view_box,
            fill,
            stroke,
            stroke_width,
            stroke_linecap,
            stroke_linejoin,
            ..attributes,

            circle { cx: "11", cy: "11", r: "8" }
            path { d: "m21 21-4.3-4.3" }
        }
    }
}

// Unit Tests ==========================================================================================================
