// External Crate Imports
use dioxus::prelude::*;

// Local Crate Imports
use crate::props::{DEFAULT_COLOR, IconSize};

// Public API ==========================================================================================================

/// Magnifying-glass "search" glyph for native targets — `size` and `color` only, since native drawing engines have no
/// external styling system to hook a `class` or attribute spread into
#[component]
pub fn Search(
    #[props(into, default)] size: IconSize,
    #[props(into, default = DEFAULT_COLOR.to_owned())] color: String,
) -> Element {
    rsx! {
        svg {
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: color,
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",

            circle { cx: "11", cy: "11", r: "8" }
            path { d: "m21 21-4.3-4.3" }
        }
    }
}

// Unit Tests ==========================================================================================================
