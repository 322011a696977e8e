use color_eyre::Result;
use dioxus::{
    desktop::{self, WindowBuilder},
    prelude::*,
};

use stroke_icons::Search;

#[component]
fn App() -> Element {
    rsx! {
        main {
            style: "display: flex; align-items: center; gap: 2rem; padding: 2rem;",

            Search {},
            Search { size: 48 },
            Search { size: 96, color: "#38bdf8" },
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    dioxus::LaunchBuilder::new()
        .with_cfg(
            desktop::Config::default()
                .with_menu(None)
                .with_window(WindowBuilder::new().with_title("Stroke Icons")),
        )
        .launch(App);

    Ok(())
}
