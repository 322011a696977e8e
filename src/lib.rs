//! Cross-platform icon components sharing one prop contract: [`web::Search`] for display surfaces, [`native::Search`]
//! for native targets, with the `web` cargo feature deciding which one `Search` points at — at build time, not runtime

pub mod native;
pub mod props;
pub mod web;

pub use props::{DEFAULT_COLOR, IconSize};

#[cfg(feature = "web")]
pub use web::Search;

#[cfg(not(feature = "web"))]
pub use native::Search;
