// Standard Library Imports
use std::fmt::{self, Display, Formatter};

// Public API ==========================================================================================================

/// Fallback stroke colour — inherits whatever foreground colour the surrounding text is drawn in
pub const DEFAULT_COLOR: &str = "currentColor";

/// Rendered width and height of an icon (always square): a bare number of pixels or a free-form CSS length, handed to
/// the rendering engine uninterpreted
#[derive(Clone, PartialEq, Debug)]
pub enum IconSize {
    Pixels(f64),
    Length(String),
}

impl Default for IconSize {
    fn default() -> Self {
        Self::Pixels(24.0)
    }
}

impl Display for IconSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pixels(pixels) => write!(f, "{pixels}"),
            Self::Length(length) => f.write_str(length),
        }
    }
}

impl From<i32> for IconSize {
    fn from(value: i32) -> Self {
        Self::Pixels(value.into())
    }
}

impl From<u32> for IconSize {
    fn from(value: u32) -> Self {
        Self::Pixels(value.into())
    }
}

impl From<f64> for IconSize {
    fn from(value: f64) -> Self {
        Self::Pixels(value)
    }
}

impl From<&str> for IconSize {
    fn from(value: &str) -> Self {
        Self::Length(value.to_owned())
    }
}

impl From<String> for IconSize {
    fn from(value: String) -> Self {
        Self::Length(value)
    }
}

// Unit Tests ==========================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_24_pixels() {
        assert_eq!(IconSize::default(), IconSize::Pixels(24.0));
        assert_eq!(IconSize::default().to_string(), "24");
    }

    #[test]
    fn whole_pixel_sizes_display_bare() {
        assert_eq!(IconSize::from(48).to_string(), "48");
        assert_eq!(IconSize::from(16_u32).to_string(), "16");
        assert_eq!(IconSize::from(32.0).to_string(), "32");
    }

    #[test]
    fn fractional_pixel_sizes_keep_their_fraction() {
        assert_eq!(IconSize::from(22.5).to_string(), "22.5");
    }

    #[test]
    fn css_lengths_pass_through_verbatim() {
        assert_eq!(IconSize::from("1.5em").to_string(), "1.5em");
        assert_eq!(IconSize::from(String::from("75%")).to_string(), "75%");
    }

    // Nonsensical values aren't this crate's problem — they're forwarded to the rendering engine uninterpreted
    #[test]
    fn nonsensical_sizes_are_not_rejected() {
        assert_eq!(IconSize::from(-24).to_string(), "-24");
        assert_eq!(IconSize::from("banana").to_string(), "banana");
    }
}
