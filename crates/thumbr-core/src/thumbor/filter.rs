//! Thumbor filter expressions.
//!
//! Each helper returns the filter text that goes between the `:` separators
//! of the `filters:` path segment, e.g. `format(webp)`.

/// Output formats understood by Thumbor's `format` filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Gif,
    Jpeg,
    Png,
    Webp,
}

impl ImageFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ImageFormat::Gif => "gif",
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Png => "png",
            ImageFormat::Webp => "webp",
        }
    }
}

/// Re-encode the result in `format`.
pub fn format(format: ImageFormat) -> String {
    format!("format({})", format.as_str())
}

/// Lossy quality, capped at 100.
pub fn quality(amount: u8) -> String {
    format!("quality({})", amount.min(100))
}

pub fn grayscale() -> String {
    "grayscale()".to_string()
}
