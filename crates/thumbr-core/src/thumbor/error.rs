//! Errors raised while configuring a Thumbor endpoint or building a URL.

/// Endpoint, key, or URL layout problem.
#[derive(Debug, thiserror::Error)]
pub enum ThumborError {
    #[error("invalid Thumbor endpoint {endpoint:?}")]
    EndpointParse {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Thumbor endpoint {0:?} must be an http(s) URL without query or fragment")]
    UnsupportedEndpoint(String),
    #[error("secret key must not be empty")]
    EmptyKey,
    #[error("image must not be empty")]
    EmptyImage,
    #[error("image must be resized first in order to apply fit-in")]
    FitInWithoutResize,
    #[error("image must be resized first in order to align")]
    AlignWithoutResize,
    #[error("crop rectangle {left}x{top}:{right}x{bottom} is empty or inverted")]
    InvalidCrop {
        top: u32,
        left: u32,
        bottom: u32,
        right: u32,
    },
    #[error("could not initialise the URL signer")]
    Signing,
    #[error("generated URL {url:?} is not a valid URL")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}
