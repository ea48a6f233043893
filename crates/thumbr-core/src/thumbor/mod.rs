//! Thumbor endpoint and URL building.
//!
//! A [`Thumbor`] holds the service endpoint and the optional security key.
//! Each image gets its own [`ThumborUrlBuilder`], which records operations
//! and renders them in Thumbor's path layout:
//!
//! ```text
//! {endpoint}{unsafe|signature}/[crop/][fit-in/][WxH/][halign/][valign/][smart/][filters:a:b/]{image}
//! ```
//!
//! With a key the `unsafe` segment is replaced by the URL-safe base64
//! HMAC-SHA1 of everything after it.

mod builder;
mod error;
pub mod filter;
mod sign;

pub use builder::{FitInStyle, HorizontalAlign, ThumborUrlBuilder, VerticalAlign};
pub use error::ThumborError;
pub use filter::ImageFormat;

use url::Url;

/// A Thumbor service endpoint, optionally with a signing key.
#[derive(Clone)]
pub struct Thumbor {
    /// Always ends with `/`.
    endpoint: String,
    key: Option<String>,
}

impl std::fmt::Debug for Thumbor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Thumbor")
            .field("endpoint", &self.endpoint)
            .field("signed", &self.key.is_some())
            .finish()
    }
}

impl Thumbor {
    /// Endpoint producing `unsafe` URLs.
    pub fn new(endpoint: &str) -> Result<Self, ThumborError> {
        Ok(Self {
            endpoint: normalize_endpoint(endpoint)?,
            key: None,
        })
    }

    /// Endpoint producing signed URLs.
    pub fn with_key(endpoint: &str, key: &str) -> Result<Self, ThumborError> {
        if key.is_empty() {
            return Err(ThumborError::EmptyKey);
        }
        Ok(Self {
            endpoint: normalize_endpoint(endpoint)?,
            key: Some(key.to_string()),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn is_signed(&self) -> bool {
        self.key.is_some()
    }

    /// Start a URL for `image`, usually the original image's absolute URL.
    pub fn build_image(&self, image: &str) -> Result<ThumborUrlBuilder, ThumborError> {
        if image.is_empty() {
            return Err(ThumborError::EmptyImage);
        }
        Ok(ThumborUrlBuilder::new(
            self.endpoint.clone(),
            self.key.clone(),
            image.to_string(),
        ))
    }
}

fn normalize_endpoint(endpoint: &str) -> Result<String, ThumborError> {
    let parsed = Url::parse(endpoint).map_err(|source| ThumborError::EndpointParse {
        endpoint: endpoint.to_string(),
        source,
    })?;
    let supported = matches!(parsed.scheme(), "http" | "https")
        && parsed.query().is_none()
        && parsed.fragment().is_none();
    if !supported {
        return Err(ThumborError::UnsupportedEndpoint(endpoint.to_string()));
    }
    let mut normalized = parsed.as_str().to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    Ok(normalized)
}
