//! Image request model.
//!
//! A [`Request`] describes one image the host pipeline wants to load: where
//! it comes from and how it should be sized on the way in. Requests are
//! immutable once built; transformers produce new requests instead of
//! editing existing ones.

mod builder;
mod source;

pub use builder::RequestBuilder;
pub use source::Source;

use url::Url;

/// How a resized image is fitted into its target box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResizeStrategy {
    /// Plain resize, aspect ratio not preserved.
    #[default]
    None,
    /// Scale to fill the target box and crop the overflow.
    CenterCrop,
    /// Scale to fit inside the target box without cropping.
    CenterInside,
}

/// Validation failure while building a [`Request`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RequestError {
    #[error("resource id must not be zero")]
    ZeroResourceId,
    #[error("resize requires a non-zero width or height")]
    EmptyResize,
    #[error("center crop requires calling resize with a positive width or height")]
    CenterCropWithoutResize,
    #[error("center inside requires calling resize with a positive width or height")]
    CenterInsideWithoutResize,
    #[error("center crop and center inside are mutually exclusive")]
    ConflictingStrategy,
    #[error("only scale down requires calling resize with a positive width or height")]
    OnlyScaleDownWithoutResize,
}

/// An immutable image load request.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    source: Source,
    target_width: u32,
    target_height: u32,
    resize_strategy: ResizeStrategy,
    only_scale_down: bool,
    rotation_degrees: f32,
    stable_key: Option<String>,
}

impl Request {
    /// Start a request for a URI.
    pub fn builder(uri: Url) -> RequestBuilder {
        RequestBuilder::new(Source::Uri(uri))
    }

    /// Start a request for a local resource handle.
    pub fn for_resource(id: u32) -> RequestBuilder {
        RequestBuilder::new(Source::Resource(id))
    }

    /// Builder seeded with every field of this request.
    pub fn new_builder(&self) -> RequestBuilder {
        RequestBuilder::from_request(self)
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn uri(&self) -> Option<&Url> {
        self.source.uri()
    }

    pub fn target_width(&self) -> u32 {
        self.target_width
    }

    pub fn target_height(&self) -> u32 {
        self.target_height
    }

    /// True when a resize was requested (either dimension non-zero).
    pub fn has_size(&self) -> bool {
        self.target_width != 0 || self.target_height != 0
    }

    pub fn resize_strategy(&self) -> ResizeStrategy {
        self.resize_strategy
    }

    pub fn center_crop(&self) -> bool {
        self.resize_strategy == ResizeStrategy::CenterCrop
    }

    pub fn center_inside(&self) -> bool {
        self.resize_strategy == ResizeStrategy::CenterInside
    }

    pub fn only_scale_down(&self) -> bool {
        self.only_scale_down
    }

    pub fn rotation_degrees(&self) -> f32 {
        self.rotation_degrees
    }

    pub fn stable_key(&self) -> Option<&str> {
        self.stable_key.as_deref()
    }

    /// Copy of this request pointing at `url`, with sizing and fit cleared.
    ///
    /// Used once a remote service has taken over resizing; the copy always
    /// satisfies the builder's validation rules.
    pub(crate) fn proxied(&self, url: Url) -> Request {
        self.new_builder()
            .set_uri(url)
            .clear_resize()
            .clear_center_crop()
            .clear_center_inside()
            .finish()
    }
}
