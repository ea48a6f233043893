//! Moves resizing of remote images onto a Thumbor server.

use std::sync::Arc;

use url::Url;

use super::RequestTransformer;
use crate::request::{Request, ResizeStrategy, Source};
use crate::thumbor::{filter, ImageFormat, Thumbor, ThumborError, ThumborUrlBuilder};

/// Hook run on every URL builder before the URL is rendered.
pub type Customize = Arc<dyn Fn(&mut ThumborUrlBuilder) + Send + Sync>;

/// Runtime capability probe, e.g. "can this device decode WebP".
pub type CapabilityCheck = Arc<dyn Fn() -> bool + Send + Sync>;

/// Rewrites sized `http`/`https` requests into Thumbor URLs.
///
/// By default only requests with a target size are rewritten; with
/// [`always_transform`](Self::always_transform) every remote request goes
/// through Thumbor, which still lets the server pick the output format.
/// The rewritten request carries no size or fit, since Thumbor already
/// applied them.
#[derive(Clone)]
pub struct ThumborRequestTransformer {
    thumbor: Thumbor,
    always_transform: bool,
    customize: Option<Customize>,
    webp_supported: CapabilityCheck,
}

impl std::fmt::Debug for ThumborRequestTransformer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThumborRequestTransformer")
            .field("thumbor", &self.thumbor)
            .field("always_transform", &self.always_transform)
            .field("customize", &self.customize.is_some())
            .finish_non_exhaustive()
    }
}

impl ThumborRequestTransformer {
    pub fn new(thumbor: Thumbor) -> Self {
        Self {
            thumbor,
            always_transform: false,
            customize: None,
            webp_supported: Arc::new(|| false),
        }
    }

    /// Route unsized remote requests through Thumbor too.
    pub fn always_transform(mut self, always: bool) -> Self {
        self.always_transform = always;
        self
    }

    /// Install a hook that can add filters or options to every URL.
    ///
    /// With a hook installed the WebP format filter is left to the hook.
    pub fn customize<F>(mut self, customize: F) -> Self
    where
        F: Fn(&mut ThumborUrlBuilder) + Send + Sync + 'static,
    {
        self.customize = Some(Arc::new(customize));
        self
    }

    /// Probe queried on each transform to decide whether to request WebP.
    pub fn webp_supported<F>(mut self, check: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        self.webp_supported = Arc::new(check);
        self
    }

    /// Transform `request`, surfacing URL builder errors.
    ///
    /// Errors can only come from a customize hook leaving the builder in an
    /// invalid state.
    pub fn try_transform(&self, request: &Arc<Request>) -> Result<Arc<Request>, ThumborError> {
        let uri = match request.source() {
            Source::Resource(id) => {
                tracing::debug!(resource_id = *id, "resource request left unchanged");
                return Ok(Arc::clone(request));
            }
            Source::Uri(uri) => uri,
        };
        if !matches!(uri.scheme(), "http" | "https") {
            tracing::debug!(scheme = uri.scheme(), "non-remote request left unchanged");
            return Ok(Arc::clone(request));
        }
        if !request.has_size() && !self.always_transform {
            tracing::debug!(uri = %uri, "unsized request left unchanged");
            return Ok(Arc::clone(request));
        }

        let mut builder = self.thumbor.build_image(uri.as_str())?;

        if request.has_size() {
            builder.resize(request.target_width(), request.target_height());
            match request.resize_strategy() {
                ResizeStrategy::CenterCrop => {
                    builder.crop_to_fill();
                }
                ResizeStrategy::CenterInside => {
                    builder.fit_in();
                }
                ResizeStrategy::None => {}
            }
        }

        match &self.customize {
            Some(customize) => customize(&mut builder),
            None => {
                if (self.webp_supported)() {
                    builder.filter(filter::format(ImageFormat::Webp));
                }
            }
        }

        let url = builder.to_url()?;
        let proxied = Url::parse(&url).map_err(|source| ThumborError::InvalidUrl {
            url: url.clone(),
            source,
        })?;
        tracing::trace!(from = %uri, to = %proxied, "request rewritten for Thumbor");

        Ok(Arc::new(request.proxied(proxied)))
    }
}

impl RequestTransformer for ThumborRequestTransformer {
    fn transform_request(&self, request: Arc<Request>) -> Arc<Request> {
        match self.try_transform(&request) {
            Ok(transformed) => transformed,
            Err(e) => {
                tracing::warn!(error = %e, "Thumbor URL build failed, keeping original request");
                request
            }
        }
    }
}
