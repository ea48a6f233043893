//! Validating builder for [`Request`].

use url::Url;

use super::{Request, RequestError, ResizeStrategy, Source};

/// Builder for [`Request`]. All rules are checked in [`RequestBuilder::build`].
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    source: Source,
    /// `None` until `resize` is called; `Some((0, 0))` is rejected.
    size: Option<(u32, u32)>,
    center_crop: bool,
    center_inside: bool,
    only_scale_down: bool,
    rotation_degrees: f32,
    stable_key: Option<String>,
}

impl RequestBuilder {
    pub(super) fn new(source: Source) -> Self {
        Self {
            source,
            size: None,
            center_crop: false,
            center_inside: false,
            only_scale_down: false,
            rotation_degrees: 0.0,
            stable_key: None,
        }
    }

    pub(super) fn from_request(request: &Request) -> Self {
        Self {
            source: request.source.clone(),
            size: request
                .has_size()
                .then_some((request.target_width, request.target_height)),
            center_crop: request.center_crop(),
            center_inside: request.center_inside(),
            only_scale_down: request.only_scale_down,
            rotation_degrees: request.rotation_degrees,
            stable_key: request.stable_key.clone(),
        }
    }

    /// Replace the source with a URI.
    pub fn set_uri(mut self, uri: Url) -> Self {
        self.source = Source::Uri(uri);
        self
    }

    /// Replace the source with a resource handle.
    pub fn set_resource_id(mut self, id: u32) -> Self {
        self.source = Source::Resource(id);
        self
    }

    /// Resize to `width` x `height`. A zero dimension keeps the aspect ratio.
    pub fn resize(mut self, width: u32, height: u32) -> Self {
        self.size = Some((width, height));
        self
    }

    /// Drop the resize along with `only_scale_down`, which depends on it.
    pub fn clear_resize(mut self) -> Self {
        self.size = None;
        self.only_scale_down = false;
        self
    }

    pub fn center_crop(mut self) -> Self {
        self.center_crop = true;
        self
    }

    pub fn clear_center_crop(mut self) -> Self {
        self.center_crop = false;
        self
    }

    pub fn center_inside(mut self) -> Self {
        self.center_inside = true;
        self
    }

    pub fn clear_center_inside(mut self) -> Self {
        self.center_inside = false;
        self
    }

    pub fn only_scale_down(mut self) -> Self {
        self.only_scale_down = true;
        self
    }

    pub fn rotate(mut self, degrees: f32) -> Self {
        self.rotation_degrees = degrees;
        self
    }

    pub fn stable_key(mut self, key: impl Into<String>) -> Self {
        self.stable_key = Some(key.into());
        self
    }

    pub fn build(self) -> Result<Request, RequestError> {
        if self.source.resource_id() == Some(0) {
            return Err(RequestError::ZeroResourceId);
        }
        if self.size == Some((0, 0)) {
            return Err(RequestError::EmptyResize);
        }
        if self.center_crop && self.center_inside {
            return Err(RequestError::ConflictingStrategy);
        }
        let sized = self.size.is_some();
        if self.center_crop && !sized {
            return Err(RequestError::CenterCropWithoutResize);
        }
        if self.center_inside && !sized {
            return Err(RequestError::CenterInsideWithoutResize);
        }
        if self.only_scale_down && !sized {
            return Err(RequestError::OnlyScaleDownWithoutResize);
        }
        Ok(self.finish())
    }

    /// Assemble without validation; callers guarantee the rules hold.
    pub(super) fn finish(self) -> Request {
        let (target_width, target_height) = self.size.unwrap_or((0, 0));
        let resize_strategy = if self.center_crop {
            ResizeStrategy::CenterCrop
        } else if self.center_inside {
            ResizeStrategy::CenterInside
        } else {
            ResizeStrategy::None
        };
        Request {
            source: self.source,
            target_width,
            target_height,
            resize_strategy,
            only_scale_down: self.only_scale_down,
            rotation_degrees: self.rotation_degrees,
            stable_key: self.stable_key,
        }
    }
}
