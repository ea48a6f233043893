//! Request transformer interface.
//!
//! The host image pipeline hands every request to a [`RequestTransformer`]
//! before fetching. A transformer either returns the same `Arc` (nothing to
//! do) or a new request, so callers can use [`Arc::ptr_eq`] to tell whether
//! anything changed.

mod proxy;

pub use proxy::{CapabilityCheck, Customize, ThumborRequestTransformer};

use std::sync::Arc;

use crate::request::Request;

/// Rewrites requests before they are fetched.
pub trait RequestTransformer: Send + Sync {
    fn transform_request(&self, request: Arc<Request>) -> Arc<Request>;
}

/// Returns every request unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTransformer;

impl RequestTransformer for IdentityTransformer {
    fn transform_request(&self, request: Arc<Request>) -> Arc<Request> {
        request
    }
}
