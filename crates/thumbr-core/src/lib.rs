//! Rewrites image load requests so a Thumbor server does the resizing.
//!
//! The host pipeline builds a [`request::Request`], hands it to a
//! [`transformer::RequestTransformer`], and fetches whatever comes back.

pub mod config;
pub mod logging;

pub mod request;
pub mod thumbor;
pub mod transformer;
