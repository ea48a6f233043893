//! Rewrite command: run one request through the configured transformer.

use anyhow::{Context, Result};
use std::sync::Arc;
use thumbr_core::config::ThumbrConfig;
use thumbr_core::request::Request;
use thumbr_core::transformer::RequestTransformer;
use url::Url;

use crate::cli::RewriteArgs;

/// Print the rewritten URL.
pub fn run_rewrite(cfg: &ThumbrConfig, args: &RewriteArgs) -> Result<()> {
    println!("{}", rewrite(cfg, args)?);
    Ok(())
}

/// Rewritten URL for `args`, or the input URL when the request is not eligible.
fn rewrite(cfg: &ThumbrConfig, args: &RewriteArgs) -> Result<String> {
    let mut cfg = cfg.clone();
    if let Some(endpoint) = &args.endpoint {
        cfg.endpoint = Some(endpoint.clone());
    }
    cfg.always_transform |= args.always;
    cfg.webp_supported |= args.webp;
    cfg.filters.extend(args.filters.iter().cloned());

    let transformer = cfg
        .build_transformer()
        .context("invalid Thumbor configuration")?;

    let uri = Url::parse(&args.url).with_context(|| format!("invalid URL: {}", args.url))?;
    let mut builder = Request::builder(uri);
    if args.width != 0 || args.height != 0 {
        builder = builder.resize(args.width, args.height);
    }
    if args.center_crop {
        builder = builder.center_crop();
    }
    if args.center_inside {
        builder = builder.center_inside();
    }
    let request = Arc::new(builder.build()?);

    let output = transformer.transform_request(Arc::clone(&request));
    if Arc::ptr_eq(&request, &output) {
        tracing::info!(url = %args.url, "request not eligible for Thumbor, unchanged");
    }
    Ok(output
        .uri()
        .map(|u| u.to_string())
        .unwrap_or_else(|| args.url.clone()))
}
