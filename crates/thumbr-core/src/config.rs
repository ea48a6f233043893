use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::thumbor::{Thumbor, ThumborError};
use crate::transformer::{IdentityTransformer, RequestTransformer, ThumborRequestTransformer};

/// Thumbor's default listen address.
const DEFAULT_ENDPOINT: &str = "http://localhost:8888/";

/// Global configuration loaded from `~/.config/thumbr/config.toml`.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct ThumbrConfig {
    /// Base URL of the Thumbor server. Without one, requests pass through unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Security key; when set, URLs are signed instead of `unsafe`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,
    /// Send unsized remote requests through Thumbor as well.
    #[serde(default)]
    pub always_transform: bool,
    /// Ask Thumbor for WebP output. Ignored when `filters` is non-empty.
    #[serde(default)]
    pub webp_supported: bool,
    /// Filters appended to every URL, e.g. `"quality(80)"`.
    #[serde(default)]
    pub filters: Vec<String>,
}

impl std::fmt::Debug for ThumbrConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThumbrConfig")
            .field("endpoint", &self.endpoint)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "<redacted>"))
            .field("always_transform", &self.always_transform)
            .field("webp_supported", &self.webp_supported)
            .field("filters", &self.filters)
            .finish()
    }
}

impl Default for ThumbrConfig {
    fn default() -> Self {
        Self {
            endpoint: Some(DEFAULT_ENDPOINT.to_string()),
            secret_key: None,
            always_transform: false,
            webp_supported: false,
            filters: Vec::new(),
        }
    }
}

impl ThumbrConfig {
    /// Build the transformer this config describes.
    ///
    /// Fails on an unusable endpoint or empty key so misconfiguration shows
    /// up at startup rather than on the first request. Without an endpoint
    /// every request is returned unchanged.
    pub fn build_transformer(&self) -> Result<Box<dyn RequestTransformer>, ThumborError> {
        let endpoint = match &self.endpoint {
            Some(endpoint) => endpoint,
            None => {
                tracing::debug!("no Thumbor endpoint configured, requests pass through");
                return Ok(Box::new(IdentityTransformer));
            }
        };
        let thumbor = match &self.secret_key {
            Some(key) => Thumbor::with_key(endpoint, key)?,
            None => Thumbor::new(endpoint)?,
        };
        let webp = self.webp_supported;
        let mut transformer = ThumborRequestTransformer::new(thumbor)
            .always_transform(self.always_transform)
            .webp_supported(move || webp);
        if !self.filters.is_empty() {
            let filters = self.filters.clone();
            transformer = transformer.customize(move |builder| {
                for f in &filters {
                    builder.filter(f.as_str());
                }
            });
        }
        Ok(Box::new(transformer))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("thumbr")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from `path`, writing the defaults there if it is missing.
pub fn load_or_init_at(path: &Path) -> Result<ThumbrConfig> {
    if !path.exists() {
        let default_cfg = ThumbrConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ThumbrConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration from the XDG config dir, creating a default file if none exists.
pub fn load_or_init() -> Result<ThumbrConfig> {
    load_or_init_at(&config_path()?)
}
