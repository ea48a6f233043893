//! HMAC-SHA1 URL signatures, as verified by Thumbor's security key check.

use base64::{engine::general_purpose::URL_SAFE, Engine as _};
use hmac::{Hmac, Mac};
use sha1::Sha1;

use super::ThumborError;

type HmacSha1 = Hmac<Sha1>;

/// URL-safe base64 (padded) of HMAC-SHA1(`key`, `config`).
pub(super) fn signature(key: &str, config: &str) -> Result<String, ThumborError> {
    let mut mac = HmacSha1::new_from_slice(key.as_bytes()).map_err(|_| ThumborError::Signing)?;
    mac.update(config.as_bytes());
    Ok(URL_SAFE.encode(mac.finalize().into_bytes()))
}
