//! Config commands: show where config.toml lives and what it resolves to.

use anyhow::Result;
use thumbr_core::config::{self, ThumbrConfig};

pub fn run_config_path() -> Result<()> {
    println!("{}", config::config_path()?.display());
    Ok(())
}

/// Print `cfg` as TOML, with the secret key masked.
pub fn run_config_show(cfg: &ThumbrConfig) -> Result<()> {
    print!("{}", render(cfg)?);
    Ok(())
}

fn render(cfg: &ThumbrConfig) -> Result<String> {
    let mut shown = cfg.clone();
    if shown.secret_key.is_some() {
        shown.secret_key = Some("********".to_string());
    }
    Ok(toml::to_string_pretty(&shown)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_masks_secret_key() {
        let cfg = ThumbrConfig {
            secret_key: Some("omgsecretpassword".to_string()),
            ..ThumbrConfig::default()
        };
        let out = render(&cfg).unwrap();
        assert!(!out.contains("omgsecretpassword"));
        assert!(out.contains("secret_key = \"********\""));
        assert!(out.contains("endpoint = \"http://localhost:8888/\""));
    }

    #[test]
    fn render_omits_missing_key() {
        let out = render(&ThumbrConfig::default()).unwrap();
        assert!(!out.contains("secret_key"));
    }
}
