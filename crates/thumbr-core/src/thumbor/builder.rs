//! Accumulates Thumbor operations for one image and renders the URL.

use super::{sign, ThumborError};

const UNSAFE: &str = "unsafe";
const SMART: &str = "smart";
const FILTERS_PREFIX: &str = "filters:";

/// Fit-in variants. All keep the whole image inside the target box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitInStyle {
    Normal,
    Adaptive,
    Full,
}

impl FitInStyle {
    fn segment(self) -> &'static str {
        match self {
            FitInStyle::Normal => "fit-in",
            FitInStyle::Adaptive => "adaptive-fit-in",
            FitInStyle::Full => "full-fit-in",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

impl HorizontalAlign {
    fn segment(self) -> &'static str {
        match self {
            HorizontalAlign::Left => "left",
            HorizontalAlign::Center => "center",
            HorizontalAlign::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlign {
    Top,
    Middle,
    Bottom,
}

impl VerticalAlign {
    fn segment(self) -> &'static str {
        match self {
            VerticalAlign::Top => "top",
            VerticalAlign::Middle => "middle",
            VerticalAlign::Bottom => "bottom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CropRect {
    top: u32,
    left: u32,
    bottom: u32,
    right: u32,
}

/// Builder for a single Thumbor image URL.
///
/// Created by [`Thumbor::build_image`](super::Thumbor::build_image). Operations
/// only record state; ordering rules are checked by [`to_url`](Self::to_url).
#[derive(Clone)]
pub struct ThumborUrlBuilder {
    endpoint: String,
    key: Option<String>,
    image: String,
    resize: Option<(u32, u32)>,
    fit_in: Option<FitInStyle>,
    crop: Option<CropRect>,
    halign: Option<HorizontalAlign>,
    valign: Option<VerticalAlign>,
    smart: bool,
    filters: Vec<String>,
}

impl std::fmt::Debug for ThumborUrlBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThumborUrlBuilder")
            .field("endpoint", &self.endpoint)
            .field("signed", &self.key.is_some())
            .field("image", &self.image)
            .field("resize", &self.resize)
            .field("fit_in", &self.fit_in)
            .field("crop", &self.crop)
            .field("halign", &self.halign)
            .field("valign", &self.valign)
            .field("smart", &self.smart)
            .field("filters", &self.filters)
            .finish()
    }
}

impl ThumborUrlBuilder {
    pub(super) fn new(endpoint: String, key: Option<String>, image: String) -> Self {
        Self {
            endpoint,
            key,
            image,
            resize: None,
            fit_in: None,
            crop: None,
            halign: None,
            valign: None,
            smart: false,
            filters: Vec::new(),
        }
    }

    /// Resize to `width` x `height`; zero keeps the aspect ratio on that axis.
    pub fn resize(&mut self, width: u32, height: u32) -> &mut Self {
        self.resize = Some((width, height));
        self
    }

    /// Scale to fit within the resize box without cropping.
    pub fn fit_in(&mut self) -> &mut Self {
        self.fit_in_style(FitInStyle::Normal)
    }

    pub fn fit_in_style(&mut self, style: FitInStyle) -> &mut Self {
        self.fit_in = Some(style);
        self
    }

    /// Scale to fill the resize box, cropping the overflow.
    ///
    /// This is Thumbor's default resize behaviour, so it only undoes a
    /// previous fit-in and adds nothing to the URL.
    pub fn crop_to_fill(&mut self) -> &mut Self {
        self.fit_in = None;
        self
    }

    /// Manual crop, in source pixels, applied before resizing.
    pub fn crop(&mut self, top: u32, left: u32, bottom: u32, right: u32) -> &mut Self {
        self.crop = Some(CropRect {
            top,
            left,
            bottom,
            right,
        });
        self
    }

    pub fn align(&mut self, align: HorizontalAlign) -> &mut Self {
        self.halign = Some(align);
        self
    }

    pub fn valign(&mut self, align: VerticalAlign) -> &mut Self {
        self.valign = Some(align);
        self
    }

    /// Let Thumbor pick the crop focus with feature detection.
    pub fn smart(&mut self) -> &mut Self {
        self.smart = true;
        self
    }

    /// Append a filter expression, see [`filter`](super::filter) for helpers.
    pub fn filter(&mut self, filter: impl Into<String>) -> &mut Self {
        self.filters.push(filter.into());
        self
    }

    /// Path after the signature segment, ending with the image.
    fn config(&self) -> Result<String, ThumborError> {
        let mut config = String::new();

        if let Some(c) = self.crop {
            if c.bottom <= c.top || c.right <= c.left {
                return Err(ThumborError::InvalidCrop {
                    top: c.top,
                    left: c.left,
                    bottom: c.bottom,
                    right: c.right,
                });
            }
            config.push_str(&format!("{}x{}:{}x{}/", c.left, c.top, c.right, c.bottom));
        }

        match self.resize {
            Some((width, height)) => {
                if let Some(style) = self.fit_in {
                    config.push_str(style.segment());
                    config.push('/');
                }
                config.push_str(&format!("{width}x{height}"));
                if let Some(h) = self.halign {
                    config.push('/');
                    config.push_str(h.segment());
                }
                if let Some(v) = self.valign {
                    config.push('/');
                    config.push_str(v.segment());
                }
                config.push('/');
            }
            None => {
                if self.fit_in.is_some() {
                    return Err(ThumborError::FitInWithoutResize);
                }
                if self.halign.is_some() || self.valign.is_some() {
                    return Err(ThumborError::AlignWithoutResize);
                }
            }
        }

        if self.smart {
            config.push_str(SMART);
            config.push('/');
        }

        if !self.filters.is_empty() {
            config.push_str(FILTERS_PREFIX);
            config.push_str(&self.filters.join(":"));
            config.push('/');
        }

        config.push_str(&self.image);
        Ok(config)
    }

    /// Render the URL, signed when the endpoint has a key.
    pub fn to_url(&self) -> Result<String, ThumborError> {
        let config = self.config()?;
        let prefix = match &self.key {
            Some(key) => sign::signature(key, &config)?,
            None => UNSAFE.to_string(),
        };
        Ok(format!("{}{}/{}", self.endpoint, prefix, config))
    }
}
