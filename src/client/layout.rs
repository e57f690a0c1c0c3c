//! Hero video and banner sizing.
//!
//! The hero container is kept one viewport tall (plus a small overscan) and
//! the poster, filter and video are stretched to the viewport width. Below
//! [`WINDOW_CUTOFF`] they are instead scaled to the container height and
//! centred horizontally, keeping their natural aspect ratio.

/// Extra pixels added to the hero height
pub const HEIGHT_SCALE: f64 = 5.0;

/// Viewport width below which the banner is scaled to height (mobile)
pub const WINDOW_CUTOFF: f64 = 1000.0;

pub const POSTER_SELECTOR: &str = ".video-container .poster img";
pub const FILTER_SELECTOR: &str = ".video-container .filter";
pub const VIDEO_SELECTOR: &str = ".video-container video";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }
}

/// Computed CSS box for one banner element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BannerLayout {
    pub width: f64,
    pub height: f64,
    pub margin_top: f64,
    pub margin_left: f64,
}

/// Height of `.homepage-hero-module`
pub fn hero_height(viewport: Viewport) -> f64 {
    viewport.height + HEIGHT_SCALE
}

/// Scale an element with the given natural size into the viewport
pub fn scale_banner(natural: Dimensions, viewport: Viewport) -> BannerLayout {
    let aspect = natural.height / natural.width;

    if viewport.width < WINDOW_CUTOFF {
        let height = hero_height(viewport);
        let width = height / aspect;
        BannerLayout {
            width,
            height,
            margin_top: 0.0,
            margin_left: -(width - viewport.width) / 2.0,
        }
    } else {
        BannerLayout {
            width: viewport.width,
            height: viewport.width * aspect,
            margin_top: 0.0,
            margin_left: 0.0,
        }
    }
}

/// Natural sizes captured on page load, rescaled on every resize
#[derive(Debug, Clone)]
pub struct HeroLayout {
    elements: Vec<(&'static str, Dimensions)>,
}

impl HeroLayout {
    /// Capture the natural size of poster, filter and video
    pub fn capture(poster: Dimensions, filter: Dimensions, video: Dimensions) -> Self {
        Self {
            elements: vec![
                (POSTER_SELECTOR, poster),
                (FILTER_SELECTOR, filter),
                (VIDEO_SELECTOR, video),
            ],
        }
    }

    /// Initial layout: every captured element is scaled
    pub fn on_load(&self, viewport: Viewport) -> Vec<(&'static str, BannerLayout)> {
        self.elements
            .iter()
            .map(|(selector, natural)| (*selector, scale_banner(*natural, viewport)))
            .collect()
    }

    /// Resize pass; the filter overlay keeps its load-time size
    pub fn on_resize(&self, viewport: Viewport) -> Vec<(&'static str, BannerLayout)> {
        self.elements
            .iter()
            .filter(|(selector, _)| *selector != FILTER_SELECTOR)
            .map(|(selector, natural)| (*selector, scale_banner(*natural, viewport)))
            .collect()
    }
}
