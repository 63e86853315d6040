#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All values are CSS pixels as `f64`. Vertical positions of regions are
//! relative to the top edge of the viewport, the same frame the host's
//! bounding-rect query reports in, so a region scrolled past the top has a
//! negative `top`.

/// Vertical extent of a measured region.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Extent {
    /// Top edge relative to the viewport top.
    pub top: f64,
    /// Height of the region. Negative heights are treated as zero.
    pub height: f64,
}

impl Extent {
    /// Create a new extent.
    #[inline]
    pub const fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height.max(0.0)
    }

    /// Whether both coordinates are finite numbers.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.top.is_finite() && self.height.is_finite()
    }

    /// Whether any part of the extent lies inside `viewport` after insetting
    /// both of its edges by `margin`.
    ///
    /// A positive margin shrinks the observed band (the region has to travel
    /// `margin` pixels into view before it counts); a negative margin grows it.
    /// Non-finite extents never intersect.
    pub fn intersects(&self, viewport: &Viewport, margin: f64) -> bool {
        if !self.is_finite() {
            return false;
        }
        let (band_top, band_bottom) = viewport.band(margin);
        if band_top >= band_bottom {
            return false;
        }
        self.top < band_bottom && self.bottom() > band_top
    }
}

/// The visible window of the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Vertical scroll offset of the document.
    pub scroll_y: f64,
    /// Viewport width.
    pub width: f64,
    /// Viewport height.
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}

impl Viewport {
    /// Create an unscrolled viewport of the given size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            scroll_y: 0.0,
            width,
            height,
        }
    }

    /// Set the scroll offset (builder).
    #[must_use]
    pub const fn with_scroll(mut self, scroll_y: f64) -> Self {
        self.scroll_y = scroll_y;
        self
    }

    /// The observed band `[top, bottom)` after insetting both edges by `margin`.
    ///
    /// Collapses to an empty band at the midpoint when the margin exceeds
    /// half the height.
    pub fn band(&self, margin: f64) -> (f64, f64) {
        let height = self.height.max(0.0);
        let margin = if margin.is_finite() { margin } else { 0.0 };
        let top = margin;
        let bottom = height - margin;
        if top > bottom {
            let mid = height / 2.0;
            (mid, mid)
        } else {
            (top, bottom)
        }
    }
}
