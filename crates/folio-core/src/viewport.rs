#![forbid(unsafe_code)]

//! Viewport tracking: which registered sections are near the visible window.
//!
//! [`ViewportTracker`] is an explicit observer. Sections are registered when
//! they mount and unregistered when they unmount; the tracker never measures
//! anything itself. On every scroll or resize the host updates the viewport
//! and asks for [`VisibilityReport`]s, supplying a [`Measure`] that returns
//! each section's current [`Extent`].
//!
//! # Invariants
//!
//! 1. Registered sections are kept sorted by `order`; reports come out in the
//!    same order.
//! 2. Section ids are unique within a tracker. Registering an id twice
//!    replaces the earlier registration.
//! 3. A section the measurer cannot resolve is left out of that tick's
//!    reports. It is not an error; the next tick retries.
//!
//! # Margin
//!
//! `is_intersecting` uses [`TrackerConfig::reveal_margin_px`], a tunable
//! default. Consumers that only care about position (navigation) read
//! `top_offset_px` from the same reports.

use core::fmt;

use crate::geometry::{Extent, Viewport};

/// Stable identifier of a page section (its anchor id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionId(&'static str);

impl SectionId {
    /// Wrap an anchor id.
    #[must_use]
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    /// The anchor id.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Opaque handle the renderer uses to locate a section's element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionHandle(pub u32);

/// One scrollable content block of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    /// Unique anchor id.
    pub id: SectionId,
    /// Document position; unique and increasing down the page.
    pub order: u32,
    /// Renderer handle for measurement.
    pub region: RegionHandle,
}

impl Section {
    /// Create a section descriptor.
    #[must_use]
    pub const fn new(id: &'static str, order: u32, region: RegionHandle) -> Self {
        Self {
            id: SectionId::new(id),
            order,
            region,
        }
    }
}

/// Geometry source supplied by the renderer.
///
/// Returns `None` when the section's element is not currently mounted.
pub trait Measure {
    /// Current extent of `section`, relative to the viewport top.
    fn measure(&self, section: &Section) -> Option<Extent>;
}

impl<F> Measure for F
where
    F: Fn(&Section) -> Option<Extent>,
{
    fn measure(&self, section: &Section) -> Option<Extent> {
        self(section)
    }
}

/// Visibility of one section for the current tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityReport {
    /// The section reported on.
    pub section_id: SectionId,
    /// Top edge relative to the viewport top.
    pub top_offset_px: f64,
    /// Whether the section lies within the margin-adjusted viewport.
    pub is_intersecting: bool,
}

impl VisibilityReport {
    /// Create a report.
    #[must_use]
    pub const fn new(section_id: SectionId, top_offset_px: f64, is_intersecting: bool) -> Self {
        Self {
            section_id,
            top_offset_px,
            is_intersecting,
        }
    }
}

/// Margin used by the tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackerConfig {
    /// Inset applied to the viewport when deciding whether a section should
    /// reveal. Positive values require the section to be that far inside.
    pub reveal_margin_px: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            reveal_margin_px: 80.0,
        }
    }
}

impl TrackerConfig {
    /// Set the reveal margin.
    #[must_use]
    pub fn with_reveal_margin(mut self, margin_px: f64) -> Self {
        self.reveal_margin_px = margin_px;
        self
    }
}

/// Observer over the page's registered sections.
#[derive(Debug, Clone)]
pub struct ViewportTracker {
    config: TrackerConfig,
    viewport: Viewport,
    sections: Vec<Section>,
}

impl ViewportTracker {
    /// Create a tracker with no registered sections.
    #[must_use]
    pub fn new(config: TrackerConfig, viewport: Viewport) -> Self {
        Self {
            config,
            viewport,
            sections: Vec::new(),
        }
    }

    /// Tracker configuration.
    #[must_use]
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Last observed viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Registered sections in document order.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Number of registered sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether no sections are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Whether `id` is registered.
    #[must_use]
    pub fn is_registered(&self, id: SectionId) -> bool {
        self.sections.iter().any(|s| s.id == id)
    }

    /// Start observing `section`.
    pub fn register(&mut self, section: Section) {
        if let Some(idx) = self.sections.iter().position(|s| s.id == section.id) {
            crate::warn!(section = %section.id, "section re-registered; replacing");
            self.sections.remove(idx);
        }
        let idx = self
            .sections
            .partition_point(|s| s.order <= section.order);
        self.sections.insert(idx, section);
    }

    /// Stop observing the section with `id`. Unknown ids are ignored.
    ///
    /// Returns whether a section was removed.
    pub fn unregister(&mut self, id: SectionId) -> bool {
        let before = self.sections.len();
        self.sections.retain(|s| s.id != id);
        before != self.sections.len()
    }

    /// Record a new scroll offset. Returns whether it changed.
    pub fn observe_scroll(&mut self, scroll_y: f64) -> bool {
        if !scroll_y.is_finite() || scroll_y == self.viewport.scroll_y {
            return false;
        }
        self.viewport.scroll_y = scroll_y;
        true
    }

    /// Record a new viewport size. Returns whether it changed.
    pub fn observe_resize(&mut self, width: f64, height: f64) -> bool {
        if !width.is_finite() || !height.is_finite() {
            return false;
        }
        if width == self.viewport.width && height == self.viewport.height {
            return false;
        }
        self.viewport.width = width;
        self.viewport.height = height;
        true
    }

    /// Reports for every measurable section, in document order.
    pub fn current_reports<M: Measure + ?Sized>(&self, measure: &M) -> Vec<VisibilityReport> {
        let margin = self.config.reveal_margin_px;
        self.sections
            .iter()
            .filter_map(|section| {
                let Some(extent) = measure.measure(section) else {
                    crate::trace!(section = %section.id, "section not measurable; skipping tick");
                    return None;
                };
                Some(VisibilityReport::new(
                    section.id,
                    extent.top,
                    extent.intersects(&self.viewport, margin),
                ))
            })
            .collect()
    }
}
