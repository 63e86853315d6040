#![forbid(unsafe_code)]

//! Element extents reported by the host.
//!
//! The JS side reads `getBoundingClientRect()` for each tracked element and
//! writes the result here before forwarding a scroll or resize. Extents are
//! viewport-relative, so the host refreshes them whenever the page moves.

use std::collections::HashMap;

use folio_core::geometry::Extent;
use folio_core::viewport::{Measure, RegionHandle, Section};

/// A [`Measure`] backed by a table of host-supplied extents.
#[derive(Debug, Clone, Default)]
pub struct HostGeometry {
    extents: HashMap<RegionHandle, Extent>,
}

impl HostGeometry {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the extent of `region`, replacing any previous value.
    pub fn set(&mut self, region: RegionHandle, extent: Extent) {
        self.extents.insert(region, extent);
    }

    /// Forget `region` (its element left the DOM).
    pub fn remove(&mut self, region: RegionHandle) -> Option<Extent> {
        self.extents.remove(&region)
    }

    /// Extent of `region`, if known.
    #[must_use]
    pub fn get(&self, region: RegionHandle) -> Option<Extent> {
        self.extents.get(&region).copied()
    }

    /// Move every element by `-dy`, as a scroll of `dy` pixels would.
    pub fn scroll_by(&mut self, dy: f64) {
        for extent in self.extents.values_mut() {
            extent.top -= dy;
        }
    }

    /// Number of known regions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.extents.len()
    }

    /// Whether no region is known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.extents.is_empty()
    }

    /// Drop every extent.
    pub fn clear(&mut self) {
        self.extents.clear();
    }
}

impl Measure for HostGeometry {
    fn measure(&self, section: &Section) -> Option<Extent> {
        self.get(section.region)
    }
}
