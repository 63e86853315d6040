#![forbid(unsafe_code)]

//! Active-section selection for the navigation bar.
//!
//! [`NavigationStateMachine::recompute`] scans the tick's reports from the
//! bottom of the page upward and activates the first section whose top edge
//! has passed `activation_threshold_px`. Scanning bottom-up means that when
//! several short sections all qualify, the lowest one wins ("scrolled past
//! this point"). When nothing qualifies the previous selection is kept, so
//! once a section has been activated the bar never falls back to "none".
//!
//! The input slice is only read; the reverse scan never reorders it.

use folio_core::viewport::{SectionId, VisibilityReport};

/// Thresholds for navigation state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavConfig {
    /// A section becomes active once its top edge is above this offset.
    pub activation_threshold_px: f64,
    /// The bar counts as scrolled once the document is scrolled past this.
    pub scrolled_threshold_px: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            activation_threshold_px: 200.0,
            scrolled_threshold_px: 60.0,
        }
    }
}

impl NavConfig {
    /// Set the activation threshold.
    #[must_use]
    pub fn with_activation_threshold(mut self, px: f64) -> Self {
        self.activation_threshold_px = px;
        self
    }

    /// Set the scrolled threshold.
    #[must_use]
    pub fn with_scrolled_threshold(mut self, px: f64) -> Self {
        self.scrolled_threshold_px = px;
        self
    }
}

/// Navigation bar state for the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    /// Highlighted section; `None` until the first activation.
    pub active_section_id: Option<SectionId>,
    /// Whether the page is scrolled past the style threshold.
    pub scrolled: bool,
}

/// Result of one recompute, with change flags for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationUpdate {
    /// State after the recompute.
    pub state: NavigationState,
    /// Whether the active section changed.
    pub active_changed: bool,
    /// Whether the scrolled flag flipped.
    pub scrolled_changed: bool,
}

impl NavigationUpdate {
    /// Whether anything visible changed.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.active_changed || self.scrolled_changed
    }
}

/// Tracks the active section and scrolled flag.
#[derive(Debug, Clone, Default)]
pub struct NavigationStateMachine {
    config: NavConfig,
    state: NavigationState,
}

impl NavigationStateMachine {
    /// Create a machine with no active section.
    #[must_use]
    pub fn new(config: NavConfig) -> Self {
        Self {
            config,
            state: NavigationState::default(),
        }
    }

    /// Thresholds in use.
    #[must_use]
    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> NavigationState {
        self.state
    }

    /// Recompute from `reports` (in document order) and the scroll offset.
    pub fn recompute(&mut self, reports: &[VisibilityReport], scroll_y: f64) -> NavigationState {
        self.update(reports, scroll_y).state
    }

    /// Like [`recompute`](Self::recompute), also reporting what changed.
    pub fn update(&mut self, reports: &[VisibilityReport], scroll_y: f64) -> NavigationUpdate {
        let previous = self.state;

        let threshold = self.config.activation_threshold_px;
        if let Some(report) = reports
            .iter()
            .rev()
            .find(|report| report.top_offset_px < threshold)
        {
            self.state.active_section_id = Some(report.section_id);
        }
        self.state.scrolled = scroll_y > self.config.scrolled_threshold_px;

        let update = NavigationUpdate {
            state: self.state,
            active_changed: previous.active_section_id != self.state.active_section_id,
            scrolled_changed: previous.scrolled != self.state.scrolled,
        };
        if update.active_changed {
            folio_core::debug!(
                from = ?previous.active_section_id,
                to = ?self.state.active_section_id,
                "active section changed"
            );
        }
        update
    }
}
