#![forbid(unsafe_code)]

//! Page composition: one tracker, one orchestrator per section, one
//! navigation machine.
//!
//! A [`Page`] is built when the report mounts and dropped when it unmounts;
//! none of its state is global. Geometry events are handled synchronously:
//!
//! 1. The tracker records the new scroll offset or viewport size.
//! 2. Sections are measured once; the reports go to each section's
//!    orchestrator.
//! 3. The same reports go to the navigation machine, which reads only their
//!    top offsets.
//! 4. The queued reveal effects and the navigation state are returned as a
//!    [`PageOutput`].
//!
//! Selection controls (tabs, wizard) are not part of the page; they react to
//! clicks and keys only and never to scroll position.

use core::fmt;

use folio_core::event::{ClickTarget, PageEvent};
use folio_core::geometry::Viewport;
use folio_core::viewport::{
    Measure, Section, SectionId, TrackerConfig, ViewportTracker,
};

use crate::navigation::{NavConfig, NavigationState, NavigationStateMachine};
use crate::reveal::{AnimationOrchestrator, AnimationState, RevealConfig, RevealEffect};

/// Everything tunable about a page.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PageConfig {
    /// Visibility margins.
    pub tracker: TrackerConfig,
    /// Navigation thresholds.
    pub nav: NavConfig,
    /// Entrance transition parameters.
    pub reveal: RevealConfig,
}

impl PageConfig {
    /// Set the tracker configuration.
    #[must_use]
    pub fn with_tracker(mut self, tracker: TrackerConfig) -> Self {
        self.tracker = tracker;
        self
    }

    /// Set the navigation configuration.
    #[must_use]
    pub fn with_nav(mut self, nav: NavConfig) -> Self {
        self.nav = nav;
        self
    }

    /// Set the reveal configuration.
    #[must_use]
    pub fn with_reveal(mut self, reveal: RevealConfig) -> Self {
        self.reveal = reveal;
        self
    }
}

/// Why a section list was rejected at mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountError {
    /// Two sections share an id.
    DuplicateId(SectionId),
    /// A section's order is not greater than its predecessor's.
    NonIncreasingOrder {
        /// The offending section.
        id: SectionId,
        /// Its order.
        order: u32,
        /// The predecessor's order.
        previous: u32,
    },
    /// A section mounted later reuses the order of one already mounted.
    DuplicateOrder {
        /// The rejected section.
        id: SectionId,
        /// The shared order.
        order: u32,
        /// The section already holding that order.
        existing: SectionId,
    },
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "duplicate section id `{id}`"),
            Self::NonIncreasingOrder {
                id,
                order,
                previous,
            } => write!(
                f,
                "section `{id}` has order {order}, not after previous order {previous}"
            ),
            Self::DuplicateOrder {
                id,
                order,
                existing,
            } => write!(
                f,
                "section `{id}` has order {order}, already held by `{existing}`"
            ),
        }
    }
}

impl std::error::Error for MountError {}

/// Result of handling one event.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageOutput {
    /// Entrances to play, in document order.
    pub reveals: Vec<RevealEffect>,
    /// Navigation state after the event.
    pub navigation: NavigationState,
    /// Whether the navigation state changed.
    pub navigation_changed: bool,
    /// Section the host should scroll into view.
    pub scroll_to: Option<SectionId>,
}

/// The mounted report page.
#[derive(Debug, Clone)]
pub struct Page {
    config: PageConfig,
    tracker: ViewportTracker,
    orchestrators: Vec<AnimationOrchestrator>,
    navigation: NavigationStateMachine,
}

impl Page {
    /// Mount a page over a fixed section list.
    ///
    /// Sections must be listed in document order with unique ids and
    /// strictly increasing `order`.
    pub fn mount(
        config: PageConfig,
        viewport: Viewport,
        sections: &[Section],
    ) -> Result<Self, MountError> {
        validate(sections)?;

        let mut tracker = ViewportTracker::new(config.tracker, viewport);
        let mut orchestrators = Vec::with_capacity(sections.len());
        for section in sections {
            tracker.register(*section);
            orchestrators.push(AnimationOrchestrator::new(section.id, config.reveal));
        }
        folio_core::info!(sections = sections.len(), "page mounted");

        Ok(Self {
            config,
            tracker,
            orchestrators,
            navigation: NavigationStateMachine::new(config.nav),
        })
    }

    /// Tear the page down.
    pub fn unmount(self) {
        folio_core::info!(sections = self.tracker.len(), "page unmounted");
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// The shared tracker.
    #[must_use]
    pub fn tracker(&self) -> &ViewportTracker {
        &self.tracker
    }

    /// Current navigation state.
    #[must_use]
    pub fn navigation(&self) -> NavigationState {
        self.navigation.state()
    }

    /// Reveal state of a section, if mounted.
    #[must_use]
    pub fn animation_state(&self, id: SectionId) -> Option<AnimationState> {
        self.orchestrators
            .iter()
            .find(|o| o.section_id() == id)
            .map(AnimationOrchestrator::state)
    }

    /// Mount a section after the page itself mounted.
    ///
    /// The id and the order must both be unused.
    pub fn mount_section(&mut self, section: Section) -> Result<(), MountError> {
        if self.tracker.is_registered(section.id) {
            return Err(MountError::DuplicateId(section.id));
        }
        if let Some(existing) = self
            .tracker
            .sections()
            .iter()
            .find(|s| s.order == section.order)
        {
            return Err(MountError::DuplicateOrder {
                id: section.id,
                order: section.order,
                existing: existing.id,
            });
        }
        self.tracker.register(section);
        self.orchestrators
            .push(AnimationOrchestrator::new(section.id, self.config.reveal));
        Ok(())
    }

    /// Unmount one section, dropping its reveal state.
    pub fn unmount_section(&mut self, id: SectionId) -> bool {
        self.orchestrators.retain(|o| o.section_id() != id);
        self.tracker.unregister(id)
    }

    /// Handle one page event.
    ///
    /// Clicks on tabs or wizard steps and key presses are not page concerns
    /// and produce an output with no reveals and the unchanged navigation.
    pub fn handle<M: Measure + ?Sized>(&mut self, event: &PageEvent, measure: &M) -> PageOutput {
        match *event {
            PageEvent::Scroll { y } => self.handle_scroll(y, measure),
            PageEvent::Resize { width, height } => self.handle_resize(width, height, measure),
            PageEvent::Click(ClickTarget::NavLink(id)) => PageOutput {
                navigation: self.navigation.state(),
                scroll_to: self.tracker.is_registered(id).then_some(id),
                ..PageOutput::default()
            },
            PageEvent::Click(_) | PageEvent::Focus(_) | PageEvent::Key(_) => PageOutput {
                navigation: self.navigation.state(),
                ..PageOutput::default()
            },
        }
    }

    /// Apply a scroll offset and recompute.
    pub fn handle_scroll<M: Measure + ?Sized>(&mut self, y: f64, measure: &M) -> PageOutput {
        self.tracker.observe_scroll(y);
        self.refresh(measure)
    }

    /// Apply a viewport size and recompute.
    pub fn handle_resize<M: Measure + ?Sized>(
        &mut self,
        width: f64,
        height: f64,
        measure: &M,
    ) -> PageOutput {
        self.tracker.observe_resize(width, height);
        self.refresh(measure)
    }

    /// Recompute reveals and navigation from the current viewport.
    ///
    /// Call once after mount so sections already in view reveal on load.
    pub fn refresh<M: Measure + ?Sized>(&mut self, measure: &M) -> PageOutput {
        let span = folio_core::debug_span!("page.refresh", sections = self.tracker.len());
        let _guard = span.enter();

        let reports = self.tracker.current_reports(measure);
        let mut reveals = Vec::new();
        for report in &reports {
            let Some(orchestrator) = self
                .orchestrators
                .iter_mut()
                .find(|o| o.section_id() == report.section_id)
            else {
                continue;
            };
            orchestrator.evaluate(report);
            reveals.extend(orchestrator.drain_effects());
        }

        let update = self
            .navigation
            .update(&reports, self.tracker.viewport().scroll_y);

        PageOutput {
            reveals,
            navigation: update.state,
            navigation_changed: update.changed(),
            scroll_to: None,
        }
    }
}

fn validate(sections: &[Section]) -> Result<(), MountError> {
    for (i, section) in sections.iter().enumerate() {
        if sections[..i].iter().any(|s| s.id == section.id) {
            return Err(MountError::DuplicateId(section.id));
        }
        if let Some(prev) = i.checked_sub(1).map(|p| &sections[p])
            && section.order <= prev.order
        {
            return Err(MountError::NonIncreasingOrder {
                id: section.id,
                order: section.order,
                previous: prev.order,
            });
        }
    }
    Ok(())
}
