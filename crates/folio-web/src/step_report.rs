#![forbid(unsafe_code)]

//! Step-based runner for the report page.
//!
//! [`StepReport`] drives a [`ReportModel`] without threads or blocking. The
//! host controls the loop:
//!
//! 1. Write element extents via [`StepReport::geometry_mut`].
//! 2. Push events via [`StepReport::push_event`].
//! 3. Advance time via [`StepReport::advance_time`].
//! 4. Call [`StepReport::step`] once per animation frame.
//! 5. Read what to play and repaint via [`StepReport::take_outputs`].
//!
//! Scroll events pass through a [`ScrollCoalescer`]: a burst inside one frame
//! budget collapses to its latest offset. A pending offset is applied before
//! any later non-scroll event so event order is preserved.
//!
//! ```ignore
//! let mut report = StepReport::new(ReportConfig::default(), Viewport::new(1280.0, 800.0));
//! report.geometry_mut().set(RegionHandle(0), Extent::new(0.0, 900.0));
//! report.init()?;
//!
//! report.push_event(PageEvent::Scroll { y: 412.0 });
//! report.advance_time(Duration::from_millis(16));
//! report.step()?;
//! let outputs = report.take_outputs();
//! ```

use core::time::Duration;
use std::collections::VecDeque;

use folio_core::event::PageEvent;
use folio_core::geometry::Viewport;
use folio_core::viewport::SectionId;
use folio_runtime::navigation::NavigationState;
use folio_runtime::reveal::{ItemRevealEffect, RevealEffect};
use folio_runtime::scroll_coalescer::{CoalesceAction, CoalescerConfig, ScrollCoalescer};

use crate::geometry::HostGeometry;
use crate::model::{ModelOutput, ReportConfig, ReportModel, SelectionChange};
use crate::{DeterministicClock, WebError};

/// Result of a single [`StepReport::step`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// Number of events taken from the queue.
    pub events_processed: u32,
    /// Whether a coalesced scroll is still waiting for the next frame.
    pub scroll_pending: bool,
    /// Current frame index (monotonically increasing).
    pub frame_idx: u64,
}

/// Everything the host must act on, accumulated across steps.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReportOutputs {
    /// Section entrances to play, in the order they fired.
    pub reveals: Vec<RevealEffect>,
    /// Timeline entry entrances to play.
    pub timeline_reveals: Vec<ItemRevealEffect>,
    /// Latest navigation state, present only if it changed.
    pub navigation: Option<NavigationState>,
    /// Selection changes in order.
    pub selections: Vec<SelectionChange>,
    /// Latest requested scroll target.
    pub scroll_to: Option<SectionId>,
}

impl ReportOutputs {
    /// Whether there is nothing to act on.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reveals.is_empty()
            && self.timeline_reveals.is_empty()
            && self.navigation.is_none()
            && self.selections.is_empty()
            && self.scroll_to.is_none()
    }

    fn absorb(&mut self, out: ModelOutput) {
        self.reveals.extend(out.page.reveals);
        self.timeline_reveals.extend(out.timeline);
        if out.page.navigation_changed {
            self.navigation = Some(out.page.navigation);
        }
        self.selections.extend(out.selection);
        if out.page.scroll_to.is_some() {
            self.scroll_to = out.page.scroll_to;
        }
    }
}

/// Host-driven, non-blocking report runner.
///
/// # Lifecycle
///
/// 1. [`StepReport::new`]: configure with the initial viewport.
/// 2. [`StepReport::init`]: mount and evaluate the first frame, once.
/// 3. [`StepReport::step`]: call repeatedly from the host frame loop.
/// 4. [`StepReport::unmount`]: drop all page state. The report may then be
///    initialized again.
#[derive(Debug)]
pub struct StepReport {
    config: ReportConfig,
    viewport: Viewport,
    model: Option<ReportModel>,
    initialized: bool,
    geometry: HostGeometry,
    clock: DeterministicClock,
    queue: VecDeque<PageEvent>,
    coalescer: ScrollCoalescer,
    outputs: ReportOutputs,
    frame_idx: u64,
}

impl StepReport {
    /// Create an unmounted report.
    #[must_use]
    pub fn new(config: ReportConfig, viewport: Viewport) -> Self {
        Self::with_coalescer(config, viewport, CoalescerConfig::default())
    }

    /// Create an unmounted report with custom scroll coalescing.
    #[must_use]
    pub fn with_coalescer(
        config: ReportConfig,
        viewport: Viewport,
        coalescer: CoalescerConfig,
    ) -> Self {
        Self {
            config,
            viewport,
            model: None,
            initialized: false,
            geometry: HostGeometry::new(),
            clock: DeterministicClock::new(),
            queue: VecDeque::new(),
            coalescer: ScrollCoalescer::new(coalescer),
            outputs: ReportOutputs::default(),
            frame_idx: 0,
        }
    }

    /// Mount the report and evaluate the initial geometry.
    ///
    /// Sections already in view reveal here, without any scroll.
    pub fn init(&mut self) -> Result<(), WebError> {
        if self.initialized {
            return Err(WebError::AlreadyInitialized);
        }
        let mut model = ReportModel::mount(self.config, self.viewport)?;
        self.initialized = true;
        self.outputs.absorb(model.refresh(&self.geometry));
        self.model = Some(model);
        Ok(())
    }

    /// Host-written element extents.
    pub fn geometry_mut(&mut self) -> &mut HostGeometry {
        &mut self.geometry
    }

    /// Element extents.
    #[must_use]
    pub fn geometry(&self) -> &HostGeometry {
        &self.geometry
    }

    /// The mounted model, if any.
    #[must_use]
    pub fn model(&self) -> Option<&ReportModel> {
        self.model.as_ref()
    }

    /// Current host time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    /// Queue an event for the next step.
    pub fn push_event(&mut self, event: PageEvent) {
        self.queue.push_back(event);
    }

    /// Advance host time by `dt`.
    pub fn advance_time(&mut self, dt: Duration) {
        self.clock.advance(dt);
    }

    /// Set host time.
    pub fn set_time(&mut self, now: Duration) {
        self.clock.set(now);
    }

    /// Process all queued events, then give a coalesced scroll its frame.
    pub fn step(&mut self) -> Result<StepResult, WebError> {
        let Some(model) = self.model.as_mut() else {
            return Err(WebError::NotInitialized);
        };
        let now = self.clock.now();

        let mut events_processed: u32 = 0;
        while let Some(event) = self.queue.pop_front() {
            events_processed += 1;
            if let PageEvent::Scroll { y } = event {
                if let CoalesceAction::Apply { y } = self.coalescer.handle_scroll_at(y, now) {
                    let out = model.handle(&PageEvent::Scroll { y }, &self.geometry);
                    self.outputs.absorb(out);
                }
                continue;
            }
            if let Some(y) = self.coalescer.flush(now) {
                let out = model.handle(&PageEvent::Scroll { y }, &self.geometry);
                self.outputs.absorb(out);
            }
            let out = model.handle(&event, &self.geometry);
            self.outputs.absorb(out);
        }

        if let CoalesceAction::Apply { y } = self.coalescer.tick_at(now) {
            let out = model.handle(&PageEvent::Scroll { y }, &self.geometry);
            self.outputs.absorb(out);
        }

        self.frame_idx += 1;
        Ok(StepResult {
            events_processed,
            scroll_pending: self.coalescer.has_pending(),
            frame_idx: self.frame_idx,
        })
    }

    /// Take the accumulated outputs.
    pub fn take_outputs(&mut self) -> ReportOutputs {
        std::mem::take(&mut self.outputs)
    }

    /// Drop all page state, including queued events, undelivered outputs and
    /// any pending scroll. Later steps fail with [`WebError::NotInitialized`]
    /// until [`init`](Self::init) runs again.
    pub fn unmount(&mut self) {
        if let Some(model) = self.model.take() {
            model.unmount();
        }
        self.initialized = false;
        self.queue.clear();
        self.outputs = ReportOutputs::default();
        self.coalescer = ScrollCoalescer::new(*self.coalescer.config());
        self.frame_idx = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_content::sections::SECTIONS;
    use folio_core::geometry::Extent;
    use pretty_assertions::assert_eq;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn report() -> StepReport {
        let mut report = StepReport::new(ReportConfig::default(), Viewport::default());
        for section in SECTIONS {
            let top = f64::from(section.order) * 1000.0;
            report.geometry_mut().set(section.region, Extent::new(top, 1000.0));
        }
        report
    }

    fn revealed(outputs: &ReportOutputs) -> Vec<&'static str> {
        outputs.reveals.iter().map(|r| r.section_id.as_str()).collect()
    }

    #[test]
    fn step_before_init_fails() {
        let mut report = report();
        assert_eq!(report.step(), Err(WebError::NotInitialized));
    }

    #[test]
    fn init_twice_fails() {
        let mut report = report();
        report.init().unwrap();
        assert_eq!(report.init(), Err(WebError::AlreadyInitialized));
    }

    #[test]
    fn init_reveals_sections_in_view() {
        let mut report = report();
        report.init().unwrap();
        let outputs = report.take_outputs();
        assert_eq!(revealed(&outputs), vec!["hero"]);
        assert_eq!(
            outputs.navigation.and_then(|n| n.active_section_id),
            Some(SectionId::new("hero"))
        );
        assert!(report.take_outputs().is_empty());
    }

    #[test]
    fn scroll_burst_applies_latest() {
        let mut report = report();
        report.init().unwrap();
        report.take_outputs();

        report.advance_time(ms(100));
        report.geometry_mut().scroll_by(1000.0);
        report.push_event(PageEvent::Scroll { y: 500.0 });
        report.push_event(PageEvent::Scroll { y: 1000.0 });
        let result = report.step().unwrap();
        assert_eq!(result.events_processed, 2);
        assert!(result.scroll_pending);

        report.advance_time(ms(16));
        let result = report.step().unwrap();
        assert!(!result.scroll_pending);
        assert_eq!(
            report.model().map(|m| m.page().tracker().viewport().scroll_y),
            Some(1000.0)
        );

        let outputs = report.take_outputs();
        assert_eq!(revealed(&outputs), vec!["abstract"]);
        assert_eq!(
            outputs.navigation.and_then(|n| n.active_section_id),
            Some(SectionId::new("abstract"))
        );
    }

    #[test]
    fn pending_scroll_lands_before_click() {
        let mut report = report();
        report.init().unwrap();
        report.take_outputs();

        report.advance_time(ms(100));
        report.push_event(PageEvent::Scroll { y: 10.0 });
        report.push_event(PageEvent::Scroll { y: 20.0 });
        report.push_event(PageEvent::Click(folio_core::event::ClickTarget::Step(2)));
        report.step().unwrap();

        let outputs = report.take_outputs();
        assert_eq!(outputs.selections, vec![SelectionChange::Step(2)]);
        assert_eq!(
            report.model().map(|m| m.page().tracker().viewport().scroll_y),
            Some(20.0)
        );
    }

    #[test]
    fn unmount_drops_state() {
        let mut report = report();
        report.init().unwrap();
        report.push_event(PageEvent::Scroll { y: 1.0 });
        report.unmount();
        assert!(report.model().is_none());
        assert_eq!(report.step(), Err(WebError::NotInitialized));
    }

    #[test]
    fn unmount_discards_undelivered_outputs() {
        let mut report = report();
        report.init().unwrap();
        report.advance_time(ms(100));
        report.push_event(PageEvent::Scroll { y: 10.0 });
        report.push_event(PageEvent::Scroll { y: 20.0 });
        assert!(report.step().unwrap().scroll_pending);

        report.unmount();
        assert!(report.take_outputs().is_empty());
    }

    #[test]
    fn remount_after_unmount_starts_fresh() {
        let mut report = report();
        report.init().unwrap();
        report.step().unwrap();
        report.unmount();

        report.init().unwrap();
        let outputs = report.take_outputs();
        assert_eq!(revealed(&outputs), vec!["hero"]);
        let result = report.step().unwrap();
        assert_eq!(result.frame_idx, 1);
        assert!(!result.scroll_pending);
        assert!(report.take_outputs().is_empty());
    }
}
