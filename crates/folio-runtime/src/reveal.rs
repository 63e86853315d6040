#![forbid(unsafe_code)]

//! One-shot entrance reveals.
//!
//! Each section owns an [`AnimationOrchestrator`]. The orchestrator starts
//! [`AnimationState::Hidden`] and flips to [`AnimationState::Revealed`] the
//! first time it sees an intersecting [`VisibilityReport`] for its section.
//! That transition queues exactly one [`RevealEffect`], a declarative
//! instruction for the renderer; the core never touches pixels.
//!
//! # Invariants
//!
//! 1. `Revealed` is absorbing: no report moves a section back to `Hidden`.
//! 2. At most one effect is ever queued per orchestrator.
//! 3. [`drain_effects`](AnimationOrchestrator::drain_effects) empties the
//!    queue; effects are never replayed.
//! 4. Reports addressed to another section are ignored.
//!
//! [`StaggeredReveal`] applies the same rules per item of a list whose
//! entries enter one after another.

use std::time::Duration;

use folio_core::animation::stagger::{alternating_offsets, stagger_offsets};
use folio_core::animation::{Animation, Easing, Fade, Parallel, Slide, parallel};
use folio_core::viewport::{SectionId, VisibilityReport};

/// Reveal lifecycle of one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationState {
    /// Not yet shown; rendered transparent and offset.
    #[default]
    Hidden,
    /// Entrance has been triggered. Terminal.
    Revealed,
}

/// Parameters of the entrance transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    /// Transition duration.
    pub duration: Duration,
    /// Starting vertical offset in pixels; the transition ends at 0.
    pub offset_px: f32,
    /// Timing curve.
    pub easing: Easing,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(600),
            offset_px: 30.0,
            easing: Easing::EaseOut,
        }
    }
}

impl RevealConfig {
    /// Set the transition duration.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the starting vertical offset.
    #[must_use]
    pub fn with_offset(mut self, offset_px: f32) -> Self {
        self.offset_px = offset_px;
        self
    }

    /// Set the timing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// "Play the entrance now" instruction for the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealEffect {
    /// Section to reveal.
    pub section_id: SectionId,
    /// Transition duration.
    pub duration: Duration,
    /// Vertical offset to start from (fades to 0).
    pub offset_px: f32,
    /// Timing curve.
    pub easing: Easing,
}

impl RevealEffect {
    /// A steppable transition for hosts without their own transition engine.
    #[must_use]
    pub fn transition(&self) -> RevealTransition {
        RevealTransition::new(self.duration, self.offset_px, self.easing)
    }
}

/// One interpolated frame of an entrance transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealFrame {
    /// Opacity in [0.0, 1.0].
    pub opacity: f32,
    /// Vertical offset in pixels.
    pub offset_px: f32,
}

/// Opacity fade and vertical slide played together.
#[derive(Debug, Clone, Copy)]
pub struct RevealTransition {
    inner: Parallel<Fade, Slide>,
}

impl RevealTransition {
    /// Build a transition from `offset_px` to 0 and opacity 0 to 1.
    #[must_use]
    pub fn new(duration: Duration, offset_px: f32, easing: Easing) -> Self {
        Self {
            inner: parallel(
                Fade::new(duration).easing(easing),
                Slide::new(offset_px, 0.0, duration).easing(easing),
            ),
        }
    }

    /// Current frame.
    #[must_use]
    pub fn frame(&self) -> RevealFrame {
        RevealFrame {
            opacity: self.inner.first().value(),
            offset_px: self.inner.second().offset(),
        }
    }
}

impl Animation for RevealTransition {
    fn tick(&mut self, dt: Duration) {
        self.inner.tick(dt);
    }

    fn is_complete(&self) -> bool {
        self.inner.is_complete()
    }

    fn value(&self) -> f32 {
        self.inner.first().value()
    }

    fn reset(&mut self) {
        self.inner.reset();
    }
}

/// Owns the reveal state of one section.
#[derive(Debug, Clone)]
pub struct AnimationOrchestrator {
    section_id: SectionId,
    config: RevealConfig,
    state: AnimationState,
    effects: Vec<RevealEffect>,
}

impl AnimationOrchestrator {
    /// Create a hidden orchestrator for `section_id`.
    #[must_use]
    pub fn new(section_id: SectionId, config: RevealConfig) -> Self {
        Self {
            section_id,
            config,
            state: AnimationState::Hidden,
            effects: Vec::new(),
        }
    }

    /// The section this orchestrator animates.
    #[must_use]
    pub fn section_id(&self) -> SectionId {
        self.section_id
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Whether the entrance has been triggered.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.state == AnimationState::Revealed
    }

    /// Apply one visibility report.
    pub fn evaluate(&mut self, report: &VisibilityReport) -> AnimationState {
        if report.section_id != self.section_id {
            folio_core::trace!(
                section = %self.section_id,
                report = %report.section_id,
                "report for another section ignored"
            );
            return self.state;
        }
        if self.state == AnimationState::Hidden && report.is_intersecting {
            self.state = AnimationState::Revealed;
            folio_core::debug!(
                section = %self.section_id,
                top = report.top_offset_px,
                "section revealed"
            );
            self.effects.push(RevealEffect {
                section_id: self.section_id,
                duration: self.config.duration,
                offset_px: self.config.offset_px,
                easing: self.config.easing,
            });
        }
        self.state
    }

    /// Take the queued effects.
    pub fn drain_effects(&mut self) -> Vec<RevealEffect> {
        std::mem::take(&mut self.effects)
    }

    /// Number of queued effects.
    #[must_use]
    pub fn pending_effect_count(&self) -> usize {
        self.effects.len()
    }
}

// ---------------------------------------------------------------------------
// Staggered list reveals
// ---------------------------------------------------------------------------

/// Parameters for list-item entrances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaggerConfig {
    /// Duration of each item's transition.
    pub item_duration: Duration,
    /// Extra delay per item position.
    pub step: Duration,
    /// Horizontal entrance offset; sign alternates per item.
    pub offset_px: f32,
    /// Viewport inset an item must cross before revealing.
    pub margin_px: f64,
    /// Timing curve.
    pub easing: Easing,
}

impl Default for StaggerConfig {
    fn default() -> Self {
        Self {
            item_duration: Duration::from_millis(500),
            step: Duration::from_millis(50),
            offset_px: 30.0,
            margin_px: 50.0,
            easing: Easing::EaseOut,
        }
    }
}

/// Entrance instruction for one list item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemRevealEffect {
    /// Item position in the list.
    pub index: usize,
    /// Delay before the transition starts.
    pub delay: Duration,
    /// Transition duration.
    pub duration: Duration,
    /// Horizontal offset to start from.
    pub offset_x_px: f32,
    /// Timing curve.
    pub easing: Easing,
}

/// One-shot reveals for each item of a list, with cascading delays.
#[derive(Debug, Clone)]
pub struct StaggeredReveal {
    config: StaggerConfig,
    states: Vec<AnimationState>,
    delays: Vec<Duration>,
    offsets: Vec<f32>,
    effects: Vec<ItemRevealEffect>,
}

impl StaggeredReveal {
    /// Create hidden state for `count` items.
    #[must_use]
    pub fn new(count: usize, config: StaggerConfig) -> Self {
        Self {
            states: vec![AnimationState::Hidden; count],
            delays: stagger_offsets(count, config.step),
            offsets: alternating_offsets(count, config.offset_px),
            effects: Vec::new(),
            config,
        }
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &StaggerConfig {
        &self.config
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// State of item `index`, if it exists.
    #[must_use]
    pub fn state(&self, index: usize) -> Option<AnimationState> {
        self.states.get(index).copied()
    }

    /// Apply visibility for item `index`. Out-of-range indices are ignored.
    pub fn evaluate(&mut self, index: usize, is_intersecting: bool) -> Option<AnimationState> {
        let state = self.states.get_mut(index)?;
        if *state == AnimationState::Hidden && is_intersecting {
            *state = AnimationState::Revealed;
            self.effects.push(ItemRevealEffect {
                index,
                delay: self.delays[index],
                duration: self.config.item_duration,
                offset_x_px: self.offsets[index],
                easing: self.config.easing,
            });
        }
        Some(*state)
    }

    /// Take the queued item effects.
    pub fn drain_effects(&mut self) -> Vec<ItemRevealEffect> {
        std::mem::take(&mut self.effects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(id: &'static str, intersecting: bool) -> VisibilityReport {
        VisibilityReport::new(SectionId::new(id), 10.0, intersecting)
    }

    #[test]
    fn starts_hidden() {
        let orch = AnimationOrchestrator::new(SectionId::new("models"), RevealConfig::default());
        assert_eq!(orch.state(), AnimationState::Hidden);
        assert_eq!(orch.pending_effect_count(), 0);
    }

    #[test]
    fn non_intersecting_keeps_hidden() {
        let mut orch = AnimationOrchestrator::new(SectionId::new("models"), RevealConfig::default());
        assert_eq!(orch.evaluate(&report("models", false)), AnimationState::Hidden);
        assert!(orch.drain_effects().is_empty());
    }

    #[test]
    fn first_intersection_reveals_once() {
        let mut orch = AnimationOrchestrator::new(SectionId::new("models"), RevealConfig::default());
        for _ in 0..5 {
            assert_eq!(orch.evaluate(&report("models", true)), AnimationState::Revealed);
        }
        let effects = orch.drain_effects();
        assert_eq!(effects.len(), 1);
        assert_eq!(effects[0].duration, Duration::from_millis(600));
        assert_eq!(effects[0].offset_px, 30.0);
        assert_eq!(effects[0].easing, Easing::EaseOut);
    }

    #[test]
    fn revealed_ignores_leaving_view() {
        let mut orch = AnimationOrchestrator::new(SectionId::new("models"), RevealConfig::default());
        orch.evaluate(&report("models", true));
        orch.drain_effects();
        assert_eq!(orch.evaluate(&report("models", false)), AnimationState::Revealed);
        assert_eq!(orch.evaluate(&report("models", true)), AnimationState::Revealed);
        assert!(orch.drain_effects().is_empty());
    }

    #[test]
    fn foreign_report_ignored() {
        let mut orch = AnimationOrchestrator::new(SectionId::new("models"), RevealConfig::default());
        assert_eq!(orch.evaluate(&report("repos", true)), AnimationState::Hidden);
    }

    #[test]
    fn transition_frames() {
        let effect = RevealEffect {
            section_id: SectionId::new("repos"),
            duration: Duration::from_millis(600),
            offset_px: 30.0,
            easing: Easing::EaseOut,
        };
        let mut t = effect.transition();
        assert_eq!(t.frame(), RevealFrame { opacity: 0.0, offset_px: 30.0 });
        t.tick(Duration::from_millis(600));
        assert!(t.is_complete());
        let frame = t.frame();
        assert!((frame.opacity - 1.0).abs() < f32::EPSILON);
        assert!(frame.offset_px.abs() < f32::EPSILON);
    }

    #[test]
    fn stagger_delays_and_sides() {
        let mut list = StaggeredReveal::new(4, StaggerConfig::default());
        list.evaluate(3, true);
        list.evaluate(0, true);
        list.evaluate(0, true);
        let effects = list.drain_effects();
        assert_eq!(effects.len(), 2);
        assert_eq!(effects[0].index, 3);
        assert_eq!(effects[0].delay, Duration::from_millis(150));
        assert_eq!(effects[0].offset_x_px, 30.0);
        assert_eq!(effects[1].delay, Duration::ZERO);
        assert_eq!(effects[1].offset_x_px, -30.0);
    }

    #[test]
    fn stagger_out_of_range_ignored() {
        let mut list = StaggeredReveal::new(2, StaggerConfig::default());
        assert_eq!(list.evaluate(9, true), None);
        assert!(list.drain_effects().is_empty());
    }
}
