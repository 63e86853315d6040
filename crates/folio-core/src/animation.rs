#![forbid(unsafe_code)]

//! Animation primitives for entrance transitions.
//!
//! Time-based animations produce normalized `f32` values in [0.0, 1.0]. They
//! are only needed by hosts that step transitions themselves; browser hosts
//! hand the declarative parameters (duration, [`Easing`], offset) to their
//! own transition engine and never tick anything.
//!
//! Time is supplied by the caller through [`Animation::tick`], so stepping is
//! deterministic and never sleeps.

pub mod stagger;

use std::time::Duration;

// ---------------------------------------------------------------------------
// Easing functions
// ---------------------------------------------------------------------------

/// Easing function signature: maps `t` in [0, 1] to output in [0, 1].
pub type EasingFn = fn(f32) -> f32;

/// Identity easing (constant velocity).
#[inline]
pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Quadratic ease-in (slow start).
#[inline]
pub fn ease_in(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t
}

/// Quadratic ease-out (slow end).
#[inline]
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Quadratic ease-in-out (slow start and end).
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Named easing curve, carried in declarative transition instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Easing {
    /// Constant velocity.
    Linear,
    /// Slow start.
    EaseIn,
    /// Slow end.
    #[default]
    EaseOut,
    /// Slow start and end.
    EaseInOut,
}

impl Easing {
    /// The curve as a function.
    #[must_use]
    pub fn as_fn(self) -> EasingFn {
        match self {
            Self::Linear => linear,
            Self::EaseIn => ease_in,
            Self::EaseOut => ease_out,
            Self::EaseInOut => ease_in_out,
        }
    }

    /// Apply the curve to `t`.
    #[inline]
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        (self.as_fn())(t)
    }

}

// ---------------------------------------------------------------------------
// Animation trait
// ---------------------------------------------------------------------------

/// A time-based animation producing values in [0.0, 1.0].
pub trait Animation {
    /// Advance the animation by `dt`.
    fn tick(&mut self, dt: Duration);

    /// Whether the animation has reached its end.
    fn is_complete(&self) -> bool;

    /// Current output value, clamped to [0.0, 1.0].
    fn value(&self) -> f32;

    /// Reset the animation to its initial state.
    fn reset(&mut self);
}

/// Normalized progress of `elapsed` over `duration`.
fn progress(elapsed: Duration, duration: Duration) -> f32 {
    let t = elapsed.as_secs_f64() / duration.as_secs_f64();
    (t as f32).clamp(0.0, 1.0)
}

/// Zero durations become one nanosecond so progress never divides by zero.
fn non_zero(duration: Duration) -> Duration {
    if duration.is_zero() {
        Duration::from_nanos(1)
    } else {
        duration
    }
}

// ---------------------------------------------------------------------------
// Fade
// ---------------------------------------------------------------------------

/// Progression from 0.0 to 1.0 over a duration, used for opacity.
///
/// Tracks elapsed time as [`Duration`] so accumulation does not drift.
#[derive(Debug, Clone, Copy)]
pub struct Fade {
    elapsed: Duration,
    duration: Duration,
    easing: Easing,
}

impl Fade {
    /// Create a fade with the given duration and linear easing.
    pub fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration: non_zero(duration),
            easing: Easing::Linear,
        }
    }

    /// Set the easing curve (builder).
    #[must_use]
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Raw linear progress (before easing), in [0.0, 1.0].
    pub fn raw_progress(&self) -> f32 {
        progress(self.elapsed, self.duration)
    }
}

impl Animation for Fade {
    fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn value(&self) -> f32 {
        self.easing.apply(self.raw_progress())
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}

// ---------------------------------------------------------------------------
// Slide
// ---------------------------------------------------------------------------

/// Interpolates a pixel offset from `from` to `to` over a duration.
///
/// [`Animation::value`] returns the eased progress; use [`Slide::offset`]
/// for the interpolated offset. Defaults to ease-out.
#[derive(Debug, Clone, Copy)]
pub struct Slide {
    from: f32,
    to: f32,
    elapsed: Duration,
    duration: Duration,
    easing: Easing,
}

impl Slide {
    /// Create a slide from `from` to `to` pixels over `duration`.
    pub fn new(from: f32, to: f32, duration: Duration) -> Self {
        Self {
            from,
            to,
            elapsed: Duration::ZERO,
            duration: non_zero(duration),
            easing: Easing::EaseOut,
        }
    }

    /// Set the easing curve (builder).
    #[must_use]
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Current interpolated offset in pixels.
    pub fn offset(&self) -> f32 {
        let t = self.value();
        self.from + (self.to - self.from) * t
    }
}

impl Animation for Slide {
    fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn value(&self) -> f32 {
        self.easing.apply(progress(self.elapsed, self.duration))
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}

// ---------------------------------------------------------------------------
// Parallel
// ---------------------------------------------------------------------------

/// Play animations `A` and `B` simultaneously.
///
/// `value()` returns the average of both values. Completes when both complete.
#[derive(Debug, Clone, Copy)]
pub struct Parallel<A, B> {
    a: A,
    b: B,
}

impl<A: Animation, B: Animation> Parallel<A, B> {
    /// Create a new parallel animation that plays `a` and `b` simultaneously.
    pub fn new(a: A, b: B) -> Self {
        Self { a, b }
    }

    /// Access the first animation.
    pub fn first(&self) -> &A {
        &self.a
    }

    /// Access the second animation.
    pub fn second(&self) -> &B {
        &self.b
    }
}

impl<A: Animation, B: Animation> Animation for Parallel<A, B> {
    fn tick(&mut self, dt: Duration) {
        if !self.a.is_complete() {
            self.a.tick(dt);
        }
        if !self.b.is_complete() {
            self.b.tick(dt);
        }
    }

    fn is_complete(&self) -> bool {
        self.a.is_complete() && self.b.is_complete()
    }

    fn value(&self) -> f32 {
        (self.a.value() + self.b.value()) / 2.0
    }

    fn reset(&mut self) {
        self.a.reset();
        self.b.reset();
    }
}

/// Create a [`Parallel`] pair from two animations.
pub fn parallel<A: Animation, B: Animation>(a: A, b: B) -> Parallel<A, B> {
    Parallel::new(a, b)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const MS_100: Duration = Duration::from_millis(100);
    const MS_300: Duration = Duration::from_millis(300);
    const MS_600: Duration = Duration::from_millis(600);

    #[test]
    fn easing_endpoints() {
        for easing in [Easing::Linear, Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut] {
            assert!(easing.apply(0.0).abs() < f32::EPSILON, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < f32::EPSILON, "{easing:?} at 1");
        }
    }

    #[test]
    fn easing_clamps_input() {
        assert!((linear(-1.0) - 0.0).abs() < f32::EPSILON);
        assert!((ease_out(1.5) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn ease_out_leads_linear() {
        assert!(ease_out(0.5) > linear(0.5));
        assert!(ease_in(0.5) < linear(0.5));
    }

    #[test]
    fn fade_runs_zero_to_one() {
        let mut fade = Fade::new(MS_600);
        assert!(fade.value().abs() < f32::EPSILON);
        fade.tick(MS_300);
        assert!((fade.value() - 0.5).abs() < 0.001);
        fade.tick(MS_300);
        assert!(fade.is_complete());
        assert!((fade.value() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn fade_zero_duration_completes_on_first_tick() {
        let mut fade = Fade::new(Duration::ZERO);
        fade.tick(Duration::from_nanos(1));
        assert!(fade.is_complete());
    }

    #[test]
    fn slide_offset_reaches_target() {
        let mut slide = Slide::new(30.0, 0.0, MS_600);
        assert!((slide.offset() - 30.0).abs() < f32::EPSILON);
        slide.tick(MS_300);
        // Ease-out has covered three quarters of the distance at half time.
        assert!((slide.offset() - 7.5).abs() < 0.01);
        slide.tick(MS_600);
        assert!(slide.offset().abs() < f32::EPSILON);
    }

    #[test]
    fn slide_reset() {
        let mut slide = Slide::new(-30.0, 0.0, MS_100);
        slide.tick(MS_100);
        slide.reset();
        assert!(!slide.is_complete());
        assert!((slide.offset() + 30.0).abs() < f32::EPSILON);
    }

    #[test]
    fn parallel_completes_when_both_do() {
        let mut par = parallel(Fade::new(MS_100), Slide::new(30.0, 0.0, MS_300));
        par.tick(MS_100);
        assert!(par.first().is_complete());
        assert!(!par.is_complete());
        par.tick(Duration::from_millis(200));
        assert!(par.is_complete());
        assert!(par.second().offset().abs() < f32::EPSILON);
    }
}
