#![forbid(unsafe_code)]

//! Scroll stream coalescer.
//!
//! Browsers can fire scroll events far faster than frames are painted. The
//! coalescer lets the host process at most one scroll per frame budget:
//!
//! - **Latest-wins**: only the most recent offset in a burst is applied.
//! - **Bounded latency**: a pending offset is applied no later than
//!   `hard_deadline` after it first arrived.
//! - **Deterministic**: time is passed in by the host, so identical event
//!   sequences yield identical decisions.
//!
//! ```ignore
//! let mut coalescer = ScrollCoalescer::new(CoalescerConfig::default());
//! match coalescer.handle_scroll_at(412.0, now) {
//!     CoalesceAction::Apply { y } => page.handle_scroll(y, &geometry),
//!     CoalesceAction::None => {}
//! }
//! // once per frame
//! if let CoalesceAction::Apply { y } = coalescer.tick_at(now) { /* ... */ }
//! ```
//!
//! # Decision rule
//!
//! 1. Nothing has been applied yet: **apply**.
//! 2. `now - last_apply >= frame_budget`: **apply**.
//! 3. `now - first_pending >= hard_deadline`: **apply** (forced).
//! 4. Otherwise **coalesce**.

use std::time::Duration;

/// Configuration for the scroll coalescer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoalescerConfig {
    /// Minimum spacing between applied scrolls (~60fps by default).
    pub frame_budget: Duration,
    /// Upper bound on how long a pending offset may wait.
    pub hard_deadline: Duration,
}

impl Default for CoalescerConfig {
    fn default() -> Self {
        Self {
            frame_budget: Duration::from_millis(16),
            hard_deadline: Duration::from_millis(100),
        }
    }
}

impl CoalescerConfig {
    /// Set the frame budget.
    #[must_use]
    pub fn with_frame_budget(mut self, budget: Duration) -> Self {
        self.frame_budget = budget;
        self
    }

    /// Set the hard deadline.
    #[must_use]
    pub fn with_hard_deadline(mut self, deadline: Duration) -> Self {
        self.hard_deadline = deadline;
        self
    }
}

/// Action returned by the coalescer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoalesceAction {
    /// Nothing to apply now.
    None,
    /// Apply this scroll offset.
    Apply {
        /// Offset to apply.
        y: f64,
    },
}

/// Latest-wins scroll throttle.
#[derive(Debug, Clone)]
pub struct ScrollCoalescer {
    config: CoalescerConfig,
    pending: Option<f64>,
    first_pending_at: Option<Duration>,
    last_apply: Option<Duration>,
    applied: u64,
    coalesced: u64,
}

impl ScrollCoalescer {
    /// Create an idle coalescer.
    #[must_use]
    pub fn new(config: CoalescerConfig) -> Self {
        Self {
            config,
            pending: None,
            first_pending_at: None,
            last_apply: None,
            applied: 0,
            coalesced: 0,
        }
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &CoalescerConfig {
        &self.config
    }

    /// Record a scroll at host time `now`.
    pub fn handle_scroll_at(&mut self, y: f64, now: Duration) -> CoalesceAction {
        if self.pending.is_some() {
            self.coalesced += 1;
        } else {
            self.first_pending_at = Some(now);
        }
        self.pending = Some(y);
        self.decide(now)
    }

    /// Re-evaluate a pending offset at host time `now` (call once per frame).
    pub fn tick_at(&mut self, now: Duration) -> CoalesceAction {
        if self.pending.is_none() {
            return CoalesceAction::None;
        }
        self.decide(now)
    }

    /// Apply any pending offset unconditionally.
    pub fn flush(&mut self, now: Duration) -> Option<f64> {
        match self.apply(now) {
            CoalesceAction::Apply { y } => Some(y),
            CoalesceAction::None => None,
        }
    }

    /// Whether an offset is waiting.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Number of offsets applied so far.
    #[must_use]
    pub fn applied_count(&self) -> u64 {
        self.applied
    }

    /// Number of offsets superseded before being applied.
    #[must_use]
    pub fn coalesced_count(&self) -> u64 {
        self.coalesced
    }

    fn decide(&mut self, now: Duration) -> CoalesceAction {
        let budget_elapsed = self
            .last_apply
            .is_none_or(|last| now.saturating_sub(last) >= self.config.frame_budget);
        let deadline_hit = self
            .first_pending_at
            .is_some_and(|first| now.saturating_sub(first) >= self.config.hard_deadline);
        if budget_elapsed || deadline_hit {
            self.apply(now)
        } else {
            CoalesceAction::None
        }
    }

    fn apply(&mut self, now: Duration) -> CoalesceAction {
        let Some(y) = self.pending.take() else {
            return CoalesceAction::None;
        };
        self.first_pending_at = None;
        self.last_apply = Some(now);
        self.applied += 1;
        CoalesceAction::Apply { y }
    }
}
