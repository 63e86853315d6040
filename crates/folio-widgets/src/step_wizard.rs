#![forbid(unsafe_code)]

//! Linear step selector.
//!
//! `active_index` always lies in `[0, step_count - 1]`. Requests outside that
//! range, including negative ones coming straight from the host, are dropped
//! without changing state. A wizard with zero steps has no active step and
//! ignores every request.

/// Selection state for a fixed sequence of steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepWizard {
    step_count: usize,
    active: usize,
}

impl StepWizard {
    /// Create a wizard on the first step.
    #[must_use]
    pub fn new(step_count: usize) -> Self {
        Self {
            step_count,
            active: 0,
        }
    }

    /// Number of steps.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Index of the active step.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Activate step `index`. Returns whether the request was accepted.
    pub fn select(&mut self, index: i64) -> bool {
        match usize::try_from(index) {
            Ok(index) if index < self.step_count => {
                self.active = index;
                true
            }
            _ => {
                folio_core::trace!(index, steps = self.step_count, "step index out of range");
                false
            }
        }
    }

    /// Advance one step; no-op on the last step.
    pub fn next(&mut self) -> bool {
        self.select(self.active as i64 + 1)
    }

    /// Go back one step; no-op on the first step.
    pub fn prev(&mut self) -> bool {
        self.select(self.active as i64 - 1)
    }

    /// Whether the active step is the last one.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.active + 1 >= self.step_count
    }

    /// The active element of `steps`, if there is one.
    #[must_use]
    pub fn active_step<'a, T>(&self, steps: &'a [T]) -> Option<&'a T> {
        steps.get(self.active)
    }

    /// "Step X/Y", 1-based. Empty for a wizard without steps.
    #[must_use]
    pub fn label(&self) -> String {
        if self.step_count == 0 {
            return String::new();
        }
        format!("Step {}/{}", self.active + 1, self.step_count)
    }
}
