#![forbid(unsafe_code)]

//! Tabbed category filter.
//!
//! # Invariants
//!
//! 1. Exactly one category is selected at all times; the initial one is
//!    [`CategorySet::first`].
//! 2. [`TabFilter::visible_records`] returns the records whose category equals
//!    the selection, in their original relative order. An empty result is a
//!    valid state, not an error.
//! 3. Keyboard cycling ([`select_next`](TabFilter::select_next) /
//!    [`select_prev`](TabFilter::select_prev)) wraps around `C::ALL`.

use folio_core::category::{CategorySet, Categorized};

/// Selection state for a row of category tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabFilter<C: CategorySet> {
    selected: C,
}

impl<C: CategorySet> Default for TabFilter<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CategorySet> TabFilter<C> {
    /// Create a filter on the first category.
    #[must_use]
    pub fn new() -> Self {
        Self {
            selected: C::first(),
        }
    }

    /// Start on a specific category.
    #[must_use]
    pub fn with_selected(mut self, category: C) -> Self {
        self.selected = category;
        self
    }

    /// Currently selected category.
    #[must_use]
    pub fn selected(&self) -> C {
        self.selected
    }

    /// Select `category`. Returns whether the selection changed.
    pub fn select(&mut self, category: C) -> bool {
        let changed = self.selected != category;
        self.selected = category;
        changed
    }

    /// Select by tab position. Out-of-range positions are ignored.
    pub fn select_index(&mut self, index: usize) -> bool {
        match C::ALL.get(index) {
            Some(&category) => self.select(category),
            None => {
                folio_core::trace!(index, tabs = C::ALL.len(), "tab index out of range");
                false
            }
        }
    }

    /// Move to the next tab, wrapping to the first.
    pub fn select_next(&mut self) -> bool {
        let next = (self.selected.position() + 1) % C::ALL.len();
        self.select(C::ALL[next])
    }

    /// Move to the previous tab, wrapping to the last.
    pub fn select_prev(&mut self) -> bool {
        let len = C::ALL.len();
        let prev = (self.selected.position() + len - 1) % len;
        self.select(C::ALL[prev])
    }

    /// Records in the selected category, original order preserved.
    #[must_use]
    pub fn visible_records<'a, R: Categorized<C>>(&self, all: &'a [R]) -> Vec<&'a R> {
        all.iter()
            .filter(|record| record.category() == self.selected)
            .collect()
    }
}
