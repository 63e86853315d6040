#![forbid(unsafe_code)]

//! Closed category enumerations and the records that carry them.

/// A closed enumeration of categories with a fixed presentation order.
///
/// `ALL` must be non-empty and list every variant exactly once; the first
/// entry is the default selection of a tab filter.
pub trait CategorySet: Copy + Eq + core::fmt::Debug + 'static {
    /// Every variant in presentation order.
    const ALL: &'static [Self];

    /// Stable identifier (e.g. the tab's value attribute).
    fn key(self) -> &'static str;

    /// Human-readable label.
    fn label(self) -> &'static str;

    /// The first variant in presentation order.
    fn first() -> Self {
        Self::ALL[0]
    }

    /// Position of `self` within [`ALL`](Self::ALL).
    fn position(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }

    /// Look a variant up by its [`key`](Self::key).
    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.key() == key)
    }
}

/// A record that belongs to exactly one category of `C`.
pub trait Categorized<C: CategorySet> {
    /// The record's category.
    fn category(&self) -> C;
}
