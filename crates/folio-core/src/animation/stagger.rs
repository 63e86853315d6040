#![forbid(unsafe_code)]

//! Stagger utilities: cascading delays and offsets for list entrances.
//!
//! A list whose items enter one after another (the timeline, for instance)
//! gives item `i` a start delay from [`stagger_offsets`] and an entrance
//! offset that alternates sides from [`alternating_offsets`].
//!
//! # Invariants
//!
//! 1. `stagger_offsets(0, ..)` returns an empty vec.
//! 2. `offset[i] = i * delay` exactly, so the first offset is always zero.

use std::time::Duration;

/// Start delays for `count` items, `delay` apart.
#[must_use]
pub fn stagger_offsets(count: usize, delay: Duration) -> Vec<Duration> {
    // Integer arithmetic keeps offsets exact.
    (0..count)
        .map(|i| delay.saturating_mul(u32::try_from(i).unwrap_or(u32::MAX)))
        .collect()
}

/// Entrance offsets alternating in sign: `-magnitude` for even items,
/// `+magnitude` for odd ones.
///
/// Matches a two-column layout where even items enter from one side and odd
/// items from the other.
#[must_use]
pub fn alternating_offsets(count: usize, magnitude: f32) -> Vec<f32> {
    (0..count)
        .map(|i| if i % 2 == 0 { -magnitude } else { magnitude })
        .collect()
}
