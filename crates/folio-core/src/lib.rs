#![forbid(unsafe_code)]

//! Core: geometry, page events, animation primitives, and viewport tracking.

pub mod animation;
pub mod category;
pub mod event;
pub mod geometry;
pub mod logging;
pub mod viewport;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, info, trace, warn};
