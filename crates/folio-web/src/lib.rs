#![forbid(unsafe_code)]

//! `folio-web` wires the report page to a browser-like host.
//!
//! Design goals:
//! - **Host-driven I/O**: the embedding environment (JS) pushes page events
//!   and element extents.
//! - **Deterministic time**: the host advances a monotonic clock explicitly.
//! - **No blocking / no threads**: every call returns after one batch.
//!
//! The crate does not bind to `wasm-bindgen`; a thin JS shim owns the DOM
//! observers and forwards to [`step_report::StepReport`].

pub mod charts;
pub mod geometry;
pub mod model;
pub mod step_report;

use core::fmt;
use core::time::Duration;

use folio_runtime::page::MountError;

pub use geometry::HostGeometry;
pub use model::{ModelOutput, ReportModel, SelectionChange};
pub use step_report::{ReportOutputs, StepReport, StepResult};

/// Host adapter error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebError {
    /// The section list was rejected.
    Mount(MountError),
    /// [`StepReport::init`] was called twice.
    AlreadyInitialized,
    /// [`StepReport::step`] was called before [`StepReport::init`].
    NotInitialized,
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mount(err) => write!(f, "mount failed: {err}"),
            Self::AlreadyInitialized => f.write_str("report already initialized"),
            Self::NotInitialized => f.write_str("report stepped before init"),
        }
    }
}

impl std::error::Error for WebError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Mount(err) => Some(err),
            Self::AlreadyInitialized | Self::NotInitialized => None,
        }
    }
}

impl From<MountError> for WebError {
    fn from(err: MountError) -> Self {
        Self::Mount(err)
    }
}

/// Deterministic monotonic clock controlled by the host.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeterministicClock {
    now: Duration,
}

impl DeterministicClock {
    /// Create a clock starting at `0`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            now: Duration::ZERO,
        }
    }

    /// Current monotonic time.
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Set current monotonic time. Moving backwards is ignored.
    pub fn set(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }

    /// Advance monotonic time by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        self.now = self.now.saturating_add(dt);
    }
}
