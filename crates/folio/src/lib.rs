#![forbid(unsafe_code)]

//! Folio public facade crate.
//!
//! Re-exports the types a host needs to mount the report page and drive it
//! frame by frame, plus a prelude for everyday use.

// --- Core re-exports -------------------------------------------------------

pub use folio_core::animation::Easing;
pub use folio_core::category::{Categorized, CategorySet};
pub use folio_core::event::{ClickTarget, Control, KeyCode, PageEvent};
pub use folio_core::geometry::{Extent, Viewport};
pub use folio_core::viewport::{
    Measure, RegionHandle, Section, SectionId, TrackerConfig, ViewportTracker,
};

// --- Runtime re-exports ----------------------------------------------------

pub use folio_runtime::{
    AnimationState, ItemRevealEffect, MountError, NavigationState, Page, PageConfig, PageOutput,
    RevealEffect, StaggerConfig,
};

// --- Widget re-exports -----------------------------------------------------

pub use folio_widgets::{Chart, ChartKind, ChartSpec, NavBar, StepWizard, TabFilter};

// --- Web re-exports --------------------------------------------------------

#[cfg(feature = "web")]
pub use folio_web::model::ReportConfig;
#[cfg(feature = "web")]
pub use folio_web::{
    DeterministicClock, HostGeometry, ReportModel, ReportOutputs, SelectionChange, StepReport,
    StepResult, WebError,
};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        ClickTarget, Control, Extent, KeyCode, Page, PageConfig, PageEvent, RegionHandle,
        RevealEffect, Section, SectionId, Viewport,
    };

    #[cfg(feature = "web")]
    pub use crate::{HostGeometry, ReportConfig, ReportOutputs, StepReport, WebError};

    pub use crate::{content, core, runtime, widgets};
    #[cfg(feature = "web")]
    pub use crate::web;
}

pub use folio_content as content;
pub use folio_core as core;
pub use folio_runtime as runtime;
#[cfg(feature = "web")]
pub use folio_web as web;
pub use folio_widgets as widgets;
