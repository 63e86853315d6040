#![forbid(unsafe_code)]

//! Selection widgets and collaborator contracts for the report page.
//!
//! None of these models render anything. They hold the state a renderer
//! needs and change it only on explicit user selection.

pub mod chart;
pub mod nav_bar;
pub mod step_wizard;
pub mod tab_filter;

pub use chart::{Chart, ChartGeometry, ChartKind, ChartSeries, ChartSpec};
pub use nav_bar::{NavBar, NavBarStyle, NavEntry, NavItem};
pub use step_wizard::StepWizard;
pub use tab_filter::TabFilter;
