#![forbid(unsafe_code)]

//! The report's static dataset.
//!
//! Every record is a `const` with a stable string id. Nothing here is
//! mutated at runtime; the page and chart layers only borrow slices.

pub mod evaluation;
pub mod implementation;
pub mod models;
pub mod references;
pub mod repos;
pub mod sections;
pub mod timeline;

pub use evaluation::{
    EVALUATION_DIMENSIONS, EVALUATION_TOOLS, EvalTab, EvaluationDimension, EvaluationTool,
    RadarPoint, ToolKind,
};
pub use implementation::{IMPLEMENTATION_STEPS, ImplementationStep};
pub use models::{
    ARCHITECTURES, ArchitectureProfile, CITATION_TRENDS, CitationTrend, GENERATION_MODELS,
    GenerationModel,
};
pub use references::{REFERENCES, Reference};
pub use repos::{GITHUB_REPOS, GithubRepo};
pub use sections::{NAV_ITEMS, SECTIONS, TIMELINE_ITEM_REGION_BASE, timeline_item_region};
pub use timeline::{TIMELINE, TimelineEvent, TimelineKind};
