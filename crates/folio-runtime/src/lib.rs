#![forbid(unsafe_code)]

//! Runtime: reveal orchestration, navigation state, scroll coalescing, and
//! the page composition layer that ties them to one viewport tracker.

pub mod navigation;
pub mod page;
pub mod reveal;
pub mod scroll_coalescer;

pub use navigation::{NavConfig, NavigationState, NavigationStateMachine, NavigationUpdate};
pub use page::{MountError, Page, PageConfig, PageOutput};
pub use reveal::{
    AnimationOrchestrator, AnimationState, ItemRevealEffect, RevealConfig, RevealEffect,
    RevealFrame, RevealTransition, StaggerConfig, StaggeredReveal,
};
pub use scroll_coalescer::{CoalesceAction, CoalescerConfig, ScrollCoalescer};
