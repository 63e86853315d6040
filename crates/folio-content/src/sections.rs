#![forbid(unsafe_code)]

//! Page sections in document order, and the links in the navigation bar.
//!
//! Region handles are the section's position; hosts map them to elements.
//! Timeline entries get their own handles above [`TIMELINE_ITEM_REGION_BASE`]
//! so they can reveal one by one.

use folio_core::viewport::{RegionHandle, Section};
use folio_widgets::nav_bar::NavItem;

pub const SECTIONS: &[Section] = &[
    Section::new("hero", 0, RegionHandle(0)),
    Section::new("abstract", 1, RegionHandle(1)),
    Section::new("models", 2, RegionHandle(2)),
    Section::new("evaluation", 3, RegionHandle(3)),
    Section::new("repos", 4, RegionHandle(4)),
    Section::new("timeline", 5, RegionHandle(5)),
    Section::new("implementation", 6, RegionHandle(6)),
    Section::new("references", 7, RegionHandle(7)),
];

/// First region handle used for timeline entries.
pub const TIMELINE_ITEM_REGION_BASE: u32 = 100;

/// Region handle of timeline entry `index`.
#[must_use]
pub const fn timeline_item_region(index: usize) -> RegionHandle {
    RegionHandle(TIMELINE_ITEM_REGION_BASE + index as u32)
}

/// The hero and the bibliography have no link.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem::new("abstract", "摘要"),
    NavItem::new("models", "生成模型"),
    NavItem::new("evaluation", "评估方法"),
    NavItem::new("repos", "开源项目"),
    NavItem::new("timeline", "发展脉络"),
    NavItem::new("implementation", "实现指南"),
];
