#![forbid(unsafe_code)]

//! Navigation bar model.
//!
//! Holds the fixed link list, the highlighted entry, and the style variant.
//! Highlight and style are fed from the page's navigation state;
//! [`NavBar::apply`] reports whether either changed so the renderer can skip
//! redundant repaints.

use folio_core::viewport::SectionId;

/// One link in the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    /// Section the link scrolls to.
    pub id: SectionId,
    /// Link text.
    pub label: &'static str,
}

impl NavItem {
    /// Create an item.
    #[must_use]
    pub const fn new(id: &'static str, label: &'static str) -> Self {
        Self {
            id: SectionId::new(id),
            label,
        }
    }
}

/// Visual variant of the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavBarStyle {
    /// At the top of the page: no background.
    #[default]
    Transparent,
    /// Scrolled: opaque background with a shadow.
    Elevated,
}

/// A link paired with its highlight flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    /// The link.
    pub item: NavItem,
    /// Whether this link is the active section.
    pub highlighted: bool,
}

/// Navigation bar state.
#[derive(Debug, Clone)]
pub struct NavBar {
    items: &'static [NavItem],
    active: Option<SectionId>,
    scrolled: bool,
}

impl NavBar {
    /// Create a bar over a fixed item list.
    #[must_use]
    pub fn new(items: &'static [NavItem]) -> Self {
        Self {
            items,
            active: None,
            scrolled: false,
        }
    }

    /// The link list.
    #[must_use]
    pub fn items(&self) -> &'static [NavItem] {
        self.items
    }

    /// Active section, if any.
    #[must_use]
    pub fn active(&self) -> Option<SectionId> {
        self.active
    }

    /// Apply navigation state. Returns whether highlight or style changed.
    pub fn apply(&mut self, active: Option<SectionId>, scrolled: bool) -> bool {
        let changed = self.active != active || self.scrolled != scrolled;
        self.active = active;
        self.scrolled = scrolled;
        changed
    }

    /// Links with their highlight flags, in bar order.
    ///
    /// The active section may have no link (e.g. the hero); then nothing is
    /// highlighted.
    pub fn entries(&self) -> impl Iterator<Item = NavEntry> + '_ {
        self.items.iter().map(|item| NavEntry {
            item: *item,
            highlighted: Some(item.id) == self.active,
        })
    }

    /// Current style variant.
    #[must_use]
    pub fn style(&self) -> NavBarStyle {
        if self.scrolled {
            NavBarStyle::Elevated
        } else {
            NavBarStyle::Transparent
        }
    }

    /// Resolve a link click to its scroll target, or `None` if the bar has
    /// no link for `id`.
    #[must_use]
    pub fn follow(&self, id: SectionId) -> Option<SectionId> {
        self.items.iter().find(|item| item.id == id).map(|item| item.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEMS: [NavItem; 3] = [
        NavItem::new("abstract", "Abstract"),
        NavItem::new("models", "Models"),
        NavItem::new("repos", "Repos"),
    ];

    fn highlighted(bar: &NavBar) -> Vec<&'static str> {
        bar.entries()
            .filter(|e| e.highlighted)
            .map(|e| e.item.id.as_str())
            .collect()
    }

    #[test]
    fn highlights_active_only() {
        let mut bar = NavBar::new(&ITEMS);
        assert!(highlighted(&bar).is_empty());
        assert!(bar.apply(Some(SectionId::new("models")), false));
        assert_eq!(highlighted(&bar), ["models"]);
    }

    #[test]
    fn section_without_link_highlights_nothing() {
        let mut bar = NavBar::new(&ITEMS);
        bar.apply(Some(SectionId::new("hero")), false);
        assert!(highlighted(&bar).is_empty());
    }

    #[test]
    fn apply_reports_changes() {
        let mut bar = NavBar::new(&ITEMS);
        let id = Some(SectionId::new("repos"));
        assert!(bar.apply(id, false));
        assert!(!bar.apply(id, false));
        assert!(bar.apply(id, true));
        assert_eq!(bar.style(), NavBarStyle::Elevated);
    }

    #[test]
    fn follow_only_known_links() {
        let bar = NavBar::new(&ITEMS);
        assert_eq!(bar.follow(SectionId::new("hero")), None);
        assert_eq!(
            bar.follow(SectionId::new("models")),
            Some(SectionId::new("models"))
        );
    }
}
