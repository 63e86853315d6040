#![forbid(unsafe_code)]

//! Canonical page events.
//!
//! The host translates its DOM event stream (scroll, resize, click, key,
//! focus) into [`PageEvent`]s and feeds them to the runtime in order. All
//! handling is synchronous; nothing here waits.

use crate::viewport::SectionId;

/// A control that can hold keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// The category tab list.
    Tabs,
    /// The step list of the wizard.
    Wizard,
}

/// Something the user clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// A tab trigger, by position in the tab list.
    Tab(usize),
    /// A wizard step button, by raw index. Out-of-range indices are ignored.
    Step(i64),
    /// A navigation anchor.
    NavLink(SectionId),
}

/// Keys the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Home.
    Home,
    /// End.
    End,
}

/// Canonical page event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageEvent {
    /// The document scrolled.
    Scroll {
        /// New vertical scroll offset.
        y: f64,
    },

    /// The viewport was resized.
    Resize {
        /// New viewport width.
        width: f64,
        /// New viewport height.
        height: f64,
    },

    /// A pointer click on an interactive element.
    Click(ClickTarget),

    /// Keyboard focus moved to a control, or left all controls (`None`).
    Focus(Option<Control>),

    /// A key press, delivered to the focused control.
    Key(KeyCode),
}

impl PageEvent {
    /// Whether this event changes page geometry and so requires a
    /// visibility recompute.
    #[must_use]
    pub const fn is_geometry(&self) -> bool {
        matches!(self, Self::Scroll { .. } | Self::Resize { .. })
    }
}
