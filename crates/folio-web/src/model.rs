#![forbid(unsafe_code)]

//! The report page as one model: page state plus the selection widgets.
//!
//! Geometry events go to the [`Page`] and then to the navigation bar and the
//! timeline's per-entry reveals. Clicks and keys go to the tab filter or the
//! step wizard. Keys are delivered to whichever control holds focus:
//!
//! | Focus  | Keys                  | Effect                              |
//! |--------|-----------------------|-------------------------------------|
//! | Tabs   | Left / Right          | previous / next tab, wrapping       |
//! | Tabs   | Home / End            | first / last tab                    |
//! | Wizard | Up / Down             | previous / next step, no wrapping   |
//! | Wizard | Home / End            | first / last step                   |
//!
//! Any other key, or any key without focus, is ignored.

use folio_content::evaluation::{EVALUATION_TOOLS, EvalTab, EvaluationTool};
use folio_content::implementation::{IMPLEMENTATION_STEPS, ImplementationStep};
use folio_content::sections::{NAV_ITEMS, SECTIONS, timeline_item_region};
use folio_content::timeline::TIMELINE;
use folio_core::category::CategorySet;
use folio_core::event::{ClickTarget, Control, KeyCode, PageEvent};
use folio_core::geometry::Viewport;
use folio_runtime::page::{MountError, Page, PageConfig, PageOutput};
use folio_runtime::reveal::{ItemRevealEffect, StaggerConfig, StaggeredReveal};
use folio_widgets::nav_bar::NavBar;
use folio_widgets::step_wizard::StepWizard;
use folio_widgets::tab_filter::TabFilter;

use crate::geometry::HostGeometry;

/// Configuration for the whole report.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReportConfig {
    /// Page-level margins, thresholds, and entrance parameters.
    pub page: PageConfig,
    /// Timeline entry reveals.
    pub timeline: StaggerConfig,
}

impl ReportConfig {
    /// Set the page configuration.
    #[must_use]
    pub fn with_page(mut self, page: PageConfig) -> Self {
        self.page = page;
        self
    }

    /// Set the timeline stagger configuration.
    #[must_use]
    pub fn with_timeline(mut self, timeline: StaggerConfig) -> Self {
        self.timeline = timeline;
        self
    }
}

/// A user-visible selection change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    /// The evaluation tab changed.
    Tab(EvalTab),
    /// The active implementation step changed.
    Step(usize),
}

/// Result of handling one event.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModelOutput {
    /// Section reveals, navigation, and scroll target.
    pub page: PageOutput,
    /// Timeline entries to reveal.
    pub timeline: Vec<ItemRevealEffect>,
    /// Selection change, if any.
    pub selection: Option<SelectionChange>,
    /// Whether the nav bar needs a repaint.
    pub nav_bar_changed: bool,
}

/// The mounted report.
#[derive(Debug, Clone)]
pub struct ReportModel {
    page: Page,
    tabs: TabFilter<EvalTab>,
    wizard: StepWizard,
    nav_bar: NavBar,
    timeline: StaggeredReveal,
    focus: Option<Control>,
}

impl ReportModel {
    /// Mount the report's sections.
    pub fn mount(config: ReportConfig, viewport: Viewport) -> Result<Self, MountError> {
        Ok(Self {
            page: Page::mount(config.page, viewport, SECTIONS)?,
            tabs: TabFilter::new(),
            wizard: StepWizard::new(IMPLEMENTATION_STEPS.len()),
            nav_bar: NavBar::new(NAV_ITEMS),
            timeline: StaggeredReveal::new(TIMELINE.len(), config.timeline),
            focus: None,
        })
    }

    /// Tear the report down.
    pub fn unmount(self) {
        self.page.unmount();
    }

    /// Page state.
    #[must_use]
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Evaluation tab filter.
    #[must_use]
    pub fn tabs(&self) -> &TabFilter<EvalTab> {
        &self.tabs
    }

    /// Implementation wizard.
    #[must_use]
    pub fn wizard(&self) -> &StepWizard {
        &self.wizard
    }

    /// Navigation bar.
    #[must_use]
    pub fn nav_bar(&self) -> &NavBar {
        &self.nav_bar
    }

    /// Timeline entry reveals.
    #[must_use]
    pub fn timeline(&self) -> &StaggeredReveal {
        &self.timeline
    }

    /// Control holding keyboard focus.
    #[must_use]
    pub fn focus(&self) -> Option<Control> {
        self.focus
    }

    /// Tools listed under the selected tab.
    #[must_use]
    pub fn visible_tools(&self) -> Vec<&'static EvaluationTool> {
        self.tabs.visible_records(EVALUATION_TOOLS)
    }

    /// The implementation step on display.
    #[must_use]
    pub fn active_step(&self) -> Option<&'static ImplementationStep> {
        self.wizard.active_step(IMPLEMENTATION_STEPS)
    }

    /// Recompute everything from the current geometry (initial load).
    pub fn refresh(&mut self, geometry: &HostGeometry) -> ModelOutput {
        let page = self.page.refresh(geometry);
        self.after_geometry(page, geometry)
    }

    /// Handle one page event.
    pub fn handle(&mut self, event: &PageEvent, geometry: &HostGeometry) -> ModelOutput {
        match *event {
            PageEvent::Scroll { .. } | PageEvent::Resize { .. } => {
                let page = self.page.handle(event, geometry);
                self.after_geometry(page, geometry)
            }
            PageEvent::Click(ClickTarget::NavLink(_)) => ModelOutput {
                page: self.page.handle(event, geometry),
                ..ModelOutput::default()
            },
            PageEvent::Click(ClickTarget::Tab(index)) => {
                self.focus = Some(Control::Tabs);
                let changed = self.tabs.select_index(index);
                self.selection_output(changed.then(|| SelectionChange::Tab(self.tabs.selected())))
            }
            PageEvent::Click(ClickTarget::Step(index)) => {
                self.focus = Some(Control::Wizard);
                let before = self.wizard.active_index();
                self.wizard.select(index);
                let change = self.step_change(before);
                self.selection_output(change)
            }
            PageEvent::Focus(control) => {
                self.focus = control;
                self.selection_output(None)
            }
            PageEvent::Key(key) => {
                let change = self.handle_key(key);
                self.selection_output(change)
            }
        }
    }

    fn handle_key(&mut self, key: KeyCode) -> Option<SelectionChange> {
        match self.focus? {
            Control::Tabs => {
                let changed = match key {
                    KeyCode::Left => self.tabs.select_prev(),
                    KeyCode::Right => self.tabs.select_next(),
                    KeyCode::Home => self.tabs.select_index(0),
                    KeyCode::End => self.tabs.select_index(EvalTab::ALL.len() - 1),
                    KeyCode::Up | KeyCode::Down => false,
                };
                changed.then(|| SelectionChange::Tab(self.tabs.selected()))
            }
            Control::Wizard => {
                let before = self.wizard.active_index();
                match key {
                    KeyCode::Up => {
                        self.wizard.prev();
                    }
                    KeyCode::Down => {
                        self.wizard.next();
                    }
                    KeyCode::Home => {
                        self.wizard.select(0);
                    }
                    KeyCode::End => {
                        let last = self.wizard.step_count() as i64 - 1;
                        self.wizard.select(last);
                    }
                    KeyCode::Left | KeyCode::Right => {}
                }
                self.step_change(before)
            }
        }
    }

    fn step_change(&self, before: usize) -> Option<SelectionChange> {
        let after = self.wizard.active_index();
        (after != before).then_some(SelectionChange::Step(after))
    }

    fn selection_output(&self, selection: Option<SelectionChange>) -> ModelOutput {
        ModelOutput {
            page: PageOutput {
                navigation: self.page.navigation(),
                ..PageOutput::default()
            },
            selection,
            ..ModelOutput::default()
        }
    }

    fn after_geometry(&mut self, page: PageOutput, geometry: &HostGeometry) -> ModelOutput {
        let nav_bar_changed = self
            .nav_bar
            .apply(page.navigation.active_section_id, page.navigation.scrolled);

        let viewport = self.page.tracker().viewport();
        let margin = self.timeline.config().margin_px;
        for index in 0..self.timeline.len() {
            let visible = geometry
                .get(timeline_item_region(index))
                .is_some_and(|extent| extent.intersects(&viewport, margin));
            self.timeline.evaluate(index, visible);
        }

        ModelOutput {
            page,
            timeline: self.timeline.drain_effects(),
            selection: None,
            nav_bar_changed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::geometry::Extent;
    use folio_core::viewport::{RegionHandle, SectionId};

    /// Every section 900px tall, stacked; timeline entries 100px apart
    /// inside the timeline section.
    fn geometry(scroll: f64) -> HostGeometry {
        let mut g = HostGeometry::new();
        for section in SECTIONS {
            let top = f64::from(section.order) * 900.0 - scroll;
            g.set(section.region, Extent::new(top, 900.0));
        }
        let timeline_top = 5.0 * 900.0 - scroll;
        for i in 0..TIMELINE.len() {
            g.set(
                timeline_item_region(i),
                Extent::new(timeline_top + 100.0 + i as f64 * 60.0, 50.0),
            );
        }
        g
    }

    fn mounted() -> ReportModel {
        let mut model = ReportModel::mount(ReportConfig::default(), Viewport::default()).unwrap();
        model.refresh(&geometry(0.0));
        model
    }

    #[test]
    fn initial_load_reveals_hero_and_highlights_nothing() {
        let mut model = ReportModel::mount(ReportConfig::default(), Viewport::default()).unwrap();
        let out = model.refresh(&geometry(0.0));
        let ids: Vec<_> = out.page.reveals.iter().map(|r| r.section_id.as_str()).collect();
        assert_eq!(ids, ["hero"]);
        assert_eq!(
            out.page.navigation.active_section_id,
            Some(SectionId::new("hero"))
        );
        assert!(model.nav_bar().entries().all(|e| !e.highlighted));
        assert!(out.timeline.is_empty());
    }

    #[test]
    fn scrolling_to_timeline_staggers_entries() {
        let mut model = mounted();
        let y = 5.0 * 900.0;
        let out = model.handle(&PageEvent::Scroll { y }, &geometry(y));
        assert!(!out.timeline.is_empty());
        for pair in out.timeline.windows(2) {
            assert!(pair[0].index < pair[1].index);
            assert_eq!(pair[1].delay - pair[0].delay, std::time::Duration::from_millis(50));
        }
        assert!(out.nav_bar_changed);
        assert_eq!(model.nav_bar().active(), Some(SectionId::new("timeline")));

        let again = model.handle(&PageEvent::Scroll { y }, &geometry(y));
        assert!(again.timeline.is_empty());
    }

    #[test]
    fn tab_click_filters_tools() {
        let mut model = mounted();
        assert_eq!(model.visible_tools().len(), 3);
        let out = model.handle(&PageEvent::Click(ClickTarget::Tab(1)), &geometry(0.0));
        assert_eq!(out.selection, Some(SelectionChange::Tab(EvalTab::Safety)));
        assert_eq!(model.focus(), Some(Control::Tabs));
        let names: Vec<_> = model.visible_tools().iter().map(|t| t.name).collect();
        assert_eq!(names, ["HAPPENN", "AmpLyze"]);
    }

    #[test]
    fn step_click_out_of_range_is_silent() {
        let mut model = mounted();
        let out = model.handle(&PageEvent::Click(ClickTarget::Step(6)), &geometry(0.0));
        assert_eq!(out.selection, None);
        let out = model.handle(&PageEvent::Click(ClickTarget::Step(3)), &geometry(0.0));
        assert_eq!(out.selection, Some(SelectionChange::Step(3)));
        assert_eq!(model.active_step().map(|s| s.step), Some(4));
    }

    #[test]
    fn keys_follow_focus() {
        let mut model = mounted();
        let g = geometry(0.0);
        assert_eq!(model.handle(&PageEvent::Key(KeyCode::Right), &g).selection, None);

        model.handle(&PageEvent::Focus(Some(Control::Tabs)), &g);
        let out = model.handle(&PageEvent::Key(KeyCode::Left), &g);
        assert_eq!(out.selection, Some(SelectionChange::Tab(EvalTab::Properties)));
        assert_eq!(model.handle(&PageEvent::Key(KeyCode::Down), &g).selection, None);

        model.handle(&PageEvent::Focus(Some(Control::Wizard)), &g);
        assert_eq!(model.handle(&PageEvent::Key(KeyCode::Up), &g).selection, None);
        let out = model.handle(&PageEvent::Key(KeyCode::End), &g);
        assert_eq!(out.selection, Some(SelectionChange::Step(5)));
        assert_eq!(model.handle(&PageEvent::Key(KeyCode::Down), &g).selection, None);
    }

    #[test]
    fn nav_link_requests_scroll() {
        let mut model = mounted();
        let out = model.handle(
            &PageEvent::Click(ClickTarget::NavLink(SectionId::new("repos"))),
            &geometry(0.0),
        );
        assert_eq!(out.page.scroll_to, Some(SectionId::new("repos")));
    }

    #[test]
    fn unknown_region_never_reveals() {
        let mut model = mounted();
        let mut g = geometry(900.0);
        g.remove(RegionHandle(1));
        let out = model.handle(&PageEvent::Scroll { y: 900.0 }, &g);
        assert!(out.page.reveals.iter().all(|r| r.section_id.as_str() != "abstract"));
        assert_eq!(
            model.page().animation_state(SectionId::new("abstract")),
            Some(folio_runtime::reveal::AnimationState::Hidden)
        );
    }
}
