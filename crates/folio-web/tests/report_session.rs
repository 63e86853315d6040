#![forbid(unsafe_code)]

//! End-to-end sessions through the host adapter.
//!
//! The fake host lays the eight sections out 1000px apart and keeps their
//! viewport-relative extents in sync with the scroll offset, the way the JS
//! shim does with `getBoundingClientRect()`.

use std::time::Duration;

use folio_content::evaluation::EvalTab;
use folio_content::sections::{SECTIONS, timeline_item_region};
use folio_content::timeline::TIMELINE;
use folio_core::event::{ClickTarget, Control, KeyCode, PageEvent};
use folio_core::geometry::{Extent, Viewport};
use folio_core::viewport::SectionId;
use folio_web::model::{ReportConfig, SelectionChange};
use folio_web::step_report::{ReportOutputs, StepReport};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

const SECTION_HEIGHT: f64 = 1000.0;
const FRAME: Duration = Duration::from_millis(16);

struct FakeHost {
    report: StepReport,
    scroll_y: f64,
}

impl FakeHost {
    fn new() -> Self {
        let mut host = Self {
            report: StepReport::new(ReportConfig::default(), Viewport::new(1280.0, 800.0)),
            scroll_y: 0.0,
        };
        host.layout();
        host.report.init().unwrap();
        host
    }

    fn layout(&mut self) {
        let y = self.scroll_y;
        let geometry = self.report.geometry_mut();
        for section in SECTIONS {
            let top = f64::from(section.order) * SECTION_HEIGHT - y;
            geometry.set(section.region, Extent::new(top, SECTION_HEIGHT));
        }
        let timeline_top = 5.0 * SECTION_HEIGHT - y;
        for i in 0..TIMELINE.len() {
            let top = timeline_top + 80.0 * i as f64;
            geometry.set(timeline_item_region(i), Extent::new(top, 70.0));
        }
    }

    fn scroll_to(&mut self, y: f64) -> ReportOutputs {
        self.scroll_y = y;
        self.layout();
        self.report.push_event(PageEvent::Scroll { y });
        self.frame()
    }

    fn send(&mut self, event: PageEvent) -> ReportOutputs {
        self.report.push_event(event);
        self.frame()
    }

    fn frame(&mut self) -> ReportOutputs {
        self.report.advance_time(FRAME);
        self.report.step().unwrap();
        self.report.take_outputs()
    }
}

fn revealed(outputs: &ReportOutputs) -> Vec<&'static str> {
    outputs.reveals.iter().map(|r| r.section_id.as_str()).collect()
}

fn active(outputs: &ReportOutputs) -> Option<&'static str> {
    outputs
        .navigation
        .and_then(|n| n.active_section_id)
        .map(|id| id.as_str())
}

#[test]
fn scroll_through_whole_report() {
    let mut host = FakeHost::new();
    let first = host.report.take_outputs();
    assert_eq!(revealed(&first), vec!["hero"]);
    assert_eq!(active(&first), Some("hero"));

    let mut order = Vec::new();
    let mut y = 0.0;
    while y <= 7.0 * SECTION_HEIGHT {
        y += 250.0;
        order.extend(revealed(&host.scroll_to(y)));
    }
    assert_eq!(
        order,
        vec![
            "abstract",
            "models",
            "evaluation",
            "repos",
            "timeline",
            "implementation",
            "references",
        ]
    );

    let model = host.report.model().unwrap();
    assert_eq!(
        model.page().navigation().active_section_id,
        Some(SectionId::new("references"))
    );
    assert!(model.page().navigation().scrolled);
}

#[test]
fn scrolling_back_up_never_replays() {
    let mut host = FakeHost::new();
    host.scroll_to(3000.0);
    host.scroll_to(0.0);
    let outputs = host.scroll_to(3000.0);
    assert!(outputs.reveals.is_empty());
    assert_eq!(active(&outputs), Some("evaluation"));
}

#[test]
fn timeline_entries_cascade() {
    let mut host = FakeHost::new();
    let outputs = host.scroll_to(5.0 * SECTION_HEIGHT);
    let offsets: Vec<f32> = outputs.timeline_reveals.iter().map(|e| e.offset_x_px).collect();
    assert!(!offsets.is_empty());
    for (i, effect) in outputs.timeline_reveals.iter().enumerate() {
        assert_eq!(effect.index, i);
        assert_eq!(effect.delay, Duration::from_millis(50) * i as u32);
        assert_eq!(effect.duration, Duration::from_millis(500));
    }
    assert_eq!(offsets[0], -30.0);
    assert_eq!(offsets[1], 30.0);
}

#[test]
fn selections_are_independent_of_scroll() {
    let mut host = FakeHost::new();
    let outputs = host.send(PageEvent::Click(ClickTarget::Tab(2)));
    assert_eq!(outputs.selections, vec![SelectionChange::Tab(EvalTab::Spectrum)]);

    host.scroll_to(2000.0);
    let model = host.report.model().unwrap();
    assert_eq!(model.tabs().selected(), EvalTab::Spectrum);

    host.send(PageEvent::Focus(Some(Control::Wizard)));
    let outputs = host.send(PageEvent::Key(KeyCode::Down));
    assert_eq!(outputs.selections, vec![SelectionChange::Step(1)]);
    let outputs = host.send(PageEvent::Click(ClickTarget::Step(-1)));
    assert!(outputs.selections.is_empty());
    assert_eq!(host.report.model().unwrap().wizard().active_index(), 1);
}

#[test]
fn nav_link_click_returns_target() {
    let mut host = FakeHost::new();
    let outputs = host.send(PageEvent::Click(ClickTarget::NavLink(SectionId::new(
        "implementation",
    ))));
    assert_eq!(outputs.scroll_to, Some(SectionId::new("implementation")));
    let outputs = host.send(PageEvent::Click(ClickTarget::NavLink(SectionId::new("nowhere"))));
    assert_eq!(outputs.scroll_to, None);
}

proptest! {
    #[test]
    fn each_section_reveals_at_most_once(stops in prop::collection::vec(0.0f64..8000.0, 1..40)) {
        let mut host = FakeHost::new();
        let mut seen = revealed(&host.report.take_outputs());
        for y in stops {
            seen.extend(revealed(&host.scroll_to(y)));
        }
        let mut dedup = seen.clone();
        dedup.sort_unstable();
        dedup.dedup();
        prop_assert_eq!(dedup.len(), seen.len());
    }
}
