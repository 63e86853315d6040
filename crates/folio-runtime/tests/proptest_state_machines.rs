//! Property-based invariant tests for the reveal and navigation machines.
//!
//! 1. Reveal is idempotent: N ≥ 1 intersecting reports yield one effect.
//! 2. Reveal is monotone: no report sequence returns a section to Hidden.
//! 3. The active section is the lowest one above the threshold.
//! 4. A tick with no qualifying section keeps the previous selection.
//! 5. `scrolled` is exactly `scroll_y > 60`.

use folio_core::viewport::{SectionId, VisibilityReport};
use folio_runtime::navigation::{NavConfig, NavigationStateMachine};
use folio_runtime::reveal::{AnimationOrchestrator, AnimationState, RevealConfig};
use proptest::prelude::*;

const IDS: [&str; 5] = ["abstract", "models", "evaluation", "repos", "timeline"];

fn reports_strategy() -> impl Strategy<Value = Vec<VisibilityReport>> {
    prop::collection::vec((-2000.0f64..2000.0, any::<bool>()), IDS.len()).prop_map(|rows| {
        rows.into_iter()
            .zip(IDS)
            .map(|((top, hit), id)| VisibilityReport::new(SectionId::new(id), top, hit))
            .collect()
    })
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Idempotence of reveal
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn reveal_fires_once(n in 1usize..50, top in -500.0f64..500.0) {
        let id = SectionId::new("models");
        let mut orch = AnimationOrchestrator::new(id, RevealConfig::default());
        let mut effects = 0;
        for _ in 0..n {
            orch.evaluate(&VisibilityReport::new(id, top, true));
            effects += orch.drain_effects().len();
        }
        prop_assert_eq!(effects, 1);
        prop_assert_eq!(orch.state(), AnimationState::Revealed);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Monotonicity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn revealed_is_absorbing(flags in prop::collection::vec(any::<bool>(), 1..64)) {
        let id = SectionId::new("repos");
        let mut orch = AnimationOrchestrator::new(id, RevealConfig::default());
        let mut seen_revealed = false;
        let mut effects = 0;
        for hit in flags {
            let state = orch.evaluate(&VisibilityReport::new(id, 0.0, hit));
            if seen_revealed {
                prop_assert_eq!(state, AnimationState::Revealed);
            }
            seen_revealed |= state == AnimationState::Revealed;
            effects += orch.drain_effects().len();
        }
        prop_assert_eq!(effects, usize::from(seen_revealed));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Reverse tie-break
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn lowest_qualifying_section_is_active(reports in reports_strategy()) {
        let mut nav = NavigationStateMachine::new(NavConfig::default());
        let state = nav.recompute(&reports, 0.0);
        let expected = reports
            .iter()
            .rposition(|r| r.top_offset_px < 200.0)
            .map(|i| reports[i].section_id);
        prop_assert_eq!(state.active_section_id, expected);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Retention when nothing qualifies
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn retains_previous_selection(first in reports_strategy(), tops in prop::collection::vec(200.0f64..5000.0, IDS.len())) {
        let mut nav = NavigationStateMachine::new(NavConfig::default());
        let before = nav.recompute(&first, 0.0).active_section_id;
        let below: Vec<_> = first
            .iter()
            .zip(tops)
            .map(|(r, top)| VisibilityReport::new(r.section_id, top, false))
            .collect();
        let after = nav.recompute(&below, 0.0).active_section_id;
        prop_assert_eq!(before, after);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Scrolled flag
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn scrolled_matches_threshold(y in -100.0f64..400.0) {
        let mut nav = NavigationStateMachine::new(NavConfig::default());
        prop_assert_eq!(nav.recompute(&[], y).scrolled, y > 60.0);
    }
}

#[test]
fn documented_tie_break_example() {
    let mut nav = NavigationStateMachine::new(NavConfig::default());
    let reports = [
        VisibilityReport::new(SectionId::new("A"), -50.0, true),
        VisibilityReport::new(SectionId::new("B"), 10.0, true),
        VisibilityReport::new(SectionId::new("C"), 500.0, false),
    ];
    assert_eq!(
        nav.recompute(&reports, 0.0).active_section_id,
        Some(SectionId::new("B"))
    );
}

#[test]
fn scrolled_flag_examples() {
    let mut nav = NavigationStateMachine::new(NavConfig::default());
    assert!(!nav.recompute(&[], 59.0).scrolled);
    assert!(nav.recompute(&[], 61.0).scrolled);
}
