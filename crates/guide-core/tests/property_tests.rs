//! Property-based tests for the selection state machine
//!
//! Uses proptest to drive random open/close sequences and check the modal
//! invariants after every step.

use guide_core::{GuideImage, ImageSource, Material, Selection, DEFAULT_IMAGE};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

#[derive(Debug, Clone)]
enum UiOp {
    Open(Material),
    Close,
}

fn material_strategy() -> impl Strategy<Value = Material> {
    prop::sample::select(Material::ALL.to_vec())
}

fn ui_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<UiOp>> {
    prop::collection::vec(
        prop_oneof![
            2 => material_strategy().prop_map(UiOp::Open),
            1 => Just(UiOp::Close),
        ],
        0..max_ops,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// An open modal always names its material, and the last op decides the state
    #[test]
    fn open_implies_selected(ops in ui_ops_strategy(64)) {
        let mut selection = Selection::default();
        for op in &ops {
            match op {
                UiOp::Open(m) => {
                    selection.open_modal(*m);
                    prop_assert_eq!(selection.selected_material(), Some(*m));
                }
                UiOp::Close => {
                    selection.close_modal();
                    prop_assert_eq!(selection, Selection::Closed);
                }
            }
            prop_assert!(!selection.is_open() || selection.selected_material().is_some());
            prop_assert_eq!(selection.is_open(), selection.modal_title().is_some());
        }
    }

    /// Closing any number of times from any state lands on Closed
    #[test]
    fn close_is_idempotent(m in material_strategy(), times in 1..10usize) {
        let mut selection = Selection::Open(m);
        for _ in 0..times {
            selection.close_modal();
            prop_assert_eq!(selection.selected_material(), None);
            prop_assert!(!selection.is_open());
        }
    }

    /// However many load errors fire, the source falls back exactly once
    #[test]
    fn fallback_happens_once(path in "/[a-z]{1,12}/[a-z]{1,12}\\.png", errors in 1..20usize) {
        let mut src = ImageSource::new(path.clone());
        let switched = (0..errors).filter(|_| src.on_error()).count();
        prop_assert_eq!(switched, 1);
        prop_assert_eq!(src.current(), DEFAULT_IMAGE);
        prop_assert_eq!(src.requested(), path.as_str());
    }

    /// Reveal delay never decreases along the sequence
    #[test]
    fn guide_sequence_is_stable(_seed in any::<u8>()) {
        let seq = GuideImage::sequence();
        prop_assert_eq!(seq.len(), 4);
        for pair in seq.windows(2) {
            prop_assert!(pair[0].reveal.delay_ms < pair[1].reveal.delay_ms);
        }
    }
}
