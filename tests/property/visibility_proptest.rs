//! Property-based tests for show/hide sequencing

use proptest::prelude::*;
use searchbar::shared::{Platform, SearchBarConfig};

use crate::common::{manual_bar, Call, MS};

#[derive(Debug, Clone)]
enum Op {
    Show,
    Hide,
    Advance(u32),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Show),
        Just(Op::Hide),
        (0u32..400).prop_map(Op::Advance),
    ]
}

fn config(animate: bool, cancel_pending_hide: bool) -> SearchBarConfig {
    SearchBarConfig::builder()
        .animate(animate)
        .platform(Platform::Ios)
        .cancel_pending_hide(cancel_pending_hide)
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn test_every_hide_notifies_and_eventually_clears(
        ops in prop::collection::vec(op(), 0..40),
        animate in any::<bool>(),
    ) {
        let (clock, recorder, mut bar) = manual_bar(config(animate, false));
        let mut hides = 0;
        for op in &ops {
            match op {
                Op::Show => bar.show(),
                Op::Hide => {
                    bar.hide();
                    hides += 1;
                }
                Op::Advance(ms) => {
                    clock.advance(MS * *ms);
                    bar.poll();
                }
            }
        }
        clock.advance(1_000 * MS);
        bar.poll();

        prop_assert_eq!(recorder.count(&Call::Hide), hides);
        prop_assert_eq!(recorder.count(&Call::cleared()), hides);
        prop_assert_eq!(bar.controller().pending_completions(), 0);
    }

    #[test]
    fn test_cancel_mode_settles_on_last_request(
        ops in prop::collection::vec(op(), 1..40),
    ) {
        let (clock, recorder, mut bar) = manual_bar(config(true, true));
        let mut hides = 0;
        let mut last_shown = bar.is_visible();
        for op in &ops {
            match op {
                Op::Show => {
                    bar.show();
                    last_shown = true;
                }
                Op::Hide => {
                    bar.hide();
                    hides += 1;
                    last_shown = false;
                }
                Op::Advance(ms) => {
                    clock.advance(MS * *ms);
                    bar.poll();
                }
            }
            prop_assert!(bar.controller().pending_completions() <= 1);
        }
        clock.advance(1_000 * MS);
        bar.poll();

        prop_assert_eq!(bar.is_visible(), last_shown);
        let rest = if last_shown { 0.0 } else { -80.0 };
        prop_assert!((bar.offset() - rest).abs() < 1e-3);
        prop_assert!(recorder.count(&Call::cleared()) <= hides);
    }

    #[test]
    fn test_offset_stays_between_hidden_and_shown(
        ops in prop::collection::vec(op(), 0..40),
    ) {
        let (clock, _recorder, mut bar) = manual_bar(config(true, false));
        for op in &ops {
            match op {
                Op::Show => bar.show(),
                Op::Hide => bar.hide(),
                Op::Advance(ms) => {
                    clock.advance(MS * *ms);
                    bar.poll();
                }
            }
            let offset = bar.offset();
            prop_assert!((-80.0 - 1e-3..=1e-3).contains(&offset), "offset {} out of range", offset);
        }
    }
}
