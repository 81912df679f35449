use kaipad_core::*;
use kaipad_platform::{DebounceGate, KeyUp, PressClassifier};
use kaipad_ui::{
    CenterOutcome, Direction, ElementSpec, ElementTree, NavigateOptions, center_element, navigate,
    swipe_opacity,
};
use proptest::prelude::*;
use proptest::test_runner::Config;

fn list(rows: usize) -> (ElementTree, Vec<NodeId>) {
    let mut tree = ElementTree::new(Size::new(240.0, 320.0), TestClock::default().now());
    let list = tree
        .append(
            tree.root(),
            ElementSpec::container("list", Rect::new(0.0, 30.0, 240.0, 260.0)).scrollable(),
        )
        .expect("append list");
    let rows = (0..rows)
        .map(|i| {
            let frame = Rect::new(0.0, i as f32 * 47.0, 240.0, 47.0);
            tree.append(list, ElementSpec::item(format!("row{i}"), frame))
                .expect("append row")
        })
        .collect();
    (tree, rows)
}

fn instant() -> NavigateOptions {
    NavigateOptions {
        behavior: ScrollBehavior::Instant,
        ..NavigateOptions::default()
    }
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn press_resolves_short_or_long_exactly_once(
        hold_ms in 0_u64..5000,
        tick_ms in 1_u64..400,
        repeats in any::<bool>(),
    ) {
        let clock = TestClock::default();
        let mut c = PressClassifier::new(Duration::from_millis(2000), Duration::from_millis(300));
        c.key_down(&Key::Backspace, false, clock.now());

        let mut longs = 0;
        let mut held = 0;
        while held < hold_ms {
            let step = tick_ms.min(hold_ms - held);
            held += step;
            let now = clock.advance_ms(step);
            if repeats {
                c.key_down(&Key::Backspace, true, now);
            }
            if c.poll(now).is_some() {
                longs += 1;
            }
        }
        let shorts = match c.key_up(&Key::Backspace, clock.advance_ms(1)) {
            KeyUp::Short(_) => 1,
            _ => 0,
        };

        prop_assert_eq!(longs + shorts, 1);
        prop_assert_eq!(longs == 1, hold_ms >= 2000);
    }

    #[test]
    fn debounce_admits_events_at_least_a_window_apart(gaps in prop::collection::vec(0_u64..700, 1..40)) {
        let clock = TestClock::default();
        let mut gate = DebounceGate::new(Duration::from_millis(300));
        let mut admitted: Vec<Instant> = Vec::new();
        for gap in gaps {
            let now = clock.advance_ms(gap);
            if gate.admit(now) {
                admitted.push(now);
            }
        }
        for pair in admitted.windows(2) {
            prop_assert!(pair[1] - pair[0] >= Duration::from_millis(300));
        }
    }

    #[test]
    fn stepping_n_times_returns_to_start(n in 1_usize..20, start in 0_usize..20, down in any::<bool>()) {
        let start = start % n;
        let (mut tree, rows) = list(n);
        tree.focus(rows[start]).expect("focus");
        let dir = if down { Direction::Down } else { Direction::Up };
        for _ in 0..n {
            navigate(&mut tree, dir, instant());
        }
        prop_assert_eq!(tree.active_element(), Some(rows[start]));
    }

    #[test]
    fn centring_twice_never_moves(n in 1_usize..30, pick in 0_usize..30, smooth in any::<bool>()) {
        let (mut tree, rows) = list(n);
        let id = rows[pick % n];
        let behavior = if smooth { ScrollBehavior::Smooth } else { ScrollBehavior::Instant };

        center_element(&mut tree, id, behavior);
        // A smooth scroll is still in flight here; the second call must see
        // where it is heading, not where it is.
        let again = center_element(&mut tree, id, behavior);
        prop_assert!(matches!(again, CenterOutcome::AlreadyCentered(_)), "{:?}", again);
    }

    #[test]
    fn opacity_fades_monotonically(a in -600.0_f32..600.0, b in -600.0_f32..600.0) {
        let (near, far) = if a.abs() <= b.abs() { (a, b) } else { (b, a) };
        let (on, of) = (swipe_opacity(near, 300.0), swipe_opacity(far, 300.0));
        prop_assert!((0.0..=1.0).contains(&on));
        prop_assert!((0.0..=1.0).contains(&of));
        prop_assert!(of <= on);
    }
}
