#[cfg(test)]
mod tests {
    use crate::animation::*;
    use crate::clock::*;
    use crate::geometry::*;
    use crate::host::*;
    use crate::input::*;
    use crate::semantics::*;
    use crate::signal::*;
    use slotmap::SlotMap;
    use web_time::Duration;

    #[test]
    fn test_signal_basic() {
        let sig = signal(42);
        assert_eq!(sig.get(), 42);

        sig.set(100);
        assert_eq!(sig.get(), 100);

        sig.update(|v| *v += 1);
        assert_eq!(sig.get(), 101);
    }

    #[test]
    fn test_signal_subscription() {
        let sig = signal(0);
        let calls = std::rc::Rc::new(std::cell::Cell::new(0));

        let calls_clone = calls.clone();
        let id = sig.subscribe(move |_| {
            calls_clone.set(calls_clone.get() + 1);
        });

        sig.set(42);
        assert_eq!(calls.get(), 1);

        // Same value: no notification.
        assert!(!sig.set_if_changed(42));
        assert_eq!(calls.get(), 1);

        sig.unsubscribe(id);
        sig.set(7);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_subscriber_may_read_and_unsubscribe() {
        let sig = signal(1.0f32);
        let seen = std::rc::Rc::new(std::cell::Cell::new(0.0f32));
        let id = std::rc::Rc::new(std::cell::Cell::new(None));

        let (s, seen_in, id_in) = (sig.clone(), seen.clone(), id.clone());
        id.set(Some(sig.subscribe(move |v| {
            assert_eq!(s.get(), *v);
            seen_in.set(s.with(|x| *x));
            if let Some(id) = id_in.get() {
                s.unsubscribe(id);
            }
        })));

        sig.set(0.5);
        assert_eq!(seen.get(), 0.5);
        sig.set(0.25);
        assert_eq!(seen.get(), 0.5);
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(10.0, 10.0, 100.0, 50.0);

        assert!(rect.contains(Vec2 { x: 50.0, y: 30.0 }));
        assert!(!rect.contains(Vec2 { x: 5.0, y: 30.0 }));
        assert!(!rect.contains(Vec2 { x: 50.0, y: 70.0 }));
        assert_eq!(rect.center_y(), 35.0);
    }

    #[test]
    fn test_animation_deterministic() {
        let clock = TestClock::default();
        let t0 = clock.now();

        let mut a = AnimatedValue::new(
            0.0f32,
            AnimationSpec::tween(Duration::from_millis(1000), Easing::Linear),
        );
        a.set_target(10.0, t0);

        assert!(a.update(clock.advance_ms(250)));
        assert!((*a.get() - 2.5).abs() < 0.01);

        assert!(!a.update(clock.advance_ms(750)));
        assert!((*a.get() - 10.0).abs() < 0.001);
        assert!(!a.is_animating());
    }

    #[test]
    fn test_easing_curves() {
        assert_eq!(Easing::EaseOut.apply(0.5), 0.75);
        assert_eq!(Easing::Linear.apply(0.5), 0.5);
        for e in [Easing::Linear, Easing::EaseOut] {
            assert_eq!(e.apply(0.0), 0.0);
            assert_eq!(e.apply(1.0), 1.0);
            assert_eq!(e.apply(3.0), 1.0);
        }
    }

    #[test]
    fn test_animation_snap() {
        let mut a = AnimatedValue::new(0.0f32, AnimationSpec::fast());
        a.set_target(50.0, TestClock::default().now());
        a.snap_to(20.0);
        assert!(!a.is_animating());
        assert_eq!(*a.get(), 20.0);
        assert_eq!(*a.target(), 20.0);
    }

    #[test]
    fn test_key_names() {
        for name in [
            "ArrowUp",
            "ArrowDown",
            "ArrowLeft",
            "ArrowRight",
            "Enter",
            "Backspace",
            "SoftLeft",
            "SoftRight",
            "Control",
            "Alt",
            "EndCall",
            "*",
            "#",
        ] {
            assert_eq!(Key::from_dom(name).to_string(), name);
        }
        assert_eq!(Key::from_dom("5"), Key::Character('5'));
        assert_eq!(Key::from_dom("Call"), Key::Other("Call".into()));
        assert!(Key::ArrowLeft.is_arrow());
        assert!(!Key::Enter.is_arrow());
    }

    #[test]
    fn test_native_controls() {
        assert!(Role::Select.owns_arrow_keys());
        assert!(Role::Input(InputType::Date).owns_arrow_keys());
        assert!(Role::Input(InputType::Time).owns_arrow_keys());
        assert!(!Role::Input(InputType::Text).owns_arrow_keys());
        assert!(Role::Input(InputType::Text).is_input());
        assert!(Role::Input(InputType::Checkbox).is_input());
        assert!(!Role::TextArea.is_input());
        assert!(!Role::Button.is_input());
    }

    #[test]
    fn test_focusable_set_positions() {
        let mut keys: SlotMap<NodeId, ()> = SlotMap::with_key();
        let ids: Vec<NodeId> = (0..3).map(|_| keys.insert(())).collect();
        let set = FocusableSet::new(ids.clone());

        assert_eq!(set.len(), 3);
        assert_eq!(set.position_of(ids[2]), Some(2));
        let positions: Vec<usize> = set.iter().map(|e| e.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
        assert!(FocusableSet::default().is_empty());
    }

    #[test]
    fn test_scroll_box_overflow() {
        let b = ScrollBox {
            client: Size::new(240.0, 200.0),
            content: Size::new(240.0, 600.0),
            ..Default::default()
        };
        assert!(b.overflows());
        assert_eq!(b.max_top(), 400.0);
        assert_eq!(b.effective_top(), 0.0);

        let flat = ScrollBox {
            client: Size::new(240.0, 200.0),
            content: Size::new(240.0, 200.0),
            ..Default::default()
        };
        assert!(!flat.overflows());
    }
}
