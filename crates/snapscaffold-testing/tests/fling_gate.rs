use snapscaffold_foundation::{ScrollState, Velocity};
use snapscaffold_testing::{FixedSlots, ScaffoldTestRule};
use snapscaffold_ui::{CollapsibleAreaValue, SnapAreaState};
use snapscaffold_ui_layout::Constraints;

fn rule(initial: i32) -> (ScrollState, ScaffoldTestRule) {
    let scroll = ScrollState::new(initial);
    scroll.set_max_value(1_000);
    let state = SnapAreaState::new(200.0, true, scroll.clone());
    let slots = FixedSlots::new()
        .top_bar(50.0)
        .snap_area(200.0)
        .sticky_header(100.0);
    let rule = ScaffoldTestRule::new(state, slots, Constraints::fixed(360.0, 800.0));
    (scroll, rule)
}

#[test]
fn fast_fling_stopping_inside_area_expands_it() {
    let (scroll, mut rule) = rule(800);
    let result = rule.fling(3_000.0);
    assert_eq!(result.consumed, Velocity::vertical(3_000.0));
    assert!((80..=90).contains(&scroll.value()), "{}", scroll.value());

    assert!(rule.state().allow_snapping());
    assert_eq!(rule.controller().value(), CollapsibleAreaValue::Expanded);
    rule.await_idle();
    assert_eq!(scroll.value(), 0);
    assert_eq!(rule.sticky_header_y(), 250.0);
}

#[test]
fn fling_past_area_does_not_arm() {
    let (scroll, mut rule) = rule(0);
    rule.perform_scroll_input(|scope| {
        scope.move_by(-20.0);
        let result = scope.up_with_velocity(-3_000.0);
        assert!(result.is_some());
    });
    assert!(scroll.value() > 700);
    assert!(!rule.state().allow_snapping());
    assert_eq!(rule.controller().value(), CollapsibleAreaValue::Neutral);
    assert_eq!(rule.sticky_header_y(), 50.0);
}

#[test]
fn slow_release_disarms() {
    let (scroll, mut rule) = rule(0);
    rule.report_fling(-3_000.0);
    assert!(rule.state().allow_snapping());

    rule.perform_scroll_input(|scope| {
        scope.move_by(-60.0);
        scope.up_with_velocity(-500.0);
    });
    assert!(!rule.state().allow_snapping());
    assert!((170..=185).contains(&scroll.value()), "{}", scroll.value());
    assert_eq!(rule.controller().value(), CollapsibleAreaValue::Neutral);
    assert_eq!(rule.await_idle(), 1);
}

#[test]
fn fling_into_top_arms_but_area_rests() {
    let (scroll, mut rule) = rule(800);
    let result = rule.fling(6_000.0);
    assert_eq!(scroll.value(), 0);
    assert!(result.left.y > 0.0);
    assert!(result.consumed.y > 2_500.0);

    assert!(rule.state().allow_snapping());
    assert_eq!(rule.controller().value(), CollapsibleAreaValue::Neutral);
    assert!(!rule.controller().is_animating());
}
