use snapscaffold_foundation::{ScrollState, ScrollableState};
use snapscaffold_testing::{FixedSlots, ScaffoldTestRule};
use snapscaffold_ui::{
    BodyPadding, CollapsibleAreaValue, ScaffoldSlot, ScrollDirection, SnapAreaState,
};
use snapscaffold_ui_layout::Constraints;

fn slots() -> FixedSlots {
    FixedSlots::new()
        .top_bar(50.0)
        .snap_area(200.0)
        .sticky_header(100.0)
        .bottom_bar(80.0)
}

fn continuous_rule(initial: i32) -> (ScrollState, ScaffoldTestRule) {
    let scroll = ScrollState::new(initial);
    scroll.set_max_value(1_000);
    let state = SnapAreaState::new(200.0, true, scroll.clone());
    let rule = ScaffoldTestRule::new(state, slots(), Constraints::fixed(360.0, 800.0));
    (scroll, rule)
}

#[test]
fn fast_fling_collapses_and_header_docks_under_top_bar() {
    let (scroll, mut rule) = continuous_rule(0);
    assert_eq!(rule.sticky_header_y(), 250.0);

    rule.perform_scroll_input(|scope| {
        scope.move_by(-150.0);
    });
    assert_eq!(scroll.value(), 150);
    assert_eq!(rule.state().scroll_offset(), 0.75);
    assert_eq!(rule.sticky_header_y(), 100.0);
    assert_eq!(rule.controller().value(), CollapsibleAreaValue::Neutral);

    rule.report_fling(-3_000.0);
    assert!(rule.state().allow_snapping());
    assert_eq!(rule.controller().value(), CollapsibleAreaValue::Collapsed);
    assert!(rule.controller().is_animating());

    rule.await_idle();
    assert_eq!(scroll.value(), 200);
    assert_eq!(rule.state().scroll_offset(), 1.0);
    assert_eq!(rule.controller().value(), CollapsibleAreaValue::Neutral);
    assert_eq!(rule.sticky_header_y(), 50.0);
    assert_eq!(rule.layout().snap_area_alpha, 0.0);
    assert!(!scroll.is_scroll_in_progress());
}

#[test]
fn regions_follow_fraction() {
    let (scroll, mut rule) = continuous_rule(0);
    assert_eq!(rule.y_of(ScaffoldSlot::TopBar), 0.0);
    assert_eq!(rule.y_of(ScaffoldSlot::SnapArea), 50.0);
    assert_eq!(rule.y_of(ScaffoldSlot::Body), 150.0);
    assert_eq!(rule.y_of(ScaffoldSlot::StickyHeader), 250.0);
    assert_eq!(rule.y_of(ScaffoldSlot::BottomBar), 720.0);
    assert_eq!(rule.layout().body_padding, BodyPadding { bottom: 80.0 });
    assert_eq!(
        rule.slots().last_body_constraints.map(|c| c.max_height),
        Some(650.0)
    );

    scroll.scroll_to(200);
    rule.frame();
    assert_eq!(rule.sticky_header_y(), 50.0);
    assert_eq!(rule.y_of(ScaffoldSlot::Body), 150.0);
}

#[test]
fn snap_area_height_comes_from_layout() {
    let scroll = ScrollState::new(0);
    scroll.set_max_value(1_000);
    let state = SnapAreaState::new(0.0, true, scroll.clone());
    let mut rule = ScaffoldTestRule::new(state.clone(), slots(), Constraints::fixed(360.0, 800.0));
    assert_eq!(state.snap_area_height_px(), 200.0);

    rule.slots_mut().snap_area = Some(300.0);
    rule.frame();
    assert_eq!(state.snap_area_height_px(), 300.0);
    assert_eq!(rule.sticky_header_y(), 350.0);
}

#[test]
fn drag_reports_direction() {
    let (_scroll, mut rule) = continuous_rule(0);
    rule.perform_scroll_input(|scope| {
        scope.move_by(-40.0);
        assert_eq!(scope_direction(scope), ScrollDirection::Down);
        scope.move_by(25.0);
        assert_eq!(scope_direction(scope), ScrollDirection::Up);
    });
}

fn scope_direction(scope: &mut snapscaffold_testing::ScrollInjectionScope<'_>) -> ScrollDirection {
    scope.rule().controller().direction()
}

#[test]
fn drag_holds_area_where_the_finger_left_it() {
    let (scroll, mut rule) = continuous_rule(0);
    rule.report_fling(-3_000.0);
    assert!(rule.state().allow_snapping());

    rule.perform_scroll_input(|scope| {
        scope.down();
        for _ in 0..5 {
            scope.move_by(-10.0);
        }
        assert_eq!(scope.rule().controller().value(), CollapsibleAreaValue::Neutral);
        assert!(!scope.rule().controller().is_animating());
    });
    // slow release disarms
    assert!(!rule.state().allow_snapping());
    rule.await_idle();
    assert!(!rule.controller().is_animating());
    assert_eq!(scroll.value(), 50);
}
