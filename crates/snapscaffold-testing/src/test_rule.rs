use snapscaffold_animation::{DecayAnimation, ExponentialDecay, FrameClock, ManualFrameClock};
use snapscaffold_foundation::{
    DragInteraction, Interaction, InteractionId, NestedScrollDispatcher, NestedScrollSource,
    Offset, Velocity, MAX_FLING_VELOCITY,
};
use snapscaffold_ui::{
    CollapsibleSnapScaffold, ScaffoldLayout, ScaffoldSlot, SnapAreaState, SnapController,
};
use snapscaffold_ui_layout::Constraints;

use crate::FixedSlots;

/// Frames [`ScaffoldTestRule::await_idle`] pumps before giving up.
pub const MAX_IDLE_FRAMES: usize = 600;

/// Past this many pixels of a requested fling step going unconsumed, the
/// container has hit a bound.
const FLING_BOUND_TOLERANCE: f32 = 0.5;

/// Outcome of an injected fling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlingResult {
    /// Velocity the container used, pointer space.
    pub consumed: Velocity,
    /// Velocity left when the fling stopped early, pointer space.
    pub left: Velocity,
    /// Scroll distance travelled.
    pub distance: f32,
}

pub struct ScaffoldTestRule {
    clock: ManualFrameClock,
    state: SnapAreaState,
    scaffold: CollapsibleSnapScaffold,
    controller: SnapController,
    dispatcher: NestedScrollDispatcher,
    slots: FixedSlots,
    constraints: Constraints,
    layout: ScaffoldLayout,
    frames: usize,
}

impl ScaffoldTestRule {
    /// Sets up the scaffold content and lays it out once, as the first
    /// composition would.
    pub fn new(state: SnapAreaState, slots: FixedSlots, constraints: Constraints) -> Self {
        let mut dispatcher = NestedScrollDispatcher::new();
        dispatcher.attach(state.nested_scroll_connection());
        let scaffold = CollapsibleSnapScaffold::new(state.clone());
        let mut slots = slots;
        let layout = scaffold.layout(&mut slots, constraints);
        Self {
            clock: ManualFrameClock::new(),
            controller: SnapController::new(state.clone()),
            state,
            scaffold,
            dispatcher,
            slots,
            constraints,
            layout,
            frames: 0,
        }
    }

    pub fn state(&self) -> &SnapAreaState {
        &self.state
    }

    pub fn controller(&self) -> &SnapController {
        &self.controller
    }

    pub fn dispatcher(&self) -> &NestedScrollDispatcher {
        &self.dispatcher
    }

    pub fn slots(&self) -> &FixedSlots {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> &mut FixedSlots {
        &mut self.slots
    }

    pub fn set_constraints(&mut self, constraints: Constraints) {
        self.constraints = constraints;
    }

    pub fn frame_time_nanos(&self) -> u64 {
        self.clock.frame_time_nanos()
    }

    /// Frames run so far.
    pub fn frame_count(&self) -> usize {
        self.frames
    }

    /// Runs one frame: the snap loops first, then layout. Returns whether
    /// another frame is needed.
    pub fn frame(&mut self) -> bool {
        let now = self.clock.advance_frame();
        let needs_frame = self.controller.on_frame(now);
        self.layout = self.scaffold.layout(&mut self.slots, self.constraints);
        self.frames += 1;
        needs_frame
    }

    /// Pumps frames until nothing is animating. Returns the frames run.
    pub fn await_idle(&mut self) -> usize {
        let mut frames = 0;
        while self.frame() {
            frames += 1;
            if frames > MAX_IDLE_FRAMES {
                panic!("Snap scaffold failed to settle after {MAX_IDLE_FRAMES} frames");
            }
        }
        frames + 1
    }

    /// Latest placed layout.
    pub fn layout(&self) -> &ScaffoldLayout {
        &self.layout
    }

    pub fn y_of(&self, slot: ScaffoldSlot) -> f32 {
        match self.layout.y_of(slot) {
            Some(y) => y,
            None => panic!("{slot:?} was not placed"),
        }
    }

    pub fn sticky_header_y(&self) -> f32 {
        self.y_of(ScaffoldSlot::StickyHeader)
    }

    pub fn perform_scroll_input(&mut self, block: impl FnOnce(&mut ScrollInjectionScope<'_>)) {
        let mut scope = ScrollInjectionScope {
            rule: self,
            drag: None,
        };
        block(&mut scope);
        scope.up();
    }

    /// Reports a fling to the nested scroll chain without moving the
    /// container, as a fling fully used by the body would.
    pub fn report_fling(&mut self, velocity: f32) {
        let available = Velocity::vertical(velocity);
        let pre = self.dispatcher.dispatch_pre_fling(available);
        self.dispatcher.dispatch_post_fling(available - pre, Velocity::ZERO);
        self.frame();
    }

    /// Flings the body with a release `velocity` in pointer space (negative
    /// moves content up and scrolls forward). Runs frames until the decay
    /// ends, the container hits a bound, or a settle animation takes over.
    pub fn fling(&mut self, velocity: f32) -> FlingResult {
        let velocity = velocity.clamp(-MAX_FLING_VELOCITY, MAX_FLING_VELOCITY);
        let available = Velocity::vertical(velocity);
        let pre = self.dispatcher.dispatch_pre_fling(available);
        let left_to_child = available - pre;

        let decay = DecayAnimation::new(ExponentialDecay::default(), 0.0, -left_to_child.y);
        let scrollable = self.state.source().scrollable();
        scrollable.set_scroll_in_progress(true);
        let start = self.clock.frame_time_nanos();
        let mut applied = 0.0f32;
        let mut scroll_velocity_left = 0.0f32;
        log::debug!("fling {velocity:.0} px/s, target {:.1}", decay.target_value());

        loop {
            let now = self.clock.advance_frame();
            let play_time = now - start;
            let value = decay.value_at(play_time);
            let delta = value - applied;
            let consumed = self.state.source().scrollable().consume_scroll_delta(delta);
            applied += consumed;

            if (delta - consumed).abs() > FLING_BOUND_TOLERANCE {
                scroll_velocity_left = decay.velocity_at(play_time);
                break;
            }
            self.controller.on_frame(now);
            self.layout = self.scaffold.layout(&mut self.slots, self.constraints);
            self.frames += 1;
            if decay.is_finished_at(play_time) {
                break;
            }
            if self.controller.is_animating() {
                scroll_velocity_left = decay.velocity_at(play_time);
                break;
            }
        }
        self.state.source().scrollable().set_scroll_in_progress(false);

        let left = Velocity::vertical(-scroll_velocity_left);
        let consumed = left_to_child - left;
        self.dispatcher.dispatch_post_fling(consumed, left);
        log::debug!("fling consumed {:.0} px/s over {applied:.1}px", consumed.y);
        self.frame();
        FlingResult {
            consumed,
            left,
            distance: applied,
        }
    }
}

impl std::fmt::Debug for ScaffoldTestRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScaffoldTestRule")
            .field("frames", &self.frames)
            .field("state", &self.state)
            .field("layout", &self.layout)
            .finish()
    }
}

/// Injects a drag gesture into the scaffold body.
pub struct ScrollInjectionScope<'a> {
    rule: &'a mut ScaffoldTestRule,
    drag: Option<InteractionId>,
}

impl ScrollInjectionScope<'_> {
    pub fn rule(&self) -> &ScaffoldTestRule {
        &*self.rule
    }

    pub fn down(&mut self) {
        if self.drag.is_none() {
            let id = self.rule.state.source().interaction_source().start_drag();
            self.drag = Some(id);
            self.rule.frame();
        }
    }

    /// Moves the pointer by `dy` (pointer space) and runs a frame. Returns
    /// the scroll delta the container consumed.
    pub fn move_by(&mut self, dy: f32) -> f32 {
        self.down();
        let available = Offset::vertical(dy);
        let pre = self
            .rule
            .dispatcher
            .dispatch_pre_scroll(available, NestedScrollSource::UserInput);
        let remaining = available - pre;
        let consumed_scroll = self
            .rule
            .state
            .source()
            .scrollable()
            .consume_scroll_delta(-remaining.y);
        let consumed = Offset::vertical(-consumed_scroll);
        self.rule.dispatcher.dispatch_post_scroll(
            consumed,
            remaining - consumed,
            NestedScrollSource::UserInput,
        );
        self.rule.frame();
        consumed_scroll
    }

    /// Lifts the pointer without velocity.
    pub fn up(&mut self) {
        self.up_with_velocity(0.0);
    }

    /// Lifts the pointer and flings with `velocity` (pointer space).
    pub fn up_with_velocity(&mut self, velocity: f32) -> Option<FlingResult> {
        let id = self.drag.take()?;
        self.release(id);
        Some(self.rule.fling(velocity))
    }

    /// Drags content up by `distance` in ten steps and lifts without velocity.
    pub fn swipe_up(&mut self, distance: f32) {
        self.down();
        let steps = 10;
        for _ in 0..steps {
            self.move_by(-distance / steps as f32);
        }
        self.up();
    }

    fn release(&mut self, id: InteractionId) {
        self.rule
            .state
            .source()
            .interaction_source()
            .emit(Interaction::Drag(DragInteraction::Stop(id)));
    }
}
