//! Press activation plumbing: the key contract shared by pressable surfaces,
//! the transient pressed pulse used by buttons, and parent press routing.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;

/// How long the pressed pulse stays visible after an activation.
pub const PRESS_RESET_DELAY: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Gesture that activated a pressable surface.
pub enum PressEvent {
    /// Primary pointer activation (click or tap).
    Pointer,
    /// Enter or Space while focused.
    Keyboard,
}

impl PressEvent {
    /// Classifies a `click` by its `detail` count: browsers report 0 for
    /// clicks synthesized from Enter or Space.
    pub fn from_click_detail(detail: i32) -> Self {
        if detail == 0 {
            Self::Keyboard
        } else {
            Self::Pointer
        }
    }
}

/// Returns whether `key` (a `KeyboardEvent::key` value) activates a pressable surface.
pub fn is_press_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

/// Defers and cancels the pulse reset.
pub trait ResetScheduler {
    /// Handle identifying a scheduled reset.
    type Handle;

    /// Runs `task` once after `delay`. `None` means the task was not scheduled.
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Option<Self::Handle>;

    /// Cancels a task that has not run yet.
    fn cancel(&self, handle: Self::Handle);
}

#[derive(Debug, Clone, Copy, Default)]
/// [`ResetScheduler`] backed by browser timeouts.
pub struct BrowserScheduler;

impl ResetScheduler for BrowserScheduler {
    type Handle = TimeoutHandle;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Option<TimeoutHandle> {
        match set_timeout_with_handle(task, delay) {
            Ok(handle) => Some(handle),
            Err(err) => {
                logging::warn!("press reset timer failed to schedule: {err:?}");
                None
            }
        }
    }

    fn cancel(&self, handle: TimeoutHandle) {
        handle.clear();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Transient press indicator states.
pub enum PressState {
    /// No recent activation.
    #[default]
    Idle,
    /// Activated within the last [`PRESS_RESET_DELAY`].
    Pressed,
}

struct PulseShared<H> {
    state: Cell<PressState>,
    pending: RefCell<Option<H>>,
    notify: Box<dyn Fn(bool)>,
}

impl<H> PulseShared<H> {
    fn transition(&self, next: PressState) {
        if self.state.replace(next) != next {
            (self.notify)(next == PressState::Pressed);
        }
    }
}

/// Idle/Pressed pulse owning at most one pending reset.
///
/// Each activation cancels the pending reset before scheduling a new one, so
/// the reset always runs [`PRESS_RESET_DELAY`] after the latest activation.
/// [`PressPulse::teardown`] cancels outstanding work when the owner unmounts.
pub struct PressPulse<S: ResetScheduler> {
    shared: Rc<PulseShared<S::Handle>>,
    scheduler: S,
}

impl<S: ResetScheduler + Clone> Clone for PressPulse<S> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
            scheduler: self.scheduler.clone(),
        }
    }
}

impl<S: ResetScheduler> PressPulse<S>
where
    S::Handle: 'static,
{
    /// Creates an idle pulse; `notify` observes every state change as
    /// `true` (pressed) or `false` (idle).
    pub fn new(scheduler: S, notify: impl Fn(bool) + 'static) -> Self {
        Self {
            shared: Rc::new(PulseShared {
                state: Cell::new(PressState::Idle),
                pending: RefCell::new(None),
                notify: Box::new(notify),
            }),
            scheduler,
        }
    }

    /// Current state.
    pub fn state(&self) -> PressState {
        self.shared.state.get()
    }

    /// Enters [`PressState::Pressed`] and restarts the reset countdown.
    pub fn activate(&self) {
        self.cancel_pending();
        self.shared.transition(PressState::Pressed);

        let weak: Weak<PulseShared<S::Handle>> = Rc::downgrade(&self.shared);
        let reset = Box::new(move || {
            if let Some(shared) = weak.upgrade() {
                shared.pending.borrow_mut().take();
                shared.transition(PressState::Idle);
            }
        });
        match self.scheduler.schedule(PRESS_RESET_DELAY, reset) {
            Some(handle) => *self.shared.pending.borrow_mut() = Some(handle),
            None => self.shared.transition(PressState::Idle),
        }
    }

    /// Cancels the pending reset and returns to idle without notifying.
    pub fn teardown(&self) {
        self.cancel_pending();
        self.shared.state.set(PressState::Idle);
    }

    fn cancel_pending(&self) {
        let pending = self.shared.pending.borrow_mut().take();
        if let Some(handle) = pending {
            self.scheduler.cancel(handle);
        }
    }
}

#[derive(Clone, Copy, Default)]
/// Context routing descendant button presses to an ancestor.
///
/// A dialog trigger provides one so any button inside opens its dialog; the
/// dialog overlay provides [`PressResponder::detached`] to stop the routing
/// for its own content.
pub struct PressResponder(Option<Callback<PressEvent>>);

impl PressResponder {
    /// Routes presses to `on_press`.
    pub fn new(on_press: Callback<PressEvent>) -> Self {
        Self(Some(on_press))
    }

    /// Responder that swallows nothing and routes nowhere.
    pub fn detached() -> Self {
        Self(None)
    }

    /// Forwards `event` to the routed callback, if any.
    pub fn press(&self, event: PressEvent) {
        if let Some(on_press) = self.0.as_ref() {
            on_press.call(event);
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use super::ResetScheduler;

    struct Task {
        id: u64,
        due: Duration,
        run: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct Clock {
        now: Duration,
        next_id: u64,
        tasks: Vec<Task>,
    }

    #[derive(Clone, Default)]
    /// Scheduler driven by a virtual clock.
    pub(crate) struct ManualScheduler {
        clock: Rc<RefCell<Clock>>,
    }

    impl ManualScheduler {
        pub fn pending(&self) -> usize {
            self.clock.borrow().tasks.len()
        }

        pub fn advance(&self, by: Duration) {
            let target = self.clock.borrow().now + by;
            loop {
                let due = {
                    let mut clock = self.clock.borrow_mut();
                    let next = clock
                        .tasks
                        .iter()
                        .enumerate()
                        .filter(|(_, task)| task.due <= target)
                        .min_by_key(|(_, task)| (task.due, task.id))
                        .map(|(index, _)| index);
                    next.map(|index| {
                        let task = clock.tasks.remove(index);
                        clock.now = task.due;
                        task
                    })
                };
                match due {
                    Some(task) => (task.run)(),
                    None => break,
                }
            }
            self.clock.borrow_mut().now = target;
        }
    }

    impl ResetScheduler for ManualScheduler {
        type Handle = u64;

        fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Option<u64> {
            let mut clock = self.clock.borrow_mut();
            let id = clock.next_id;
            clock.next_id += 1;
            let due = clock.now + delay;
            clock.tasks.push(Task { id, due, run: task });
            Some(id)
        }

        fn cancel(&self, handle: u64) {
            self.clock.borrow_mut().tasks.retain(|task| task.id != handle);
        }
    }

    #[derive(Clone, Copy, Default)]
    /// Scheduler whose timers never start.
    pub(crate) struct FailingScheduler;

    impl ResetScheduler for FailingScheduler {
        type Handle = ();

        fn schedule(&self, _delay: Duration, _task: Box<dyn FnOnce()>) -> Option<()> {
            None
        }

        fn cancel(&self, _handle: ()) {}
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::testing::{FailingScheduler, ManualScheduler};
    use super::*;

    fn recorded_pulse(scheduler: ManualScheduler) -> (PressPulse<ManualScheduler>, Rc<RefCell<Vec<bool>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let pulse = PressPulse::new(scheduler, move |pressed| sink.borrow_mut().push(pressed));
        (pulse, seen)
    }

    #[test]
    fn activation_presses_immediately_and_resets_after_delay() {
        let scheduler = ManualScheduler::default();
        let (pulse, seen) = recorded_pulse(scheduler.clone());

        pulse.activate();
        assert_eq!(pulse.state(), PressState::Pressed);
        assert_eq!(*seen.borrow(), vec![true]);

        scheduler.advance(Duration::from_millis(149));
        assert_eq!(pulse.state(), PressState::Pressed);

        scheduler.advance(Duration::from_millis(1));
        assert_eq!(pulse.state(), PressState::Idle);
        assert_eq!(*seen.borrow(), vec![true, false]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn reactivation_replaces_the_pending_reset() {
        let scheduler = ManualScheduler::default();
        let (pulse, seen) = recorded_pulse(scheduler.clone());

        pulse.activate();
        scheduler.advance(Duration::from_millis(100));
        pulse.activate();
        assert_eq!(scheduler.pending(), 1);

        scheduler.advance(Duration::from_millis(100));
        assert_eq!(pulse.state(), PressState::Pressed);

        scheduler.advance(Duration::from_millis(50));
        assert_eq!(pulse.state(), PressState::Idle);
        assert_eq!(*seen.borrow(), vec![true, false]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn teardown_cancels_pending_reset_silently() {
        let scheduler = ManualScheduler::default();
        let (pulse, seen) = recorded_pulse(scheduler.clone());

        pulse.activate();
        pulse.teardown();
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(pulse.state(), PressState::Idle);

        scheduler.advance(PRESS_RESET_DELAY * 2);
        assert_eq!(*seen.borrow(), vec![true]);
    }

    #[test]
    fn dropped_pulse_makes_reset_a_no_op() {
        let scheduler = ManualScheduler::default();
        let (pulse, seen) = recorded_pulse(scheduler.clone());

        pulse.activate();
        drop(pulse);
        scheduler.advance(PRESS_RESET_DELAY);
        assert_eq!(*seen.borrow(), vec![true]);
    }

    #[test]
    fn pulse_cycles_across_activations() {
        let scheduler = ManualScheduler::default();
        let (pulse, seen) = recorded_pulse(scheduler.clone());

        for _ in 0..3 {
            pulse.activate();
            scheduler.advance(PRESS_RESET_DELAY);
        }
        assert_eq!(*seen.borrow(), vec![true, false, true, false, true, false]);
    }

    #[test]
    fn unscheduled_reset_falls_back_to_idle() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let pulse = PressPulse::new(FailingScheduler, move |pressed| sink.borrow_mut().push(pressed));

        pulse.activate();
        assert_eq!(pulse.state(), PressState::Idle);
        assert_eq!(*seen.borrow(), vec![true, false]);
    }

    #[test]
    fn synthesized_clicks_count_as_keyboard_presses() {
        assert_eq!(PressEvent::from_click_detail(0), PressEvent::Keyboard);
        assert_eq!(PressEvent::from_click_detail(1), PressEvent::Pointer);
        assert_eq!(PressEvent::from_click_detail(2), PressEvent::Pointer);
    }

    #[test]
    fn press_keys() {
        assert!(is_press_key("Enter"));
        assert!(is_press_key(" "));
        assert!(is_press_key("Spacebar"));
        assert!(!is_press_key("Escape"));
        assert!(!is_press_key("a"));
    }
}
