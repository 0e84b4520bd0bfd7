//! Leptos Swipe Utilities
//!
//! Horizontal swipe-to-act for list rows using pointer events.
//! Uses a movement threshold to distinguish a tap from a swipe.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Movement in pixels before a press turns into a swipe
const TAP_SLOP_PX: i32 = 5;

/// How long the click following a swipe is suppressed
const CLICK_SUPPRESS_MS: i32 = 100;

/// What happens when the pointer is released
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeRelease {
    /// Offset reached the threshold; run the action
    Commit,
    /// Return the row to its resting position
    SnapBack,
}

/// Keep a drag offset inside `[0, max]`; rows only move to the right
pub fn clamp_offset(dx: i32, max: i32) -> i32 {
    dx.clamp(0, max.max(0))
}

pub fn release_action(offset: i32, threshold: i32) -> SwipeRelease {
    if offset >= threshold {
        SwipeRelease::Commit
    } else {
        SwipeRelease::SnapBack
    }
}

/// A press becomes a swipe once it moves mostly sideways past the slop
pub fn exceeds_tap_slop(dx: i32, dy: i32) -> bool {
    dx.abs() > TAP_SLOP_PX && dx.abs() >= dy.abs()
}

/// Swipe state signals for one row
#[derive(Clone, Copy)]
pub struct SwipeSignals {
    /// Current horizontal offset of the row
    pub offset_read: ReadSignal<i32>,
    pub offset_write: WriteSignal<i32>,
    /// Pointer is down but has not moved far enough to swipe
    pub pending_read: ReadSignal<bool>,
    pub pending_write: WriteSignal<bool>,
    pub swiping_read: ReadSignal<bool>,
    pub swiping_write: WriteSignal<bool>,
    /// Latched after a commit; the row ignores presses until `reset`
    pub swiped_read: ReadSignal<bool>,
    pub swiped_write: WriteSignal<bool>,
    pub just_swiped_read: ReadSignal<bool>,
    pub just_swiped_write: WriteSignal<bool>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

pub fn create_swipe_signals() -> SwipeSignals {
    let (offset_read, offset_write) = signal(0i32);
    let (pending_read, pending_write) = signal(false);
    let (swiping_read, swiping_write) = signal(false);
    let (swiped_read, swiped_write) = signal(false);
    let (just_swiped_read, just_swiped_write) = signal(false);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    SwipeSignals {
        offset_read,
        offset_write,
        pending_read,
        pending_write,
        swiping_read,
        swiping_write,
        swiped_read,
        swiped_write,
        just_swiped_read,
        just_swiped_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// A row that was disabled (its action in flight) and is enabled again
/// should drop its committed state
pub fn rearms(was_enabled: Option<bool>, enabled: bool) -> bool {
    was_enabled == Some(false) && enabled
}

/// Return a row to rest and accept new swipes
pub fn reset(swipe: &SwipeSignals) {
    swipe.pending_write.set(false);
    swipe.swiping_write.set(false);
    swipe.swiped_write.set(false);
    swipe.offset_write.set(0);
}

/// Finish a swipe and briefly swallow the click the browser fires after it
fn end_swipe(swipe: &SwipeSignals) {
    swipe.pending_write.set(false);
    swipe.swiping_write.set(false);
    swipe.just_swiped_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = swipe.just_swiped_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            CLICK_SUPPRESS_MS,
        );
        cb.forget();
    }
}

/// Create pointerdown handler; records a pending swipe and captures the pointer
pub fn make_on_pointerdown<E>(swipe: SwipeSignals, enabled: E) -> impl Fn(web_sys::PointerEvent) + Copy + 'static
where
    E: Fn() -> bool + Copy + 'static,
{
    move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 || !enabled() || swipe.swiped_read.get_untracked() {
            return;
        }
        if let Some(target) = ev.target() {
            if let Some(el) = target.dyn_ref::<web_sys::Element>() {
                let _ = el.set_pointer_capture(ev.pointer_id());
            }
        }
        swipe.pending_write.set(true);
        swipe.start_x_write.set(ev.client_x());
        swipe.start_y_write.set(ev.client_y());
    }
}

/// Create pointermove handler; starts the swipe once past the tap slop
pub fn make_on_pointermove(swipe: SwipeSignals, max_offset: i32) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |ev: web_sys::PointerEvent| {
        if !swipe.pending_read.get_untracked() {
            return;
        }
        let dx = ev.client_x() - swipe.start_x_read.get_untracked();
        let dy = ev.client_y() - swipe.start_y_read.get_untracked();

        if !swipe.swiping_read.get_untracked() && exceeds_tap_slop(dx, dy) {
            swipe.swiping_write.set(true);
        }
        if swipe.swiping_read.get_untracked() {
            swipe.offset_write.set(clamp_offset(dx, max_offset));
        }
    }
}

/// Create pointerup handler; commits or snaps back
pub fn make_on_pointerup<F>(swipe: SwipeSignals, threshold: i32, on_commit: F) -> impl Fn(web_sys::PointerEvent) + Copy + 'static
where
    F: Fn() + Copy + 'static,
{
    move |_ev: web_sys::PointerEvent| {
        if !swipe.swiping_read.get_untracked() {
            // Plain tap; the click event fires on the element
            swipe.pending_write.set(false);
            return;
        }
        end_swipe(&swipe);
        match release_action(swipe.offset_read.get_untracked(), threshold) {
            SwipeRelease::Commit => {
                swipe.swiped_write.set(true);
                swipe.offset_write.set(threshold);
                on_commit();
            }
            SwipeRelease::SnapBack => swipe.offset_write.set(0),
        }
    }
}

/// Create pointercancel handler
pub fn make_on_pointercancel(swipe: SwipeSignals) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |_ev: web_sys::PointerEvent| {
        swipe.pending_write.set(false);
        swipe.swiping_write.set(false);
        if !swipe.swiped_read.get_untracked() {
            swipe.offset_write.set(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_offset() {
        assert_eq!(clamp_offset(-40, 250), 0);
        assert_eq!(clamp_offset(120, 250), 120);
        assert_eq!(clamp_offset(900, 250), 250);
    }

    #[test]
    fn test_release_action_at_threshold() {
        assert_eq!(release_action(199, 200), SwipeRelease::SnapBack);
        assert_eq!(release_action(200, 200), SwipeRelease::Commit);
        assert_eq!(release_action(250, 200), SwipeRelease::Commit);
    }

    #[test]
    fn test_rearms_only_on_disabled_to_enabled() {
        assert!(rearms(Some(false), true));
        assert!(!rearms(None, true));
        assert!(!rearms(Some(true), true));
        assert!(!rearms(Some(true), false));
    }

    #[test]
    fn test_reset_clears_committed_swipe() {
        let swipe = create_swipe_signals();
        swipe.swiped_write.set(true);
        swipe.swiping_write.set(true);
        swipe.offset_write.set(200);

        reset(&swipe);
        assert!(!swipe.swiped_read.get_untracked());
        assert!(!swipe.swiping_read.get_untracked());
        assert_eq!(swipe.offset_read.get_untracked(), 0);
    }

    #[test]
    fn test_tap_slop() {
        assert!(!exceeds_tap_slop(3, 0));
        assert!(!exceeds_tap_slop(8, 20));
        assert!(exceeds_tap_slop(8, 2));
        assert!(exceeds_tap_slop(-8, 2));
    }
}
