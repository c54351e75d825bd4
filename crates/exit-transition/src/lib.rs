//! Exit Transition Utilities
//!
//! One-shot completion for elements that animate out before removal.
//! Completion fires on the element's own `animationend`, or from a fallback
//! timer when the animation never reports back (reduced motion, detached
//! node). Whichever comes first wins; the other is a no-op.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Completion guard that runs its callback at most once.
///
/// Clones share the same flag, so the animation listener and the fallback
/// timer can each hold one. Both run on the browser event loop, so the flag
/// is a plain `Rc<Cell<_>>`.
#[derive(Clone, Debug, Default)]
pub struct OneShot {
    fired: Rc<Cell<bool>>,
}

impl OneShot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the guard has already fired
    pub fn has_fired(&self) -> bool {
        self.fired.get()
    }

    /// Run `f` if this is the first call. Returns `true` when `f` ran.
    ///
    /// The flag is set before `f` runs, so a completion triggered from
    /// inside `f` is already a no-op.
    pub fn fire<F: FnOnce()>(&self, f: F) -> bool {
        if self.fired.replace(true) {
            return false;
        }
        f();
        true
    }
}

/// True when the event was raised by the element the listener is bound to,
/// not bubbled up from a descendant's own animation.
pub fn is_own_event(ev: &web_sys::Event) -> bool {
    ev.target() == ev.current_target()
}

/// Create an `animationend` handler that completes the guard
pub fn make_on_animationend<F>(once: OneShot, on_done: F) -> impl Fn(web_sys::AnimationEvent) + Clone + 'static
where
    F: Fn() + Clone + 'static,
{
    move |ev: web_sys::AnimationEvent| {
        if !is_own_event(&ev) {
            return;
        }
        once.fire(|| on_done());
    }
}

/// Complete the guard after `millis` if nothing else has.
///
/// The timer is detached; it holds only the shared guard and the callback.
pub fn arm_fallback<F>(once: OneShot, millis: u32, on_done: F)
where
    F: FnOnce() + 'static,
{
    Timeout::new(millis, move || {
        once.fire(on_done);
    })
    .forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once() {
        let once = OneShot::new();
        let count = Cell::new(0);

        assert!(once.fire(|| count.set(count.get() + 1)));
        assert!(!once.fire(|| count.set(count.get() + 1)));
        assert_eq!(count.get(), 1);
        assert!(once.has_fired());
    }

    #[test]
    fn test_clones_share_guard() {
        let once = OneShot::new();
        let timer_side = once.clone();

        assert!(!timer_side.has_fired());
        once.fire(|| {});
        assert!(timer_side.has_fired());
        assert!(!timer_side.fire(|| panic!("second completion must not run")));
    }

    #[test]
    fn test_nested_fire_is_noop() {
        let once = OneShot::new();
        let inner = once.clone();
        let nested_ran = Cell::new(false);

        assert!(once.fire(|| {
            assert!(inner.has_fired());
            assert!(!inner.fire(|| nested_ran.set(true)));
        }));
        assert!(!nested_ran.get());
    }
}
