//! Imperative open/close handles.
//!
//! An [`OverlayHandle`] lets a parent force-show or force-hide an overlay
//! regardless of its control mode. It holds two callbacks bound when the handle
//! is created; components bind them to a weak reference of their own state, so
//! the handle never keeps an overlay alive and never reads its state.
//!
//! Against a controlled overlay the effect lasts until the embedder's next
//! visibility update.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// State that can be shown or hidden through a handle.
pub trait OverlayTarget {
    fn open(&mut self);
    fn close(&mut self);
}

/// Plain handle with `open()`/`close()` callbacks.
///
/// # Example
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use picksheet::overlay::{OverlayHandle, VisibilityController};
///
/// let overlay = Rc::new(RefCell::new(VisibilityController::new(None, false)));
/// let handle = OverlayHandle::bind(&overlay);
///
/// handle.open();
/// assert!(overlay.borrow().is_visible());
/// handle.close();
/// assert!(!overlay.borrow().is_visible());
/// ```
pub struct OverlayHandle {
    open: Box<dyn Fn()>,
    close: Box<dyn Fn()>,
}

impl OverlayHandle {
    pub fn new(open: impl Fn() + 'static, close: impl Fn() + 'static) -> Self {
        Self {
            open: Box::new(open),
            close: Box::new(close),
        }
    }

    /// Binds a handle to shared overlay state through a weak reference.
    ///
    /// Calls after the state is dropped, or while it is already mutably
    /// borrowed (a re-entrant call from inside the overlay's own update), are
    /// logged and ignored.
    pub fn bind<S: OverlayTarget + 'static>(target: &Rc<RefCell<S>>) -> Self {
        let open_target = Rc::downgrade(target);
        let close_target = Rc::downgrade(target);
        Self::new(
            move || with_target(&open_target, "open", <S as OverlayTarget>::open),
            move || with_target(&close_target, "close", <S as OverlayTarget>::close),
        )
    }

    pub fn open(&self) {
        (self.open)();
    }

    pub fn close(&self) {
        (self.close)();
    }
}

impl fmt::Debug for OverlayHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlayHandle").finish_non_exhaustive()
    }
}

fn with_target<S>(target: &Weak<RefCell<S>>, operation: &'static str, apply: fn(&mut S)) {
    let Some(target) = target.upgrade() else {
        tracing::debug!(operation, "overlay handle used after overlay was dropped");
        return;
    };
    let Ok(mut state) = target.try_borrow_mut() else {
        tracing::warn!(operation, "overlay is busy, ignoring re-entrant handle call");
        return;
    };
    apply(&mut *state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::VisibilityController;
    use std::cell::Cell;

    #[test]
    fn custom_callbacks_are_invoked() {
        let opened = Rc::new(Cell::new(0));
        let closed = Rc::new(Cell::new(0));
        let (o, c) = (Rc::clone(&opened), Rc::clone(&closed));
        let handle = OverlayHandle::new(move || o.set(o.get() + 1), move || c.set(c.get() + 1));

        handle.open();
        handle.open();
        handle.close();
        assert_eq!(opened.get(), 2);
        assert_eq!(closed.get(), 1);
    }

    #[test]
    fn dropped_target_is_a_no_op() {
        let overlay = Rc::new(RefCell::new(VisibilityController::new(None, false)));
        let handle = OverlayHandle::bind(&overlay);
        drop(overlay);
        handle.open();
        handle.close();
    }

    #[test]
    fn busy_target_is_not_mutated() {
        let overlay = Rc::new(RefCell::new(VisibilityController::new(None, false)));
        let handle = OverlayHandle::bind(&overlay);
        {
            let _guard = overlay.borrow_mut();
            handle.open();
        }
        assert!(!overlay.borrow().is_visible());
    }
}
