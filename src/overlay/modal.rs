//! Modal sheet component.
//!
//! A [`Modal`] is the bare overlay: visibility state, an imperative handle, and
//! dismissal callbacks. What it shows is up to the embedder.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::control::ControlMode;
use super::handle::OverlayHandle;
use super::visibility::{DismissTrigger, Transition, VisibilityController};

type Callback = Box<dyn FnMut()>;

/// Optional embedder callbacks fired by dismissal triggers.
///
/// Firing a callback never replaces the close: the overlay closes after the
/// callback returns.
#[derive(Default)]
pub struct DismissCallbacks {
    pub on_backdrop_press: Option<Callback>,
    pub on_back_button_press: Option<Callback>,
    pub on_swipe_complete: Option<Callback>,
}

impl DismissCallbacks {
    #[must_use]
    pub fn on_backdrop_press(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_backdrop_press = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_back_button_press(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_back_button_press = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn on_swipe_complete(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_swipe_complete = Some(Box::new(f));
        self
    }

    pub fn fire(&mut self, trigger: DismissTrigger) {
        let callback = match trigger {
            DismissTrigger::Backdrop => self.on_backdrop_press.as_mut(),
            DismissTrigger::BackButton => self.on_back_button_press.as_mut(),
            DismissTrigger::Swipe => self.on_swipe_complete.as_mut(),
        };
        if let Some(callback) = callback {
            callback();
        }
    }
}

impl fmt::Debug for DismissCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DismissCallbacks")
            .field("on_backdrop_press", &self.on_backdrop_press.is_some())
            .field("on_back_button_press", &self.on_back_button_press.is_some())
            .field("on_swipe_complete", &self.on_swipe_complete.is_some())
            .finish()
    }
}

/// Construction-time modal configuration.
#[derive(Debug, Default)]
pub struct ModalProps {
    /// External visibility. `Some` makes the modal controlled.
    pub is_visible: Option<bool>,
    /// Initial visibility when uncontrolled.
    pub default_visible: bool,
    pub dismiss: DismissCallbacks,
}

/// A modal overlay with dual-mode visibility.
///
/// # Example
///
/// ```
/// use picksheet::overlay::{Modal, ModalProps};
///
/// let mut modal = Modal::new(ModalProps { is_visible: Some(false), ..Default::default() });
/// let handle = modal.handle();
///
/// handle.open();
/// assert!(modal.is_visible());
///
/// // The embedder still says "hidden", so the next update reverts the open.
/// modal.update(Some(false));
/// assert!(!modal.is_visible());
/// ```
#[derive(Debug)]
pub struct Modal {
    visibility: Rc<RefCell<VisibilityController>>,
    dismiss: DismissCallbacks,
}

impl Modal {
    #[must_use]
    pub fn new(props: ModalProps) -> Self {
        Self {
            visibility: Rc::new(RefCell::new(VisibilityController::new(
                props.is_visible,
                props.default_visible,
            ))),
            dismiss: props.dismiss,
        }
    }

    /// Returns a handle that can open/close this modal from anywhere.
    #[must_use]
    pub fn handle(&self) -> OverlayHandle {
        OverlayHandle::bind(&self.visibility)
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visibility.borrow().is_visible()
    }

    #[must_use]
    pub fn mode(&self) -> ControlMode {
        self.visibility.borrow().mode()
    }

    pub fn open(&self) -> Transition {
        self.visibility.borrow_mut().open()
    }

    pub fn close(&self) -> Transition {
        self.visibility.borrow_mut().close()
    }

    /// External-state-changed notification from the embedder.
    pub fn update(&self, is_visible: Option<bool>) -> Transition {
        self.visibility.borrow_mut().sync(is_visible)
    }

    /// Handles a dismissal trigger: fires its callback, then closes.
    pub fn dismiss(&mut self, trigger: DismissTrigger) -> Transition {
        self.dismiss.fire(trigger);
        self.visibility.borrow_mut().dismiss(trigger)
    }
}
