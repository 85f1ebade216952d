//! Overlay visibility state machine.
//!
//! States are `Closed` and `Open`. `open()`/`close()` (direct, through a handle,
//! or via a dismissal trigger) mutate local state in either control mode; an
//! external visibility update only takes effect in controlled mode, where it
//! always wins over whatever local state a prior imperative call left behind.
//!
//! ```text
//!            open() / sync(Some(true))
//!   Closed ────────────────────────────▶ Open
//!      ▲                                  │
//!      └──────────────────────────────────┘
//!     close() / dismiss / sync(Some(false))
//! ```

use super::control::{ControlMode, Controlled};
use super::handle::OverlayTarget;

/// How an overlay was asked to go away by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DismissTrigger {
    /// Tap outside the sheet.
    Backdrop,
    /// Hardware or navigation back action.
    BackButton,
    /// Swipe gesture completed.
    Swipe,
}

/// Outcome of a visibility operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Opened,
    Closed,
    Unchanged,
}

impl Transition {
    const fn between(was_visible: bool, is_visible: bool) -> Self {
        match (was_visible, is_visible) {
            (false, true) => Self::Opened,
            (true, false) => Self::Closed,
            _ => Self::Unchanged,
        }
    }

    #[must_use]
    pub const fn changed(self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

/// Single source of truth for whether an overlay is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityController {
    visible: Controlled<bool>,
}

impl VisibilityController {
    /// Initial state is the external input if provided, else `default_visible`.
    #[must_use]
    pub fn new(external: Option<bool>, default_visible: bool) -> Self {
        Self {
            visible: Controlled::new(external, || default_visible),
        }
    }

    #[must_use]
    pub const fn mode(&self) -> ControlMode {
        self.visible.mode()
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        *self.visible.get()
    }

    fn set(&mut self, visible: bool) -> Transition {
        let was_visible = self.visible.set(visible);
        let transition = Transition::between(was_visible, visible);
        if transition.changed() {
            tracing::debug!(?transition, mode = ?self.mode(), "overlay visibility changed");
        }
        transition
    }

    pub fn open(&mut self) -> Transition {
        self.set(true)
    }

    pub fn close(&mut self) -> Transition {
        self.set(false)
    }

    /// Dismissal triggers close exactly like an explicit `close()`.
    pub fn dismiss(&mut self, trigger: DismissTrigger) -> Transition {
        tracing::debug!(?trigger, "overlay dismissed");
        self.close()
    }

    /// External-state-changed notification carrying the embedder's visibility.
    pub fn sync(&mut self, external: Option<bool>) -> Transition {
        let now = external.unwrap_or_else(|| self.is_visible());
        match self.visible.sync(external) {
            Some(was_visible) => Transition::between(was_visible, now),
            None => Transition::Unchanged,
        }
    }
}

impl OverlayTarget for VisibilityController {
    fn open(&mut self) {
        Self::open(self);
    }

    fn close(&mut self) {
        Self::close(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_prefers_external_then_default() {
        assert!(VisibilityController::new(Some(true), false).is_visible());
        assert!(!VisibilityController::new(Some(false), true).is_visible());
        assert!(VisibilityController::new(None, true).is_visible());
        assert!(!VisibilityController::new(None, false).is_visible());
    }

    #[test]
    fn uncontrolled_open_close_persist() {
        let mut vis = VisibilityController::new(None, false);
        assert_eq!(vis.open(), Transition::Opened);
        assert_eq!(vis.open(), Transition::Unchanged);
        assert_eq!(vis.sync(Some(false)), Transition::Unchanged);
        assert!(vis.is_visible());
        assert_eq!(vis.dismiss(DismissTrigger::Backdrop), Transition::Closed);
        assert!(!vis.is_visible());
    }

    #[test]
    fn controlled_external_update_reverts_imperative_open() {
        let mut vis = VisibilityController::new(Some(false), false);
        assert_eq!(vis.open(), Transition::Opened);
        assert!(vis.is_visible());

        assert_eq!(vis.sync(Some(false)), Transition::Closed);
        assert!(!vis.is_visible());

        // A new imperative call after the render takes effect again.
        vis.open();
        assert!(vis.is_visible());
    }

    #[test]
    fn controlled_sync_reports_opening() {
        let mut vis = VisibilityController::new(Some(false), false);
        assert_eq!(vis.sync(Some(true)), Transition::Opened);
        assert_eq!(vis.sync(Some(true)), Transition::Unchanged);
        assert_eq!(vis.sync(None), Transition::Unchanged);
        assert!(vis.is_visible());
    }
}
