//! Controlled/uncontrolled state cells.
//!
//! A component input (visibility, value) is *controlled* when the embedder
//! supplies it at construction, and *uncontrolled* otherwise. The mode is fixed
//! for the lifetime of the cell.
//!
//! Both modes keep a local copy that user actions and imperative calls mutate.
//! In controlled mode every external-state-changed notification overwrites that
//! copy, so local changes only last until the embedder's next update.

/// Whether an input is governed by the embedder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlMode {
    /// The embedder supplies the value and re-syncs it on every update.
    Controlled,
    /// The component owns the value after initialization.
    Uncontrolled,
}

impl ControlMode {
    /// Resolves the mode from the presence of an external input, not its value.
    #[must_use]
    pub const fn from_input<S>(input: &Option<S>) -> Self {
        if input.is_some() {
            Self::Controlled
        } else {
            Self::Uncontrolled
        }
    }

    #[must_use]
    pub const fn is_controlled(self) -> bool {
        matches!(self, Self::Controlled)
    }
}

/// Local state paired with the control mode resolved at construction.
///
/// # Example
///
/// ```
/// use picksheet::overlay::{ControlMode, Controlled};
///
/// let mut cell = Controlled::new(Some(false), || true);
/// assert_eq!(cell.mode(), ControlMode::Controlled);
///
/// cell.set(true);
/// assert!(*cell.get());
///
/// cell.sync(Some(false));
/// assert!(!*cell.get());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Controlled<S> {
    mode: ControlMode,
    local: S,
}

impl<S> Controlled<S> {
    /// Initializes from the external input when present, else from `default`.
    pub fn new(external: Option<S>, default: impl FnOnce() -> S) -> Self {
        let mode = ControlMode::from_input(&external);
        Self {
            mode,
            local: external.unwrap_or_else(default),
        }
    }

    #[must_use]
    pub const fn mode(&self) -> ControlMode {
        self.mode
    }

    #[must_use]
    pub const fn get(&self) -> &S {
        &self.local
    }

    pub fn get_mut(&mut self) -> &mut S {
        &mut self.local
    }

    /// Replaces local state, returning the previous value.
    pub fn set(&mut self, value: S) -> S {
        std::mem::replace(&mut self.local, value)
    }

    /// Applies an external-state-changed notification.
    ///
    /// In controlled mode a supplied value unconditionally overwrites local
    /// state. An absent value, or any value in uncontrolled mode, is ignored.
    /// Returns the previous local value when it was overwritten.
    pub fn sync(&mut self, external: Option<S>) -> Option<S> {
        match (self.mode, external) {
            (ControlMode::Controlled, Some(value)) => Some(self.set(value)),
            (ControlMode::Uncontrolled, Some(_)) => {
                tracing::debug!("ignoring external input for uncontrolled state");
                None
            }
            (_, None) => None,
        }
    }
}
