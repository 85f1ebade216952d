//! Checkbox group with dual-mode value.
//!
//! A group owns the set of checked option values. Toggling an option applies
//! the same membership rule as a multi-select (append if absent, remove by
//! equality if present) and reports the updated set to `on_change`. A
//! controlled group only reports; its checked state changes on the next sync.

use std::fmt;

use crate::domain::{toggle_membership, Membership};
use crate::overlay::{ControlMode, Controlled};

type ChangeCallback<V> = Box<dyn FnMut(&[V])>;

/// A group of checkboxes sharing one value set.
///
/// # Example
///
/// ```
/// use picksheet::checkbox::CheckboxGroup;
///
/// let mut group = CheckboxGroup::new(None, Some(vec!["tea"]));
/// group.toggle("coffee");
/// group.toggle("tea");
/// assert_eq!(group.value(), ["coffee"]);
/// assert!(group.is_checked(&"coffee"));
/// ```
pub struct CheckboxGroup<V> {
    value: Controlled<Vec<V>>,
    on_change: Option<ChangeCallback<V>>,
}

impl<V: PartialEq + Clone> CheckboxGroup<V> {
    /// `value` makes the group controlled; otherwise it starts from
    /// `default_value` or empty.
    #[must_use]
    pub fn new(value: Option<Vec<V>>, default_value: Option<Vec<V>>) -> Self {
        Self {
            value: Controlled::new(value, || default_value.unwrap_or_default()),
            on_change: None,
        }
    }

    #[must_use]
    pub fn on_change(mut self, f: impl FnMut(&[V]) + 'static) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn mode(&self) -> ControlMode {
        self.value.mode()
    }

    #[must_use]
    pub fn value(&self) -> &[V] {
        self.value.get()
    }

    /// Checked state of one option.
    #[must_use]
    pub fn is_checked(&self, option: &V) -> bool {
        self.value.get().contains(option)
    }

    /// Toggles `option` and reports the updated set.
    ///
    /// Only an uncontrolled group stores the result.
    pub fn toggle(&mut self, option: V) -> Membership {
        let mut next = self.value.get().clone();
        let membership = toggle_membership(&mut next, option);
        tracing::debug!(?membership, checked = next.len(), mode = ?self.mode(), "checkbox toggled");

        if let Some(on_change) = self.on_change.as_mut() {
            on_change(&next);
        }
        if !self.mode().is_controlled() {
            self.value.set(next);
        }
        membership
    }

    /// External value update from the embedder.
    pub fn sync(&mut self, value: Option<Vec<V>>) -> bool {
        self.value.sync(value).is_some()
    }
}

impl<V: fmt::Debug> fmt::Debug for CheckboxGroup<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckboxGroup")
            .field("value", &self.value)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}
