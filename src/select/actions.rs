//! Actions representing effects the embedder must observe.
//!
//! The event handler mutates [`SelectState`](super::SelectState) and returns a
//! `Vec<Action>`; the [`Select`](super::Select) component executes them by
//! invoking embedder callbacks after its state borrow has been released.

use crate::domain::SelectionValue;
use crate::overlay::DismissTrigger;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action<V> {
    /// Report the committed value to the selection callback.
    ///
    /// Emitted after every selection-affecting event: the new single value, or
    /// the full updated set after each multi-select toggle.
    Commit(SelectionValue<V>),

    /// Fire the embedder's dismissal callback for this trigger.
    Dismissed(DismissTrigger),
}
