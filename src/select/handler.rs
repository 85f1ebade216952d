//! Event handling and state transition logic.
//!
//! # Architecture
//!
//! 1. Events arrive from presentation wiring (row press, search input, submit
//!    control) or from the component's own imperative API
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `SelectState` methods
//! 4. Actions are collected and returned for execution
//!
//! The returned flag tells the caller whether the view changed and should be
//! recomposed.

use crate::domain::FieldAccessible;
use crate::overlay::DismissTrigger;

use super::actions::Action;
use super::state::SelectState;

/// Discrete user or imperative events a select reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<V> {
    /// Show the overlay; clears the search term.
    Open,
    /// Hide the overlay.
    Close,
    /// The user dismissed the overlay (backdrop, back, swipe).
    Dismiss(DismissTrigger),
    /// The search input text changed.
    Search(String),
    /// The search input's clear control was pressed.
    ClearSearch,
    /// A row was pressed with its value.
    Select(V),
    /// The submit control was pressed.
    Submit,
}

/// Processes an event, mutates state, and returns `(rerender, actions)`.
///
/// # Example
///
/// ```rust
/// use picksheet::domain::SelectionValue;
/// use picksheet::select::{handle_event, Action, Event, SelectProps, SelectState};
/// use serde_json::{json, Value};
///
/// let mut state: SelectState<Value, &str> = SelectState::new(SelectProps::new(vec![json!("z")]));
/// let (_, actions) = handle_event(&mut state, &Event::Select("z"));
/// assert_eq!(actions, vec![Action::Commit(SelectionValue::Single(Some("z")))]);
/// ```
pub fn handle_event<T, V>(state: &mut SelectState<T, V>, event: &Event<V>) -> (bool, Vec<Action<V>>)
where
    T: FieldAccessible,
    V: Clone + PartialEq + std::fmt::Debug,
{
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Open => (state.open().changed(), vec![]),
        Event::Close => (state.close().changed(), vec![]),
        Event::Dismiss(trigger) => {
            let transition = state.dismiss(*trigger);
            (transition.changed(), vec![Action::Dismissed(*trigger)])
        }
        Event::Search(text) => {
            if !state.is_searchable() {
                tracing::debug!("search input on a non-searchable select");
                return (false, vec![]);
            }
            state.set_search_term(text.as_str());
            tracing::trace!(term = %state.search_term(), "search term updated");
            (true, vec![])
        }
        Event::ClearSearch => {
            let had_term = !state.search_term().is_empty();
            state.clear_search();
            (had_term, vec![])
        }
        Event::Select(value) => {
            let committed = state.select(value.clone());
            (true, vec![Action::Commit(committed)])
        }
        Event::Submit => {
            if !state.is_multiple() {
                tracing::debug!("submit on a single-select");
            }
            (state.submit().changed(), vec![])
        }
    }
}
