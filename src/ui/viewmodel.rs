//! View model types representing what a select currently shows.
//!
//! View models are computed from `SelectState::compute_viewmodel` and borrow
//! from it. They contain no business logic, only display-ready data plus the
//! wiring every presentation (default or custom) must use to talk back to the
//! engine: each context hands out the [`Event`] to dispatch for its action.
//!
//! # Example
//!
//! ```rust
//! use picksheet::domain::SelectionValue;
//! use picksheet::select::Event;
//! use picksheet::ui::viewmodel::SubmitContext;
//!
//! let selection = SelectionValue::Multiple(vec![1, 2]);
//! let ctx = SubmitContext { label: "Submit", selection: &selection };
//! assert_eq!(ctx.on_press(), Event::<i32>::Submit);
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::SelectionValue;
use crate::select::Event;

/// User-facing strings used by the default presentation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Labels {
    /// Placeholder shown in an empty search input.
    pub search_placeholder: String,
    /// Label of the default submit control (multi-select only).
    pub submit: String,
    /// No-results message; `{term}` is replaced by the current search term.
    pub no_results: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            search_placeholder: "Search items".to_string(),
            submit: "Submit".to_string(),
            no_results: "No results found for \"{term}\"".to_string(),
        }
    }
}

impl Labels {
    #[must_use]
    pub fn no_results_for(&self, term: &str) -> String {
        self.no_results.replace("{term}", term)
    }
}

/// Complete view model of a select.
#[derive(Debug)]
pub struct SelectViewModel<'a, T, V> {
    /// Whether the overlay is currently shown.
    pub visible: bool,
    pub multiple: bool,
    pub title: Option<&'a str>,
    pub message: Option<&'a str>,
    /// Present only when the select is searchable.
    pub search: Option<SearchInputContext<'a>>,
    pub body: BodyModel<'a, T, V>,
    /// Present only in multi-select mode.
    pub submit: Option<SubmitContext<'a, V>>,
    pub selection: &'a SelectionValue<V>,
}

impl<'a, T, V> SelectViewModel<'a, T, V> {
    /// Context for a caller-supplied footer.
    #[must_use]
    pub const fn footer_context(&self) -> FooterContext<'a, V> {
        FooterContext {
            multiple: self.multiple,
            selection: self.selection,
        }
    }
}

/// Either the row list or the no-results view, never both.
#[derive(Debug)]
pub enum BodyModel<'a, T, V> {
    Rows(Vec<RowContext<'a, T, V>>),
    NoResults(NoResultsContext<'a>),
}

/// Everything a row presentation needs.
#[derive(Debug)]
pub struct RowContext<'a, T, V> {
    pub item: &'a T,
    /// Position in the filtered list.
    pub index: usize,
    /// Position in the source list.
    pub source_index: usize,
    pub key: String,
    pub selection: &'a SelectionValue<V>,
}

impl<T, V: PartialEq + Clone> RowContext<'_, T, V> {
    /// Whether the row's value is currently committed.
    #[must_use]
    pub fn is_selected(&self, value: &V) -> bool {
        self.selection.contains(value)
    }

    /// The event a row dispatches when pressed.
    #[must_use]
    pub fn on_select(&self, value: V) -> Event<V> {
        Event::Select(value)
    }
}

/// Search input wiring.
#[derive(Debug, Clone, Copy)]
pub struct SearchInputContext<'a> {
    pub term: &'a str,
    pub placeholder: &'a str,
}

impl SearchInputContext<'_> {
    #[must_use]
    pub fn on_change<V>(&self, text: impl Into<String>) -> Event<V> {
        Event::Search(text.into())
    }

    #[must_use]
    pub fn clear_text<V>(&self) -> Event<V> {
        Event::ClearSearch
    }

    /// Whether a clear control should be offered.
    #[must_use]
    pub fn has_term(&self) -> bool {
        !self.term.is_empty()
    }
}

/// No-results view wiring.
#[derive(Debug, Clone)]
pub struct NoResultsContext<'a> {
    pub term: &'a str,
    /// The default message with the term filled in.
    pub message: String,
}

/// Submit control wiring.
#[derive(Debug)]
pub struct SubmitContext<'a, V> {
    pub label: &'a str,
    pub selection: &'a SelectionValue<V>,
}

impl<V> SubmitContext<'_, V> {
    #[must_use]
    pub fn on_press(&self) -> Event<V> {
        Event::Submit
    }
}

/// Custom footer wiring.
#[derive(Debug)]
pub struct FooterContext<'a, V> {
    pub multiple: bool,
    pub selection: &'a SelectionValue<V>,
}

impl<V> FooterContext<'_, V> {
    #[must_use]
    pub fn on_submit(&self) -> Event<V> {
        Event::Submit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_results_message_fills_term() {
        let labels = Labels::default();
        assert_eq!(labels.no_results_for("kiwi"), "No results found for \"kiwi\"");

        let custom = Labels {
            no_results: "Nothing matches {term}, sorry".to_string(),
            ..Labels::default()
        };
        assert_eq!(custom.no_results_for("x"), "Nothing matches x, sorry");
    }

    #[test]
    fn contexts_hand_out_wiring_events() {
        let selection = SelectionValue::Multiple(vec!["a"]);
        let row = RowContext {
            item: &(),
            index: 0,
            source_index: 3,
            key: "0".to_string(),
            selection: &selection,
        };
        assert!(row.is_selected(&"a"));
        assert!(!row.is_selected(&"b"));
        assert_eq!(row.on_select("b"), Event::Select("b"));

        let search = SearchInputContext { term: "ap", placeholder: "Search items" };
        assert!(search.has_term());
        assert_eq!(search.on_change::<&str>("app"), Event::Search("app".to_string()));
        assert_eq!(search.clear_text::<&str>(), Event::ClearSearch);
    }
}
