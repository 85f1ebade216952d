//! Select engine state and view model computation.
//!
//! [`SelectState`] owns the candidate items, the search term and its filtered
//! result, the committed selection, and the overlay visibility. It is the single
//! source of truth for what a select shows and which values are selected.
//!
//! # State Components
//!
//! - **Items**: Source sequence supplied by the embedder, never mutated here
//! - **Filtered**: Source indices matching the current search, recomputed from
//!   scratch whenever the term, the search spec, or the items change
//! - **Selection**: Dual-mode committed value (single or ordered set)
//! - **Visibility**: Dual-mode overlay state; opening clears the search
//!
//! # Example
//!
//! ```rust
//! use picksheet::domain::SearchSpec;
//! use picksheet::select::{SelectProps, SelectState};
//! use serde_json::json;
//!
//! let props = SelectProps::new(vec![json!({"name": "Apple"}), json!({"name": "Banana"})])
//!     .searchable(SearchSpec::fields(["name"]));
//! let mut state: SelectState<_, String> = SelectState::new(props);
//! state.set_search_term("ap");
//! assert_eq!(state.filtered_len(), 1);
//! ```

use crate::domain::{FieldAccessible, Membership, SearchSpec, SelectionValue};
use crate::overlay::{
    ControlMode, Controlled, DismissTrigger, OverlayTarget, Transition, VisibilityController,
};
use crate::ui::viewmodel::{
    BodyModel, Labels, NoResultsContext, RowContext, SearchInputContext, SelectViewModel,
    SubmitContext,
};

use super::filter::filter_indices;

/// Construction-time configuration for a select.
///
/// Built with [`SelectProps::new`] and chained setters.
#[derive(Debug, Clone)]
pub struct SelectProps<T, V> {
    /// External visibility. `Some` makes visibility controlled.
    pub is_visible: Option<bool>,
    /// Initial visibility when uncontrolled.
    pub default_visible: bool,
    /// External value. `Some` makes the selection controlled.
    pub value: Option<SelectionValue<V>>,
    /// Initial value when uncontrolled.
    pub default_value: Option<SelectionValue<V>>,
    pub multiple: bool,
    pub data: Vec<T>,
    pub searchable: SearchSpec,
    pub title: Option<String>,
    pub message: Option<String>,
    pub labels: Labels,
}

impl<T, V> SelectProps<T, V> {
    #[must_use]
    pub fn new(data: Vec<T>) -> Self {
        Self {
            is_visible: None,
            default_visible: false,
            value: None,
            default_value: None,
            multiple: false,
            data,
            searchable: SearchSpec::Disabled,
            title: None,
            message: None,
            labels: Labels::default(),
        }
    }

    #[must_use]
    pub const fn visible(mut self, visible: bool) -> Self {
        self.is_visible = Some(visible);
        self
    }

    #[must_use]
    pub const fn default_visible(mut self, visible: bool) -> Self {
        self.default_visible = visible;
        self
    }

    #[must_use]
    pub fn value(mut self, value: SelectionValue<V>) -> Self {
        self.value = Some(value);
        self
    }

    #[must_use]
    pub fn default_value(mut self, value: SelectionValue<V>) -> Self {
        self.default_value = Some(value);
        self
    }

    #[must_use]
    pub const fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    #[must_use]
    pub fn searchable(mut self, spec: SearchSpec) -> Self {
        self.searchable = spec;
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }
}

/// Central select engine state.
#[derive(Debug, Clone)]
pub struct SelectState<T, V> {
    items: Vec<T>,
    search_spec: SearchSpec,
    search_term: String,
    filtered: Vec<usize>,
    multiple: bool,
    selection: Controlled<SelectionValue<V>>,
    visibility: VisibilityController,
    title: Option<String>,
    message: Option<String>,
    labels: Labels,
}

impl<T: FieldAccessible, V: Clone + PartialEq> SelectState<T, V> {
    #[must_use]
    pub fn new(props: SelectProps<T, V>) -> Self {
        let multiple = props.multiple;
        let external = props.value.map(|v| v.into_mode(multiple));
        let default_value = props.default_value;
        let selection = Controlled::new(external, || {
            default_value.map_or_else(|| SelectionValue::empty(multiple), |v| v.into_mode(multiple))
        });

        let mut state = Self {
            items: props.data,
            search_spec: props.searchable,
            search_term: String::new(),
            filtered: Vec::new(),
            multiple,
            selection,
            visibility: VisibilityController::new(props.is_visible, props.default_visible),
            title: props.title,
            message: props.message,
            labels: props.labels,
        };
        state.apply_search_filter();
        state
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    #[must_use]
    pub const fn visibility_mode(&self) -> ControlMode {
        self.visibility.mode()
    }

    #[must_use]
    pub const fn value_mode(&self) -> ControlMode {
        self.selection.mode()
    }

    #[must_use]
    pub const fn is_multiple(&self) -> bool {
        self.multiple
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    #[must_use]
    pub fn search_spec(&self) -> &SearchSpec {
        &self.search_spec
    }

    #[must_use]
    pub fn is_searchable(&self) -> bool {
        self.search_spec.is_searchable()
    }

    #[must_use]
    pub const fn selection(&self) -> &SelectionValue<V> {
        self.selection.get()
    }

    #[must_use]
    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    /// Filtered items as `(source_index, item)`, in source order.
    pub fn filtered(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.filtered.iter().map(|&index| (index, &self.items[index]))
    }

    #[must_use]
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Recomputes the filtered list from the current items, term, and spec.
    pub fn apply_search_filter(&mut self) {
        let _span = tracing::debug_span!(
            "apply_search_filter",
            total_items = self.items.len(),
            term_len = self.search_term.len(),
        )
        .entered();

        self.filtered = filter_indices(&self.items, &self.search_term, &self.search_spec);

        tracing::debug!(filtered_count = self.filtered.len(), "search filter applied");
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term == self.search_term {
            return;
        }
        self.search_term = term;
        self.apply_search_filter();
    }

    pub fn clear_search(&mut self) {
        self.set_search_term(String::new());
    }

    /// Replaces the source items and re-filters.
    pub fn set_data(&mut self, items: Vec<T>) {
        self.items = items;
        self.apply_search_filter();
    }

    /// Replaces the searchable field specification and re-filters.
    pub fn set_search_spec(&mut self, spec: SearchSpec) {
        if spec == self.search_spec {
            return;
        }
        self.search_spec = spec;
        self.apply_search_filter();
    }

    fn after_visibility(&mut self, transition: Transition) -> Transition {
        if transition == Transition::Opened {
            self.clear_search();
        }
        transition
    }

    pub fn open(&mut self) -> Transition {
        let transition = self.visibility.open();
        self.after_visibility(transition)
    }

    pub fn close(&mut self) -> Transition {
        self.visibility.close()
    }

    pub fn dismiss(&mut self, trigger: DismissTrigger) -> Transition {
        self.visibility.dismiss(trigger)
    }

    /// External visibility update from the embedder.
    pub fn sync_visible(&mut self, is_visible: Option<bool>) -> Transition {
        let transition = self.visibility.sync(is_visible);
        self.after_visibility(transition)
    }

    /// External value update from the embedder. Returns whether local state
    /// was overwritten.
    pub fn sync_value(&mut self, value: Option<SelectionValue<V>>) -> bool {
        let multiple = self.multiple;
        self.selection
            .sync(value.map(|v| v.into_mode(multiple)))
            .is_some()
    }

    /// Reconciles one selection event into the committed value.
    ///
    /// Single mode replaces the value and closes the overlay. Multi mode toggles
    /// membership and leaves the overlay open. Returns the committed value to
    /// report to the embedder.
    pub fn select(&mut self, value: V) -> SelectionValue<V> {
        let membership = self.selection.get_mut().apply(value);
        tracing::debug!(?membership, selected = self.selection.get().len(), "selection updated");

        if membership == Membership::Replaced {
            self.close();
        }
        self.selection.get().clone()
    }

    /// Explicit submission: closes the overlay, leaves the selection alone.
    pub fn submit(&mut self) -> Transition {
        self.close()
    }

    /// Computes what the select currently shows.
    ///
    /// `key_extractor` receives each filtered item with its position in the
    /// filtered list.
    pub fn compute_viewmodel<'a>(
        &'a self,
        key_extractor: &dyn Fn(&T, usize) -> String,
    ) -> SelectViewModel<'a, T, V> {
        let selection = self.selection.get();

        let search = self.is_searchable().then(|| SearchInputContext {
            term: &self.search_term,
            placeholder: &self.labels.search_placeholder,
        });

        let body = if self.filtered.is_empty() {
            BodyModel::NoResults(NoResultsContext {
                term: &self.search_term,
                message: self.labels.no_results_for(&self.search_term),
            })
        } else {
            BodyModel::Rows(
                self.filtered()
                    .enumerate()
                    .map(|(index, (source_index, item))| RowContext {
                        key: key_extractor(item, index),
                        item,
                        index,
                        source_index,
                        selection,
                    })
                    .collect(),
            )
        };

        let submit = self.multiple.then(|| SubmitContext {
            label: &self.labels.submit,
            selection,
        });

        SelectViewModel {
            visible: self.is_visible(),
            multiple: self.multiple,
            title: self.title.as_deref(),
            message: self.message.as_deref(),
            search,
            body,
            submit,
            selection,
        }
    }
}

impl<T: FieldAccessible, V: Clone + PartialEq> OverlayTarget for SelectState<T, V> {
    fn open(&mut self) {
        Self::open(self);
    }

    fn close(&mut self) {
        Self::close(self);
    }
}

/// Default key extractor: the filtered position as a string.
#[must_use]
pub fn index_key<T>(_item: &T, index: usize) -> String {
    index.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn fruits() -> Vec<Value> {
        vec![json!({"name": "Apple"}), json!({"name": "Banana"}), json!({"name": "Cherry"})]
    }

    fn searchable(multiple: bool) -> SelectState<Value, &'static str> {
        SelectState::new(
            SelectProps::new(fruits())
                .searchable(SearchSpec::fields(["name"]))
                .multiple(multiple),
        )
    }

    #[test]
    fn starts_closed_with_everything_visible() {
        let state = searchable(false);
        assert!(!state.is_visible());
        assert_eq!(state.filtered_len(), 3);
        assert_eq!(state.selection(), &SelectionValue::Single(None));
    }

    #[test]
    fn filter_follows_term_spec_and_data() {
        let mut state = searchable(false);
        state.set_search_term("an");
        assert_eq!(state.filtered().map(|(i, _)| i).collect::<Vec<_>>(), vec![1]);

        state.set_data(vec![json!({"name": "Mango"}), json!({"name": "Kiwi"})]);
        assert_eq!(state.filtered().map(|(i, _)| i).collect::<Vec<_>>(), vec![0]);

        state.set_search_spec(SearchSpec::Disabled);
        assert_eq!(state.filtered_len(), 2);
        assert_eq!(state.items().len(), 2);
    }

    #[test]
    fn opening_clears_search() {
        let mut state = searchable(false);
        state.open();
        state.set_search_term("zzz");
        assert_eq!(state.filtered_len(), 0);

        state.close();
        assert_eq!(state.search_term(), "zzz");
        assert_eq!(state.open(), Transition::Opened);
        assert_eq!(state.search_term(), "");
        assert_eq!(state.filtered_len(), 3);
    }

    #[test]
    fn single_select_replaces_and_closes() {
        let mut state = searchable(false);
        state.open();
        assert_eq!(state.select("z"), SelectionValue::Single(Some("z")));
        assert!(!state.is_visible());
    }

    #[test]
    fn multi_select_toggles_and_stays_open() {
        let mut state = searchable(true);
        state.open();
        assert_eq!(state.select("x"), SelectionValue::Multiple(vec!["x"]));
        assert_eq!(state.select("y"), SelectionValue::Multiple(vec!["x", "y"]));
        assert_eq!(state.select("x"), SelectionValue::Multiple(vec!["y"]));
        assert!(state.is_visible());

        assert_eq!(state.submit(), Transition::Closed);
        assert_eq!(state.selection(), &SelectionValue::Multiple(vec!["y"]));
    }

    #[test]
    fn controlled_value_is_resynced() {
        let mut state: SelectState<Value, &str> = SelectState::new(
            SelectProps::new(fruits())
                .multiple(true)
                .value(SelectionValue::Multiple(vec!["a"])),
        );
        assert_eq!(state.value_mode(), ControlMode::Controlled);

        state.select("b");
        assert_eq!(state.selection().as_slice(), ["a", "b"]);

        assert!(state.sync_value(Some(SelectionValue::Single(Some("c")))));
        assert_eq!(state.selection(), &SelectionValue::Multiple(vec!["c"]));
    }

    #[test]
    fn uncontrolled_default_value_is_coerced() {
        let state: SelectState<Value, i32> = SelectState::new(
            SelectProps::new(fruits())
                .multiple(true)
                .default_value(SelectionValue::Multiple(vec![1, 1, 2])),
        );
        assert_eq!(state.value_mode(), ControlMode::Uncontrolled);
        assert_eq!(state.selection(), &SelectionValue::Multiple(vec![1, 2]));
    }

    #[test]
    fn controlled_visibility_sync_opening_clears_search() {
        let mut state: SelectState<Value, i32> = SelectState::new(
            SelectProps::new(fruits())
                .searchable(SearchSpec::fields(["name"]))
                .visible(false),
        );
        state.set_search_term("ch");
        assert_eq!(state.sync_visible(Some(true)), Transition::Opened);
        assert_eq!(state.search_term(), "");
    }

    #[test]
    fn viewmodel_switches_to_no_results() {
        let mut state = searchable(true);
        state.set_search_term("xyz");
        let vm = state.compute_viewmodel(&index_key::<Value>);
        match vm.body {
            BodyModel::NoResults(ctx) => {
                assert_eq!(ctx.term, "xyz");
                assert_eq!(ctx.message, "No results found for \"xyz\"");
            }
            BodyModel::Rows(_) => panic!("expected no-results body"),
        }
        assert!(vm.submit.is_some());
    }

    #[test]
    fn viewmodel_rows_carry_filtered_and_source_indices() {
        let mut state = searchable(false);
        state.set_search_term("e");
        let vm = state.compute_viewmodel(&|item: &Value, _: usize| item["name"].to_string());
        let BodyModel::Rows(rows) = vm.body else {
            panic!("expected rows");
        };
        let summary: Vec<_> = rows
            .iter()
            .map(|r| (r.index, r.source_index, r.key.as_str()))
            .collect();
        assert_eq!(summary, vec![(0, 0, "\"Apple\""), (1, 2, "\"Cherry\"")]);
        assert!(vm.search.is_some());
        assert!(vm.submit.is_none());
    }
}
