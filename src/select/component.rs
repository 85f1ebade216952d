//! The `Select` component: shared engine state plus embedder callbacks.
//!
//! `Select` wires [`SelectState`] to the outside world. It keeps the state
//! behind `Rc<RefCell<_>>` so an [`OverlayHandle`] can reach it by weak
//! reference, runs [`handle_event`] under a short borrow, and only then executes
//! the resulting actions. Callbacks therefore run with the state released and
//! may freely use the handle.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::domain::{FieldAccessible, SearchSpec, SelectionValue};
use crate::overlay::{ControlMode, DismissCallbacks, OverlayHandle, Transition};
use crate::ui::compose::{compose, Overrides, SelectRenderer, SelectView};

use super::actions::Action;
use super::handler::{handle_event, Event};
use super::state::{index_key, SelectProps, SelectState};

type SelectCallback<V> = Box<dyn FnMut(&SelectionValue<V>)>;
type KeyExtractor<T> = Box<dyn Fn(&T, usize) -> String>;

/// A searchable single/multi select shown inside an overlay.
///
/// # Example
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use picksheet::domain::SelectionValue;
/// use picksheet::select::{Event, Select, SelectProps};
/// use serde_json::json;
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&seen);
/// let mut select = Select::new(SelectProps::new(vec![json!("x"), json!("y")]).multiple(true))
///     .on_select(move |value: &SelectionValue<&str>| sink.borrow_mut().push(value.clone()));
///
/// select.handle().open();
/// select.dispatch(Event::Select("x"));
/// select.dispatch(Event::Select("y"));
/// assert!(select.is_visible());
/// assert_eq!(seen.borrow().last(), Some(&SelectionValue::Multiple(vec!["x", "y"])));
/// ```
pub struct Select<T, V> {
    state: Rc<RefCell<SelectState<T, V>>>,
    on_select: Option<SelectCallback<V>>,
    dismiss: DismissCallbacks,
    key_extractor: KeyExtractor<T>,
}

impl<T, V> Select<T, V>
where
    T: FieldAccessible + 'static,
    V: Clone + PartialEq + fmt::Debug + 'static,
{
    #[must_use]
    pub fn new(props: SelectProps<T, V>) -> Self {
        Self {
            state: Rc::new(RefCell::new(SelectState::new(props))),
            on_select: None,
            dismiss: DismissCallbacks::default(),
            key_extractor: Box::new(index_key::<T>),
        }
    }

    /// Sets the selection callback, invoked with the committed value after
    /// every selection-affecting event.
    #[must_use]
    pub fn on_select(mut self, f: impl FnMut(&SelectionValue<V>) + 'static) -> Self {
        self.on_select = Some(Box::new(f));
        self
    }

    #[must_use]
    pub fn dismiss_callbacks(mut self, callbacks: DismissCallbacks) -> Self {
        self.dismiss = callbacks;
        self
    }

    /// Replaces the default key extractor (filtered index as string).
    #[must_use]
    pub fn key_extractor(mut self, f: impl Fn(&T, usize) -> String + 'static) -> Self {
        self.key_extractor = Box::new(f);
        self
    }

    /// Returns a handle that can open/close this select from anywhere.
    #[must_use]
    pub fn handle(&self) -> OverlayHandle {
        OverlayHandle::bind(&self.state)
    }

    /// Processes an event and executes the resulting actions.
    ///
    /// Returns whether the view changed.
    pub fn dispatch(&mut self, event: Event<V>) -> bool {
        let (rerender, actions) = {
            let mut state = self.state.borrow_mut();
            handle_event(&mut *state, &event)
        };

        for action in actions {
            self.execute(action);
        }
        rerender
    }

    fn execute(&mut self, action: Action<V>) {
        match action {
            Action::Commit(value) => {
                if let Some(on_select) = self.on_select.as_mut() {
                    on_select(&value);
                } else {
                    tracing::debug!(?value, "no selection callback registered");
                }
            }
            Action::Dismissed(trigger) => self.dismiss.fire(trigger),
        }
    }

    pub fn open(&mut self) -> bool {
        self.dispatch(Event::Open)
    }

    pub fn close(&mut self) -> bool {
        self.dispatch(Event::Close)
    }

    /// External visibility update from the embedder.
    pub fn update_visible(&self, is_visible: Option<bool>) -> Transition {
        self.state.borrow_mut().sync_visible(is_visible)
    }

    /// External value update from the embedder.
    pub fn update_value(&self, value: Option<SelectionValue<V>>) -> bool {
        self.state.borrow_mut().sync_value(value)
    }

    pub fn set_data(&self, data: Vec<T>) {
        self.state.borrow_mut().set_data(data);
    }

    pub fn set_search_spec(&self, spec: SearchSpec) {
        self.state.borrow_mut().set_search_spec(spec);
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.state.borrow().is_visible()
    }

    #[must_use]
    pub fn visibility_mode(&self) -> ControlMode {
        self.state.borrow().visibility_mode()
    }

    #[must_use]
    pub fn selection(&self) -> SelectionValue<V> {
        self.state.borrow().selection().clone()
    }

    #[must_use]
    pub fn search_term(&self) -> String {
        self.state.borrow().search_term().to_string()
    }

    /// Runs `f` with read access to the engine state.
    pub fn with_state<R>(&self, f: impl FnOnce(&SelectState<T, V>) -> R) -> R {
        f(&*self.state.borrow())
    }

    /// Composes the current view with a default renderer and overrides.
    pub fn view<R>(&self, base: &R, overrides: &Overrides<T, V, R::Node>) -> SelectView<R::Node>
    where
        R: SelectRenderer<T, V>,
    {
        let state = self.state.borrow();
        let vm = state.compute_viewmodel(&*self.key_extractor);
        compose(&vm, base, overrides)
    }
}

impl<T, V: fmt::Debug> fmt::Debug for Select<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Select")
            .field("on_select", &self.on_select.is_some())
            .field("dismiss", &self.dismiss)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::DismissTrigger;
    use serde_json::{json, Value};
    use std::cell::Cell;

    #[test]
    fn single_select_commits_once_and_closes() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let mut select: Select<Value, &str> =
            Select::new(SelectProps::new(vec![json!("z")]).default_visible(true))
            .on_select(move |value| sink.borrow_mut().push(value.clone()));

        select.dispatch(Event::Select("z"));
        assert_eq!(*calls.borrow(), vec![SelectionValue::Single(Some("z"))]);
        assert!(!select.is_visible());
    }

    #[test]
    fn callback_may_close_through_handle() {
        let select_ref: Rc<RefCell<Option<OverlayHandle>>> = Rc::new(RefCell::new(None));
        let inner = Rc::clone(&select_ref);
        let mut select: Select<Value, i32> = Select::new(SelectProps::new(vec![]).multiple(true))
            .on_select(move |value| {
                if value.len() == 2 {
                    if let Some(handle) = inner.borrow().as_ref() {
                        handle.close();
                    }
                }
            });
        *select_ref.borrow_mut() = Some(select.handle());

        select.open();
        select.dispatch(Event::Select(1));
        assert!(select.is_visible());
        select.dispatch(Event::Select(2));
        assert!(!select.is_visible());
    }

    #[test]
    fn dismissal_fires_callback_and_closes() {
        let backs = Rc::new(Cell::new(0));
        let counter = Rc::clone(&backs);
        let callbacks = DismissCallbacks::default()
            .on_back_button_press(move || counter.set(counter.get() + 1));
        let mut select: Select<Value, i32> =
            Select::new(SelectProps::new(vec![]).default_visible(true))
                .dismiss_callbacks(callbacks);

        assert!(select.dispatch(Event::Dismiss(DismissTrigger::BackButton)));
        assert_eq!(backs.get(), 1);
        assert!(!select.is_visible());
    }

    #[test]
    fn controlled_visibility_wins_over_handle() {
        let select: Select<Value, i32> = Select::new(SelectProps::new(vec![]).visible(false));
        assert_eq!(select.visibility_mode(), ControlMode::Controlled);

        select.handle().open();
        assert!(select.is_visible());
        select.update_visible(Some(false));
        assert!(!select.is_visible());
    }

    #[test]
    fn handle_open_clears_search() {
        let select: Select<Value, i32> = Select::new(
            SelectProps::new(vec![json!({"name": "Apple"})])
                .searchable(SearchSpec::fields(["name"])),
        );
        select.state.borrow_mut().set_search_term("zz");
        select.handle().open();
        assert_eq!(select.search_term(), "");
        assert_eq!(select.with_state(SelectState::filtered_len), 1);
    }
}
