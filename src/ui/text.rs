//! Default line-based presentation.
//!
//! [`TextRenderer`] renders every part of a select as a [`Line`]: the text to
//! show, the [`StyleRole`] it is painted with, and the event it dispatches when
//! pressed. [`render_plain`] and [`render_styled`] flatten a composed view into
//! terminal output.
//!
//! # Layout
//!
//! ```text
//! Pick a fruit                 ← title
//! Fruits in season             ← message
//! > ap                         ← search input (placeholder when empty)
//! [x] Apple                    ← rows, or the no-results message
//! [ ] Grape
//! <Submit>                     ← multi-select only
//! ```

use std::fmt;

use crate::select::Event;

use super::compose::{Body, SelectRenderer, SelectView};
use super::theme::{resolve_style, StyleRole, Theme};
use super::viewmodel::{NoResultsContext, RowContext, SearchInputContext, SubmitContext};

/// One rendered part of a select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<V> {
    pub text: String,
    pub role: StyleRole,
    /// Event dispatched when the line is pressed.
    pub on_press: Option<Event<V>>,
}

impl<V> Line<V> {
    #[must_use]
    pub fn new(text: impl Into<String>, role: StyleRole) -> Self {
        Self {
            text: text.into(),
            role,
            on_press: None,
        }
    }

    #[must_use]
    pub fn pressable(mut self, event: Event<V>) -> Self {
        self.on_press = Some(event);
        self
    }
}

type LabelFn<T> = Box<dyn Fn(&T) -> String>;
type ValueFn<T, V> = Box<dyn Fn(&T) -> Option<V>>;

/// Renders rows with a label and a checkbox marker.
///
/// # Example
///
/// ```rust
/// use picksheet::select::{Select, SelectProps};
/// use picksheet::ui::compose::Overrides;
/// use picksheet::ui::text::{render_plain, TextRenderer};
///
/// let select: Select<String, String> =
///     Select::new(SelectProps::new(vec!["Apple".to_string()]).default_visible(true));
/// let renderer = TextRenderer::new(|s: &String| s.clone(), |s: &String| Some(s.clone()));
/// let view = select.view(&renderer, &Overrides::default());
/// assert_eq!(render_plain(&view), "[ ] Apple");
/// ```
pub struct TextRenderer<T, V> {
    label_of: LabelFn<T>,
    value_of: ValueFn<T, V>,
}

impl<T, V> TextRenderer<T, V> {
    /// `label_of` produces a row's text; `value_of` its selection value. A row
    /// whose value cannot be produced is shown but not pressable.
    #[must_use]
    pub fn new(
        label_of: impl Fn(&T) -> String + 'static,
        value_of: impl Fn(&T) -> Option<V> + 'static,
    ) -> Self {
        Self {
            label_of: Box::new(label_of),
            value_of: Box::new(value_of),
        }
    }
}

impl<T, V> fmt::Debug for TextRenderer<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextRenderer").finish_non_exhaustive()
    }
}

impl<T, V: Clone + PartialEq> SelectRenderer<T, V> for TextRenderer<T, V> {
    type Node = Line<V>;

    fn title(&self, title: &str) -> Line<V> {
        Line::new(title, StyleRole::Title)
    }

    fn message(&self, message: &str) -> Line<V> {
        Line::new(message, StyleRole::Message)
    }

    fn search_input(&self, ctx: &SearchInputContext<'_>) -> Line<V> {
        if ctx.has_term() {
            let role = StyleRole::SearchInput { placeholder: false };
            Line::new(format!("> {}", ctx.term), role).pressable(ctx.clear_text())
        } else {
            let role = StyleRole::SearchInput { placeholder: true };
            Line::new(format!("> {}", ctx.placeholder), role)
        }
    }

    fn row(&self, ctx: &RowContext<'_, T, V>) -> Line<V> {
        let label = (self.label_of)(ctx.item);
        match (self.value_of)(ctx.item) {
            Some(value) => {
                let selected = ctx.is_selected(&value);
                let marker = if selected { "[x]" } else { "[ ]" };
                Line::new(format!("{marker} {label}"), StyleRole::Row { selected })
                    .pressable(ctx.on_select(value))
            }
            None => {
                tracing::debug!(index = ctx.source_index, "row has no value; not pressable");
                Line::new(format!("[ ] {label}"), StyleRole::Row { selected: false })
            }
        }
    }

    fn no_results(&self, ctx: &NoResultsContext<'_>) -> Line<V> {
        Line::new(ctx.message.clone(), StyleRole::NoResults)
    }

    fn submit(&self, ctx: &SubmitContext<'_, V>) -> Line<V> {
        Line::new(format!("<{}>", ctx.label), StyleRole::Submit).pressable(ctx.on_press())
    }
}

fn lines<V>(view: &SelectView<Line<V>>) -> Vec<&Line<V>> {
    if !view.visible {
        return Vec::new();
    }

    let mut out: Vec<&Line<V>> = view.header.iter().collect();
    out.extend(view.search.iter());
    match &view.body {
        Body::Rows(rows) => out.extend(rows.iter().map(|(_, line)| line)),
        Body::NoResults(line) => out.push(line),
    }
    out.extend(view.footer.iter());
    out
}

/// Flattens a view into unstyled text, one part per line. Hidden views render
/// as the empty string.
#[must_use]
pub fn render_plain<V>(view: &SelectView<Line<V>>) -> String {
    lines(view)
        .into_iter()
        .map(|line| line.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Flattens a view into ANSI-styled text using `theme`.
#[must_use]
pub fn render_styled<V>(view: &SelectView<Line<V>>, theme: &Theme) -> String {
    lines(view)
        .into_iter()
        .map(|line| resolve_style(theme, line.role).paint(&line.text))
        .collect::<Vec<_>>()
        .join("\n")
}
