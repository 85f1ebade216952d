//! Renderer seam: default presentation plus caller-supplied overrides.
//!
//! A [`SelectRenderer`] provides the default node for every part of a select.
//! [`Overrides`] replace individual parts. An override that is supplied is
//! always used; there is no fallback to the default once one is given.
//! Whichever presentation renders a part, it receives the same context and so
//! the same wiring.

use std::fmt;

use super::viewmodel::{
    BodyModel, FooterContext, NoResultsContext, RowContext, SearchInputContext, SelectViewModel,
    SubmitContext,
};

/// Default presentation of a select's parts.
pub trait SelectRenderer<T, V> {
    type Node;

    fn title(&self, title: &str) -> Self::Node;
    fn message(&self, message: &str) -> Self::Node;
    fn search_input(&self, ctx: &SearchInputContext<'_>) -> Self::Node;
    fn row(&self, ctx: &RowContext<'_, T, V>) -> Self::Node;
    fn no_results(&self, ctx: &NoResultsContext<'_>) -> Self::Node;
    fn submit(&self, ctx: &SubmitContext<'_, V>) -> Self::Node;
}

/// Caller-supplied replacements for individual parts.
pub struct Overrides<T, V, N> {
    pub title: Option<Box<dyn Fn(&str) -> N>>,
    pub message: Option<Box<dyn Fn(&str) -> N>>,
    pub search_input: Option<Box<dyn for<'a> Fn(&SearchInputContext<'a>) -> N>>,
    pub row: Option<Box<dyn for<'a> Fn(&RowContext<'a, T, V>) -> N>>,
    pub no_results: Option<Box<dyn for<'a> Fn(&NoResultsContext<'a>) -> N>>,
    pub submit: Option<Box<dyn for<'a> Fn(&SubmitContext<'a, V>) -> N>>,
    /// Replaces the whole footer, including the submit control.
    pub footer: Option<Box<dyn for<'a> Fn(&FooterContext<'a, V>) -> N>>,
}

impl<T, V, N> Default for Overrides<T, V, N> {
    fn default() -> Self {
        Self {
            title: None,
            message: None,
            search_input: None,
            row: None,
            no_results: None,
            submit: None,
            footer: None,
        }
    }
}

impl<T, V, N> fmt::Debug for Overrides<T, V, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Overrides")
            .field("title", &self.title.is_some())
            .field("message", &self.message.is_some())
            .field("search_input", &self.search_input.is_some())
            .field("row", &self.row.is_some())
            .field("no_results", &self.no_results.is_some())
            .field("submit", &self.submit.is_some())
            .field("footer", &self.footer.is_some())
            .finish()
    }
}

/// The composed presentation of a select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectView<N> {
    pub visible: bool,
    /// Title and message, in that order, when present.
    pub header: Vec<N>,
    pub search: Option<N>,
    pub body: Body<N>,
    pub footer: Option<N>,
}

/// Rendered body: keyed rows, or the no-results view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body<N> {
    Rows(Vec<(String, N)>),
    NoResults(N),
}

/// Composes a view from a view model, a default renderer, and overrides.
pub fn compose<T, V, R>(
    vm: &SelectViewModel<'_, T, V>,
    base: &R,
    overrides: &Overrides<T, V, R::Node>,
) -> SelectView<R::Node>
where
    R: SelectRenderer<T, V>,
{
    let mut header = Vec::new();
    if let Some(title) = vm.title {
        header.push(match &overrides.title {
            Some(render) => render(title),
            None => base.title(title),
        });
    }
    if let Some(message) = vm.message {
        header.push(match &overrides.message {
            Some(render) => render(message),
            None => base.message(message),
        });
    }

    let search = vm.search.as_ref().map(|ctx| match &overrides.search_input {
        Some(render) => render(ctx),
        None => base.search_input(ctx),
    });

    let body = match &vm.body {
        BodyModel::Rows(rows) => Body::Rows(
            rows.iter()
                .map(|ctx| {
                    let node = match &overrides.row {
                        Some(render) => render(ctx),
                        None => base.row(ctx),
                    };
                    (ctx.key.clone(), node)
                })
                .collect(),
        ),
        BodyModel::NoResults(ctx) => Body::NoResults(match &overrides.no_results {
            Some(render) => render(ctx),
            None => base.no_results(ctx),
        }),
    };

    let footer = match (&overrides.footer, &vm.submit) {
        (Some(render), _) => Some(render(&vm.footer_context())),
        (None, Some(ctx)) => Some(match &overrides.submit {
            Some(render) => render(ctx),
            None => base.submit(ctx),
        }),
        (None, None) => None,
    };

    SelectView {
        visible: vm.visible,
        header,
        search,
        body,
        footer,
    }
}
