//! Presentation layer: view models, the renderer seam, and theming.
//!
//! The engine never draws anything itself. It computes a view model, and a
//! [`SelectRenderer`] plus caller [`Overrides`] turn that into nodes of the
//! embedder's choice. [`text`] is the built-in line renderer used by the CLI.
//!
//! # Architecture
//!
//! ```text
//! SelectState → compute_viewmodel → SelectViewModel → compose → SelectView<Node>
//!                                                        ↑
//!                                         SelectRenderer + Overrides
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready contexts carrying their wiring events
//! - [`compose`]: Renderer trait, overrides, and view composition
//! - [`text`]: Default line renderer and terminal output
//! - [`theme`]: Color schemes and the style resolver

pub mod compose;
pub mod text;
pub mod theme;
pub mod viewmodel;

pub use compose::{compose, Body, Overrides, SelectRenderer, SelectView};
pub use text::{render_plain, render_styled, Line, TextRenderer};
pub use theme::{resolve_style, Style, StyleRole, Theme};
pub use viewmodel::{Labels, SelectViewModel};
