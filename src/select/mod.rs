//! Selectable list engine: filtering, selection reconciliation, and the
//! `Select` component.
//!
//! # Architecture
//!
//! ```text
//! Presentation wiring → Event → handle_event → SelectState mutations → Actions
//!                                                                       ↓
//!                                               Select executes → embedder callbacks
//! ```
//!
//! # Modules
//!
//! - [`filter`]: Order-preserving search filter over field paths
//! - [`state`]: Engine state container and view model computation
//! - [`handler`]: Event processing and state transitions
//! - [`actions`]: Effects surfaced to the embedder
//! - [`component`]: The `Select` component with handle and callbacks

pub mod actions;
pub mod component;
pub mod filter;
pub mod handler;
pub mod state;

pub use actions::Action;
pub use component::Select;
pub use filter::filter_indices;
pub use handler::{handle_event, Event};
pub use state::{index_key, SelectProps, SelectState};
