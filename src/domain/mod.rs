//! Domain layer for picksheet.
//!
//! Core types with no knowledge of overlays or rendering.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`field`]: Dot-path lookup over items and the search field specification
//! - [`selection`]: Committed selection values and membership toggling
//!
//! # Examples
//!
//! ```
//! use picksheet::domain::{SelectionValue, SearchSpec};
//!
//! let mut selection = SelectionValue::empty(true);
//! selection.apply("x");
//! assert!(selection.contains(&"x"));
//! assert!(SearchSpec::fields(["name"]).is_searchable());
//! ```

pub mod error;
pub mod field;
pub mod selection;

pub use error::{PicksheetError, Result};
pub use field::{resolve, FieldAccessible, FieldPath, SearchSpec};
pub use selection::{toggle_membership, Membership, SelectionValue};
