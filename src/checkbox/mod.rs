//! Checkbox groups sharing the select's membership rules.

pub mod group;

pub use group::CheckboxGroup;
