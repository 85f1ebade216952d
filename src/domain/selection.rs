//! Committed selection values and membership toggling.
//!
//! A [`SelectionValue`] is either a single optional value (single-select) or an
//! ordered, duplicate-free sequence (multi-select). Equality is by value, never
//! by position.

/// Result of applying one selection event to a [`SelectionValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
    /// Single-select: the value replaced whatever was committed before.
    Replaced,
    /// Multi-select: the value was absent and has been appended.
    Added,
    /// Multi-select: the value was present and has been removed.
    Removed,
}

/// Toggles `value` in `values`: removes the first equal element if present,
/// appends it otherwise. The order of the remaining elements is preserved.
pub fn toggle_membership<V: PartialEq>(values: &mut Vec<V>, value: V) -> Membership {
    if let Some(index) = values.iter().position(|v| *v == value) {
        values.remove(index);
        Membership::Removed
    } else {
        values.push(value);
        Membership::Added
    }
}

/// Drops later duplicates, keeping the first occurrence of each value.
fn dedup_in_order<V: PartialEq>(values: Vec<V>) -> Vec<V> {
    let mut unique: Vec<V> = Vec::with_capacity(values.len());
    for value in values {
        if !unique.contains(&value) {
            unique.push(value);
        }
    }
    unique
}

/// The value(s) a select reports to its embedder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionValue<V> {
    /// Single-select mode.
    Single(Option<V>),
    /// Multi-select mode; never holds the same value twice.
    Multiple(Vec<V>),
}

impl<V> Default for SelectionValue<V> {
    fn default() -> Self {
        Self::Single(None)
    }
}

impl<V: PartialEq> SelectionValue<V> {
    /// The empty value for the given mode.
    #[must_use]
    pub const fn empty(multiple: bool) -> Self {
        if multiple {
            Self::Multiple(Vec::new())
        } else {
            Self::Single(None)
        }
    }

    /// Coerces the value into the requested mode.
    ///
    /// A single value becomes a one-element set, a set collapses to its first
    /// element, and duplicates in a set are dropped keeping first occurrence.
    #[must_use]
    pub fn into_mode(self, multiple: bool) -> Self {
        match (self, multiple) {
            (Self::Multiple(values), true) => {
                let before = values.len();
                let unique = dedup_in_order(values);
                if unique.len() != before {
                    let dropped = before - unique.len();
                    tracing::debug!(dropped, "dropped duplicate selection values");
                }
                Self::Multiple(unique)
            }
            (Self::Single(value), true) => Self::Multiple(value.into_iter().collect()),
            (Self::Multiple(values), false) => Self::Single(values.into_iter().next()),
            (single @ Self::Single(_), false) => single,
        }
    }

    #[must_use]
    pub const fn is_multiple(&self) -> bool {
        matches!(self, Self::Multiple(_))
    }

    /// Whether `value` is currently committed.
    #[must_use]
    pub fn contains(&self, value: &V) -> bool {
        self.as_slice().contains(value)
    }

    /// All committed values in order (zero or one in single mode).
    #[must_use]
    pub fn as_slice(&self) -> &[V] {
        match self {
            Self::Single(value) => value.as_slice(),
            Self::Multiple(values) => values,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Applies one selection event.
    ///
    /// Single mode replaces the value outright; multi mode toggles membership.
    pub fn apply(&mut self, value: V) -> Membership {
        match self {
            Self::Single(current) => {
                *current = Some(value);
                Membership::Replaced
            }
            Self::Multiple(values) => toggle_membership(values, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_restores_original_order() {
        let mut values = vec!["a", "b", "c"];
        assert_eq!(toggle_membership(&mut values, "x"), Membership::Added);
        assert_eq!(toggle_membership(&mut values, "x"), Membership::Removed);
        assert_eq!(values, ["a", "b", "c"]);

        assert_eq!(toggle_membership(&mut values, "b"), Membership::Removed);
        assert_eq!(toggle_membership(&mut values, "b"), Membership::Added);
        assert_eq!(values, ["a", "c", "b"]);
    }

    #[test]
    fn multi_apply_toggles_by_value() {
        let mut selection = SelectionValue::empty(true);
        selection.apply("x");
        selection.apply("y");
        assert_eq!(selection.as_slice(), ["x", "y"]);
        assert_eq!(selection.apply("x"), Membership::Removed);
        assert_eq!(selection, SelectionValue::Multiple(vec!["y"]));
    }

    #[test]
    fn single_apply_replaces() {
        let mut selection = SelectionValue::Single(Some(1));
        assert_eq!(selection.apply(2), Membership::Replaced);
        assert_eq!(selection.apply(2), Membership::Replaced);
        assert_eq!(selection, SelectionValue::Single(Some(2)));
    }

    #[test]
    fn coerces_between_modes() {
        assert_eq!(
            SelectionValue::Single(Some(3)).into_mode(true),
            SelectionValue::Multiple(vec![3])
        );
        assert_eq!(
            SelectionValue::<i32>::Single(None).into_mode(true),
            SelectionValue::Multiple(vec![])
        );
        assert_eq!(
            SelectionValue::Multiple(vec![1, 2, 1, 3, 2]).into_mode(true),
            SelectionValue::Multiple(vec![1, 2, 3])
        );
        assert_eq!(
            SelectionValue::Multiple(vec![7, 8]).into_mode(false),
            SelectionValue::Single(Some(7))
        );
    }
}
