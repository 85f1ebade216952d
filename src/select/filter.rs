//! Search filtering over candidate items.
//!
//! Filtering is a case-insensitive substring test against either the item's
//! own text or any of a set of field paths. It always runs from scratch over
//! the whole source list and keeps source order. The source is never mutated;
//! the result is a list of source indices.

use crate::domain::{resolve, FieldAccessible, SearchSpec};

/// Tests one item against an already lower-cased, non-empty needle.
fn matches<T: FieldAccessible>(item: &T, needle: &str, spec: &SearchSpec) -> bool {
    let contains = |value: &T| {
        value
            .text()
            .is_some_and(|text| text.to_lowercase().contains(needle))
    };

    match spec {
        SearchSpec::Disabled => true,
        SearchSpec::Item => contains(item),
        SearchSpec::Fields(paths) if paths.is_empty() => true,
        SearchSpec::Fields(paths) => paths
            .iter()
            .any(|path| resolve(item, path).is_some_and(contains)),
    }
}

/// Returns the indices of `items` matching `term` under `spec`, in source order.
///
/// An empty term, a disabled spec, or an empty path list select everything.
///
/// # Example
///
/// ```
/// use picksheet::domain::SearchSpec;
/// use picksheet::select::filter_indices;
/// use serde_json::json;
///
/// let data = vec![json!({"name": "Apple"}), json!({"name": "Banana"})];
/// let spec = SearchSpec::fields(["name"]);
/// assert_eq!(filter_indices(&data, "AP", &spec), vec![0]);
/// assert_eq!(filter_indices(&data, "an", &spec), vec![1]);
/// assert_eq!(filter_indices(&data, "", &spec), vec![0, 1]);
/// ```
pub fn filter_indices<T: FieldAccessible>(
    items: &[T],
    term: &str,
    spec: &SearchSpec,
) -> Vec<usize> {
    if term.is_empty() || !spec.is_searchable() {
        return (0..items.len()).collect();
    }

    let needle = term.to_lowercase();
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| matches(*item, &needle, spec))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn fruits() -> Vec<Value> {
        vec![
            json!({"name": "Apple", "meta": {"origin": "Kazakhstan"}}),
            json!({"name": "Banana", "meta": null}),
            json!({"name": "Cherry"}),
            json!({"name": "Pineapple", "meta": {"origin": "Paraguay"}}),
        ]
    }

    #[test]
    fn empty_term_is_identity() {
        let data = fruits();
        for spec in [
            SearchSpec::Disabled,
            SearchSpec::Item,
            SearchSpec::fields(["name"]),
            SearchSpec::fields(["does.not.exist"]),
        ] {
            assert_eq!(filter_indices(&data, "", &spec), vec![0, 1, 2, 3]);
        }
    }

    #[test]
    fn no_spec_shows_everything() {
        let data = fruits();
        assert_eq!(filter_indices(&data, "zzz", &SearchSpec::Disabled), vec![0, 1, 2, 3]);
        assert_eq!(filter_indices(&data, "zzz", &SearchSpec::Fields(vec![])), vec![0, 1, 2, 3]);
    }

    #[test]
    fn case_insensitive_substring_in_source_order() {
        let data = fruits();
        let spec = SearchSpec::fields(["name"]);
        assert_eq!(filter_indices(&data, "APPLE", &spec), vec![0, 3]);
        assert_eq!(filter_indices(&data, "an", &spec), vec![1]);
        assert_eq!(filter_indices(&data, "ap", &spec), vec![0, 3]);
    }

    #[test]
    fn any_path_may_match_and_missing_paths_do_not_abort() {
        let data = fruits();
        let spec = SearchSpec::fields(["meta.origin", "name"]);
        // Banana's meta is null and Cherry has none; both are still tested on "name".
        assert_eq!(filter_indices(&data, "par", &spec), vec![3]);
        assert_eq!(filter_indices(&data, "err", &spec), vec![2]);
        assert_eq!(filter_indices(&data, "kaz", &spec), vec![0]);
    }

    #[test]
    fn unresolved_path_never_matches_its_placeholder_text() {
        let data = vec![json!({"name": "Apple"})];
        let spec = SearchSpec::fields(["label"]);
        assert!(filter_indices(&data, "undefined", &spec).is_empty());
        assert!(filter_indices(&data, "null", &spec).is_empty());
    }

    #[test]
    fn item_mode_matches_own_text() {
        let data: Vec<Value> = vec![json!("Red"), json!("Green"), json!(42), json!(null)];
        assert_eq!(filter_indices(&data, "re", &SearchSpec::Item), vec![0, 1]);
        assert_eq!(filter_indices(&data, "4", &SearchSpec::Item), vec![2]);

        let names = vec!["Alpha".to_string(), "beta".to_string()];
        assert_eq!(filter_indices(&names, "B", &SearchSpec::Item), vec![1]);
    }

    #[test]
    fn item_mode_never_matches_record_syntax() {
        let data = vec![json!({"name": "Apple"}), json!({"name": "Banana"})];
        for term in ["name", "{", "\":", "apple"] {
            assert!(filter_indices(&data, term, &SearchSpec::Item).is_empty(), "term {term:?}");
        }

        let lists = vec![json!(["Apple"]), json!("Apple")];
        assert_eq!(filter_indices(&lists, "apple", &SearchSpec::Item), vec![1]);
    }
}
