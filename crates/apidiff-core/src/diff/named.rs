//! Generic added / removed / changed partition of name-keyed collections.

use indexmap::IndexMap;

use crate::diff::changes::{Change, Changes};

/// Partition `earlier` and `later` by name.
///
/// Names only in `later` are added, names only in `earlier` are removed, and
/// names in both are dropped when `is_unchanged(old, new)` holds and
/// recorded as changed otherwise. Names are opaque strings.
pub fn diff_named<T, F>(
    earlier: &IndexMap<String, T>,
    later: &IndexMap<String, T>,
    is_unchanged: F,
) -> Changes<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let added = later
        .iter()
        .filter(|(name, _)| !earlier.contains_key(*name))
        .map(|(name, entity)| (name.clone(), entity.clone()))
        .collect();

    let mut changed = IndexMap::new();
    let mut removed = IndexMap::new();
    for (name, old) in earlier {
        match later.get(name) {
            None => {
                removed.insert(name.clone(), old.clone());
            }
            Some(new) if !is_unchanged(old, new) => {
                changed.insert(
                    name.clone(),
                    Change {
                        old: old.clone(),
                        new: new.clone(),
                    },
                );
            }
            Some(_) => {}
        }
    }

    Changes {
        added,
        changed,
        removed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, i32)]) -> IndexMap<String, i32> {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    fn keys<T>(m: &IndexMap<String, T>) -> Vec<&str> {
        m.keys().map(String::as_str).collect()
    }

    #[test]
    fn test_partition() {
        let earlier = map(&[("a", 1), ("b", 2), ("c", 3)]);
        let later = map(&[("b", 2), ("c", 30), ("d", 4)]);
        let changes = diff_named(&earlier, &later, |x, y| x == y);

        assert_eq!(keys(&changes.added), vec!["d"]);
        assert_eq!(keys(&changes.removed), vec!["a"]);
        assert_eq!(keys(&changes.changed), vec!["c"]);
        assert_eq!(changes.changed["c"], Change { old: 3, new: 30 });
    }

    #[test]
    fn test_predicate_decides_unchanged() {
        let earlier = map(&[("a", 1)]);
        let later = map(&[("a", -1)]);
        let by_magnitude = diff_named(&earlier, &later, |x, y| x.abs() == y.abs());
        assert!(by_magnitude.is_empty());
    }

    #[test]
    fn test_order_follows_inputs() {
        let earlier = map(&[("z", 1), ("y", 1), ("x", 1), ("w", 1)]);
        let later = map(&[("q", 0), ("x", 2), ("p", 0), ("z", 2)]);
        let changes = diff_named(&earlier, &later, |x, y| x == y);
        assert_eq!(keys(&changes.added), vec!["q", "p"]);
        assert_eq!(keys(&changes.removed), vec!["y", "w"]);
        assert_eq!(keys(&changes.changed), vec!["z", "x"]);
    }

    #[test]
    fn test_empty_inputs() {
        let empty: IndexMap<String, i32> = IndexMap::new();
        let changes = diff_named(&empty, &empty, |_, _| true);
        assert!(changes.is_empty());
    }
}
