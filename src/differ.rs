use crate::types::{DiffResult, EnvMap};

/// Computes which keys were removed, added, or changed going from `left` to `right`.
pub fn diff(left: &EnvMap, right: &EnvMap) -> DiffResult {
    let mut removed: Vec<String> = left
        .keys()
        .filter(|k| !right.contains_key(*k))
        .cloned()
        .collect();
    let mut added: Vec<String> = right
        .keys()
        .filter(|k| !left.contains_key(*k))
        .cloned()
        .collect();
    let mut changed: Vec<String> = left
        .iter()
        .filter(|(k, v)| right.get(*k).is_some_and(|r| r != *v))
        .map(|(k, _)| k.clone())
        .collect();
    removed.sort_unstable();
    added.sort_unstable();
    changed.sort_unstable();
    DiffResult {
        removed,
        added,
        changed,
    }
}
