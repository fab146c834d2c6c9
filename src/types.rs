use std::collections::HashMap;

use indexmap::IndexMap;
use serde::Serialize;

/// Key/value pairs loaded from a file or the process environment.
pub type EnvMap = HashMap<String, String>;

/// Keys that differ between two [`EnvMap`]s, each list sorted ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffResult {
    pub removed: Vec<String>,
    pub added: Vec<String>,
    pub changed: Vec<String>,
}

impl DiffResult {
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.added.is_empty() && self.changed.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChangedValue {
    pub old: String,
    pub new: String,
}

/// Serializable view of a diff, values resolved against both sides.
#[derive(Debug, Clone, Serialize, Default)]
pub struct DiffSummary {
    pub left: String,
    pub right: String,
    pub removed: IndexMap<String, String>,
    pub changed: IndexMap<String, ChangedValue>,
    pub added: IndexMap<String, String>,
    pub has_differences: bool,
}

impl DiffSummary {
    pub fn build(
        left_name: &str,
        right_name: &str,
        left: &EnvMap,
        right: &EnvMap,
        diff: &DiffResult,
    ) -> Self {
        let removed = diff
            .removed
            .iter()
            .filter_map(|k| left.get(k).map(|v| (k.clone(), v.clone())))
            .collect();
        let added = diff
            .added
            .iter()
            .filter_map(|k| right.get(k).map(|v| (k.clone(), v.clone())))
            .collect();
        let changed = diff
            .changed
            .iter()
            .filter_map(|k| {
                let old = left.get(k)?.clone();
                let new = right.get(k)?.clone();
                Some((k.clone(), ChangedValue { old, new }))
            })
            .collect();
        DiffSummary {
            left: left_name.to_string(),
            right: right_name.to_string(),
            removed,
            changed,
            added,
            has_differences: !diff.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_keeps_sorted_key_order() {
        let left: EnvMap = [("A", "1"), ("C", "3")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let right: EnvMap = [("B", "2"), ("C", "4")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let diff = DiffResult {
            removed: vec!["A".to_string()],
            added: vec!["B".to_string()],
            changed: vec!["C".to_string()],
        };
        let s = DiffSummary::build("a.env", "b.env", &left, &right, &diff);
        assert!(s.has_differences);
        let v = serde_json::to_value(&s).unwrap();
        assert_eq!(v["removed"]["A"], "1");
        assert_eq!(v["added"]["B"], "2");
        assert_eq!(v["changed"]["C"]["old"], "3");
        assert_eq!(v["changed"]["C"]["new"], "4");
        assert_eq!(v["left"], "a.env");
    }

    #[test]
    fn empty_diff_has_no_differences() {
        let env = EnvMap::new();
        let s = DiffSummary::build("l", "r", &env, &env, &DiffResult::default());
        assert!(!s.has_differences);
        assert!(s.removed.is_empty() && s.added.is_empty() && s.changed.is_empty());
    }
}
