//! Key-by-key comparison of two snapshots

use crate::report::Snapshot;
use serde::{Deserialize, Serialize};

/// Receives one callback per key classified by [`compare_snapshots`]
pub trait ChangeHandler<V> {
    /// Key exists only in the new snapshot
    fn on_added(&mut self, key: &str, after: &V);

    /// Key exists only in the old snapshot
    fn on_removed(&mut self, key: &str, before: &V);

    /// Key exists in both snapshots with different values
    fn on_changed(&mut self, key: &str, before: &V, after: &V);

    /// Key exists in both snapshots with equal values
    fn on_unchanged(&mut self, key: &str, before: &V, after: &V);
}

/// Classify every key of `before` and `after` into exactly one callback
///
/// Keys of `before` are visited first in its order (removed, changed or
/// unchanged), then keys only present in `after` are reported as added in
/// `after`'s order. Presence is decided by key membership, never by the
/// value, and values are compared structurally with `PartialEq`.
pub fn compare_snapshots<V, H>(before: &Snapshot<V>, after: &Snapshot<V>, handler: &mut H)
where
    V: PartialEq,
    H: ChangeHandler<V> + ?Sized,
{
    for (key, before_value) in before.iter() {
        match after.get(key) {
            None => handler.on_removed(key, before_value),
            Some(after_value) if before_value == after_value => {
                handler.on_unchanged(key, before_value, after_value)
            }
            Some(after_value) => handler.on_changed(key, before_value, after_value),
        }
    }

    for (key, after_value) in after.iter() {
        if !before.contains_key(key) {
            handler.on_added(key, after_value);
        }
    }
}

/// Contract names grouped by classification
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Keys only in the new snapshot
    pub added: Vec<String>,
    /// Keys only in the old snapshot
    pub removed: Vec<String>,
    /// Keys whose values differ
    pub changed: Vec<String>,
    /// Keys whose values are equal
    pub unchanged: Vec<String>,
}

impl<V> ChangeHandler<V> for Classification {
    fn on_added(&mut self, key: &str, _after: &V) {
        self.added.push(key.to_string());
    }

    fn on_removed(&mut self, key: &str, _before: &V) {
        self.removed.push(key.to_string());
    }

    fn on_changed(&mut self, key: &str, _before: &V, _after: &V) {
        self.changed.push(key.to_string());
    }

    fn on_unchanged(&mut self, key: &str, _before: &V, _after: &V) {
        self.unchanged.push(key.to_string());
    }
}

/// Classify keys without rendering anything
pub fn classify<V: PartialEq>(before: &Snapshot<V>, after: &Snapshot<V>) -> Classification {
    let mut classification = Classification::default();
    compare_snapshots(before, after, &mut classification);
    classification
}
