//! Shallow key-by-key merge with an unchanged-value fast path.

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use serde_json::{Map, Value};

/// A value that can absorb the keys of a patch of the same shape.
pub trait ShallowMerge: Sized {
    /// Merge `patch` over `self`.
    ///
    /// Returns `None` when every key in `patch` already holds an equal value
    /// in `self`; callers keep the original value in that case. Otherwise
    /// returns all of `self`'s keys overlaid with all of `patch`'s keys.
    fn merged(&self, patch: &Self) -> Option<Self>;
}

/// True if any `(key, value)` pair in `patch` differs from `lookup(key)`.
fn has_new_data<'a, K, V, I, L>(patch: I, lookup: L) -> bool
where
    K: 'a,
    V: PartialEq + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
    L: Fn(&K) -> Option<&'a V>,
{
    patch
        .into_iter()
        .any(|(key, value)| lookup(key) != Some(value))
}

impl ShallowMerge for Map<String, Value> {
    fn merged(&self, patch: &Self) -> Option<Self> {
        if !has_new_data(patch, |k| self.get(k)) {
            return None;
        }
        let mut merged = self.clone();
        merged.extend(patch.iter().map(|(k, v)| (k.clone(), v.clone())));
        Some(merged)
    }
}

/// Only object patches carry keys; any other patch is a no-op. A non-object
/// state has no keys of its own and is replaced by the patch's keys.
impl ShallowMerge for Value {
    fn merged(&self, patch: &Self) -> Option<Self> {
        let Value::Object(patch) = patch else {
            return None;
        };
        let base = match self {
            Value::Object(map) => map.merged(patch),
            _ => Map::new().merged(patch),
        };
        base.map(Value::Object)
    }
}

impl<K, V> ShallowMerge for HashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: PartialEq + Clone,
{
    fn merged(&self, patch: &Self) -> Option<Self> {
        if !has_new_data(patch, |k| self.get(k)) {
            return None;
        }
        let mut merged = self.clone();
        merged.extend(patch.iter().map(|(k, v)| (k.clone(), v.clone())));
        Some(merged)
    }
}

impl<K, V> ShallowMerge for BTreeMap<K, V>
where
    K: Ord + Clone,
    V: PartialEq + Clone,
{
    fn merged(&self, patch: &Self) -> Option<Self> {
        if !has_new_data(patch, |k| self.get(k)) {
            return None;
        }
        let mut merged = self.clone();
        merged.extend(patch.iter().map(|(k, v)| (k.clone(), v.clone())));
        Some(merged)
    }
}
