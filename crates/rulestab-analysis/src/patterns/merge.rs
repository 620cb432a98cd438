//! Insertion-ordered map and the two merge operators used by aggregation.
//!
//! `merge_additive` sums values and is commutative/associative in the
//! resulting values. `merge_first_write_wins` keeps whatever the left side
//! already holds, so the order in which trials are folded decides the
//! surviving value.

use std::cmp::Ordering;
use std::hash::Hash;
use std::ops::AddAssign;

use rulestab_core::types::FxHashMap;
use serde::{Serialize, Serializer};

/// A map that remembers the order in which keys were first inserted.
///
/// Ranking relies on this order to break ties: a stable sort by value keeps
/// equal-valued keys in first-seen order.
#[derive(Debug, Clone)]
pub struct OrderedMap<K, V> {
    entries: Vec<(K, V)>,
    index: FxHashMap<K, usize>,
}

impl<K, V> OrderedMap<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.index.get(key).map(|&ix| &self.entries[ix].1)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        match self.index.get(key) {
            Some(&ix) => Some(&mut self.entries[ix].1),
            None => None,
        }
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Insert or overwrite. New keys go to the end; overwriting keeps the
    /// key's original position.
    pub fn insert(&mut self, key: K, value: V) {
        match self.index.get(&key) {
            Some(&ix) => self.entries[ix].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    /// Mutable access to the value at `key`, inserting `default` first if
    /// the key is new.
    pub fn entry_or_insert(&mut self, key: K, default: V) -> &mut V {
        let ix = match self.index.get(&key) {
            Some(&ix) => ix,
            None => {
                let ix = self.entries.len();
                self.index.insert(key.clone(), ix);
                self.entries.push((key, default));
                ix
            }
        };
        &mut self.entries[ix].1
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Stable sort by value, largest first. Equal values keep their
    /// relative order; unordered values (NaN) go last.
    pub fn sort_by_value_desc(&mut self)
    where
        V: PartialOrd,
    {
        self.entries.sort_by(|a, b| descending(&a.1, &b.1));
        self.reindex();
    }

    /// Entries ordered by value, largest first, without reordering `self`.
    pub fn ranked(&self) -> Vec<(&K, &V)>
    where
        V: PartialOrd,
    {
        let mut ranked: Vec<(&K, &V)> = self.iter().collect();
        ranked.sort_by(|a, b| descending(a.1, b.1));
        ranked
    }

    fn reindex(&mut self) {
        for (ix, (key, _)) in self.entries.iter().enumerate() {
            if let Some(slot) = self.index.get_mut(key) {
                *slot = ix;
            }
        }
    }
}

impl<K, V> Default for OrderedMap<K, V>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Equality ignores insertion order: same keys with equal values.
impl<K, V> PartialEq for OrderedMap<K, V>
where
    K: Eq + Hash + Clone,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(k, v)| other.get(k).map(|ov| ov == v).unwrap_or(false))
    }
}

impl<K, V> FromIterator<(K, V)> for OrderedMap<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Later duplicates overwrite earlier values in place.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

/// Serialized as a sequence of `[key, value]` pairs so that order and
/// non-string keys survive JSON.
impl<K, V> Serialize for OrderedMap<K, V>
where
    K: Serialize,
    V: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries.iter())
    }
}

/// For every key in `b`, add its value into `a` (missing keys start at the
/// default, i.e. zero). Keys only in `a` are untouched.
pub fn merge_additive<K, V>(a: &mut OrderedMap<K, V>, b: &OrderedMap<K, V>)
where
    K: Eq + Hash + Clone,
    V: AddAssign + Copy + Default,
{
    for (key, &value) in b.iter() {
        *a.entry_or_insert(key.clone(), V::default()) += value;
    }
}

/// For every key in `b` that `a` does not hold yet, copy it over. Keys
/// already present in `a` keep their value.
pub fn merge_first_write_wins<K, V>(a: &mut OrderedMap<K, V>, b: &OrderedMap<K, V>)
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    for (key, value) in b.iter() {
        if !a.contains_key(key) {
            a.insert(key.clone(), value.clone());
        }
    }
}

/// Total descending order over a partial order. A value that is unordered
/// against itself (NaN) sorts after every ordered value.
fn descending<V: PartialOrd>(a: &V, b: &V) -> Ordering {
    let a_unordered = a.partial_cmp(a).is_none();
    let b_unordered = b.partial_cmp(b).is_none();
    match (a_unordered, b_unordered) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(a).unwrap_or(Ordering::Equal),
    }
}
