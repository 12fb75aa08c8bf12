/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains the associative view of [`NonEmpty`]: [`NonEmptyHashMap`] and [`NonEmptyBTreeMap`]
//!
//! The head is a key-value pair whose key is never present in the tail map

mod backing;

pub use self::backing::{Lookup, Map};

use std::{
	borrow::Borrow,
	collections::{BTreeMap, HashMap, hash_map::RandomState},
	fmt,
	hash::{Hash, Hasher},
	iter, mem,
};

use itertools::Itertools;

use crate::{Error, NonEmpty};

/// A [`HashMap`] that is guaranteed to contain at least one entry
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use non_non_full::NonEmptyHashMap;
///
/// let mut map = NonEmptyHashMap::new("a", 1, HashMap::from([("b", 2)]));
/// map.merge([("a", 10)], |current, new| *current += new);
///
/// assert_eq!(map.head(), &("a", 11));
/// assert_eq!(map.get(&"b"), Some(&2));
/// ```
pub type NonEmptyHashMap<K, V, S = RandomState> = NonEmpty<(K, V), HashMap<K, V, S>>;

/// A [`BTreeMap`] that is guaranteed to contain at least one entry
pub type NonEmptyBTreeMap<K, V> = NonEmpty<(K, V), BTreeMap<K, V>>;

/// An iterator over the entries of a non-empty map, head entry first
pub type Iter<'a, K, V, M> = iter::Chain<iter::Once<(&'a K, &'a V)>, <M as Map>::Iter<'a>>;

impl<K, V, M> NonEmpty<(K, V), M>
where
	M: Map<Key = K, Value = V>,
{
	/// Returns the key of the head entry
	pub fn head_key(&self) -> &K {
		&self.head.0
	}

	/// Returns the value of the head entry
	pub fn head_value(&self) -> &V {
		&self.head.1
	}

	/// Returns a mutable reference to the value of the head entry
	pub fn head_value_mut(&mut self) -> &mut V {
		&mut self.head.1
	}

	/// Returns an iterator over all entries, head entry first
	pub fn iter(&self) -> Iter<'_, K, V, M> {
		iter::once((&self.head.0, &self.head.1)).chain(self.tail.iter())
	}

	/// Returns an iterator over all keys, head key first
	pub fn keys(&self) -> impl Iterator<Item = &K> {
		self.iter().map(|(key, _)| key)
	}

	/// Returns an iterator over all values, head value first
	pub fn values(&self) -> impl Iterator<Item = &V> {
		self.iter().map(|(_, value)| value)
	}

	/// Converts self into a plain map with all the entries, consuming self
	pub fn into_map(self) -> M {
		let ((key, value), mut map) = self.into_parts();
		map.insert(key, value);
		map
	}
}

impl<K, V, M> NonEmpty<(K, V), M>
where
	K: PartialEq,
	M: Map<Key = K, Value = V> + Lookup<K>,
{
	/// Creates a new non-empty map from the head entry and the rest of the entries.
	///
	/// # Panics
	/// if `tail` already contains `key`. Use [`NonEmpty::try_new`] or [`NonEmpty::new_with`] if that can happen
	pub fn new(key: K, value: V, tail: M) -> Self {
		if tail.contains_key(&key) {
			tracing::error!("Head key of a non-empty map is already present in its tail");
			panic!("{}", Error::DuplicateKey);
		}

		Self::from_parts((key, value), tail)
	}

	/// Creates a new non-empty map from the head entry and the rest of the entries.
	///
	/// # Errors
	/// [`Error::DuplicateKey`] if `tail` already contains `key`
	pub fn try_new(key: K, value: V, tail: M) -> Result<Self, Error> {
		if tail.contains_key(&key) {
			return Err(Error::DuplicateKey);
		}

		Ok(Self::from_parts((key, value), tail))
	}

	/// Creates a new non-empty map from the head entry and the rest of the entries.
	///
	/// If `tail` already contains `key`, that entry is removed from the tail
	/// and its value is folded into the head value as `combine(value, tail_value)`
	pub fn new_with<F>(key: K, mut value: V, mut tail: M, combine: F) -> Self
	where
		F: FnOnce(V, V) -> V,
	{
		if let Some(existing) = tail.remove(&key) {
			value = combine(value, existing);
		}

		Self::from_parts((key, value), tail)
	}

	/// Creates a new non-empty map from a list of entries, the first one becoming the head.
	///
	/// Later entries of a key already present in the tail overwrite the earlier ones.
	///
	/// # Errors
	/// * [`Error::Empty`] if there are no entries
	/// * [`Error::DuplicateKey`] if the key of the first entry appears again
	pub fn try_from_iter<I>(entries: I) -> Result<Self, Error>
	where
		I: IntoIterator<Item = (K, V)>,
	{
		let mut entries = entries.into_iter();
		let (key, value) = entries.next().ok_or(Error::Empty)?;

		let mut tail = M::default();
		for (k, v) in entries {
			tail.insert(k, v);
		}

		Self::try_new(key, value, tail)
	}

	/// Returns true if the key of the head entry is equal to `key`
	fn is_head_key<Q>(&self, key: &Q) -> bool
	where
		K: Borrow<Q>,
		Q: PartialEq + ?Sized,
	{
		<K as Borrow<Q>>::borrow(&self.head.0) == key
	}

	/// Returns a reference to the value of `key`.
	///
	/// The head entry is checked first, then the tail.
	/// `key` may be any borrowed form of the key type, e.g. `&str` for [`String`] keys
	pub fn get<Q>(&self, key: &Q) -> Option<&V>
	where
		K: Borrow<Q>,
		Q: PartialEq + ?Sized,
		M: Lookup<Q>,
	{
		if self.is_head_key(key) {
			Some(&self.head.1)
		} else {
			<M as Lookup<Q>>::get(&self.tail, key)
		}
	}

	/// Returns a mutable reference to the value of `key`
	pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
	where
		K: Borrow<Q>,
		Q: PartialEq + ?Sized,
		M: Lookup<Q>,
	{
		if self.is_head_key(key) {
			Some(&mut self.head.1)
		} else {
			<M as Lookup<Q>>::get_mut(&mut self.tail, key)
		}
	}

	/// Returns true if the map contains `key`
	pub fn contains_key<Q>(&self, key: &Q) -> bool
	where
		K: Borrow<Q>,
		Q: PartialEq + ?Sized,
		M: Lookup<Q>,
	{
		self.is_head_key(key) || <M as Lookup<Q>>::contains_key(&self.tail, key)
	}

	/// Sets the value of `key`, returning the previous one.
	///
	/// If `key` is the head key, the head value is updated in place.
	/// Otherwise the tail is updated, and [`None`] is returned if `key` wasn't there before
	pub fn insert(&mut self, key: K, value: V) -> Option<V> {
		if self.head.0 == key {
			Some(mem::replace(&mut self.head.1, value))
		} else {
			self.tail.insert(key, value)
		}
	}

	/// Removes `key`, returning its value.
	///
	/// If the head entry is removed, another entry from the tail takes its place.
	/// Returns [`None`] if `key` isn't present or if removing it would make the map empty
	pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
	where
		K: Borrow<Q>,
		Q: PartialEq + ?Sized,
		M: Lookup<Q>,
	{
		if !self.is_head_key(key) {
			return <M as Lookup<Q>>::remove(&mut self.tail, key);
		}

		let new_head = self.tail.pop_entry()?;
		tracing::trace!("Head entry removed, another entry was moved into the head");

		let (_, old_value) = mem::replace(&mut self.head, new_head);
		Some(old_value)
	}

	/// Merges all entries of `other` into self.
	///
	/// For keys that are already present, `combine` is called with the current value and the new one
	pub fn merge<I, F>(&mut self, other: I, mut combine: F)
	where
		I: IntoIterator<Item = (K, V)>,
		F: FnMut(&mut V, V),
	{
		for (key, value) in other {
			if self.head.0 == key {
				combine(&mut self.head.1, value);
			} else if let Some(current) = self.tail.get_mut(&key) {
				combine(current, value);
			} else {
				self.tail.insert(key, value);
			}
		}
	}

	/// Returns self with all entries of `other` merged into it.
	///
	/// For keys that are already present, the value becomes `combine(current, new)`
	#[must_use]
	pub fn merging<I, F>(self, other: I, mut combine: F) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		F: FnMut(V, V) -> V,
	{
		let ((head_key, mut head_value), mut tail) = self.into_parts();

		for (key, value) in other {
			if key == head_key {
				head_value = combine(head_value, value);
			} else {
				let merged = match tail.remove(&key) {
					Some(current) => combine(current, value),
					None => value,
				};
				tail.insert(key, merged);
			}
		}

		Self::from_parts((head_key, head_value), tail)
	}
}

/// Two maps are equal if they contain the same entries, no matter which one of them is the head
impl<K, V, M> PartialEq for NonEmpty<(K, V), M>
where
	K: PartialEq,
	V: PartialEq,
	M: Map<Key = K, Value = V> + Lookup<K>,
{
	fn eq(&self, other: &Self) -> bool {
		self.len() == other.len() && self.iter().all(|(key, value)| other.get(key) == Some(value))
	}
}

impl<K, V, M> Eq for NonEmpty<(K, V), M>
where
	K: Eq,
	V: Eq,
	M: Map<Key = K, Value = V> + Lookup<K>,
{
}

/// Hashes the length and then all entries in ascending key order,
/// so that equal maps hash the same no matter which entry is the head
impl<K, V> Hash for NonEmpty<(K, V), BTreeMap<K, V>>
where
	K: Ord + Hash,
	V: Hash,
{
	fn hash<H: Hasher>(&self, state: &mut H) {
		state.write_usize(self.len().get());

		let head = iter::once((&self.head.0, &self.head.1));
		for entry in self.tail.iter().merge_by(head, |(a, _), (b, _)| a < b) {
			entry.hash(state);
		}
	}
}

impl<K, V, M> Extend<(K, V)> for NonEmpty<(K, V), M>
where
	K: PartialEq,
	M: Map<Key = K, Value = V> + Lookup<K>,
{
	fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
		for (key, value) in iter {
			self.insert(key, value);
		}
	}
}

impl<K, V, M> IntoIterator for NonEmpty<(K, V), M>
where
	M: Map<Key = K, Value = V> + IntoIterator<Item = (K, V)>,
{
	type Item = (K, V);
	type IntoIter = iter::Chain<iter::Once<(K, V)>, M::IntoIter>;

	fn into_iter(self) -> Self::IntoIter {
		iter::once(self.head).chain(self.tail)
	}
}

impl<'a, K, V, M> IntoIterator for &'a NonEmpty<(K, V), M>
where
	M: Map<Key = K, Value = V>,
{
	type Item = (&'a K, &'a V);
	type IntoIter = Iter<'a, K, V, M>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// Renders the head entry and then the tail, e.g. `("a", 1){"b": 2}`
impl<K, V, M> fmt::Display for NonEmpty<(K, V), M>
where
	K: fmt::Debug,
	V: fmt::Debug,
	M: Map<Key = K, Value = V> + fmt::Debug,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:?}{:?}", self.head, self.tail)
	}
}

#[cfg(feature = "serde")]
impl<K, V, M> serde::Serialize for NonEmpty<(K, V), M>
where
	K: serde::Serialize,
	V: serde::Serialize,
	M: Map<Key = K, Value = V>,
{
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.collect_seq(self.iter())
	}
}

#[cfg(feature = "serde")]
impl<'de, K, V, M> serde::Deserialize<'de> for NonEmpty<(K, V), M>
where
	K: PartialEq + serde::Deserialize<'de>,
	V: serde::Deserialize<'de>,
	M: Map<Key = K, Value = V> + Lookup<K>,
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let entries = Vec::<(K, V)>::deserialize(deserializer)?;
		Self::try_from_iter(entries).map_err(serde::de::Error::custom)
	}
}

#[cfg(test)]
mod tests {
	#![allow(clippy::unwrap_used)]

	use assert_matches::assert_matches;

	use super::*;

	fn abc() -> NonEmptyHashMap<&'static str, i32> {
		NonEmptyHashMap::new("a", 1, HashMap::from([("b", 2), ("c", 3)]))
	}

	#[test]
	fn lookup() {
		let map = abc();
		assert_eq!(map.len().get(), 3);
		assert_eq!(map.get(&"a"), Some(&1));
		assert_eq!(map.get(&"c"), Some(&3));
		assert_eq!(map.get(&"z"), None);
		assert!(map.contains_key(&"b"));
		assert_eq!(map.head_key(), &"a");
		assert_eq!(map.head_value(), &1);
	}

	#[test]
	#[should_panic(expected = "already present")]
	fn new_with_duplicate_key_panics() {
		let _map = NonEmptyHashMap::new("a", 1, HashMap::from([("a", 2)]));
	}

	#[test]
	fn try_new_with_duplicate_key() {
		assert_matches!(
			NonEmptyHashMap::try_new("a", 1, HashMap::from([("a", 2)])),
			Err(Error::DuplicateKey)
		);
	}

	#[test]
	fn new_with_combines_duplicate() {
		let map = NonEmptyBTreeMap::new_with("a", 1, BTreeMap::from([("a", 10), ("b", 2)]), |new, existing| {
			new * 100 + existing
		});

		assert_eq!(map.head(), &("a", 110));
		assert_eq!(map.tail(), &BTreeMap::from([("b", 2)]));
	}

	#[test]
	fn merge_into_head_first() {
		let mut map = NonEmptyHashMap::new("a", 1, HashMap::from([("b", 2)]));
		map.merge(HashMap::from([("a", 10)]), |current, new| *current += new);

		assert_eq!(map.head(), &("a", 11));
		assert_eq!(map.tail(), &HashMap::from([("b", 2)]));
	}

	#[test]
	fn merging_by_value() {
		let map = NonEmptyHashMap::new("a", 1, HashMap::from([("b", 2)]))
			.merging([("a", 10), ("b", 20), ("c", 30)], |current, new| current + new);

		assert_eq!(map.head(), &("a", 11));
		assert_eq!(map.tail(), &HashMap::from([("b", 22), ("c", 30)]));
	}

	#[test]
	fn insert_updates_head_in_place() {
		let mut map = abc();
		assert_eq!(map.insert("a", 100), Some(1));
		assert_eq!(map.head(), &("a", 100));

		assert_eq!(map.insert("b", 200), Some(2));
		assert_eq!(map.insert("d", 4), None);
		assert_eq!(map.len().get(), 4);
	}

	#[test]
	fn remove_head_promotes_tail_entry() {
		let mut map = NonEmptyBTreeMap::new(1, 'a', BTreeMap::from([(2, 'b'), (3, 'c')]));
		assert_eq!(map.remove(&1), Some('a'));
		assert_eq!(map.head(), &(2, 'b'));
		assert_eq!(map.remove(&3), Some('c'));
		assert_eq!(map.remove(&42), None);

		// the last entry can't be removed
		assert_eq!(map.remove(&2), None);
		assert_eq!(map.head(), &(2, 'b'));
	}

	#[test]
	fn equality_ignores_head_tail_split() {
		let a = NonEmptyHashMap::new("a", 1, HashMap::from([("b", 2)]));
		let b = NonEmptyHashMap::new("b", 2, HashMap::from([("a", 1)]));
		let c = NonEmptyHashMap::new("b", 2, HashMap::from([("a", 3)]));

		assert_eq!(a, b);
		assert_ne!(a, c);
		assert_ne!(a, NonEmptyHashMap::singleton(("a", 1)));
	}

	#[test]
	fn try_from_iter() {
		let map = NonEmptyBTreeMap::try_from_iter([(1, "one"), (2, "two")]).unwrap();
		assert_eq!(map.head(), &(1, "one"));
		assert_eq!(map.keys().copied().collect::<Vec<_>>(), [1, 2]);
		assert_eq!(map.values().copied().collect::<Vec<_>>(), ["one", "two"]);

		assert_matches!(
			NonEmptyBTreeMap::<i32, i32>::try_from_iter([]),
			Err(Error::Empty)
		);
		assert_matches!(
			NonEmptyBTreeMap::try_from_iter([(1, 1), (2, 2), (1, 3)]),
			Err(Error::DuplicateKey)
		);
	}

	#[test]
	fn into_map_and_iteration() {
		let map = abc();
		let entries = map.iter().map(|(k, v)| (*k, *v)).collect::<HashMap<_, _>>();
		assert_eq!(entries, HashMap::from([("a", 1), ("b", 2), ("c", 3)]));

		let mut owned = map.clone().into_iter().collect::<Vec<_>>();
		owned.sort_unstable();
		assert_eq!(owned, [("a", 1), ("b", 2), ("c", 3)]);

		assert_eq!(map.into_map(), HashMap::from([("a", 1), ("b", 2), ("c", 3)]));
	}

	#[test]
	fn extend_and_head_mut() {
		let mut map = NonEmptyBTreeMap::singleton(("x", 1));
		map.extend([("x", 2), ("y", 3)]);
		*map.head_value_mut() += 10;

		assert_eq!(map.head(), &("x", 12));
		assert_eq!(map.get(&"y"), Some(&3));
	}

	#[test]
	fn display() {
		let map = NonEmptyBTreeMap::new("a", 1, BTreeMap::from([("b", 2)]));
		assert_eq!(map.to_string(), r#"("a", 1){"b": 2}"#);
	}

	#[test]
	fn lookup_by_borrowed_key() {
		let mut map = NonEmptyHashMap::new("a".to_owned(), 1, HashMap::from([("b".to_owned(), 2)]));
		assert_eq!(map.get("a"), Some(&1));
		assert_eq!(map.get("b"), Some(&2));
		assert!(map.contains_key("b"));
		assert!(!map.contains_key("c"));

		*map.get_mut("b").unwrap() += 10;
		assert_eq!(map.remove("b"), Some(12));
		assert_eq!(map.remove("a"), None);
	}

	#[test]
	fn equal_btree_maps_hash_the_same() {
		use std::{collections::HashSet, hash::BuildHasher};

		let a = NonEmptyBTreeMap::new(1, 'a', BTreeMap::from([(2, 'b'), (3, 'c')]));
		let b = NonEmptyBTreeMap::new(3, 'c', BTreeMap::from([(1, 'a'), (2, 'b')]));
		let c = NonEmptyBTreeMap::new(2, 'b', BTreeMap::from([(1, 'a'), (3, 'z')]));
		assert_eq!(a, b);

		let state = RandomState::new();
		assert_eq!(state.hash_one(&a), state.hash_one(&b));

		let set = HashSet::from([a, b, c]);
		assert_eq!(set.len(), 2);
	}

	#[test]
	fn head_removal_promotes_from_hash_map() {
		let mut map = NonEmptyHashMap::new(0, "zero", (1..100).map(|i| (i, "other")).collect::<HashMap<_, _>>());
		assert_eq!(map.remove(&0), Some("zero"));
		assert_ne!(map.head_key(), &0);
		assert_eq!(map.len().get(), 99);
		assert!(!map.tail().contains_key(map.head_key()));
	}
}
