/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains the [`Map`] and [`Lookup`] traits and their implementations for [`HashMap`] and [`BTreeMap`]

use std::{
	borrow::Borrow,
	collections::{BTreeMap, HashMap, btree_map, hash_map},
	hash::{BuildHasher, Hash},
};

use crate::non_empty::Tail;

/// A key-value map that can be used as the tail of a [`NonEmpty`](`crate::NonEmpty`) map
pub trait Map: Tail + Default {
	/// Type of the keys
	type Key;

	/// Type of the values
	type Value;

	/// Iterator over references to all entries
	type Iter<'a>: Iterator<Item = (&'a Self::Key, &'a Self::Value)>
	where
		Self: 'a;

	/// Inserts a key-value pair, returning the value that was there before
	fn insert(&mut self, key: Self::Key, value: Self::Value) -> Option<Self::Value>;

	/// Removes and returns an arbitrary entry
	fn pop_entry(&mut self) -> Option<(Self::Key, Self::Value)>;

	/// Returns an iterator over all entries
	fn iter(&self) -> Self::Iter<'_>;
}

/// Keyed access to a [`Map`] through any borrowed form `Q` of its keys, e.g. `str` for [`String`] keys
pub trait Lookup<Q: ?Sized>: Map {
	/// Returns a reference to the value of `key`
	fn get(&self, key: &Q) -> Option<&Self::Value>;

	/// Returns a mutable reference to the value of `key`
	fn get_mut(&mut self, key: &Q) -> Option<&mut Self::Value>;

	/// Removes `key`, returning its value
	fn remove(&mut self, key: &Q) -> Option<Self::Value>;

	/// Returns true if the map contains `key`
	fn contains_key(&self, key: &Q) -> bool {
		self.get(key).is_some()
	}
}

impl<K, V, S> Map for HashMap<K, V, S>
where
	K: Eq + Hash,
	S: BuildHasher + Default,
{
	type Key = K;
	type Value = V;
	type Iter<'a>
		= hash_map::Iter<'a, K, V>
	where
		Self: 'a;

	fn insert(&mut self, key: K, value: V) -> Option<V> {
		HashMap::insert(self, key, value)
	}

	fn pop_entry(&mut self) -> Option<(K, V)> {
		// entries the iterator doesn't reach are kept in the map
		self.extract_if(|_, _| true).next()
	}

	fn iter(&self) -> Self::Iter<'_> {
		HashMap::iter(self)
	}
}

impl<K, V, S, Q> Lookup<Q> for HashMap<K, V, S>
where
	K: Eq + Hash + Borrow<Q>,
	Q: Eq + Hash + ?Sized,
	S: BuildHasher + Default,
{
	fn get(&self, key: &Q) -> Option<&V> {
		HashMap::get(self, key)
	}

	fn get_mut(&mut self, key: &Q) -> Option<&mut V> {
		HashMap::get_mut(self, key)
	}

	fn remove(&mut self, key: &Q) -> Option<V> {
		HashMap::remove(self, key)
	}

	fn contains_key(&self, key: &Q) -> bool {
		HashMap::contains_key(self, key)
	}
}

impl<K: Ord, V> Map for BTreeMap<K, V> {
	type Key = K;
	type Value = V;
	type Iter<'a>
		= btree_map::Iter<'a, K, V>
	where
		Self: 'a;

	fn insert(&mut self, key: K, value: V) -> Option<V> {
		BTreeMap::insert(self, key, value)
	}

	fn pop_entry(&mut self) -> Option<(K, V)> {
		self.pop_first()
	}

	fn iter(&self) -> Self::Iter<'_> {
		BTreeMap::iter(self)
	}
}

impl<K, V, Q> Lookup<Q> for BTreeMap<K, V>
where
	K: Ord + Borrow<Q>,
	Q: Ord + ?Sized,
{
	fn get(&self, key: &Q) -> Option<&V> {
		BTreeMap::get(self, key)
	}

	fn get_mut(&mut self, key: &Q) -> Option<&mut V> {
		BTreeMap::get_mut(self, key)
	}

	fn remove(&mut self, key: &Q) -> Option<V> {
		BTreeMap::remove(self, key)
	}

	fn contains_key(&self, key: &Q) -> bool {
		BTreeMap::contains_key(self, key)
	}
}

#[cfg(test)]
mod tests {
	#![allow(clippy::unwrap_used)]

	use super::*;

	#[test]
	fn hash_map_pop_entry_keeps_the_rest() {
		let mut map = HashMap::from([(1, 'a'), (2, 'b'), (3, 'c')]);
		let (key, _) = Map::pop_entry(&mut map).unwrap();

		assert_eq!(map.len(), 2);
		assert!(!map.contains_key(&key));

		Map::pop_entry(&mut map).unwrap();
		Map::pop_entry(&mut map).unwrap();
		assert_eq!(Map::pop_entry(&mut map), None);
	}

	#[test]
	fn btree_map_pop_entry_is_the_smallest() {
		let mut map = BTreeMap::from([(2, 'b'), (1, 'a')]);
		assert_eq!(Map::pop_entry(&mut map), Some((1, 'a')));
		assert_eq!(Map::pop_entry(&mut map), Some((2, 'b')));
		assert_eq!(Map::pop_entry(&mut map), None);
	}

	#[test]
	fn lookup_by_borrowed_key() {
		let mut map = HashMap::from([("one".to_owned(), 1)]);
		assert_eq!(Lookup::<str>::get(&map, "one"), Some(&1));
		assert!(!Lookup::<str>::contains_key(&map, "two"));
		assert_eq!(Lookup::<str>::remove(&mut map, "one"), Some(1));

		let map = BTreeMap::from([("two".to_owned(), 2)]);
		assert_eq!(Lookup::<str>::get(&map, "two"), Some(&2));
	}
}
