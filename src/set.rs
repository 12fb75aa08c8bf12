/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains [`NonEmptySet`], the set view of [`NonEmpty`]
//!
//! The head of a [`NonEmptySet`] is always its smallest element and is never duplicated in the tail

mod algebra;

use std::{
	cmp::Ordering,
	collections::{BTreeSet, btree_set},
	fmt, iter, mem,
};

use crate::{Error, NonEmpty};

/// A [`BTreeSet`] that is guaranteed to contain at least one element.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use non_non_full::NonEmptySet;
///
/// let mut set = NonEmptySet::new(5, BTreeSet::from([3, 8, 1]));
/// assert_eq!(set.head(), &1);
///
/// assert!(set.insert(0));
/// assert_eq!(set.head(), &0);
/// assert_eq!(set.tail(), &BTreeSet::from([1, 3, 5, 8]));
/// ```
pub type NonEmptySet<T> = NonEmpty<T, BTreeSet<T>>;

/// An iterator over the elements of a [`NonEmptySet`], in ascending order
pub type Iter<'a, T> = iter::Chain<iter::Once<&'a T>, btree_set::Iter<'a, T>>;

impl<T: Ord> NonEmpty<T, BTreeSet<T>> {
	/// Creates a new [`NonEmptySet`] from an element and a set of other elements.
	///
	/// The smallest of all of them becomes the head, so `head` may end up in the tail.
	/// If `tail` already contains an element equal to `head`, the one from `tail` is kept
	pub fn new(head: T, mut tail: BTreeSet<T>) -> Self {
		match tail.pop_first() {
			Some(min) if min <= head => {
				if min < head {
					tail.insert(head);
				}

				Self::from_parts(min, tail)
			}
			Some(min) => {
				tail.insert(min);
				Self::from_parts(head, tail)
			}
			None => Self::from_parts(head, tail),
		}
	}

	/// Creates a new [`NonEmptySet`] from a [`BTreeSet`].
	///
	/// Returns [`None`] if the input set is empty.
	pub fn from_set(mut set: BTreeSet<T>) -> Option<Self> {
		let min = set.pop_first()?;
		Some(Self::from_parts(min, set))
	}

	/// Converts self into a plain [`BTreeSet`] with all the elements, consuming self
	pub fn into_set(self) -> BTreeSet<T> {
		let (head, mut set) = self.into_parts();
		set.insert(head);
		set
	}

	/// Copies all elements into a plain [`BTreeSet`]
	pub fn to_set(&self) -> BTreeSet<T>
	where
		T: Clone,
	{
		self.iter().cloned().collect()
	}

	/// Returns the smallest element, i.e. the head
	pub fn first(&self) -> &T {
		&self.head
	}

	/// Returns the largest element
	pub fn last(&self) -> &T {
		self.tail.last().unwrap_or(&self.head)
	}

	/// Returns an iterator over all elements in ascending order
	pub fn iter(&self) -> Iter<'_, T> {
		iter::once(&self.head).chain(self.tail.iter())
	}

	/// Returns true if the set contains an element equal to `member`
	pub fn contains(&self, member: &T) -> bool {
		self.head == *member || self.tail.contains(member)
	}

	/// Returns a reference to the element equal to `member`, if any
	pub fn get(&self, member: &T) -> Option<&T> {
		if self.head == *member {
			Some(&self.head)
		} else {
			self.tail.get(member)
		}
	}

	/// Adds an element to the set.
	///
	/// If it's smaller than the current head, it becomes the new head and the old head moves into the tail.
	/// Returns false if an equal element was already present. In that case the set is left untouched,
	/// and [`get`](`Self::get`) returns the member that was there before.
	pub fn insert(&mut self, member: T) -> bool {
		match member.cmp(&self.head) {
			Ordering::Less => {
				let old_head = mem::replace(&mut self.head, member);
				tracing::trace!("New minimum moved into the head of the set");
				self.tail.insert(old_head)
			}
			Ordering::Equal => false,
			Ordering::Greater => self.tail.insert(member),
		}
	}

	/// Adds an element to the set just like [`insert`](`Self::insert`) does,
	/// and also returns the member that ends up in the set, i.e. the one that was already there if any
	///
	/// ```
	/// use std::collections::BTreeSet;
	/// use non_non_full::NonEmptySet;
	///
	/// let mut set = NonEmptySet::new(5, BTreeSet::from([3, 8, 1]));
	/// assert_eq!(set.insert_and_get(0), (true, &0));
	/// assert_eq!(set.insert_and_get(8), (false, &8));
	/// ```
	pub fn insert_and_get(&mut self, member: T) -> (bool, &T)
	where
		T: Clone,
	{
		let key = member.clone();
		let is_new = self.insert(member);
		let canonical = self
			.get(&key)
			.expect("the member is present after being inserted");

		(is_new, canonical)
	}

	/// Removes and returns the element equal to `member`.
	///
	/// If the head is removed, the next smallest element takes its place.
	/// Returns [`None`] if there's no such element or if removing it would make the set empty
	pub fn take(&mut self, member: &T) -> Option<T> {
		if self.head != *member {
			return self.tail.take(member);
		}

		let next_min = self.tail.pop_first()?;
		Some(mem::replace(&mut self.head, next_min))
	}

	/// Removes the element equal to `member`.
	///
	/// Returns false if there's no such element or if removing it would make the set empty
	pub fn remove(&mut self, member: &T) -> bool {
		self.take(member).is_some()
	}

	/// Adds all elements of `other` to self
	pub fn form_union(&mut self, other: Self) {
		let (other_head, other_tail) = other.into_parts();

		// other_head is smaller than everything in other_tail,
		// so inserting it last leaves the smallest of all the elements in the head
		self.tail.extend(other_tail);
		self.insert(other_head);
	}

	/// Returns a set with all elements of both self and `other`
	#[must_use]
	pub fn union(mut self, other: Self) -> Self {
		self.form_union(other);
		self
	}
}

impl<T: Ord> Extend<T> for NonEmpty<T, BTreeSet<T>> {
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		for member in iter {
			self.insert(member);
		}
	}
}

impl<T> IntoIterator for NonEmpty<T, BTreeSet<T>> {
	type Item = T;
	type IntoIter = iter::Chain<iter::Once<T>, btree_set::IntoIter<T>>;

	fn into_iter(self) -> Self::IntoIter {
		iter::once(self.head).chain(self.tail)
	}
}

impl<'a, T: Ord> IntoIterator for &'a NonEmpty<T, BTreeSet<T>> {
	type Item = &'a T;
	type IntoIter = Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<T: Ord> TryFrom<BTreeSet<T>> for NonEmpty<T, BTreeSet<T>> {
	type Error = Error;

	fn try_from(set: BTreeSet<T>) -> Result<Self, Self::Error> {
		Self::from_set(set).ok_or(Error::Empty)
	}
}

impl<T: Ord> From<NonEmpty<T, BTreeSet<T>>> for BTreeSet<T> {
	fn from(set: NonEmpty<T, BTreeSet<T>>) -> Self {
		set.into_set()
	}
}

/// Renders the head and then the tail, e.g. `1{3, 5, 8}`
impl<T: fmt::Debug> fmt::Display for NonEmpty<T, BTreeSet<T>> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:?}{:?}", self.head, self.tail)
	}
}

#[cfg(feature = "serde")]
impl<T: Ord + serde::Serialize> serde::Serialize for NonEmpty<T, BTreeSet<T>> {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.collect_seq(self.iter())
	}
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for NonEmpty<T, BTreeSet<T>>
where
	T: Ord + serde::Deserialize<'de>,
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let (head, tail) = crate::non_empty::deserialize_parts(deserializer)?;
		Ok(Self::new(head, tail))
	}
}
