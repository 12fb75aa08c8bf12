/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Set algebra over [`NonEmptySet`]s that may produce an empty result, thus returning a plain [`BTreeSet`]

use std::collections::BTreeSet;

use itertools::{EitherOrBoth, Itertools};

use super::NonEmptySet;
use crate::NonEmpty;

impl<T: Ord> NonEmpty<T, BTreeSet<T>> {
	/// Walks both sets in ascending order at the same time, pairing up equal elements
	fn merge_join<'a>(
		&'a self,
		other: &'a NonEmptySet<T>,
	) -> impl Iterator<Item = EitherOrBoth<&'a T, &'a T>> {
		self.iter().merge_join_by(other.iter(), |a, b| a.cmp(b))
	}

	/// Returns the elements present in both self and `other`
	pub fn intersection(&self, other: &Self) -> BTreeSet<T>
	where
		T: Clone,
	{
		self.merge_join(other)
			.filter_map(|pair| match pair {
				EitherOrBoth::Both(member, _) => Some(member.clone()),
				EitherOrBoth::Left(_) | EitherOrBoth::Right(_) => None,
			})
			.collect()
	}

	/// Returns the elements present in either self or `other` but not in both
	pub fn symmetric_difference(&self, other: &Self) -> BTreeSet<T>
	where
		T: Clone,
	{
		self.merge_join(other)
			.filter_map(|pair| match pair {
				EitherOrBoth::Left(member) | EitherOrBoth::Right(member) => Some(member.clone()),
				EitherOrBoth::Both(..) => None,
			})
			.collect()
	}

	/// Returns the elements of self that are not present in `other`
	pub fn difference(&self, other: &Self) -> BTreeSet<T>
	where
		T: Clone,
	{
		self.merge_join(other)
			.filter_map(|pair| match pair {
				EitherOrBoth::Left(member) => Some(member.clone()),
				EitherOrBoth::Right(_) | EitherOrBoth::Both(..) => None,
			})
			.collect()
	}

	/// Returns true if self and `other` have no elements in common
	pub fn is_disjoint(&self, other: &Self) -> bool {
		!self.merge_join(other).any(|pair| pair.is_both())
	}

	/// Returns true if every element of self is also present in `other`
	pub fn is_subset(&self, other: &Self) -> bool {
		self.len() <= other.len() && self.merge_join(other).all(|pair| !pair.is_left())
	}

	/// Returns true if every element of `other` is also present in self
	pub fn is_superset(&self, other: &Self) -> bool {
		other.is_subset(self)
	}

	/// Returns true if self is a subset of `other` but isn't equal to it
	pub fn is_strict_subset(&self, other: &Self) -> bool {
		self.len() < other.len() && self.is_subset(other)
	}

	/// Returns true if self is a superset of `other` but isn't equal to it
	pub fn is_strict_superset(&self, other: &Self) -> bool {
		other.is_strict_subset(self)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn set<const N: usize>(head: i32, tail: [i32; N]) -> NonEmptySet<i32> {
		NonEmptySet::new(head, BTreeSet::from(tail))
	}

	#[test]
	fn intersection() {
		let a = set(1, [2, 3, 4]);
		let b = set(3, [4, 5]);
		assert_eq!(a.intersection(&b), BTreeSet::from([3, 4]));
		assert_eq!(a.intersection(&set(9, [])), BTreeSet::new());
	}

	#[test]
	fn symmetric_difference() {
		let a = set(1, [2, 3]);
		let b = set(2, [3, 4]);
		assert_eq!(a.symmetric_difference(&b), BTreeSet::from([1, 4]));
		assert_eq!(a.symmetric_difference(&a), BTreeSet::new());
	}

	#[test]
	fn difference() {
		let a = set(1, [2, 3]);
		let b = set(2, [5]);
		assert_eq!(a.difference(&b), BTreeSet::from([1, 3]));
		assert_eq!(b.difference(&a), BTreeSet::from([5]));
	}

	#[test]
	fn disjoint() {
		assert!(set(1, [3]).is_disjoint(&set(2, [4])));
		assert!(!set(1, [3]).is_disjoint(&set(3, [4])));
	}

	#[test]
	fn subset_superset() {
		let small = set(2, [3]);
		let big = set(1, [2, 3, 4]);

		assert!(small.is_subset(&big));
		assert!(small.is_strict_subset(&big));
		assert!(big.is_superset(&small));
		assert!(big.is_strict_superset(&small));

		assert!(small.is_subset(&small));
		assert!(!small.is_strict_subset(&small));
		assert!(!big.is_subset(&small));
		assert!(!set(0, [3]).is_subset(&big));
	}
}
