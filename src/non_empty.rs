/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains [`NonEmpty`], the head-and-tail wrapper all other containers of this crate are built upon

use std::{
	collections::{BTreeMap, BTreeSet, HashMap},
	hash::{Hash, Hasher},
	num::NonZeroUsize,
};

/// A container that can be used as the tail of a [`NonEmpty`]
pub trait Tail {
	/// Returns how many elements the container holds. May be zero
	fn count(&self) -> usize;
}

impl<T> Tail for Vec<T> {
	fn count(&self) -> usize {
		self.len()
	}
}

impl<T> Tail for BTreeSet<T> {
	fn count(&self) -> usize {
		self.len()
	}
}

impl<K, V, S> Tail for HashMap<K, V, S> {
	fn count(&self) -> usize {
		self.len()
	}
}

impl<K, V> Tail for BTreeMap<K, V> {
	fn count(&self) -> usize {
		self.len()
	}
}

/// Counts chars, not bytes, since the head of a [`NonEmptyString`](`crate::NonEmptyString`) is a [`char`]
impl Tail for String {
	fn count(&self) -> usize {
		self.chars().count()
	}
}

/// A container that is guaranteed to contain at least one element.
///
/// The first element is stored separately in the `head`, and all the others in the `tail` container `C`, which may be empty.
/// Since the `head` is never optional, there's no way to construct an empty [`NonEmpty`].
///
/// What operations are available depends on the shape of the tail:
/// - [`NonEmptyVec`](`crate::NonEmptyVec`) for ordered sequences
/// - [`NonEmptyHashMap`](`crate::NonEmptyHashMap`) and [`NonEmptyBTreeMap`](`crate::NonEmptyBTreeMap`) for maps
/// - [`NonEmptySet`](`crate::NonEmptySet`) for sets that keep their minimum in the head
/// - [`NonEmptyString`](`crate::NonEmptyString`) for text
#[derive(Clone, Debug)]
pub struct NonEmpty<T, C> {
	pub(crate) head: T,
	pub(crate) tail: C,
}

impl<T, C> NonEmpty<T, C> {
	/// Creates a new [`NonEmpty`] without checking any invariant of the tail's shape.
	/// Every public constructor goes through this after validating its input
	pub(crate) const fn from_parts(head: T, tail: C) -> Self {
		Self { head, tail }
	}

	/// Creates a [`NonEmpty`] that contains only the `head`
	pub fn singleton(head: T) -> Self
	where
		C: Default,
	{
		Self::from_parts(head, C::default())
	}

	/// Returns a reference to the element that is always present
	pub fn head(&self) -> &T {
		&self.head
	}

	/// Returns a reference to all elements other than the head
	pub fn tail(&self) -> &C {
		&self.tail
	}

	/// Splits the container into the head and the tail, consuming self
	pub fn into_parts(self) -> (T, C) {
		(self.head, self.tail)
	}
}

impl<T, C: Tail> NonEmpty<T, C> {
	/// Returns the number of elements, the head included
	pub fn len(&self) -> NonZeroUsize {
		NonZeroUsize::MIN.saturating_add(self.tail.count())
	}

	/// Returns true if the head is the only element
	pub fn is_singleton(&self) -> bool {
		self.tail.count() == 0
	}
}

impl<T: PartialOrd, C: PartialOrd> NonEmpty<T, C> {
	/// Returns true if both the head and the tail of self are less than the ones of `other`.
	///
	/// Note: this is not a lexicographical comparison and doesn't define a total order.
	/// Two containers with equal heads never precede each other, regardless of their tails.
	/// That's why it's not exposed as a [`PartialOrd`] implementation
	///
	/// ```
	/// use non_non_full::non_empty_vec;
	///
	/// assert!(non_empty_vec![1, 2].precedes(&non_empty_vec![2, 3]));
	/// assert!(!non_empty_vec![1, 5].precedes(&non_empty_vec![2, 3]));
	/// assert!(!non_empty_vec![1, 2].precedes(&non_empty_vec![1, 3]));
	/// ```
	pub fn precedes(&self, other: &Self) -> bool {
		self.head < other.head && self.tail < other.tail
	}
}

/// Implements [`PartialEq`], [`Eq`] and [`Hash`] that compare the head first and the tail second
macro_rules! structural_eq {
	($(impl<$($param:ident),*> for $ty:ty;)+) => {$(
		impl<$($param: PartialEq),*> PartialEq for $ty {
			fn eq(&self, other: &Self) -> bool {
				self.head == other.head && self.tail == other.tail
			}
		}

		impl<$($param: Eq),*> Eq for $ty {}

		impl<$($param: Hash),*> Hash for $ty {
			fn hash<H: Hasher>(&self, state: &mut H) {
				self.head.hash(state);
				self.tail.hash(state);
			}
		}
	)+};
}

structural_eq! {
	impl<T> for NonEmpty<T, Vec<T>>;
	impl<T> for NonEmpty<T, BTreeSet<T>>;
	impl<> for NonEmpty<char, String>;
}

/// Splits off the first element as the head and collects the rest into the tail.
///
/// Returns [`None`] if there are no elements at all
pub(crate) fn split_first<I, C>(elements: I) -> Option<(I::Item, C)>
where
	I: IntoIterator,
	C: FromIterator<I::Item>,
{
	let mut elements = elements.into_iter();
	let head = elements.next()?;

	Some((head, elements.collect()))
}

/// Deserializes a sequence and splits it into the head and the tail.
///
/// Fails with [`Error::Empty`](`crate::Error::Empty`) if the sequence is empty
#[cfg(feature = "serde")]
pub(crate) fn deserialize_parts<'de, D, T, C>(deserializer: D) -> Result<(T, C), D::Error>
where
	D: serde::Deserializer<'de>,
	T: serde::Deserialize<'de>,
	C: FromIterator<T>,
{
	use serde::Deserialize;

	let elements = Vec::<T>::deserialize(deserializer)?;
	split_first(elements).ok_or_else(|| serde::de::Error::custom(crate::Error::Empty))
}
