/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains [`NonEmptyVec`], the ordered sequence view of [`NonEmpty`]

mod position;

pub use self::position::Position;

use std::{
	cmp::Ordering,
	fmt, iter, mem,
	ops::{Add, AddAssign, Index, IndexMut},
	slice, vec,
};

use tap::Tap;

use crate::{Error, NonEmpty, non_empty::split_first};

/// A vector that is guaranteed to contain at least one element.
///
/// # Examples
///
/// ```
/// use non_non_full::{NonEmptyVec, non_empty_vec};
///
/// let vec = non_empty_vec![1, 2, 3, 4];
/// let doubled = vec.map(|x| x * 2);
/// assert_eq!(doubled.head(), &2);
/// assert_eq!(doubled.tail(), &[4, 6, 8]);
///
/// // Empty vectors are rejected
/// assert!(NonEmptyVec::<i32>::from_vec(Vec::new()).is_none());
/// ```
pub type NonEmptyVec<T> = NonEmpty<T, Vec<T>>;

/// An iterator over references to the elements of a [`NonEmptyVec`], head first
pub type Iter<'a, T> = iter::Chain<iter::Once<&'a T>, slice::Iter<'a, T>>;

/// An iterator over mutable references to the elements of a [`NonEmptyVec`], head first
pub type IterMut<'a, T> = iter::Chain<iter::Once<&'a mut T>, slice::IterMut<'a, T>>;

/// An owning iterator over the elements of a [`NonEmptyVec`], head first
pub type IntoIter<T> = iter::Chain<iter::Once<T>, vec::IntoIter<T>>;

impl<T> NonEmpty<T, Vec<T>> {
	/// Creates a new [`NonEmptyVec`] from the first element and all the rest
	pub fn new(head: T, tail: Vec<T>) -> Self {
		Self::from_parts(head, tail)
	}

	/// Creates a new [`NonEmptyVec`] from a [`Vec`].
	///
	/// Returns [`None`] if the input [`Vec`] is empty.
	pub fn from_vec(vec: Vec<T>) -> Option<Self> {
		split_first(vec).map(|(head, tail)| Self::from_parts(head, tail))
	}

	/// Converts the [`NonEmptyVec`] into a flat [`Vec`], consuming self
	pub fn into_vec(self) -> Vec<T> {
		let mut vec = Vec::with_capacity(self.len().get());
		vec.push(self.head);
		vec.extend(self.tail);
		vec
	}

	/// Copies all elements into a flat [`Vec`]
	pub fn to_vec(&self) -> Vec<T>
	where
		T: Clone,
	{
		self.iter().cloned().collect()
	}

	/// Returns a reference to the first element
	pub fn first(&self) -> &T {
		&self.head
	}

	/// Returns a mutable reference to the first element
	pub fn first_mut(&mut self) -> &mut T {
		&mut self.head
	}

	/// Returns a reference to the last element
	pub fn last(&self) -> &T {
		self.tail.last().unwrap_or(&self.head)
	}

	/// Returns a mutable reference to the last element
	pub fn last_mut(&mut self) -> &mut T {
		self.tail.last_mut().unwrap_or(&mut self.head)
	}

	/// Gets a reference to an element at the given flat index, 0 being the head
	pub fn get(&self, index: usize) -> Option<&T> {
		self.get_at(Position::from(index))
	}

	/// Gets a mutable reference to an element at the given flat index, 0 being the head
	pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
		match Position::from(index) {
			Position::Head => Some(&mut self.head),
			Position::Tail(idx) => self.tail.get_mut(idx),
		}
	}

	/// Gets a reference to an element at the given [`Position`]
	pub fn get_at(&self, position: Position) -> Option<&T> {
		match position {
			Position::Head => Some(&self.head),
			Position::Tail(idx) => self.tail.get(idx),
		}
	}

	/// Returns the position of the first element, i.e. [`Position::Head`]
	pub const fn start_position(&self) -> Position {
		Position::Head
	}

	/// Returns the position right past the last element
	pub fn end_position(&self) -> Position {
		Position::Tail(self.tail.len())
	}

	/// Returns an iterator over the positions of all elements, in order
	pub fn positions(&self) -> impl Iterator<Item = Position> + use<T> {
		(0..self.len().get()).map(Position::from)
	}

	/// Returns an iterator over all elements, head first
	pub fn iter(&self) -> Iter<'_, T> {
		iter::once(&self.head).chain(self.tail.iter())
	}

	/// Returns an iterator that allows modifying each element, head first
	pub fn iter_mut(&mut self) -> IterMut<'_, T> {
		iter::once(&mut self.head).chain(self.tail.iter_mut())
	}

	/// Transforms each element with `f`, keeping their order.
	///
	/// `f` is called on the head first, so the result is never empty either
	pub fn map<U, F>(self, mut f: F) -> NonEmptyVec<U>
	where
		F: FnMut(T) -> U,
	{
		let head = f(self.head);
		NonEmptyVec::new(head, self.tail.into_iter().map(f).collect())
	}

	/// Transforms each element into a [`NonEmptyVec`] and concatenates them all.
	///
	/// The head of the result is the head of `f(self.head)`
	pub fn flat_map<U, F>(self, mut f: F) -> NonEmptyVec<U>
	where
		F: FnMut(T) -> NonEmptyVec<U>,
	{
		let mut flattened = f(self.head);
		for element in self.tail {
			flattened.extend(f(element));
		}

		flattened
	}

	/// Returns the smallest element. If there are several, the first one of them is returned
	pub fn min(&self) -> &T
	where
		T: Ord,
	{
		self.tail
			.iter()
			.fold(&self.head, |min, x| if x < min { x } else { min })
	}

	/// Returns the largest element. If there are several, the first one of them is returned
	pub fn max(&self) -> &T
	where
		T: Ord,
	{
		self.tail
			.iter()
			.fold(&self.head, |max, x| if x > max { x } else { max })
	}

	/// Sorts all elements, the smallest one becoming the new head
	#[must_use]
	pub fn sorted(self) -> Self
	where
		T: Ord,
	{
		self.sorted_by(Ord::cmp)
	}

	/// Sorts all elements with a comparator function, the first element in that order becoming the new head
	#[must_use]
	pub fn sorted_by<F>(self, compare: F) -> Self
	where
		F: FnMut(&T, &T) -> Ordering,
	{
		let sorted = self.into_vec().tap_mut(|vec| vec.sort_by(compare));
		Self::from_vec(sorted).expect("sorting doesn't change the number of elements")
	}

	/// Sorts all elements with a key extraction function, the element with the smallest key becoming the new head
	#[must_use]
	pub fn sorted_by_key<K, F>(self, mut f: F) -> Self
	where
		K: Ord,
		F: FnMut(&T) -> K,
	{
		self.sorted_by(|a, b| f(a).cmp(&f(b)))
	}

	/// Appends an element onto the end
	pub fn push(&mut self, value: T) {
		self.tail.push(value);
	}

	/// Inserts an element at the given flat index, shifting all elements after it to the right.
	///
	/// Inserting at index 0 replaces the head and moves the old head to the front of the tail.
	///
	/// # Panics
	/// if `index > len`
	pub fn insert(&mut self, index: usize, value: T) {
		match Position::from(index) {
			Position::Head => {
				let old_head = mem::replace(&mut self.head, value);
				self.tail.insert(0, old_head);
			}
			Position::Tail(idx) => self.tail.insert(idx, value),
		}
	}

	/// Moves all elements of `other` to the end
	pub fn append(&mut self, other: Self) {
		self.extend(other);
	}

	/// Removes and returns the element at the given flat index.
	///
	/// Returns None if removing would make the vector empty.
	///
	/// # Panics
	/// if `index >= len`
	pub fn remove(&mut self, index: usize) -> Option<T> {
		if self.tail.is_empty() {
			return None;
		}

		match Position::from(index) {
			Position::Head => {
				let new_head = self.tail.remove(0);
				Some(mem::replace(&mut self.head, new_head))
			}
			Position::Tail(idx) => Some(self.tail.remove(idx)),
		}
	}

	/// Pops the last element.
	///
	/// Returns None if this would make the vector empty.
	pub fn pop(&mut self) -> Option<T> {
		self.tail.pop()
	}

	/// Clears all elements except the first one
	pub fn clear_except_first(&mut self) {
		self.tail.clear();
	}
}

#[cfg(feature = "rand")]
impl<T> NonEmpty<T, Vec<T>> {
	/// Returns a random element, using `rng` as the source of randomness
	pub fn random_element_with<R>(&self, rng: &mut R) -> &T
	where
		R: rand::Rng + ?Sized,
	{
		let idx = rng.random_range(0..self.len().get());
		&self[idx]
	}

	/// Returns a random element, using the thread-local generator
	pub fn random_element(&self) -> &T {
		self.random_element_with(&mut rand::rng())
	}

	/// Shuffles all elements in place, the head included, using `rng` as the source of randomness.
	///
	/// The result is deterministic only if `rng` is
	pub fn shuffle_with<R>(&mut self, rng: &mut R)
	where
		R: rand::Rng + ?Sized,
	{
		use rand::seq::SliceRandom;

		self.tail.shuffle(rng);

		// pick a uniformly random slot for the head, the tail is already uniformly shuffled
		let slot = rng.random_range(0..self.len().get());
		if let Position::Tail(idx) = Position::from(slot) {
			mem::swap(&mut self.head, &mut self.tail[idx]);
		}
	}

	/// Shuffles all elements in place, the head included, using the thread-local generator
	pub fn shuffle(&mut self) {
		self.shuffle_with(&mut rand::rng());
	}

	/// Returns the shuffled container, using `rng` as the source of randomness
	#[must_use]
	pub fn shuffled_with<R>(mut self, rng: &mut R) -> Self
	where
		R: rand::Rng + ?Sized,
	{
		self.shuffle_with(rng);
		self
	}
}

impl<T> NonEmpty<NonEmptyVec<T>, Vec<NonEmptyVec<T>>> {
	/// Concatenates all inner vectors, putting `separator` between each of them.
	///
	/// The head of the result is the head of the first inner vector
	///
	/// ```
	/// use non_non_full::non_empty_vec;
	///
	/// let nested = non_empty_vec![non_empty_vec![1, 2], non_empty_vec![3]];
	/// assert_eq!(nested.joined(&[0]).into_vec(), [1, 2, 0, 3]);
	/// ```
	pub fn joined(self, separator: &[T]) -> NonEmptyVec<T>
	where
		T: Clone,
	{
		let mut joined = self.head;
		for inner in self.tail {
			joined.extend(separator.iter().cloned());
			joined.extend(inner);
		}

		joined
	}

	/// Concatenates all inner vectors
	pub fn flatten(self) -> NonEmptyVec<T> {
		self.flat_map(|inner| inner)
	}
}

impl<T> Index<usize> for NonEmpty<T, Vec<T>> {
	type Output = T;

	fn index(&self, index: usize) -> &Self::Output {
		&self[Position::from(index)]
	}
}

impl<T> IndexMut<usize> for NonEmpty<T, Vec<T>> {
	fn index_mut(&mut self, index: usize) -> &mut Self::Output {
		match Position::from(index) {
			Position::Head => &mut self.head,
			Position::Tail(idx) => &mut self.tail[idx],
		}
	}
}

impl<T> Index<Position> for NonEmpty<T, Vec<T>> {
	type Output = T;

	fn index(&self, position: Position) -> &Self::Output {
		match position {
			Position::Head => &self.head,
			Position::Tail(idx) => &self.tail[idx],
		}
	}
}

impl<T> Extend<T> for NonEmpty<T, Vec<T>> {
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		self.tail.extend(iter);
	}
}

impl<T, I> Add<I> for NonEmpty<T, Vec<T>>
where
	I: IntoIterator<Item = T>,
{
	type Output = Self;

	fn add(mut self, rhs: I) -> Self::Output {
		self.extend(rhs);
		self
	}
}

impl<T, I> AddAssign<I> for NonEmpty<T, Vec<T>>
where
	I: IntoIterator<Item = T>,
{
	fn add_assign(&mut self, rhs: I) {
		self.extend(rhs);
	}
}

impl<T> IntoIterator for NonEmpty<T, Vec<T>> {
	type Item = T;
	type IntoIter = IntoIter<T>;

	fn into_iter(self) -> Self::IntoIter {
		iter::once(self.head).chain(self.tail)
	}
}

impl<'a, T> IntoIterator for &'a NonEmpty<T, Vec<T>> {
	type Item = &'a T;
	type IntoIter = Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<'a, T> IntoIterator for &'a mut NonEmpty<T, Vec<T>> {
	type Item = &'a mut T;
	type IntoIter = IterMut<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter_mut()
	}
}

impl<T> TryFrom<Vec<T>> for NonEmpty<T, Vec<T>> {
	type Error = Error;

	fn try_from(vec: Vec<T>) -> Result<Self, Self::Error> {
		Self::from_vec(vec).ok_or(Error::Empty)
	}
}

impl<T> From<NonEmpty<T, Vec<T>>> for Vec<T> {
	fn from(vec: NonEmpty<T, Vec<T>>) -> Self {
		vec.into_vec()
	}
}

/// Renders the head and then the tail, e.g. `1[2, 3]`
impl<T: fmt::Debug> fmt::Display for NonEmpty<T, Vec<T>> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:?}{:?}", self.head, self.tail)
	}
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for NonEmpty<T, Vec<T>> {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.collect_seq(self)
	}
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for NonEmpty<T, Vec<T>>
where
	T: serde::Deserialize<'de>,
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let (head, tail) = crate::non_empty::deserialize_parts(deserializer)?;
		Ok(Self::new(head, tail))
	}
}
