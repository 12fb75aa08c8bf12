/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Container types that guarantee non-emptiness.
//!
//! This crate provides [`NonEmpty`], a wrapper that keeps one element in the `head` and all the others in a `tail` container.
//! Since the head is always there, the container can never be empty.
//! The name "non-non-full" is a playful way of saying "not empty" (i.e., full).
//!
//! # Features
//!
//! - [`NonEmptyVec<T>`]: A vector that always contains at least one element
//! - [`NonEmptyHashMap<K, V>`] and [`NonEmptyBTreeMap<K, V>`]: Maps that always contain at least one entry
//! - [`NonEmptySet<T>`]: A sorted set that always contains at least one element and keeps the smallest one in the head
//! - [`NonEmptyString`]: A string that always contains at least one character
//! - Random element selection and shuffling via the "rand" feature (enabled by default)
//! - Optional serde support via the "serde" feature
//!
//! # Example
//!
//! ```
//! use non_non_full::{NonEmptyString, NonEmptyVec, non_empty_vec};
//!
//! // Creating non-empty containers
//! let vec = NonEmptyVec::singleton(42);
//! let string = NonEmptyString::try_from("Hello").unwrap();
//!
//! // Operations that would make the container empty are prevented
//! let mut vec = non_empty_vec![1, 2];
//! assert_eq!(vec.pop(), Some(2)); // Allowed - vec still contains [1]
//! assert_eq!(vec.pop(), None);    // Prevented - would make vec empty
//! ```

pub mod error;
pub mod map;
pub mod set;
pub mod vec;

mod non_empty;
mod string;

pub use self::{
	error::Error,
	map::{Lookup, Map, NonEmptyBTreeMap, NonEmptyHashMap},
	non_empty::{NonEmpty, Tail},
	set::NonEmptySet,
	string::NonEmptyString,
	vec::{NonEmptyVec, Position},
};

/// Creates a [`NonEmptyVec`] containing the arguments, the first one becoming the head
///
/// ```
/// use non_non_full::non_empty_vec;
///
/// let vec = non_empty_vec![1, 2, 3];
/// assert_eq!(vec.head(), &1);
/// assert_eq!(vec.tail(), &[2, 3]);
/// ```
#[macro_export]
macro_rules! non_empty_vec {
	($head:expr $(, $tail:expr)* $(,)?) => {
		$crate::NonEmptyVec::new($head, ::std::vec![$($tail),*])
	};
}
