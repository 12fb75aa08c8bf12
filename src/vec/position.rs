/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains [`Position`], an index into a [`NonEmptyVec`](`crate::NonEmptyVec`)

/// A position of an element of a [`NonEmptyVec`](`crate::NonEmptyVec`).
///
/// The head comes before every tail position, and tail positions are ordered by their index in the tail
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Position {
	/// The head
	Head,

	/// An index into the tail
	Tail(usize),
}

impl Position {
	/// Returns the position that comes right after this one
	#[must_use]
	pub const fn next(self) -> Self {
		match self {
			Self::Head => Self::Tail(0),
			Self::Tail(idx) => Self::Tail(idx + 1),
		}
	}

	/// Returns the index this position would have if the head was stored together with the tail
	#[must_use]
	pub const fn flat_index(self) -> usize {
		match self {
			Self::Head => 0,
			Self::Tail(idx) => idx + 1,
		}
	}
}

impl From<usize> for Position {
	/// Converts a flat index, where 0 is the head, into a [`Position`]
	fn from(flat_index: usize) -> Self {
		match flat_index.checked_sub(1) {
			None => Self::Head,
			Some(idx) => Self::Tail(idx),
		}
	}
}
