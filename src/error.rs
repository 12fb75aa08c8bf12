/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains [`Error`] that is returned by all fallible constructors of [`NonEmpty`](`crate::NonEmpty`)

/// An error that happened while building a [`NonEmpty`](`crate::NonEmpty`) from external data
#[derive(thiserror::Error, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Error {
	/// The input contained no elements at all, so there was nothing to put into the head
	#[error("required value missing: expected at least one element")]
	Empty,

	/// The key of the head entry is already present in the tail map
	#[error("the key of the head entry is already present in the tail")]
	DuplicateKey,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn error_messages() {
		assert_eq!(
			Error::Empty.to_string(),
			"required value missing: expected at least one element"
		);
		assert_eq!(
			Error::DuplicateKey.to_string(),
			"the key of the head entry is already present in the tail"
		);
	}
}
