/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This module contains [`NonEmptyString`], the text view of [`NonEmpty`]

use std::{fmt, iter, str::FromStr};

use crate::{Error, NonEmpty};

/// A string that is guaranteed to contain at least one char.
///
/// The first char is kept in the head and the rest of the text in the tail.
///
/// # Examples
///
/// ```
/// use non_non_full::NonEmptyString;
///
/// let string = NonEmptyString::try_from("Hello").unwrap();
/// assert_eq!(string.to_uppercase().to_string(), "HELLO");
///
/// // Empty strings are rejected
/// assert!(NonEmptyString::from_string(String::new()).is_none());
/// ```
pub type NonEmptyString = NonEmpty<char, String>;

impl NonEmpty<char, String> {
	/// Creates a new [`NonEmptyString`] from the first char and the rest of the text
	pub fn new(head: char, tail: String) -> Self {
		Self::from_parts(head, tail)
	}

	/// Creates a new [`NonEmptyString`] from a [`String`].
	///
	/// Returns [`None`] if the input [`String`] is empty.
	pub fn from_string(mut string: String) -> Option<Self> {
		if string.is_empty() {
			return None;
		}

		let head = string.remove(0);
		Some(Self::from_parts(head, string))
	}

	/// Creates a new [`NonEmptyString`] from the textual representation of `value`
	///
	/// # Errors
	/// [`Error::Empty`] if `value` is rendered as an empty string
	pub fn from_display<D>(value: &D) -> Result<Self, Error>
	where
		D: fmt::Display + ?Sized,
	{
		Self::from_string(value.to_string()).ok_or(Error::Empty)
	}

	/// Converts the [`NonEmptyString`] back into a [`String`], consuming self
	pub fn into_string(self) -> String {
		let (head, mut string) = self.into_parts();
		string.insert(0, head);
		string
	}

	/// Returns the first char
	pub fn first(&self) -> char {
		self.head
	}

	/// Returns the last char
	pub fn last(&self) -> char {
		self.tail.chars().next_back().unwrap_or(self.head)
	}

	/// Returns an iterator over the chars of the string
	pub fn chars(&self) -> iter::Chain<iter::Once<char>, std::str::Chars<'_>> {
		iter::once(self.head).chain(self.tail.chars())
	}

	/// Pushes a char onto the end of the string
	pub fn push(&mut self, ch: char) {
		self.tail.push(ch);
	}

	/// Pushes a string slice onto the end of the string
	pub fn push_str(&mut self, string: &str) {
		self.tail.push_str(string);
	}

	/// Removes the last char from the string.
	///
	/// Returns None if this would make the string empty.
	pub fn pop(&mut self) -> Option<char> {
		self.tail.pop()
	}

	/// Clears all chars except the first one
	pub fn clear_except_first(&mut self) {
		self.tail.clear();
	}

	/// Returns the lowercase equivalent of this string.
	///
	/// The head and the tail are converted separately
	#[must_use]
	pub fn to_lowercase(&self) -> Self {
		Self::recased(self.head, self.head.to_lowercase(), self.tail.to_lowercase())
	}

	/// Returns the uppercase equivalent of this string.
	///
	/// The head and the tail are converted separately
	#[must_use]
	pub fn to_uppercase(&self) -> Self {
		Self::recased(self.head, self.head.to_uppercase(), self.tail.to_uppercase())
	}

	/// Builds a string out of a case-converted head and tail.
	///
	/// Case conversion may turn a single char into several, e.g. `ß` into `SS`,
	/// in which case all but the first one are moved to the front of the tail
	fn recased(original_head: char, head: impl Iterator<Item = char>, tail: String) -> Self {
		let mut head = head;
		let first = head.next().unwrap_or(original_head);

		let mut rest = head.collect::<String>();
		rest.push_str(&tail);

		Self::from_parts(first, rest)
	}
}

impl TryFrom<String> for NonEmpty<char, String> {
	type Error = Error;

	fn try_from(string: String) -> Result<Self, Self::Error> {
		Self::from_string(string).ok_or(Error::Empty)
	}
}

impl TryFrom<&str> for NonEmpty<char, String> {
	type Error = Error;

	fn try_from(string: &str) -> Result<Self, Self::Error> {
		string.parse()
	}
}

impl FromStr for NonEmpty<char, String> {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let mut chars = s.chars();
		let head = chars.next().ok_or(Error::Empty)?;

		Ok(Self::from_parts(head, chars.as_str().to_owned()))
	}
}

impl From<NonEmpty<char, String>> for String {
	fn from(string: NonEmpty<char, String>) -> Self {
		string.into_string()
	}
}

impl PartialEq<str> for NonEmpty<char, String> {
	fn eq(&self, other: &str) -> bool {
		self.chars().eq(other.chars())
	}
}

impl PartialEq<&str> for NonEmpty<char, String> {
	fn eq(&self, other: &&str) -> bool {
		*self == **other
	}
}

/// Renders the head immediately followed by the tail, i.e. the whole string as is
impl fmt::Display for NonEmpty<char, String> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}{}", self.head, self.tail)
	}
}

#[cfg(feature = "serde")]
impl serde::Serialize for NonEmpty<char, String> {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.collect_str(self)
	}
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for NonEmpty<char, String> {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		use serde::Deserialize;

		let string = String::deserialize(deserializer)?;
		NonEmptyString::from_string(string).ok_or_else(|| serde::de::Error::custom(Error::Empty))
	}
}
