/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! This test checks that every container is encoded as a flat sequence and that decoding an empty one fails

#![allow(clippy::missing_assert_message)]
#![allow(clippy::tests_outside_test_module)]
#![allow(clippy::unwrap_used)]

use std::collections::{BTreeMap, BTreeSet, HashMap};

use non_non_full::{NonEmptyBTreeMap, NonEmptyHashMap, NonEmptySet, NonEmptyString, NonEmptyVec, non_empty_vec};
use proptest::{collection::vec, prelude::*};

#[test]
fn vec_decodes_head_first() {
	let vec: NonEmptyVec<i32> = serde_json::from_str("[7, 8, 9]").unwrap();
	assert_eq!(vec.head(), &7);
	assert_eq!(vec.tail(), &[8, 9]);
}

#[test]
fn vec_encodes_flat() {
	assert_eq!(serde_json::to_string(&non_empty_vec![1, 2, 3]).unwrap(), "[1,2,3]");
	assert_eq!(serde_json::to_string(&NonEmptyVec::singleton("a")).unwrap(), r#"["a"]"#);
}

#[test]
fn empty_vec_fails() {
	let err = serde_json::from_str::<NonEmptyVec<i32>>("[]").unwrap_err();
	assert!(err.to_string().contains("required value missing"), "{err}");
}

#[test]
fn set_decoding_normalises_head() {
	let set: NonEmptySet<i32> = serde_json::from_str("[5, 3, 9, 3]").unwrap();
	assert_eq!(set.head(), &3);
	assert_eq!(set.tail(), &BTreeSet::from([5, 9]));

	assert_eq!(serde_json::to_string(&set).unwrap(), "[3,5,9]");
	assert!(serde_json::from_str::<NonEmptySet<i32>>("[]").is_err());
}

#[test]
fn map_is_a_list_of_entries() {
	let map: NonEmptyBTreeMap<String, u32> = serde_json::from_str(r#"[["a", 1], ["b", 2]]"#).unwrap();
	assert_eq!(map.head(), &("a".to_owned(), 1));
	assert_eq!(map.tail(), &BTreeMap::from([("b".to_owned(), 2)]));

	assert_eq!(serde_json::to_string(&map).unwrap(), r#"[["a",1],["b",2]]"#);
}

#[test]
fn map_decoding_errors() {
	let empty = serde_json::from_str::<NonEmptyHashMap<String, u32>>("[]").unwrap_err();
	assert!(empty.to_string().contains("required value missing"), "{empty}");

	let duplicate = serde_json::from_str::<NonEmptyHashMap<String, u32>>(r#"[["a", 1], ["a", 2]]"#).unwrap_err();
	assert!(duplicate.to_string().contains("already present"), "{duplicate}");
}

#[test]
fn map_round_trip() {
	let map = NonEmptyHashMap::new(1, 'a', HashMap::from([(2, 'b'), (3, 'c')]));
	let json = serde_json::to_string(&map).unwrap();
	let decoded: NonEmptyHashMap<i32, char> = serde_json::from_str(&json).unwrap();

	assert_eq!(decoded, map);
	assert_eq!(decoded.head(), &(1, 'a'));
}

#[test]
fn string_is_a_plain_string() {
	let string: NonEmptyString = serde_json::from_str(r#""héllo""#).unwrap();
	assert_eq!(string.head(), &'h');
	assert_eq!(string, "héllo");
	assert_eq!(serde_json::to_string(&string).unwrap(), r#""héllo""#);

	let err = serde_json::from_str::<NonEmptyString>(r#""""#).unwrap_err();
	assert!(err.to_string().contains("required value missing"), "{err}");
}

proptest! {
	#[test]
	fn vec_round_trip(head in any::<i64>(), tail in vec(any::<i64>(), 0..32)) {
		let original = NonEmptyVec::new(head, tail);
		let json = serde_json::to_string(&original).unwrap();
		prop_assert_eq!(serde_json::from_str::<NonEmptyVec<i64>>(&json).unwrap(), original);
	}

	#[test]
	fn string_round_trip(string in ".+") {
		let original = NonEmptyString::try_from(string.as_str()).unwrap();
		let json = serde_json::to_string(&original).unwrap();
		prop_assert_eq!(serde_json::from_str::<NonEmptyString>(&json).unwrap(), original);
	}
}
