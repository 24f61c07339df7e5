// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The emptiness predicate that gates every fallback in the engine.
//!
//! A value is "empty" when it is absent, null, an empty string, a NaN number,
//! or a structured value with no elements. Dates are structured values too,
//! but they are never considered empty.

use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

/// Values that can be tested for emptiness.
pub trait IsNotEmpty {
	/// Returns `false` for absent, null, empty, NaN or element-less values.
	fn is_not_empty(&self) -> bool;
}

/// Free-function form of [`IsNotEmpty::is_not_empty`].
///
/// # Example
///
/// ```
/// use ov_common_i18n::is_not_empty;
///
/// assert!(is_not_empty("hello"));
/// assert!(!is_not_empty(""));
/// assert!(!is_not_empty(&None::<String>));
/// assert!(!is_not_empty(&f64::NAN));
/// assert!(!is_not_empty(&Vec::<u8>::new()));
/// ```
pub fn is_not_empty<T: IsNotEmpty + ?Sized>(value: &T) -> bool {
	value.is_not_empty()
}

impl IsNotEmpty for str {
	fn is_not_empty(&self) -> bool {
		!self.is_empty()
	}
}

impl IsNotEmpty for String {
	fn is_not_empty(&self) -> bool {
		!self.is_empty()
	}
}

impl<T: IsNotEmpty + ?Sized> IsNotEmpty for &T {
	fn is_not_empty(&self) -> bool {
		(**self).is_not_empty()
	}
}

impl<T: IsNotEmpty> IsNotEmpty for Option<T> {
	fn is_not_empty(&self) -> bool {
		self.as_ref().is_some_and(IsNotEmpty::is_not_empty)
	}
}

impl IsNotEmpty for f64 {
	fn is_not_empty(&self) -> bool {
		!self.is_nan()
	}
}

impl IsNotEmpty for f32 {
	fn is_not_empty(&self) -> bool {
		!self.is_nan()
	}
}

macro_rules! always_present {
	($($ty:ty),* $(,)?) => {
		$(
			impl IsNotEmpty for $ty {
				fn is_not_empty(&self) -> bool {
					true
				}
			}
		)*
	};
}

always_present!(bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
always_present!(NaiveDate, NaiveDateTime);

impl<Tz: TimeZone> IsNotEmpty for DateTime<Tz> {
	fn is_not_empty(&self) -> bool {
		true
	}
}

impl<T> IsNotEmpty for [T] {
	fn is_not_empty(&self) -> bool {
		!self.is_empty()
	}
}

impl<T> IsNotEmpty for Vec<T> {
	fn is_not_empty(&self) -> bool {
		!self.is_empty()
	}
}

impl<K, V, S> IsNotEmpty for HashMap<K, V, S> {
	fn is_not_empty(&self) -> bool {
		!self.is_empty()
	}
}

impl<T, S> IsNotEmpty for HashSet<T, S> {
	fn is_not_empty(&self) -> bool {
		!self.is_empty()
	}
}

impl<K, V> IsNotEmpty for BTreeMap<K, V> {
	fn is_not_empty(&self) -> bool {
		!self.is_empty()
	}
}

impl IsNotEmpty for serde_json::Value {
	fn is_not_empty(&self) -> bool {
		use serde_json::Value;

		match self {
			Value::Null => false,
			Value::String(s) => !s.is_empty(),
			Value::Number(n) => n.as_f64().map_or(true, |f| !f.is_nan()),
			Value::Array(items) => !items.is_empty(),
			Value::Object(map) => !map.is_empty(),
			Value::Bool(_) => true,
		}
	}
}
