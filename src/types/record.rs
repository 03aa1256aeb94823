use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use super::Value;

/// Stable identity of a row, used to track selection across re-sorts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RowKey {
	/// Position of the record in the caller's dataset.
	Position(usize),
	/// Caller-supplied identifier.
	Id(String),
}

/// A mapping of field names to displayable values.
///
/// The table never mutates records; it only reads field values for sorting
/// and display. Records that carry a natural identifier should override
/// [`Record::row_key`] so that selections survive dataset reloads.
pub trait Record {
	/// Return the value for `key`, or [`Value::Null`] when the field is absent.
	fn value(&self, key: &str) -> Value;

	/// Identity of this record at `position` in the dataset.
	fn row_key(&self, position: usize) -> RowKey {
		RowKey::Position(position)
	}
}

impl Record for BTreeMap<String, Value> {
	fn value(&self, key: &str) -> Value {
		self.get(key).cloned().unwrap_or_default()
	}
}

impl<S: BuildHasher> Record for HashMap<String, Value, S> {
	fn value(&self, key: &str) -> Value {
		self.get(key).cloned().unwrap_or_default()
	}
}

impl Record for serde_json::Map<String, serde_json::Value> {
	fn value(&self, key: &str) -> Value {
		self.get(key).map(Value::from).unwrap_or_default()
	}
}

impl<R: Record + ?Sized> Record for &R {
	fn value(&self, key: &str) -> Value {
		(**self).value(key)
	}

	fn row_key(&self, position: usize) -> RowKey {
		(**self).row_key(position)
	}
}
