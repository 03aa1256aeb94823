use std::fmt;

use crate::types::{Record, Value};

/// Direction of the active sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
	#[default]
	Ascending,
	Descending,
}

impl SortDirection {
	#[must_use]
	pub fn toggled(self) -> Self {
		match self {
			Self::Ascending => Self::Descending,
			Self::Descending => Self::Ascending,
		}
	}

	/// Header glyph for this direction.
	#[must_use]
	pub fn indicator(self) -> &'static str {
		match self {
			Self::Ascending => "▲",
			Self::Descending => "▼",
		}
	}
}

impl fmt::Display for SortDirection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Ascending => "ascending",
			Self::Descending => "descending",
		})
	}
}

/// Which column, if any, drives the row order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
	key: Option<String>,
	direction: SortDirection,
}

impl SortState {
	#[must_use]
	pub fn key(&self) -> Option<&str> {
		self.key.as_deref()
	}

	#[must_use]
	pub fn direction(&self) -> SortDirection {
		self.direction
	}

	#[must_use]
	pub fn is_active(&self, key: &str) -> bool {
		self.key.as_deref() == Some(key)
	}

	/// Direction that activating `key` would apply.
	#[must_use]
	pub fn next_direction(&self, key: &str) -> SortDirection {
		if self.is_active(key) && self.direction == SortDirection::Ascending {
			SortDirection::Descending
		} else {
			SortDirection::Ascending
		}
	}

	/// Activate `key`: the active column flips direction, any other column
	/// starts ascending.
	pub fn activate(&mut self, key: &str) {
		self.direction = self.next_direction(key);
		if !self.is_active(key) {
			self.key = Some(key.to_string());
		}
	}

	/// Order `data` by the active column.
	///
	/// Returns positions into `data`. The sort is stable in both directions,
	/// so records with equal keys keep their dataset order.
	#[must_use]
	pub fn apply<R: Record>(&self, data: &[R]) -> Vec<usize> {
		let mut view = (0..data.len()).collect::<Vec<_>>();
		let Some(key) = self.key.as_deref() else {
			return view;
		};

		let keys = data.iter().map(|record| record.value(key)).collect::<Vec<Value>>();
		view.sort_by(|&a, &b| {
			let ordering = keys[a].total_cmp(&keys[b]);
			match self.direction {
				SortDirection::Ascending => ordering,
				SortDirection::Descending => ordering.reverse(),
			}
		});
		view
	}
}

#[cfg(test)]
mod tests {
	use std::collections::BTreeMap;

	use super::*;

	type Row = BTreeMap<String, Value>;

	fn rows(values: &[(i64, &str)]) -> Vec<Row> {
		values
			.iter()
			.map(|(id, group)| {
				BTreeMap::from([
					("id".to_string(), Value::Int(*id)),
					("group".to_string(), Value::from(*group)),
				])
			})
			.collect()
	}

	#[test]
	fn unsorted_view_is_dataset_order() {
		let data = rows(&[(3, "a"), (1, "b")]);
		assert_eq!(SortState::default().apply(&data), vec![0, 1]);
	}

	#[test]
	fn same_column_alternates_direction() {
		let mut state = SortState::default();
		state.activate("id");
		assert_eq!(state.direction(), SortDirection::Ascending);
		state.activate("id");
		assert_eq!(state.direction(), SortDirection::Descending);
		state.activate("id");
		assert_eq!(state.direction(), SortDirection::Ascending);
	}

	#[test]
	fn new_column_resets_to_ascending() {
		let mut state = SortState::default();
		state.activate("id");
		state.activate("id");
		state.activate("group");
		assert_eq!(state.key(), Some("group"));
		assert_eq!(state.direction(), SortDirection::Ascending);
	}

	#[test]
	fn ids_sort_both_ways() {
		let data = rows(&[(3, "x"), (1, "x"), (2, "x")]);
		let mut state = SortState::default();
		state.activate("id");
		assert_eq!(state.apply(&data), vec![1, 2, 0]);
		state.activate("id");
		assert_eq!(state.apply(&data), vec![0, 2, 1]);
	}

	#[test]
	fn equal_keys_keep_dataset_order_in_both_directions() {
		let data = rows(&[(1, "b"), (2, "a"), (3, "b"), (4, "a")]);
		let mut state = SortState::default();
		state.activate("group");
		assert_eq!(state.apply(&data), vec![1, 3, 0, 2]);
		state.activate("group");
		assert_eq!(state.apply(&data), vec![0, 2, 1, 3]);
	}
}
