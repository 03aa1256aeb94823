use std::collections::BTreeSet;

use crate::types::{Record, RowKey};

/// Set of selected rows, tracked by row identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
	keys: BTreeSet<RowKey>,
}

impl Selection {
	#[must_use]
	pub fn contains(&self, key: &RowKey) -> bool {
		self.keys.contains(key)
	}

	/// Flip membership of `key`. Returns whether it is now selected.
	pub fn toggle(&mut self, key: RowKey) -> bool {
		if self.keys.remove(&key) {
			false
		} else {
			self.keys.insert(key);
			true
		}
	}

	pub fn select_all<I: IntoIterator<Item = RowKey>>(&mut self, keys: I) {
		self.keys.extend(keys);
	}

	pub fn clear(&mut self) {
		self.keys.clear();
	}

	/// Drop keys that are not in `present`.
	pub fn retain_present(&mut self, present: &[RowKey]) {
		let present = present.iter().collect::<BTreeSet<_>>();
		self.keys.retain(|key| present.contains(key));
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.keys.is_empty()
	}

	/// Number of `keys` that are selected.
	#[must_use]
	pub fn count_in(&self, keys: &[RowKey]) -> usize {
		keys.iter().filter(|key| self.keys.contains(key)).count()
	}
}

/// Identity of every record in `data`, in dataset order.
#[must_use]
pub fn row_keys<R: Record>(data: &[R]) -> Vec<RowKey> {
	data.iter()
		.enumerate()
		.map(|(position, record)| record.row_key(position))
		.collect()
}
