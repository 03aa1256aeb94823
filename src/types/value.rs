use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Primitive cell value held by a record field.
///
/// Values deserialize from JSON scalars (`null`, booleans, numbers and
/// strings). Converting a `serde_json::Value` with [`From`] also accepts
/// arrays and objects, keeping their serialized text as [`Value::Text`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
	#[default]
	Null,
	Bool(bool),
	Int(i64),
	Float(f64),
	Text(String),
}

impl Value {
	/// Return `true` for [`Value::Null`].
	#[must_use]
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// Numeric view of the value, if it is a number.
	#[must_use]
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Self::Int(value) => Some(*value as f64),
			Self::Float(value) => Some(*value),
			_ => None,
		}
	}

	#[must_use]
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Text(value) => Some(value),
			_ => None,
		}
	}

	#[must_use]
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(value) => Some(*value),
			_ => None,
		}
	}

	fn rank(&self) -> u8 {
		match self {
			Self::Null => 0,
			Self::Bool(_) => 1,
			Self::Int(_) | Self::Float(_) => 2,
			Self::Text(_) => 3,
		}
	}

	/// Total ordering used when sorting table columns.
	///
	/// Values of different kinds order as `Null < Bool < number < Text`.
	/// Integers and floats compare exactly with each other. Floats use the
	/// IEEE total order so `NaN` sorts deterministically, except that `-0.0`
	/// equals `0.0`.
	#[must_use]
	pub fn total_cmp(&self, other: &Self) -> Ordering {
		match (self, other) {
			(Self::Null, Self::Null) => Ordering::Equal,
			(Self::Bool(a), Self::Bool(b)) => a.cmp(b),
			(Self::Int(a), Self::Int(b)) => a.cmp(b),
			(Self::Text(a), Self::Text(b)) => a.cmp(b),
			(Self::Int(a), Self::Float(b)) => cmp_int_float(*a, *b),
			(Self::Float(a), Self::Int(b)) => cmp_int_float(*b, *a).reverse(),
			(Self::Float(a), Self::Float(b)) if a == b => Ordering::Equal,
			(Self::Float(a), Self::Float(b)) => a.total_cmp(b),
			(a, b) => a.rank().cmp(&b.rank()),
		}
	}
}

/// `2^63`, the first float above every `i64`.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Compare without rounding `int` through `f64`.
fn cmp_int_float(int: i64, float: f64) -> Ordering {
	if float.is_nan() {
		return if float.is_sign_negative() {
			Ordering::Greater
		} else {
			Ordering::Less
		};
	}
	if float >= I64_LIMIT {
		return Ordering::Less;
	}
	if float < -I64_LIMIT {
		return Ordering::Greater;
	}

	// In range, so the truncated float is an exact i64.
	let whole = float.trunc() as i64;
	int.cmp(&whole).then_with(|| {
		let fract = float.fract();
		if fract > 0.0 {
			Ordering::Less
		} else if fract < 0.0 {
			Ordering::Greater
		} else {
			Ordering::Equal
		}
	})
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Null => Ok(()),
			Self::Bool(value) => write!(f, "{value}"),
			Self::Int(value) => write!(f, "{value}"),
			Self::Float(value)
				if value.fract() == 0.0 && (-I64_LIMIT..I64_LIMIT).contains(value) =>
			{
				write!(f, "{}", *value as i64)
			}
			Self::Float(value) => write!(f, "{value}"),
			Self::Text(value) => f.write_str(value),
		}
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}

impl From<i32> for Value {
	fn from(value: i32) -> Self {
		Self::Int(i64::from(value))
	}
}

impl From<u32> for Value {
	fn from(value: u32) -> Self {
		Self::Int(i64::from(value))
	}
}

impl From<usize> for Value {
	fn from(value: usize) -> Self {
		i64::try_from(value).map_or(Self::Float(value as f64), Self::Int)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Null, Into::into)
	}
}

impl From<&serde_json::Value> for Value {
	fn from(value: &serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => Self::Null,
			serde_json::Value::Bool(value) => Self::Bool(*value),
			serde_json::Value::Number(number) => match number.as_i64() {
				Some(value) => Self::Int(value),
				None => number.as_f64().map_or(Self::Null, Self::Float),
			},
			serde_json::Value::String(value) => Self::Text(value.clone()),
			other => Self::Text(other.to_string()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn null_renders_as_empty_text() {
		assert_eq!(Value::Null.to_string(), "");
	}

	#[test]
	fn integral_floats_drop_the_fraction() {
		assert_eq!(Value::Float(4.0).to_string(), "4");
		assert_eq!(Value::Float(1299.99).to_string(), "1299.99");
		assert_eq!(Value::Float(4.5).to_string(), "4.5");
	}

	#[test]
	fn large_integral_floats_keep_their_digits() {
		assert_eq!(Value::Float(1e20).to_string(), "100000000000000000000");
		assert_eq!(Value::Float(-1e20).to_string(), "-100000000000000000000");
		assert_eq!(Value::Float(-0.0).to_string(), "0");
	}

	#[test]
	fn mixed_numbers_compare_numerically() {
		assert_eq!(Value::Int(2).total_cmp(&Value::Float(1.5)), Ordering::Greater);
		assert_eq!(Value::Float(2.0).total_cmp(&Value::Int(2)), Ordering::Equal);
		assert_eq!(Value::Int(-2).total_cmp(&Value::Float(-1.5)), Ordering::Less);
		assert_eq!(Value::Int(-1).total_cmp(&Value::Float(-1.5)), Ordering::Greater);
		assert_eq!(Value::Int(0).total_cmp(&Value::Float(-0.0)), Ordering::Equal);
		assert_eq!(Value::Int(i64::MAX).total_cmp(&Value::Float(1e19)), Ordering::Less);
		assert_eq!(Value::Int(i64::MIN).total_cmp(&Value::Float(f64::NEG_INFINITY)), Ordering::Greater);
		assert_eq!(Value::Int(i64::MAX).total_cmp(&Value::Float(f64::NAN)), Ordering::Less);
	}

	#[test]
	fn integers_beyond_float_precision_sort_exactly() {
		let base = 1_i64 << 53;
		let mut values = (0..120)
			.rev()
			.map(|step| {
				if step % 3 == 0 {
					Value::Float((base + step) as f64)
				} else {
					Value::Int(base + step)
				}
			})
			.collect::<Vec<_>>();
		values.sort_by(Value::total_cmp);

		let ints = values
			.iter()
			.filter_map(|value| match value {
				Value::Int(int) => Some(*int),
				_ => None,
			})
			.collect::<Vec<_>>();
		assert!(ints.windows(2).all(|pair| pair[0] < pair[1]));
		for pair in values.windows(2) {
			assert_ne!(pair[0].total_cmp(&pair[1]), Ordering::Greater);
		}
	}

	#[test]
	fn kinds_order_null_bool_number_text() {
		let mut values = vec![
			Value::from("a"),
			Value::Int(1),
			Value::Bool(true),
			Value::Null,
		];
		values.sort_by(Value::total_cmp);
		assert_eq!(
			values,
			vec![
				Value::Null,
				Value::Bool(true),
				Value::Int(1),
				Value::from("a")
			]
		);
	}

	#[test]
	fn deserializes_from_json_scalars() {
		let values: Vec<Value> = serde_json::from_str(r#"[null, true, 3, 2.5, "x"]"#).unwrap();
		assert_eq!(
			values,
			vec![
				Value::Null,
				Value::Bool(true),
				Value::Int(3),
				Value::Float(2.5),
				Value::from("x"),
			]
		);
	}

	#[test]
	fn composite_json_values_keep_their_text() {
		let json = serde_json::json!({ "tags": ["a", "b"] });
		assert_eq!(Value::from(&json["tags"]).to_string(), r#"["a","b"]"#);
	}
}
