//! Grapheme-aware editing of a single line of text.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

pub(super) const MASK: &str = "•";

pub(super) fn grapheme_count(value: &str) -> usize {
	value.graphemes(true).count()
}

/// Byte offset of grapheme `index`, or the end of `value`.
fn byte_offset(value: &str, index: usize) -> usize {
	value
		.grapheme_indices(true)
		.nth(index)
		.map_or(value.len(), |(offset, _)| offset)
}

/// Insert `ch` at grapheme `cursor`, returning the new text and the cursor
/// just past the inserted character.
///
/// A combining character joins the grapheme before it, so the cursor only
/// moves when the grapheme count does.
pub(super) fn insert(value: &str, cursor: usize, ch: char) -> (String, usize) {
	let offset = byte_offset(value, cursor);
	let mut next = String::with_capacity(value.len() + ch.len_utf8());
	next.push_str(&value[..offset]);
	next.push(ch);
	let cursor = grapheme_count(&next);
	next.push_str(&value[offset..]);
	(next, cursor)
}

/// Remove the grapheme at `index`, if there is one.
pub(super) fn remove(value: &str, index: usize) -> Option<String> {
	let start = byte_offset(value, index);
	if start == value.len() {
		return None;
	}
	let end = byte_offset(value, index + 1);
	Some(format!("{}{}", &value[..start], &value[end..]))
}

/// Text as displayed: one mask glyph per grapheme when masked.
pub(super) fn display(value: &str, masked: bool) -> String {
	if masked {
		MASK.repeat(grapheme_count(value))
	} else {
		value.to_string()
	}
}

/// Terminal width of the first `cursor` graphemes of `text`.
pub(super) fn width_before(text: &str, cursor: usize) -> usize {
	text.graphemes(true)
		.take(cursor)
		.map(UnicodeWidthStr::width)
		.sum()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn inserts_at_grapheme_boundaries() {
		assert_eq!(insert("héllo", 2, 'X'), ("héXllo".to_string(), 3));
		assert_eq!(insert("ab", 9, 'c'), ("abc".to_string(), 3));
		assert_eq!(insert("eb", 1, '\u{301}'), ("e\u{301}b".to_string(), 1));
	}

	#[test]
	fn removes_whole_graphemes() {
		assert_eq!(remove("ae\u{301}b", 1).as_deref(), Some("ab"));
		assert_eq!(remove("ab", 2), None);
	}

	#[test]
	fn masking_counts_graphemes() {
		assert_eq!(display("e\u{301}x", true), "••");
		assert_eq!(display("secret", false), "secret");
	}

	#[test]
	fn wide_graphemes_count_double() {
		assert_eq!(width_before("日本a", 2), 4);
	}
}
