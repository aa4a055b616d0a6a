use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Punctuation in collation order, before symbols, digits, and letters.
const PUNCTUATION_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~";

fn is_currency(c: char) -> bool {
	matches!(c, '$' | '\u{a2}'..='\u{a5}' | '\u{20a0}'..='\u{20cf}')
}

/// Primary collation weight: character class first, then position within the class.
fn primary_weight(c: char) -> (u8, u32) {
	if c.is_whitespace() {
		(0, c as u32)
	} else if let Some(pos) = PUNCTUATION_ORDER.find(c) {
		(1, pos as u32)
	} else if is_currency(c) {
		(3, c as u32)
	} else if c.is_numeric() {
		(4, c as u32)
	} else if c.is_alphabetic() {
		let folded = c.to_lowercase().next().unwrap_or(c);
		(5, folded as u32)
	} else {
		(2, c as u32)
	}
}

/// Decomposed weights of one string, one slot per base character.
#[derive(Default)]
struct CollationKey {
	primary: Vec<(u8, u32)>,
	accents: Vec<Vec<char>>,
	uppercase: Vec<bool>,
}

impl CollationKey {
	fn new(text: &str) -> Self {
		let mut key = Self::default();
		for c in text.nfd() {
			if is_combining_mark(c) {
				match key.accents.last_mut() {
					Some(marks) => marks.push(c),
					None => {
						key.primary.push(primary_weight(c));
						key.accents.push(Vec::new());
						key.uppercase.push(false);
					}
				}
				continue;
			}
			key.primary.push(primary_weight(c));
			key.accents.push(Vec::new());
			key.uppercase.push(c.is_uppercase());
		}
		key
	}
}

/// Compare two strings the way a browser's default `localeCompare` orders them for common
/// locales.
///
/// Strings are decomposed first so accented letters sort with their base letter. Base letters
/// compare case-insensitively, punctuation sorts before symbols, currency, digits and letters.
/// Ties are broken by accents (unaccented first), then case (lowercase first).
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
	let (ka, kb) = (CollationKey::new(a), CollationKey::new(b));
	ka.primary
		.cmp(&kb.primary)
		.then_with(|| ka.accents.cmp(&kb.accents))
		.then_with(|| ka.uppercase.cmp(&kb.uppercase))
		.then_with(|| a.cmp(b))
}

/// Escape text for use inside an element body.
pub fn escape_text(text: &str) -> String {
	let mut escaped = String::with_capacity(text.len());
	for ch in text.chars() {
		match ch {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			_ => escaped.push(ch),
		}
	}
	escaped
}

/// Escape text for use inside a double-quoted attribute value.
pub fn escape_attr(text: &str) -> String {
	escape_text(text).replace('"', "&quot;")
}
